//! Plain-text rendering of every result the CLI prints.
//!
//! Each function returns the finished block so callers decide where it goes;
//! the binary sends all of it to stdout.

use std::fmt::{self, Write};

use crate::analysis::ApiAnalysis;
use crate::local_docs::LocalDocsCheck;
use crate::markdown::SearchHit;
use crate::models::{ArchitectureDoc, GeneratedDoc};
use crate::verify::VerificationReport;

const RULE_WIDTH: usize = 70;
const PREVIEW_RULE_WIDTH: usize = 80;

fn render(body: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible
    let _ = body(&mut out);
    out
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn banner() -> String {
    render(|out| {
        writeln!(out, "🤖 AI Documentation Consumer\n")?;
        writeln!(out, "Consumes the documentation API and cross-checks it\n")?;
        write!(out, "{}", rule())
    })
}

pub fn completion() -> String {
    render(|out| {
        writeln!(out, "\n{}", rule())?;
        writeln!(out, "✅ Documentation consumer completed successfully!")?;
        write!(
            out,
            "\n💡 Use this pattern to integrate with AI agents, CI/CD, or other tools."
        )
    })
}

pub fn architecture(doc: &ArchitectureDoc) -> String {
    render(|out| {
        writeln!(out, "✅ Documentation fetched successfully!")?;
        writeln!(out, "📄 Size: {:.2} KB", doc.size_kb())?;
        writeln!(out, "📝 Lines: {}\n", doc.line_count())?;
        write!(out, "📋 Documentation Sections:")?;
        for section in doc.sections() {
            write!(out, "\n   - {section}")?;
        }
        Ok(())
    })
}

pub fn generated_summary(generated: &GeneratedDoc) -> String {
    render(|out| {
        writeln!(
            out,
            "🕒 Generated at: {}",
            generated.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "📡 Endpoints: {}", generated.endpoints.len())?;
        writeln!(out, "🔧 Utilities: {}", generated.utilities.len())?;
        write!(
            out,
            "📦 Type Interfaces: {}",
            generated.types.interfaces.len()
        )
    })
}

pub fn generated(generated: &GeneratedDoc) -> String {
    render(|out| {
        writeln!(out, "✅ Generated documentation fetched successfully!")?;
        writeln!(out, "{}\n", generated_summary(generated))?;

        write!(out, "📡 Available Endpoints:")?;
        for endpoint in &generated.endpoints {
            write!(out, "\n   {}", endpoint.signature())?;
            if !endpoint.query_params().is_empty() {
                write!(out, "\n      Params: {}", endpoint.query_params().join(", "))?;
            }
        }

        write!(out, "\n\n🔧 Server Utilities:")?;
        for util in &generated.utilities {
            write!(out, "\n   {}", util.file)?;
            write!(out, "\n      Functions: {}", util.functions.join(", "))?;
        }

        write!(out, "\n\n📦 Type Interfaces:")?;
        for iface in &generated.types.interfaces {
            write!(out, "\n   {}", iface.name)?;
            write!(out, "\n      Fields: {}", iface.fields.len())?;
        }
        Ok(())
    })
}

pub fn analysis(analysis: &ApiAnalysis) -> String {
    render(|out| {
        writeln!(out, "📊 API Analysis:")?;
        write!(out, "\n   HTTP Methods:")?;
        for entry in &analysis.methods {
            write!(out, "\n      {}: {} endpoint(s)", entry.method, entry.count)?;
        }

        write!(out, "\n\n   Key Components:")?;
        for status in &analysis.components {
            match status.functions {
                Some(count) => write!(
                    out,
                    "\n      ✓ {}: {} function(s)",
                    status.component.name, count
                )?,
                None => write!(out, "\n      ✗ {}: Not found", status.component.name)?,
            }
        }

        write!(out, "\n\n   Transaction Type:")?;
        match &analysis.transaction {
            Some(summary) => {
                write!(out, "\n      Fields: {}", summary.field_count)?;
                for field in &summary.preview {
                    write!(out, "\n         - {field}")?;
                }
                if summary.remaining > 0 {
                    write!(out, "\n         ... and {} more", summary.remaining)?;
                }
            }
            None => write!(out, "\n      Not found")?,
        }
        Ok(())
    })
}

pub fn search(query: &str, hits: &[SearchHit]) -> String {
    render(|out| {
        writeln!(out, "🔍 Searching documentation for: \"{query}\"\n")?;
        if hits.is_empty() {
            return write!(out, "   No results found.");
        }

        writeln!(out, "   Found {} occurrences:", hits.len())?;
        for hit in hits {
            write!(out, "\n   Line {}: {}", hit.line_number, hit.text)?;
        }
        Ok(())
    })
}

pub fn verification(report: &VerificationReport) -> String {
    render(|out| {
        write!(out, "   Checking endpoint coverage:")?;
        for entry in &report.endpoints {
            let mark = if entry.documented { "✓" } else { "✗" };
            write!(out, "\n      {mark} {}", entry.signature)?;
        }

        if report.all_documented() {
            write!(out, "\n\n   ✅ All endpoints are documented!")
        } else {
            write!(out, "\n\n   ⚠️  Some endpoints are missing from documentation")
        }
    })
}

pub fn markdown_preview(generated: &GeneratedDoc) -> String {
    render(|out| {
        let rule = "─".repeat(PREVIEW_RULE_WIDTH);
        match &generated.markdown {
            Some(markdown) => {
                writeln!(out, "📝 Preview (Markdown):\n")?;
                writeln!(out, "{rule}")?;
                writeln!(out, "{}", markdown.trim_end())?;
                write!(out, "{rule}")
            }
            None => write!(out, "⚠️  The server did not include a Markdown rendering"),
        }
    })
}

pub fn local_check(check: &LocalDocsCheck) -> String {
    render(|out| {
        writeln!(out, "✅ {} exists", check.path.display())?;
        write!(out, "📄 File size: {:.2} KB", check.size_kb)?;

        if check.is_complete() {
            write!(out, "\n✅ Documentation appears complete")
        } else {
            write!(out, "\n⚠️  Documentation may be incomplete:")?;
            for section in check.missing_sections() {
                write!(out, "\n   - Missing {section} section")?;
            }
            Ok(())
        }
    })
}
