//! Docs Consumer
//!
//! Walks the documentation API of a running dev server: fetches the
//! architecture Markdown and the generated metadata, analyzes them, searches
//! the Markdown and verifies endpoint coverage. Any failure aborts the run
//! and exits with status 1.

use clap::{Parser, Subcommand};
use docs_consumer::config::{Config, Environment, FromEnv};
use docs_consumer::telemetry::{init_tracing, install_color_eyre};
use docs_consumer::{
    analyze, check_local_docs, export_metadata, load_metadata, report, save_to_file, verify,
    DocsClient,
};
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

const DEFAULT_QUERY: &str = "query parameters";

const SERVER_HINT: &str = "💡 Make sure the dev server is running: npm run dev";
const LOCAL_DOCS_HINT: &str =
    "💡 Run \"docs-consumer generate\" to preview documentation generated by the server";

#[derive(Parser)]
#[command(name = "docs-consumer", version)]
#[command(about = "Consume and cross-check the documentation API")]
struct Cli {
    /// Base URL of the docs API (overrides DOCS_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, analyze, search and verify in one pass (default)
    Run {
        /// Text to look for in the architecture document
        #[arg(short, long, default_value = DEFAULT_QUERY)]
        query: String,

        /// Save the architecture Markdown (default: DOCS_MARKDOWN_OUTPUT)
        #[arg(long, value_name = "PATH")]
        save_markdown: Option<Option<PathBuf>>,

        /// Export the generated metadata as JSON (default: DOCS_METADATA_OUTPUT)
        #[arg(long, value_name = "PATH")]
        export_metadata: Option<Option<PathBuf>>,
    },

    /// Search the architecture document
    Search {
        query: String,
    },

    /// Check that every generated endpoint appears in the architecture document
    Verify {
        /// Use a previously exported metadata file instead of fetching it
        #[arg(long, value_name = "PATH")]
        metadata: Option<PathBuf>,
    },

    /// Show the generated documentation summary and its Markdown rendering
    Generate,

    /// Check that a local architecture document exists and looks complete
    Check {
        /// File to inspect (default: DOCS_LOCAL_FILE)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            query: DEFAULT_QUERY.to_string(),
            save_markdown: None,
            export_metadata: None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    install_color_eyre();

    let cli = Cli::parse();
    init_tracing(&Environment::from_env());

    let command = cli.command.unwrap_or_default();
    let hint = match command {
        Commands::Check { .. } => LOCAL_DOCS_HINT,
        _ => SERVER_HINT,
    };

    match run(command, cli.base_url.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Docs consumer failed");
            eprintln!("\n❌ Failed: {err}");
            // Outer context only; the first cause already renders its own details
            if let Some(cause) = err.chain().nth(1) {
                eprintln!("   {cause}");
            }
            // Full color-eyre report (chain + location) at debug verbosity
            if tracing::enabled!(Level::DEBUG) {
                eprintln!("\n{err:?}");
            }
            eprintln!("\n{hint}");
            ExitCode::from(1)
        }
    }
}

async fn run(command: Commands, base_url: Option<&str>) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url)?;
    }

    let client = DocsClient::new(config.base_url.clone());
    info!(base_url = %config.base_url, "Using docs API");

    match command {
        Commands::Run {
            query,
            save_markdown,
            export_metadata: export_path,
        } => {
            println!("{}", report::banner());

            println!("\n📚 Fetching API Architecture Documentation...\n");
            let markdown = client
                .fetch_architecture_doc()
                .await
                .wrap_err("Error fetching documentation")?;
            println!("{}", report::architecture(&markdown));

            println!("\n🔧 Fetching Generated Documentation...\n");
            let generated = client
                .fetch_generated_doc()
                .await
                .wrap_err("Error fetching generated documentation")?;
            println!("{}", report::generated(&generated));

            println!("\n🤖 AI Analysis of API Architecture...\n");
            println!("{}", report::analysis(&analyze(&generated)));

            println!();
            println!("{}", report::search(&query, &markdown.search(&query)));

            println!("\n✅ Verifying Documentation Accuracy...\n");
            println!(
                "{}",
                report::verification(&verify(markdown.as_str(), &generated))
            );

            if let Some(path) = save_markdown {
                let path = path.unwrap_or_else(|| config.markdown_output.clone());
                println!("\n💾 Saving documentation to {}...", path.display());
                save_to_file(&markdown, &path)?;
                println!("✅ Saved successfully!");
            }

            if let Some(path) = export_path {
                let path = path.unwrap_or_else(|| config.metadata_output.clone());
                println!("\n💾 Exporting metadata to {}...", path.display());
                export_metadata(&generated, &path)?;
                println!("✅ Exported successfully!");
            }

            println!("{}", report::completion());
        }

        Commands::Search { query } => {
            let markdown = client
                .fetch_architecture_doc()
                .await
                .wrap_err("Error fetching documentation")?;
            println!("{}", report::search(&query, &markdown.search(&query)));
        }

        Commands::Verify { metadata } => {
            let markdown = client
                .fetch_architecture_doc()
                .await
                .wrap_err("Error fetching documentation")?;
            let generated = match metadata {
                Some(path) => load_metadata(&path)
                    .wrap_err_with(|| format!("Error loading {}", path.display()))?,
                None => client
                    .fetch_generated_doc()
                    .await
                    .wrap_err("Error fetching generated documentation")?,
            };

            println!("✅ Verifying Documentation Accuracy...\n");
            let coverage = verify(markdown.as_str(), &generated);
            println!("{}", report::verification(&coverage));
            info!(
                endpoints = coverage.endpoints.len(),
                missing = coverage.missing().count(),
                "Verification finished"
            );
        }

        Commands::Generate => {
            let generated = client
                .fetch_generated_doc()
                .await
                .wrap_err("Error generating documentation")?;

            println!("✅ Documentation generated successfully\n");
            println!("📊 Summary:");
            println!("{}\n", report::generated_summary(&generated));
            println!("{}", report::markdown_preview(&generated));
        }

        Commands::Check { file } => {
            let path = file.unwrap_or(config.local_docs_file);
            let check = check_local_docs(&path).wrap_err("Error reading documentation")?;
            println!("{}", report::local_check(&check));
        }
    }

    Ok(())
}
