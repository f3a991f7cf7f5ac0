//! Summary analytics over a generated document.
//!
//! Nothing here fails: missing components or interfaces are reported as
//! absent in the returned `ApiAnalysis`.

use serde::Serialize;

use crate::models::GeneratedDoc;

/// Interface whose shape is previewed in the analysis
pub const TRANSACTION_INTERFACE: &str = "Transaction";

/// Number of Transaction fields listed before truncating
pub const FIELD_PREVIEW_LIMIT: usize = 5;

/// Source files the server architecture is expected to be built around
pub const KEY_COMPONENTS: [KeyComponent; 4] = [
    KeyComponent {
        name: "Data Fetching",
        file: "googleSheets.ts",
    },
    KeyComponent {
        name: "Person Identification",
        file: "personIdentifier.ts",
    },
    KeyComponent {
        name: "Installment Processing",
        file: "installmentProcessor.ts",
    },
    KeyComponent {
        name: "Filtering",
        file: "transactionFilters.ts",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyComponent {
    pub name: &'static str,
    pub file: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodCount {
    pub method: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentStatus {
    pub component: KeyComponent,
    /// Exported function count of the matching utility, `None` when absent
    pub functions: Option<usize>,
}

impl ComponentStatus {
    pub fn is_found(&self) -> bool {
        self.functions.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSummary {
    pub name: String,
    pub field_count: usize,
    /// First `FIELD_PREVIEW_LIMIT` fields, trimmed
    pub preview: Vec<String>,
    /// Fields left out of `preview`
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiAnalysis {
    /// Endpoint count per HTTP method, in first-seen order
    pub methods: Vec<MethodCount>,
    pub components: Vec<ComponentStatus>,
    pub transaction: Option<InterfaceSummary>,
}

impl ApiAnalysis {
    pub fn total_endpoints(&self) -> usize {
        self.methods.iter().map(|m| m.count).sum()
    }
}

pub fn analyze(doc: &GeneratedDoc) -> ApiAnalysis {
    ApiAnalysis {
        methods: count_methods(doc),
        components: KEY_COMPONENTS
            .iter()
            .map(|component| ComponentStatus {
                component: *component,
                functions: doc.utility(component.file).map(|u| u.functions.len()),
            })
            .collect(),
        transaction: doc
            .interface(TRANSACTION_INTERFACE)
            .map(|iface| InterfaceSummary {
                name: iface.name.clone(),
                field_count: iface.fields.len(),
                preview: iface
                    .fields
                    .iter()
                    .take(FIELD_PREVIEW_LIMIT)
                    .map(|f| f.trim().to_string())
                    .collect(),
                remaining: iface.fields.len().saturating_sub(FIELD_PREVIEW_LIMIT),
            }),
    }
}

fn count_methods(doc: &GeneratedDoc) -> Vec<MethodCount> {
    let mut methods: Vec<MethodCount> = Vec::new();

    for endpoint in &doc.endpoints {
        match methods.iter_mut().find(|m| m.method == endpoint.method) {
            Some(entry) => entry.count += 1,
            None => methods.push(MethodCount {
                method: endpoint.method.clone(),
                count: 1,
            }),
        }
    }

    methods
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> GeneratedDoc {
        serde_json::from_value(value).unwrap()
    }

    fn endpoints(methods: &[&str]) -> serde_json::Value {
        methods
            .iter()
            .enumerate()
            .map(|(i, m)| json!({ "method": m, "path": format!("/api/e{i}") }))
            .collect()
    }

    #[test]
    fn test_analyze_empty_document_reports_absence() {
        let analysis = analyze(&doc(json!({
            "generatedAt": "2025-01-15T10:30:00Z",
            "endpoints": [],
            "utilities": [],
            "types": { "interfaces": [] }
        })));

        assert!(analysis.methods.is_empty());
        assert_eq!(analysis.total_endpoints(), 0);
        assert_eq!(analysis.components.len(), KEY_COMPONENTS.len());
        assert!(analysis.components.iter().all(|c| !c.is_found()));
        assert!(analysis.transaction.is_none());
    }

    #[test]
    fn test_method_table_first_seen_order_and_sum() {
        let analysis = analyze(&doc(json!({
            "generatedAt": "2025-01-15T10:30:00Z",
            "endpoints": endpoints(&["POST", "GET", "GET", "DELETE", "POST", "GET"]),
            "utilities": [],
            "types": { "interfaces": [] }
        })));

        let table: Vec<_> = analysis
            .methods
            .iter()
            .map(|m| (m.method.as_str(), m.count))
            .collect();
        assert_eq!(table, [("POST", 2), ("GET", 3), ("DELETE", 1)]);
        assert_eq!(analysis.total_endpoints(), 6);
    }

    #[test]
    fn test_key_components_exact_file_match() {
        let analysis = analyze(&doc(json!({
            "generatedAt": "2025-01-15T10:30:00Z",
            "endpoints": [],
            "utilities": [
                { "file": "googleSheets.ts", "functions": ["fetchSheetData", "parseRow"] },
                { "file": "transactionFilters.ts", "functions": [] },
                { "file": "PersonIdentifier.ts", "functions": ["identify"] },
                { "file": "googleSheets.ts", "functions": ["shadowed"] }
            ],
            "types": { "interfaces": [] }
        })));

        let found: Vec<_> = analysis
            .components
            .iter()
            .map(|c| (c.component.name, c.functions))
            .collect();
        assert_eq!(
            found,
            [
                ("Data Fetching", Some(2)),
                ("Person Identification", None),
                ("Installment Processing", None),
                ("Filtering", Some(0)),
            ]
        );
    }

    #[test]
    fn test_transaction_preview_truncates() {
        let fields: Vec<String> = (1..=8).map(|i| format!("  field{i}: string  ")).collect();
        let analysis = analyze(&doc(json!({
            "generatedAt": "2025-01-15T10:30:00Z",
            "endpoints": [],
            "utilities": [],
            "types": { "interfaces": [
                { "name": "TransactionQueryParams", "fields": ["person?: string"] },
                { "name": "Transaction", "fields": fields }
            ] }
        })));

        let summary = analysis.transaction.unwrap();
        assert_eq!(summary.field_count, 8);
        assert_eq!(summary.remaining, 3);
        assert_eq!(
            summary.preview,
            ["field1: string", "field2: string", "field3: string", "field4: string", "field5: string"]
        );
    }

    #[test]
    fn test_transaction_preview_without_truncation() {
        let analysis = analyze(&doc(json!({
            "generatedAt": "2025-01-15T10:30:00Z",
            "endpoints": [],
            "utilities": [],
            "types": { "interfaces": [
                { "name": "Transaction", "fields": ["id: string", "amount: number"] }
            ] }
        })));

        let summary = analysis.transaction.unwrap();
        assert_eq!(summary.field_count, 2);
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.preview.len(), 2);
    }
}
