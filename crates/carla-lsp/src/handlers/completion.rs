use tower_lsp::lsp_types::*;

use carla_lsp_core::{
    completions_for_context, resolve_context, ApiCatalog, CompletionEntry, CompletionKind,
};

use crate::document::Document;

/// Get completion items for a position in the document
pub fn get_completions(
    catalog: Option<&ApiCatalog>,
    doc: &Document,
    position: Position,
) -> Vec<CompletionItem> {
    let catalog = match catalog {
        Some(catalog) => catalog,
        None => return Vec::new(),
    };

    let line = doc.line(position.line);
    let context = resolve_context(line, position.character as usize);

    completions_for_context(catalog, &context)
        .iter()
        .map(convert_to_lsp_completion)
        .collect()
}

/// Convert a core completion entry to an LSP completion item
fn convert_to_lsp_completion(entry: &CompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Class => CompletionItemKind::CLASS,
        CompletionKind::Method => CompletionItemKind::METHOD,
        CompletionKind::Property => CompletionItemKind::PROPERTY,
    };

    let insert_text_format = if entry.insert_text.contains('$') {
        InsertTextFormat::SNIPPET
    } else {
        InsertTextFormat::PLAIN_TEXT
    };

    CompletionItem {
        label: entry.label.clone(),
        kind: Some(kind),
        detail: entry.detail.clone(),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: entry.documentation.clone(),
        })),
        insert_text: Some(entry.insert_text.clone()),
        insert_text_format: Some(insert_text_format),
        sort_text: Some(entry.sort_text.clone()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> ApiCatalog {
        serde_json::from_str(
            r#"{
                "classes": {
                    "Actor": {
                        "docstring": "Base class for everything in the simulation.",
                        "base_classes": [],
                        "methods": {
                            "destroy": {
                                "signature": "destroy(self)",
                                "docstring": "Tells the simulator to destroy this actor."
                            },
                            "set_location": {
                                "signature": "set_location(self, location: Location)",
                                "docstring": "Teleports the actor."
                            }
                        },
                        "properties": {
                            "id": {
                                "docstring": "Identifier of this actor.",
                                "readable": true,
                                "writable": false
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_member_completion_after_dot() {
        let catalog = test_catalog();
        let doc = Document::new("Actor.".to_string());

        let items = get_completions(Some(&catalog), &doc, Position::new(0, 6));

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "destroy");
        assert_eq!(items[0].kind, Some(CompletionItemKind::METHOD));
        assert_eq!(items[0].insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
        assert_eq!(items[2].label, "id");
        assert_eq!(items[2].kind, Some(CompletionItemKind::PROPERTY));
        assert_eq!(items[2].sort_text.as_deref(), Some("2id"));
    }

    #[test]
    fn test_parameterized_method_inserts_snippet() {
        let catalog = test_catalog();
        let doc = Document::new("Actor.".to_string());

        let items = get_completions(Some(&catalog), &doc, Position::new(0, 6));
        let set_location = items.iter().find(|i| i.label == "set_location").unwrap();

        assert_eq!(
            set_location.insert_text.as_deref(),
            Some("set_location(${1:location})")
        );
        assert_eq!(
            set_location.insert_text_format,
            Some(InsertTextFormat::SNIPPET)
        );
    }

    #[test]
    fn test_class_completion_on_fresh_line() {
        let catalog = test_catalog();
        let doc = Document::new("".to_string());

        let items = get_completions(Some(&catalog), &doc, Position::new(0, 0));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Actor");
        assert_eq!(items[0].kind, Some(CompletionItemKind::CLASS));
        assert_eq!(items[0].sort_text.as_deref(), Some("0Actor"));
    }

    #[test]
    fn test_missing_catalog_completes_nothing() {
        let doc = Document::new("Actor.".to_string());
        assert!(get_completions(None, &doc, Position::new(0, 6)).is_empty());
    }
}
