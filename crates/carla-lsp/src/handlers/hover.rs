use tower_lsp::lsp_types::*;

use carla_lsp_core::{hover_for_context, resolve_context, ApiCatalog};

use crate::document::Document;

/// Get hover information for a position in the document
pub fn get_hover(
    catalog: Option<&ApiCatalog>,
    doc: &Document,
    position: Position,
) -> Option<Hover> {
    let catalog = catalog?;

    let line = doc.line(position.line);
    let context = resolve_context(line, position.character as usize);
    let markdown = hover_for_context(catalog, &context)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: markdown,
        }),
        range: None,
    })
}
