use tower_lsp::lsp_types::*;

use carla_lsp_core::{resolve_context, signature_help_for_context, ApiCatalog};

use crate::document::Document;

/// Get signature help for a position in the document
pub fn get_signature_help(
    catalog: Option<&ApiCatalog>,
    doc: &Document,
    position: Position,
) -> Option<SignatureHelp> {
    let catalog = catalog?;

    let line = doc.line(position.line);
    let context = resolve_context(line, position.character as usize);
    let data = signature_help_for_context(catalog, &context)?;

    let parameters: Vec<ParameterInformation> = data
        .parameters
        .iter()
        .map(|param| ParameterInformation {
            label: ParameterLabel::Simple(param.label.clone()),
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: param.documentation.clone(),
            })),
        })
        .collect();

    let signature = SignatureInformation {
        label: data.label.clone(),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: data.documentation.clone(),
        })),
        parameters: Some(parameters),
        active_parameter: Some(data.active_parameter),
    };

    Some(SignatureHelp {
        signatures: vec![signature],
        active_signature: Some(0),
        active_parameter: Some(data.active_parameter),
    })
}
