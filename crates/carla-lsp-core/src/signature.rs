//! Signature-string parsing
//!
//! Catalog signatures arrive as raw text, e.g.
//! `spawn_actor(self, blueprint: ActorBlueprint, transform: Transform = Transform())`.
//! This module derives the ordered parameter descriptors that drive
//! snippet placeholders and signature help. Parsing is deliberately
//! lightweight: catalog signatures are shallow, so a regex per parameter
//! token is enough.

use once_cell::sync::Lazy;
use regex::Regex;

/// Conventional name of the implicit receiver; dropped from every parse
const RECEIVER: &str = "self";

/// One parameter extracted from a method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_hint: Option<String>,
    pub default: Option<String>,
}

/// Matches `name: type` with an optional `= default` tail
static TYPED_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s*:\s*([^=]+?)(?:\s*=\s*(.+))?$").unwrap());

/// Parse a raw method signature into its parameter descriptors.
///
/// Returns an empty vector when the signature has no parenthesized
/// parameter list. The receiver token is dropped wherever it appears,
/// and descriptors keep their left-to-right declaration order.
pub fn parse_signature(signature: &str) -> Vec<ParameterDescriptor> {
    let list = match parameter_list(signature) {
        Some(list) => list,
        None => return Vec::new(),
    };

    split_parameters(list)
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != RECEIVER)
        .map(parse_parameter)
        .collect()
}

/// Extract the text between the first matching parenthesis pair, so a
/// trailing call default such as `Transform()` survives whole
fn parameter_list(signature: &str) -> Option<&str> {
    let open = signature.find('(')?;

    let mut depth = 0usize;
    for (offset, ch) in signature[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&signature[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Naive top-level comma split. Catalog signatures are shallow, so commas
/// nested inside a parameter's own brackets are not handled; a
/// depth-aware splitter can replace this without touching callers.
fn split_parameters(list: &str) -> std::str::Split<'_, char> {
    list.split(',')
}

/// Parse one parameter token, preferring the typed form `name: type = default`
fn parse_parameter(token: &str) -> ParameterDescriptor {
    if let Some(caps) = TYPED_PARAM.captures(token) {
        return ParameterDescriptor {
            name: caps[1].to_string(),
            type_hint: Some(caps[2].trim().to_string()),
            default: caps.get(3).map(|m| m.as_str().trim().to_string()),
        };
    }

    // Untyped fallback: anything before `=` names the parameter, keeping
    // only the segment before a stray `:` from a partial annotation
    let (name_part, default) = match token.split_once('=') {
        Some((name, default)) => (name, Some(default.trim().to_string())),
        None => (token, None),
    };
    let name = name_part
        .split(':')
        .next()
        .unwrap_or(name_part)
        .trim()
        .to_string();

    ParameterDescriptor {
        name,
        type_hint: None,
        default,
    }
}
