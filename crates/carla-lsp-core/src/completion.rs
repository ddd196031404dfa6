//! Completion building
//!
//! Translates catalog entries into host-agnostic completion entries.
//! Entries carry a rank-prefixed sort text (classes `0`, methods `1`,
//! properties `2`, each followed by the symbol name) so suggestions stay
//! grouped and alphabetical within a group no matter how the host breaks
//! ties.

use crate::catalog::{ApiCatalog, ClassEntry, MethodEntry, PropertyEntry};
use crate::context::Context;
use crate::signature::parse_signature;

/// A completion entry that can be used by the LSP server and CLI tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: Option<String>,
    pub documentation: String,
    pub insert_text: String,
    pub sort_text: String,
}

/// The kind of completion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Class,
    Method,
    Property,
}

impl CompletionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Class => "class",
            CompletionKind::Method => "method",
            CompletionKind::Property => "property",
        }
    }

    /// Rank prefix enforcing class/method/property grouping
    fn rank(&self) -> char {
        match self {
            CompletionKind::Class => '0',
            CompletionKind::Method => '1',
            CompletionKind::Property => '2',
        }
    }
}

/// Shown wherever the catalog carries no docstring
const NO_DOCS: &str = "No documentation available";

pub(crate) fn or_no_docs(docstring: &str) -> &str {
    if docstring.is_empty() {
        NO_DOCS
    } else {
        docstring
    }
}

/// Build the completion list for a resolved context.
///
/// After `Class.` the members of that class are suggested; in any other
/// context the class names themselves are, and the host narrows them
/// against the typed prefix. An unknown class after the dot yields
/// nothing.
pub fn completions_for_context(catalog: &ApiCatalog, context: &Context) -> Vec<CompletionEntry> {
    match context {
        Context::Dot { class_name } => member_completions(catalog, class_name),
        _ => class_completions(catalog),
    }
}

/// One entry per method and property of the named class
pub fn member_completions(catalog: &ApiCatalog, class_name: &str) -> Vec<CompletionEntry> {
    let class = match catalog.class(class_name) {
        Some(class) => class,
        None => return Vec::new(),
    };

    let mut entries = Vec::new();
    for (name, method) in &class.methods {
        entries.push(method_entry(name, method));
    }
    for (name, property) in &class.properties {
        entries.push(property_entry(name, property));
    }
    entries
}

/// One entry per known class
pub fn class_completions(catalog: &ApiCatalog) -> Vec<CompletionEntry> {
    catalog
        .classes
        .iter()
        .map(|(name, class)| class_entry(name, class))
        .collect()
}

fn class_entry(name: &str, class: &ClassEntry) -> CompletionEntry {
    let documentation = if class.docstring.is_empty() {
        format!("CARLA {} class", name)
    } else {
        class.docstring.clone()
    };

    CompletionEntry {
        label: name.to_string(),
        kind: CompletionKind::Class,
        detail: None,
        documentation,
        insert_text: name.to_string(),
        sort_text: format!("{}{}", CompletionKind::Class.rank(), name),
    }
}

fn method_entry(name: &str, method: &MethodEntry) -> CompletionEntry {
    let documentation = format!(
        "```python\n{}\n```\n\n{}",
        method.signature,
        or_no_docs(&method.docstring)
    );

    // One snippet placeholder per parameter, in declaration order;
    // parameterless methods insert the bare name
    let params = parse_signature(&method.signature);
    let insert_text = if params.is_empty() {
        name.to_string()
    } else {
        let placeholders: Vec<String> = params
            .iter()
            .enumerate()
            .map(|(i, param)| format!("${{{}:{}}}", i + 1, param.name))
            .collect();
        format!("{}({})", name, placeholders.join(", "))
    };

    CompletionEntry {
        label: name.to_string(),
        kind: CompletionKind::Method,
        detail: Some(method.signature.clone()),
        documentation,
        insert_text,
        sort_text: format!("{}{}", CompletionKind::Method.rank(), name),
    }
}

fn property_entry(name: &str, property: &PropertyEntry) -> CompletionEntry {
    CompletionEntry {
        label: name.to_string(),
        kind: CompletionKind::Property,
        detail: None,
        documentation: format!(
            "**{} Property**\n\n{}",
            access_flags(property),
            or_no_docs(&property.docstring)
        ),
        insert_text: name.to_string(),
        sort_text: format!("{}{}", CompletionKind::Property.rank(), name),
    }
}

/// `Read`, `Write` or `Read/Write`, from the catalog flags
pub(crate) fn access_flags(property: &PropertyEntry) -> String {
    let mut access = Vec::new();
    if property.readable {
        access.push("Read");
    }
    if property.writable {
        access.push("Write");
    }
    access.join("/")
}
