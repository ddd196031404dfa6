//! Hover building
//!
//! Produces the markdown shown when the cursor rests on a known symbol.
//! Only bare-word contexts produce hovers: a class name anywhere, or a
//! member name with the receiver class guessed from the adjacent text.

use crate::catalog::ApiCatalog;
use crate::completion::{access_flags, or_no_docs};
use crate::context::Context;

/// Build hover markdown for a resolved context.
pub fn hover_for_context(catalog: &ApiCatalog, context: &Context) -> Option<String> {
    let (word, enclosing_class) = match context {
        Context::BareWord {
            word,
            enclosing_class,
        } => (word, enclosing_class),
        _ => return None,
    };

    // A class name hovers the same wherever it appears
    if let Some(class) = catalog.class(word) {
        return Some(format!(
            "**CARLA Class: {}**\n\n{}\n\nBase classes: {}",
            word,
            or_no_docs(&class.docstring),
            class.base_classes.join(", ")
        ));
    }

    let class_name = enclosing_class.as_deref()?;
    let class = catalog.class(class_name)?;

    if let Some(method) = class.methods.get(word) {
        return Some(format!(
            "**Method: {}.{}**\n\n```python\n{}\n```\n\n{}",
            class_name,
            word,
            method.signature,
            or_no_docs(&method.docstring)
        ));
    }

    if let Some(property) = class.properties.get(word) {
        return Some(format!(
            "**Property: {}.{}** ({})\n\n{}",
            class_name,
            word,
            access_flags(property),
            or_no_docs(&property.docstring)
        ));
    }

    None
}
