//! Signature help building
//!
//! Resolves a call context against the catalog and shapes the parsed
//! parameters into the structure hosts expect for parameter hints.

use crate::catalog::ApiCatalog;
use crate::context::Context;
use crate::signature::parse_signature;

/// A single signature with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureData {
    /// The raw signature, shown as the signature label
    pub label: String,
    pub documentation: String,
    pub parameters: Vec<ParameterData>,
    pub active_parameter: u32,
}

/// One parameter of a signature, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterData {
    pub label: String,
    pub documentation: String,
}

/// Build signature help for a resolved context.
///
/// Only call contexts produce help, and only when both the class and the
/// method are present in the catalog.
pub fn signature_help_for_context(
    catalog: &ApiCatalog,
    context: &Context,
) -> Option<SignatureData> {
    let (class_name, method_name, active_parameter) = match context {
        Context::Call {
            class_name,
            method_name,
            active_parameter,
        } => (class_name, method_name, *active_parameter),
        _ => return None,
    };

    let class = catalog.class(class_name)?;
    let method = class.methods.get(method_name)?;

    let parameters = parse_signature(&method.signature)
        .into_iter()
        .map(|param| {
            let label = match &param.type_hint {
                Some(type_hint) => format!("{}: {}", param.name, type_hint),
                None => param.name.clone(),
            };

            let mut documentation = format!("Parameter: `{}`", param.name);
            if let Some(type_hint) = &param.type_hint {
                documentation.push_str(&format!("\n\nType: `{}`", type_hint));
            }
            if let Some(default) = &param.default {
                documentation.push_str(&format!("\n\nDefault: `{}`", default));
            }

            ParameterData {
                label,
                documentation,
            }
        })
        .collect();

    Some(SignatureData {
        label: method.signature.clone(),
        documentation: method.docstring.clone(),
        parameters,
        active_parameter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> ApiCatalog {
        serde_json::from_str(
            r#"{
                "classes": {
                    "World": {
                        "docstring": "The simulation itself.",
                        "base_classes": [],
                        "methods": {
                            "spawn_actor": {
                                "signature": "spawn_actor(self, blueprint: ActorBlueprint, transform: Transform = Transform())",
                                "docstring": "Spawns an actor into the world."
                            },
                            "get_actors": {
                                "signature": "get_actors(self)",
                                "docstring": "Returns a list of the actors on scene."
                            }
                        },
                        "properties": {}
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn call(class_name: &str, method_name: &str, active_parameter: u32) -> Context {
        Context::Call {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            active_parameter,
        }
    }

    #[test]
    fn test_signature_help_labels_and_active_parameter() {
        let catalog = test_catalog();
        let data = signature_help_for_context(&catalog, &call("World", "spawn_actor", 1)).unwrap();

        assert_eq!(
            data.label,
            "spawn_actor(self, blueprint: ActorBlueprint, transform: Transform = Transform())"
        );
        assert_eq!(data.documentation, "Spawns an actor into the world.");
        assert_eq!(data.active_parameter, 1);

        assert_eq!(data.parameters.len(), 2);
        assert_eq!(data.parameters[0].label, "blueprint: ActorBlueprint");
        assert_eq!(data.parameters[1].label, "transform: Transform");
        assert!(data.parameters[1]
            .documentation
            .contains("Default: `Transform()`"));
    }

    #[test]
    fn test_parameterless_method() {
        let catalog = test_catalog();
        let data = signature_help_for_context(&catalog, &call("World", "get_actors", 0)).unwrap();

        assert!(data.parameters.is_empty());
        assert_eq!(data.active_parameter, 0);
    }

    #[test]
    fn test_unknown_class_or_method() {
        let catalog = test_catalog();
        assert!(signature_help_for_context(&catalog, &call("Map", "spawn_actor", 0)).is_none());
        assert!(signature_help_for_context(&catalog, &call("World", "tick", 0)).is_none());
    }

    #[test]
    fn test_non_call_contexts_have_no_help() {
        let catalog = test_catalog();

        let dot = Context::Dot {
            class_name: "World".to_string(),
        };
        assert!(signature_help_for_context(&catalog, &dot).is_none());
        assert!(signature_help_for_context(&catalog, &Context::None).is_none());
    }

    #[test]
    fn test_untyped_parameter_label_is_bare_name() {
        let catalog: ApiCatalog = serde_json::from_str(
            r#"{
                "classes": {
                    "Actor": {
                        "methods": {
                            "set_location": {
                                "signature": "set_location(self, location)",
                                "docstring": ""
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let data = signature_help_for_context(&catalog, &call("Actor", "set_location", 0)).unwrap();
        assert_eq!(data.parameters[0].label, "location");
        assert_eq!(data.parameters[0].documentation, "Parameter: `location`");
    }
}
