//! Core code intelligence for the CARLA Python API
//!
//! This crate provides the shared logic behind completion, hover and
//! signature help so it can be used by the LSP server and by CLI tools.
//! Everything here is pure and synchronous: the loaded [`ApiCatalog`] is
//! passed in explicitly, and each request derives its result fresh from
//! the catalog plus the text around the cursor.
//!
//! # Features
//!
//! - **Catalog**: deserializes the static JSON description of the API
//! - **Signature parsing**: turns a raw signature string into parameter descriptors
//! - **Context resolution**: classifies the text immediately before the cursor
//! - **Builders**: produce completion, hover and signature help payloads
//!
//! # Example
//!
//! ```
//! use carla_lsp_core::parse_signature;
//!
//! let params = parse_signature("set_autopilot(self, enabled: bool = True)");
//! assert_eq!(params[0].name, "enabled");
//! assert_eq!(params[0].type_hint.as_deref(), Some("bool"));
//! assert_eq!(params[0].default.as_deref(), Some("True"));
//! ```

pub mod catalog;
pub mod completion;
pub mod context;
pub mod hover;
pub mod signature;
pub mod signature_help;

// Re-export main types for convenience
pub use catalog::{ApiCatalog, CatalogError, ClassEntry, MethodEntry, PropertyEntry};
pub use completion::{
    class_completions, completions_for_context, member_completions, CompletionEntry,
    CompletionKind,
};
pub use context::{resolve_context, Context};
pub use hover::hover_for_context;
pub use signature::{parse_signature, ParameterDescriptor};
pub use signature_help::{signature_help_for_context, ParameterData, SignatureData};
