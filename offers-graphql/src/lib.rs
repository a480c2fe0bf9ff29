//! # Offers GraphQL
//!
//! Structured construction of GraphQL mutation documents over a shared,
//! read-only fragment registry.
//!
//! ## Features
//!
//! - **Typed documents**: variables, arguments and selection trees are values,
//!   not interpolated strings
//! - **Fragment registry**: named fragments are registered once and injected
//!   into every composer that needs them
//! - **Fail-fast composition**: a spread of an unknown fragment fails before a
//!   document exists
//! - **Transport payloads**: composed documents produce the JSON request body
//!   an HTTP client sends
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use offers_graphql::{
//!     DocumentComposer, Field, FragmentDefinition, FragmentRegistry, MutationTemplate,
//!     VariableDefinition,
//! };
//!
//! let registry = FragmentRegistry::builder()
//!     .register(FragmentDefinition::new("AgentFields", "Agent").fields(["id", "name"]))?
//!     .build();
//!
//! let template = MutationTemplate::builder("CreateAgent")
//!     .variable(VariableDefinition::required("agent", "AgentCreateParams"))
//!     .select(
//!         Field::new("createAgent")
//!             .arg_variable("agent", "agent")
//!             .select(Field::new("agent").spread("AgentFields")),
//!     )
//!     .build();
//!
//! let composer = DocumentComposer::new(Arc::new(registry));
//! let document = composer.compose(&template)?;
//! assert!(document.text().contains("fragment AgentFields on Agent"));
//! # Ok::<(), offers_graphql::ComposeError>(())
//! ```

mod composer;
mod config;
mod document;
mod error;
mod registry;
mod render;
mod request;
mod response;

pub use composer::{DocumentComposer, MutationDocument};
pub use config::{ComposerConfig, ComposerConfigBuilder};
pub use document::{
    Argument, Field, FragmentDefinition, MutationTemplate, MutationTemplateBuilder, Selection,
    SelectionSet, TypeRef, Value, VariableDefinition,
};
pub use error::{ComposeError, Result};
pub use registry::{FragmentRegistry, FragmentRegistryBuilder};
pub use request::GraphQLRequest;
pub use response::{ErrorLocation, GraphQLResponse, GraphQLResponseError, PathSegment, format_path};

// Re-export common types
pub use serde_json::Value as JsonValue;
