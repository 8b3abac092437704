//! Translation of GraphQL mutation and query operations into Cypher.
//!
//! The crate takes a [`GraphDefinition`](graph_connector_types::graph_definition::GraphDefinition)
//! describing the client schema together with the JSON arguments of one
//! GraphQL operation, and produces a parameterized Cypher statement. All
//! client values travel as parameters, never as query text.
//!
//! The entry points are the operation translators in [`operations`]. The
//! builders in [`request`] handle individual argument trees (filters, nested
//! creates, connects and so on) and can be driven directly in tests.

pub mod auth;
pub mod context;
pub mod error;
pub mod operations;
pub mod projection;
pub mod request;
pub mod session;

pub use auth::{AuthOperation, AuthPredicate, AuthPredicates, AuthRequest, NoAuth, PredicateKind};
pub use context::TranslationContext;
pub use cypher_ast::ast::Params;
pub use error::Error;
pub use operations::{translate_count, translate_create, translate_delete, translate_update};
pub use projection::{Projection, ProjectionResolver, PropertiesProjection};
pub use session::TranslationSession;
