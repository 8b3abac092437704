use cypher_ast::ast::Params;
use graph_connector_types::graph_definition::NodeWalker;

use crate::error::Error;

pub use graph_connector_types::graph_definition::AuthOperation;

/// The flavor of predicate being requested.
///
/// `Allow` predicates gate access to nodes that already exist, `Bind`
/// predicates validate the state a mutation leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    Allow,
    Bind,
}

/// Everything a predicate source needs to know about the check point.
#[derive(Clone, Copy)]
pub struct AuthRequest<'a> {
    pub operation: AuthOperation,
    pub kind: PredicateKind,
    pub node: NodeWalker<'a>,
    pub var_name: &'a str,
}

/// A rendered predicate over the variable named in the request, together
/// with the parameters it references.
#[derive(Debug, Clone)]
pub struct AuthPredicate {
    pub condition: String,
    pub params: Params,
}

/// Source of authorization predicates.
///
/// The translators call this at every check point; returning `None` means
/// the check point needs no predicate and emits nothing.
pub trait AuthPredicates {
    fn predicate(&self, request: AuthRequest<'_>) -> Result<Option<AuthPredicate>, Error>;
}

/// Predicate source for schemas without authorization rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAuth;

impl AuthPredicates for NoAuth {
    fn predicate(&self, _: AuthRequest<'_>) -> Result<Option<AuthPredicate>, Error> {
        Ok(None)
    }
}
