use cypher_ast::ast::Params;
use graph_connector_types::graph_definition::NodeWalker;
use itertools::Itertools;

use crate::error::Error;

/// A rendered `RETURN` body for one variable plus everything it drags in.
#[derive(Debug, Clone)]
pub struct Projection {
    /// The map projection text, e.g. `this { .title, .released }`.
    pub fragment: String,
    pub params: Params,
    /// Validation calls the projection requires before the `RETURN`.
    pub auth_validate: Vec<String>,
}

/// Resolves the selection set of an operation into a map projection.
///
/// The translators stay agnostic of how selections are gathered; hosts
/// plug in their own resolver built from the GraphQL resolve info.
pub trait ProjectionResolver {
    fn resolve(&self, node: NodeWalker<'_>, var_name: &str) -> Result<Projection, Error>;
}

/// Fallback resolver projecting every scalar field of the node.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertiesProjection;

impl ProjectionResolver for PropertiesProjection {
    fn resolve(&self, node: NodeWalker<'_>, var_name: &str) -> Result<Projection, Error> {
        let fields = node.fields().map(|field| format!(".{}", field.name())).join(", ");

        let fragment = if fields.is_empty() {
            var_name.to_string()
        } else {
            format!("{var_name} {{ {fields} }}")
        };

        Ok(Projection {
            fragment,
            params: Params::new(),
            auth_validate: Vec::new(),
        })
    }
}
