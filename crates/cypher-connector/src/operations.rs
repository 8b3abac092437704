//! Top-level translators, one per GraphQL operation kind.
//!
//! Each translator assembles a [`Statement`](cypher_ast::ast::Statement)
//! from the request arguments and renders it in a single pass, returning
//! the query text and the flat parameter map.

mod count;
mod create;
mod delete;
mod update;

pub use count::translate_count;
pub use create::translate_create;
pub use delete::translate_delete;
pub use update::translate_update;

use cypher_ast::ast::{Clause, Statement};
use graph_connector_types::graph_definition::NodeWalker;

use crate::{context::TranslationContext, error::Error, request::filter};

/// Pushes the rendered `where` argument, if any.
fn push_where(statement: &mut Statement, ctx: &TranslationContext<'_>, node: NodeWalker<'_>, var_name: &str) {
    let Some(where_input) = ctx.where_input() else {
        return;
    };

    let (clause, params) = filter::build(ctx, node, where_input, var_name, None, false);

    if !clause.is_empty() {
        statement.push(Clause::Raw(clause));
        statement.extend_params(params);
    }
}

/// Resolves the projection for one variable and pushes its validations,
/// returning the `RETURN` body fragment.
fn push_projection(
    statement: &mut Statement,
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    var_name: &str,
) -> Result<String, Error> {
    let projection = ctx.projection().resolve(node, var_name)?;

    for validate in projection.auth_validate {
        statement.push(Clause::Raw(validate));
    }

    statement.extend_params(projection.params);

    Ok(format!("{} AS {var_name}", projection.fragment))
}
