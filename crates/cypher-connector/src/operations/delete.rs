use cypher_ast::{
    ast::{Clause, NodePattern, Params, Pattern, Statement},
    renderer::Cypher,
};
use graph_connector_types::graph_definition::NodeWalker;

use super::push_where;
use crate::{
    auth::{AuthOperation, AuthRequest, PredicateKind},
    context::TranslationContext,
    error::Error,
    request::{delete, push_auth_validate},
};

/// Translates a delete mutation.
///
/// Nested deletes from the `delete` argument run first; the matched roots
/// are detach-deleted last so their relationships never dangle.
pub fn translate_delete(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
) -> Result<(String, Params), Error> {
    let var = "this";

    let mut statement = Statement::new();
    statement.push(Clause::Match {
        optional: false,
        pattern: Pattern::Node(NodePattern::new(var, node.name())),
    });

    push_where(&mut statement, ctx, node, var);

    push_auth_validate(
        &mut statement,
        ctx,
        AuthRequest {
            operation: AuthOperation::Delete,
            kind: PredicateKind::Allow,
            node,
            var_name: var,
        },
    )?;

    if let Some(delete_input) = ctx.delete_input() {
        let with_vars = vec![var.to_string()];

        let child = delete::build(ctx, node, delete_input, var, &with_vars, None)?;
        statement.merge(child);
    }

    statement.push(Clause::DetachDelete(var.to_string()));

    tracing::debug!(node = node.name(), "translated delete");

    Ok(Cypher::build(statement))
}
