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
    request::push_auth_validate,
};

/// Translates a count query over the matched nodes.
pub fn translate_count(
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
            operation: AuthOperation::Read,
            kind: PredicateKind::Allow,
            node,
            var_name: var,
        },
    )?;

    statement.push(Clause::Return(format!("count({var})")));

    Ok(Cypher::build(statement))
}
