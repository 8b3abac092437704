use cypher_ast::{
    ast::{Clause, NodePattern, Params, Pattern, Statement},
    renderer::Cypher,
};
use graph_connector_types::graph_definition::NodeWalker;
use serde_json::Value;

use super::{push_projection, push_where};
use crate::{
    auth::{AuthOperation, AuthRequest, PredicateKind},
    context::input::{as_elements, InputItem, InputIterator},
    context::TranslationContext,
    error::Error,
    request::{connect, create, delete, disconnect, push_auth_validate, rel_pattern, update},
};

/// Translates an update mutation.
///
/// The matched nodes run through the arguments in a fixed order: `update`,
/// `connect`, `disconnect`, `create`, `delete`, then the projection.
pub fn translate_update(
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
            operation: AuthOperation::Update,
            kind: PredicateKind::Allow,
            node,
            var_name: var,
        },
    )?;

    let with_vars = vec![var.to_string()];

    if let Some(update_input) = ctx.update_input() {
        let child = update::build(ctx, node, update_input, var, var, &with_vars, None)?;
        statement.merge(child);
    }

    if let Some(connect_input) = ctx.connect_input() {
        for (relation, target, value) in relation_entries(ctx, node, connect_input) {
            let base_var = format!("{var}_connect_{}", relation.field_name());

            let child = connect::build(
                ctx,
                connect::Connect {
                    with_vars: &with_vars,
                    value,
                    base_var: &base_var,
                    relation,
                    parent_var: var,
                    parent_node: node,
                    target,
                    from_create: false,
                },
            )?;

            statement.merge(child);
        }
    }

    if let Some(disconnect_input) = ctx.disconnect_input() {
        for (relation, target, value) in relation_entries(ctx, node, disconnect_input) {
            let base_var = format!("{var}_disconnect_{}", relation.field_name());

            let child = disconnect::build(
                ctx,
                disconnect::Disconnect {
                    with_vars: &with_vars,
                    value,
                    base_var: &base_var,
                    relation,
                    parent_var: var,
                    parent_node: node,
                    target,
                },
            )?;

            statement.merge(child);
        }
    }

    if let Some(create_input) = ctx.arg("create") {
        for (relation, target, value) in relation_entries(ctx, node, create_input) {
            for (index, element) in as_elements(value).into_iter().enumerate() {
                let inner_var = format!("{var}_create_{}{index}", relation.field_name());

                let child = create::build(ctx, target, element, &inner_var, &with_vars)?;
                statement.merge(child);

                statement.push(Clause::MergeRelationship(rel_pattern(
                    var,
                    relation,
                    NodePattern::variable(inner_var),
                )));
            }
        }
    }

    if let Some(delete_input) = ctx.delete_input() {
        let chain = format!("{var}_delete");

        let child = delete::build(ctx, node, delete_input, var, &with_vars, Some(&chain))?;
        statement.merge(child);
    }

    let fragment = push_projection(&mut statement, ctx, node, var)?;
    statement.push(Clause::Return(fragment));

    tracing::debug!(node = node.name(), "translated update");

    Ok(Cypher::build(statement))
}

type RelationEntry<'a> = (
    graph_connector_types::graph_definition::RelationFieldWalker<'a>,
    NodeWalker<'a>,
    &'a Value,
);

/// The relationship entries of an argument object keyed by field name.
fn relation_entries<'a>(
    ctx: &'a TranslationContext<'a>,
    node: NodeWalker<'a>,
    input: &'a Value,
) -> Vec<RelationEntry<'a>> {
    let Some(object) = input.as_object() else {
        return Vec::new();
    };

    InputIterator::new(ctx, node, object)
        .filter_map(|item| match item {
            InputItem::Relation {
                relation,
                target,
                value,
            } => Some((relation, target, value)),
            InputItem::Scalar { .. } => None,
        })
        .collect()
}
