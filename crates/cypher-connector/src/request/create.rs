//! Creates a node from a create input, recursing into nested creates and
//! delegating nested connects.

use cypher_ast::ast::{Clause, NodePattern, Statement};
use graph_connector_types::graph_definition::NodeWalker;
use serde_json::Value;

use super::{check_create_roles, connect, rel_pattern};
use crate::{
    context::input::{as_elements, nested_operations, InputItem, InputIterator, NestedOperation},
    context::TranslationContext,
    error::Error,
};

/// Builds the `CREATE` and `SET` clauses for one input element, plus the
/// statements of any nested mutations.
///
/// Fails with [`Error::Forbidden`] before producing anything when a
/// role-restricted create rule rejects the request.
pub fn build(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    input: &Value,
    var_name: &str,
    with_vars: &[String],
) -> Result<Statement, Error> {
    check_create_roles(ctx, node)?;

    let mut statement = Statement::new();
    statement.push(Clause::Create(NodePattern::new(var_name, node.name())));

    let Some(object) = input.as_object() else {
        return Ok(statement);
    };

    for item in InputIterator::new(ctx, node, object) {
        match item {
            InputItem::Scalar { key, value } => {
                let param = format!("{var_name}_{key}");

                statement.push(Clause::Set {
                    var: var_name.to_string(),
                    property: key.to_string(),
                    param: param.clone(),
                });

                statement.add_param(param, value.clone());
            }
            InputItem::Relation {
                relation,
                target,
                value,
            } => {
                check_create_roles(ctx, target)?;

                let mut inner_with = with_vars.to_vec();
                inner_with.push(var_name.to_string());

                for operation in nested_operations(value) {
                    match operation {
                        NestedOperation::Create(nested) => {
                            for (index, element) in as_elements(nested).into_iter().enumerate() {
                                let inner_var =
                                    format!("{var_name}_{}{index}", relation.field_name());

                                let child =
                                    build(ctx, target, element, &inner_var, &inner_with)?;
                                statement.merge(child);

                                statement.push(Clause::MergeRelationship(rel_pattern(
                                    var_name,
                                    relation,
                                    NodePattern::variable(inner_var),
                                )));
                            }
                        }
                        NestedOperation::Connect(nested) => {
                            let base_var =
                                format!("{var_name}_{}_connect", relation.field_name());

                            let child = connect::build(
                                ctx,
                                connect::Connect {
                                    with_vars: &inner_with,
                                    value: nested,
                                    base_var: &base_var,
                                    relation,
                                    parent_var: var_name,
                                    parent_node: node,
                                    target,
                                    from_create: true,
                                },
                            )?;

                            statement.merge(child);
                        }
                        _ => unreachable!("create inputs only nest creates and connects"),
                    }
                }
            }
        }
    }

    Ok(statement)
}
