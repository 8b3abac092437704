//! Applies an update input to a matched node.
//!
//! Scalar keys become `SET` clauses on the bound variable. Relationship
//! keys either delegate to the other builders or, for nested updates, wrap
//! the child update in a conditional call that only runs when the optional
//! match bound a node.

use cypher_ast::ast::{Clause, Condition, NodePattern, Pattern, Statement};
use graph_connector_types::graph_definition::NodeWalker;
use serde_json::Value;

use super::{connect, create, delete, disconnect, filter, push_auth_validate, rel_pattern};
use crate::{
    auth::{AuthOperation, AuthRequest, PredicateKind},
    context::input::{as_elements, nested_operations, InputItem, InputIterator, NestedOperation},
    context::TranslationContext,
    error::Error,
};

/// Builds the clauses for one update input against the node bound to
/// `var_name`.
///
/// The chain string keeps parameter names unique through nested updates; the
/// top level derives it from the parent variable.
pub fn build(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    input: &Value,
    var_name: &str,
    parent_var: &str,
    with_vars: &[String],
    chain_str: Option<&str>,
) -> Result<Statement, Error> {
    let mut statement = Statement::new();

    let Some(object) = input.as_object() else {
        return Ok(statement);
    };

    let chain = chain_str.map_or_else(|| format!("{parent_var}_update"), str::to_string);

    for item in InputIterator::new(ctx, node, object) {
        match item {
            InputItem::Scalar { key, value } => {
                let param = format!("{chain}_{key}");

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
                let field = relation.field_name();

                for operation in nested_operations(value) {
                    match operation {
                        NestedOperation::Update(nested) => {
                            for (index, element) in as_elements(nested).into_iter().enumerate() {
                                let inner_var = format!("{var_name}_{field}{index}");

                                statement.push(Clause::With(with_vars.to_vec()));
                                statement.push(Clause::Match {
                                    optional: true,
                                    pattern: Pattern::Relationship(rel_pattern(
                                        var_name,
                                        relation,
                                        NodePattern::new(inner_var.as_str(), target.name()),
                                    )),
                                });

                                if let Some(where_input) = element.get("where") {
                                    let (clause, params) = filter::build(
                                        ctx, target, where_input, &inner_var, None, true,
                                    );

                                    if !clause.is_empty() {
                                        statement.push(Clause::Where(Condition::Raw(clause)));
                                        statement.extend_params(params);
                                    }
                                }

                                let mut inner = Statement::new();

                                push_auth_validate(
                                    &mut inner,
                                    ctx,
                                    AuthRequest {
                                        operation: AuthOperation::Update,
                                        kind: PredicateKind::Allow,
                                        node: target,
                                        var_name: &inner_var,
                                    },
                                )?;

                                let mut inner_with = with_vars.to_vec();
                                inner_with.push(inner_var.clone());

                                if let Some(update_value) = element.get("update") {
                                    let child_chain = format!("{chain}_{field}{index}");

                                    let child = build(
                                        ctx,
                                        target,
                                        update_value,
                                        &inner_var,
                                        &inner_var,
                                        &inner_with,
                                        Some(&child_chain),
                                    )?;

                                    inner.merge(child);
                                }

                                if inner.is_empty() {
                                    continue;
                                }

                                // The inner parameters surface on the outer
                                // statement too; the conditional call routes
                                // them through its explicit map.
                                statement.extend_params(inner.params().clone());

                                statement.push(Clause::ConditionalUpdate {
                                    var: inner_var.clone(),
                                    inner: Box::new(inner),
                                    outer_vars: inner_with,
                                });
                            }
                        }
                        NestedOperation::Connect(nested) => {
                            let base_var = format!("{var_name}_{field}_connect");

                            let child = connect::build(
                                ctx,
                                connect::Connect {
                                    with_vars,
                                    value: nested,
                                    base_var: &base_var,
                                    relation,
                                    parent_var: var_name,
                                    parent_node: node,
                                    target,
                                    from_create: false,
                                },
                            )?;

                            statement.merge(child);
                        }
                        NestedOperation::Disconnect(nested) => {
                            let base_var = format!("{var_name}_{field}_disconnect");

                            let child = disconnect::build(
                                ctx,
                                disconnect::Disconnect {
                                    with_vars,
                                    value: nested,
                                    base_var: &base_var,
                                    relation,
                                    parent_var: var_name,
                                    parent_node: node,
                                    target,
                                },
                            )?;

                            statement.merge(child);
                        }
                        NestedOperation::Create(nested) => {
                            for (index, element) in as_elements(nested).into_iter().enumerate() {
                                let inner_var = format!("{var_name}_{field}_create{index}");

                                let child =
                                    create::build(ctx, target, element, &inner_var, with_vars)?;
                                statement.merge(child);

                                statement.push(Clause::MergeRelationship(rel_pattern(
                                    var_name,
                                    relation,
                                    NodePattern::variable(inner_var),
                                )));
                            }
                        }
                        NestedOperation::Delete(nested) => {
                            let base_var = format!("{var_name}_{field}_delete");

                            let child = delete::build_field(
                                ctx, relation, target, nested, var_name, with_vars, &base_var,
                            )?;

                            statement.merge(child);
                        }
                    }
                }
            }
        }
    }

    Ok(statement)
}
