//! Connects existing nodes to a parent over a relationship field.
//!
//! Each element optionally matches candidates, validates them, and merges
//! the relationship inside a null guard so an empty match is a no-op rather
//! than an error.

use cypher_ast::ast::{Clause, Condition, GuardAction, NodePattern, Pattern, Statement};
use graph_connector_types::graph_definition::{NodeWalker, RelationFieldWalker};
use serde_json::Value;

use super::{filter, push_auth_validate, rel_pattern};
use crate::{
    auth::{AuthOperation, AuthRequest, PredicateKind},
    context::input::{as_elements, InputItem, InputIterator},
    context::TranslationContext,
    error::Error,
};

/// One connect request over a single relationship field.
pub struct Connect<'a> {
    /// Variables that must stay in scope across the emitted `WITH` rows.
    pub with_vars: &'a [String],
    /// The input for this field, a single element or an array of them.
    pub value: &'a Value,
    /// Element variables are `{base_var}{index}`.
    pub base_var: &'a str,
    pub relation: RelationFieldWalker<'a>,
    pub parent_var: &'a str,
    pub parent_node: NodeWalker<'a>,
    pub target: NodeWalker<'a>,
    /// Set when the parent node is being created in the same statement. The
    /// parent predicate is skipped; a node that does not exist yet has no
    /// state to check.
    pub from_create: bool,
}

pub fn build(ctx: &TranslationContext<'_>, connect: Connect<'_>) -> Result<Statement, Error> {
    let mut statement = Statement::new();

    for (index, element) in as_elements(connect.value).into_iter().enumerate() {
        let var = format!("{}{index}", connect.base_var);

        statement.push(Clause::With(connect.with_vars.to_vec()));

        if !connect.from_create {
            push_auth_validate(
                &mut statement,
                ctx,
                AuthRequest {
                    operation: AuthOperation::Connect,
                    kind: PredicateKind::Bind,
                    node: connect.parent_node,
                    var_name: connect.parent_var,
                },
            )?;
        }

        statement.push(Clause::Match {
            optional: true,
            pattern: Pattern::Node(NodePattern::new(var.as_str(), connect.target.name())),
        });

        if let Some(where_input) = element.get("where") {
            let (clause, params) = filter::build(ctx, connect.target, where_input, &var, None, true);

            if !clause.is_empty() {
                statement.push(Clause::Where(Condition::Raw(clause)));
                statement.extend_params(params);
            }
        }

        // The candidate is checked before the merge, the resulting state
        // after it.
        push_auth_validate(
            &mut statement,
            ctx,
            AuthRequest {
                operation: AuthOperation::Connect,
                kind: PredicateKind::Allow,
                node: connect.target,
                var_name: &var,
            },
        )?;

        statement.push(Clause::NullGuard {
            var: var.clone(),
            action: GuardAction::Merge(rel_pattern(
                connect.parent_var,
                connect.relation,
                NodePattern::variable(var.as_str()),
            )),
        });

        push_auth_validate(
            &mut statement,
            ctx,
            AuthRequest {
                operation: AuthOperation::Connect,
                kind: PredicateKind::Bind,
                node: connect.target,
                var_name: &var,
            },
        )?;

        if let Some(nested) = element.get("connect") {
            let Some(object) = nested.as_object() else {
                unreachable!("nested connect input must be an object")
            };

            let mut inner_with = connect.with_vars.to_vec();
            inner_with.push(var.clone());

            for item in InputIterator::new(ctx, connect.target, object) {
                let InputItem::Relation {
                    relation,
                    target,
                    value,
                } = item
                else {
                    unreachable!("nested connect keys must be relationship fields")
                };

                let base_var = format!("{var}_{}", relation.field_name());

                let child = build(
                    ctx,
                    Connect {
                        with_vars: &inner_with,
                        value,
                        base_var: &base_var,
                        relation,
                        parent_var: &var,
                        parent_node: connect.target,
                        target,
                        from_create: false,
                    },
                )?;

                statement.merge(child);
            }
        }
    }

    Ok(statement)
}
