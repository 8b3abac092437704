//! Removes relationships between a parent and matched target nodes.
//!
//! The nodes on both ends survive; only the relationship is deleted, and
//! only when the optional match found one.

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

/// One disconnect request over a single relationship field.
pub struct Disconnect<'a> {
    pub with_vars: &'a [String],
    pub value: &'a Value,
    /// Element variables are `{base_var}{index}`, relationship variables
    /// `{base_var}{index}_rel`.
    pub base_var: &'a str,
    pub relation: RelationFieldWalker<'a>,
    pub parent_var: &'a str,
    pub parent_node: NodeWalker<'a>,
    pub target: NodeWalker<'a>,
}

pub fn build(ctx: &TranslationContext<'_>, disconnect: Disconnect<'_>) -> Result<Statement, Error> {
    let mut statement = Statement::new();

    for (index, element) in as_elements(disconnect.value).into_iter().enumerate() {
        let var = format!("{}{index}", disconnect.base_var);
        let rel_var = format!("{var}_rel");

        statement.push(Clause::With(disconnect.with_vars.to_vec()));

        push_auth_validate(
            &mut statement,
            ctx,
            AuthRequest {
                operation: AuthOperation::Disconnect,
                kind: PredicateKind::Bind,
                node: disconnect.parent_node,
                var_name: disconnect.parent_var,
            },
        )?;

        // The relationship variable is bound so the guard can delete it
        // without touching the nodes.
        statement.push(Clause::Match {
            optional: true,
            pattern: Pattern::Relationship(
                rel_pattern(
                    disconnect.parent_var,
                    disconnect.relation,
                    NodePattern::new(var.as_str(), disconnect.target.name()),
                )
                .bind(rel_var.as_str()),
            ),
        });

        if let Some(where_input) = element.get("where") {
            let (clause, params) =
                filter::build(ctx, disconnect.target, where_input, &var, None, true);

            if !clause.is_empty() {
                statement.push(Clause::Where(Condition::Raw(clause)));
                statement.extend_params(params);
            }
        }

        push_auth_validate(
            &mut statement,
            ctx,
            AuthRequest {
                operation: AuthOperation::Disconnect,
                kind: PredicateKind::Allow,
                node: disconnect.target,
                var_name: &var,
            },
        )?;

        statement.push(Clause::NullGuard {
            var: var.clone(),
            action: GuardAction::Delete(rel_var),
        });

        if let Some(nested) = element.get("disconnect") {
            let Some(object) = nested.as_object() else {
                unreachable!("nested disconnect input must be an object")
            };

            let mut inner_with = disconnect.with_vars.to_vec();
            inner_with.push(var.clone());

            for item in InputIterator::new(ctx, disconnect.target, object) {
                let InputItem::Relation {
                    relation,
                    target,
                    value,
                } = item
                else {
                    unreachable!("nested disconnect keys must be relationship fields")
                };

                let base_var = format!("{var}_{}", relation.field_name());

                let child = build(
                    ctx,
                    Disconnect {
                        with_vars: &inner_with,
                        value,
                        base_var: &base_var,
                        relation,
                        parent_var: &var,
                        parent_node: disconnect.target,
                        target,
                    },
                )?;

                statement.merge(child);
            }
        }
    }

    Ok(statement)
}
