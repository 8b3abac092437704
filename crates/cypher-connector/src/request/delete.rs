//! Deletes related nodes reached over relationship fields.
//!
//! Deletion is depth-first: nested deletes run before the node they hang
//! off is detach-deleted, and every delete sits inside a null guard so an
//! empty match is a no-op.

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

/// Builds the delete statements for a delete input object keyed by
/// relationship fields. Non-relationship keys are ignored.
pub fn build(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    input: &Value,
    parent_var: &str,
    with_vars: &[String],
    chain_str: Option<&str>,
) -> Result<Statement, Error> {
    let mut statement = Statement::new();

    let Some(object) = input.as_object() else {
        return Ok(statement);
    };

    let base = chain_str.unwrap_or(parent_var);

    for item in InputIterator::new(ctx, node, object) {
        let InputItem::Relation {
            relation,
            target,
            value,
        } = item
        else {
            continue;
        };

        let base_var = format!("{base}_{}", relation.field_name());

        let child = build_field(ctx, relation, target, value, parent_var, with_vars, &base_var)?;
        statement.merge(child);
    }

    Ok(statement)
}

/// Builds the delete statements for the elements of one relationship field.
pub(crate) fn build_field(
    ctx: &TranslationContext<'_>,
    relation: RelationFieldWalker<'_>,
    target: NodeWalker<'_>,
    value: &Value,
    parent_var: &str,
    with_vars: &[String],
    base_var: &str,
) -> Result<Statement, Error> {
    let mut statement = Statement::new();

    for (index, element) in as_elements(value).into_iter().enumerate() {
        let var = format!("{base_var}{index}");

        statement.push(Clause::With(with_vars.to_vec()));

        statement.push(Clause::Match {
            optional: true,
            pattern: Pattern::Relationship(rel_pattern(
                parent_var,
                relation,
                NodePattern::new(var.as_str(), target.name()),
            )),
        });

        if let Some(where_input) = element.get("where") {
            let (clause, params) = filter::build(ctx, target, where_input, &var, None, true);

            if !clause.is_empty() {
                statement.push(Clause::Where(Condition::Raw(clause)));
                statement.extend_params(params);
            }
        }

        push_auth_validate(
            &mut statement,
            ctx,
            AuthRequest {
                operation: AuthOperation::Delete,
                kind: PredicateKind::Allow,
                node: target,
                var_name: &var,
            },
        )?;

        // Children first, then the node itself.
        if let Some(nested) = element.get("delete") {
            let mut inner_with = with_vars.to_vec();
            inner_with.push(var.clone());

            let child = build(ctx, target, nested, &var, &inner_with, None)?;
            statement.merge(child);
        }

        statement.push(Clause::NullGuard {
            var: var.clone(),
            action: GuardAction::DetachDelete(var.clone()),
        });
    }

    Ok(statement)
}
