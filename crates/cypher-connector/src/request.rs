pub mod connect;
pub mod create;
pub mod delete;
pub mod disconnect;
pub mod filter;
pub mod update;

use cypher_ast::ast::{Clause, Condition, Direction, NodePattern, RelPattern, Statement};
use graph_connector_types::graph_definition::{NodeWalker, RelationDirection, RelationFieldWalker};

use crate::{
    auth::{AuthOperation, AuthRequest},
    context::TranslationContext,
    error::Error,
};

fn direction(direction: RelationDirection) -> Direction {
    match direction {
        RelationDirection::Out => Direction::Out,
        RelationDirection::In => Direction::In,
    }
}

/// The relationship pattern between the given variable and the target node
/// pattern, honoring the schema direction of the field.
pub(crate) fn rel_pattern(from: &str, relation: RelationFieldWalker<'_>, to: NodePattern) -> RelPattern {
    RelPattern::new(from, relation.rel_type(), direction(relation.direction()), to)
}

/// Asks the predicate source for the check point and pushes a validation
/// call if it returns one.
pub(crate) fn push_auth_validate(
    statement: &mut Statement,
    ctx: &TranslationContext<'_>,
    request: AuthRequest<'_>,
) -> Result<(), Error> {
    if let Some(predicate) = ctx.auth().predicate(request)? {
        statement.push(Clause::Validate {
            condition: Condition::Raw(predicate.condition),
            message: "Forbidden".to_string(),
        });
        statement.extend_params(predicate.params);
    }

    Ok(())
}

/// Rejects the request outright when the node carries role-restricted
/// create rules and the request roles satisfy none of them.
pub(crate) fn check_create_roles(ctx: &TranslationContext<'_>, node: NodeWalker<'_>) -> Result<(), Error> {
    let mut restricted = node
        .auth_rules_for(AuthOperation::Create)
        .filter(|rule| !rule.roles().is_empty())
        .peekable();

    if restricted.peek().is_none() {
        return Ok(());
    }

    if restricted.any(|rule| rule.admits_any_role(ctx.roles())) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
