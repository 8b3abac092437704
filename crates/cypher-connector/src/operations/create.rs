use cypher_ast::{
    ast::{Clause, Params, Statement},
    renderer::Cypher,
};
use graph_connector_types::graph_definition::NodeWalker;
use itertools::Itertools;

use super::push_projection;
use crate::{
    context::input::as_elements, context::TranslationContext, error::Error, request::create,
};

/// Translates a create mutation.
///
/// Every element of the `input` argument creates one root node. Earlier
/// roots are carried over a `WITH` so later elements can see them, and the
/// projection returns every created root.
pub fn translate_create(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
) -> Result<(String, Params), Error> {
    let mut statement = Statement::new();
    let mut vars: Vec<String> = Vec::new();

    let elements = ctx.create_input().map(as_elements).unwrap_or_default();

    for (index, element) in elements.into_iter().enumerate() {
        let var = format!("this{index}");

        if index > 0 {
            statement.push(Clause::With(vars.clone()));
        }

        let child = create::build(ctx, node, element, &var, &vars)?;
        statement.merge(child);

        vars.push(var);
    }

    let fragments: Vec<String> = vars
        .iter()
        .map(|var| push_projection(&mut statement, ctx, node, var))
        .try_collect()?;

    if !fragments.is_empty() {
        statement.push(Clause::Return(fragments.join(", ")));
    }

    tracing::debug!(node = node.name(), roots = fragments.len(), "translated create");

    Ok(Cypher::build(statement))
}
