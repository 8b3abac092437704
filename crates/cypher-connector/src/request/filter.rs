//! Turns a `where` input object into a Cypher predicate.
//!
//! Parameter names mirror the path taken through the input so nested and
//! repeated filters never collide: the chain string accumulates combinator
//! and relationship segments, and the key (operator suffix included) is
//! appended at the leaf.

use cypher_ast::{
    ast::{Comparison, Condition, NodePattern, Params, Quantifier},
    renderer::Cypher,
};
use graph_connector_types::graph_definition::{NodeWalker, RelationFieldWalker};
use serde_json::Value;

use super::rel_pattern;
use crate::context::TranslationContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WhereOperator {
    Equals,
    Not,
    In,
    NotIn,
    Contains,
    NotContains,
    StartsWith,
    NotStartsWith,
    EndsWith,
    NotEndsWith,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Splits a filter key into the field name and the operator suffix.
///
/// Longer suffixes are matched first so `_NOT_IN` never parses as `_IN`.
fn parse_operator(key: &str) -> (&str, WhereOperator) {
    use WhereOperator::*;

    const SUFFIXES: &[(&str, WhereOperator)] = &[
        ("_NOT_IN", NotIn),
        ("_NOT_CONTAINS", NotContains),
        ("_NOT_STARTS_WITH", NotStartsWith),
        ("_NOT_ENDS_WITH", NotEndsWith),
        ("_IN", In),
        ("_CONTAINS", Contains),
        ("_STARTS_WITH", StartsWith),
        ("_ENDS_WITH", EndsWith),
        ("_LTE", Lte),
        ("_LT", Lt),
        ("_GTE", Gte),
        ("_GT", Gt),
        ("_NOT", Not),
    ];

    for (suffix, operator) in SUFFIXES {
        if let Some(field) = key.strip_suffix(suffix) {
            return (field, *operator);
        }
    }

    (key, Equals)
}

/// Builds the predicate for a `where` input against the node bound to
/// `var_name`.
///
/// Returns the clause text and the parameters it references. The text
/// carries the `WHERE` keyword unless `recursing` is set, and is empty when
/// the input produces no conditions.
pub fn build(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    input: &Value,
    var_name: &str,
    chain_str: Option<&str>,
    recursing: bool,
) -> (String, Params) {
    let (conditions, params) = conditions(ctx, node, input, var_name, chain_str);

    if conditions.is_empty() {
        return (String::new(), params);
    }

    let rendered = Cypher::condition(&Condition::And(conditions));

    let clause = if recursing {
        rendered
    } else {
        format!("WHERE {rendered}")
    };

    (clause, params)
}

fn conditions(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    input: &Value,
    var_name: &str,
    chain_str: Option<&str>,
) -> (Vec<Condition>, Params) {
    // An absent or explicitly null filter matches everything.
    let Some(object) = input.as_object() else {
        return (Vec::new(), Params::new());
    };

    let base = chain_str.unwrap_or(var_name);

    let mut out = Vec::new();
    let mut params = Params::new();

    for (key, value) in object {
        if key == "AND" || key == "OR" {
            combinator(ctx, node, key, value, var_name, base, &mut out, &mut params);
            continue;
        }

        let (field_name, operator) = parse_operator(key);

        if let Some(relation) = node.find_relation_field(field_name) {
            relationship(
                ctx, relation, operator, value, var_name, base, field_name, &mut out, &mut params,
            );
            continue;
        }

        let param = format!("{base}_{key}");
        out.push(scalar(var_name, field_name, operator, &param));
        params.insert(param, value.clone());
    }

    (out, params)
}

fn scalar(var_name: &str, property: &str, operator: WhereOperator, param: &str) -> Condition {
    use WhereOperator::*;

    let compare = |op| Condition::compare(var_name, property, op, param);

    match operator {
        Equals => compare(Comparison::Equals),
        Not => Condition::not(compare(Comparison::Equals)),
        In => compare(Comparison::In),
        NotIn => Condition::not(compare(Comparison::In)),
        Contains => compare(Comparison::Contains),
        NotContains => Condition::not(compare(Comparison::Contains)),
        StartsWith => compare(Comparison::StartsWith),
        NotStartsWith => Condition::not(compare(Comparison::StartsWith)),
        EndsWith => compare(Comparison::EndsWith),
        NotEndsWith => Condition::not(compare(Comparison::EndsWith)),
        Lt => compare(Comparison::Lt),
        Lte => compare(Comparison::Lte),
        Gt => compare(Comparison::Gt),
        Gte => compare(Comparison::Gte),
    }
}

#[allow(clippy::too_many_arguments)]
fn combinator(
    ctx: &TranslationContext<'_>,
    node: NodeWalker<'_>,
    key: &str,
    value: &Value,
    var_name: &str,
    base: &str,
    out: &mut Vec<Condition>,
    params: &mut Params,
) {
    let Some(elements) = value.as_array() else {
        unreachable!("boolean combinators take an array of filters")
    };

    let mut element_conditions = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        let chain = if index == 0 {
            format!("{base}_{key}")
        } else {
            format!("{base}_{key}{index}")
        };

        let (inner, inner_params) = conditions(ctx, node, element, var_name, Some(&chain));
        params.extend(inner_params);

        match inner.len() {
            0 => {}
            1 => element_conditions.extend(inner),
            // Grouped so the element stays atomic under an OR join.
            _ => element_conditions.push(Condition::group(Condition::And(inner))),
        }
    }

    if element_conditions.is_empty() {
        return;
    }

    let combined = match key {
        "AND" => Condition::And(element_conditions),
        _ => Condition::Or(element_conditions),
    };

    out.push(Condition::group(combined));
}

#[allow(clippy::too_many_arguments)]
fn relationship(
    ctx: &TranslationContext<'_>,
    relation: RelationFieldWalker<'_>,
    operator: WhereOperator,
    value: &Value,
    var_name: &str,
    base: &str,
    field_name: &str,
    out: &mut Vec<Condition>,
    params: &mut Params,
) {
    let target = relation
        .target()
        .expect("node for relationship filter not found");

    let binding_base = format!("{base}_{field_name}");

    out.push(Condition::Exists(rel_pattern(
        var_name,
        relation,
        NodePattern::anonymous(target.name()),
    )));

    let mut quantified = |quantifier, binding: String, element: &Value| -> Option<Condition> {
        let (inner, inner_params) = conditions(ctx, target, element, &binding, None);
        params.extend(inner_params);

        if inner.is_empty() {
            return None;
        }

        Some(Condition::Quantified {
            quantifier,
            pattern: rel_pattern(var_name, relation, NodePattern::new(binding.as_str(), target.name())),
            binding,
            inner: Box::new(Condition::And(inner)),
        })
    };

    match operator {
        WhereOperator::Equals => {
            out.extend(quantified(Quantifier::All, binding_base, value));
        }
        WhereOperator::Not => {
            out.extend(quantified(Quantifier::None, binding_base, value));
        }
        WhereOperator::In => {
            let Some(elements) = value.as_array() else {
                unreachable!("relationship IN filters take an array of filters")
            };

            let groups: Vec<_> = elements
                .iter()
                .enumerate()
                .filter_map(|(index, element)| {
                    quantified(Quantifier::All, format!("{binding_base}{index}"), element)
                })
                .collect();

            if !groups.is_empty() {
                out.push(Condition::group(Condition::Or(groups)));
            }
        }
        _ => unreachable!("unsupported relationship filter operator"),
    }
}
