//! Serializes a [`Statement`] into query text and its parameter map.
//!
//! Rendering happens once, after the builders are done. Clauses that render
//! empty are dropped before joining, so builders can push conditionally
//! without tracking blank fragments themselves.

use itertools::Itertools;

use crate::ast::{
    Clause, Condition, Direction, GuardAction, NodePattern, Params, Pattern, RelPattern, Statement,
};

/// The renderer for the Cypher-like output dialect.
pub struct Cypher;

impl Cypher {
    /// Renders the statement, returning the query text and the flat
    /// parameter map.
    pub fn build(statement: Statement) -> (String, Params) {
        let text = render_statement(&statement);
        (text, statement.into_params())
    }

    /// Renders a bare condition, for callers composing predicates into a
    /// larger boolean expression before pushing a clause.
    pub fn condition(condition: &Condition) -> String {
        render_condition(condition)
    }
}

fn render_statement(statement: &Statement) -> String {
    statement
        .clauses()
        .iter()
        .map(render_clause)
        .filter(|fragment| !fragment.is_empty())
        .join("\n")
}

fn render_clause(clause: &Clause) -> String {
    match clause {
        Clause::Create(pattern) => format!("CREATE {}", render_node(pattern)),
        Clause::Match { optional, pattern } => {
            let keyword = if *optional { "OPTIONAL MATCH" } else { "MATCH" };
            let pattern = match pattern {
                Pattern::Node(node) => render_node(node),
                Pattern::Relationship(rel) => render_rel(rel),
            };

            format!("{keyword} {pattern}")
        }
        Clause::With(vars) => {
            if vars.is_empty() {
                String::new()
            } else {
                format!("WITH {}", vars.iter().join(", "))
            }
        }
        Clause::Where(condition) => format!("WHERE {}", render_condition(condition)),
        Clause::Set { var, property, param } => format!("SET {var}.{property} = ${param}"),
        Clause::MergeRelationship(pattern) => format!("MERGE {}", render_rel(pattern)),
        Clause::NullGuard { var, action } => {
            let action = match action {
                GuardAction::Merge(pattern) => format!("MERGE {}", render_rel(pattern)),
                GuardAction::Delete(var) => format!("DELETE {var}"),
                GuardAction::DetachDelete(var) => format!("DETACH DELETE {var}"),
            };

            format!("FOREACH(_ IN CASE {var} WHEN NULL THEN [] ELSE [1] END | {action})")
        }
        Clause::Validate { condition, message } => format!(
            "CALL apoc.util.validate(NOT({}), \"{message}\", [0])",
            render_condition(condition)
        ),
        Clause::ConditionalUpdate {
            var,
            inner,
            outer_vars,
        } => {
            let inner_text = format!("{}\nRETURN count(*)", render_statement(inner));

            // The conditional-execution primitive takes an explicit parameter
            // map; implicit scope capture does not reach into the quoted
            // inner query.
            let map = outer_vars
                .iter()
                .map(|var| format!("{var}:{var}"))
                .chain(inner.params().keys().map(|key| format!("{key}:${key}")))
                .join(", ");

            format!(
                "CALL apoc.do.when({var} IS NOT NULL, \"{}\", \"\", {{{map}}}) YIELD value AS _",
                escape(&inner_text)
            )
        }
        Clause::DetachDelete(var) => format!("DETACH DELETE {var}"),
        Clause::Return(projection) => format!("RETURN {projection}"),
        Clause::Raw(text) => text.clone(),
    }
}

fn render_condition(condition: &Condition) -> String {
    match condition {
        Condition::Compare {
            var,
            property,
            op,
            param,
        } => format!("{var}.{property} {} ${param}", op.as_str()),
        Condition::Not(inner) => format!("(NOT {})", render_condition(inner)),
        Condition::And(conditions) => conditions.iter().map(render_condition).join(" AND "),
        Condition::Or(conditions) => conditions.iter().map(render_condition).join(" OR "),
        Condition::Group(inner) => format!("({})", render_condition(inner)),
        Condition::Exists(pattern) => format!("EXISTS({})", render_rel(pattern)),
        Condition::Quantified {
            quantifier,
            binding,
            pattern,
            inner,
        } => format!(
            "{}({binding} IN [{} | {binding}] WHERE {})",
            quantifier.as_str(),
            render_rel(pattern),
            render_condition(inner)
        ),
        Condition::Raw(text) => text.clone(),
    }
}

fn render_node(pattern: &NodePattern) -> String {
    match (pattern.var(), pattern.label()) {
        (Some(var), Some(label)) => format!("({var}:{label})"),
        (Some(var), None) => format!("({var})"),
        (None, Some(label)) => format!("(:{label})"),
        (None, None) => "()".to_string(),
    }
}

fn render_rel(pattern: &RelPattern) -> String {
    let rel = match pattern.rel_var() {
        Some(var) => format!("[{var}:{}]", pattern.rel_type()),
        None => format!("[:{}]", pattern.rel_type()),
    };

    let to = render_node(pattern.to());

    match pattern.direction() {
        Direction::Out => format!("({})-{rel}->{to}", pattern.from()),
        Direction::In => format!("({})<-{rel}-{to}", pattern.from()),
    }
}

/// One level of string-literal escaping, applied when a rendered statement
/// is embedded as a quoted argument. Nesting levels compound naturally.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ast::{Comparison, Quantifier};

    #[test]
    fn create_and_set() {
        let mut statement = Statement::new();
        statement.push(Clause::Create(NodePattern::new("this0", "Movie")));
        statement.push(Clause::Set {
            var: "this0".to_string(),
            property: "title".to_string(),
            param: "this0_title".to_string(),
        });
        statement.add_param("this0_title", json!("some title"));

        let (cypher, params) = Cypher::build(statement);

        assert_eq!(cypher, "CREATE (this0:Movie)\nSET this0.title = $this0_title");
        assert_eq!(params.get("this0_title"), Some(&json!("some title")));
    }

    #[test]
    fn null_guarded_merge() {
        let clause = Clause::NullGuard {
            var: "this_connect0".to_string(),
            action: GuardAction::Merge(RelPattern::new(
                "this",
                "IN_GENRE",
                Direction::Out,
                NodePattern::variable("this_connect0"),
            )),
        };

        assert_eq!(
            render_clause(&clause),
            "FOREACH(_ IN CASE this_connect0 WHEN NULL THEN [] ELSE [1] END | MERGE (this)-[:IN_GENRE]->(this_connect0))"
        );
    }

    #[test]
    fn quantified_condition() {
        let condition = Condition::Quantified {
            quantifier: Quantifier::All,
            binding: "this_genres".to_string(),
            pattern: RelPattern::new(
                "this",
                "IN_GENRE",
                Direction::Out,
                NodePattern::new("this_genres", "Genre"),
            ),
            inner: Box::new(Condition::compare(
                "this_genres",
                "name",
                Comparison::Equals,
                "this_genres_name",
            )),
        };

        assert_eq!(
            render_condition(&condition),
            "ALL(this_genres IN [(this)-[:IN_GENRE]->(this_genres:Genre) | this_genres] WHERE this_genres.name = $this_genres_name)"
        );
    }

    #[test]
    fn incoming_relationship_pattern() {
        let pattern = RelPattern::new(
            "this",
            "DIRECTED",
            Direction::In,
            NodePattern::new("this_director0", "Person"),
        )
        .bind("this_director0_rel");

        assert_eq!(
            render_rel(&pattern),
            "(this)<-[this_director0_rel:DIRECTED]-(this_director0:Person)"
        );
    }

    #[test]
    fn conditional_update_parameter_map() {
        let mut inner = Statement::new();
        inner.push(Clause::Set {
            var: "this_genres0".to_string(),
            property: "name".to_string(),
            param: "this_update_genres0_name".to_string(),
        });
        inner.add_param("this_update_genres0_name", json!("Sci-Fi"));

        let clause = Clause::ConditionalUpdate {
            var: "this_genres0".to_string(),
            inner: Box::new(inner),
            outer_vars: vec!["this".to_string(), "this_genres0".to_string()],
        };

        assert_eq!(
            render_clause(&clause),
            "CALL apoc.do.when(this_genres0 IS NOT NULL, \"SET this_genres0.name = $this_update_genres0_name\nRETURN count(*)\", \"\", {this:this, this_genres0:this_genres0, this_update_genres0_name:$this_update_genres0_name}) YIELD value AS _"
        );
    }

    #[test]
    fn escaping_compounds_per_nesting_level() {
        let once = escape("CALL apoc.util.validate(NOT(x), \"Forbidden\", [0])");
        assert_eq!(once, "CALL apoc.util.validate(NOT(x), \\\"Forbidden\\\", [0])");

        let twice = escape(&once);
        assert_eq!(twice, "CALL apoc.util.validate(NOT(x), \\\\\\\"Forbidden\\\\\\\", [0])");
    }

    #[test]
    fn blank_fragments_are_dropped() {
        let mut statement = Statement::new();
        statement.push(Clause::Match {
            optional: false,
            pattern: Pattern::Node(NodePattern::new("this", "Movie")),
        });
        statement.push(Clause::Raw(String::new()));
        statement.push(Clause::With(vec![]));
        statement.push(Clause::Return("this".to_string()));

        let (cypher, _) = Cypher::build(statement);

        assert_eq!(cypher, "MATCH (this:Movie)\nRETURN this");
    }
}
