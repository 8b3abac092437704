use super::{
    condition::Condition,
    pattern::{NodePattern, RelPattern},
    statement::Statement,
};

/// The pattern argument of a `MATCH` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Node(NodePattern),
    Relationship(RelPattern),
}

/// The action executed inside a null-guarded `FOREACH` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardAction {
    /// `MERGE (a)-[:TYPE]->(b)`
    Merge(RelPattern),
    /// `DELETE var`, removing a matched relationship.
    Delete(String),
    /// `DETACH DELETE var`, removing a matched node with its edges.
    DetachDelete(String),
}

/// One clause of a query. A translated operation is an ordered sequence of
/// these; the renderer turns each into a line of query text and drops the
/// ones that render empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `CREATE (var:Label)`
    Create(NodePattern),
    /// `MATCH pattern` or `OPTIONAL MATCH pattern`
    Match { optional: bool, pattern: Pattern },
    /// `WITH a, b, c`, re-exposing outer variables to the following scope.
    With(Vec<String>),
    /// `WHERE condition`
    Where(Condition),
    /// `SET var.property = $param`
    Set {
        var: String,
        property: String,
        param: String,
    },
    /// `MERGE (a)-[:TYPE]->(b)`
    MergeRelationship(RelPattern),
    /// `FOREACH(_ IN CASE var WHEN NULL THEN [] ELSE [1] END | action)`
    ///
    /// Emulates an optional write: when `var` did not match, the list is
    /// empty and the action is a no-op instead of an error.
    NullGuard { var: String, action: GuardAction },
    /// `CALL apoc.util.validate(NOT(condition), "message", [0])`
    ///
    /// Raises at query execution time when the predicate is false. The
    /// translation layer only ever emits the check.
    Validate { condition: Condition, message: String },
    /// `CALL apoc.do.when(var IS NOT NULL, "...", "", {...}) YIELD value AS _`
    ///
    /// Runs the inner statement only when `var` matched. The inner statement
    /// is rendered and escaped by the renderer; its parameter table, plus the
    /// in-scope variables, becomes the explicit parameter map the primitive
    /// requires. The caller remains responsible for merging the inner
    /// parameters into its own statement.
    ConditionalUpdate {
        var: String,
        inner: Box<Statement>,
        outer_vars: Vec<String>,
    },
    /// `DETACH DELETE var`
    DetachDelete(String),
    /// `RETURN projection`
    Return(String),
    /// Pre-rendered text, e.g. auth-validate fragments from the projection
    /// collaborator.
    Raw(String),
}
