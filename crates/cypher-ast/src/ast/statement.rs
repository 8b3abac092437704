use serde_json::Value;

use super::clause::Clause;

/// The flat parameter map of a translated operation. Keys correspond exactly
/// to the `$`-prefixed placeholders in the rendered query text; insertion
/// order is preserved so output stays deterministic.
pub type Params = serde_json::Map<String, Value>;

/// An ordered sequence of clauses plus the parameter table referenced by
/// them.
///
/// Every builder invocation allocates a fresh statement, and a parent merges
/// a child's output with [`Statement::merge`]. Parameter keys are namespaced
/// by the builders' deterministic variable paths, so merging never collides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    clauses: Vec<Clause>,
    params: Params,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn add_param(&mut self, name: impl Into<String>, value: Value) {
        self.params.insert(name.into(), value);
    }

    pub fn extend_params(&mut self, params: Params) {
        self.params.extend(params);
    }

    /// Appends another statement's clauses and parameters to this one.
    pub fn merge(&mut self, other: Statement) {
        self.clauses.extend(other.clauses);
        self.params.extend(other.params);
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.params.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

impl FromIterator<Clause> for Statement {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
            params: Params::new(),
        }
    }
}
