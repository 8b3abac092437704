use super::pattern::RelPattern;

/// A scalar comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equals,
    In,
    Contains,
    StartsWith,
    EndsWith,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Comparison {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::In => "IN",
            Self::Contains => "CONTAINS",
            Self::StartsWith => "STARTS WITH",
            Self::EndsWith => "ENDS WITH",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

/// The quantifier wrapping a relationship sub-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    All,
    None,
}

impl Quantifier {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::None => "NONE",
        }
    }
}

/// A boolean predicate tree. Rendered into the text following a `WHERE`
/// keyword, or into the predicate argument of a validate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `var.property <op> $param`
    Compare {
        var: String,
        property: String,
        op: Comparison,
        param: String,
    },
    /// `(NOT inner)`
    Not(Box<Condition>),
    /// Joined with ` AND `, without surrounding parentheses.
    And(Vec<Condition>),
    /// Joined with ` OR `, without surrounding parentheses.
    Or(Vec<Condition>),
    /// `(inner)`, forcing precedence explicitly.
    Group(Box<Condition>),
    /// `EXISTS((a)-[:TYPE]->(:Label))`
    Exists(RelPattern),
    /// `ALL(b IN [(a)-[:TYPE]->(b:Label) | b] WHERE inner)`
    Quantified {
        quantifier: Quantifier,
        binding: String,
        pattern: RelPattern,
        inner: Box<Condition>,
    },
    /// An already-rendered predicate, e.g. one supplied by the external
    /// authorization collaborator.
    Raw(String),
}

impl Condition {
    pub fn compare(
        var: impl Into<String>,
        property: impl Into<String>,
        op: Comparison,
        param: impl Into<String>,
    ) -> Self {
        Self::Compare {
            var: var.into(),
            property: property.into(),
            op,
            param: param.into(),
        }
    }

    pub fn not(inner: Condition) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn group(inner: Condition) -> Self {
        Self::Group(Box::new(inner))
    }
}
