/// The direction of a relationship pattern, seen from the `from` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Out,
    In,
}

/// A node pattern, `(var:Label)`. Both the variable and the label are
/// optional so the same type covers anonymous existence targets such as
/// `(:Genre)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePattern {
    var: Option<String>,
    label: Option<String>,
}

impl NodePattern {
    pub fn new(var: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            var: Some(var.into()),
            label: Some(label.into()),
        }
    }

    /// A pattern binding a variable without a label, `(var)`.
    pub fn variable(var: impl Into<String>) -> Self {
        Self {
            var: Some(var.into()),
            label: None,
        }
    }

    /// An anonymous pattern, `(:Label)`.
    pub fn anonymous(label: impl Into<String>) -> Self {
        Self {
            var: None,
            label: Some(label.into()),
        }
    }

    pub fn var(&self) -> Option<&str> {
        self.var.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A single-hop relationship pattern between a bound variable and a node
/// pattern, `(from)-[rel_var:TYPE]->(to)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelPattern {
    from: String,
    rel_var: Option<String>,
    rel_type: String,
    direction: Direction,
    to: NodePattern,
}

impl RelPattern {
    pub fn new(
        from: impl Into<String>,
        rel_type: impl Into<String>,
        direction: Direction,
        to: NodePattern,
    ) -> Self {
        Self {
            from: from.into(),
            rel_var: None,
            rel_type: rel_type.into(),
            direction,
            to,
        }
    }

    /// Binds the relationship itself to a variable, needed when the edge is
    /// deleted later in the same scope.
    pub fn bind(mut self, rel_var: impl Into<String>) -> Self {
        self.rel_var = Some(rel_var.into());
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn rel_var(&self) -> Option<&str> {
        self.rel_var.as_deref()
    }

    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn to(&self) -> &NodePattern {
        &self.to
    }
}
