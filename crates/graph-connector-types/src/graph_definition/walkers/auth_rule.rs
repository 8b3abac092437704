use super::Walker;
use crate::graph_definition::{AuthOperation, AuthRule, AuthRuleId};

/// Definition of an authorization rule.
pub type AuthRuleWalker<'a> = Walker<'a, AuthRuleId>;

impl<'a> AuthRuleWalker<'a> {
    fn get(self) -> &'a AuthRule {
        &self.definition.auth_rules[self.id.0 as usize]
    }

    pub fn operations(self) -> &'a [AuthOperation] {
        &self.get().operations
    }

    /// The roles the rule admits. Empty means the rule does not restrict by
    /// role.
    pub fn roles(self) -> &'a [String] {
        &self.get().roles
    }

    pub fn applies_to(self, operation: AuthOperation) -> bool {
        self.get().operations.contains(&operation)
    }

    /// Whether any of the request roles satisfies the rule.
    pub fn admits_any_role(self, request_roles: &[String]) -> bool {
        self.get().roles.iter().any(|role| request_roles.contains(role))
    }
}
