use super::{AuthRuleWalker, FieldWalker, RelationFieldWalker, Walker};
use crate::graph_definition::{
    ids::{AuthRuleId, FieldId, RelationFieldId},
    AuthOperation, NodeId,
};

/// Definition of a node entity.
pub type NodeWalker<'a> = Walker<'a, NodeId>;

impl<'a> NodeWalker<'a> {
    /// The type name of the node, also used as its label in emitted query
    /// text.
    pub fn name(self) -> &'a str {
        self.get_name(self.definition.nodes[self.id.0 as usize].name())
    }

    /// An iterator over the scalar fields of the node.
    pub fn fields(self) -> impl Iterator<Item = FieldWalker<'a>> + 'a {
        let range = super::range_for_key(&self.definition.fields, self.id, |field| field.node_id());

        range.map(move |id| self.walk(FieldId(id as u32)))
    }

    /// An iterator over the relationship fields of the node.
    pub fn relation_fields(self) -> impl Iterator<Item = RelationFieldWalker<'a>> + 'a {
        let range = super::range_for_key(&self.definition.relation_fields, self.id, |field| {
            field.node_id()
        });

        range.map(move |id| self.walk(RelationFieldId(id as u32)))
    }

    /// An iterator over the authorization rules attached to the node.
    pub fn auth_rules(self) -> impl Iterator<Item = AuthRuleWalker<'a>> + 'a {
        let range = super::range_for_key(&self.definition.auth_rules, self.id, |rule| rule.node_id());

        range.map(move |id| self.walk(AuthRuleId(id as u32)))
    }

    /// The auth rules covering one operation.
    pub fn auth_rules_for(self, operation: AuthOperation) -> impl Iterator<Item = AuthRuleWalker<'a>> + 'a {
        self.auth_rules().filter(move |rule| rule.applies_to(operation))
    }

    /// Find a scalar field by name.
    pub fn find_field(self, name: &str) -> Option<FieldWalker<'a>> {
        self.definition
            .names
            .get_field_id(self.id, name)
            .map(|id| self.walk(id))
    }

    /// Find a relationship field by name.
    pub fn find_relation_field(self, name: &str) -> Option<RelationFieldWalker<'a>> {
        self.definition
            .names
            .get_relation_field_id(self.id, name)
            .map(|id| self.walk(id))
    }
}
