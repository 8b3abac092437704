use super::{NodeWalker, Walker};
use crate::graph_definition::FieldId;

/// Definition of a scalar field.
pub type FieldWalker<'a> = Walker<'a, FieldId>;

impl<'a> FieldWalker<'a> {
    pub fn name(self) -> &'a str {
        self.get_name(self.definition.fields[self.id.0 as usize].name())
    }

    /// The node the field belongs to.
    pub fn node(self) -> NodeWalker<'a> {
        self.walk(self.definition.fields[self.id.0 as usize].node_id())
    }
}
