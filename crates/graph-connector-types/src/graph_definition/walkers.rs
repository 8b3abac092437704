mod auth_rule;
mod field;
mod node;
mod relation_field;

pub use auth_rule::AuthRuleWalker;
pub use field::FieldWalker;
pub use node::NodeWalker;
pub use relation_field::RelationFieldWalker;

use std::ops::Range;

use super::{names::StringId, GraphDefinition};

/// An abstraction to iterate over a built schema definition.
///
/// The `Id` must be something that points to an object in the definition.
#[derive(Clone, Copy)]
pub struct Walker<'a, Id> {
    pub(super) id: Id,
    pub(super) definition: &'a GraphDefinition,
}

impl<Id> PartialEq for Walker<'_, Id>
where
    Id: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'a, Id> Walker<'a, Id>
where
    Id: Copy,
{
    pub fn id(self) -> Id {
        self.id
    }

    fn walk<OtherId>(self, id: OtherId) -> Walker<'a, OtherId> {
        self.definition.walk(id)
    }

    fn get_name(self, id: StringId) -> &'a str {
        self.definition.names.get_name(id)
    }
}

/// For a slice sorted by a key, the contiguous range of items matching the
/// key.
fn range_for_key<I, K>(slice: &[I], key: K, extract: fn(&I) -> K) -> Range<usize>
where
    K: Copy + Ord,
{
    let start = slice.partition_point(|item| extract(item) < key);
    let end = slice.partition_point(|item| extract(item) <= key);

    start..end
}
