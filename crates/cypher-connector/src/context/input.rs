use graph_connector_types::graph_definition::{NodeWalker, RelationFieldWalker};
use serde_json::{Map, Value};

use super::TranslationContext;

/// One entry of a create or update input object, with relationship keys
/// already resolved against the schema.
pub(crate) enum InputItem<'a> {
    Scalar {
        key: &'a str,
        value: &'a Value,
    },
    Relation {
        relation: RelationFieldWalker<'a>,
        target: NodeWalker<'a>,
        value: &'a Value,
    },
}

/// Walks an input object and classifies every key.
///
/// Union relationships arrive on the wire as `<fieldName>_<MemberType>`
/// keys. Those are resolved here, once, so the builders downstream only
/// ever see a relationship plus a concrete target node.
pub(crate) struct InputIterator<'a> {
    ctx: &'a TranslationContext<'a>,
    node: NodeWalker<'a>,
    entries: serde_json::map::Iter<'a>,
}

impl<'a> InputIterator<'a> {
    pub(crate) fn new(
        ctx: &'a TranslationContext<'a>,
        node: NodeWalker<'a>,
        object: &'a Map<String, Value>,
    ) -> Self {
        Self {
            ctx,
            node,
            entries: object.iter(),
        }
    }

    fn resolve(&self, key: &'a str, value: &'a Value) -> InputItem<'a> {
        if let Some(relation) = self.node.find_relation_field(key) {
            let target = relation
                .target()
                .expect("union relationship input requires a type-prefixed key");

            return InputItem::Relation {
                relation,
                target,
                value,
            };
        }

        for relation in self.node.relation_fields().filter(|relation| relation.is_union()) {
            let Some(suffix) = key.strip_prefix(relation.field_name()) else { continue };
            let Some(type_name) = suffix.strip_prefix('_') else { continue };

            let Some(target) = self.ctx.definition().find_node(type_name) else { continue };

            self.ctx
                .session()
                .warn_union_key_prefix(relation.field_name(), type_name);

            return InputItem::Relation {
                relation,
                target,
                value,
            };
        }

        InputItem::Scalar { key, value }
    }
}

impl<'a> Iterator for InputIterator<'a> {
    type Item = InputItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next()?;

        Some(self.resolve(key, value))
    }
}

/// A nested mutation requested under a relationship entry.
pub(crate) enum NestedOperation<'a> {
    Update(&'a Value),
    Connect(&'a Value),
    Disconnect(&'a Value),
    Create(&'a Value),
    Delete(&'a Value),
}

/// The operations of a relationship entry, in the order they execute.
///
/// The wire order of the JSON keys is irrelevant; updates always run
/// before connects, connects before disconnects and so on.
pub(crate) fn nested_operations(value: &Value) -> Vec<NestedOperation<'_>> {
    let Some(object) = value.as_object() else {
        unreachable!("relationship input must be an object")
    };

    let mut operations = Vec::new();

    if let Some(nested) = object.get("update") {
        operations.push(NestedOperation::Update(nested));
    }

    if let Some(nested) = object.get("connect") {
        operations.push(NestedOperation::Connect(nested));
    }

    if let Some(nested) = object.get("disconnect") {
        operations.push(NestedOperation::Disconnect(nested));
    }

    if let Some(nested) = object.get("create") {
        operations.push(NestedOperation::Create(nested));
    }

    if let Some(nested) = object.get("delete") {
        operations.push(NestedOperation::Delete(nested));
    }

    operations
}

/// Normalizes a one-or-many input value into a slice of elements.
///
/// Single-relationship fields take a bare object where list fields take an
/// array; both shapes run through the same per-element loop afterwards.
pub(crate) fn as_elements(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(elements) => elements.iter().collect(),
        other => vec![other],
    }
}
