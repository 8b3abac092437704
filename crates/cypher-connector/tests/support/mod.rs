#![allow(dead_code)]

use cypher_connector::{
    AuthPredicates, Error, NoAuth, Params, PropertiesProjection, TranslationContext,
    TranslationSession,
};
use graph_connector_types::graph_definition::{
    AuthOperation, AuthRule, Field, GraphDefinition, Node, RelationDirection, RelationField,
};
use serde_json::Value;

/// A small movie graph. `Person` creation is restricted to the `admin`
/// role, `search` is a union over `Genre` and `Person`.
pub fn movie_schema() -> GraphDefinition {
    let mut definition = GraphDefinition::new();

    let movie = definition.push_node(Node::new("Movie"));
    let genre = definition.push_node(Node::new("Genre"));
    let person = definition.push_node(Node::new("Person"));

    definition.push_field(Field::new(movie, "title"));
    definition.push_field(Field::new(movie, "released"));
    definition.push_field(Field::new(genre, "name"));
    definition.push_field(Field::new(person, "name"));

    definition.push_relation_field(
        RelationField::new(movie, "genres", "IN_GENRE", RelationDirection::Out, "Genre").list(),
    );
    definition.push_relation_field(RelationField::new(
        movie,
        "director",
        "DIRECTED",
        RelationDirection::In,
        "Person",
    ));
    definition.push_relation_field(
        RelationField::new(movie, "search", "SEARCH", RelationDirection::Out, "Search")
            .list()
            .union(),
    );
    definition.push_relation_field(
        RelationField::new(genre, "movies", "IN_GENRE", RelationDirection::In, "Movie").list(),
    );
    definition.push_relation_field(
        RelationField::new(person, "directed", "DIRECTED", RelationDirection::Out, "Movie").list(),
    );

    definition.push_auth_rule(AuthRule::new(
        person,
        vec![AuthOperation::Create],
        vec!["admin".to_string()],
    ));

    definition.finalize();

    definition
}

pub enum Operation {
    Create,
    Update,
    Delete,
    Count,
}

pub fn translate(
    definition: &GraphDefinition,
    type_name: &str,
    args: &Value,
    operation: Operation,
) -> Result<(String, Params), Error> {
    translate_as(definition, type_name, args, &[], &NoAuth, operation)
}

pub fn translate_as(
    definition: &GraphDefinition,
    type_name: &str,
    args: &Value,
    roles: &[String],
    auth: &dyn AuthPredicates,
    operation: Operation,
) -> Result<(String, Params), Error> {
    let session = TranslationSession::new();

    let ctx = TranslationContext::new(definition, &session, auth, &PropertiesProjection, args)
        .with_roles(roles);

    let node = definition
        .find_node(type_name)
        .expect("node for test schema not found");

    match operation {
        Operation::Create => cypher_connector::translate_create(&ctx, node),
        Operation::Update => cypher_connector::translate_update(&ctx, node),
        Operation::Delete => cypher_connector::translate_delete(&ctx, node),
        Operation::Count => cypher_connector::translate_count(&ctx, node),
    }
}
