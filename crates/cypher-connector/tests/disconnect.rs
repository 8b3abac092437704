mod support;

use expect_test::expect;
use serde_json::json;
use support::{movie_schema, translate, Operation};

#[test]
fn disconnect_deletes_only_the_relationship() {
    let definition = movie_schema();

    let args = json!({
        "disconnect": { "genres": [{ "where": { "name": "Horror" } }] }
    });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)-[this_disconnect_genres0_rel:IN_GENRE]->(this_disconnect_genres0:Genre)
        WHERE this_disconnect_genres0.name = $this_disconnect_genres0_name
        FOREACH(_ IN CASE this_disconnect_genres0 WHEN NULL THEN [] ELSE [1] END | DELETE this_disconnect_genres0_rel)
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);

    assert_eq!(params.len(), 1);
}

#[test]
fn disconnect_recurses_into_nested_disconnects() {
    let definition = movie_schema();

    let args = json!({
        "disconnect": {
            "genres": [{
                "where": { "name": "Sci-Fi" },
                "disconnect": { "movies": [{ "where": { "title": "Alien" } }] }
            }]
        }
    });

    let (cypher, _) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)-[this_disconnect_genres0_rel:IN_GENRE]->(this_disconnect_genres0:Genre)
        WHERE this_disconnect_genres0.name = $this_disconnect_genres0_name
        FOREACH(_ IN CASE this_disconnect_genres0 WHEN NULL THEN [] ELSE [1] END | DELETE this_disconnect_genres0_rel)
        WITH this, this_disconnect_genres0
        OPTIONAL MATCH (this_disconnect_genres0)<-[this_disconnect_genres0_movies0_rel:IN_GENRE]-(this_disconnect_genres0_movies0:Movie)
        WHERE this_disconnect_genres0_movies0.title = $this_disconnect_genres0_movies0_title
        FOREACH(_ IN CASE this_disconnect_genres0_movies0 WHEN NULL THEN [] ELSE [1] END | DELETE this_disconnect_genres0_movies0_rel)
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);
}

#[test]
fn incoming_single_relationship_disconnect() {
    let definition = movie_schema();

    let args = json!({
        "disconnect": { "director": { "where": { "name": "Lana Wachowski" } } }
    });

    let (cypher, _) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)<-[this_disconnect_director0_rel:DIRECTED]-(this_disconnect_director0:Person)
        WHERE this_disconnect_director0.name = $this_disconnect_director0_name
        FOREACH(_ IN CASE this_disconnect_director0 WHEN NULL THEN [] ELSE [1] END | DELETE this_disconnect_director0_rel)
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);
}
