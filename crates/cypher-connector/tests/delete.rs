mod support;

use expect_test::expect;
use serde_json::json;
use support::{movie_schema, translate, Operation};

#[test]
fn root_delete() {
    let definition = movie_schema();

    let args = json!({ "where": { "title": "The Matrix" } });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Delete).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WHERE this.title = $this_title
        DETACH DELETE this"#]]
    .assert_eq(&cypher);

    assert_eq!(params.get("this_title"), Some(&json!("The Matrix")));
}

#[test]
fn nested_deletes_run_before_the_root() {
    let definition = movie_schema();

    let args = json!({
        "where": { "title": "The Matrix" },
        "delete": {
            "genres": [{
                "where": { "name": "Dated" },
                "delete": { "movies": [{ "where": { "title": "Johnny Mnemonic" } }] }
            }]
        }
    });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Delete).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WHERE this.title = $this_title
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_genres0:Genre)
        WHERE this_genres0.name = $this_genres0_name
        WITH this, this_genres0
        OPTIONAL MATCH (this_genres0)<-[:IN_GENRE]-(this_genres0_movies0:Movie)
        WHERE this_genres0_movies0.title = $this_genres0_movies0_title
        FOREACH(_ IN CASE this_genres0_movies0 WHEN NULL THEN [] ELSE [1] END | DETACH DELETE this_genres0_movies0)
        FOREACH(_ IN CASE this_genres0 WHEN NULL THEN [] ELSE [1] END | DETACH DELETE this_genres0)
        DETACH DELETE this"#]]
    .assert_eq(&cypher);

    assert_eq!(params.len(), 3);
}

#[test]
fn multiple_elements_get_indexed_variables() {
    let definition = movie_schema();

    let args = json!({
        "delete": {
            "genres": [
                { "where": { "name": "Dated" } },
                { "where": { "name": "Horror" } }
            ]
        }
    });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Delete).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_genres0:Genre)
        WHERE this_genres0.name = $this_genres0_name
        FOREACH(_ IN CASE this_genres0 WHEN NULL THEN [] ELSE [1] END | DETACH DELETE this_genres0)
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_genres1:Genre)
        WHERE this_genres1.name = $this_genres1_name
        FOREACH(_ IN CASE this_genres1 WHEN NULL THEN [] ELSE [1] END | DETACH DELETE this_genres1)
        DETACH DELETE this"#]]
    .assert_eq(&cypher);

    assert_eq!(params.len(), 2);
}

#[test]
fn nested_delete_inside_an_update() {
    let definition = movie_schema();

    let args = json!({
        "update": {
            "genres": {
                "delete": [{ "where": { "name": "Dated" } }]
            }
        }
    });

    let (cypher, _) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_genres_delete0:Genre)
        WHERE this_genres_delete0.name = $this_genres_delete0_name
        FOREACH(_ IN CASE this_genres_delete0 WHEN NULL THEN [] ELSE [1] END | DETACH DELETE this_genres_delete0)
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);
}
