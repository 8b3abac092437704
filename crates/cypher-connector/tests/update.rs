mod support;

use expect_test::expect;
use serde_json::json;
use support::{movie_schema, translate, Operation};

#[test]
fn scalar_update() {
    let definition = movie_schema();

    let args = json!({
        "where": { "title": "The Matrix" },
        "update": { "released": 2001 }
    });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WHERE this.title = $this_title
        SET this.released = $this_update_released
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);

    assert_eq!(
        serde_json::Value::Object(params),
        json!({
            "this_title": "The Matrix",
            "this_update_released": 2001,
        })
    );
}

#[test]
fn nested_update_runs_conditionally() {
    let definition = movie_schema();

    let args = json!({
        "update": {
            "genres": {
                "update": {
                    "where": { "name": "Sci-Fi" },
                    "update": { "name": "Science Fiction" }
                }
            }
        }
    });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_genres0:Genre)
        WHERE this_genres0.name = $this_genres0_name
        CALL apoc.do.when(this_genres0 IS NOT NULL, "SET this_genres0.name = $this_update_genres0_name
        RETURN count(*)", "", {this:this, this_genres0:this_genres0, this_update_genres0_name:$this_update_genres0_name}) YIELD value AS _
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);

    // The inner parameter surfaces on the outer statement so the driver
    // can hand it to the conditional call.
    assert_eq!(
        serde_json::Value::Object(params),
        json!({
            "this_genres0_name": "Sci-Fi",
            "this_update_genres0_name": "Science Fiction",
        })
    );
}

#[test]
fn doubly_nested_update_escapes_the_inner_query() {
    let definition = movie_schema();

    let args = json!({
        "update": {
            "genres": {
                "update": {
                    "update": {
                        "movies": {
                            "update": {
                                "update": { "released": 2021 }
                            }
                        }
                    }
                }
            }
        }
    });

    let (cypher, _) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_genres0:Genre)
        CALL apoc.do.when(this_genres0 IS NOT NULL, "WITH this, this_genres0
        OPTIONAL MATCH (this_genres0)<-[:IN_GENRE]-(this_genres0_movies0:Movie)
        CALL apoc.do.when(this_genres0_movies0 IS NOT NULL, \"SET this_genres0_movies0.released = $this_update_genres0_movies0_released
        RETURN count(*)\", \"\", {this:this, this_genres0:this_genres0, this_genres0_movies0:this_genres0_movies0, this_update_genres0_movies0_released:$this_update_genres0_movies0_released}) YIELD value AS _
        RETURN count(*)", "", {this:this, this_genres0:this_genres0, this_update_genres0_movies0_released:$this_update_genres0_movies0_released}) YIELD value AS _
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);
}

#[test]
fn operation_arguments_run_in_a_fixed_order() {
    let definition = movie_schema();

    let args = json!({
        "update": { "title": "The Matrix" },
        "connect": { "genres": [{ "where": { "name": "Action" } }] },
        "disconnect": { "genres": [{ "where": { "name": "Horror" } }] },
        "create": { "genres": [{ "name": "Cyberpunk" }] },
        "delete": { "genres": [{ "where": { "name": "Dated" } }] }
    });

    let (cypher, params) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        SET this.title = $this_update_title
        WITH this
        OPTIONAL MATCH (this_connect_genres0:Genre)
        WHERE this_connect_genres0.name = $this_connect_genres0_name
        FOREACH(_ IN CASE this_connect_genres0 WHEN NULL THEN [] ELSE [1] END | MERGE (this)-[:IN_GENRE]->(this_connect_genres0))
        WITH this
        OPTIONAL MATCH (this)-[this_disconnect_genres0_rel:IN_GENRE]->(this_disconnect_genres0:Genre)
        WHERE this_disconnect_genres0.name = $this_disconnect_genres0_name
        FOREACH(_ IN CASE this_disconnect_genres0 WHEN NULL THEN [] ELSE [1] END | DELETE this_disconnect_genres0_rel)
        CREATE (this_create_genres0:Genre)
        SET this_create_genres0.name = $this_create_genres0_name
        MERGE (this)-[:IN_GENRE]->(this_create_genres0)
        WITH this
        OPTIONAL MATCH (this)-[:IN_GENRE]->(this_delete_genres0:Genre)
        WHERE this_delete_genres0.name = $this_delete_genres0_name
        FOREACH(_ IN CASE this_delete_genres0 WHEN NULL THEN [] ELSE [1] END | DETACH DELETE this_delete_genres0)
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);

    assert_eq!(params.len(), 5);
}

#[test]
fn nested_operations_delegate_from_the_update_input() {
    let definition = movie_schema();

    let args = json!({
        "update": {
            "genres": {
                "connect": [{ "where": { "name": "Action" } }],
                "disconnect": [{ "where": { "name": "Horror" } }]
            }
        }
    });

    let (cypher, _) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this_genres_connect0:Genre)
        WHERE this_genres_connect0.name = $this_genres_connect0_name
        FOREACH(_ IN CASE this_genres_connect0 WHEN NULL THEN [] ELSE [1] END | MERGE (this)-[:IN_GENRE]->(this_genres_connect0))
        WITH this
        OPTIONAL MATCH (this)-[this_genres_disconnect0_rel:IN_GENRE]->(this_genres_disconnect0:Genre)
        WHERE this_genres_disconnect0.name = $this_genres_disconnect0_name
        FOREACH(_ IN CASE this_genres_disconnect0 WHEN NULL THEN [] ELSE [1] END | DELETE this_genres_disconnect0_rel)
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);
}

#[test]
fn single_relationship_input_is_normalized_to_one_element() {
    let definition = movie_schema();

    let args = json!({
        "connect": { "director": { "where": { "name": "Lana Wachowski" } } }
    });

    let (cypher, _) = translate(&definition, "Movie", &args, Operation::Update).unwrap();

    expect![[r#"
        MATCH (this:Movie)
        WITH this
        OPTIONAL MATCH (this_connect_director0:Person)
        WHERE this_connect_director0.name = $this_connect_director0_name
        FOREACH(_ IN CASE this_connect_director0 WHEN NULL THEN [] ELSE [1] END | MERGE (this)<-[:DIRECTED]-(this_connect_director0))
        RETURN this { .title, .released } AS this"#]]
    .assert_eq(&cypher);
}
