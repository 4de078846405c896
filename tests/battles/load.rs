//! Validation of battle creation input.

use dino_extinction::validation::NOT_AN_INTEGER;
use dino_extinction::{
    BattleSchema, InMemoryStore, JsonCodec, BOARD_SIZE_TOO_LARGE, ID_LENGTH, MAX_BOARD_SIZE,
};
use serde_json::json;

use crate::support::FOUR_DIGIT_IDS;

fn schema() -> BattleSchema<InMemoryStore, JsonCodec> {
    BattleSchema::new(InMemoryStore::new(), JsonCodec)
}

#[test]
fn four_digit_ids_load() {
    let schema = schema();

    for &id in FOUR_DIGIT_IDS {
        for board_size in 1..=9 {
            let loaded = schema.load(&json!({ "id": id, "board_size": board_size }));

            assert!(loaded.errors.is_empty(), "id {} rejected", id);
            assert_eq!(loaded.data.id.map(|i| i64::from(i.get())), Some(id));
            assert_eq!(loaded.data.board_size, Some(board_size));
        }
    }
}

#[test]
fn non_integer_ids_are_rejected() {
    let schema = schema();

    for id in [json!("abc"), json!("dinosaur"), json!(true), json!([1, 2]), json!(1234.5)] {
        let loaded = schema.load(&json!({ "id": id, "board_size": 5 }));

        assert!(loaded.data.id.is_none());
        assert_eq!(loaded.errors.get("id").unwrap()[0], NOT_AN_INTEGER);
        assert!(!loaded.errors.contains("board_size"));
    }
}

#[test]
fn wrong_length_ids_are_rejected() {
    let schema = schema();

    for id in [123, 999, 10000, 12345, 0, 7, -123, -1234] {
        let loaded = schema.load(&json!({ "id": id, "board_size": 4 }));

        assert!(loaded.data.id.is_none(), "id {} accepted", id);
        assert_eq!(loaded.errors.get("id").unwrap()[0], ID_LENGTH);
        assert_eq!(loaded.data.board_size, Some(4));
    }
}

#[test]
fn three_digit_id_scenario() {
    let loaded = schema().load(&json!({ "id": 123, "board_size": 5 }));
    assert_eq!(
        loaded.errors.get("id").unwrap(),
        ["The battle ID should be 4 digits long.".to_string()]
    );
}

#[test]
fn word_id_scenario() {
    let loaded = schema().load(&json!({ "id": "abc", "board_size": 5 }));
    assert_eq!(
        loaded.errors.get("id").unwrap(),
        ["Not a valid integer.".to_string()]
    );
}

#[test]
fn field_errors_are_independent() {
    let loaded = schema().load(&json!({ "id": 12, "board_size": "wide" }));

    assert_eq!(loaded.errors.len(), 2);
    assert_eq!(loaded.errors.get("id").unwrap()[0], ID_LENGTH);
    assert_eq!(loaded.errors.get("board_size").unwrap()[0], NOT_AN_INTEGER);
    assert!(loaded.into_valid().is_err());
}

#[test]
fn board_size_is_capped() {
    let schema = schema();

    let at_max = schema.load(&json!({ "id": 1234, "board_size": MAX_BOARD_SIZE }));
    assert!(at_max.errors.is_empty());
    assert_eq!(at_max.data.board_size, Some(MAX_BOARD_SIZE));

    let oversized = [
        json!(MAX_BOARD_SIZE + 1),
        json!(100_000),
        json!(1_000_000_000_000_000_000i64),
    ];
    for board_size in oversized {
        let loaded = schema.load(&json!({ "id": 1234, "board_size": board_size }));

        assert!(loaded.data.board_size.is_none());
        assert_eq!(
            loaded.errors.get("board_size").unwrap()[0],
            BOARD_SIZE_TOO_LARGE
        );
        assert_eq!(loaded.data.id.map(|i| i.get()), Some(1234));
    }
}
