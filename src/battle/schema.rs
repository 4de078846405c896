//! BattleSchema - validation and persistence of battle records.
//!
//! ## Example
//!
//! ```ignore
//! use dino_extinction::{BattleSchema, BitcodeCodec, InMemoryStore};
//! use serde_json::json;
//!
//! let schema = BattleSchema::new(InMemoryStore::new(), BitcodeCodec);
//!
//! let loaded = schema.load(&json!({ "id": 1234, "board_size": 3 }));
//! let battle = loaded.into_valid()?;
//! schema.dumps(&battle)?;
//!
//! let record = schema.get_battle(battle.id)?.expect("just stored");
//! assert_eq!(record.board.size, 3);
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{BattleId, BattleRecord, NewBattle, BOARD_SIZE_FIELD, ID_FIELD, MAX_BOARD_SIZE};
use crate::codec::Codec;
use crate::error::{BattleError, CreateError};
use crate::store::KeyValueStore;
use crate::validation::{integer_field, FieldErrors, FieldResult, INVALID_INPUT, SCHEMA_KEY};

/// Message for integer battle IDs that are not written with four digits.
pub const ID_LENGTH: &str = "The battle ID should be 4 digits long.";
/// Message for board sizes below zero.
pub const BOARD_SIZE_NEGATIVE: &str = "The board size should not be negative.";
/// Message for board sizes above [`MAX_BOARD_SIZE`].
pub const BOARD_SIZE_TOO_LARGE: &str = "The board size should be at most 100.";

/// Fields that passed validation. Rejected fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BattleData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BattleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_size: Option<usize>,
}

/// Result of [`BattleSchema::load`]: the validated data plus every field error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    pub data: BattleData,
    pub errors: FieldErrors,
}

impl Loaded {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The creation input, if every field validated.
    pub fn into_valid(self) -> Result<NewBattle, FieldErrors> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        match (self.data.id, self.data.board_size) {
            (Some(id), Some(board_size)) => Ok(NewBattle { id, board_size }),
            _ => Err(self.errors),
        }
    }
}

fn validate_id(value: i64) -> FieldResult<BattleId> {
    match BattleId::new(value) {
        Some(id) => FieldResult::Valid(id),
        None => FieldResult::invalid(ID_LENGTH),
    }
}

fn validate_board_size(value: i64) -> FieldResult<usize> {
    match usize::try_from(value) {
        Ok(size) if size <= MAX_BOARD_SIZE => FieldResult::Valid(size),
        Ok(_) => FieldResult::invalid(BOARD_SIZE_TOO_LARGE),
        Err(_) => FieldResult::invalid(BOARD_SIZE_NEGATIVE),
    }
}

/// Validates battle input and moves battle records in and out of a store.
///
/// Generic over the key-value store `S` and the codec `C`, both injected at
/// construction.
pub struct BattleSchema<S, C> {
    store: S,
    codec: C,
}

impl<S: KeyValueStore, C: Codec> BattleSchema<S, C> {
    /// Create a schema over the given store and codec.
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// Validate and coerce creation input.
    ///
    /// Never fails: every problem is reported in [`Loaded::errors`] and the
    /// offending field is left out of [`Loaded::data`].
    pub fn load(&self, input: &Value) -> Loaded {
        let mut loaded = Loaded::default();

        let Some(fields) = input.as_object() else {
            loaded.errors.add(SCHEMA_KEY, INVALID_INPUT);
            debug!(errors = %loaded.errors, "rejected battle input");
            return loaded;
        };

        loaded.data.id = integer_field(fields, ID_FIELD)
            .and_then(validate_id)
            .record(ID_FIELD, &mut loaded.errors);
        loaded.data.board_size = integer_field(fields, BOARD_SIZE_FIELD)
            .and_then(validate_board_size)
            .record(BOARD_SIZE_FIELD, &mut loaded.errors);

        if !loaded.errors.is_empty() {
            debug!(errors = %loaded.errors, "rejected battle input");
        }
        loaded
    }

    /// Build the initial record for `battle` and write it under its ID.
    ///
    /// Overwrites any battle already stored under the same ID. Boards larger
    /// than [`MAX_BOARD_SIZE`] are refused before anything is allocated.
    pub fn dumps(&self, battle: &NewBattle) -> Result<(), BattleError> {
        self.persist(battle.id, &BattleRecord::new(battle)?)
    }

    /// Fetch and decode the battle stored under `battle_id`.
    ///
    /// Returns `Ok(None)` when nothing is stored; the codec is not called then.
    pub fn get_battle(
        &self,
        battle_id: impl fmt::Display,
    ) -> Result<Option<BattleRecord>, BattleError> {
        let key = battle_id.to_string();
        let Some(bytes) = self.store.get(&key)? else {
            debug!(battle_id = %key, "battle not found");
            return Ok(None);
        };

        let record = self.codec.loads(&bytes)?;
        debug!(battle_id = %key, bytes = bytes.len(), "fetched battle");
        Ok(Some(record))
    }

    /// Validate `input` and persist the new battle in one step.
    ///
    /// Nothing is written when validation fails.
    pub fn create(&self, input: &Value) -> Result<(NewBattle, BattleRecord), CreateError> {
        let battle = self.load(input).into_valid()?;
        let record = BattleRecord::new(&battle)?;
        self.persist(battle.id, &record)?;
        Ok((battle, record))
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    fn persist(&self, id: BattleId, record: &BattleRecord) -> Result<(), BattleError> {
        let bytes = self.codec.dumps(record)?;
        let len = bytes.len();
        self.store.set(&id.to_string(), bytes)?;
        debug!(battle_id = %id, bytes = len, codec = self.codec.name(), "stored battle");
        Ok(())
    }
}
