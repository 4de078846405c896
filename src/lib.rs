//! Battle backend for a turn-based grid game.
//!
//! A battle is created from loosely typed input, validated by
//! [`BattleSchema::load`], turned into an empty board and written to a
//! [`KeyValueStore`] through a [`Codec`]. Reads go the other way.
//!
//! ## Modules
//!
//! - **`battle`**: battle types and the [`BattleSchema`] that validates and persists them.
//! - **`validation`**: per-field validators and the [`FieldErrors`] map.
//! - **`store`**: the [`KeyValueStore`] trait and [`InMemoryStore`].
//! - **`codec`**: the [`Codec`] trait with bitcode and JSON implementations.
//! - **`config`**: [`Settings`] read from the environment.
//! - **`http`** (feature `http`): axum routes over a schema.

mod battle;
mod codec;
mod config;
mod error;
mod store;
pub mod validation;

#[cfg(feature = "http")]
pub mod http;

pub use battle::{
    BattleData, BattleId, BattleRecord, BattleSchema, Board, Cell, Loaded, NewBattle, Occupant,
    BOARD_SIZE_FIELD, BOARD_SIZE_NEGATIVE, BOARD_SIZE_TOO_LARGE, ID_FIELD, ID_LENGTH,
    MAX_BOARD_SIZE,
};
pub use codec::{AnyCodec, BitcodeCodec, Codec, CodecError, JsonCodec};
pub use config::{ConfigError, Settings, BIND_ADDR_VAR, CODEC_VAR, DEFAULT_BIND_ADDR};
pub use error::{BattleError, CreateError};
pub use store::{InMemoryStore, KeyValueStore, StoreError};
pub use validation::{FieldErrors, FieldResult};
