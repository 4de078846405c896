//! Battles - the persisted state of one game.
//!
//! A battle is keyed by a four digit [`BattleId`] and owns a square [`Board`].
//! What reaches the store is a [`BattleRecord`], `{ board: { size, state } }`;
//! the identifier is the key, not part of the value.

mod schema;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use schema::{
    BattleData, BattleSchema, Loaded, BOARD_SIZE_NEGATIVE, BOARD_SIZE_TOO_LARGE, ID_LENGTH,
};

use crate::error::BattleError;

/// Field names accepted by [`BattleSchema::load`].
pub const ID_FIELD: &str = "id";
pub const BOARD_SIZE_FIELD: &str = "board_size";

/// Largest accepted board width. A board holds `size * size` cells.
pub const MAX_BOARD_SIZE: usize = 100;

/// Identifier of a battle: an integer written with exactly four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(u16);

impl BattleId {
    /// Returns None unless the decimal form of `value` is four digits.
    pub fn new(value: i64) -> Option<Self> {
        let repr = value.to_string();
        if repr.len() == 4 && repr.bytes().all(|b| b.is_ascii_digit()) {
            u16::try_from(value).ok().map(BattleId)
        } else {
            None
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something standing on a board cell. Placement is driven by gameplay code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occupant(pub String);

/// One board square; `None` is an empty cell.
pub type Cell = Option<Occupant>;

/// Square grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    pub state: Vec<Vec<Cell>>,
}

impl Board {
    /// A `size` x `size` board with every cell empty.
    ///
    /// Allocates `size * size` cells; callers bound `size` by [`MAX_BOARD_SIZE`].
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            state: vec![vec![None; size]; size],
        }
    }

    /// The cell at `row`, `col`, or None when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.state.get(row).and_then(|r| r.get(col))
    }

    /// True when no cell holds an occupant.
    pub fn is_clear(&self) -> bool {
        self.state.iter().flatten().all(Option::is_none)
    }
}

/// The value stored for a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub board: Board,
}

impl BattleRecord {
    /// Initial record for a freshly created battle.
    pub fn new(battle: &NewBattle) -> Result<Self, BattleError> {
        if battle.board_size > MAX_BOARD_SIZE {
            return Err(BattleError::BoardTooLarge {
                size: battle.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            board: Board::empty(battle.board_size),
        })
    }
}

/// Validated creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBattle {
    pub id: BattleId,
    pub board_size: usize,
}
