use std::error::Error;
use std::fmt;

use crate::codec::CodecError;
use crate::store::StoreError;
use crate::validation::FieldErrors;

/// Failure of a store or codec call made on behalf of a battle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    Store(StoreError),
    Codec(CodecError),
    /// The requested board is wider than the largest one we will allocate.
    BoardTooLarge { size: usize, max: usize },
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::Store(e) => write!(f, "battle store error: {}", e),
            BattleError::Codec(e) => write!(f, "battle codec error: {}", e),
            BattleError::BoardTooLarge { size, max } => {
                write!(f, "board size {} exceeds the maximum of {}", size, max)
            }
        }
    }
}

impl Error for BattleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BattleError::Store(e) => Some(e),
            BattleError::Codec(e) => Some(e),
            BattleError::BoardTooLarge { .. } => None,
        }
    }
}

impl From<StoreError> for BattleError {
    fn from(err: StoreError) -> Self {
        BattleError::Store(err)
    }
}

impl From<CodecError> for BattleError {
    fn from(err: CodecError) -> Self {
        BattleError::Codec(err)
    }
}

/// Failure of a validated create: either the input was rejected or persisting failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    Invalid(FieldErrors),
    Battle(BattleError),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::Invalid(errors) => write!(f, "invalid battle: {}", errors),
            CreateError::Battle(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CreateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CreateError::Invalid(e) => Some(e),
            CreateError::Battle(e) => Some(e),
        }
    }
}

impl From<FieldErrors> for CreateError {
    fn from(err: FieldErrors) -> Self {
        CreateError::Invalid(err)
    }
}

impl From<BattleError> for CreateError {
    fn from(err: BattleError) -> Self {
        CreateError::Battle(err)
    }
}

impl CreateError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CreateError::Invalid(_) => 422,
            CreateError::Battle(BattleError::BoardTooLarge { .. }) => 422,
            CreateError::Battle(_) => 500,
        }
    }
}
