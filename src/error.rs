use thiserror::Error;

use crate::kinematics::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KinematicsError {
    #[error("Expected {expected} numbers, found {found}")]
    WrongElementCount { expected: usize, found: usize },
    #[error("Expected a multiple of {width} numbers, found {found}")]
    RaggedTable { width: usize, found: usize },
    #[error("No item with id {0}")]
    UnknownItem(ItemId),
    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, KinematicsError>;
