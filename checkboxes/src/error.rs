use thiserror::Error;

use crate::field::FieldTypeError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    FieldType(#[from] FieldTypeError),
}
