use thiserror::Error;

use crate::decode::DecodeError;

/// Error type for table conversion.
///
/// Every variant is fatal for the run; there is no partial output.
#[derive(Debug, Error)]
pub enum TableError {
    /// The source markup could not be decoded into a table tree.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An entry declares a child wrapper that holds no child entries.
    #[error("Entry {id} declares nested CheatEntries but no CheatEntry was found inside")]
    MalformedTree { id: String },

    /// A term of an address expression is not valid hexadecimal.
    #[error("Invalid hexadecimal value '{term}' in address expression '{expr}'")]
    InvalidHexTerm { term: String, expr: String },

    /// The address total does not fit the accumulator.
    #[error("Address expression '{expr}' overflows")]
    AddressOverflow { expr: String },
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
