pub mod amortisation;
pub mod display;
pub mod error;
pub mod types;

#[cfg(feature = "session")]
pub mod session;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;
