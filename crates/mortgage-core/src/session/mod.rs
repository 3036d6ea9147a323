//! Persisted session state: the injected key/value store and the two
//! well-known entries the surrounding UI keeps in it.

pub mod form;
pub mod store;

pub use form::{FormState, FORM_STATE_KEY, LAST_CALCULATION_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
