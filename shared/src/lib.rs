pub mod environment;
pub mod query;
pub mod store;
pub mod types;

pub use environment::FetchError;
pub use query::{QueryKind, QuerySlot, QueryState, Ticket};
pub use store::{AppState, PersistedState, STORAGE_KEY};
pub use types::*;
