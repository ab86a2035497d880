//! Local shopping list engine: lifecycle state machine, item mutations,
//! supplier cost reconciliation, and durable persistence.
//!
//! The store is the authoritative local copy of all shopping lists. It is
//! a cache of data the backend does not own — lists live on the device
//! until they are received into inventory — so persistence favors
//! availability: a missing or corrupt file loads as an empty collection,
//! never a fatal error.

pub mod model;
pub mod persist;
pub mod reconcile;
pub mod store;
pub mod submit;

pub use model::{ItemEdit, ListDetailsEdit, ListStatus, NewItem, ShoppingList, ShoppingListItem};
pub use persist::{JsonFilePersister, ListPersister, MemoryPersister, PersistError};
pub use reconcile::{CostChange, CostRefreshReport};
pub use store::{ShoppingListStore, StoreError};
pub use submit::SubmitError;
