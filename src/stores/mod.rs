pub mod session_store;

pub use session_store::{default_session_store, LocalSessionStore, MemorySessionStore, SessionStore};
