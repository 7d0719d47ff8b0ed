// tests/support/mocks/mod.rs
//! In-memory stand-ins for the storage and security ports.

pub mod security;
pub mod store;
pub mod time;

pub use security::{DummyPasswordHasher, DummyTokenManager, EXPIRED_TOKEN};
pub use store::InMemoryStore;
pub use time::{TickingClock, fixed_now};
