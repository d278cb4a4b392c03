//! Session layer: who is signed in, persisted between runs.
//!
//! All writes go through one `SessionActor`; every other component holds a
//! `SessionClient` and only reads.

mod actor;
mod store;

pub use actor::{SessionActor, SessionClient};
pub use store::{Session, SessionError, SessionStore};
