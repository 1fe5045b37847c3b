//! Export → upload → preview session lifecycle
//!
//! The state machine owns the only mutable session data and exposes the
//! named transitions (`start`, `retry`, `reset`) the presentation layer
//! binds to. The presentation layer observes; it never mutates.

mod machine;
mod observer;

pub use machine::{Session, SessionState};
pub use observer::{NoopObserver, Phase, SessionObserver};
