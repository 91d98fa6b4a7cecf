//! # Download Events
//!
//! None of these events include references to existing data, and they are all self-contained so
//! a reporter can drain them from another thread and render progress or persist the log trail.
//!
mod channel;
mod consumer;
pub mod event;

pub use channel::*;
pub use consumer::*;
