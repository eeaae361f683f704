//! Usecase layer: application workflows + events.

pub mod event;
pub mod solve;
pub mod stats;
pub mod validate;
