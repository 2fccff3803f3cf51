//! Session state, input handling, and the actions the event loop runs.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
