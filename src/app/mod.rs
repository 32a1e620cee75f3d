//! Core application logic: list state, key handling, and command dispatch.

pub mod command;
pub mod event;
pub mod handler;
pub mod input;
pub mod state;
