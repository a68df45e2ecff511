//! Core use-case services.
//!
//! # Responsibility
//! - Combine content components into the calls storage and UI layers make.
//! - Keep FFI and CLI layers decoupled from parser internals.

pub mod note_content;
