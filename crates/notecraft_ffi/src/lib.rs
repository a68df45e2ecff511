//! FFI bindings for the Notecraft note content core.

pub mod api;
