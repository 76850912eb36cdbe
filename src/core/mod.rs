//! Core library components.
//!
//! Pure transforms over byte buffers and text, plus the thin file layer
//! the CLI drives. Nothing here prompts or prints.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod env;
pub mod fs;
pub mod key;
pub mod padding;
