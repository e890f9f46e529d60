//! Core types and trait definitions for the mistake log.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the web layer both depend on it.

pub mod error;
pub mod filter;
pub mod mistake;
pub mod store;

pub use error::{Error, Result};
pub use filter::MistakeFilter;
pub use mistake::{Mistake, MistakeId, NewMistake};
