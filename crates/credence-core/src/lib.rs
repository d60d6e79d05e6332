//! # credence-core
//! Data model, constants, validation and traits for the Credence scoring engine.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
pub mod validation;
