//! # Kanji Common Library
//!
//! Shared code for the kanji decomposition tools including:
//! - Error types
//! - Configuration loading
//! - IDS cleaning, parsing and position mapping
//! - Kangxi radical model, radical index and variant index
//! - Radical reference schema validation

pub mod config;
pub mod error;
pub mod ids;
pub mod radicals;

pub use error::{Error, Result};
pub use ids::{clean_ids, parse_ids, IdsNode, IdsOperator, ParseError, Position, PositionedComponent};
pub use radicals::{KangxiRadical, RadicalError, RadicalIndex, VariantIndex};
