/*!
# Rust Language Module

This Rust module holds the source-level pieces of expression evaluation:
errors, numeric literal recognition, and the operator tables.

*/

pub type Column = usize;

#[macro_use]
mod error;
pub mod literal;
pub mod operator;

pub use error::Error;
pub use error::ErrorCode;
pub use operator::Operator;
