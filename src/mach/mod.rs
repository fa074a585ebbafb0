/*!
## Rust Machine Module

This Rust module evaluates BeebAsm expressions. Values, symbols, the
operator handlers and the stack machine which ties them together all
live here.

*/

use crate::error;
use crate::lang::Error;

/// Most values waiting on the value stack at once.
pub const MAX_VALUES: usize = 128;

/// Most operators and open brackets waiting at once.
pub const MAX_OPERATORS: usize = 128;

/// How deeply `EVAL` may nest.
pub const MAX_EVAL_DEPTH: usize = 32;

/// Layout of a bare `TIME$`.
pub const DEFAULT_TIME_FORMAT: &str = "%a,%d %b %Y.%H:%M:%S";

mod context;
mod evaluator;
mod function;
mod opcode;
mod operation;
mod stack;
mod val;
mod var;

pub use context::format_time;
pub use context::Assembly;
pub use context::Context;
pub use context::Pass;
pub use evaluator::Evaluator;
pub use function::Function;
pub use opcode::Opcode;
pub use operation::Operation;
pub use stack::Stack;
pub use val::format_number;
pub use val::int32;
pub use val::Val;
pub use var::is_symbol_name;
pub use var::symbol_name_len;
pub use var::Var;

/// Evaluate all of `s` as one expression.
///
/// ```
/// use beeb::mach::{eval, Assembly, Val};
///
/// let mut asm = Assembly::new();
/// assert_eq!(eval(&mut asm, "2^3^2").unwrap(), Val::Number(512.0));
/// ```
pub fn eval(context: &mut dyn Context, s: &str) -> Result<Val, Error> {
    let mut evaluator = Evaluator::new(context, s.as_bytes());
    let val = evaluator.evaluate(false)?;
    let trailing = evaluator.advance_and_check_end_of_statement()
        || s.as_bytes().get(evaluator.column()) == Some(&b':');
    if trailing {
        return Err(error!(InvalidCharacter, ..evaluator.column()).in_line(s.as_bytes()));
    }
    Ok(val)
}
