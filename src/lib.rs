//! # BEEB
//!
//! Expressions as the BBC Micro assembler BeebAsm understands them.
//!
//! Every operand an assembler source line contains, from `LDA #HI(table)`
//! to `EQUS STRING$(3, "*")`, goes through one expression evaluator.
//! This crate is that evaluator plus a small calculator to try it with.
//!
//! Run the executable from a terminal and type expressions. Symbols are
//! defined with `name=expression` and `*=expression` moves the program
//! counter. If you get the following, you have achieved success.
//! ```text
//! > 2+3*4, &FF, "TIME$ is "+TIME$
//! 14 255 TIME$ is Sun,04 Mar 2012.12:05:06
//! > █
//! ```
//!
//! Embedding the evaluator means implementing `mach::Context` for your
//! assembler, or using `mach::Assembly` which already does.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
