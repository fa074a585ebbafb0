use super::{Val, Var};
use crate::error;
use crate::lang::{literal, Column, Error};
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## The evaluator's view of the assembler
///
/// Everything the evaluator cannot know by itself comes through here.

pub trait Context {
    /// Recognize a numeric literal at `column`, advancing past it.
    fn numeric_literal(&self, line: &[u8], column: &mut Column) -> Result<Option<f64>> {
        literal::numeric(line, column)
    }

    /// The value of `*`.
    fn program_counter(&self) -> f64;

    fn symbol(&self, name: &str) -> Option<Val>;

    /// Uniform in `[0,1)`.
    fn random(&mut self) -> f64;

    /// Format the assembly start time with a strftime pattern.
    fn format_time(&self, pattern: &str) -> Result<String>;

    /// Forward references are expected on the first pass.
    fn is_first_pass(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    First,
    Second,
}

/// ## Assembly state
///
/// A minimal assembler context: symbols, program counter, pass,
/// random numbers and the time assembly started.

pub struct Assembly {
    var: Var,
    pc: u32,
    pass: Pass,
    rng: StdRng,
    time: DateTime<Local>,
}

impl Default for Assembly {
    fn default() -> Self {
        Assembly {
            var: Var::new(),
            pc: 0,
            pass: Pass::Second,
            rng: StdRng::from_entropy(),
            time: Local::now(),
        }
    }
}

impl Assembly {
    pub fn new() -> Assembly {
        Assembly::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Assembly {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_time(mut self, time: DateTime<Local>) -> Assembly {
        self.time = time;
        self
    }

    pub fn with_pass(mut self, pass: Pass) -> Assembly {
        self.pass = pass;
        self
    }

    pub fn with_program_counter(mut self, pc: u32) -> Assembly {
        self.pc = pc;
        self
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn var_mut(&mut self) -> &mut Var {
        &mut self.var
    }

    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn set_pass(&mut self, pass: Pass) {
        self.pass = pass;
    }

    pub fn set_program_counter(&mut self, pc: u32) {
        self.pc = pc;
    }
}

impl Context for Assembly {
    fn program_counter(&self) -> f64 {
        self.pc as f64
    }

    fn symbol(&self, name: &str) -> Option<Val> {
        self.var.fetch(name)
    }

    fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn format_time(&self, pattern: &str) -> Result<String> {
        format_time(&self.time, pattern)
    }

    fn is_first_pass(&self) -> bool {
        self.pass == Pass::First
    }
}

/// strftime into at most 255 bytes, like a fixed C buffer.
pub fn format_time(time: &DateTime<Local>, pattern: &str) -> Result<String> {
    let mut s = String::new();
    if write!(s, "{}", time.format(pattern)).is_err() {
        return Err(error!(IllegalOperation; "INVALID TIME FORMAT"));
    }
    if s.is_empty() || s.len() > 255 {
        return Err(error!(TimeResultTooBig));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2012, 3, 4, 12, 5, 6).unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&noon(), "%Y-%m-%d").unwrap(), "2012-03-04");
        assert_eq!(
            format_time(&noon(), "%a,%d %b %Y.%H:%M:%S").unwrap(),
            "Sun,04 Mar 2012.12:05:06"
        );
    }

    #[test]
    fn test_format_time_limits() {
        let e = format_time(&noon(), "").unwrap_err();
        assert_eq!(e.code(), ErrorCode::TimeResultTooBig);
        let long = "%Y".repeat(64);
        let e = format_time(&noon(), &long).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TimeResultTooBig);
    }

    #[test]
    fn test_seeded_random_repeats() {
        let mut a = Assembly::new().with_seed(7);
        let mut b = Assembly::new().with_seed(7);
        for _ in 0..10 {
            let r = a.random();
            assert!((0.0..1.0).contains(&r));
            assert_eq!(r, b.random());
        }
    }

    #[test]
    fn test_context() {
        let mut asm = Assembly::new().with_program_counter(0x1900);
        asm.var_mut().define("start", Val::from(256.0)).unwrap();
        assert_eq!(asm.program_counter(), 6400.0);
        assert_eq!(asm.symbol("start"), Some(Val::from(256.0)));
        assert_eq!(asm.symbol("end"), None);
        assert!(!asm.is_first_pass());
        asm.set_pass(Pass::First);
        assert!(asm.is_first_pass());
    }
}
