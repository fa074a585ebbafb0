use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Symbol memory
///
/// Names are case sensitive. A symbol may be defined once per pass;
/// `redefine` is for values which legitimately change, like loop counters.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Option<Val> {
        self.vars.get(var_name).cloned()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn define(&mut self, var_name: &str, value: Val) -> Result<()> {
        if self.vars.contains_key(var_name) {
            return Err(error!(IllegalOperation; "SYMBOL ALREADY DEFINED"));
        }
        self.store(var_name, value)
    }

    pub fn redefine(&mut self, var_name: &str, value: Val) -> Result<()> {
        self.store(var_name, value)
    }

    fn store(&mut self, var_name: &str, value: Val) -> Result<()> {
        if !is_symbol_name(var_name) {
            return Err(error!(InvalidCharacter; "NOT A SYMBOL NAME"));
        }
        if var_name.ends_with('$') && !value.is_string() {
            return Err(error!(TypeMismatch));
        }
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        };
        Ok(())
    }

    pub fn names(&self) -> Vec<Rc<str>> {
        let mut names: Vec<Rc<str>> = self.vars.keys().cloned().collect();
        names.sort();
        names
    }
}

/// A letter or underscore, then letters, digits or underscores,
/// with an optional trailing `$`.
pub fn is_symbol_name(s: &str) -> bool {
    let s = s.strip_suffix('$').unwrap_or(s);
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Length of the symbol name starting at the front of `s`, or zero.
pub fn symbol_name_len(s: &[u8]) -> usize {
    match s.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    let mut len = 1;
    while let Some(b) = s.get(len) {
        if b.is_ascii_alphanumeric() || *b == b'_' {
            len += 1;
        } else {
            break;
        }
    }
    if let Some(b'$') = s.get(len) {
        len += 1;
    }
    len
}
