use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression value
///
/// Strings are byte strings. `CHR$(200)` is one byte long, not two.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Vec<u8>),
}

impl Val {
    pub fn is_number(&self) -> bool {
        matches!(self, Val::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Number(_) => "NUMBER",
            Val::String(_) => "STRING",
        }
    }

    pub fn as_number(&self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(*n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8]> {
        match self {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Three-way comparison of two values of the same variant.
    /// Numbers that are neither less nor greater compare equal, NaN included.
    pub fn compare(lhs: &Val, rhs: &Val) -> Result<Ordering> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(if l < r {
                Ordering::Less
            } else if l > r {
                Ordering::Greater
            } else {
                Ordering::Equal
            }),
            (String(l), String(r)) => Ok(l.as_slice().cmp(r.as_slice())),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

/// Convert to a 32-bit integer, accepting anything representable as
/// either `i32` or `u32`. Values above `i32::MAX` keep their bit pattern.
pub fn int32(n: f64) -> Result<i32> {
    if n < i32::min_value() as f64 || n > u32::max_value() as f64 {
        return Err(error!(OutOfIntegerRange));
    }
    if n <= i32::max_value() as f64 {
        Ok(n as i32)
    } else {
        Ok(n as u32 as i32)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(n)
    }
}

impl From<i32> for Val {
    fn from(n: i32) -> Self {
        Val::Number(n as f64)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Val::Number(if b { -1.0 } else { 0.0 })
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Val {
    fn from(s: Vec<u8>) -> Self {
        Val::String(s)
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> Result<f64> {
        val.as_number()
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    fn try_from(val: Val) -> Result<i32> {
        int32(val.as_number()?)
    }
}

impl TryFrom<Val> for u32 {
    type Error = Error;
    fn try_from(val: Val) -> Result<u32> {
        Ok(int32(val.as_number()?)? as u32)
    }
}

impl TryFrom<Val> for String {
    type Error = Error;
    fn try_from(val: Val) -> Result<String> {
        Ok(String::from_utf8_lossy(&val.into_bytes()?).into_owned())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", format_number(*n)),
            Val::String(s) => write!(f, "{}", String::from_utf8_lossy(s)),
        }
    }
}

/// Numbers print without a fraction when they are whole and small
/// enough to be exact, otherwise in the shortest form that reads back.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        if n == 0.0 {
            "0".to_string()
        } else {
            format!("{}", n as i64)
        }
    } else {
        format!("{}", n)
    }
}
