use super::val::int32;
use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Binary operators

pub struct Operation {}

fn numbers(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
    match (lhs, rhs) {
        (Val::Number(l), Val::Number(r)) => Ok((l, r)),
        _ => Err(error!(TypeMismatch)),
    }
}

fn integers(lhs: Val, rhs: Val) -> Result<(i32, i32)> {
    let (l, r) = numbers(lhs, rhs)?;
    Ok((int32(l)?, int32(r)?))
}

fn compare(lhs: Val, rhs: Val) -> Result<Ordering> {
    Val::compare(&lhs, &rhs)
}

fn shift_left(val: i32, shift: i32) -> i32 {
    if !(-31..=31).contains(&shift) {
        0
    } else if shift >= 0 {
        ((val as u32) << shift) as i32
    } else {
        val >> -shift
    }
}

fn shift_right(val: i32, shift: i32) -> i32 {
    if !(-31..=31).contains(&shift) {
        0
    } else if shift >= 0 {
        val >> shift
    } else {
        ((val as u32) << -shift) as i32
    }
}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (String(mut l), String(r)) => {
                l.extend_from_slice(&r);
                Ok(String(l))
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = numbers(lhs, rhs)?;
        Ok(Val::Number(l - r))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = numbers(lhs, rhs)?;
        Ok(Val::Number(l * r))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = numbers(lhs, rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(l / r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = numbers(lhs, rhs)?;
        let n = l.powf(r);
        if n.is_nan() && !l.is_nan() && !r.is_nan() {
            return Err(error!(IllegalOperation));
        }
        if n.is_infinite() && l.is_finite() && r.is_finite() {
            return Err(error!(NumberTooBig));
        }
        Ok(Val::Number(n))
    }

    pub fn divide_int(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::from(l.wrapping_div(r)))
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::from(l.wrapping_rem(r)))
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        Ok(Val::from(shift_left(l, r)))
    }

    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        Ok(Val::from(shift_right(l, r)))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        Ok(Val::from(l & r))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        Ok(Val::from(l | r))
    }

    pub fn eor(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = integers(lhs, rhs)?;
        Ok(Val::from(l ^ r))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(compare(lhs, rhs)? == Ordering::Equal))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(compare(lhs, rhs)? != Ordering::Equal))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(compare(lhs, rhs)? == Ordering::Less))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(compare(lhs, rhs)? != Ordering::Greater))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(compare(lhs, rhs)? == Ordering::Greater))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(compare(lhs, rhs)? != Ordering::Less))
    }
}
