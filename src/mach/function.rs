use super::val::{format_number, int32};
use super::Val;
use crate::error;
use crate::lang::{literal, Error};
use std::f64::consts::PI;

type Result<T> = std::result::Result<T, Error>;

/// ## Unary operators and built-in functions
///
/// Functions which need the assembly context (`RND`, `TIME$`, `EVAL`)
/// are reduced by the evaluator itself.

pub struct Function {}

/// Domain and range failures of the floating point library.
enum Fault {
    Domain,
    Range,
}

fn checked(arg: f64, n: f64) -> std::result::Result<f64, Fault> {
    if n.is_nan() && !arg.is_nan() {
        Err(Fault::Domain)
    } else if n.is_infinite() && arg.is_finite() {
        Err(Fault::Range)
    } else {
        Ok(n)
    }
}

fn illegal(_: Fault) -> Error {
    error!(IllegalOperation)
}

fn string_arg(val: Val) -> Result<Vec<u8>> {
    val.into_bytes()
}

impl Function {
    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Number(-val.as_number()?))
    }

    pub fn posate(val: Val) -> Result<Val> {
        val.as_number()?;
        Ok(val)
    }

    pub fn hi(val: Val) -> Result<Val> {
        Ok(Val::from((int32(val.as_number()?)? & 0xffff) >> 8))
    }

    pub fn lo(val: Val) -> Result<Val> {
        Ok(Val::from(int32(val.as_number()?)? & 0xff))
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::from(!int32(val.as_number()?)?))
    }

    pub fn sin(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_number()?.sin()))
    }

    pub fn cos(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_number()?.cos()))
    }

    pub fn tan(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_number()?.tan()))
    }

    pub fn asn(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.asin()).map_err(illegal)?))
    }

    pub fn acs(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.acos()).map_err(illegal)?))
    }

    pub fn atn(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.atan()).map_err(illegal)?))
    }

    pub fn sqr(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.sqrt()).map_err(illegal)?))
    }

    pub fn log(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.log10()).map_err(illegal)?))
    }

    pub fn ln(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.ln()).map_err(illegal)?))
    }

    pub fn exp(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(checked(n, n.exp()).map_err(illegal)?))
    }

    pub fn rad(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_number()? * PI / 180.0))
    }

    pub fn deg(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_number()? * 180.0 / PI))
    }

    pub fn int(val: Val) -> Result<Val> {
        Ok(Val::from(int32(val.as_number()?)?))
    }

    pub fn abs(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_number()?.abs()))
    }

    pub fn sgn(val: Val) -> Result<Val> {
        let n = val.as_number()?;
        Ok(Val::Number(if n < 0.0 {
            -1.0
        } else if n > 0.0 {
            1.0
        } else {
            0.0
        }))
    }

    pub fn str(val: Val) -> Result<Val> {
        Ok(Val::from(format_number(val.as_number()?).as_str()))
    }

    pub fn str_hex(val: Val) -> Result<Val> {
        Ok(Val::from(format!("{:X}", int32(val.as_number()?)?).as_str()))
    }

    pub fn val(val: Val) -> Result<Val> {
        Ok(Val::Number(literal::leading_decimal(val.as_bytes()?)))
    }

    pub fn len(val: Val) -> Result<Val> {
        Ok(Val::Number(val.as_bytes()?.len() as f64))
    }

    pub fn chr(val: Val) -> Result<Val> {
        let code = int32(val.as_number()?)?;
        if !(0..=255).contains(&code) {
            return Err(error!(IllegalOperation; "CHR$ RANGE IS 0 TO 255"));
        }
        Ok(Val::String(vec![code as u8]))
    }

    pub fn asc(val: Val) -> Result<Val> {
        match val.as_bytes()?.first() {
            Some(&b) => Ok(Val::Number(b as f64)),
            None => Err(error!(IllegalOperation; "ASC OF EMPTY STRING")),
        }
    }

    pub fn upper(val: Val) -> Result<Val> {
        Ok(Val::String(string_arg(val)?.to_ascii_uppercase()))
    }

    pub fn lower(val: Val) -> Result<Val> {
        Ok(Val::String(string_arg(val)?.to_ascii_lowercase()))
    }

    /// `MID$(s,i,n)` takes up to `n` bytes from the 1-based index `i`.
    pub fn mid(text: Val, index: Val, count: Val) -> Result<Val> {
        let (index, count) = (index.as_number()?, count.as_number()?);
        let text = string_arg(text)?;
        let index = int32(index)?.wrapping_sub(1);
        let count = int32(count)?;
        if index < 0 || index as usize > text.len() || count < 0 {
            return Err(error!(IllegalOperation));
        }
        let start = index as usize;
        let end = text.len().min(start + count as usize);
        Ok(Val::String(text[start..end].to_vec()))
    }

    pub fn left(text: Val, count: Val) -> Result<Val> {
        let count = count.as_number()?;
        let text = string_arg(text)?;
        let count = int32(count)?;
        if count < 0 || count as usize > text.len() {
            return Err(error!(IllegalOperation));
        }
        Ok(Val::String(text[..count as usize].to_vec()))
    }

    pub fn right(text: Val, count: Val) -> Result<Val> {
        let count = count.as_number()?;
        let text = string_arg(text)?;
        let count = int32(count)?;
        if count < 0 || count as usize > text.len() {
            return Err(error!(IllegalOperation));
        }
        Ok(Val::String(text[text.len() - count as usize..].to_vec()))
    }

    /// `STRING$(n,s)` repeats `s` `n` times. The result must stay below 64K.
    pub fn repeat(count: Val, text: Val) -> Result<Val> {
        let count = count.as_number()?;
        let text = string_arg(text)?;
        let count = int32(count)?;
        if count < 0 || count >= 0x10000 || text.len() >= 0x10000 {
            return Err(error!(IllegalOperation));
        }
        if count as usize * text.len() >= 0x10000 {
            return Err(error!(IllegalOperation; "STRING TOO LONG"));
        }
        Ok(Val::String(text.repeat(count as usize)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn n(v: f64) -> Val {
        Val::Number(v)
    }

    fn code(r: Result<Val>) -> ErrorCode {
        r.unwrap_err().code()
    }

    #[test]
    fn test_hi_lo() {
        assert_eq!(Function::hi(n(4660.0)).unwrap(), n(18.0));
        assert_eq!(Function::lo(n(4660.0)).unwrap(), n(52.0));
        assert_eq!(Function::hi(n(74565.0)).unwrap(), n(0x23 as f64));
        assert_eq!(Function::lo(n(-1.0)).unwrap(), n(255.0));
    }

    #[test]
    fn test_math_faults() {
        assert_eq!(code(Function::sqr(n(-1.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::asn(n(2.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::acs(n(-2.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::log(n(0.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::ln(n(-1.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::exp(n(1000.0))), ErrorCode::IllegalOperation);
        assert_eq!(Function::sqr(n(16.0)).unwrap(), n(4.0));
        let log = Function::log(n(1000.0)).unwrap().as_number().unwrap();
        assert!((log - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_type_checks() {
        assert_eq!(code(Function::sin("0".into())), ErrorCode::TypeMismatch);
        assert_eq!(code(Function::posate("0".into())), ErrorCode::TypeMismatch);
        assert_eq!(code(Function::len(n(0.0))), ErrorCode::TypeMismatch);
        assert_eq!(code(Function::mid(n(1.0), n(1.0), n(1.0))), ErrorCode::TypeMismatch);
        assert_eq!(code(Function::repeat("A".into(), n(1.0))), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_sgn_int_abs() {
        assert_eq!(Function::sgn(n(-0.5)).unwrap(), n(-1.0));
        assert_eq!(Function::sgn(n(0.0)).unwrap(), n(0.0));
        assert_eq!(Function::int(n(-3.7)).unwrap(), n(-3.0));
        assert_eq!(Function::int(n(3e9)).unwrap(), n(-1294967296.0));
        assert_eq!(Function::abs(n(-2.5)).unwrap(), n(2.5));
        assert_eq!(Function::not(n(0.0)).unwrap(), n(-1.0));
    }

    #[test]
    fn test_str() {
        assert_eq!(Function::str(n(42.0)).unwrap(), Val::from("42"));
        assert_eq!(Function::str(n(-1.5)).unwrap(), Val::from("-1.5"));
        assert_eq!(Function::str_hex(n(255.0)).unwrap(), Val::from("FF"));
        assert_eq!(Function::str_hex(n(-1.0)).unwrap(), Val::from("FFFFFFFF"));
        assert_eq!(Function::val("12abc".into()).unwrap(), n(12.0));
    }

    #[test]
    fn test_chr_asc() {
        assert_eq!(Function::chr(n(65.0)).unwrap(), Val::from("A"));
        assert_eq!(Function::chr(n(200.0)).unwrap(), Val::String(vec![200]));
        assert_eq!(code(Function::chr(n(256.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::chr(n(-1.0))), ErrorCode::IllegalOperation);
        assert_eq!(Function::asc("AB".into()).unwrap(), n(65.0));
        assert_eq!(code(Function::asc("".into())), ErrorCode::IllegalOperation);
    }

    #[test]
    fn test_slicing() {
        let hello = || Val::from("HELLO");
        assert_eq!(Function::mid(hello(), n(2.0), n(3.0)).unwrap(), Val::from("ELL"));
        assert_eq!(Function::mid(hello(), n(4.0), n(10.0)).unwrap(), Val::from("LO"));
        assert_eq!(Function::mid(hello(), n(6.0), n(1.0)).unwrap(), Val::from(""));
        assert_eq!(code(Function::mid(hello(), n(0.0), n(1.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::mid(hello(), n(7.0), n(1.0))), ErrorCode::IllegalOperation);
        assert_eq!(Function::left(hello(), n(2.0)).unwrap(), Val::from("HE"));
        assert_eq!(Function::right(hello(), n(2.0)).unwrap(), Val::from("LO"));
        assert_eq!(Function::right(hello(), n(5.0)).unwrap(), hello());
        assert_eq!(code(Function::left(hello(), n(6.0))), ErrorCode::IllegalOperation);
        assert_eq!(code(Function::right(hello(), n(-1.0))), ErrorCode::IllegalOperation);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Function::repeat(n(3.0), "AB".into()).unwrap(), Val::from("ABABAB"));
        assert_eq!(Function::repeat(n(0.0), "AB".into()).unwrap(), Val::from(""));
        assert_eq!(code(Function::repeat(n(-1.0), "AB".into())), ErrorCode::IllegalOperation);
        assert_eq!(
            code(Function::repeat(n(32768.0), "AB".into())),
            ErrorCode::IllegalOperation
        );
        let max = Function::repeat(n(32767.0), "AB".into()).unwrap();
        assert_eq!(max.as_bytes().unwrap().len(), 65534);
    }

    #[test]
    fn test_case() {
        assert_eq!(Function::upper("abc1".into()).unwrap(), Val::from("ABC1"));
        assert_eq!(Function::lower("ABC1".into()).unwrap(), Val::from("abc1"));
    }
}
