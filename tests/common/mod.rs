#![allow(dead_code)]

use beeb::lang::{Error, ErrorCode};
use beeb::mach::{Assembly, Val};
use chrono::{Local, TimeZone};

/// Same seed and same clock on every run.
pub fn assembly() -> Assembly {
    let time = Local.with_ymd_and_hms(2012, 3, 4, 12, 5, 6).unwrap();
    Assembly::new().with_seed(1234).with_time(time)
}

pub fn eval(s: &str) -> Result<Val, Error> {
    beeb::mach::eval(&mut assembly(), s)
}

pub fn num(s: &str) -> f64 {
    match eval(s) {
        Ok(Val::Number(n)) => n,
        other => panic!("{} gave {:?}", s, other),
    }
}

pub fn string(s: &str) -> String {
    match eval(s) {
        Ok(Val::String(v)) => String::from_utf8_lossy(&v).into_owned(),
        other => panic!("{} gave {:?}", s, other),
    }
}

pub fn code(s: &str) -> ErrorCode {
    match eval(s) {
        Err(e) => e.code(),
        Ok(v) => panic!("{} gave {:?}", s, v),
    }
}
