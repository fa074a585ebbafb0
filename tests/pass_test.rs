mod common;
use beeb::lang::ErrorCode;
use beeb::mach::{Evaluator, Pass, Val};
use common::*;

#[test]
fn test_forward_reference_first_pass() {
    let mut asm = assembly().with_pass(Pass::First);
    let line = b"later+1, 2";
    let mut ev = Evaluator::new(&mut asm, line);
    let e = ev.evaluate(false).unwrap_err();
    assert!(e.is_symbol_not_defined());
    assert_eq!(e.column(), Some(0));
    assert_eq!(ev.column(), 7);
    assert!(ev.consume(b','));
    assert_eq!(ev.evaluate(false).unwrap(), Val::Number(2.0));
}

#[test]
fn test_forward_reference_second_pass() {
    let mut asm = assembly().with_pass(Pass::Second);
    let mut ev = Evaluator::new(&mut asm, b"later+1, 2");
    let e = ev.evaluate(false).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SymbolNotDefined);
    assert_eq!(ev.column(), 5);
}

#[test]
fn test_skip_inside_brackets() {
    let mut asm = assembly().with_pass(Pass::First);
    let line = br#"LO(later+LEN("),")), 9"#;
    let mut ev = Evaluator::new(&mut asm, line);
    assert!(ev.evaluate(false).is_err());
    assert_eq!(line[ev.column()], b',');
    assert_eq!(ev.column(), line.len() - 3);
}

#[test]
fn test_skip_stops_at_mismatched_bracket() {
    let mut asm = assembly().with_pass(Pass::First);
    let line = b"later+2),Y";
    let mut ev = Evaluator::new(&mut asm, line);
    assert!(ev.evaluate(true).unwrap_err().is_symbol_not_defined());
    assert_eq!(ev.column(), 7);

    let mut ev = Evaluator::new(&mut asm, line);
    assert!(ev.evaluate(false).unwrap_err().is_symbol_not_defined());
    assert_eq!(ev.column(), 8);
}

#[test]
fn test_skip_stops_at_statement_end() {
    let mut asm = assembly().with_pass(Pass::First);
    let line = b"later*2 : LDA #0";
    let mut ev = Evaluator::new(&mut asm, line);
    assert!(ev.evaluate(false).is_err());
    assert_eq!(ev.column(), 8);
    assert!(!ev.advance_and_check_end_of_statement());
}

#[test]
fn test_defined_later() {
    let mut asm = assembly().with_pass(Pass::First);
    assert!(beeb::mach::eval(&mut asm, "later+1").is_err());
    asm.var_mut().define("later", Val::from(41.0)).unwrap();
    asm.set_pass(Pass::Second);
    assert_eq!(beeb::mach::eval(&mut asm, "later+1").unwrap(), Val::Number(42.0));
}
