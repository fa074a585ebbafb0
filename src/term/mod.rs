/*!
## Calculator front end

Reads lines with `linefeed` and runs them against one `Assembly`.

```text
> base=&1900 : *=base+2
> *, HI(*), LO(*)
6402 25 2
> "T"+STR$~(255)
TFF
```

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::error;
use crate::lang::{Column, Error};
use crate::mach::{symbol_name_len, Assembly, Evaluator, Pass};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("BEEB")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut asm = Assembly::new();

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(string.clone());
        let result = enter(&mut asm, &string);
        if interrupted.swap(false, Ordering::SeqCst) {
            interface.write_fmt(format_args!("{}\n", Style::new().bold().paint("ESCAPE")))?;
            continue;
        }
        match result {
            Ok(lines) => {
                for line in lines {
                    interface.write_fmt(format_args!("{}\n", line))?;
                }
            }
            Err(error) => {
                tracing::debug!(?error, "statement failed");
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}

/// Run every statement on a line, collecting what they print.
///
/// Statements are separated by `:`. Each is one of `name=expr`,
/// `*=expr`, `PASS 1`, `PASS 2`, or a list of expressions to print
/// separated by commas.
pub fn enter(asm: &mut Assembly, line: &str) -> Result<Vec<String>> {
    let line = line.as_bytes();
    let mut output = vec![];
    let mut column = 0;
    loop {
        column = statement(asm, line, column, &mut output)?;
        if line.get(column) == Some(&b':') {
            column += 1;
        } else {
            break;
        }
    }
    Ok(output)
}

fn statement(asm: &mut Assembly, line: &[u8], column: Column, output: &mut Vec<String>) -> Result<Column> {
    let column = skip_blanks(line, column);
    match line.get(column) {
        None | Some(b':') | Some(b';') | Some(b'\\') => return Ok(column),
        _ => {}
    }
    if let Some((pass, end)) = pass_command(line, column) {
        tracing::debug!(?pass, "pass changed");
        asm.set_pass(pass);
        return Ok(end);
    }
    if line[column] == b'*' {
        if let Some(expr) = assignment(line, column + 1) {
            return set_program_counter(asm, line, expr);
        }
    }
    let len = symbol_name_len(&line[column..]);
    if len > 0 {
        if let Some(expr) = assignment(line, column + len) {
            let name = String::from_utf8_lossy(&line[column..column + len]).into_owned();
            return define(asm, line, column, &name, expr);
        }
    }
    print(asm, line, column, output)
}

fn skip_blanks(line: &[u8], mut column: Column) -> Column {
    while let Some(b' ') | Some(b'\t') = line.get(column) {
        column += 1;
    }
    column
}

/// Column just past a lone `=`, if that is what comes next.
fn assignment(line: &[u8], column: Column) -> Option<Column> {
    let column = skip_blanks(line, column);
    if line.get(column) == Some(&b'=') && line.get(column + 1) != Some(&b'=') {
        Some(column + 1)
    } else {
        None
    }
}

fn pass_command(line: &[u8], column: Column) -> Option<(Pass, Column)> {
    let word = line.get(column..column + 4)?;
    if !word.eq_ignore_ascii_case(b"PASS") {
        return None;
    }
    let column = skip_blanks(line, column + 4);
    let pass = match line.get(column) {
        Some(b'1') => Pass::First,
        Some(b'2') => Pass::Second,
        _ => return None,
    };
    let end = skip_blanks(line, column + 1);
    match line.get(end) {
        None | Some(b':') | Some(b';') | Some(b'\\') => Some((pass, end)),
        _ => None,
    }
}

/// Error unless the evaluator stopped at the end of the statement.
fn end_of_statement(evaluator: &mut Evaluator) -> Result<Column> {
    if evaluator.advance_and_check_end_of_statement() {
        return Err(error!(InvalidCharacter, ..evaluator.column()).in_line(evaluator.line()));
    }
    Ok(evaluator.column())
}

fn set_program_counter(asm: &mut Assembly, line: &[u8], column: Column) -> Result<Column> {
    let mut evaluator = Evaluator::new(asm, line);
    evaluator.set_column(column);
    let pc = evaluator.evaluate_int(false)?;
    if !(0..=0x10000).contains(&pc) {
        return Err(error!(OutOfIntegerRange, ..column; "ADDRESS OUT OF RANGE").in_line(line));
    }
    let end = end_of_statement(&mut evaluator)?;
    asm.set_program_counter(pc as u32);
    Ok(end)
}

/// Symbols may only be defined once on the first pass. The second pass
/// sees the same definitions again and overwrites them.
fn define(asm: &mut Assembly, line: &[u8], column: Column, name: &str, expr: Column) -> Result<Column> {
    let first_pass = asm.pass() == Pass::First;
    let mut evaluator = Evaluator::new(asm, line);
    evaluator.set_column(expr);
    let val = match evaluator.evaluate(false) {
        Ok(val) => val,
        Err(error) if first_pass && error.is_symbol_not_defined() => {
            tracing::debug!(name, "definition deferred to second pass");
            return end_of_statement(&mut evaluator);
        }
        Err(error) => return Err(error),
    };
    let end = end_of_statement(&mut evaluator)?;
    let result = if first_pass {
        asm.var_mut().define(name, val)
    } else {
        asm.var_mut().redefine(name, val)
    };
    result.map_err(|e| e.in_column(column).in_line(line))?;
    Ok(end)
}

fn print(asm: &mut Assembly, line: &[u8], column: Column, output: &mut Vec<String>) -> Result<Column> {
    let first_pass = asm.pass() == Pass::First;
    let mut evaluator = Evaluator::new(asm, line);
    evaluator.set_column(column);
    let mut items = vec![];
    loop {
        match evaluator.evaluate(false) {
            Ok(val) => items.push(val.to_string()),
            Err(error) if first_pass && error.is_symbol_not_defined() => items.push("?".to_string()),
            Err(error) => return Err(error),
        }
        if !evaluator.consume(b',') {
            break;
        }
    }
    let end = end_of_statement(&mut evaluator)?;
    output.push(items.join(" "));
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Val;

    fn run(asm: &mut Assembly, line: &str) -> Vec<String> {
        enter(asm, line).unwrap()
    }

    #[test]
    fn test_statements() {
        let mut asm = Assembly::new();
        assert_eq!(
            run(&mut asm, "a=3: b = a*2: a+b, \"X\"+\"Y\""),
            vec!["9 XY".to_string()]
        );
        assert_eq!(asm.var().fetch("b"), Some(Val::Number(6.0)));
        assert_eq!(run(&mut asm, "1+1 ; comment: 2"), vec!["2".to_string()]);
        assert_eq!(run(&mut asm, "a==3"), vec!["-1".to_string()]);
        assert!(run(&mut asm, "").is_empty());
    }

    #[test]
    fn test_program_counter() {
        let mut asm = Assembly::new();
        assert_eq!(run(&mut asm, "*=&1900: *+1"), vec!["6401".to_string()]);
        let e = enter(&mut asm, "*=-1").unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfIntegerRange);
    }

    #[test]
    fn test_passes() {
        let mut asm = Assembly::new();
        assert!(run(&mut asm, "pass 1").is_empty());
        assert_eq!(asm.pass(), Pass::First);
        assert_eq!(run(&mut asm, "x=fwd+1: fwd+1, 2"), vec!["? 2".to_string()]);
        assert!(asm.var().fetch("x").is_none());
        run(&mut asm, "fwd=10");
        let e = enter(&mut asm, "fwd=11").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalOperation);
        assert_eq!(e.column(), Some(0));
        run(&mut asm, "PASS 2: x=fwd+1: fwd=11");
        assert_eq!(asm.var().fetch("x"), Some(Val::Number(11.0)));
        let e = enter(&mut asm, "y=nowhere").unwrap_err();
        assert!(e.is_symbol_not_defined());
    }

    #[test]
    fn test_trailing_garbage() {
        let mut asm = Assembly::new();
        let e = enter(&mut asm, "a=1,2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidCharacter);
        assert_eq!(e.column(), Some(3));
        let e = enter(&mut asm, "1 2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidCharacter);
    }
}
