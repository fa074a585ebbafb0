use super::val::int32;
use super::var::symbol_name_len;
use super::{Context, Function, Opcode, Operation, Stack, Val};
use super::{DEFAULT_TIME_FORMAT, MAX_EVAL_DEPTH, MAX_OPERATORS, MAX_VALUES};
use crate::error;
use crate::lang::operator::{self, Operator, BINARY, UNARY};
use crate::lang::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// An operator waiting on the operator stack. For brackets, `params`
/// counts down the commas still expected in the parameter list.
#[derive(Debug, Clone, Copy)]
struct Pending {
    opcode: Option<Opcode>,
    precedence: i8,
    params: usize,
}

impl Pending {
    fn new(op: &Operator) -> Pending {
        Pending {
            opcode: op.opcode,
            precedence: op.precedence,
            params: op.params,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Expect {
    ValueOrUnary,
    Binary,
}

/// ## Expression evaluator
///
/// Evaluates an infix expression in a single left to right scan using
/// a value stack and an operator stack. The cursor is left just past
/// the expression so the caller can carry on parsing the line.
///
/// ```
/// use beeb::mach::{Assembly, Evaluator, Val};
///
/// let mut asm = Assembly::new();
/// let mut ev = Evaluator::new(&mut asm, b"2+3*4, 5");
/// assert_eq!(ev.evaluate(false).unwrap(), Val::Number(14.0));
/// assert_eq!(ev.column(), 5);
/// ```

pub struct Evaluator<'a> {
    context: &'a mut dyn Context,
    line: &'a [u8],
    column: Column,
    depth: usize,
    values: Stack<Val>,
    operators: Stack<Pending>,
}

impl<'a> Evaluator<'a> {
    pub fn new(context: &'a mut dyn Context, line: &'a [u8]) -> Evaluator<'a> {
        Evaluator {
            context,
            line,
            column: 0,
            depth: 0,
            values: Stack::new(MAX_VALUES, "TOO MANY VALUES"),
            operators: Stack::new(MAX_OPERATORS, "TOO MANY OPERATORS"),
        }
    }

    pub fn line(&self) -> &[u8] {
        self.line
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn set_column(&mut self, column: Column) {
        debug_assert!(column <= self.line.len());
        self.column = column;
    }

    /// Skip blanks. False at the end of the line or at a statement
    /// separator or comment.
    pub fn advance_and_check_end_of_statement(&mut self) -> bool {
        while let Some(b' ') | Some(b'\t') = self.line.get(self.column) {
            self.column += 1;
        }
        match self.line.get(self.column) {
            None | Some(b':') | Some(b';') | Some(b'\\') => false,
            Some(_) => true,
        }
    }

    pub fn advance_and_check_end_of_sub_statement(&mut self, include_comma: bool) -> bool {
        self.advance_and_check_end_of_statement()
            && !(include_comma && self.line.get(self.column) == Some(&b','))
    }

    /// Skip blanks then step over `byte` if it is next.
    pub fn consume(&mut self, byte: u8) -> bool {
        self.advance_and_check_end_of_statement();
        if self.line.get(self.column) == Some(&byte) {
            self.column += 1;
            true
        } else {
            false
        }
    }

    /// Evaluate one expression starting at the cursor.
    ///
    /// With `allow_one_mismatched_close_bracket` an unmatched `)` ends the
    /// expression and is left unconsumed, for operands like `(addr),Y`
    /// where the open bracket was consumed by the caller.
    pub fn evaluate(&mut self, allow_one_mismatched_close_bracket: bool) -> Result<Val> {
        tracing::trace!(
            line = %String::from_utf8_lossy(self.line),
            column = self.column,
            depth = self.depth,
            "evaluate"
        );
        match self.expression(allow_one_mismatched_close_bracket) {
            Ok(val) => {
                tracing::trace!(result = %val, column = self.column, "evaluated");
                Ok(val)
            }
            Err(e) => Err(e.in_column(self.column).in_line(self.line)),
        }
    }

    pub fn evaluate_number(&mut self, allow_one_mismatched_close_bracket: bool) -> Result<f64> {
        match self.evaluate(allow_one_mismatched_close_bracket)? {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(self.positioned(error!(TypeMismatch))),
        }
    }

    pub fn evaluate_int(&mut self, allow_one_mismatched_close_bracket: bool) -> Result<i32> {
        let n = self.evaluate_number(allow_one_mismatched_close_bracket)?;
        int32(n).map_err(|e| self.positioned(e))
    }

    pub fn evaluate_unsigned(&mut self, allow_one_mismatched_close_bracket: bool) -> Result<u32> {
        Ok(self.evaluate_int(allow_one_mismatched_close_bracket)? as u32)
    }

    pub fn evaluate_string(&mut self, allow_one_mismatched_close_bracket: bool) -> Result<Vec<u8>> {
        match self.evaluate(allow_one_mismatched_close_bracket)? {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(self.positioned(error!(TypeMismatch))),
        }
    }

    fn positioned(&self, e: Error) -> Error {
        e.in_column(self.column).in_line(self.line)
    }

    fn expression(&mut self, allow_one_mismatched_close_bracket: bool) -> Result<Val> {
        self.values.clear();
        self.operators.clear();
        let mut brackets: usize = 0;
        // Commas expected in the parameter list of a function whose
        // open bracket has not been pushed yet, e.g. 2 for `MID$(`.
        let mut pending_commas: usize = 0;
        let mut expect = Expect::ValueOrUnary;

        while self.advance_and_check_end_of_sub_statement(brackets == 0) {
            match expect {
                Expect::ValueOrUnary => match operator::find(&UNARY, self.line, self.column) {
                    None => {
                        if self.values.is_full() {
                            return Err(error!(ExpressionTooComplex, ..self.column));
                        }
                        let val = match self.value() {
                            Ok(val) => val,
                            Err(e) => {
                                if e.is_symbol_not_defined() && self.context.is_first_pass() {
                                    self.skip_expression(
                                        brackets,
                                        allow_one_mismatched_close_bracket,
                                    );
                                }
                                return Err(e);
                            }
                        };
                        self.values.push(val)?;
                        expect = Expect::Binary;
                    }
                    Some(op) => {
                        self.column += op.text.len();
                        if op.is_function() {
                            // Leave the bracket to be read as a bracket next time round.
                            pending_commas = op.params.saturating_sub(1);
                            self.column -= 1;
                        }
                        let mut pending = Pending::new(op);
                        if op.is_structural() {
                            pending.params = pending_commas;
                            pending_commas = 0;
                            brackets += 1;
                        } else {
                            self.reduce_while(|top, _| top > op.precedence)?;
                        }
                        self.operators.push(pending)?;
                    }
                },
                Expect::Binary => {
                    let op = match operator::find(&BINARY, self.line, self.column) {
                        Some(op) => op,
                        None => return Err(error!(InvalidCharacter, ..self.column)),
                    };
                    self.column += op.text.len();
                    if let Some(opcode) = op.opcode {
                        let right = opcode.is_right_associative();
                        self.reduce_while(|top, top_opcode| {
                            top > op.precedence
                                || (top == op.precedence && !(right && top_opcode == opcode))
                        })?;
                        self.operators.push(Pending::new(op))?;
                        expect = Expect::ValueOrUnary;
                        continue;
                    }
                    let separator = op.is_separator();
                    let mut open = match self.close_bracket()? {
                        Some(open) => open,
                        None => {
                            if allow_one_mismatched_close_bracket {
                                self.column -= 1;
                                break;
                            }
                            return Err(error!(MismatchedParentheses, ..self.column - 1));
                        }
                    };
                    if separator {
                        if open.params == 0 {
                            return Err(error!(ParameterCount, ..self.column - 1));
                        }
                        open.params -= 1;
                        self.operators.push(open)?;
                        expect = Expect::ValueOrUnary;
                    } else {
                        brackets -= 1;
                        if open.params != 0 {
                            return Err(error!(ParameterCount, ..self.column - 1));
                        }
                    }
                }
            }
        }

        while let Some(top) = self.operators.last().copied() {
            self.operators.pop()?;
            match top.opcode {
                Some(opcode) => self.reduce(opcode)?,
                None => return Err(error!(MismatchedParentheses, ..self.column)),
            }
        }

        debug_assert!(self.values.len() <= 1);
        if self.values.is_empty() {
            return Err(error!(EmptyExpression, ..self.column));
        }
        self.values.pop()
    }

    /// Reduce stacked operators while `pred(precedence, opcode)` holds.
    /// Stops at any bracket.
    fn reduce_while<F>(&mut self, pred: F) -> Result<()>
    where
        F: Fn(i8, Opcode) -> bool,
    {
        while let Some(&Pending {
            opcode: Some(opcode),
            precedence,
            ..
        }) = self.operators.last()
        {
            if !pred(precedence, opcode) {
                break;
            }
            self.operators.pop()?;
            self.reduce(opcode)?;
        }
        Ok(())
    }

    /// Reduce everything back to the innermost open bracket and pop it.
    fn close_bracket(&mut self) -> Result<Option<Pending>> {
        while let Some(top) = self.operators.last().copied() {
            self.operators.pop()?;
            match top.opcode {
                Some(opcode) => self.reduce(opcode)?,
                None => return Ok(Some(top)),
            }
        }
        Ok(None)
    }

    /// Move past the rest of the expression without evaluating it.
    fn skip_expression(&mut self, mut brackets: usize, allow_one_mismatched_close_bracket: bool) {
        tracing::debug!(column = self.column, "skipping forward reference");
        while self.advance_and_check_end_of_sub_statement(brackets == 0) {
            match self.line[self.column] {
                b'(' | b'[' => brackets += 1,
                b')' | b']' => {
                    if brackets > 0 {
                        brackets -= 1;
                    } else if allow_one_mismatched_close_bracket {
                        break;
                    }
                }
                b'"' => {
                    self.skip_string();
                    continue;
                }
                b'\'' if self.line.get(self.column + 2) == Some(&b'\'') => {
                    self.column += 3;
                    continue;
                }
                _ => {}
            }
            self.column += 1;
        }
    }

    fn skip_string(&mut self) {
        self.column += 1;
        while let Some(&ch) = self.line.get(self.column) {
            self.column += 1;
            if ch == b'"' {
                if self.line.get(self.column) == Some(&b'"') {
                    self.column += 1;
                } else {
                    return;
                }
            }
        }
    }

    /// Read one operand: a literal, `*`, a string, or a symbol.
    fn value(&mut self) -> Result<Val> {
        let mut column = self.column;
        if let Some(n) = self.context.numeric_literal(self.line, &mut column)? {
            self.column = column;
            return Ok(Val::Number(n));
        }
        match self.line.get(self.column) {
            Some(b'*') => {
                self.column += 1;
                Ok(Val::Number(self.context.program_counter()))
            }
            Some(b'\'') => {
                if self.line.len() - self.column < 3 || self.line[self.column + 2] != b'\'' {
                    return Err(error!(InvalidCharacter, ..self.column));
                }
                let ch = self.line[self.column + 1];
                self.column += 3;
                Ok(Val::Number(ch as f64))
            }
            Some(b'"') => self.string_literal(),
            Some(&ch) if ch.is_ascii_alphabetic() || ch == b'_' => self.symbol(),
            _ => Err(error!(InvalidCharacter, ..self.column)),
        }
    }

    /// A doubled quote inside the literal stands for one quote.
    fn string_literal(&mut self) -> Result<Val> {
        let mut text = vec![];
        self.column += 1;
        while let Some(&ch) = self.line.get(self.column) {
            self.column += 1;
            if ch != b'"' {
                text.push(ch);
            } else if self.line.get(self.column) == Some(&b'"') {
                text.push(ch);
                self.column += 1;
            } else {
                return Ok(Val::String(text));
            }
        }
        Err(error!(MissingQuote, ..self.line.len()))
    }

    fn symbol(&mut self) -> Result<Val> {
        let start = self.column;
        let len = symbol_name_len(&self.line[start..]);
        let name = String::from_utf8_lossy(&self.line[start..start + len]).into_owned();
        self.column += len;
        if name == "TIME$" {
            let time = self.context.format_time(DEFAULT_TIME_FORMAT)?;
            return Ok(Val::from(time.as_str()));
        }
        match self.context.symbol(&name) {
            Some(val) => Ok(val),
            None => Err(error!(SymbolNotDefined, ..start)),
        }
    }

    fn reduce(&mut self, opcode: Opcode) -> Result<()> {
        if self.values.len() < opcode.arity() {
            return Err(error!(MissingValue, ..self.column));
        }
        let val = match opcode {
            Opcode::Power => self.binary(Operation::power),
            Opcode::Multiply => self.binary(Operation::multiply),
            Opcode::Divide => self.binary(Operation::divide),
            Opcode::DivInt => self.binary(Operation::divide_int),
            Opcode::Mod => self.binary(Operation::modulus),
            Opcode::ShiftLeft => self.binary(Operation::shift_left),
            Opcode::ShiftRight => self.binary(Operation::shift_right),
            Opcode::Add => self.binary(Operation::sum),
            Opcode::Sub => self.binary(Operation::subtract),
            Opcode::Eq => self.binary(Operation::equal),
            Opcode::NotEq => self.binary(Operation::not_equal),
            Opcode::Lt => self.binary(Operation::less),
            Opcode::LtEq => self.binary(Operation::less_equal),
            Opcode::Gt => self.binary(Operation::greater),
            Opcode::GtEq => self.binary(Operation::greater_equal),
            Opcode::And => self.binary(Operation::and),
            Opcode::Or => self.binary(Operation::or),
            Opcode::Eor => self.binary(Operation::eor),
            Opcode::Neg => self.unary(Function::negate),
            Opcode::Pos => self.unary(Function::posate),
            Opcode::Hi => self.unary(Function::hi),
            Opcode::Lo => self.unary(Function::lo),
            Opcode::Sin => self.unary(Function::sin),
            Opcode::Cos => self.unary(Function::cos),
            Opcode::Tan => self.unary(Function::tan),
            Opcode::Asn => self.unary(Function::asn),
            Opcode::Acs => self.unary(Function::acs),
            Opcode::Atn => self.unary(Function::atn),
            Opcode::Sqr => self.unary(Function::sqr),
            Opcode::Rad => self.unary(Function::rad),
            Opcode::Deg => self.unary(Function::deg),
            Opcode::Int => self.unary(Function::int),
            Opcode::Abs => self.unary(Function::abs),
            Opcode::Sgn => self.unary(Function::sgn),
            Opcode::Not => self.unary(Function::not),
            Opcode::Log => self.unary(Function::log),
            Opcode::Ln => self.unary(Function::ln),
            Opcode::Exp => self.unary(Function::exp),
            Opcode::Str => self.unary(Function::str),
            Opcode::StrHex => self.unary(Function::str_hex),
            Opcode::Val => self.unary(Function::val),
            Opcode::Len => self.unary(Function::len),
            Opcode::Chr => self.unary(Function::chr),
            Opcode::Asc => self.unary(Function::asc),
            Opcode::Upper => self.unary(Function::upper),
            Opcode::Lower => self.unary(Function::lower),
            Opcode::Left => self.binary(Function::left),
            Opcode::Right => self.binary(Function::right),
            Opcode::Repeat => self.binary(Function::repeat),
            Opcode::Mid => match self.values.pop_3() {
                Ok((text, index, count)) => Function::mid(text, index, count),
                Err(e) => Err(e),
            },
            Opcode::Rnd => match self.values.pop() {
                Ok(val) => self.rnd(val),
                Err(e) => Err(e),
            },
            Opcode::Time => match self.values.pop() {
                Ok(val) => self.time(val),
                Err(e) => Err(e),
            },
            Opcode::Eval => match self.values.pop() {
                Ok(val) => self.eval(val),
                Err(e) => Err(e),
            },
        };
        let val = val.map_err(|e| e.in_column(self.column.saturating_sub(1)))?;
        self.values.push(val)
    }

    fn unary(&mut self, f: fn(Val) -> Result<Val>) -> Result<Val> {
        let val = self.values.pop()?;
        f(val)
    }

    fn binary(&mut self, f: fn(Val, Val) -> Result<Val>) -> Result<Val> {
        let (lhs, rhs) = self.values.pop_2()?;
        f(lhs, rhs)
    }

    /// `RND(1)` is uniform in `[0,1)`, `RND(n)` an integer in `[0,n)`.
    fn rnd(&mut self, val: Val) -> Result<Val> {
        let n = val.as_number()?;
        if n < 1.0 {
            Err(error!(IllegalOperation))
        } else if n == 1.0 {
            Ok(Val::Number(self.context.random()))
        } else {
            Ok(Val::from(int32(self.context.random() * n)?))
        }
    }

    fn time(&mut self, val: Val) -> Result<Val> {
        let pattern = val.into_bytes()?;
        let time = self
            .context
            .format_time(&String::from_utf8_lossy(&pattern))?;
        Ok(Val::from(time.as_str()))
    }

    /// Evaluate a string as a brand new expression with its own stacks.
    fn eval(&mut self, val: Val) -> Result<Val> {
        let text = val.into_bytes()?;
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(error!(ExpressionTooComplex; "EVAL NESTED TOO DEEPLY"));
        }
        tracing::debug!(
            depth = self.depth + 1,
            text = %String::from_utf8_lossy(&text),
            "EVAL"
        );
        let mut sub = Evaluator::new(&mut *self.context, &text);
        sub.depth = self.depth + 1;
        sub.evaluate(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::{Assembly, Pass};

    fn eval(s: &str) -> Result<Val> {
        let mut asm = Assembly::new().with_seed(1);
        Evaluator::new(&mut asm, s.as_bytes()).evaluate(false)
    }

    fn code(s: &str) -> ErrorCode {
        eval(s).unwrap_err().code()
    }

    #[test]
    fn test_function_bracket_is_read_twice() {
        assert_eq!(eval("SIN(0)").unwrap(), Val::Number(0.0));
        assert_eq!(eval("-SIN(0)+LEN(\"AB\")").unwrap(), Val::Number(2.0));
    }

    #[test]
    fn test_parameter_count() {
        assert_eq!(code("MID$(\"ABC\",1)"), ErrorCode::ParameterCount);
        assert_eq!(code("LEN(\"A\",1)"), ErrorCode::ParameterCount);
        assert_eq!(code("(1,2)"), ErrorCode::ParameterCount);
        assert_eq!(code("LEFT$(\"ABC\",1,2)"), ErrorCode::ParameterCount);
    }

    #[test]
    fn test_stops_at_top_level_comma() {
        let mut asm = Assembly::new();
        let mut ev = Evaluator::new(&mut asm, b"1+2, MID$(\"ABC\",2,1)");
        assert_eq!(ev.evaluate(false).unwrap(), Val::Number(3.0));
        assert!(ev.consume(b','));
        assert_eq!(ev.evaluate_string(false).unwrap(), b"B".to_vec());
        assert!(!ev.advance_and_check_end_of_statement());
    }

    #[test]
    fn test_statement_ends() {
        for (s, end) in [("1+1:", 3), ("1+1 ; comment", 4), ("1+1\\x", 3), ("1+1  ", 5)].iter() {
            let mut asm = Assembly::new();
            let mut ev = Evaluator::new(&mut asm, s.as_bytes());
            assert_eq!(ev.evaluate(false).unwrap(), Val::Number(2.0));
            assert_eq!(ev.column(), *end);
        }
    }

    #[test]
    fn test_value_stack_overflow() {
        let s = "(".repeat(MAX_OPERATORS + 1);
        assert_eq!(code(&s), ErrorCode::ExpressionTooComplex);
        let s = "1+".repeat(MAX_OPERATORS + 1) + "1";
        assert!(eval(&s).is_ok());
        let s = "1^".repeat(MAX_OPERATORS + 1) + "1";
        assert_eq!(code(&s), ErrorCode::ExpressionTooComplex);
    }

    #[test]
    fn test_eval_depth_is_bounded() {
        let mut asm = Assembly::new();
        asm.var_mut()
            .define("loop$", Val::from("EVAL(loop$)"))
            .unwrap();
        let e = Evaluator::new(&mut asm, b"EVAL(loop$)")
            .evaluate(false)
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::ExpressionTooComplex);
    }

    #[test]
    fn test_first_pass_skip_handles_strings() {
        let mut asm = Assembly::new().with_pass(Pass::First);
        let line = b"fwd+LEN(\"a,b:c\")+')', 7";
        let mut ev = Evaluator::new(&mut asm, line);
        let e = ev.evaluate(false).unwrap_err();
        assert!(e.is_symbol_not_defined());
        assert_eq!(e.column(), Some(0));
        assert_eq!(ev.column(), 20);
        assert_eq!(line[ev.column()], b',');
    }
}
