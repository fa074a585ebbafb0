use super::Column;
use crate::mach::Opcode;

/// ## Operator descriptor
///
/// One row of an operator table. A row without an opcode is structural:
/// a bracket or a parameter separator which shapes the operator stack
/// instead of computing anything.

#[derive(Debug, PartialEq)]
pub struct Operator {
    pub text: &'static str,
    pub precedence: i8,
    pub params: usize,
    pub opcode: Option<Opcode>,
}

impl Operator {
    const fn structural(text: &'static str) -> Operator {
        Operator {
            text,
            precedence: -1,
            params: 0,
            opcode: None,
        }
    }

    const fn op(text: &'static str, precedence: i8, opcode: Opcode) -> Operator {
        Operator {
            text,
            precedence,
            params: 0,
            opcode: Some(opcode),
        }
    }

    const fn func(text: &'static str, params: usize, opcode: Opcode) -> Operator {
        Operator {
            text,
            precedence: 10,
            params,
            opcode: Some(opcode),
        }
    }

    pub fn is_structural(&self) -> bool {
        self.opcode.is_none()
    }

    /// Named functions carry their open bracket in the text, e.g. `SIN(`.
    /// The bracket itself is `(` alone.
    pub fn is_function(&self) -> bool {
        self.text.len() > 1 && self.text.ends_with('(')
    }

    pub fn is_separator(&self) -> bool {
        self.text == ","
    }

    /// Case-insensitive match of the text against the line at `column`.
    pub fn matches(&self, line: &[u8], column: Column) -> bool {
        match line.get(column..column + self.text.len()) {
            Some(s) => s
                .iter()
                .zip(self.text.bytes())
                .all(|(l, t)| l.to_ascii_uppercase() == t),
            None => false,
        }
    }
}

/// Find the first table row matching the line at `column`.
///
/// Rows are tried in declaration order. Where one text is a prefix of
/// another the longer one is declared first, so the first match wins.
pub fn find(table: &'static [Operator], line: &[u8], column: Column) -> Option<&'static Operator> {
    table.iter().find(|op| op.matches(line, column))
}

pub static BINARY: [Operator; 24] = [
    Operator::structural(")"),
    Operator::structural("]"),
    Operator::structural(","),
    Operator::op("^", 7, Opcode::Power),
    Operator::op("*", 6, Opcode::Multiply),
    Operator::op("/", 6, Opcode::Divide),
    Operator::op("%", 6, Opcode::Mod),
    Operator::op("DIV", 6, Opcode::DivInt),
    Operator::op("MOD", 6, Opcode::Mod),
    Operator::op("<<", 6, Opcode::ShiftLeft),
    Operator::op(">>", 6, Opcode::ShiftRight),
    Operator::op("+", 5, Opcode::Add),
    Operator::op("-", 5, Opcode::Sub),
    Operator::op("==", 4, Opcode::Eq),
    Operator::op("=", 4, Opcode::Eq),
    Operator::op("<>", 4, Opcode::NotEq),
    Operator::op("!=", 4, Opcode::NotEq),
    Operator::op("<=", 4, Opcode::LtEq),
    Operator::op(">=", 4, Opcode::GtEq),
    Operator::op("<", 4, Opcode::Lt),
    Operator::op(">", 4, Opcode::Gt),
    Operator::op("AND", 3, Opcode::And),
    Operator::op("OR", 2, Opcode::Or),
    Operator::op("EOR", 2, Opcode::Eor),
];

pub static UNARY: [Operator; 39] = [
    Operator::structural("("),
    Operator::structural("["),
    Operator::op("-", 8, Opcode::Neg),
    Operator::op("+", 8, Opcode::Pos),
    Operator::func("HI(", 1, Opcode::Hi),
    Operator::func("LO(", 1, Opcode::Lo),
    Operator::op(">", 10, Opcode::Hi),
    Operator::op("<", 10, Opcode::Lo),
    Operator::func("SIN(", 1, Opcode::Sin),
    Operator::func("COS(", 1, Opcode::Cos),
    Operator::func("TAN(", 1, Opcode::Tan),
    Operator::func("ASN(", 1, Opcode::Asn),
    Operator::func("ACS(", 1, Opcode::Acs),
    Operator::func("ATN(", 1, Opcode::Atn),
    Operator::func("SQR(", 1, Opcode::Sqr),
    Operator::func("RAD(", 1, Opcode::Rad),
    Operator::func("DEG(", 1, Opcode::Deg),
    Operator::func("INT(", 1, Opcode::Int),
    Operator::func("ABS(", 1, Opcode::Abs),
    Operator::func("SGN(", 1, Opcode::Sgn),
    Operator::func("RND(", 1, Opcode::Rnd),
    Operator::func("NOT(", 1, Opcode::Not),
    Operator::func("LOG(", 1, Opcode::Log),
    Operator::func("LN(", 1, Opcode::Ln),
    Operator::func("EXP(", 1, Opcode::Exp),
    Operator::func("TIME$(", 1, Opcode::Time),
    Operator::func("STR$(", 1, Opcode::Str),
    Operator::func("STR$~(", 1, Opcode::StrHex),
    Operator::func("VAL(", 1, Opcode::Val),
    Operator::func("EVAL(", 1, Opcode::Eval),
    Operator::func("LEN(", 1, Opcode::Len),
    Operator::func("CHR$(", 1, Opcode::Chr),
    Operator::func("ASC(", 1, Opcode::Asc),
    Operator::func("MID$(", 3, Opcode::Mid),
    Operator::func("LEFT$(", 2, Opcode::Left),
    Operator::func("RIGHT$(", 2, Opcode::Right),
    Operator::func("STRING$(", 2, Opcode::Repeat),
    Operator::func("UPPER$(", 1, Opcode::Upper),
    Operator::func("LOWER$(", 1, Opcode::Lower),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(s: &str) -> Option<&'static str> {
        find(&BINARY, s.as_bytes(), 0).map(|op| op.text)
    }

    fn unary(s: &str) -> Option<&'static str> {
        find(&UNARY, s.as_bytes(), 0).map(|op| op.text)
    }

    #[test]
    fn test_longer_tokens_first() {
        assert_eq!(binary("<=3"), Some("<="));
        assert_eq!(binary("<>3"), Some("<>"));
        assert_eq!(binary("<<3"), Some("<<"));
        assert_eq!(binary("<3"), Some("<"));
        assert_eq!(binary("==3"), Some("=="));
        assert_eq!(binary("=3"), Some("="));
        assert_eq!(binary("!3"), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(binary("div 3"), Some("DIV"));
        assert_eq!(binary("Eor 3"), Some("EOR"));
        assert_eq!(unary("sin(0)"), Some("SIN("));
        assert_eq!(unary("str$~(255)"), Some("STR$~("));
    }

    #[test]
    fn test_function_needs_bracket() {
        assert_eq!(unary("SIN 0"), None);
        assert_eq!(unary("LENGTH"), None);
        assert_eq!(unary("STR$(1)"), Some("STR$("));
    }

    #[test]
    fn test_structural() {
        let open = find(&UNARY, b"(", 0).unwrap();
        assert!(open.is_structural());
        assert!(!open.is_function());
        let sin = find(&UNARY, b"SIN(", 0).unwrap();
        assert!(sin.is_function());
        assert!(!sin.is_structural());
        assert!(find(&BINARY, b",", 0).unwrap().is_separator());
    }

    #[test]
    fn test_match_at_end_of_line() {
        assert!(!BINARY[7].matches(b"1 DI", 2));
        assert!(BINARY[7].matches(b"1 DIV", 2));
    }
}
