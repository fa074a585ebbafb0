use super::Column;
use std::rc::Rc;

/// ## Evaluation error
///
/// Every error knows its `ErrorCode`. The column and the text of the
/// offending line are attached on the way out of the evaluator, so the
/// small handlers deep inside never need to know where they are.

#[derive(Clone)]
pub struct Error {
    code: ErrorCode,
    line: Option<Rc<str>>,
    column: Option<Column>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            column: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    pub fn is_symbol_not_defined(&self) -> bool {
        self.code == ErrorCode::SymbolNotDefined
    }

    /// Attach a column unless one is already known.
    /// Errors raised inside `EVAL` keep the position in their own text.
    pub fn in_column(self, column: Column) -> Error {
        if self.column.is_some() {
            return self;
        }
        Error {
            column: Some(column),
            ..self
        }
    }

    /// Attach the source line unless one is already known.
    pub fn in_line(self, line: &[u8]) -> Error {
        if self.line.is_some() {
            return self;
        }
        Error {
            line: Some(String::from_utf8_lossy(line).into()),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidCharacter = 1,
    MissingQuote = 2,
    SymbolNotDefined = 3,
    TypeMismatch = 4,
    MissingValue = 5,
    ExpressionTooComplex = 6,
    ParameterCount = 7,
    MismatchedParentheses = 8,
    EmptyExpression = 9,
    DivisionByZero = 10,
    NumberTooBig = 11,
    IllegalOperation = 12,
    OutOfIntegerRange = 13,
    TimeResultTooBig = 14,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            InvalidCharacter => "INVALID CHARACTER",
            MissingQuote => "MISSING QUOTE",
            SymbolNotDefined => "SYMBOL NOT DEFINED",
            TypeMismatch => "TYPE MISMATCH",
            MissingValue => "MISSING VALUE",
            ExpressionTooComplex => "EXPRESSION TOO COMPLEX",
            ParameterCount => "WRONG NUMBER OF PARAMETERS",
            MismatchedParentheses => "MISMATCHED PARENTHESES",
            EmptyExpression => "EMPTY EXPRESSION",
            DivisionByZero => "DIVISION BY ZERO",
            NumberTooBig => "NUMBER TOO BIG",
            IllegalOperation => "ILLEGAL OPERATION",
            OutOfIntegerRange => "OUT OF INTEGER RANGE",
            TimeResultTooBig => "TIME RESULT TOO BIG",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(column) = self.column {
            suffix.push_str(&format!(" AT COLUMN {}", column + 1));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}
