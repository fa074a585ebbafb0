/// ## Reduction handlers
///
/// Every non-structural row of the operator tables names one of these.
/// Reducing an opcode pops its arguments from the value stack
/// and pushes exactly one result.
///
/// For example: `2+3*4` reduces `Mul` then `Add`, leaving `14`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // *** Binary operators
    Power,
    Multiply,
    Divide,
    DivInt,
    Mod,
    ShiftLeft,
    ShiftRight,
    Add,
    Sub,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Eor,

    // *** Unary operators
    Neg,
    Pos,
    Hi,
    Lo,

    // *** Built-in functions
    Sin,
    Cos,
    Tan,
    Asn,
    Acs,
    Atn,
    Sqr,
    Rad,
    Deg,
    Int,
    Abs,
    Sgn,
    Rnd,
    Not,
    Log,
    Ln,
    Exp,
    Time,
    Str,
    StrHex,
    Val,
    Eval,
    Len,
    Chr,
    Asc,
    Mid,
    Left,
    Right,
    Repeat,
    Upper,
    Lower,
}

impl Opcode {
    /// Number of values popped from the value stack.
    pub fn arity(self) -> usize {
        use Opcode::*;
        match self {
            Power | Multiply | Divide | DivInt | Mod | ShiftLeft | ShiftRight | Add | Sub | Eq
            | NotEq | Lt | LtEq | Gt | GtEq | And | Or | Eor | Left | Right | Repeat => 2,
            Mid => 3,
            _ => 1,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == Opcode::Power
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Power => write!(f, "POW"),
            Multiply => write!(f, "MUL"),
            Divide => write!(f, "DIV"),
            DivInt => write!(f, "DIVINT"),
            Mod => write!(f, "MOD"),
            ShiftLeft => write!(f, "SHL"),
            ShiftRight => write!(f, "SHR"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Eq => write!(f, "EQ"),
            NotEq => write!(f, "NOTEQ"),
            Lt => write!(f, "LT"),
            LtEq => write!(f, "LTEQ"),
            Gt => write!(f, "GT"),
            GtEq => write!(f, "GTEQ"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Eor => write!(f, "EOR"),
            Neg => write!(f, "NEG"),
            Pos => write!(f, "POS"),
            Hi => write!(f, "HI"),
            Lo => write!(f, "LO"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            Tan => write!(f, "TAN"),
            Asn => write!(f, "ASN"),
            Acs => write!(f, "ACS"),
            Atn => write!(f, "ATN"),
            Sqr => write!(f, "SQR"),
            Rad => write!(f, "RAD"),
            Deg => write!(f, "DEG"),
            Int => write!(f, "INT"),
            Abs => write!(f, "ABS"),
            Sgn => write!(f, "SGN"),
            Rnd => write!(f, "RND"),
            Not => write!(f, "NOT"),
            Log => write!(f, "LOG"),
            Ln => write!(f, "LN"),
            Exp => write!(f, "EXP"),
            Time => write!(f, "TIME$"),
            Str => write!(f, "STR$"),
            StrHex => write!(f, "STR$~"),
            Val => write!(f, "VAL"),
            Eval => write!(f, "EVAL"),
            Len => write!(f, "LEN"),
            Chr => write!(f, "CHR$"),
            Asc => write!(f, "ASC"),
            Mid => write!(f, "MID$"),
            Left => write!(f, "LEFT$"),
            Right => write!(f, "RIGHT$"),
            Repeat => write!(f, "STRING$"),
            Upper => write!(f, "UPPER$"),
            Lower => write!(f, "LOWER$"),
        }
    }
}
