use super::Column;

/// A scanned lexeme. The tag carries no text; the column locates the
/// lexeme in the original source when text is needed again.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub tag: Tag,
    pub column: Column,
}

impl Token {
    pub fn new(tag: Tag, column: Column) -> Token {
        Token { tag, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Eof,
    Eol,
    Comma,
    LParen,
    RParen,
    Number,
    String,
    Var,
    Word(Word),
    Operator(Operator),
    Func(Func),
    Invalid,
}

const KEYWORDS: &[(&str, Tag)] = &[
    ("ABS", Tag::Func(Func::Abs)),
    ("CLEAR", Tag::Word(Word::Clear)),
    ("END", Tag::Word(Word::End)),
    ("GOSUB", Tag::Word(Word::Gosub)),
    ("GOTO", Tag::Word(Word::Goto)),
    ("IF", Tag::Word(Word::If)),
    ("INPUT", Tag::Word(Word::Input)),
    ("LET", Tag::Word(Word::Let)),
    ("LIST", Tag::Word(Word::List)),
    ("MOD", Tag::Func(Func::Mod)),
    ("PRINT", Tag::Word(Word::Print)),
    ("RETURN", Tag::Word(Word::Return)),
    ("RND", Tag::Func(Func::Rnd)),
    ("RUN", Tag::Word(Word::Run)),
    ("THEN", Tag::Word(Word::Then)),
];

impl Tag {
    pub fn from_word(s: &str) -> Option<Tag> {
        KEYWORDS
            .iter()
            .find(|&&(word, _)| word == s)
            .map(|&(_, tag)| tag)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tag::Eof => write!(f, "END OF FILE"),
            Tag::Eol => write!(f, "END OF LINE"),
            Tag::Comma => write!(f, "COMMA"),
            Tag::LParen => write!(f, "LEFT PARENTHESIS"),
            Tag::RParen => write!(f, "RIGHT PARENTHESIS"),
            Tag::Number => write!(f, "NUMBER"),
            Tag::String => write!(f, "STRING"),
            Tag::Var => write!(f, "VARIABLE"),
            Tag::Word(word) => write!(f, "{}", word),
            Tag::Operator(operator) => write!(f, "{}", operator),
            Tag::Func(func) => write!(f, "{}", func),
            Tag::Invalid => write!(f, "INVALID TOKEN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Clear,
    End,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    Print,
    Return,
    Run,
    Then,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_relational(self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Multiply | Divide | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

/// Built-in functions. MOD lives here rather than with the operators
/// so the dialect stays free of a dedicated modulus keyword; it is an
/// ordinary two argument call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Abs,
    Rnd,
    Mod,
}

impl Func {
    pub fn arity(self) -> usize {
        match self {
            Func::Abs | Func::Rnd => 1,
            Func::Mod => 2,
        }
    }
}

impl std::fmt::Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Func::Abs => write!(f, "ABS"),
            Func::Rnd => write!(f, "RND"),
            Func::Mod => write!(f, "MOD"),
        }
    }
}
