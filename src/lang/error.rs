use super::token::Tag;
use super::TokenId;

/// A parse or run failure, tied to the token where it was detected.
/// Detection and presentation stay separate: the kind records what
/// went wrong, `Display` renders the classic console message.
pub struct Error {
    kind: ErrorKind,
    token: TokenId,
}

#[derive(Debug)]
pub enum ErrorKind {
    ExpectedToken { want: Tag, got: Tag },
    ExpectedStatement,
    ExpectedRelop,
    ExpectedExpression,
    NotImplemented,
    Overflow,
    DivisionByZero,
    ReturnWithoutGosub,
    TooManyGosubs,
    UndefinedLine(i16),
    Io(std::io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, token: TokenId) -> Error {
        Error { kind, token }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn token(&self) -> TokenId {
        self.token
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;
        match &self.kind {
            ExpectedToken { want, got } => {
                write!(f, "SYNTAX ERROR; EXPECTED {}, FOUND {}", want, got)
            }
            ExpectedStatement => write!(f, "SYNTAX ERROR; EXPECTED STATEMENT"),
            ExpectedRelop => write!(f, "SYNTAX ERROR; EXPECTED RELATIONAL OPERATOR"),
            ExpectedExpression => write!(f, "SYNTAX ERROR; EXPECTED EXPRESSION"),
            NotImplemented => write!(f, "NOT IMPLEMENTED"),
            Overflow => write!(f, "OVERFLOW"),
            DivisionByZero => write!(f, "DIVISION BY ZERO"),
            ReturnWithoutGosub => write!(f, "RETURN WITHOUT GOSUB"),
            TooManyGosubs => write!(f, "TOO MANY GOSUBS"),
            UndefinedLine(number) => write!(f, "UNDEFINED LINE {}", number),
            Io(cause) => write!(f, "IO ERROR; {}", cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::Word;

    #[test]
    fn test_messages() {
        let error = Error::new(
            ErrorKind::ExpectedToken {
                want: Tag::Word(Word::Then),
                got: Tag::Eol,
            },
            3,
        );
        assert_eq!(
            error.to_string(),
            "SYNTAX ERROR; EXPECTED THEN, FOUND END OF LINE"
        );
        assert_eq!(error.token(), 3);
        assert_eq!(
            Error::new(ErrorKind::UndefinedLine(999), 0).to_string(),
            "UNDEFINED LINE 999"
        );
        assert_eq!(
            Error::new(ErrorKind::ReturnWithoutGosub, 0).to_string(),
            "RETURN WITHOUT GOSUB"
        );
    }
}
