use crate::lang::token::Operator;
use crate::lang::{Error, ErrorKind, TokenId};

type Result<T> = std::result::Result<T, Error>;

/// Checked 16-bit arithmetic. Every operation names the token to
/// charge when it fails.
pub struct Operation {}

impl Operation {
    pub fn add(lhs: i16, rhs: i16, token: TokenId) -> Result<i16> {
        match lhs.checked_add(rhs) {
            Some(n) => Ok(n),
            None => Err(Error::new(ErrorKind::Overflow, token)),
        }
    }

    pub fn subtract(lhs: i16, rhs: i16, token: TokenId) -> Result<i16> {
        match lhs.checked_sub(rhs) {
            Some(n) => Ok(n),
            None => Err(Error::new(ErrorKind::Overflow, token)),
        }
    }

    pub fn multiply(lhs: i16, rhs: i16, token: TokenId) -> Result<i16> {
        match lhs.checked_mul(rhs) {
            Some(n) => Ok(n),
            None => Err(Error::new(ErrorKind::Overflow, token)),
        }
    }

    pub fn divide(lhs: i16, rhs: i16, token: TokenId) -> Result<i16> {
        match lhs.checked_div(rhs) {
            Some(n) => Ok(n),
            None => {
                if rhs == 0 {
                    Err(Error::new(ErrorKind::DivisionByZero, token))
                } else {
                    Err(Error::new(ErrorKind::Overflow, token))
                }
            }
        }
    }

    pub fn modulo(lhs: i16, rhs: i16, token: TokenId) -> Result<i16> {
        match lhs.checked_rem(rhs) {
            Some(n) => Ok(n),
            None => {
                if rhs == 0 {
                    Err(Error::new(ErrorKind::DivisionByZero, token))
                } else {
                    Err(Error::new(ErrorKind::Overflow, token))
                }
            }
        }
    }

    /// Relational comparison producing the dialect's 0 or 1.
    pub fn compare(operator: Operator, lhs: i16, rhs: i16) -> i16 {
        use Operator::*;
        let result = match operator {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
            Multiply | Divide | Plus | Minus => {
                debug_assert!(false, "arithmetic operator in a predicate");
                false
            }
        };
        result as i16
    }
}
