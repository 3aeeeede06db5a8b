use super::Operation;
use crate::lang::token::Func;
use crate::lang::{Error, ErrorKind, TokenId};
use rand::rngs::StdRng;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// Built-in function evaluation. Dispatch is on the function and the
/// argument count the parser has already enforced.
pub struct Function {}

impl Function {
    pub fn eval(func: Func, args: &[i16], rng: &mut StdRng, token: TokenId) -> Result<i16> {
        match (func, args) {
            (Func::Abs, [n]) => Ok(Self::abs(*n)),
            (Func::Rnd, [n]) => Ok(Self::rnd(rng, *n)),
            (Func::Mod, [lhs, rhs]) => Operation::modulo(*lhs, *rhs, token),
            _ => {
                debug_assert!(false, "call arity does not match its function");
                Err(Error::new(ErrorKind::NotImplemented, token))
            }
        }
    }

    /// Absolute value computed in 32 bits then narrowed, so the
    /// minimum value wraps to itself instead of panicking.
    fn abs(n: i16) -> i16 {
        (n as i32).abs() as i16
    }

    /// Uniform draw from 1 through `n`, or always 1 when `n` is less
    /// than 1.
    fn rnd(rng: &mut StdRng, n: i16) -> i16 {
        rng.gen_range(1..=n.max(1))
    }
}
