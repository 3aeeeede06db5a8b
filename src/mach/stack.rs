use super::GOSUB_LIMIT;
use crate::lang::{Error, ErrorKind, TokenId};

type Result<T> = std::result::Result<T, Error>;

/// Bounded stack of return positions for GOSUB and RETURN.
#[derive(Debug)]
pub struct Stack {
    vec: Vec<usize>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack {
            vec: Vec::with_capacity(GOSUB_LIMIT),
        }
    }

    pub fn push(&mut self, position: usize, token: TokenId) -> Result<()> {
        if self.vec.len() >= GOSUB_LIMIT {
            return Err(Error::new(ErrorKind::TooManyGosubs, token));
        }
        self.vec.push(position);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.vec.pop()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_to_limit() {
        let mut stack = Stack::new();
        for position in 0..GOSUB_LIMIT {
            assert!(stack.push(position, 0).is_ok());
        }
        assert_eq!(stack.len(), GOSUB_LIMIT);
        let error = stack.push(99, 7).unwrap_err();
        assert_eq!(error.to_string(), "TOO MANY GOSUBS");
        assert_eq!(error.token(), 7);
    }

    #[test]
    fn test_lifo() {
        let mut stack = Stack::new();
        stack.push(10, 0).unwrap();
        stack.push(20, 0).unwrap();
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
