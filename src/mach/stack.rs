use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Pushing past capacity is `ExpressionTooComplex`, popping an empty
/// stack is `MissingValue`. Neither ever panics.

pub struct Stack<T> {
    overflow_message: &'static str,
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize, overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    fn underflow_error(&self) -> Error {
        error!(MissingValue)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(ExpressionTooComplex; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn pop_3(&mut self) -> Result<(T, T, T)> {
        if self.vec.len() < 3 {
            return Err(self.underflow_error());
        }
        let three = self.pop()?;
        let (one, two) = self.pop_2()?;
        Ok((one, two, three))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_capacity() {
        let mut s: Stack<u8> = Stack::new(2, "TOO MANY");
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert!(s.is_full());
        let e = s.push(3).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ExpressionTooComplex);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_underflow_leaves_stack_alone() {
        let mut s: Stack<u8> = Stack::new(8, "TOO MANY");
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop_3().unwrap_err().code(), ErrorCode::MissingValue);
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop_2().unwrap(), (1, 2));
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::MissingValue);
    }
}
