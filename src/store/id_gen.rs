//! Default identifier assignment

/// Monotonic counter handing out ids for records created without one.
///
/// Starts at 0 and never rewinds. It is not reconciled with caller-supplied
/// ids, so an explicit id may later collide with a generated one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current value and advance
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to `next_id` will return
    pub fn peek(&self) -> i64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_increments() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }
}
