/// Counting barrier: completes on the `expected`-th arrival.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Join {
    expected: usize,
    arrived: usize,
}

impl Join {
    pub const fn new(expected: usize) -> Self {
        Self { expected, arrived: 0 }
    }

    /// Records one completion. Returns `true` exactly once, on the arrival that
    /// completes the barrier; later arrivals are ignored.
    pub fn arrive(&mut self) -> bool {
        if self.arrived >= self.expected {
            return false;
        }
        self.arrived += 1;
        self.arrived == self.expected
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.arrived >= self.expected
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.expected - self.arrived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_last_arrival() {
        let mut join = Join::new(2);
        assert!(!join.arrive());
        assert_eq!(join.remaining(), 1);
        assert!(join.arrive());
        assert!(join.is_complete());
        assert!(!join.arrive());
    }

    #[test]
    fn zero_expected_is_already_complete() {
        let mut join = Join::new(0);
        assert!(join.is_complete());
        assert!(!join.arrive());
    }
}
