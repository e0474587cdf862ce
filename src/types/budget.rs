//! Incorrect-guess budget

use serde::{Deserialize, Serialize};

/// Incorrect attempts used against a fixed maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessBudget {
    used: u32,
    max: u32,
}

impl GuessBudget {
    pub fn new(max: u32) -> Self {
        Self { used: 0, max }
    }

    /// Count one incorrect attempt. Saturates at `max`.
    pub fn charge(&mut self) {
        if self.used < self.max {
            self.used += 1;
        }
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn remaining(&self) -> u32 {
        self.max - self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_until_exhausted() {
        let mut budget = GuessBudget::new(3);
        assert_eq!(budget.remaining(), 3);
        budget.charge();
        budget.charge();
        assert!(!budget.is_exhausted());
        budget.charge();
        assert!(budget.is_exhausted());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_charge_saturates() {
        let mut budget = GuessBudget::new(1);
        budget.charge();
        budget.charge();
        assert_eq!(budget.used(), 1);
    }
}
