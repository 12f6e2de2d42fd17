//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

/// The values of a rolled pool, kept in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    values: Vec<u32>,
}

impl RollResult {
    /// Wrap already-rolled values.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Individual die values in the order they were drawn.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total() {
        let r = RollResult::from_values(vec![6, 5]);
        assert_eq!(r.total(), 11);
    }

    #[test]
    fn keeps_draw_order() {
        let r = RollResult::from_values(vec![5, 2]);
        assert_eq!(r.values(), &[5, 2]);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn display() {
        let r = RollResult::from_values(vec![3, 5]);
        assert_eq!(r.to_string(), "[3, 5] = 8");
    }

    #[test]
    fn serializes_as_value_list() {
        let r = RollResult::from_values(vec![4, 1]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"values":[4,1]}"#);
    }
}
