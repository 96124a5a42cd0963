use crate::utils::error::{DrawError, Result};
use serde::{Deserialize, Serialize};

/// Value-set of lottery numbers, one bit per number.
///
/// Two combinations are the same ticket iff their `NumberSet`s are equal,
/// whatever order the numbers were submitted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumberSet(u64);

impl NumberSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// 回傳 false 表示號碼已存在，或超出可表示的範圍 (>= 64)
    pub fn insert(&mut self, number: u8) -> bool {
        let Some(bit) = 1u64.checked_shl(number as u32) else {
            return false;
        };
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn contains(&self, number: u8) -> bool {
        (number as u32) < u64::BITS && self.0 & (1u64 << number) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn intersection(self, other: NumberSet) -> NumberSet {
        NumberSet(self.0 & other.0)
    }

    pub fn difference(self, other: NumberSet) -> NumberSet {
        NumberSet(self.0 & !other.0)
    }

    /// Numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let number = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(number)
        })
    }

    pub fn to_sorted_vec(self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl FromIterator<u8> for NumberSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = NumberSet::empty();
        for number in iter {
            set.insert(number);
        }
        set
    }
}

/// A validated submission. Keeps the numbers in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    numbers: Vec<u8>,
    value_set: NumberSet,
}

impl Combination {
    pub(crate) fn new(numbers: Vec<u8>) -> Self {
        let value_set = numbers.iter().copied().collect();
        Self { numbers, value_set }
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn value_set(&self) -> NumberSet {
        self.value_set
    }

    pub fn sorted_numbers(&self) -> Vec<u8> {
        self.value_set.to_sorted_vec()
    }
}

/// The generated result, always sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Draw {
    numbers: Vec<u8>,
}

impl Draw {
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn value_set(&self) -> NumberSet {
        self.numbers.iter().copied().collect()
    }
}

impl From<NumberSet> for Draw {
    fn from(set: NumberSet) -> Self {
        Self {
            numbers: set.to_sorted_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitDetail {
    /// 1-based position in the submitted batch
    pub index: usize,
    pub combination: Vec<u8>,
    pub hits: usize,
    pub hit_numbers: Vec<u8>,
    pub miss_numbers: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitReport {
    pub six_hits: usize,
    pub five_hits: usize,
    pub four_hits: usize,
    pub total_with_hits: usize,
    pub details: Vec<HitDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawResponse {
    pub draw: Draw,
    pub combinations_submitted: usize,
    pub unique_combinations: usize,
    pub message: String,
    pub hit_report: HitReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status plus JSON body for one request, independent of the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    pub status: u16,
    pub body: serde_json::Value,
}

impl DrawOutcome {
    pub fn from_result(result: Result<DrawResponse>) -> Self {
        match result {
            Ok(response) => match serde_json::to_value(&response) {
                Ok(body) => Self { status: 200, body },
                Err(e) => {
                    tracing::error!("❌ Failed to serialize draw response: {}", e);
                    Self::error(500, e.to_string())
                }
            },
            Err(e) => Self::from_error(&e),
        }
    }

    pub fn from_error(error: &DrawError) -> Self {
        Self::error(error.status_code(), error.user_friendly_message())
    }

    fn error(status: u16, message: String) -> Self {
        let body = serde_json::to_value(ErrorResponse { error: message }).unwrap_or_else(|e| {
            tracing::error!("❌ Failed to serialize error response: {}", e);
            serde_json::Value::Null
        });
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_set_ignores_order() {
        let a: NumberSet = [7, 1, 3, 2, 6, 5, 4].into_iter().collect();
        let b: NumberSet = (1..=7).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
        assert_eq!(a.to_sorted_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_number_set_insert_reports_duplicates() {
        let mut set = NumberSet::empty();
        assert!(set.insert(36));
        assert!(!set.insert(36));
        assert!(set.contains(36));
        assert!(!set.contains(35));
    }

    #[test]
    fn test_number_set_rejects_unrepresentable_numbers() {
        let mut set: NumberSet = [1, 2].into_iter().collect();
        assert!(!set.insert(64));
        assert!(!set.insert(u8::MAX));
        assert!(set.insert(63));
        assert_eq!(set.to_sorted_vec(), vec![1, 2, 63]);
        assert!(!set.contains(64));
    }

    #[test]
    fn test_intersection_and_difference() {
        let draw: NumberSet = (1..=7).collect();
        let combo: NumberSet = [1, 2, 3, 4, 8, 9, 10].into_iter().collect();
        assert_eq!(combo.intersection(draw).to_sorted_vec(), vec![1, 2, 3, 4]);
        assert_eq!(combo.difference(draw).to_sorted_vec(), vec![8, 9, 10]);
    }

    #[test]
    fn test_draw_serializes_as_sorted_array() {
        let set: NumberSet = [36, 2, 19, 5, 11, 30, 1].into_iter().collect();
        let draw = Draw::from(set);
        assert_eq!(
            serde_json::to_value(&draw).unwrap(),
            serde_json::json!([1, 2, 5, 11, 19, 30, 36])
        );
    }

    #[test]
    fn test_outcome_from_error_uses_status_and_message() {
        let outcome = DrawOutcome::from_result(Err(DrawError::DrawGenerationFailed {
            attempts: 3,
        }));
        assert_eq!(outcome.status, 500);
        assert!(!outcome.is_success());
        let parsed: ErrorResponse = serde_json::from_value(outcome.body.clone()).unwrap();
        assert_eq!(
            parsed.error,
            "Could not generate a non-matching draw after 3 attempts."
        );
        assert_eq!(
            outcome.body,
            serde_json::json!({
                "error": "Could not generate a non-matching draw after 3 attempts."
            })
        );
    }
}
