use crate::domain::model::{Combination, NumberSet};
use crate::domain::rules::{LOTTO_MAX, LOTTO_MIN, MAX_COMBINATIONS, NUMBERS_PER_COMBINATION};
use crate::utils::error::{DrawError, Result};
use serde_json::Value;
use thiserror::Error;

/// Why a single combination was rejected.
///
/// Length and integer coercion apply to the whole combination first; range and
/// uniqueness are then checked number by number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationError {
    #[error("Each combination must have exactly {} numbers.", NUMBERS_PER_COMBINATION)]
    WrongLength,

    #[error("All numbers must be integers.")]
    NotInteger,

    #[error("All numbers must be between {} and {}.", LOTTO_MIN, LOTTO_MAX)]
    OutOfRange,

    #[error("Numbers within a combination must be unique.")]
    Duplicate,
}

/// 驗證單一組號碼並轉成整數
pub fn validate_combination(raw: &[Value]) -> std::result::Result<Combination, CombinationError> {
    if raw.len() != NUMBERS_PER_COMBINATION {
        return Err(CombinationError::WrongLength);
    }

    let integers = raw
        .iter()
        .map(coerce_integer)
        .collect::<Option<Vec<i64>>>()
        .ok_or(CombinationError::NotInteger)?;

    // 範圍與重複逐一檢查，第一個有問題的號碼決定錯誤
    let mut seen = NumberSet::empty();
    let mut numbers = Vec::with_capacity(integers.len());
    for n in integers {
        let number = u8::try_from(n)
            .ok()
            .filter(|n| (LOTTO_MIN..=LOTTO_MAX).contains(n))
            .ok_or(CombinationError::OutOfRange)?;
        if !seen.insert(number) {
            return Err(CombinationError::Duplicate);
        }
        numbers.push(number);
    }

    Ok(Combination::new(numbers))
}

/// Integers, integral floats (`5.0`) and decimal strings (`"5"`) are accepted.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            // 超過 i64 的正整數仍是整數，交給範圍檢查處理
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Validate a whole request payload. The first failure aborts the batch.
pub fn validate_batch(payload: &Value) -> Result<Vec<Combination>> {
    let Some(combinations) = payload.get("combinations") else {
        return Err(DrawError::invalid_input("No combinations provided."));
    };

    let batch = match combinations.as_array() {
        Some(batch) if !batch.is_empty() => batch,
        _ => {
            return Err(DrawError::invalid_input(
                "Please provide at least one combination.",
            ))
        }
    };

    if batch.len() > MAX_COMBINATIONS {
        return Err(DrawError::invalid_input(format!(
            "Maximum {} combinations allowed.",
            MAX_COMBINATIONS
        )));
    }

    let mut validated = Vec::with_capacity(batch.len());
    for (i, entry) in batch.iter().enumerate() {
        let Some(raw) = entry.as_array() else {
            return Err(DrawError::invalid_input(format!(
                "Combination {} is not a valid list.",
                i + 1
            )));
        };

        let combination = validate_combination(raw).map_err(|e| {
            tracing::debug!("Combination {} rejected: {:?}", i + 1, e);
            DrawError::invalid_input(format!("Combination {}: {}", i + 1, e))
        })?;
        validated.push(combination);
    }

    tracing::debug!("Validated {} combinations", validated.len());
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: Value) -> Vec<Value> {
        v.as_array().unwrap().clone()
    }

    fn batch_error(payload: Value) -> String {
        validate_batch(&payload).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_combination_keeps_submission_order() {
        let combo = validate_combination(&values(json!([7, 3, 36, 1, 12, 20, 5]))).unwrap();
        assert_eq!(combo.numbers(), &[7, 3, 36, 1, 12, 20, 5]);
        assert_eq!(combo.sorted_numbers(), vec![1, 3, 5, 7, 12, 20, 36]);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            validate_combination(&values(json!([1, 2, 3, 4, 5, 6]))),
            Err(CombinationError::WrongLength)
        );
        assert_eq!(
            validate_combination(&values(json!([1, 2, 3, 4, 5, 6, 7, 8]))),
            Err(CombinationError::WrongLength)
        );
    }

    #[test]
    fn test_non_integer_values() {
        for bad in [json!(5.5), json!("abc"), json!(true), json!(null), json!([1])] {
            let raw = vec![json!(1), json!(2), json!(3), json!(4), json!(5), json!(6), bad];
            assert_eq!(validate_combination(&raw), Err(CombinationError::NotInteger));
        }
    }

    #[test]
    fn test_coercible_values_are_accepted() {
        let combo =
            validate_combination(&values(json!([1, "2", " 3 ", 4.0, 5, 6, 7]))).unwrap();
        assert_eq!(combo.numbers(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_out_of_range() {
        for bad in [0, 37, -1] {
            let raw = values(json!([1, 2, 3, 4, 5, 6, bad]));
            assert_eq!(validate_combination(&raw), Err(CombinationError::OutOfRange));
        }
        let huge = values(json!([1, 2, 3, 4, 5, 6, u64::MAX]));
        assert_eq!(validate_combination(&huge), Err(CombinationError::OutOfRange));
    }

    #[test]
    fn test_duplicate_numbers() {
        let raw = values(json!([1, 2, 3, 4, 5, 6, 6]));
        assert_eq!(validate_combination(&raw), Err(CombinationError::Duplicate));
    }

    #[test]
    fn test_rules_are_checked_in_order() {
        // 非整數優先於範圍錯誤
        let raw = values(json!([99, 99, 3, 4, 5, 6, "x"]));
        assert_eq!(validate_combination(&raw), Err(CombinationError::NotInteger));

        // 先出現的重複號碼優先於後面的範圍錯誤
        let raw = values(json!([1, 1, 3, 4, 5, 6, 40]));
        assert_eq!(validate_combination(&raw), Err(CombinationError::Duplicate));

        // 先出現的範圍錯誤優先於後面的重複號碼
        let raw = values(json!([40, 1, 1, 4, 5, 6, 7]));
        assert_eq!(validate_combination(&raw), Err(CombinationError::OutOfRange));
    }

    #[test]
    fn test_batch_level_errors() {
        assert_eq!(batch_error(json!({})), "No combinations provided.");
        assert_eq!(batch_error(json!(null)), "No combinations provided.");
        assert_eq!(
            batch_error(json!({"combinations": []})),
            "Please provide at least one combination."
        );
        assert_eq!(
            batch_error(json!({"combinations": "1,2,3"})),
            "Please provide at least one combination."
        );
        assert_eq!(
            batch_error(json!({"combinations": [[1, 2, 3, 4, 5, 6, 7], 42]})),
            "Combination 2 is not a valid list."
        );
    }

    #[test]
    fn test_batch_reports_first_failing_combination() {
        let payload = json!({"combinations": [
            [1, 2, 3, 4, 5, 6, 7],
            [1, 2, 3, 4, 5, 6],
            [0, 2, 3, 4, 5, 6, 7]
        ]});
        assert_eq!(
            batch_error(payload),
            "Combination 2: Each combination must have exactly 7 numbers."
        );
    }

    #[test]
    fn test_batch_size_limit() {
        let combo = json!([1, 2, 3, 4, 5, 6, 7]);
        let at_limit = json!({ "combinations": vec![combo.clone(); MAX_COMBINATIONS] });
        assert_eq!(validate_batch(&at_limit).unwrap().len(), MAX_COMBINATIONS);

        let over = json!({ "combinations": vec![combo; MAX_COMBINATIONS + 1] });
        assert_eq!(batch_error(over), "Maximum 200 combinations allowed.");
    }
}
