use serde::{Deserialize, Serialize};

pub const MAX_COMBINATIONS: usize = 200;
pub const LOTTO_MIN: u8 = 1;
pub const LOTTO_MAX: u8 = 36;
pub const NUMBERS_PER_COMBINATION: usize = 7;

/// 產生開獎號碼的最大嘗試次數
pub const MAX_DRAW_ATTEMPTS: usize = 10_000;

/// Fixed game parameters, as shown to clients building a submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub max_combinations: usize,
    pub lotto_min: u8,
    pub lotto_max: u8,
    pub numbers_per_combination: usize,
}

impl GameRules {
    pub const fn standard() -> Self {
        Self {
            max_combinations: MAX_COMBINATIONS,
            lotto_min: LOTTO_MIN,
            lotto_max: LOTTO_MAX,
            numbers_per_combination: NUMBERS_PER_COMBINATION,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::standard()
    }
}
