use crate::core::ConfigProvider;
use crate::utils::error::{DrawError, Result};
use crate::utils::validation::parse_bool;
use std::env;

#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub seed: Option<u64>,
    pub pretty: bool,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("LOTTO_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                DrawError::InvalidConfigValueError {
                    field: "LOTTO_SEED".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let pretty = match lookup("LOTTO_PRETTY") {
            Some(raw) => parse_bool("LOTTO_PRETTY", &raw)?,
            None => false,
        };

        Ok(Self { seed, pretty })
    }
}

impl ConfigProvider for LambdaConfig {
    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn pretty_output(&self) -> bool {
        self.pretty
    }

    fn monitoring_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = LambdaConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.seed(), None);
        assert!(!config.pretty_output());
    }

    #[test]
    fn test_reads_seed_and_pretty() {
        let config =
            LambdaConfig::from_lookup(lookup(&[("LOTTO_SEED", "77"), ("LOTTO_PRETTY", "yes")]))
                .unwrap();
        assert_eq!(config.seed(), Some(77));
        assert!(config.pretty_output());
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        let err = LambdaConfig::from_lookup(lookup(&[("LOTTO_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, DrawError::InvalidConfigValueError { .. }));
    }
}
