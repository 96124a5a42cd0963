pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalSource, CliConfig};

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use config::toml_config::TomlConfig;
pub use core::engine::DrawEngine;
pub use domain::model::{DrawOutcome, DrawResponse};
pub use domain::rules::GameRules;
pub use utils::error::{DrawError, Result};
