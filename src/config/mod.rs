#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lotto-draw")]
#[command(about = "Generate a lottery draw that matches none of the submitted combinations")]
pub struct CliConfig {
    /// JSON request file ({"combinations": [[...], ...]}); stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fixed RNG seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print the response JSON
    #[arg(long)]
    pub pretty: bool,

    #[arg(long, help = "Log CPU and memory usage per stage")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the game rules as JSON and exit
    #[arg(long)]
    pub rules: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔並套用命令列覆蓋
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(seed) = self.seed {
            settings.draw.seed = Some(seed);
        }
        if self.pretty {
            settings.output.pretty = Some(true);
        }
        if self.monitor {
            settings.monitoring = Some(toml_config::MonitoringConfig { enabled: true });
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
