pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const KNOWN_STRATEGIES: [&str; 2] = ["linear", "accelerated"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-evolution")]
#[command(about = "The ultimate over-engineered Hello World program")]
pub struct CliConfig {
    #[arg(long, short = 'd', help = "Enable debug mode to see the evolution process")]
    pub debug: bool,

    #[arg(long, default_value = "linear", help = "Evolution strategy (linear or accelerated)")]
    pub strategy: String,
}

impl ConfigProvider for CliConfig {
    fn debug(&self) -> bool {
        self.debug
    }

    fn strategy(&self) -> &str {
        &self.strategy
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("strategy", &self.strategy)?;
        validate_one_of("strategy", &self.strategy, &KNOWN_STRATEGIES)?;
        Ok(())
    }
}
