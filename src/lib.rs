pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::StdoutSink, CliConfig};

pub use crate::core::{engine::EvolutionEngine, orchestrator::HelloWorldOrchestrator};
pub use domain::model::{Evolved, MessageBearer, Organism};
pub use utils::error::{EvolutionError, Result};
