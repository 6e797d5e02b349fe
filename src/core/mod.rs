pub mod engine;
pub mod factory;
pub mod message;
pub mod observer;
pub mod orchestrator;
pub mod pipeline;
pub mod strategy;

pub use crate::domain::model::{
    Evolved, EvolutionSnapshot, EvolutionStage, MessageBearer, Organism, Species,
};
pub use crate::domain::ports::{ConfigProvider, EvolutionObserver, EvolutionStrategy, MessageSink};
pub use crate::utils::error::Result;
pub use engine::EvolutionEngine;
