use crate::domain::model::{Evolved, EvolutionSnapshot, Organism};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn debug(&self) -> bool;
    fn strategy(&self) -> &str;
}

pub trait MessageSink: Send + Sync {
    fn deliver(&self, message: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait EvolutionStrategy: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
    async fn evolve(&self, organism: Organism) -> Result<Evolved>;
}

/// Observation never influences the run, so this stays sync and infallible.
pub trait EvolutionObserver: Send + Sync {
    fn on_evolution_step(&self, snapshot: &EvolutionSnapshot);
}
