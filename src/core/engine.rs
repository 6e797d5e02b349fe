use crate::domain::model::{Evolved, EvolutionSnapshot, EvolutionStage, MessageBearer, Organism};
use crate::domain::ports::{EvolutionObserver, EvolutionStrategy};
use crate::utils::error::{EvolutionError, Result};
use std::sync::Arc;

/// Drives the fixed run: notify observers, trace, apply the strategy,
/// repeat until the message transcends its biology.
pub struct EvolutionEngine<S: EvolutionStrategy> {
    strategy: S,
    observers: Vec<Arc<dyn EvolutionObserver>>,
}

impl<S: EvolutionStrategy> EvolutionEngine<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            observers: Vec::new(),
        }
    }

    pub fn attach_observer(&mut self, observer: Arc<dyn EvolutionObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_observers(&self, snapshot: &EvolutionSnapshot) {
        for observer in &self.observers {
            observer.on_evolution_step(snapshot);
        }
    }

    pub async fn run_evolution(&self, initial: Organism) -> Result<MessageBearer> {
        tracing::debug!("🧬 Strategy: {}", self.strategy.name());

        let mut current = Evolved::Organism(initial);

        // 步數上限就是固定流程的長度；正常情況一定在其中超脫。
        for _ in EvolutionStage::pipeline() {
            let snapshot = current.snapshot();
            self.notify_observers(&snapshot);
            tracing::debug!(
                "🧬 Stage: {:<13} | Form: {:<13} | Complexity: {:>4} | Message: '{}'",
                snapshot.stage.label(),
                snapshot.form,
                snapshot.complexity,
                snapshot.message
            );

            match current {
                Evolved::Transcended(bearer) => {
                    tracing::debug!("✨ Evolution complete, revealing message");
                    return Ok(bearer);
                }
                Evolved::Organism(organism) => {
                    current = self.strategy.evolve(organism).await?;
                    let after = current.snapshot();
                    tracing::debug!(
                        "    → Evolved to: {:<13} | Message: '{}'",
                        after.form,
                        after.message
                    );
                }
            }
        }

        match current {
            Evolved::Transcended(bearer) => Ok(bearer),
            Evolved::Organism(organism) => Err(EvolutionError::EvolutionStalled {
                stage: organism.species.stage().label().to_string(),
            }),
        }
    }
}
