use crate::domain::model::{Evolved, Organism};
use crate::domain::ports::EvolutionStrategy;
use crate::utils::error::{EvolutionError, Result};
use async_trait::async_trait;

/// One evolution step per call.
#[derive(Debug)]
pub struct LinearEvolutionStrategy;

#[async_trait]
impl EvolutionStrategy for LinearEvolutionStrategy {
    fn name(&self) -> &'static str {
        "linear"
    }

    async fn evolve(&self, organism: Organism) -> Result<Evolved> {
        Ok(organism.evolve())
    }
}

/// Up to `acceleration_factor` steps per call, stopping early at
/// transcendence. The final message is identical either way.
#[derive(Debug)]
pub struct AcceleratedEvolutionStrategy {
    acceleration_factor: u32,
}

impl AcceleratedEvolutionStrategy {
    pub fn new(acceleration_factor: u32) -> Self {
        Self {
            acceleration_factor,
        }
    }
}

impl Default for AcceleratedEvolutionStrategy {
    fn default() -> Self {
        Self::new(2)
    }
}

#[async_trait]
impl EvolutionStrategy for AcceleratedEvolutionStrategy {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    async fn evolve(&self, organism: Organism) -> Result<Evolved> {
        let mut current = Evolved::Organism(organism);
        for _ in 0..self.acceleration_factor {
            current = match current {
                Evolved::Organism(organism) => organism.evolve(),
                transcended @ Evolved::Transcended(_) => return Ok(transcended),
            };
        }
        Ok(current)
    }
}

#[async_trait]
impl EvolutionStrategy for Box<dyn EvolutionStrategy> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn evolve(&self, organism: Organism) -> Result<Evolved> {
        (**self).evolve(organism).await
    }
}

/// Strategy registry lookup, case-insensitive.
pub fn create_strategy(name: &str) -> Result<Box<dyn EvolutionStrategy>> {
    match name.to_lowercase().as_str() {
        "linear" => Ok(Box::new(LinearEvolutionStrategy)),
        "accelerated" => Ok(Box::new(AcceleratedEvolutionStrategy::default())),
        other => Err(EvolutionError::UnknownStrategy {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Species;

    #[tokio::test]
    async fn test_linear_takes_one_step() {
        let strategy = LinearEvolutionStrategy;
        let result = strategy.evolve(Organism::primordial()).await.unwrap();
        match result {
            Evolved::Organism(organism) => {
                assert_eq!(organism.species, Species::Amphibian);
                assert_eq!(organism.message_fragment, "Hello");
                assert_eq!(organism.complexity, 2);
            }
            Evolved::Transcended(_) => panic!("linear step should not transcend a fish"),
        }
    }

    #[tokio::test]
    async fn test_accelerated_takes_multiple_steps() {
        let strategy = AcceleratedEvolutionStrategy::new(2);
        let result = strategy.evolve(Organism::primordial()).await.unwrap();
        match result {
            Evolved::Organism(organism) => {
                assert_eq!(organism.species, Species::Reptile);
                assert_eq!(organism.message_fragment, "Hello ");
                assert_eq!(organism.complexity, 6);
            }
            Evolved::Transcended(_) => panic!("two steps from fish is a reptile"),
        }
    }

    #[tokio::test]
    async fn test_accelerated_stops_at_transcendence() {
        let strategy = AcceleratedEvolutionStrategy::new(10);
        let result = strategy.evolve(Organism::primordial()).await.unwrap();
        match result {
            Evolved::Transcended(bearer) => {
                assert_eq!(bearer.reveal(), "Hello World");
                assert_eq!(bearer.complexity(), 120);
            }
            Evolved::Organism(_) => panic!("ten steps should transcend"),
        }
    }

    #[tokio::test]
    async fn test_create_strategy_registry() {
        assert_eq!(create_strategy("linear").unwrap().name(), "linear");
        assert_eq!(create_strategy("Accelerated").unwrap().name(), "accelerated");

        let err = create_strategy("quantum").unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::UnknownStrategy { ref name } if name == "quantum"
        ));
    }
}
