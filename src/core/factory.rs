use crate::domain::model::{Organism, Species};
use crate::utils::error::{EvolutionError, Result};
use std::collections::HashMap;

/// Registry-backed factory. Names are case-insensitive; the four canonical
/// species are pre-registered.
pub struct LifeFormFactory {
    registry: HashMap<String, Species>,
}

impl LifeFormFactory {
    pub fn new() -> Self {
        let mut factory = Self {
            registry: HashMap::new(),
        };
        factory.register("fish", Species::Fish);
        factory.register("amphibian", Species::Amphibian);
        factory.register("reptile", Species::Reptile);
        factory.register("dinosaur", Species::Dinosaur);
        factory
    }

    pub fn register(&mut self, species_type: &str, species: Species) {
        self.registry.insert(species_type.to_lowercase(), species);
    }

    fn lookup(&self, species_type: &str) -> Result<Species> {
        self.registry
            .get(species_type.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| EvolutionError::UnknownSpecies {
                name: species_type.to_string(),
            })
    }

    /// Create a form at its base complexity with no inherited message.
    pub fn create(&self, species_type: &str) -> Result<Organism> {
        let species = self.lookup(species_type)?;
        Ok(Organism::with_inheritance(
            species,
            species.base_complexity(),
            String::new(),
        ))
    }

    /// Create a form mid-chain from an ancestor's complexity and message.
    pub fn create_inherited(
        &self,
        species_type: &str,
        complexity: u64,
        inherited_message: String,
    ) -> Result<Organism> {
        let species = self.lookup(species_type)?;
        Ok(Organism::with_inheritance(
            species,
            complexity,
            inherited_message,
        ))
    }
}

impl Default for LifeFormFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent construction on top of the factory.
pub struct LifeFormBuilder {
    complexity: u64,
    message: String,
    species_type: String,
}

impl LifeFormBuilder {
    pub fn new() -> Self {
        Self {
            complexity: 1,
            message: String::new(),
            species_type: "fish".to_string(),
        }
    }

    pub fn with_complexity(mut self, complexity: u64) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn of_type(mut self, species_type: &str) -> Self {
        self.species_type = species_type.to_string();
        self
    }

    pub fn build(self) -> Result<Organism> {
        let factory = LifeFormFactory::new();
        if self.species_type.eq_ignore_ascii_case("fish") {
            factory.create(&self.species_type)
        } else {
            factory.create_inherited(&self.species_type, self.complexity, self.message)
        }
    }
}

impl Default for LifeFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
