use serde::{Deserialize, Serialize};
use std::fmt;

/// 演化階段。PrimordialSoup 只是生命之前的標籤，固定流程從 Aquatic 開始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionStage {
    PrimordialSoup,
    Aquatic,
    Amphibious,
    Terrestrial,
    ApexPredator,
    Transcendent,
}

impl EvolutionStage {
    /// The fixed five-stage run, in order.
    pub fn pipeline() -> [EvolutionStage; 5] {
        [
            EvolutionStage::Aquatic,
            EvolutionStage::Amphibious,
            EvolutionStage::Terrestrial,
            EvolutionStage::ApexPredator,
            EvolutionStage::Transcendent,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvolutionStage::PrimordialSoup => "PRIMORDIAL_SOUP",
            EvolutionStage::Aquatic => "AQUATIC",
            EvolutionStage::Amphibious => "AMPHIBIOUS",
            EvolutionStage::Terrestrial => "TERRESTRIAL",
            EvolutionStage::ApexPredator => "APEX_PREDATOR",
            EvolutionStage::Transcendent => "TRANSCENDENT",
        }
    }
}

impl fmt::Display for EvolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Fish,
    Amphibian,
    Reptile,
    Dinosaur,
}

impl Species {
    /// Message fragment this form contributes when it appears.
    pub fn fragment(&self) -> &'static str {
        match self {
            Species::Fish => "H",
            Species::Amphibian => "ello",
            Species::Reptile => " ",
            Species::Dinosaur => "World",
        }
    }

    /// Complexity multiplier applied when this form evolves away.
    pub fn mutation_factor(&self) -> u64 {
        match self {
            Species::Fish => 2,
            Species::Amphibian => 3,
            Species::Reptile => 4,
            Species::Dinosaur => 5,
        }
    }

    /// 每個物種出生時的基準複雜度（工廠在沒有繼承資訊時使用）。
    pub fn base_complexity(&self) -> u64 {
        match self {
            Species::Fish => 1,
            Species::Amphibian => 2,
            Species::Reptile => 6,
            Species::Dinosaur => 24,
        }
    }

    pub fn stage(&self) -> EvolutionStage {
        match self {
            Species::Fish => EvolutionStage::Aquatic,
            Species::Amphibian => EvolutionStage::Amphibious,
            Species::Reptile => EvolutionStage::Terrestrial,
            Species::Dinosaur => EvolutionStage::ApexPredator,
        }
    }

    pub fn next(&self) -> Option<Species> {
        match self {
            Species::Fish => Some(Species::Amphibian),
            Species::Amphibian => Some(Species::Reptile),
            Species::Reptile => Some(Species::Dinosaur),
            Species::Dinosaur => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Fish => "Fish",
            Species::Amphibian => "Amphibian",
            Species::Reptile => "Reptile",
            Species::Dinosaur => "Dinosaur",
        }
    }
}

/// Generic genetic container with monadic plumbing. The complexity counter
/// travels through it on every mutation.
#[derive(Debug, Clone)]
pub struct Dna<T> {
    value: T,
}

impl<T> Dna<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn bind<U, F: FnOnce(T) -> Dna<U>>(self, func: F) -> Dna<U> {
        func(self.value)
    }

    pub fn fmap<U, F: FnOnce(T) -> U>(self, func: F) -> Dna<U> {
        Dna::new(func(self.value))
    }

    pub fn get(self) -> T {
        self.value
    }
}

/// A life form somewhere along the fixed run: current species, the message
/// fragment accumulated so far, and the complexity counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub species: Species,
    pub message_fragment: String,
    pub complexity: u64,
}

impl Organism {
    /// The primordial fish carrying `"H"` at complexity 1.
    pub fn primordial() -> Self {
        Self::with_inheritance(Species::Fish, 1, String::new())
    }

    /// Create a form mid-chain from inherited complexity and message; the
    /// species' own fragment is appended on arrival.
    pub fn with_inheritance(species: Species, complexity: u64, inherited_message: String) -> Self {
        let mut message_fragment = inherited_message;
        message_fragment.push_str(species.fragment());
        Self {
            species,
            message_fragment,
            complexity,
        }
    }

    /// 透過 DNA 容器套用突變係數。
    pub fn mutate(&mut self) {
        let factor = self.species.mutation_factor();
        self.complexity = Dna::new(self.complexity).fmap(|c| c * factor).get();
    }

    /// Advance one step: mutate, then either hand off to the next species or
    /// transcend into the pure message carrier.
    pub fn evolve(mut self) -> Evolved {
        self.mutate();
        match self.species.next() {
            Some(next) => Evolved::Organism(Organism::with_inheritance(
                next,
                self.complexity,
                self.message_fragment,
            )),
            None => {
                Evolved::Transcended(MessageBearer::new(self.message_fragment, self.complexity))
            }
        }
    }
}

/// Final form: the message outlives its biology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBearer {
    final_message: String,
    lineage_complexity: u64,
}

impl MessageBearer {
    pub fn new(final_message: String, lineage_complexity: u64) -> Self {
        Self {
            final_message,
            lineage_complexity,
        }
    }

    pub fn reveal(&self) -> &str {
        &self.final_message
    }

    pub fn complexity(&self) -> u64 {
        self.lineage_complexity
    }
}

impl fmt::Display for MessageBearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reveal())
    }
}

/// Outcome of one evolution step.
#[derive(Debug, Clone)]
pub enum Evolved {
    Organism(Organism),
    Transcended(MessageBearer),
}

impl Evolved {
    pub fn is_transcended(&self) -> bool {
        matches!(self, Evolved::Transcended(_))
    }

    /// What observers and the trace see for the current form.
    pub fn snapshot(&self) -> EvolutionSnapshot {
        match self {
            Evolved::Organism(organism) => EvolutionSnapshot {
                stage: organism.species.stage(),
                form: organism.species.name().to_string(),
                message: organism.message_fragment.clone(),
                complexity: organism.complexity,
            },
            Evolved::Transcended(bearer) => EvolutionSnapshot {
                stage: EvolutionStage::Transcendent,
                form: "MessageBearer".to_string(),
                message: bearer.reveal().to_string(),
                complexity: bearer.complexity(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionSnapshot {
    pub stage: EvolutionStage,
    pub form: String,
    pub message: String,
    pub complexity: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primordial_fish() {
        let fish = Organism::primordial();
        assert_eq!(fish.species, Species::Fish);
        assert_eq!(fish.message_fragment, "H");
        assert_eq!(fish.complexity, 1);
    }

    #[test]
    fn test_full_evolution_chain() {
        // 固定流程：每一步的 (label, message, complexity)
        let expected = [
            ("AQUATIC", "H", 1),
            ("AMPHIBIOUS", "Hello", 2),
            ("TERRESTRIAL", "Hello ", 6),
            ("APEX_PREDATOR", "Hello World", 24),
        ];

        let mut current = Evolved::Organism(Organism::primordial());
        for (label, message, complexity) in expected {
            let snapshot = current.snapshot();
            assert_eq!(snapshot.stage.label(), label);
            assert_eq!(snapshot.message, message);
            assert_eq!(snapshot.complexity, complexity);

            current = match current {
                Evolved::Organism(organism) => organism.evolve(),
                Evolved::Transcended(_) => panic!("transcended too early"),
            };
        }

        let snapshot = current.snapshot();
        assert_eq!(snapshot.stage, EvolutionStage::Transcendent);
        assert_eq!(snapshot.message, "Hello World");
        assert_eq!(snapshot.complexity, 120);
        assert!(current.is_transcended());
    }

    #[test]
    fn test_bearer_reveal() {
        let bearer = MessageBearer::new("Hello World".to_string(), 120);
        assert_eq!(bearer.reveal(), "Hello World");
        assert_eq!(bearer.to_string(), "Hello World");
        assert_eq!(bearer.complexity(), 120);
    }

    #[test]
    fn test_dna_fmap_and_bind() {
        let dna = Dna::new(6u64);
        assert_eq!(dna.clone().fmap(|c| c * 4).get(), 24);
        assert_eq!(dna.bind(|c| Dna::new(c * 20)).get(), 120);
    }

    #[test]
    fn test_stage_pipeline_order() {
        let labels: Vec<&str> = EvolutionStage::pipeline()
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "AQUATIC",
                "AMPHIBIOUS",
                "TERRESTRIAL",
                "APEX_PREDATOR",
                "TRANSCENDENT"
            ]
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = Evolved::Organism(Organism::primordial()).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"Aquatic\""));
        assert!(json.contains("\"H\""));
    }
}
