//! Alternative execution paths. Every route ends at the same eleven
//! characters; integration tests hold them to that.

use crate::core::factory::LifeFormBuilder;
use crate::core::message::{GenerationStrategy, MessageGenerator};
use crate::core::pipeline::{evolve_stage, EvolutionPipeline};
use crate::domain::model::{Evolved, Organism};
use crate::utils::error::{EvolutionError, Result};

fn reveal(form: Evolved) -> Result<String> {
    match form {
        Evolved::Transcended(bearer) => Ok(bearer.reveal().to_string()),
        Evolved::Organism(organism) => Err(EvolutionError::EvolutionStalled {
            stage: organism.species.stage().label().to_string(),
        }),
    }
}

/// Staged fold over the evolution pipeline.
pub fn pipeline_path() -> Result<String> {
    let pipeline = EvolutionPipeline::new()
        .add_stage(evolve_stage())
        .add_stage(evolve_stage())
        .add_stage(evolve_stage())
        .add_stage(evolve_stage());

    reveal(pipeline.execute(Evolved::Organism(Organism::primordial())))
}

/// Plain closure-chain fold, no pipeline machinery.
pub fn functional_path() -> Result<String> {
    let evolve_op: fn(Evolved) -> Evolved = |form| match form {
        Evolved::Organism(organism) => organism.evolve(),
        transcended => transcended,
    };
    let operations = vec![evolve_op; 4];

    let result = operations
        .into_iter()
        .fold(Evolved::Organism(Organism::primordial()), |form, op| {
            op(form)
        });
    reveal(result)
}

/// Fluent builder construction, then the evolve chain.
pub fn builder_path() -> Result<String> {
    let organism = LifeFormBuilder::new().of_type("fish").build()?;

    let mut form = Evolved::Organism(organism);
    for _ in 0..4 {
        form = match form {
            Evolved::Organism(organism) => organism.evolve(),
            transcended => transcended,
        };
    }
    reveal(form)
}

/// Rebuild the message from its canonical fragments, skipping biology
/// entirely.
pub fn composed_path() -> Result<String> {
    let organism = Organism::primordial();
    let mut form = Evolved::Organism(organism);
    while !form.is_transcended() {
        form = match form {
            Evolved::Organism(organism) => organism.evolve(),
            transcended => transcended,
        };
    }

    match form {
        Evolved::Transcended(bearer) => {
            Ok(MessageGenerator::new().generate(&bearer, GenerationStrategy::Fragments))
        }
        Evolved::Organism(_) => unreachable!("loop exits only on transcendence"),
    }
}
