use crate::domain::model::Evolved;

type Stage = Box<dyn Fn(Evolved) -> Evolved + Send + Sync>;

/// Functional rendition of the same run: a fold over boxed stages.
pub struct EvolutionPipeline {
    stages: Vec<Stage>,
}

impl EvolutionPipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Fluent interface; stages run in insertion order.
    pub fn add_stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(Evolved) -> Evolved + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn execute(&self, initial: Evolved) -> Evolved {
        self.stages
            .iter()
            .fold(initial, |current, stage| stage(current))
    }
}

impl Default for EvolutionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// One evolution step as a pipeline stage; a transcended form passes
/// through untouched.
pub fn evolve_stage() -> impl Fn(Evolved) -> Evolved + Send + Sync + 'static {
    |form| match form {
        Evolved::Organism(organism) => organism.evolve(),
        transcended @ Evolved::Transcended(_) => transcended,
    }
}

/// Compose string transformations right to left.
pub fn compose(
    functions: Vec<Box<dyn Fn(String) -> String + Send + Sync>>,
) -> impl Fn(String) -> String {
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |result, func| func(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Organism;

    #[test]
    fn test_pipeline_executes_stages_in_order() {
        let pipeline = EvolutionPipeline::new()
            .add_stage(evolve_stage())
            .add_stage(evolve_stage())
            .add_stage(evolve_stage())
            .add_stage(evolve_stage());
        assert_eq!(pipeline.stage_count(), 4);

        let result = pipeline.execute(Evolved::Organism(Organism::primordial()));
        match result {
            Evolved::Transcended(bearer) => assert_eq!(bearer.reveal(), "Hello World"),
            Evolved::Organism(_) => panic!("four stages should transcend the fish"),
        }
    }

    #[test]
    fn test_extra_stages_pass_through() {
        let pipeline = EvolutionPipeline::new()
            .add_stage(evolve_stage())
            .add_stage(evolve_stage())
            .add_stage(evolve_stage())
            .add_stage(evolve_stage())
            .add_stage(evolve_stage());

        let result = pipeline.execute(Evolved::Organism(Organism::primordial()));
        assert!(result.is_transcended());
        assert_eq!(result.snapshot().message, "Hello World");
    }

    #[test]
    fn test_compose_is_right_to_left() {
        let composed = compose(vec![
            Box::new(|s: String| format!("{}!", s)),
            Box::new(|s: String| s.to_uppercase()),
        ]);
        // uppercase first, then the exclamation mark
        assert_eq!(composed("hello".to_string()), "HELLO!");
    }
}
