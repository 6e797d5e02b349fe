use crate::core::factory::LifeFormFactory;
use crate::core::message::{GenerationStrategy, LazyMessage, MessageGenerator, MessageTransformer};
use crate::core::observer::{EvolutionLogger, SilentObserver};
use crate::core::strategy::create_strategy;
use crate::core::EvolutionEngine;
use crate::domain::model::{MessageBearer, Organism};
use crate::domain::ports::{ConfigProvider, EvolutionStrategy};
use crate::utils::error::Result;
use crate::utils::timing::ExecutionTimer;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL_ORCHESTRATOR: Lazy<Arc<HelloWorldOrchestrator>> =
    Lazy::new(|| Arc::new(HelloWorldOrchestrator::new()));

/// Coordinates the classic path: factory → engine → generator →
/// transformation pipeline → lazy reveal.
pub struct HelloWorldOrchestrator {
    factory: LifeFormFactory,
    generator: MessageGenerator,
    transformer: MessageTransformer,
}

impl HelloWorldOrchestrator {
    pub fn new() -> Self {
        Self {
            factory: LifeFormFactory::new(),
            generator: MessageGenerator::new(),
            transformer: MessageTransformer,
        }
    }

    /// 單例存取；整個程序只需要一個協調者。
    pub fn global() -> Arc<HelloWorldOrchestrator> {
        GLOBAL_ORCHESTRATOR.clone()
    }

    pub fn initialize_engine<C: ConfigProvider>(
        &self,
        config: &C,
    ) -> Result<EvolutionEngine<Box<dyn EvolutionStrategy>>> {
        let strategy = create_strategy(config.strategy())?;
        tracing::debug!("🧬 Initializing evolution engine with '{}' strategy", strategy.name());

        let mut engine = EvolutionEngine::new(strategy);
        engine.attach_observer(EvolutionLogger::global());
        engine.attach_observer(Arc::new(SilentObserver));
        Ok(engine)
    }

    pub fn create_initial_organism(&self) -> Result<Organism> {
        self.factory.create("fish")
    }

    pub fn extract_message(&self, bearer: &MessageBearer) -> String {
        let raw = self.generator.generate(bearer, GenerationStrategy::Composed);
        // 轉換管線目前只有 identity，一如既往地隆重。
        self.transformer
            .apply_pipeline(raw, &[MessageTransformer::identity])
    }

    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<String> {
        let timer = ExecutionTimer::new(config.debug());

        let engine = self.initialize_engine(config)?;
        let organism = self.create_initial_organism()?;
        tracing::debug!(
            "🐟 Initial organism: {} carrying '{}'",
            organism.species.name(),
            organism.message_fragment
        );

        let bearer = engine.run_evolution(organism).await?;
        let message = self.extract_message(&bearer);

        let lazy = LazyMessage::new(move || message.clone());
        let result = lazy.force().to_string();

        timer.log_elapsed("evolution");
        Ok(result)
    }
}

impl Default for HelloWorldOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
