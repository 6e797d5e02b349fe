use crate::domain::model::MessageBearer;
use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Plain rendering through the bearer's Display impl.
    Simple,
    /// Reveal the message the lineage carried.
    Composed,
    /// Rebuild the message from its canonical fragments.
    Fragments,
}

/// Several routes to the same eleven characters.
pub struct MessageGenerator;

impl MessageGenerator {
    pub fn new() -> Self {
        Self
    }

    fn greeting() -> &'static str {
        "Hello"
    }

    fn separator() -> &'static str {
        " "
    }

    fn target() -> &'static str {
        "World"
    }

    pub fn generate(&self, bearer: &MessageBearer, strategy: GenerationStrategy) -> String {
        match strategy {
            GenerationStrategy::Simple => bearer.to_string(),
            GenerationStrategy::Composed => bearer.reveal().to_string(),
            GenerationStrategy::Fragments => {
                format!("{}{}{}", Self::greeting(), Self::separator(), Self::target())
            }
        }
    }
}

impl Default for MessageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// String transformations; only `identity` sits on the delivery path.
pub struct MessageTransformer;

impl MessageTransformer {
    pub fn identity(message: String) -> String {
        message
    }

    pub fn uppercase(message: String) -> String {
        message.to_uppercase()
    }

    pub fn lowercase(message: String) -> String {
        message.to_lowercase()
    }

    pub fn reverse(message: String) -> String {
        message.chars().rev().collect()
    }

    pub fn apply_pipeline(
        &self,
        message: String,
        transformations: &[fn(String) -> String],
    ) -> String {
        transformations
            .iter()
            .fold(message, |result, transform| transform(result))
    }
}

/// Evaluates its generator at most once.
pub struct LazyMessage {
    generator: Box<dyn Fn() -> String + Send + Sync>,
    cached: OnceCell<String>,
}

impl LazyMessage {
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            generator: Box::new(generator),
            cached: OnceCell::new(),
        }
    }

    pub fn force(&self) -> &str {
        self.cached.get_or_init(|| (self.generator)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn bearer() -> MessageBearer {
        MessageBearer::new("Hello World".to_string(), 120)
    }

    #[test]
    fn test_generation_strategies_agree() {
        let generator = MessageGenerator::new();
        let bearer = bearer();
        assert_eq!(
            generator.generate(&bearer, GenerationStrategy::Simple),
            "Hello World"
        );
        assert_eq!(
            generator.generate(&bearer, GenerationStrategy::Composed),
            "Hello World"
        );
        assert_eq!(
            generator.generate(&bearer, GenerationStrategy::Fragments),
            "Hello World"
        );
    }

    #[test]
    fn test_transformer_operations() {
        assert_eq!(
            MessageTransformer::identity("Hello World".to_string()),
            "Hello World"
        );
        assert_eq!(
            MessageTransformer::uppercase("Hello World".to_string()),
            "HELLO WORLD"
        );
        assert_eq!(
            MessageTransformer::lowercase("Hello World".to_string()),
            "hello world"
        );
        assert_eq!(
            MessageTransformer::reverse("Hello World".to_string()),
            "dlroW olleH"
        );
    }

    #[test]
    fn test_apply_pipeline_folds_left_to_right() {
        let transformer = MessageTransformer;
        let result = transformer.apply_pipeline(
            "Hello World".to_string(),
            &[MessageTransformer::uppercase, MessageTransformer::reverse],
        );
        assert_eq!(result, "DLROW OLLEH");
    }

    #[test]
    fn test_identity_pipeline_is_noop() {
        let transformer = MessageTransformer;
        let result =
            transformer.apply_pipeline("Hello World".to_string(), &[MessageTransformer::identity]);
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_lazy_message_evaluates_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let lazy = LazyMessage::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "Hello World".to_string()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(lazy.force(), "Hello World");
        assert_eq!(lazy.force(), "Hello World");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
