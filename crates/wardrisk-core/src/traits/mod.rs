pub mod classifier;
pub mod evaluator;

pub use classifier::IRiskClassifier;
pub use evaluator::IRiskEvaluator;
