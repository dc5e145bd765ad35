use crate::errors::ModelError;

/// A pre-trained binary classifier treated as an opaque black box.
///
/// Implementations must be immutable after load; the evaluator shares one
/// instance across every call.
pub trait IRiskClassifier: Send + Sync {
    /// Probability of the adverse event for one encoded feature vector,
    /// in the feature order the classifier was trained with.
    /// Returns a value in [0.0, 1.0].
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Number of features the classifier expects.
    fn feature_count(&self) -> usize;

    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Digest of the loaded weights, if the implementation computes one.
    fn fingerprint(&self) -> Option<&str> {
        None
    }
}
