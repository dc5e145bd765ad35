//! Model-probability resources: feature schema, bundled logistic
//! classifier, and the reference score distribution cutoffs are derived from.

pub mod features;
pub mod logistic;
pub mod reference;

pub use features::{Feature, FeatureSchema, FeatureVector};
pub use logistic::LogisticModel;
pub use reference::ReferenceDistribution;
