mod cutoff_classifier;
mod dependency_extractor;

pub use cutoff_classifier::CutoffClassifier;
pub use dependency_extractor::DependencyExtractor;
