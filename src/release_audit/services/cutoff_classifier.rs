use crate::release_audit::domain::{Cutoff, ReleaseResult};

/// CutoffClassifier service for selecting releases published after a cutoff
pub struct CutoffClassifier;

impl CutoffClassifier {
    /// Returns the results published strictly after `cutoff`, in input order
    ///
    /// Returns `None` when no cutoff was supplied, so callers can tell
    /// "nothing is newer" (`Some` of an empty list) apart from "not classified".
    /// Results whose timestamp could not be parsed are never newer.
    pub fn classify(results: &[ReleaseResult], cutoff: Option<&Cutoff>) -> Option<Vec<ReleaseResult>> {
        let cutoff = cutoff?;
        Some(
            results
                .iter()
                .filter(|result| Self::is_newer(result, cutoff))
                .cloned()
                .collect(),
        )
    }

    pub fn is_newer(result: &ReleaseResult, cutoff: &Cutoff) -> bool {
        result
            .published_at()
            .is_some_and(|published_at| cutoff.is_exceeded_by(published_at))
    }
}
