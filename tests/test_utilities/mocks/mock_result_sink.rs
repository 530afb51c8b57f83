use npm_release_audit::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ResultSink keeping written result sets in memory
#[derive(Default, Clone)]
pub struct MockResultSink {
    pub written: Arc<Mutex<Vec<(ResultArtifact, Vec<ReleaseResult>)>>>,
}

impl MockResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifact(&self, artifact: ResultArtifact) -> Option<Vec<ReleaseResult>> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .find(|(kind, _)| *kind == artifact)
            .map(|(_, results)| results.clone())
    }
}

impl ResultSink for MockResultSink {
    fn write_results(
        &self,
        source_name: &str,
        artifact: ResultArtifact,
        results: &[ReleaseResult],
    ) -> Result<PathBuf> {
        self.written
            .lock()
            .unwrap()
            .push((artifact, results.to_vec()));
        Ok(PathBuf::from(format!("mock/{}", source_name)))
    }
}
