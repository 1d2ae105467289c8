//! Shared test fixtures for provider, config, and session test modules.

use crate::error::ProviderError;
use crate::suggest::CandidateProvider;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("autosuggest-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Provider that replays scripted results, then repeats the last success.
///
/// Useful for exercising retrieval failures inside the session.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<Vec<String>, String>>>,
    fallback: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<Vec<&str>, &str>>) -> Self {
        let script = script
            .into_iter()
            .map(|step| match step {
                Ok(items) => Ok(items.into_iter().map(str::to_string).collect()),
                Err(msg) => Err(msg.to_string()),
            })
            .collect();
        Self {
            script: Mutex::new(script),
            fallback: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `candidates` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateProvider for ScriptedProvider {
    async fn candidates(&self) -> Result<Vec<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().expect("script lock").pop_front();
        match next {
            Some(Ok(items)) => {
                *self.fallback.lock().expect("fallback lock") = items.clone();
                Ok(items)
            }
            Some(Err(msg)) => Err(ProviderError::Unavailable(msg)),
            None => Ok(self.fallback.lock().expect("fallback lock").clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().exists());
    }

    #[tokio::test]
    async fn scripted_provider_replays_then_repeats_last_success() {
        let provider = ScriptedProvider::new(vec![Ok(vec!["a"]), Err("boom")]);
        assert_eq!(provider.candidates().await.unwrap(), vec!["a".to_string()]);
        assert!(provider.candidates().await.is_err());
        assert_eq!(provider.candidates().await.unwrap(), vec!["a".to_string()]);
        assert_eq!(provider.calls(), 3);
    }
}
