//! Config loading against real files.

use autosuggest::config::{load_config, CorpusSource};
use autosuggest::suggest::{CandidateProvider, FileCandidates};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn temp_dir(label: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "autosuggest-{label}-{}-{nonce}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[tokio::test]
async fn explicit_config_resolves_corpus_next_to_file() {
    let dir = temp_dir("config-loading");
    fs::write(
        dir.join("corpus.txt"),
        "what is react\n\nhow is react different from angular\r\n",
    )
    .expect("write corpus");
    let config_path = dir.join("custom.toml");
    fs::write(
        &config_path,
        "[suggest]\ndebounce_ms = 40\ncorpus_file = \"corpus.txt\"\n\n[display]\nheading = \"Ask\"\n",
    )
    .expect("write config");

    let config = load_config(Some(config_path.to_string_lossy().as_ref())).expect("load");
    assert_eq!(config.debounce(), Duration::from_millis(40));
    assert_eq!(config.display.heading, "Ask");

    let CorpusSource::File(corpus_path) = config.corpus_source() else {
        panic!("expected file corpus");
    };
    assert_eq!(corpus_path, dir.join("corpus.txt"));

    let corpus = FileCandidates::new(corpus_path)
        .candidates()
        .await
        .expect("read corpus");
    assert_eq!(
        corpus,
        vec!["what is react", "how is react different from angular"]
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_explicit_config_fails() {
    let dir = temp_dir("config-missing");
    let err = load_config(Some(dir.join("absent.toml").to_string_lossy().as_ref()))
        .expect_err("missing file");
    assert!(err.to_string().starts_with("io:"), "got: {err}");
    let _ = fs::remove_dir_all(&dir);
}
