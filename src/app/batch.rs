//! Non-interactive mode for piped stdin.
//!
//! Each input line is a settled query. Plain output prints the matching
//! suggestions one per line followed by a blank separator line; `--json`
//! prints one serialized render state per query instead.

use autosuggest::error::AppError;
use autosuggest::session::RenderState;
use autosuggest::suggest::{compute_suggestions, CandidateProvider, Selection};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub(crate) async fn run_batch<R, W>(
    provider: &dyn CandidateProvider,
    input: R,
    mut output: W,
    json: bool,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut count = 0usize;
    while let Some(line) = lines.next_line().await? {
        let query = line.trim_end_matches('\r');
        // The provider is consulted per query so file edits are picked up.
        let corpus = provider.candidates().await?;
        let suggestions = compute_suggestions(query, &corpus);
        tracing::debug!(query, matches = suggestions.len(), "batch query");
        let rendered = format_result(query, suggestions, json)?;
        output.write_all(rendered.as_bytes()).await?;
        count += 1;
    }
    output.flush().await?;
    tracing::info!(queries = count, "batch finished");
    Ok(())
}

fn format_result(query: &str, suggestions: Vec<String>, json: bool) -> Result<String, AppError> {
    if json {
        let state = RenderState {
            query: query.to_string(),
            cursor: query.chars().count(),
            suggestions,
            selection: Selection::Unselected,
        };
        let mut line = serde_json::to_string(&state)
            .map_err(|e| AppError::Io(std::io::Error::other(e)))?;
        line.push('\n');
        return Ok(line);
    }

    let mut out = String::new();
    for suggestion in suggestions {
        out.push_str(&suggestion);
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autosuggest::error::ProviderError;
    use autosuggest::suggest::StaticCandidates;
    use async_trait::async_trait;

    async fn run(input: &str, json: bool) -> String {
        let provider = StaticCandidates::sample();
        let mut out = Vec::new();
        run_batch(&provider, input.as_bytes(), &mut out, json)
            .await
            .expect("batch");
        String::from_utf8(out).expect("utf8")
    }

    #[tokio::test]
    async fn plain_output_lists_matches_per_query() {
        let out = run("what is react\nnative\nwhat is react hooks\n", false).await;
        // Exact corpus hits suppress their list entirely.
        assert_eq!(
            out,
            concat!("\n", "how is react different from react native\n\n", "\n")
        );
    }

    #[tokio::test]
    async fn empty_query_suppresses_list() {
        assert_eq!(run("\n", false).await, "\n");
    }

    #[tokio::test]
    async fn json_output_is_one_render_state_per_line() {
        let out = run("why do\r\n", true).await;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        let state: RenderState = serde_json::from_str(lines[0]).expect("json");
        assert_eq!(state.query, "why do");
        assert_eq!(state.cursor, 6);
        assert_eq!(
            state.suggestions,
            vec!["why do we need fragment", "why do we use react hooks"]
        );
        assert_eq!(state.selected_index(), -1);
    }

    struct Failing;

    #[async_trait]
    impl CandidateProvider for Failing {
        async fn candidates(&self) -> Result<Vec<String>, ProviderError> {
            Err(ProviderError::Unavailable("offline".into()))
        }
    }

    #[tokio::test]
    async fn provider_failure_aborts_batch() {
        let mut out = Vec::new();
        let err = run_batch(&Failing, "what\n".as_bytes(), &mut out, false)
            .await
            .expect_err("provider failure");
        assert!(matches!(err, AppError::Provider(_)), "got: {err}");
    }
}
