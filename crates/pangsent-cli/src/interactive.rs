//! Line-oriented interactive demo

use pangsent_core::{AnalysisResult, Result};
use pangsent_resolver::Resolver;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "feedback> ";

/// Render one result as the human-readable block printed by the CLI
pub fn render(result: &AnalysisResult) -> String {
    let mut out = format!("Sentiment:   {}\n", result.sentiment);
    if result.translated_text != result.original_text {
        out.push_str(&format!("Translation: {}\n", result.translated_text));
    }
    out.push_str(&format!(
        "Pangasinan:  {}\n",
        if result.contains_local_language {
            "yes"
        } else {
            "no"
        }
    ));
    out.push_str(&format!("Decided by:  {}\n", result.provenance.as_str()));
    out
}

/// Analyze lines from `reader` until EOF or `quit`/`exit`.
///
/// Returns the number of lines analyzed.
pub async fn run_interactive<R, W>(resolver: &Resolver, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut analyzed = 0;

    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        if !text.is_empty() {
            let result = resolver.resolve(text).await;
            writer.write_all(render(&result).as_bytes()).await?;
            analyzed += 1;
        }

        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;
    }

    writer.flush().await?;
    Ok(analyzed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn test_session_stops_at_quit() {
        let resolver = Resolver::builder().build().unwrap();
        let input = b"maliket ak\n\naaa bbb ccc\nquit\nmaermen ak\n";
        let mut output = Vec::new();

        let analyzed = run_interactive(&resolver, BufReader::new(&input[..]), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(analyzed, 2);
        assert!(output.contains("Sentiment:   positive"));
        assert!(output.contains("Decided by:  local_expression"));
        assert!(output.contains("Sentiment:   neutral"));
        assert!(!output.contains("negative"));
    }

    #[tokio::test]
    async fn test_eof_ends_session() {
        let resolver = Resolver::builder().build().unwrap();
        let mut output = Vec::new();
        let analyzed = run_interactive(&resolver, BufReader::new(&b"onsot"[..]), &mut output)
            .await
            .unwrap();
        assert_eq!(analyzed, 1);
    }
}
