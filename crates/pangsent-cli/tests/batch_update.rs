//! Batch updater against a JSON-lines store on disk

use pangsent_cli::{run_batch, FeedbackUpdate, JsonLinesStore};
use pangsent_core::Sentiment;
use pangsent_resolver::Resolver;

#[tokio::test]
async fn test_batch_labels_only_pending_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("feedback.jsonl");
    let output = dir.path().join("updates.jsonl");

    std::fs::write(
        &input,
        concat!(
            "{\"id\": 10, \"text\": \"Mabayag so pila ed munisipyo\"}\n",
            "{\"id\": 11, \"text\": \"already done\", \"sentiment\": \"neutral\"}\n",
            "{\"id\": 12, \"text\": \"Excellent service, thank you very much\"}\n",
            "{\"id\": 13, \"text\": \"Good guard but we waited for hours\"}\n",
        ),
    )
    .unwrap();

    let resolver = Resolver::builder().build().unwrap();
    let store = JsonLinesStore::open(&input, &output).await.unwrap();
    let report = run_batch(&resolver, &store, 2).await.unwrap();

    assert_eq!(report.updated, 3);

    let updates: Vec<FeedbackUpdate> = std::fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let labels: Vec<(i64, Sentiment)> = updates.iter().map(|u| (u.id, u.sentiment)).collect();
    assert_eq!(
        labels,
        vec![
            (10, Sentiment::Negative),
            (12, Sentiment::Positive),
            (13, Sentiment::Negative),
        ]
    );
    assert_eq!(updates[0].feedback_text, "Mabayag so pila ed munisipyo");
}
