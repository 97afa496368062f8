//! Integration tests for the crawler
//!
//! These tests drive full crawls over a literal-table fetcher and check the
//! registry contents, fetch counts, and observer events.

mod support;

use ripple_crawl::{crawl, Coordinator, CrawlSettings, DedupMode};
use std::sync::Arc;
use std::time::Duration;
use support::{golang_fetcher, RecordingObserver, StaticFetcher};

/// A links to B and C, B links back to A, C is unknown to the fetcher
fn cycle_with_failure() -> StaticFetcher {
    StaticFetcher::new()
        .page("A", "Page A", &["B", "C"])
        .page("B", "Page B", &["A"])
}

/// Complete tree of the given depth and branching factor, rooted at "n"
fn tree(depth: usize, branching: usize, delay: Duration) -> StaticFetcher {
    fn add(
        fetcher: StaticFetcher,
        address: String,
        depth: usize,
        branching: usize,
        delay: Duration,
    ) -> StaticFetcher {
        let children: Vec<String> = if depth > 1 {
            (0..branching).map(|i| format!("{}{}", address, i)).collect()
        } else {
            Vec::new()
        };
        let links: Vec<&str> = children.iter().map(String::as_str).collect();

        let mut fetcher = fetcher
            .page(&address, &format!("Page {}", address), &links)
            .with_delay(&address, delay);
        for child in children {
            fetcher = add(fetcher, child, depth - 1, branching, delay);
        }
        fetcher
    }

    add(StaticFetcher::new(), "n".to_string(), depth, branching, delay)
}

#[tokio::test]
async fn test_cycle_and_failure_scenario() {
    let fetcher = Arc::new(cycle_with_failure());

    let report = crawl("A", 2, fetcher.clone()).await;

    assert_eq!(report.len(), 3);
    assert_eq!(fetcher.calls("A"), 1);
    assert_eq!(fetcher.calls("B"), 1);
    assert_eq!(fetcher.calls("C"), 1);

    assert_eq!(report.get("A").unwrap().to_string(), "Page A");
    assert_eq!(report.get("B").unwrap().to_string(), "Page B");
    assert_eq!(report.get("C").unwrap().to_string(), "ERROR: not found: C");
}

#[tokio::test]
async fn test_zero_depth_fetches_nothing() {
    let fetcher = Arc::new(cycle_with_failure());

    let report = crawl("A", 0, fetcher.clone()).await;

    assert!(report.is_empty());
    assert_eq!(fetcher.total_calls(), 0);
}

#[tokio::test]
async fn test_negative_depth_fetches_nothing() {
    let fetcher = Arc::new(cycle_with_failure());

    let report = crawl("A", -3, fetcher.clone()).await;

    assert!(report.is_empty());
    assert_eq!(fetcher.total_calls(), 0);
}

#[tokio::test]
async fn test_depth_bound() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .page("A", "Page A", &["B"])
            .page("B", "Page B", &["C"])
            .page("C", "Page C", &["D"])
            .page("D", "Page D", &[]),
    );

    let report = crawl("A", 2, fetcher.clone()).await;

    assert_eq!(report.len(), 2);
    assert!(report.get("A").is_some());
    assert!(report.get("B").is_some());
    assert!(report.get("C").is_none());
    assert_eq!(fetcher.calls("C"), 0);
    assert_eq!(fetcher.calls("D"), 0);
    assert_eq!(report.stats.depth_cutoffs, 1);
}

#[tokio::test]
async fn test_golang_site_map() {
    let fetcher = Arc::new(golang_fetcher());

    let report = crawl("https://golang.org/", 4, fetcher.clone()).await;

    let addresses: Vec<&str> = report.entries().iter().map(|(a, _)| a.as_str()).collect();
    assert_eq!(
        addresses,
        vec![
            "https://golang.org/",
            "https://golang.org/cmd/",
            "https://golang.org/pkg/",
            "https://golang.org/pkg/fmt/",
            "https://golang.org/pkg/os/",
        ]
    );
    assert_eq!(report.successes(), 4);
    assert_eq!(report.failures(), 1);

    // Recorded before any of their rediscoveries were spawned
    assert_eq!(fetcher.calls("https://golang.org/"), 1);
    assert_eq!(fetcher.calls("https://golang.org/pkg/"), 1);
    // Discovered from two branches at once; best-effort dedup may fetch twice
    assert!((1..=2).contains(&fetcher.calls("https://golang.org/cmd/")));
}

#[tokio::test]
async fn test_failure_does_not_stop_siblings() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .page("root", "Root", &["broken", "sibling"])
            .page("sibling", "Sibling", &["grandchild"])
            .page("grandchild", "Grandchild", &[])
            .with_delay("sibling", Duration::from_millis(20)),
    );

    let report = crawl("root", 3, fetcher.clone()).await;

    assert!(report.get("broken").unwrap().is_failure());
    assert!(report.get("sibling").unwrap().is_success());
    assert!(report.get("grandchild").unwrap().is_success());
    assert_eq!(report.len(), 4);
}

/// S links to X and Y, both link to the slow page Z
fn diamond() -> StaticFetcher {
    StaticFetcher::new()
        .page("S", "Start", &["X", "Y"])
        .page("X", "Left", &["Z"])
        .page("Y", "Right", &["Z"])
        .page("Z", "Slow", &[])
        .with_delay("Z", Duration::from_millis(50))
}

#[tokio::test]
async fn test_exact_dedup_fetches_once() {
    let fetcher = Arc::new(diamond());
    let settings = CrawlSettings::new("S", 3).with_dedup(DedupMode::Exact);

    let report = Coordinator::new(settings, fetcher.clone()).run().await;

    assert_eq!(report.len(), 4);
    assert_eq!(fetcher.calls("Z"), 1);
    assert_eq!(report.stats.fetches(), 4);
    assert_eq!(report.stats.duplicates_skipped, 1);
}

#[tokio::test]
async fn test_best_effort_dedup_records_once() {
    let fetcher = Arc::new(diamond());

    let report = crawl("S", 3, fetcher.clone()).await;

    // X and Y both check the registry while Z is still being fetched, so
    // both fetch it; the registry still keeps a single entry
    assert_eq!(report.len(), 4);
    assert_eq!(fetcher.calls("Z"), 2);
    assert_eq!(report.stats.fetches(), 5);
    assert_eq!(report.stats.duplicates_skipped, 0);
    assert!(report.get("Z").unwrap().is_success());
}

#[tokio::test]
async fn test_fetch_timeout_records_failure() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .page("S", "Start", &["slow", "fast"])
            .page("slow", "Slow", &[])
            .page("fast", "Fast", &[])
            .with_delay("slow", Duration::from_millis(500)),
    );
    let settings = CrawlSettings::new("S", 2).with_fetch_timeout(Duration::from_millis(50));

    let report = Coordinator::new(settings, fetcher).run().await;

    assert_eq!(
        report.get("slow").unwrap().to_string(),
        "ERROR: timed out after 50 ms"
    );
    assert!(report.get("fast").unwrap().is_success());
    assert_eq!(report.stats.timeouts, 1);
    assert_eq!(report.stats.failures, 1);
}

#[tokio::test]
async fn test_observer_sees_every_fetch() {
    let fetcher = Arc::new(golang_fetcher());
    let observer = Arc::new(RecordingObserver::default());
    let settings = CrawlSettings::new("https://golang.org/", 4).with_dedup(DedupMode::Exact);

    let report = Coordinator::new(settings, fetcher)
        .with_observer(observer.clone())
        .run()
        .await;

    let found = observer.found.lock().unwrap();
    let failed = observer.failed.lock().unwrap();
    assert_eq!(found.len(), report.successes());
    assert_eq!(failed.len(), report.failures());
    assert_eq!(
        failed[0],
        (
            "https://golang.org/cmd/".into(),
            "not found: https://golang.org/cmd/".to_string()
        )
    );

    // Nothing is reported that was not recorded
    for (address, content) in found.iter() {
        assert_eq!(report.get(address.as_str()).unwrap().to_string(), *content);
    }
}

#[tokio::test]
async fn test_waits_for_every_task() {
    let fetcher = Arc::new(tree(3, 3, Duration::from_millis(10)));

    let report = crawl("n", 3, fetcher.clone()).await;

    // 1 + 3 + 9 pages, all recorded by the time the crawl returns
    assert_eq!(report.len(), 13);
    assert_eq!(report.successes(), 13);
    assert_eq!(report.stats.tasks_spawned, 12);

    // No task is left running after the barrier released
    let calls = fetcher.total_calls();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fetcher.total_calls(), calls);
}

#[tokio::test]
async fn test_report_lines() {
    let fetcher = Arc::new(cycle_with_failure());

    let report = crawl("A", 2, fetcher).await;

    let mut out = Vec::new();
    report.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Final results:\nA --> Page A\nB --> Page B\nC --> ERROR: not found: C\n"
    );
}
