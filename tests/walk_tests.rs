//! Integration tests for the walker
//!
//! These tests use wiremock to create mock HTTP servers and drive the full
//! walk cycle end-to-end: real fetcher, real extractor, and the markdown
//! reporter writing into a temp directory.

use backtrail::config::WalkConfig;
use backtrail::walker::{walk, StopReason};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at `page_path` whose body links to `links`
async fn mount_page(server: &MockServer, page_path: &str, links: &[&str]) {
    let anchors: String = links
        .iter()
        .map(|l| format!(r#"<a href="{}">link</a>"#, l))
        .collect();
    let body = format!("<html><body>{}</body></html>", anchors);

    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Reads the persisted log back as lines
fn log_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("log file missing")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_depth_first_walk_over_mock_site() {
    let server = MockServer::start().await;
    let base = server.uri();

    // /        -> /a, /b
    // /a       -> /a1
    // /a1, /b  -> no links
    mount_page(&server, "/", &["/a", "/b"]).await;
    mount_page(&server, "/a", &["/a1"]).await;
    mount_page(&server, "/a1", &[]).await;
    mount_page(&server, "/b", &[]).await;

    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("walk.md");

    let seed = format!("{}/", base);
    let outcome = walk(&WalkConfig::default(), &seed, 10, &log, true)
        .await
        .expect("walk failed");

    // Three advances, then every page is explored
    assert_eq!(outcome.steps_taken, 3);
    assert!(matches!(outcome.reason, StopReason::LinksExhausted));

    assert_eq!(
        log_lines(&log),
        vec![
            format!("Current page: {base}/"),
            format!("Following link: {base}/a"),
            String::new(),
            format!("Current page: {base}/a"),
            format!("Following link: {base}/a1"),
            String::new(),
            // /a1 is a dead end: the walk backtracks to the root's
            // deferred list
            format!("Current page: {base}/"),
            format!("Following link: {base}/b"),
            String::new(),
            "No unvisited links available, and no more pages to return to. Stopping.".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_fetch_error_recovers_by_backtracking() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/", &["/missing", "/ok"]).await;
    mount_page(&server, "/ok", &[]).await;

    // /missing 404s
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("walk.md");

    let seed = format!("{}/", base);
    let outcome = walk(&WalkConfig::default(), &seed, 10, &log, true)
        .await
        .expect("walk failed");

    assert_eq!(outcome.steps_taken, 2);

    let lines = log_lines(&log);
    let error_pos = lines
        .iter()
        .position(|l| l == &format!("Error accessing the page {base}/missing: HTTP status 404"))
        .expect("error line missing");
    let return_pos = lines
        .iter()
        .position(|l| l == &format!("Returning to previous page: {base}/"))
        .expect("return line missing");
    assert!(error_pos < return_pos);

    // After recovery the root is refetched and /ok is still reached
    assert!(lines.contains(&format!("Following link: {base}/ok")));
}

#[tokio::test]
async fn test_step_budget_stops_walk_early() {
    let server = MockServer::start().await;

    mount_page(&server, "/p1", &["/p2"]).await;
    mount_page(&server, "/p2", &["/p3"]).await;
    mount_page(&server, "/p3", &["/p4"]).await;
    mount_page(&server, "/p4", &[]).await;

    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("walk.md");

    let seed = format!("{}/p1", server.uri());
    let outcome = walk(&WalkConfig::default(), &seed, 2, &log, true)
        .await
        .expect("walk failed");

    assert_eq!(outcome.steps_taken, 2);
    assert!(matches!(outcome.reason, StopReason::BudgetExhausted));

    let lines = log_lines(&log);
    let followed = lines
        .iter()
        .filter(|l| l.starts_with("Following link: "))
        .count();
    assert_eq!(followed, 2);
    assert!(!lines
        .iter()
        .any(|l| l.starts_with("No unvisited links available")));
}

#[tokio::test]
async fn test_identification_header_sent_on_every_request() {
    let server = MockServer::start().await;

    let config = WalkConfig::default();
    let expected_ua = format!(
        "{}/{} (+{}; {})",
        config.user_agent.walker_name,
        config.user_agent.walker_version,
        config.user_agent.contact_url,
        config.user_agent.contact_email
    );

    // Only requests carrying the identification header are answered; an
    // anonymous request would 404 and abort the walk early
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", expected_ua.as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body></body></html>")
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("walk.md");

    let seed = format!("{}/", server.uri());
    let outcome = walk(&config, &seed, 5, &log, true)
        .await
        .expect("walk failed");

    // The lone page has no links, so the walk exhausts without advancing
    assert_eq!(outcome.steps_taken, 0);
    assert!(matches!(outcome.reason, StopReason::LinksExhausted));
}

#[tokio::test]
async fn test_seed_fetch_failure_terminates_cleanly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("walk.md");

    let seed = format!("{}/", server.uri());
    let outcome = walk(&WalkConfig::default(), &seed, 5, &log, true)
        .await
        .expect("walk should terminate cleanly, not error");

    assert_eq!(outcome.steps_taken, 0);
    assert!(matches!(
        outcome.reason,
        StopReason::HistoryExhaustedOnFetchError
    ));
    assert_eq!(
        log_lines(&log).last().unwrap(),
        "No previous page to return to. Stopping."
    );
}
