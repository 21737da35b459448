use std::sync::{Arc, Mutex};
use std::time::Duration;

use album_engine::{
    fetch_albums, EngineEvent, FailureKind, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALBUMS_JSON: &str = r#"[{"userId":1,"id":1,"title":"quidem molestiae enim"},{"userId":1,"id":2,"title":"sunt qui excepturi placeat culpa"}]"#;

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

async fn serve_albums(server: &MockServer, content_type: &str) {
    Mock::given(method("GET"))
        .and(path("/albums"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ALBUMS_JSON, content_type))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetcher_returns_body_and_emits_progress() {
    let server = MockServer::start().await;
    serve_albums(&server, "application/json; charset=utf-8").await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/albums", server.uri());

    let output = fetcher.fetch(&url, &sink).await.expect("fetch ok");
    assert_eq!(output.metadata.original_url, url);
    assert_eq!(output.metadata.final_url, output.metadata.original_url);
    assert_eq!(output.metadata.redirect_count, 0);
    assert_eq!(output.metadata.byte_len, ALBUMS_JSON.len() as u64);
    assert_eq!(output.bytes, ALBUMS_JSON.as_bytes());

    let progress: Vec<u64> = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            EngineEvent::Progress { bytes } => Some(bytes),
            _ => None,
        })
        .collect();
    assert_eq!(progress.first(), Some(&0));
    assert_eq!(progress.last(), Some(&(ALBUMS_JSON.len() as u64)));
}

#[tokio::test]
async fn fetch_albums_decodes_records() {
    let server = MockServer::start().await;
    serve_albums(&server, "application/json").await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/albums", server.uri());

    let albums = fetch_albums(&fetcher, &url, &sink).await.expect("albums");
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[1].id, 2);
    assert_eq!(albums[1].title, "sunt qui excepturi placeat culpa");
}

#[tokio::test]
async fn fetch_albums_reports_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/albums"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"oops\":1}", "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/albums", server.uri());

    let err = fetch_albums(&fetcher, &url, &sink).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Malformed);
}

#[tokio::test]
async fn fetcher_follows_single_redirect() {
    let server = MockServer::start().await;
    serve_albums(&server, "application/json").await;
    Mock::given(method("GET"))
        .and(path("/old-albums"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/albums", server.uri())),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/old-albums", server.uri());

    let output = fetcher.fetch(&url, &sink).await.expect("fetch ok");
    assert_eq!(output.metadata.original_url, url);
    assert_eq!(output.metadata.final_url, format!("{}/albums", server.uri()));
    assert_eq!(output.metadata.redirect_count, 1);
    assert_eq!(output.bytes, ALBUMS_JSON.as_bytes());
}

#[tokio::test]
async fn fetcher_stops_at_redirect_limit() {
    let server = MockServer::start().await;
    for hop in 0..6 {
        Mock::given(method("GET"))
            .and(path(format!("/hop{hop}")))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/hop{}", server.uri(), hop + 1)),
            )
            .mount(&server)
            .await;
    }
    serve_albums(&server, "application/json").await;

    let settings = FetchSettings {
        redirect_limit: 2,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let sink = TestSink::new();
    let url = format!("{}/hop0", server.uri());

    let err = fetcher.fetch(&url, &sink).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::RedirectLimitExceeded);
    assert!(sink.take().is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url, &sink).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();

    let err = fetcher.fetch("not a url", &sink).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
    assert!(sink.take().is_empty());
}

#[tokio::test]
async fn fetcher_rejects_unexpected_content_type() {
    let server = MockServer::start().await;
    serve_albums(&server, "text/html").await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let sink = TestSink::new();
    let url = format!("{}/albums", server.uri());

    let err = fetcher.fetch(&url, &sink).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let sink = TestSink::new();
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url, &sink).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let sink = TestSink::new();
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url, &sink).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}
