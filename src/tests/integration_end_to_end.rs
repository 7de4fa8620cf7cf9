use crate::config::JournalConfig;
use crate::features::build_router;
use crate::io::http::HttpEntrySource;
use crate::io::local::LocalEntrySource;
use crate::io::{EntrySource, SourceError, INDEX_FILENAME};
use crate::services::builder::build_index;
use crate::services::loader::EntryLoader;
use crate::tests::integration_entry_loader::MockEntrySource;
use crate::AppState;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

const HELLO_MD: &str = "---\nid: \"3\"\ntitle: \"Hello World!\"\n---\nFirst line of the body.\n\nSecond paragraph.\n";

// build from a real directory, then serve what the builder wrote through the mock fetch layer
#[tokio::test]
async fn test_build_then_load_through_mock_fetch() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hello.md"), HELLO_MD).unwrap();

    let report = build_index(dir.path()).unwrap();
    assert_eq!(report.index.entries.len(), 1);
    assert_eq!(report.index.entries[0].slug, "hello-world");

    let source = MockEntrySource::new();
    source.add_file(
        INDEX_FILENAME,
        &fs::read_to_string(&report.index_path).unwrap(),
    );
    source.add_file("hello.md", HELLO_MD);

    let loader = EntryLoader::new(Box::new(source));
    let entry = loader.load_entry_by_slug("hello-world").await.unwrap();

    assert_eq!(entry.metadata.id, "3");
    assert_eq!(entry.metadata.filename, "hello.md");
    assert_eq!(entry.content, "First line of the body.\n\nSecond paragraph.");
}

// the same round trip straight off the disk
#[tokio::test]
async fn test_build_then_load_from_disk() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hello.md"), HELLO_MD).unwrap();
    fs::write(dir.path().join("broken.md"), "no front-matter").unwrap();

    build_index(dir.path()).unwrap();

    let loader = EntryLoader::new(Box::new(LocalEntrySource::new(dir.path().to_path_buf())));

    let all = loader.get_all_entries_metadata().await.unwrap();
    assert_eq!(all.len(), 1);

    let entry = loader.load_entry_by_slug("hello-world").await.unwrap();
    assert_eq!(entry.metadata.id, "3");
    assert_eq!(entry.content, "First line of the body.\n\nSecond paragraph.");

    assert!(loader
        .load_entry_by_slug("broken")
        .await
        .unwrap_err()
        .is_not_found());
}

// spins up the preview server on a loopback port and returns its base url
async fn serve_entries(entries_dir: PathBuf) -> String {
    let config = JournalConfig {
        entries_dir: entries_dir.clone(),
        ..JournalConfig::default()
    };
    let app = build_router(AppState {
        loader: Arc::new(EntryLoader::new(Box::new(LocalEntrySource::new(entries_dir)))),
        config: Arc::new(config.clone()),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}{}", addr, config.base_path)
}

#[test]
fn test_http_source_urls() {
    let source = HttpEntrySource::new("https://example.com/journal-y/".to_string());
    assert_eq!(
        source.url_for(INDEX_FILENAME),
        "https://example.com/journal-y/entries/index.json"
    );
    assert_eq!(
        source.url_for("hello.md"),
        "https://example.com/journal-y/entries/hello.md"
    );
}

// the loader over real HTTP, against the static files the preview server exposes
#[tokio::test]
async fn test_build_then_load_over_http() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hello.md"), HELLO_MD).unwrap();
    build_index(dir.path()).unwrap();

    let base_url = serve_entries(dir.path().to_path_buf()).await;
    let source = HttpEntrySource::new(base_url.clone());

    // non-success responses are errors, not bodies
    assert!(matches!(
        source.fetch("missing.md").await,
        Err(SourceError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND
    ));

    let loader = EntryLoader::new(Box::new(HttpEntrySource::new(base_url)));
    let entry = loader.load_entry_by_slug("hello-world").await.unwrap();

    assert_eq!(entry.metadata.id, "3");
    assert_eq!(entry.content, "First line of the body.\n\nSecond paragraph.");
}
