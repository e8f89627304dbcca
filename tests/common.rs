// tests/common.rs

use axum::Router;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn pull_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pull"));
    // Keep runs independent of the developer's environment.
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("PULL_GITHUB_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Serves `app` on an ephemeral local port from a background thread and returns
/// its base URL (`http://127.0.0.1:<port>`).
///
/// The server lives on its own runtime so that blocking HTTP clients can be used
/// from the test thread.
#[allow(dead_code)]
pub fn spawn_server(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{}", addr)
}

#[allow(dead_code)]
pub mod github_mock {
    //! A tiny stand-in for the GitHub contents API serving one repository, `owner/repo`.

    use axum::http::{header, HeaderMap, StatusCode, Uri};
    use axum::Router;

    const RAW: &str = "application/vnd.github.raw+json";

    pub fn app() -> Router {
        Router::new().fallback(contents)
    }

    async fn contents(uri: Uri, headers: HeaderMap) -> (StatusCode, String) {
        let raw = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            == Some(RAW);
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            == Some("Bearer t0ken");
        let Some(path) = uri.path().strip_prefix("/repos/owner/repo/contents") else {
            return not_found();
        };
        let path = path.trim_start_matches('/');
        let reference = uri
            .query()
            .and_then(|q| q.strip_prefix("ref="))
            .unwrap_or("HEAD");

        match (path, raw) {
            ("docs", false) => ok(r#"[
                {"type": "dir", "name": "guide", "path": "docs/guide", "size": 0},
                {"type": "file", "name": "intro.md", "path": "docs/intro.md", "size": 16}
            ]"#),
            ("docs/guide", false) => ok(r#"[
                {"type": "file", "name": "setup.md", "path": "docs/guide/setup.md", "size": 7}
            ]"#),
            ("docs/intro.md", false) => ok(
                r#"{"type": "file", "name": "intro.md", "path": "docs/intro.md", "size": 16}"#,
            ),
            ("docs/intro.md", true) => ok("# Intro\n\nhello\n"),
            ("docs/guide/setup.md", true) => ok("run it\n"),
            ("VERSION", false) => ok(
                r#"{"type": "file", "name": "VERSION", "path": "VERSION", "size": 8}"#,
            ),
            ("VERSION", true) => ok(&format!("{}\n", reference)),
            ("vendor", false) => ok(
                r#"{"type": "submodule", "name": "vendor", "path": "vendor", "size": 0}"#,
            ),
            // Bodies sized around a 40-byte ceiling.
            ("big", false) => ok(&format!(
                "[{}]",
                vec![r#"{"type": "file", "path": "big/f"}"#; 4].join(",")
            )),
            ("ceil/exact", false) => ok(r#"{"type":"file","path":"ceil/exact"}"#),
            ("ceil/exact", true) => ok(&format!("{}\n", "x".repeat(39))),
            ("ceil/over", false) => ok(r#"{"type":"file","path":"ceil/over"}"#),
            ("ceil/over", true) => ok(&format!("{}\n", "x".repeat(40))),
            ("private", false) if authorized => ok(
                r#"[{"type": "file", "name": "key.txt", "path": "private/key.txt", "size": 7}]"#,
            ),
            ("private/key.txt", true) if authorized => ok("secret\n"),
            ("private", _) | ("private/key.txt", _) => (
                StatusCode::UNAUTHORIZED,
                r#"{"message": "Bad credentials"}"#.to_string(),
            ),
            _ => not_found(),
        }
    }

    fn ok(body: &str) -> (StatusCode, String) {
        (StatusCode::OK, body.to_string())
    }

    fn not_found() -> (StatusCode, String) {
        (
            StatusCode::NOT_FOUND,
            r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#
                .to_string(),
        )
    }
}

#[allow(dead_code)]
pub mod web_mock {
    //! Plain pages for `href` tests.

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    pub fn app() -> Router {
        Router::new()
            .route("/page", get(|| async { "hello page" }))
            .route("/lines", get(|| async { "# not a comment here\n\nkept\n" }))
            .route("/exact", get(|| async { "x".repeat(15) + "\n" }))
            .route("/over", get(|| async { "x".repeat(16) + "\n" }))
            .fallback(|| async { (StatusCode::NOT_FOUND, "nothing here") })
    }
}
