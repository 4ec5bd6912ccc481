//! # Canonical Log Line
//!
//! リクエスト 1 件につき 1 行、結果のサマリログを出力する。
//! リクエストスパンの内側に置くため、JSON 出力では `request_id` が自動で付く。
//!
//! | フィールド | 内容 |
//! |-----------|------|
//! | `http.method` | HTTP メソッド |
//! | `http.path` | 実際のパス（`/customers/7`） |
//! | `http.route` | マッチしたルート（`/customers/{id}`）。未マッチは `-` |
//! | `http.status_code` | レスポンスステータス |
//! | `http.latency_ms` | ハンドラ完了までの経過ミリ秒 |
//!
//! 5xx は ERROR、それ以外は INFO で出力する。`/health` は出力しない。

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

/// ポーリングされるためログ対象外とするパス
const HEALTH_CHECK_PATH: &str = "/health";

/// リクエスト完了時に Canonical Log Line を出力する
pub async fn canonical_log_line(request: Request, next: Next) -> Response {
    if request.uri().path() == HEALTH_CHECK_PATH {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned());
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let route = route.as_deref().unwrap_or("-");

    if status.is_server_error() {
        tracing::error!(
            log.r#type = "canonical",
            http.method = %method,
            http.path = %path,
            http.route = route,
            http.status_code = status.as_u16(),
            http.latency_ms = latency_ms,
            "リクエスト失敗"
        );
    } else {
        tracing::info!(
            log.r#type = "canonical",
            http.method = %method,
            http.path = %path,
            http.route = route,
            http.status_code = status.as_u16(),
            http.latency_ms = latency_ms,
            "リクエスト完了"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use axum::{
        Router,
        body::Body,
        http::{self, Method, StatusCode},
        middleware::from_fn,
        routing::{get, put},
    };
    use pretty_assertions::assert_eq;
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    use super::*;

    /// JSON ログの書き込み先
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        /// `log.type = "canonical"` の行だけを JSON として取り出す
        fn canonical_lines(&self) -> Vec<JsonValue> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str::<JsonValue>(line).unwrap())
                .filter(|line| line["log.type"] == "canonical")
                .collect()
        }
    }

    fn test_router() -> Router {
        Router::new()
            .route("/health", get(|| async { StatusCode::OK }))
            .route(
                "/customers/{id}",
                put(|| async { StatusCode::UNPROCESSABLE_ENTITY }),
            )
            .route(
                "/customers",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .layer(from_fn(canonical_log_line))
    }

    /// ルーターに 1 リクエスト流し、出力された Canonical Log Line を返す
    async fn send(method: Method, uri: &str) -> Vec<JsonValue> {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        test_router().oneshot(request).await.unwrap();

        buffer.canonical_lines()
    }

    #[tokio::test]
    async fn test_顧客パスのリクエストでパスとルートとステータスを出力する() {
        let lines = send(Method::PUT, "/customers/7").await;

        assert_eq!(lines.len(), 1, "lines: {lines:?}");
        let line = &lines[0];
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["http.method"], "PUT");
        assert_eq!(line["http.path"], "/customers/7");
        assert_eq!(line["http.route"], "/customers/{id}");
        assert_eq!(line["http.status_code"], 422);
        assert!(line["http.latency_ms"].is_u64(), "line: {line}");
    }

    #[tokio::test]
    async fn test_5xxはerrorレベルで出力する() {
        let lines = send(Method::GET, "/customers").await;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "ERROR");
        assert_eq!(lines[0]["http.status_code"], 500);
    }

    #[tokio::test]
    async fn test_ヘルスチェックは出力しない() {
        let lines = send(Method::GET, "/health").await;

        assert!(lines.is_empty(), "lines: {lines:?}");
    }

    #[tokio::test]
    async fn test_healthで始まる別パスは出力しルートは未マッチになる() {
        let lines = send(Method::GET, "/healthz").await;

        assert_eq!(lines.len(), 1, "lines: {lines:?}");
        assert_eq!(lines[0]["http.path"], "/healthz");
        assert_eq!(lines[0]["http.route"], "-");
        assert_eq!(lines[0]["http.status_code"], 404);
    }
}
