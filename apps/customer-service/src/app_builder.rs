//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はストレージ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, put},
};
use customers_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        CustomerState,
        create_customer,
        delete_customer,
        health_check,
        list_customers,
        update_customer,
    },
    middleware::canonical_log_line,
    usecase::CustomerUseCaseImpl,
};

/// ルーターを構築する
pub fn build_app(usecase: CustomerUseCaseImpl) -> Router {
    let customer_state = Arc::new(CustomerState { usecase });

    Router::new()
        .route("/health", get(health_check))
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            put(update_customer).delete(delete_customer),
        )
        .with_state(customer_state)
        // 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. canonical_log_line: リクエスト完了時に 1 行サマリログを出力（スパン内）
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(canonical_log_line))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
