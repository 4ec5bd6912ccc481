//! # Customer Service エラー定義
//!
//! Customer Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス |
//! |--------|----------------|
//! | `Validation` | 422 |
//! | `NotFound` | 404 |
//! | `BadRequest` | 400 |
//! | `Database` | 500（詳細はログのみ） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use customers_domain::{DomainError, customer::ValidationErrors};
use customers_infra::{InfraError, error::InfraErrorKind};
use customers_shared::{
    ErrorResponse,
    FieldErrors,
    event_log::error::{category, kind},
};
use thiserror::Error;

/// Customer Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 入力値の検証失敗
    #[error("バリデーションエラー: {0}")]
    Validation(ValidationErrors),

    /// リソースが見つからない（メッセージはそのまま `title` になる）
    #[error("{0}")]
    NotFound(String),

    /// 不正なリクエスト（JSON やパスの解析失敗）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation(errors),
            not_found @ DomainError::NotFound { .. } => Self::NotFound(not_found.to_string()),
        }
    }
}

/// 検証違反をフィールドごとのメッセージ配列に変換する
fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for violation in errors.iter() {
        fields.push(violation.field, violation.message);
    }
    fields
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = match &self {
            ServiceError::Validation(errors) => {
                tracing::debug!(%errors, "入力値の検証に失敗しました");
                ErrorResponse::validation_failed(field_errors(errors))
            }
            ServiceError::NotFound(message) => ErrorResponse::not_found(message.clone()),
            ServiceError::BadRequest(message) => ErrorResponse::bad_request(message.clone()),
            ServiceError::Database(e) => {
                let error_kind = match e.kind() {
                    InfraErrorKind::Database(_) => kind::DATABASE,
                    InfraErrorKind::Unexpected(_) => kind::INTERNAL,
                };
                tracing::error!(
                    error.category = category::INFRASTRUCTURE,
                    error.kind = error_kind,
                    span_trace = %e.span_trace(),
                    "ストレージエラー: {}",
                    e
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
