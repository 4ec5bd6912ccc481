//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` のみ）
//! - axum の `IntoResponse` 変換はサービスの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - 入力検証エラーは `errors`（フィールド名 → メッセージ配列）を持つ

use serde::{Serialize, Serializer, ser::SerializeMap};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://customers.example.com/errors";

/// 422 レスポンスの固定タイトル
pub const VALIDATION_FAILED_TITLE: &str = "One or more validation errors occurred.";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
/// `detail` と `errors` は該当する場合のみ出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors:     Option<FieldErrors>,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
    pub fn new(error_type_suffix: &str, title: impl Into<String>, status: u16) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: None,
            errors: None,
        }
    }

    /// `detail` を付与する
    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..self
        }
    }

    /// 400 Bad Request
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("bad-request", "Bad Request", 400).with_detail(detail)
    }

    /// 404 Not Found
    ///
    /// `title` にはエンティティと ID を含むメッセージをそのまま使う。
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::new("not-found", title, 404)
    }

    /// 422 Unprocessable Entity
    pub fn validation_failed(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::new("validation-failed", VALIDATION_FAILED_TITLE, 422)
        }
    }

    /// 500 Internal Server Error
    ///
    /// detail は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new("internal-error", "Internal Server Error", 500)
            .with_detail("An internal error occurred.")
    }
}

/// フィールド名 → メッセージ配列の順序付きマップ
///
/// JSON ではオブジェクトとして出力し、キーの順序は挿入順を保つ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドにメッセージを追加する
    ///
    /// 既存のフィールドであれば末尾に追記する。
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.0.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.0.push((field, vec![message])),
        }
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, messages) in &self.0 {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_errors() -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.push("firstName", "First name is required.");
        errors.push("lastName", "Last name is required.");
        errors
    }

    #[test]
    fn test_newで全フィールドが正しく設定される() {
        let error = ErrorResponse::new("custom-error", "Custom Error", 418);

        assert_eq!(
            error.error_type,
            "https://customers.example.com/errors/custom-error"
        );
        assert_eq!(error.title, "Custom Error");
        assert_eq!(error.status, 418);
        assert_eq!(error.detail, None);
        assert_eq!(error.errors, None);
    }

    #[test]
    fn test_not_foundはメッセージをtitleに設定する() {
        let error = ErrorResponse::not_found("Customer with ID 2 could not be found.");

        assert_eq!(
            error.error_type,
            "https://customers.example.com/errors/not-found"
        );
        assert_eq!(error.title, "Customer with ID 2 could not be found.");
        assert_eq!(error.status, 404);
    }

    #[test]
    fn test_validation_failedが422とerrorsを返す() {
        let error = ErrorResponse::validation_failed(sample_errors());

        assert_eq!(error.status, 422);
        assert_eq!(error.title, VALIDATION_FAILED_TITLE);
        assert_eq!(error.errors, Some(sample_errors()));
    }

    #[test]
    fn test_validation_failedのjsonはerrorsを持ちdetailを持たない() {
        let json = serde_json::to_value(ErrorResponse::validation_failed(sample_errors())).unwrap();

        assert_eq!(
            json["errors"],
            serde_json::json!({
                "firstName": ["First name is required."],
                "lastName": ["Last name is required."]
            })
        );
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_internal_errorが500と固定detailを返す() {
        let error = ErrorResponse::internal_error();

        assert_eq!(error.status, 500);
        assert_eq!(error.title, "Internal Server Error");
        assert_eq!(error.detail.as_deref(), Some("An internal error occurred."));
    }

    #[test]
    fn test_jsonシリアライズでtypeフィールド名が正しく空の項目は出力されない() {
        let error = ErrorResponse::bad_request("不正なリクエスト");
        let json = serde_json::to_value(&error).unwrap();

        // serde(rename = "type") で `error_type` → `type` に変換される
        assert_eq!(json["type"], "https://customers.example.com/errors/bad-request");
        assert_eq!(json["title"], "Bad Request");
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "不正なリクエスト");
        assert!(json.get("error_type").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_field_errorsは挿入順でシリアライズされる() {
        let mut errors = FieldErrors::new();
        errors.push("lastName", "Last name is required.");
        errors.push("dateOfBirth", "Date of birth is required.");
        errors.push("firstName", "First name is required.");

        let json = serde_json::to_string(&errors).unwrap();

        assert_eq!(
            json,
            r#"{"lastName":["Last name is required."],"dateOfBirth":["Date of birth is required."],"firstName":["First name is required."]}"#
        );
    }

    #[test]
    fn test_同じフィールドへのpushはメッセージを追記する() {
        let mut errors = FieldErrors::new();
        errors.push("firstName", "a");
        errors.push("lastName", "b");
        errors.push("firstName", "c");

        let json = serde_json::to_string(&errors).unwrap();

        assert_eq!(json, r#"{"firstName":["a","c"],"lastName":["b"]}"#);
    }
}
