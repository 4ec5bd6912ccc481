//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` で効率的に調査できるよう、ログフィールドの命名規約とヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: エンティティ種別（[`event::entity_type`] の定数を使用）
/// - `event.entity_id`: エンティティ ID
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const CUSTOMER: &str = "customer";
    }

    /// イベントアクション
    pub mod action {
        pub const CUSTOMER_CREATED: &str = "customer.created";
        pub const CUSTOMER_UPDATED: &str = "customer.updated";
        pub const CUSTOMER_DELETED: &str = "customer.deleted";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const CUSTOMER: &str = "customer";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// インフラストラクチャ（DB、ストア）
        pub const INFRASTRUCTURE: &str = "infrastructure";
    }

    /// エラー種別
    pub mod kind {
        pub const DATABASE: &str = "database";
        pub const INTERNAL: &str = "internal";
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    use super::event;

    /// フィールド名だけを記録する Layer
    #[derive(Clone, Default)]
    struct FieldNameCapture {
        names: Arc<Mutex<Vec<String>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FieldNameCapture {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut names = self.names.lock().unwrap();
            for field in event.fields() {
                names.push(field.name().to_string());
            }
        }
    }

    #[test]
    fn test_log_business_eventはevent_kindマーカーを付与する() {
        let capture = FieldNameCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        crate::log_business_event!(
            event.category = event::category::CUSTOMER,
            event.action = event::action::CUSTOMER_CREATED,
            event.entity_type = event::entity_type::CUSTOMER,
            event.entity_id = 1_i64,
            event.result = event::result::SUCCESS,
            "顧客を作成"
        );

        let names = capture.names.lock().unwrap();
        assert!(names.contains(&"event.kind".to_string()));
        assert!(names.contains(&"event.action".to_string()));
        assert!(names.contains(&"event.entity_id".to_string()));
    }
}
