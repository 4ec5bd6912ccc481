//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 422 Unprocessable Entity | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! どちらも想定内の失敗であり、システム障害としてはログに出力しない。

use thiserror::Error;

use crate::customer::{CustomerId, ValidationErrors};

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 検出したすべての違反を、検証ルールの順序で保持する。
    #[error("バリデーションエラー: {0}")]
    Validation(ValidationErrors),

    /// エンティティが見つからない
    ///
    /// メッセージはそのまま 404 レスポンスの `title` になる。
    #[error("{entity_type} with ID {id} could not be found.")]
    NotFound {
        /// エンティティの種類（"Customer" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

impl DomainError {
    /// 顧客が見つからないエラーを生成する
    pub fn customer_not_found(id: CustomerId) -> Self {
        Self::NotFound {
            entity_type: "Customer",
            id:          id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, "Customer with ID 1 could not be found.")]
    #[case(2, "Customer with ID 2 could not be found.")]
    #[case(9_999, "Customer with ID 9999 could not be found.")]
    fn test_customer_not_foundのメッセージが固定書式になる(
        #[case] id: i64,
        #[case] expected: &str,
    ) {
        let error = DomainError::customer_not_found(CustomerId::from_i64(id));

        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_customer_not_foundのエンティティ種別はcustomer() {
        let error = DomainError::customer_not_found(CustomerId::from_i64(3));

        assert_eq!(
            error,
            DomainError::NotFound {
                entity_type: "Customer",
                id:          "3".to_string(),
            }
        );
    }
}
