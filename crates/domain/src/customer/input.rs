use chrono::NaiveDate;

use super::{CustomerProfile, validate_customer_input};
use crate::DomainError;

/// 顧客の作成・更新入力（未検証）
///
/// リクエストで値が省略・`null` の場合も検証ルールで報告できるよう、
/// すべての項目を `Option` で受け取る。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInput {
    pub first_name:    Option<String>,
    pub last_name:     Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl TryFrom<CustomerInput> for CustomerProfile {
    type Error = DomainError;

    /// 入力を検証し、違反がなければプロフィールに変換する
    ///
    /// 違反がある場合は全件を `DomainError::Validation` で返す。
    fn try_from(input: CustomerInput) -> Result<Self, Self::Error> {
        validate_customer_input(input).map_err(DomainError::Validation)
    }
}
