//! 顧客入力の検証ルール。
//!
//! 3 つのルールをすべて評価し（途中で打ち切らない）、
//! firstName → lastName → dateOfBirth の順で違反を返す。

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::{CustomerInput, CustomerProfile};

/// 名の違反を付与するフィールド名
pub const FIELD_FIRST_NAME: &str = "firstName";
/// 姓の違反を付与するフィールド名
pub const FIELD_LAST_NAME: &str = "lastName";
/// 生年月日の違反を付与するフィールド名
pub const FIELD_DATE_OF_BIRTH: &str = "dateOfBirth";

/// フィールド単位の違反 1 件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field:   &'static str,
    pub message: &'static str,
}

/// 違反の順序付きリスト
///
/// 空であれば入力は受理される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(Violation { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|v| v.message).collect();
        write!(f, "{}", messages.join(" "))
    }
}

/// 顧客の作成・更新入力を検証し、検証済みのプロフィールを返す
///
/// 純粋関数。外部状態に依存せず、同じ入力には常に同じ結果を返す。
/// 違反があれば全件を返す。
pub fn validate_customer_input(input: CustomerInput) -> Result<CustomerProfile, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let first_name = required_name(input.first_name);
    if first_name.is_none() {
        errors.push(FIELD_FIRST_NAME, "First name is required.");
    }
    let last_name = required_name(input.last_name);
    if last_name.is_none() {
        errors.push(FIELD_LAST_NAME, "Last name is required.");
    }
    let date_of_birth = input.date_of_birth.filter(|date| !is_unset_date(*date));
    if date_of_birth.is_none() {
        errors.push(FIELD_DATE_OF_BIRTH, "Date of birth is required.");
    }

    match (first_name, last_name, date_of_birth) {
        (Some(first_name), Some(last_name), Some(date_of_birth)) => {
            Ok(CustomerProfile::new(first_name, last_name, date_of_birth))
        }
        // いずれかが None なら対応する違反が積まれている
        _ => Err(errors),
    }
}

/// 未入力・空文字・空白のみを未入力とみなす（値自体はトリムしない）
fn required_name(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 日付のゼロ値（0001-01-01）は未入力とみなす
pub fn is_unset_date(date: NaiveDate) -> bool {
    date.year() == 1 && date.ordinal() == 1
}
