use chrono::NaiveDate;
use derive_more::Display;

/// 顧客 ID
///
/// ストアが作成時に採番する整数。単調増加し、削除後も再利用されない。
/// 一度割り当てられたら変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct CustomerId(i64);

impl CustomerId {
    /// 既存の整数値から顧客 ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 顧客の可変項目（検証済み）
///
/// [`CustomerInput`](super::CustomerInput) を検証して得られる。
/// 作成時は ID のない顧客として、更新時は既存顧客の上書き内容として使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    first_name:    String,
    last_name:     String,
    date_of_birth: NaiveDate,
}

impl CustomerProfile {
    /// 検証済みの値からプロフィールを組み立てる
    pub(crate) fn new(first_name: String, last_name: String, date_of_birth: NaiveDate) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
}

/// 顧客エンティティ
///
/// # 不変条件
///
/// - `id` はストアが採番し、以後変更されない
/// - 可変項目は [`with_profile`](Customer::with_profile) でのみ置き換わる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id:            CustomerId,
    first_name:    String,
    last_name:     String,
    date_of_birth: NaiveDate,
}

impl Customer {
    /// 採番済みの ID とプロフィールから顧客を作成する
    pub fn new(id: CustomerId, profile: CustomerProfile) -> Self {
        Self {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            date_of_birth: profile.date_of_birth,
        }
    }

    /// 既存のデータから顧客を復元する（データベースから取得時）
    pub fn from_db(
        id: CustomerId,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// 検索対象となる氏名（`"{first} {last}"`）
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 氏名が検索語を部分文字列として含むか（大文字小文字を区別しない）
    pub fn matches_name(&self, term: &str) -> bool {
        self.full_name()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// 可変項目をすべて置き換える（ID は維持）
    pub fn with_profile(self, profile: CustomerProfile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            date_of_birth: profile.date_of_birth,
            ..self
        }
    }
}
