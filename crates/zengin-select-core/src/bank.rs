//! Bank records
//!
//! 全銀コードの銀行データ。ソースから一度だけ読み込み、以降は読み取り専用。

use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Deserializer, Serialize};

/// 銀行1件分のレコード
///
/// フィールド名はソースデータ（zengin-data.js）と同一。
/// `branches`等の未知フィールドはデコード時に無視される。
/// 欠落・nullのフィールドは空文字列になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    /// 4桁の銀行コード
    #[serde(deserialize_with = "null_as_empty")]
    pub code: String,
    /// 表示名
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// カタカナ読み
    #[serde(deserialize_with = "null_as_empty")]
    pub kana: String,
    /// ひらがな読み（ソート・分類キー）
    #[serde(deserialize_with = "null_as_empty")]
    pub hira: String,
    /// ローマ字表記
    #[serde(deserialize_with = "null_as_empty")]
    pub roma: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Bank {
    /// 名前にsuffixを付加したコピーを返す（元レコードは変更しない）
    pub fn with_name_suffix(&self, suffix: &str) -> Self {
        let mut bank = self.clone();
        bank.name.push_str(suffix);
        bank
    }
}

/// 銀行コード → レコードのマップ
///
/// キーはソースデータのキー。列挙順はキー昇順で固定。ソート時の同順位はこの順序で並ぶ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankCollection {
    banks: BTreeMap<String, Bank>,
}

impl BankCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<&Bank> {
        self.banks.get(code)
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// 全レコード（キー昇順）
    pub fn iter(&self) -> btree_map::Values<'_, String, Bank> {
        self.banks.values()
    }

    /// ひらがな読みで安定ソートしたレコード列
    ///
    /// 比較はコードポイント順（ロケール非依存）。
    pub fn sorted_by_reading(&self) -> Vec<&Bank> {
        let mut banks: Vec<&Bank> = self.iter().collect();
        banks.sort_by(|a, b| a.hira.cmp(&b.hira));
        banks
    }
}

/// 各レコードの`code`をキーにして構築
impl FromIterator<Bank> for BankCollection {
    fn from_iter<I: IntoIterator<Item = Bank>>(iter: I) -> Self {
        let banks = iter
            .into_iter()
            .map(|bank| (bank.code.clone(), bank))
            .collect();
        Self { banks }
    }
}

#[cfg(test)]
pub(crate) fn bank(code: &str, name: &str, hira: &str) -> Bank {
    Bank {
        code: code.to_string(),
        name: name.to_string(),
        kana: String::new(),
        hira: hira.to_string(),
        roma: String::new(),
    }
}
