//! Primary-Bank Selector
//!
//! メインバンク（主要行）の一覧を、宣言順のまま抽出する。

use serde::{Deserialize, Serialize};

use crate::bank::{Bank, BankCollection};
use crate::error::{Result, ZenginError};

/// メインバンクの表示名に付加するsuffix
pub const PRIMARY_SUFFIX: &str = "銀行";

/// デフォルトのメインバンクコード一覧（表示順）
pub const DEFAULT_PRIMARY_CODES: &[&str] = &[
    "0001", // みずほ
    "0005", // 三菱UFJ
    "0009", // 三井住友
    "0010", // りそな
    "0017", // 埼玉りそな
    "0033", // ジャパンネット
    "0036", // 楽天
    "9900", // ゆうちょ
];

/// メインバンクの許可リストとsuffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryBanks {
    /// 銀行コード（この順で出力される）
    #[serde(default = "default_codes")]
    pub codes: Vec<String>,
    /// 表示名に付加する文字列
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_codes() -> Vec<String> {
    DEFAULT_PRIMARY_CODES.iter().map(|s| s.to_string()).collect()
}

fn default_suffix() -> String {
    PRIMARY_SUFFIX.to_string()
}

impl Default for PrimaryBanks {
    fn default() -> Self {
        Self {
            codes: default_codes(),
            suffix: default_suffix(),
        }
    }
}

impl PrimaryBanks {
    pub fn new(codes: Vec<String>, suffix: impl Into<String>) -> Self {
        Self {
            codes,
            suffix: suffix.into(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// メインバンクならsuffix付きのコピー、それ以外はそのままのコピー
    pub fn decorate(&self, bank: &Bank) -> Bank {
        if self.contains(&bank.code) {
            bank.with_name_suffix(&self.suffix)
        } else {
            bank.clone()
        }
    }
}

/// メインバンク一覧を作成
///
/// 許可リストのコードが1件でも見つからなければ`PrimaryBankNotFound`。
/// 途中までの結果は返さない。
pub fn build_primary_list(
    collection: &BankCollection,
    primary: &PrimaryBanks,
) -> Result<Vec<Bank>> {
    primary
        .codes
        .iter()
        .map(|code| {
            collection
                .get(code)
                .map(|bank| bank.with_name_suffix(&primary.suffix))
                .ok_or_else(|| ZenginError::PrimaryBankNotFound { code: code.clone() })
        })
        .collect()
}
