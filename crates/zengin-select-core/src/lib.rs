//! # zengin-select-core
//!
//! 全銀コードの銀行一覧から、選択UI用の五十音ツリーとメインバンク一覧を作成する。
//!
//! ```rust
//! use zengin_select_core::{generate, Bank, BankCollection, PrimaryBanks};
//!
//! let banks: BankCollection = vec![Bank {
//!     code: "0001".to_string(),
//!     name: "みずほ".to_string(),
//!     kana: "ミズホ".to_string(),
//!     hira: "みずほ".to_string(),
//!     roma: "mizuho".to_string(),
//! }]
//! .into_iter()
//! .collect();
//!
//! let primary = PrimaryBanks::new(vec!["0001".to_string()], "銀行");
//! let artifacts = generate(&banks, &primary).unwrap();
//!
//! assert_eq!(artifacts.navigation.banks("ま行", "み").unwrap()[0].name, "みずほ銀行");
//! assert_eq!(artifacts.primary[0].name, "みずほ銀行");
//! ```

pub mod bank;
pub mod config;
pub mod error;
pub mod navigation;
pub mod primary;
pub mod sink;
pub mod source;
pub mod syllabary;

pub use bank::{Bank, BankCollection};
pub use config::{Config, OutputConfig, SourceConfig};
pub use error::{Result, ZenginError};
pub use navigation::{
    build_navigation_tree, unclassified, NavigationTree, SubGroup, SyllableGroup,
};
pub use primary::{build_primary_list, PrimaryBanks, DEFAULT_PRIMARY_CODES, PRIMARY_SUFFIX};
pub use source::{Source, SourceLoader, DEFAULT_SOURCE_URL};
pub use syllabary::{SyllableRow, SYLLABLE_ROWS};

/// 生成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// 選択UI用ツリー
    pub navigation: NavigationTree,
    /// メインバンク一覧
    pub primary: Vec<Bank>,
}

/// ツリーとメインバンク一覧を作成
///
/// メインバンク一覧を先に作るため、コード欠落時は何も出力されない。
pub fn generate(collection: &BankCollection, primary: &PrimaryBanks) -> Result<Artifacts> {
    let primary_list = build_primary_list(collection, primary)?;
    let navigation = build_navigation_tree(collection, primary);

    Ok(Artifacts {
        navigation,
        primary: primary_list,
    })
}
