//! Grouping Engine
//!
//! 銀行一覧を五十音の行・小グループに振り分け、選択UI用のツリーを作成する。

use serde::{Deserialize, Serialize};

use crate::bank::{Bank, BankCollection};
use crate::primary::PrimaryBanks;
use crate::syllabary::{self, SYLLABLE_ROWS};

/// 小グループ（例: "か" に "か"/"が" 始まりの銀行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubGroup {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "BankList")]
    pub bank_list: Vec<Bank>,
}

/// 行グループ（例: "か行"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableGroup {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Child")]
    pub child: Vec<SubGroup>,
}

/// 選択UI用ツリー（あ行→わ行の固定順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTree {
    rows: Vec<SyllableGroup>,
}

impl NavigationTree {
    pub fn rows(&self) -> &[SyllableGroup] {
        &self.rows
    }

    pub fn get(&self, label: &str) -> Option<&SyllableGroup> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// 行ラベルと小グループラベルから銀行一覧を取得
    pub fn banks(&self, row_label: &str, sub_label: &str) -> Option<&[Bank]> {
        self.get(row_label)?
            .child
            .iter()
            .find(|c| c.label == sub_label)
            .map(|c| c.bank_list.as_slice())
    }

    /// ツリー全体の銀行数
    pub fn bank_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| &r.child)
            .map(|c| c.bank_list.len())
            .sum()
    }
}

/// 選択UI用ツリーを作成
///
/// 読み（ひらがな）で安定ソートした一覧を、行・小グループごとに走査して振り分ける。
/// 小グループ内の順序はソート順のまま。メインバンクは名前にsuffixを付加したコピーを格納する。
/// どの小グループにも一致しない読みの銀行はツリーに含まれない（[`unclassified`]参照）。
pub fn build_navigation_tree(
    collection: &BankCollection,
    primary: &PrimaryBanks,
) -> NavigationTree {
    let sorted = collection.sorted_by_reading();

    let rows = SYLLABLE_ROWS
        .iter()
        .map(|row| SyllableGroup {
            label: row.label.to_string(),
            child: row
                .patterns
                .iter()
                .map(|pattern| SubGroup {
                    label: syllabary::sub_group_label(pattern).to_string(),
                    bank_list: sorted
                        .iter()
                        .filter(|bank| syllabary::matches(pattern, &bank.hira))
                        .map(|bank| primary.decorate(bank))
                        .collect(),
                })
                .collect(),
        })
        .collect();

    NavigationTree { rows }
}

/// どの小グループにも分類されない銀行（読み順）
///
/// 対象は長音記号・英字・空文字始まりの読みと、五十音表にない「ゐ」「ゑ」始まりの読み。
pub fn unclassified(collection: &BankCollection) -> Vec<&Bank> {
    collection
        .sorted_by_reading()
        .into_iter()
        .filter(|bank| syllabary::classify(&bank.hira).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::bank;
    use crate::primary::PRIMARY_SUFFIX;
    use std::collections::HashSet;

    fn primary(codes: &[&str]) -> PrimaryBanks {
        PrimaryBanks::new(codes.iter().map(|s| s.to_string()).collect(), PRIMARY_SUFFIX)
    }

    fn sample() -> BankCollection {
        vec![
            bank("0005", "三菱UFJ", "みつびしゆーえふじぇー"),
            bank("0001", "みずほ", "みずほ"),
            bank("0138", "横浜", "よこはま"),
            bank("0149", "静岡", "しずおか"),
            bank("0152", "山梨中央", "やまなしちゆうおう"),
            bank("0153", "八十二", "はちじゆうに"),
            bank("0158", "京都", "きようと"),
            bank("0172", "岐阜", "ぎふ"),
            bank("0175", "百五", "ひやくご"),
            bank("0310", "ＧＭＯあおぞらネット", "じーえむおーあおぞらねつと"),
            bank("0397", "ＳＢＩ新生", "えすびーあいしんせい"),
            bank("9900", "ゆうちょ", "ゆうちよ"),
            bank("0999", "テスト", "ーてすと"),
        ]
        .into_iter()
        .collect()
    }

    fn codes(banks: &[Bank]) -> Vec<&str> {
        banks.iter().map(|b| b.code.as_str()).collect()
    }

    #[test]
    fn test_row_order_fixed() {
        let tree = build_navigation_tree(&sample(), &primary(&[]));
        let labels: Vec<&str> = tree.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["あ行", "か行", "さ行", "た行", "な行", "は行", "ま行", "や行", "ら行", "わ行"]
        );

        let empty = build_navigation_tree(&BankCollection::new(), &primary(&[]));
        assert_eq!(empty.rows().len(), 10);
        assert_eq!(empty.bank_count(), 0);
        assert!(empty.rows().iter().all(|r| !r.child.is_empty()));
    }

    #[test]
    fn test_mizuho_and_mufg_in_mi_group() {
        let tree = build_navigation_tree(&sample(), &primary(&["0001"]));
        let mi = tree.banks("ま行", "み").unwrap();
        // "みず" < "みつ"
        assert_eq!(codes(mi), vec!["0001", "0005"]);
        assert_eq!(mi[0].name, "みずほ銀行");
        assert_eq!(mi[1].name, "三菱UFJ");
    }

    #[test]
    fn test_voiced_readings_join_base_group() {
        let tree = build_navigation_tree(&sample(), &primary(&[]));
        // "きようと" < "ぎふ"
        assert_eq!(codes(tree.banks("か行", "き").unwrap()), vec!["0158", "0172"]);
        // "しずおか" < "じーえむ..."
        assert_eq!(codes(tree.banks("さ行", "し").unwrap()), vec!["0149", "0310"]);
        assert!(tree.banks("か行", "が").is_none());
    }

    #[test]
    fn test_each_bank_at_most_once() {
        let collection = sample();
        let tree = build_navigation_tree(&collection, &primary(&[]));

        let mut seen = HashSet::new();
        for row in tree.rows() {
            for child in &row.child {
                for bank in &child.bank_list {
                    assert!(seen.insert(bank.code.clone()), "duplicate {}", bank.code);
                }
            }
        }
        assert_eq!(tree.bank_count() + unclassified(&collection).len(), collection.len());
    }

    #[test]
    fn test_unmatched_reading_is_dropped() {
        let collection = sample();
        let tree = build_navigation_tree(&collection, &primary(&[]));
        let all: Vec<&Bank> = tree
            .rows()
            .iter()
            .flat_map(|r| &r.child)
            .flat_map(|c| &c.bank_list)
            .collect();
        assert!(all.iter().all(|b| b.code != "0999"));

        let missing = unclassified(&collection);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].code, "0999");
    }

    #[test]
    fn test_small_kana_bank_in_base_group() {
        let collection: BankCollection = vec![
            bank("0001", "あ", "つくば"),
            bank("0002", "い", "っとり"),
            bank("0003", "う", "づか"),
            bank("0004", "え", "ゔぃら"),
            bank("0005", "お", "ゑびす"),
        ]
        .into_iter()
        .collect();
        let tree = build_navigation_tree(&collection, &primary(&[]));

        // "っ" < "つ" < "づ"（コードポイント順）
        assert_eq!(codes(tree.banks("た行", "つ").unwrap()), vec!["0002", "0001", "0003"]);
        assert_eq!(codes(tree.banks("あ行", "う").unwrap()), vec!["0004"]);

        let missing = unclassified(&collection);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].code, "0005");
    }

    #[test]
    fn test_primary_suffix_only_on_primary() {
        let collection = sample();
        let tree = build_navigation_tree(&collection, &primary(&["0001", "9900"]));

        for bank in tree.rows().iter().flat_map(|r| &r.child).flat_map(|c| &c.bank_list) {
            let original = collection.get(&bank.code).unwrap();
            if bank.code == "0001" || bank.code == "9900" {
                assert_eq!(bank.name, format!("{}銀行", original.name));
            } else {
                assert_eq!(bank.name, original.name);
            }
        }
        assert_eq!(collection.get("9900").unwrap().name, "ゆうちょ");
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let forward = r#"{
            "0001": {"code": "0001", "name": "みずほ", "hira": "みずほ"},
            "0005": {"code": "0005", "name": "三菱UFJ", "hira": "みつびしゆーえふじぇー"},
            "0150": {"code": "0150", "name": "甲", "hira": "かがわ"},
            "0151": {"code": "0151", "name": "乙", "hira": "かがわ"},
            "0172": {"code": "0172", "name": "岐阜", "hira": "ぎふ"}
        }"#;
        let shuffled = r#"{
            "0172": {"code": "0172", "name": "岐阜", "hira": "ぎふ"},
            "0151": {"code": "0151", "name": "乙", "hira": "かがわ"},
            "0005": {"code": "0005", "name": "三菱UFJ", "hira": "みつびしゆーえふじぇー"},
            "0150": {"code": "0150", "name": "甲", "hira": "かがわ"},
            "0001": {"code": "0001", "name": "みずほ", "hira": "みずほ"}
        }"#;
        let p = primary(&["0001"]);

        let a = build_navigation_tree(&crate::source::decode(forward).unwrap(), &p);
        let b = build_navigation_tree(&crate::source::decode(shuffled).unwrap(), &p);

        assert_eq!(
            crate::sink::to_json(&a, false).unwrap(),
            crate::sink::to_json(&b, false).unwrap()
        );
        // 同一読みはキー順
        assert_eq!(codes(a.banks("か行", "か").unwrap()), vec!["0150", "0151"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let collection: BankCollection = vec![bank("0001", "みずほ", "みずほ")].into_iter().collect();
        let tree = build_navigation_tree(&collection, &primary(&["0001"]));
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json[0]["Label"], "あ行");
        assert_eq!(json[0]["Child"][0]["Label"], "あ");
        assert!(json[0]["Child"][0]["BankList"].as_array().unwrap().is_empty());
        assert_eq!(json[6]["Child"][1]["BankList"][0]["name"], "みずほ銀行");
        assert_eq!(json[6]["Child"][1]["BankList"][0]["code"], "0001");
    }
}
