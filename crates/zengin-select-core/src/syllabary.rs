//! Syllable Classifier
//!
//! 五十音の行（あ行〜わ行）と、各行の小グループ（先頭文字のパターン）を定義する。
//! 濁音・半濁音・小書き文字は清音と同じ小グループに分類される。
//! 歴史的仮名の「ゐ」「ゑ」はどの行にも含まれない。

/// 五十音の行定義
pub const SYLLABLE_ROWS: &[SyllableRow] = &[
    SyllableRow {
        label: "あ行",
        patterns: &["あぁ", "いぃ", "うぅゔ", "えぇ", "おぉ"],
    },
    SyllableRow {
        label: "か行",
        patterns: &["かがゕ", "きぎ", "くぐ", "けげゖ", "こご"],
    },
    SyllableRow {
        label: "さ行",
        patterns: &["さざ", "しじ", "すず", "せぜ", "そぞ"],
    },
    SyllableRow {
        label: "た行",
        patterns: &["ただ", "ちぢ", "つっづ", "てで", "とど"],
    },
    SyllableRow {
        label: "な行",
        patterns: &["な", "に", "ぬ", "ね", "の"],
    },
    SyllableRow {
        label: "は行",
        patterns: &["はばぱ", "ひびぴ", "ふぶぷ", "へべぺ", "ほぼぽ"],
    },
    SyllableRow {
        label: "ま行",
        patterns: &["ま", "み", "む", "め", "も"],
    },
    SyllableRow {
        label: "や行",
        patterns: &["やゃ", "ゆゅ", "よょ"],
    },
    SyllableRow {
        label: "ら行",
        patterns: &["ら", "り", "る", "れ", "ろ"],
    },
    SyllableRow {
        label: "わ行",
        patterns: &["わゎ", "を", "ん"],
    },
];

/// 行の静的定義
#[derive(Debug, Clone, Copy)]
pub struct SyllableRow {
    /// 行ラベル（例: "か行"）
    pub label: &'static str,
    /// 小グループのパターン（表示順）
    ///
    /// 各パターンは先頭文字の集合。先頭の1文字が表示ラベルになる。
    pub patterns: &'static [&'static str],
}

impl SyllableRow {
    /// 小グループの表示ラベル一覧
    pub fn sub_group_labels(&self) -> Vec<&'static str> {
        self.patterns.iter().copied().map(sub_group_label).collect()
    }

    /// 読みが属するパターンを取得
    pub fn pattern_for(&self, reading: &str) -> Option<&'static str> {
        self.patterns.iter().copied().find(|p| matches(p, reading))
    }
}

/// ラベルから行定義を取得
pub fn row(label: &str) -> Option<&'static SyllableRow> {
    SYLLABLE_ROWS.iter().find(|r| r.label == label)
}

/// パターンの表示ラベル（先頭1文字）
pub fn sub_group_label(pattern: &str) -> &str {
    pattern
        .char_indices()
        .nth(1)
        .map_or(pattern, |(end, _)| &pattern[..end])
}

/// 読みの先頭文字がパターンに含まれるか
pub fn matches(pattern: &str, reading: &str) -> bool {
    reading
        .chars()
        .next()
        .is_some_and(|first| pattern.contains(first))
}

/// 読みが分類される行とパターンを取得
///
/// どのパターンにも一致しない読み（長音記号始まり等）は`None`。
pub fn classify(reading: &str) -> Option<(&'static SyllableRow, &'static str)> {
    SYLLABLE_ROWS
        .iter()
        .find_map(|row| row.pattern_for(reading).map(|pattern| (row, pattern)))
}
