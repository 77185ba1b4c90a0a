//! 文字コードとアルファベットラベルの相互変換
//!
//! このモジュールは、受理する文字集合を閉区間の列として保持し、
//! コードポイントとトライのエッジラベルを相互に変換する[`AlphaMap`]を
//! 提供します。
//!
//! ラベルは、区間が追加された順に各区間の文字を連結したものに対して、
//! 終端用の`0`を避けるため1を起点に割り当てられます。区間の列が
//! 昇順であることも互いに素であることも検査しません。追加順こそが
//! ラベル割り当てを定める唯一の順序であり、並べ替えや重複の除去を行うと
//! 既存のバイナリ形式と互換性が失われます。

mod codec;
mod loader;

use bincode::{Decode, Encode};
use rkyv::{Archive, Deserialize, Serialize};

use crate::chars::{AlphaChar, TrieChar, ALPHA_CHAR_ERROR, TRIE_CHAR_MAX, TRIE_CHAR_TERM};
use crate::errors::{AlphaMapError, Result};

pub use codec::ALPHA_MAP_SIGNATURE;

/// 受理する文字集合を定義する閉区間
///
/// `begin <= end`が成り立ちます。両端の文字を含みます。
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Decode, Encode, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq), derive(Clone, Copy, Debug))]
pub struct AlphaRange {
    /// 区間の先頭の文字コード
    pub begin: AlphaChar,

    /// 区間の末尾の文字コード(この文字を含む)
    pub end: AlphaChar,
}

/// 文字コードとアルファベットラベルの双方向マップ
///
/// 追加専用の区間の列を所有します。変換は区間の列を追加順に歩くだけで行われ、
/// 区間数に比例する時間で完了します。
#[derive(Default, Archive, Serialize, Deserialize)]
pub struct AlphaMap {
    ranges: Vec<AlphaRange>,
}

impl AlphaMap {
    /// 空のマップを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 区間を末尾に追加します。
    ///
    /// 既存の区間との重なりや順序は検査しません。
    ///
    /// # 引数
    ///
    /// * `begin` - 区間の先頭の文字コード
    /// * `end` - 区間の末尾の文字コード(この文字を含む)
    ///
    /// # エラー
    ///
    /// `begin > end`の場合にエラーを返します。マップは変更されません。
    pub fn add_range(&mut self, begin: AlphaChar, end: AlphaChar) -> Result<()> {
        if begin > end {
            return Err(AlphaMapError::invalid_argument(
                "begin",
                format!("range begin ({begin:#x}) must not exceed range end ({end:#x})"),
            ));
        }
        self.ranges.push(AlphaRange { begin, end });
        Ok(())
    }

    /// 保持している区間の数を返します。
    #[inline(always)]
    pub fn num_ranges(&self) -> usize {
        self.ranges.len()
    }

    /// 保持している区間を追加順で返します。
    #[inline(always)]
    pub fn ranges(&self) -> &[AlphaRange] {
        &self.ranges
    }

    /// 文字コードをアルファベットラベルに変換します。
    ///
    /// # 引数
    ///
    /// * `ac` - 変換する文字コード
    ///
    /// # 戻り値
    ///
    /// * `Some(0)` - `ac`が終端(`0`)の場合
    /// * `Some(label)` - `ac`を含む最初の区間が見つかった場合
    /// * `None` - どの区間にも含まれない場合、または割り当てられるラベルが
    ///   稠密なラベル空間(`1..=254`)に収まらない場合
    pub fn char_to_index(&self, ac: AlphaChar) -> Option<TrieChar> {
        if ac == 0 {
            return Some(TRIE_CHAR_TERM);
        }
        let mut alpha_begin: u64 = 1;
        for range in &self.ranges {
            if range.begin <= ac && ac <= range.end {
                let index = alpha_begin + u64::from(ac - range.begin);
                // TRIE_CHAR_MAXは番兵として予約されるため有効なラベルにならない
                return TrieChar::try_from(index)
                    .ok()
                    .filter(|&tc| tc != TRIE_CHAR_MAX);
            }
            alpha_begin += u64::from(range.end - range.begin) + 1;
        }
        None
    }

    /// アルファベットラベルを文字コードに変換します。
    ///
    /// 区間に含まれるすべての文字コード`c`について
    /// `index_to_char(char_to_index(c)) == c`が成り立ちます。
    ///
    /// # 引数
    ///
    /// * `tc` - 変換するラベル
    ///
    /// # 戻り値
    ///
    /// * `Some(0)` - `tc`が終端(`0`)の場合
    /// * `Some(code_point)` - `tc`に対応する文字コードが見つかった場合
    /// * `None` - `tc`が番兵(`TRIE_CHAR_MAX`)の場合、またはどの区間にも
    ///   対応しない場合
    pub fn index_to_char(&self, tc: TrieChar) -> Option<AlphaChar> {
        if tc == TRIE_CHAR_TERM {
            return Some(0);
        }
        if tc == TRIE_CHAR_MAX {
            return None;
        }
        let index = u64::from(tc);
        let mut alpha_begin: u64 = 1;
        for range in &self.ranges {
            if alpha_begin + u64::from(range.end - range.begin) >= index {
                return Some(range.begin + (index - alpha_begin) as AlphaChar);
            }
            alpha_begin += u64::from(range.end - range.begin) + 1;
        }
        None
    }

    /// 0終端の文字コード列をラベル列に変換します。
    ///
    /// 出力も同じ長さの0終端列で、新たに1回だけ確保されます。
    /// どの区間にも含まれない文字コードは[`TRIE_CHAR_MAX`]として
    /// 出力に書き込まれ、変換自体は失敗しません。
    ///
    /// # 引数
    ///
    /// * `str` - 変換する文字コード列。最初の`0`を終端とみなします。
    ///   終端がない場合はスライス全体を変換します。
    pub fn char_to_index_str(&self, str: &[AlphaChar]) -> Vec<TrieChar> {
        let len = str.iter().position(|&ac| ac == 0).unwrap_or(str.len());
        let mut mapped = Vec::with_capacity(len + 1);
        mapped.extend(
            str[..len]
                .iter()
                .map(|&ac| self.char_to_index(ac).unwrap_or(TRIE_CHAR_MAX)),
        );
        mapped.push(TRIE_CHAR_TERM);
        mapped
    }

    /// 0終端のラベル列を文字コード列に変換します。
    ///
    /// 出力も同じ長さの0終端列で、新たに1回だけ確保されます。
    /// 対応する文字コードを持たないラベルは[`ALPHA_CHAR_ERROR`]として
    /// 出力に書き込まれ、変換自体は失敗しません。
    ///
    /// # 引数
    ///
    /// * `str` - 変換するラベル列。最初の`0`を終端とみなします。
    ///   終端がない場合はスライス全体を変換します。
    pub fn index_to_char_str(&self, str: &[TrieChar]) -> Vec<AlphaChar> {
        let len = str
            .iter()
            .position(|&tc| tc == TRIE_CHAR_TERM)
            .unwrap_or(str.len());
        let mut mapped = Vec::with_capacity(len + 1);
        mapped.extend(
            str[..len]
                .iter()
                .map(|&tc| self.index_to_char(tc).unwrap_or(ALPHA_CHAR_ERROR)),
        );
        mapped.push(0);
        mapped
    }
}

impl ArchivedAlphaMap {
    /// 文字コードをアルファベットラベルに変換します(アーカイブ版)。
    pub fn char_to_index(&self, ac: AlphaChar) -> Option<TrieChar> {
        if ac == 0 {
            return Some(TRIE_CHAR_TERM);
        }
        let mut alpha_begin: u64 = 1;
        for range in self.ranges.iter() {
            let (begin, end) = (range.begin.to_native(), range.end.to_native());
            if begin <= ac && ac <= end {
                let index = alpha_begin + u64::from(ac - begin);
                return TrieChar::try_from(index)
                    .ok()
                    .filter(|&tc| tc != TRIE_CHAR_MAX);
            }
            alpha_begin += u64::from(end - begin) + 1;
        }
        None
    }

    /// アルファベットラベルを文字コードに変換します(アーカイブ版)。
    pub fn index_to_char(&self, tc: TrieChar) -> Option<AlphaChar> {
        if tc == TRIE_CHAR_TERM {
            return Some(0);
        }
        if tc == TRIE_CHAR_MAX {
            return None;
        }
        let index = u64::from(tc);
        let mut alpha_begin: u64 = 1;
        for range in self.ranges.iter() {
            let (begin, end) = (range.begin.to_native(), range.end.to_native());
            if alpha_begin + u64::from(end - begin) >= index {
                return Some(begin + (index - alpha_begin) as AlphaChar);
            }
            alpha_begin += u64::from(end - begin) + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin_map() -> AlphaMap {
        let mut map = AlphaMap::new();
        map.add_range(0x41, 0x5A).unwrap();
        map
    }

    #[test]
    fn test_terminator_empty_map() {
        let map = AlphaMap::new();
        assert_eq!(map.char_to_index(0), Some(TRIE_CHAR_TERM));
        assert_eq!(map.index_to_char(TRIE_CHAR_TERM), Some(0));
    }

    #[test]
    fn test_terminator_with_ranges() {
        let map = latin_map();
        assert_eq!(map.char_to_index(0), Some(TRIE_CHAR_TERM));
        assert_eq!(map.index_to_char(TRIE_CHAR_TERM), Some(0));
    }

    #[test]
    fn test_char_to_index() {
        let map = latin_map();
        assert_eq!(map.char_to_index(0x41), Some(1));
        assert_eq!(map.char_to_index(0x4E), Some(14));
        assert_eq!(map.char_to_index(0x5A), Some(26));
    }

    #[test]
    fn test_out_of_alphabet() {
        let map = latin_map();
        assert_eq!(map.char_to_index(0x61), None);
        assert_eq!(map.char_to_index(0x40), None);
        assert_eq!(map.index_to_char(27), None);
        assert_eq!(map.index_to_char(30), None);
    }

    #[test]
    fn test_round_trip_all_covered() {
        let mut map = AlphaMap::new();
        map.add_range(0x20, 0x7E).unwrap();
        map.add_range(0x391, 0x3A9).unwrap();
        for ac in (0x20..=0x7E).chain(0x391..=0x3A9) {
            let tc = map.char_to_index(ac).unwrap();
            assert_eq!(map.index_to_char(tc), Some(ac));
        }
    }

    #[test]
    fn test_add_range_invalid() {
        let mut map = latin_map();
        assert!(map.add_range(0x5A, 0x41).is_err());
        // 失敗してもマップは変化しない
        assert_eq!(map.num_ranges(), 1);
        assert_eq!(map.char_to_index(0x41), Some(1));
    }

    #[test]
    fn test_append_order_is_authoritative() {
        // 降順に追加してもラベルは追加順に割り当てられる
        let mut map = AlphaMap::new();
        map.add_range(0x61, 0x7A).unwrap();
        map.add_range(0x41, 0x5A).unwrap();
        assert_eq!(map.char_to_index(0x61), Some(1));
        assert_eq!(map.char_to_index(0x41), Some(27));
        assert_eq!(map.index_to_char(1), Some(0x61));
        assert_eq!(map.index_to_char(27), Some(0x41));
    }

    #[test]
    fn test_overlapping_ranges_resolve_to_first() {
        let mut map = AlphaMap::new();
        map.add_range(0x41, 0x5A).unwrap();
        map.add_range(0x50, 0x5F).unwrap();
        // 重なった文字は先に追加された区間のラベルに写る
        assert_eq!(map.char_to_index(0x50), Some(16));
        // 二つ目の区間にしかない文字は二つ目の区間のラベルに写る
        assert_eq!(map.char_to_index(0x5B), Some(38));
        // ラベル27以降は二つ目の区間に復号される
        assert_eq!(map.index_to_char(27), Some(0x50));
    }

    #[test]
    fn test_label_space_exhaustion() {
        let mut map = AlphaMap::new();
        map.add_range(0x100, 0x2FF).unwrap();
        assert_eq!(map.char_to_index(0x100), Some(1));
        assert_eq!(map.char_to_index(0x1FD), Some(254));
        // 255は番兵、それ以降はラベル空間の外
        assert_eq!(map.char_to_index(0x1FE), None);
        assert_eq!(map.char_to_index(0x1FF), None);
        assert_eq!(map.index_to_char(TRIE_CHAR_MAX), None);
    }

    #[test]
    fn test_char_to_index_str() {
        let map = latin_map();
        let mapped = map.char_to_index_str(&[0x41, 0x42, 0x61, 0x5A, 0]);
        assert_eq!(mapped, vec![1, 2, TRIE_CHAR_MAX, 26, TRIE_CHAR_TERM]);
    }

    #[test]
    fn test_index_to_char_str() {
        let map = latin_map();
        let mapped = map.index_to_char_str(&[1, 2, 30, 26, TRIE_CHAR_TERM]);
        assert_eq!(mapped, vec![0x41, 0x42, ALPHA_CHAR_ERROR, 0x5A, 0]);
    }

    #[test]
    fn test_str_round_trip() {
        let map = latin_map();
        let input = [0x48, 0x45, 0x4C, 0x4C, 0x4F, 0];
        let mapped = map.char_to_index_str(&input);
        assert_eq!(mapped.len(), input.len());
        let back = map.index_to_char_str(&mapped);
        assert_eq!(back, input);
    }

    #[test]
    fn test_str_without_terminator() {
        let map = latin_map();
        let mapped = map.char_to_index_str(&[0x41, 0x42]);
        assert_eq!(mapped, vec![1, 2, TRIE_CHAR_TERM]);
    }
}
