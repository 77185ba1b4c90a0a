//! 文字コードとトライラベルの型定義
//!
//! このモジュールは、アプリケーション側の文字コード([`AlphaChar`])と、
//! トライのエッジラベルとして使われる内部の稠密な番号([`TrieChar`])を
//! 定義します。どちらも値`0`を文字列終端として予約し、最大値を変換失敗の
//! 番兵として予約します。

/// アプリケーション側の文字コード(32ビットのコードポイント)
///
/// 値`0`は文字列終端を表す予約値です。
pub type AlphaChar = u32;

/// 変換失敗を表す[`AlphaChar`]の番兵値
///
/// 文字列変換APIは、対応するコードポイントを持たないラベルに対して
/// この値を出力に書き込みます。
pub const ALPHA_CHAR_ERROR: AlphaChar = AlphaChar::MAX;

/// トライのエッジラベルとして使われる稠密なアルファベット番号
///
/// 値`0`([`TRIE_CHAR_TERM`])は文字列終端、[`TRIE_CHAR_MAX`]は
/// アルファベット外を表す予約値です。有効なラベルは`1..=254`に
/// 割り当てられます。
pub type TrieChar = u8;

/// 文字列終端を表す[`TrieChar`]の予約値
pub const TRIE_CHAR_TERM: TrieChar = 0;

/// アルファベット外を表す[`TrieChar`]の番兵値
pub const TRIE_CHAR_MAX: TrieChar = TrieChar::MAX;
