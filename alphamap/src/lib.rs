//! # alphamap
//!
//! トライベースの辞書エンジンのための、文字コードとアルファベットラベルの
//! 双方向マッピングを提供します。
//!
//! ## 概要
//!
//! アプリケーションは受理する文字集合を、コードポイントの閉区間の列として
//! 定義します。このライブラリは、定義された順序のまま各区間を連結し、
//! 1から始まる稠密なラベル空間([`TrieChar`])に詰め込みます。ラベル`0`は
//! 文字列終端のコードポイント`0`のために予約されています。
//!
//! 稠密なラベルは、下流の辞書エンジンがトライのエッジラベルとして使うことを
//! 想定しています。巨大な疎テーブルを持たず、区間の列を順に歩くだけで
//! 双方向の変換ができます。
//!
//! ## 主な機能
//!
//! - **双方向変換**: コードポイントとラベルの相互変換([`AlphaMap::char_to_index`]、
//!   [`AlphaMap::index_to_char`])と、0終端列の一括変換
//! - **テキスト形式**: 人手で編集可能な`[<hex>,<hex>]`形式の範囲定義の読み込み
//! - **バイナリ形式**: シグネチャ付き固定レイアウトブロックの読み書きと、
//!   位置を破壊しないフォーマット探査
//! - **ゼロコピー埋め込み**: rkyvによるアーカイブ表現([`ArchivedAlphaMap`])
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use alphamap::AlphaMap;
//!
//! let mut map = AlphaMap::new();
//! map.add_range(0x41, 0x5A)?; // A-Z
//! map.add_range(0x61, 0x7A)?; // a-z
//!
//! assert_eq!(map.char_to_index(0x41), Some(1));
//! assert_eq!(map.char_to_index(0x5A), Some(26));
//! assert_eq!(map.char_to_index(0x61), Some(27));
//! assert_eq!(map.index_to_char(27), Some(0x61));
//!
//! // 定義された区間の外は写像されない
//! assert_eq!(map.char_to_index(0x30), None);
//! # Ok(())
//! # }
//! ```

/// 文字コードとラベルの相互変換
pub mod alpha_map;

/// 文字コードとトライラベルの型定義
pub mod chars;

/// エラー型の定義
pub mod errors;

/// ファイルアクセス層
pub mod fileio;


// Re-exports
pub use alpha_map::{AlphaMap, AlphaRange, ArchivedAlphaMap, ArchivedAlphaRange, ALPHA_MAP_SIGNATURE};
pub use chars::{AlphaChar, TrieChar, ALPHA_CHAR_ERROR, TRIE_CHAR_MAX, TRIE_CHAR_TERM};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
