//! 文字範囲定義テキストの読み込み
//!
//! このモジュールは、人手で編集可能なテキスト形式の文字範囲定義を読み込んで
//! [`AlphaMap`]を構築するローダーを提供します。
//!
//! 定義は行単位で、意味を持つ行は`[<begin>,<end>]`の形式です。`begin`と
//! `end`は16進数の文字コードで、括弧とカンマの前後の空白は無視されます。
//! 形式に一致しない行(空行、コメント、その他)は黙って読み飛ばされます。

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::alpha_map::AlphaMap;
use crate::chars::AlphaChar;
use crate::errors::Result;
use crate::fileio::{self, OpenMode};

impl AlphaMap {
    /// リーダーから文字範囲定義テキストを読み込み、新しいインスタンスを構築します。
    ///
    /// 解釈できない行は黙って読み飛ばします。`begin > end`の行は警告を
    /// 出力して読み飛ばし、読み込み自体は継続します。行の長さに上限は
    /// 設けていません。
    ///
    /// # 引数
    ///
    /// * `rdr` - 範囲定義テキストのリーダー
    ///
    /// # 戻り値
    ///
    /// 有効な行から構築されたマップ。有効な行が一つもなくても成功します。
    ///
    /// # エラー
    ///
    /// リーダーからの読み込みに失敗した場合にエラーを返します。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut map = Self::new();
        for line in rdr.lines() {
            let line = line?;
            let Some((begin, end)) = parse_range(&line) else {
                continue;
            };
            if begin > end {
                log::warn!("Range begin ({begin:#x}) > range end ({end:#x}), skipped");
                continue;
            }
            map.add_range(begin, end)?;
        }
        Ok(map)
    }

    /// ファイルアクセス層を通じて解決したファイルから範囲定義を読み込みます。
    ///
    /// # 引数
    ///
    /// * `dir` - ファイルを探すディレクトリ
    /// * `name` - ファイル名(拡張子を除く)
    /// * `ext` - 拡張子
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(map))` - ファイルを開いて読み込めた場合
    /// * `Ok(None)` - ファイルを開けなかった場合
    ///
    /// # エラー
    ///
    /// 開いたファイルからの読み込みに失敗した場合にエラーを返します。
    pub fn from_file<P>(dir: P, name: &str, ext: &str) -> Result<Option<Self>>
    where
        P: AsRef<Path>,
    {
        let Some(file) = fileio::open_stream(dir.as_ref(), name, ext, OpenMode::Read) else {
            return Ok(None);
        };
        Ok(Some(Self::from_reader(BufReader::new(file))?))
    }
}

/// `[<hex>,<hex>]`形式の行を解釈します。
///
/// 終端の`]`より後の内容は無視されます。形式に一致しない行は`None`です。
fn parse_range(line: &str) -> Option<(AlphaChar, AlphaChar)> {
    let rest = line.trim_start().strip_prefix('[')?;
    let (begin, rest) = rest.split_once(',')?;
    let (end, _) = rest.split_once(']')?;
    let begin = AlphaChar::from_str_radix(begin.trim(), 16).ok()?;
    let end = AlphaChar::from_str_radix(end.trim(), 16).ok()?;
    Some((begin, end))
}
