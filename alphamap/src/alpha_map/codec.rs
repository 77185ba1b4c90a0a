//! アルファベットマップのバイナリ入出力
//!
//! このモジュールは、[`AlphaMap`]を固定レイアウトのバイナリブロックとして
//! 読み書きします。整数はすべてリトルエンディアンの32ビットです。
//!
//! # レイアウト
//!
//! | フィールド | 型 | 意味 |
//! |---|---|---|
//! | signature | u32 | ブロックの識別子([`ALPHA_MAP_SIGNATURE`]) |
//! | num_ranges | u32 | 後続する区間の数 |
//! | (begin, end) × num_ranges | u32, u32 | 区間(追加順) |
//!
//! 読み込みはシグネチャの照合から始まり、一致しない場合はストリーム位置を
//! 巻き戻して「このブロックではない」ことを報告します。これにより、より
//! 大きなコンテナの中からこのブロックを、他の読み手のためのバイトを消費
//! せずに探り当てることができます。

use std::io::{Read, Seek, SeekFrom, Write};

use bincode::config::{self, Fixint, LittleEndian};

use crate::alpha_map::{AlphaMap, AlphaRange};
use crate::errors::Result;

/// アルファベットマップブロックを識別するシグネチャ
///
/// この定数は既存のバイナリ形式との互換性を保つため変更されることは
/// 想定されていません。
pub const ALPHA_MAP_SIGNATURE: u32 = 0xD9FC_D9FC;

/// シリアライゼーションの共通bincode設定を取得します。
///
/// リトルエンディアンと固定長整数エンコーディングを使用します。
const fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}

impl AlphaMap {
    /// リーダーの現在位置からアルファベットマップブロックを読み込みます。
    ///
    /// 先頭の32ビットがシグネチャと一致しない場合は`Ok(None)`を返し、
    /// ストリーム位置を読み込み開始時点まで巻き戻します。一致した場合は
    /// 区間数と各区間を読み込み、構築したマップを返します。区間の中身は
    /// エンコード側を信頼し、再検証しません。
    ///
    /// # 引数
    ///
    /// * `rdr` - ブロックを読み込むリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(map))` - ブロックを読み込めた場合
    /// * `Ok(None)` - シグネチャが一致しなかった場合。ストリーム位置は
    ///   変化しません。
    ///
    /// # エラー
    ///
    /// シグネチャ一致後の読み込みに失敗した場合、またはストリーム位置の
    /// 操作に失敗した場合にエラーを返します。
    pub fn read_bin<R>(rdr: &mut R) -> Result<Option<Self>>
    where
        R: Read + Seek,
    {
        let save_pos = rdr.stream_position()?;
        let mut sig = [0u8; 4];
        if rdr.read_exact(&mut sig).is_err() || sig != ALPHA_MAP_SIGNATURE.to_le_bytes() {
            rdr.seek(SeekFrom::Start(save_pos))?;
            return Ok(None);
        }

        let config = bincode_config();
        let num_ranges: u32 = bincode::decode_from_std_read(rdr, config)?;
        let mut map = Self::new();
        for _ in 0..num_ranges {
            let range: AlphaRange = bincode::decode_from_std_read(rdr, config)?;
            map.ranges.push(range);
        }
        Ok(Some(map))
    }

    /// アルファベットマップブロックをライターに書き出します。
    ///
    /// シグネチャ、区間数、各区間を追加順に書き出します。途中の書き込みに
    /// 失敗した場合はその時点で中断します。出力先には不完全なブロックが
    /// 残るため、呼び出し側はそれ以降のストリームを破棄する必要があります。
    ///
    /// # 引数
    ///
    /// * `wtr` - ブロックを書き出すライター
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合にエラーを返します。
    pub fn write_bin<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        let config = bincode_config();
        bincode::encode_into_std_write(ALPHA_MAP_SIGNATURE, wtr, config)?;
        bincode::encode_into_std_write(u32::try_from(self.ranges.len())?, wtr, config)?;
        for range in &self.ranges {
            bincode::encode_into_std_write(range, wtr, config)?;
        }
        Ok(())
    }
}
