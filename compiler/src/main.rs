//! 文字範囲定義テキストをバイナリ形式にコンパイルするユーティリティ
//!
//! このバイナリは、テキスト形式の文字範囲定義を読み込み、トライ辞書が
//! 参照するバイナリのアルファベットマップブロックとして出力します。

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use alphamap::AlphaMap;
use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(
    name = "compile",
    about = "A program to compile an alphabet definition text into the binary alpha-map block."
)]
struct Args {
    /// Alphabet definition text to be compiled.
    #[clap(short = 'i', long)]
    alphabet_in: PathBuf,

    /// File to which the binary alpha-map block is output.
    #[clap(short = 'o', long)]
    alphamap_out: PathBuf,
}

/// メイン関数
///
/// 範囲定義テキストを読み込み、バイナリブロックとして書き出します。
///
/// # 戻り値
///
/// 実行が成功した場合は`Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the alphabet definition...");
    let map = AlphaMap::from_reader(BufReader::new(File::open(args.alphabet_in)?))?;
    eprintln!("Loaded {} ranges.", map.num_ranges());

    eprintln!("Writing the alpha map...: {:?}", &args.alphamap_out);
    let mut wtr = BufWriter::new(File::create(args.alphamap_out)?);
    map.write_bin(&mut wtr)?;
    wtr.flush()?;

    Ok(())
}
