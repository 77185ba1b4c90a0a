//! ファイルアクセス層
//!
//! このモジュールは、ディレクトリ、名前、拡張子からファイルを解決して開く
//! 薄い層を提供します。開けたファイルはシーク可能なバイトストリームとして
//! 呼び出し側に渡されます。

use std::fs::File;
use std::path::Path;

/// ファイルを開く際の意図
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpenMode {
    /// 読み込み用に開く
    Read,

    /// 書き込み用に開く(存在しなければ作成し、存在すれば切り詰める)
    Write,
}

/// `dir`以下の`name.ext`を解決して開きます。
///
/// # 引数
///
/// * `dir` - ファイルを探すディレクトリ
/// * `name` - ファイル名(拡張子を除く)
/// * `ext` - 拡張子
/// * `mode` - 開く際の意図
///
/// # 戻り値
///
/// 開けた場合は`Some(File)`、開けなかった場合は`None`。
pub fn open_stream(dir: &Path, name: &str, ext: &str, mode: OpenMode) -> Option<File> {
    let path = dir.join(format!("{name}.{ext}"));
    match mode {
        OpenMode::Read => File::open(path),
        OpenMode::Write => File::create(path),
    }
    .ok()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Read;

    use super::*;

    #[test]
    fn test_open_stream_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alphabet.def"), "[41,5a]\n").unwrap();

        let mut file = open_stream(dir.path(), "alphabet", "def", OpenMode::Read).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "[41,5a]\n");
    }

    #[test]
    fn test_open_stream_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_stream(dir.path(), "missing", "def", OpenMode::Read).is_none());
    }

    #[test]
    fn test_open_stream_write() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_stream(dir.path(), "out", "bin", OpenMode::Write).is_some());
        assert!(dir.path().join("out.bin").exists());
    }
}
