use std::fs;
use std::path::Path;
use log::error;
use crate::error::Error;

/// 確認來源路徑存在且為目錄
pub fn ensure_source_directory(path: &Path) -> Result<&Path, Error> {
    if !path.is_dir() {
        let reason = if path.exists() { "不是目錄" } else { "不存在" };
        error!("來源路徑無效：{}（{}）", path.display(), reason);
        return Err(Error::invalid_path(path, reason));
    }
    Ok(path)
}

/// 確保輸出目錄存在，不存在時連同中間目錄一併建立
pub fn ensure_destination_directory(path: &Path) -> Result<&Path, Error> {
    if let Err(e) = fs::create_dir_all(path) {
        // create_dir_all 遇到同名檔案時會失敗，交由下方判斷回報 InvalidPath
        if !path.exists() {
            return Err(Error::Io(e));
        }
    }
    if !path.is_dir() {
        error!("輸出路徑存在但不是目錄：{}", path.display());
        return Err(Error::invalid_path(path, "已存在但不是目錄"));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn source_must_be_an_existing_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(ensure_source_directory(tmp.path()).is_ok());

        let missing = tmp.path().join("missing");
        assert!(matches!(ensure_source_directory(&missing), Err(Error::InvalidPath { .. })));

        let file = tmp.path().join("file.md");
        fs::write(&file, "# hi").unwrap();
        assert!(matches!(ensure_source_directory(&file), Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn destination_is_created_with_parents_and_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("a").join("b");
        ensure_destination_directory(&dest).unwrap();
        assert!(dest.is_dir());

        fs::write(dest.join("keep.txt"), "x").unwrap();
        ensure_destination_directory(&dest).unwrap();
        assert!(dest.join("keep.txt").exists());
    }

    #[test]
    fn destination_that_is_a_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("out");
        fs::write(&dest, "not a dir").unwrap();
        assert!(matches!(ensure_destination_directory(&dest), Err(Error::InvalidPath { .. })));
    }
}
