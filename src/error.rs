use std::fmt;
use std::io;
use std::path::PathBuf;

/// 批次轉換過程中可能出現的錯誤種類
#[derive(Debug)]
pub enum Error {
    /// 來源目錄不存在或不是目錄，或輸出路徑存在但不是目錄
    InvalidPath { path: PathBuf, reason: String },
    /// 轉換工具以非零狀態結束，內容為其標準錯誤輸出。
    /// `Display` 會去除結尾空白，原始內容保留在 `stderr`
    ExternalTool { status: Option<i32>, stderr: String },
    /// 子程序輸出無法以 UTF-8 解碼
    Encoding(String),
    /// 其他未分類的錯誤
    Unclassified(String),
    Io(io::Error),
}

impl Error {
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// 單一檔案層級的錯誤，發生時批次繼續處理下一個檔案
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ExternalTool { .. } | Error::Encoding(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPath { path, reason } => {
                write!(f, "路徑無效：{}（{reason}）", path.display())
            }
            Error::ExternalTool { stderr, .. } => write!(f, "{}", stderr.trim_end()),
            Error::Encoding(e) => write!(f, "子程序輸出無法以 UTF-8 解碼: {e}"),
            Error::Unclassified(e) => write!(f, "{e}"),
            Error::Io(e) => write!(f, "IO 錯誤: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Error::Encoding(e.to_string())
    }
}
