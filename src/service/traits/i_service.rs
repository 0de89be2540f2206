use std::ffi::OsString;
use std::path::Path;
use regex::RegexSet;
use crate::error::Error;
use crate::models::conversion::{ConversionOutcome, ConversionRequest};

// File 服務接口，負責列出來源目錄中的 Markdown 檔案
pub trait FileServiceTrait: Send + Sync {
    /// 列出來源目錄下（不遞迴）以 `.md` 結尾的檔名
    /// # 參數
    /// - source_dir: 已驗證的來源目錄
    /// - exclude_set: 排除模式，符合者略過
    /// # 回傳
    /// - 檔名列表（保留原始位元組），順序不保證
    fn list_markdown_files(&self, source_dir: &Path, exclude_set: &RegexSet) -> Result<Vec<OsString>, Error>;
}

// 轉換服務接口，負責呼叫外部轉換工具
pub trait ConverterServiceTrait: Send + Sync {
    /// 轉換單一檔案
    /// # 回傳
    /// - 工具執行失敗或輸出無法解碼時仍回傳 Ok，並在結果中標記失敗
    /// - 無法啟動工具等其他錯誤回傳 Err，由上層終止批次
    fn convert(&self, request: ConversionRequest) -> Result<ConversionOutcome, Error>;
}
