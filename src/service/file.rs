use std::ffi::OsString;
use std::path::Path;
use regex::RegexSet;
use walkdir::WalkDir;
use log::{debug, info, warn};
use crate::error::Error;
use crate::service::traits::i_service::FileServiceTrait;

const MARKDOWN_SUFFIX: &str = ".md";

/// 檔案服務，負責列舉來源目錄
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn list_markdown_files(&self, source_dir: &Path, exclude_set: &RegexSet) -> Result<Vec<OsString>, Error> {
        let mut files = Vec::new();
        let walker = WalkDir::new(source_dir).min_depth(1).max_depth(1).follow_links(true);
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(Error::Unclassified(format!("讀取目錄失敗：{}", e)));
                }
                Err(e) => {
                    warn!("略過無法讀取的項目：{}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            // 比對與日誌使用 lossy 字串，回傳值保留原始檔名
            let display_name = entry.file_name().to_string_lossy();
            if !is_markdown_file(&display_name) {
                continue;
            }
            if exclude_set.is_match(&display_name) {
                debug!("依排除模式略過：{}", display_name);
                continue;
            }
            files.push(entry.file_name().to_os_string());
        }
        info!("在 {} 中找到 {} 個 Markdown 檔案", source_dir.display(), files.len());
        Ok(files)
    }
}

/// 副檔名比對區分大小寫
pub fn is_markdown_file(file_name: &str) -> bool {
    file_name.ends_with(MARKDOWN_SUFFIX)
}
