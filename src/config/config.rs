use clap::Parser;
use std::io;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "md_to_pdf",
    about = "將目錄中的 Markdown 檔案批次轉換為 PDF",
    long_about = "一個呼叫 pandoc 將目錄中的 Markdown 檔案逐一轉換為 PDF 的工具。\n僅指定來源目錄與 -o 時使用預設配置（wkhtmltopdf 引擎、SimSun 字型、styles.css 樣式表）。不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 來源目錄，只處理其中（不含子目錄）以 .md 結尾的檔案
    pub input: String,
    #[arg(short, long, default_value = "output")]
    pub output: String,
    /// pandoc 可執行檔路徑
    #[arg(long)]
    pub pandoc: Option<String>,
    #[arg(long)]
    pub pdf_engine: Option<String>,
    #[arg(long)]
    pub main_font: Option<String>,
    /// 傳給 pandoc -c 的樣式表
    #[arg(long)]
    pub css: Option<String>,
    /// 以逗號分隔的排除模式，例如 draft*,README.md
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, value_parser = ["info", "warn", "error"])]
    pub log_level: Option<String>,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

impl Cli {
    /// 是否只提供了 input 與 output
    pub fn uses_default_config(&self) -> bool {
        self.pandoc.is_none()
            && self.pdf_engine.is_none()
            && self.main_font.is_none()
            && self.css.is_none()
            && self.exclude.is_none()
            && !self.no_progress
            && self.log_level.is_none()
    }
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_exclude_patterns(exclude: &[String]) -> io::Result<()> {
    for pattern in exclude {
        if !is_valid_pattern(pattern) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的排除模式: {}", pattern)));
        }
    }
    Ok(())
}
