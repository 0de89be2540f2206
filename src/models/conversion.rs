use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// 外部轉換工具的參數，原樣傳遞給 pandoc
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    pub tool: String,
    pub pdf_engine: String,
    pub main_font: String,
    pub stylesheet: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            tool: "pandoc".to_string(),
            pdf_engine: "wkhtmltopdf".to_string(),
            main_font: "SimSun".to_string(),
            stylesheet: "styles.css".to_string(),
        }
    }
}

/// 單一 Markdown 檔案的轉換請求
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionRequest {
    /// 由來源檔名推導輸出路徑：相同主檔名，副檔名改為 .pdf
    /// 檔名以 OsStr 處理，非 UTF-8 檔名也能原樣對應
    pub fn new(source_dir: &Path, file_name: impl AsRef<OsStr>, destination_dir: &Path) -> Self {
        let file_name = file_name.as_ref();
        let mut pdf_name = Path::new(file_name)
            .file_stem()
            .unwrap_or(file_name)
            .to_os_string();
        pdf_name.push(".pdf");
        ConversionRequest {
            source: source_dir.join(file_name),
            destination: destination_dir.join(pdf_name),
        }
    }

    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .unwrap_or(self.source.as_os_str())
            .to_string_lossy()
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub request: ConversionRequest,
    pub success: bool,
    pub error_detail: Option<String>,
}

impl ConversionOutcome {
    pub fn succeeded(request: ConversionRequest) -> Self {
        ConversionOutcome { request, success: true, error_detail: None }
    }

    pub fn failed(request: ConversionRequest, detail: impl Into<String>) -> Self {
        ConversionOutcome { request, success: false, error_detail: Some(detail.into()) }
    }
}

#[derive(Debug, Clone)]
pub struct BatchInput {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub exclude: Vec<String>,
    pub no_progress: bool,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub destination_dir: PathBuf,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    pub fn new(destination_dir: PathBuf) -> Self {
        BatchReport { destination_dir, ..Default::default() }
    }

    pub fn record(&mut self, outcome: ConversionOutcome) {
        self.attempted += 1;
        if outcome.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}
