use std::io;
use std::path::PathBuf;
use crate::error::Error;
use crate::models::conversion::{BatchReport, ConversionOptions};

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub options: ConversionOptions,
    pub exclude: Vec<String>,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> Result<BatchReport, Error>;
}
