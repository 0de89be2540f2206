use log::{info, warn};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::Error;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchInput, BatchReport, ConversionRequest};
use crate::service::file::FileService;
use crate::service::pandoc::PandocService;
use crate::service::path::{ensure_destination_directory, ensure_source_directory};
use crate::service::traits::i_service::{ConverterServiceTrait, FileServiceTrait};
use crate::utils::utils::{create_exclude_set, create_progress_bar};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    converter: Box<dyn ConverterServiceTrait>,
}

impl ConversionFacade {
    pub fn new(file_service: Box<dyn FileServiceTrait>, converter: Box<dyn ConverterServiceTrait>) -> Self {
        ConversionFacade { file_service, converter }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: BatchInput) -> Result<BatchReport, Error> {
        let source_dir = ensure_source_directory(&input.source_dir)?;
        let destination_dir = ensure_destination_directory(&input.destination_dir)?;
        info!(
            "開始轉換，來源目錄：{}，輸出目錄：{}",
            source_dir.display(),
            destination_dir.display()
        );

        let exclude_set = create_exclude_set(&input.exclude);
        let files = self.file_service.list_markdown_files(source_dir, &exclude_set)?;
        let mut report = BatchReport::new(destination_dir.to_path_buf());
        if files.is_empty() {
            warn!("來源目錄中沒有 Markdown 檔案可處理");
            return Ok(report);
        }

        let total = files.len();
        let pb = create_progress_bar(total as u64, input.no_progress);
        for (i, file_name) in files.iter().enumerate() {
            pb.start_file(i, total, &file_name.to_string_lossy());
            let request = ConversionRequest::new(source_dir, file_name, destination_dir);
            let outcome = self.converter.convert(request)?;
            report.record(outcome);
            pb.inc();
        }
        pb.finish(report.succeeded, report.failed);

        info!(
            "轉換結束，共嘗試 {} 個檔案，成功 {} 個，失敗 {} 個",
            report.attempted, report.succeeded, report.failed
        );
        Ok(report)
    }
}

/// 以實際的檔案與 pandoc 服務執行批次轉換
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> Result<BatchReport, Error> {
        let facade = ConversionFacade::new(
            Box::new(FileService::new()),
            Box::new(PandocService::new(config.options)),
        );
        facade.execute_conversion(BatchInput {
            source_dir: config.source_dir,
            destination_dir: config.destination_dir,
            exclude: config.exclude,
            no_progress: config.no_progress,
        })
    }
}
