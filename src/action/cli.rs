use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::config::config::{Cli, validate_exclude_patterns};
use crate::action::interactive::process_interactive_mode;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::Error;
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::{BatchReport, ConversionOptions};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> Result<BatchReport, Error> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode(args)
    }
}

pub fn process_cli_mode(args: Vec<String>) -> Result<BatchReport, Error> {
    let cli = Cli::parse_from(args);
    setup_logging(cli.log_level.as_deref().unwrap_or("info"))?;

    // 選擇配置適配器
    let config_port: Box<dyn ConfigPort> = if cli.uses_default_config() {
        log::info!("未提供選項參數，使用預設配置：wkhtmltopdf 引擎，SimSun 字型，styles.css 樣式表");
        Box::new(DefaultConfigAdapter::new(cli.input.clone(), cli.output.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let exclude = self.cli.exclude.clone().unwrap_or_default();
        validate_exclude_patterns(&exclude)?;

        let defaults = ConversionOptions::default();
        let options = ConversionOptions {
            tool: self.cli.pandoc.clone().unwrap_or(defaults.tool),
            pdf_engine: self.cli.pdf_engine.clone().unwrap_or(defaults.pdf_engine),
            main_font: self.cli.main_font.clone().unwrap_or(defaults.main_font),
            stylesheet: self.cli.css.clone().unwrap_or(defaults.stylesheet),
        };
        log::info!(
            "使用自訂配置：pandoc={}, pdf_engine={}, main_font={}, css={}, exclude={:?}",
            options.tool, options.pdf_engine, options.main_font, options.stylesheet, exclude
        );

        Ok(AppConfig {
            source_dir: PathBuf::from(&self.cli.input),
            destination_dir: PathBuf::from(&self.cli.output),
            options,
            exclude,
            no_progress: self.cli.no_progress,
        })
    }
}
