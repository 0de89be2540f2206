use dialoguer::{Confirm, Input};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::config::validate_exclude_patterns;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::Error;
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::{BatchReport, ConversionOptions};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> Result<BatchReport, Error> {
    setup_logging("info")?;
    println!("=== 歡迎使用互動模式 ===");
    let input = get_input_path()?;
    let output = get_output_path()?;
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：wkhtmltopdf 引擎，SimSun 字型，styles.css 樣式表");
        Box::new(DefaultConfigAdapter::new(input, output))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, output))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

fn prompt_error(e: dialoguer::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（wkhtmltopdf 引擎、SimSun 字型、styles.css 樣式表）")
        .default(true)
        .interact()
        .map_err(prompt_error)
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 Markdown 來源目錄（例如：./docs）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("目錄 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(prompt_error)
}

pub fn get_output_path() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入輸出目錄（例如：./pdf，預設為 output）")
        .default("output".to_string())
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_with_default(prompt: &str, default: String) -> io::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(prompt_error)
}

pub fn get_conversion_options() -> io::Result<ConversionOptions> {
    let defaults = ConversionOptions::default();
    Ok(ConversionOptions {
        tool: prompt_with_default("pandoc 可執行檔", defaults.tool)?,
        pdf_engine: prompt_with_default("PDF 引擎", defaults.pdf_engine)?,
        main_font: prompt_with_default("主要字型", defaults.main_font)?,
        stylesheet: prompt_with_default("CSS 樣式表", defaults.stylesheet)?,
    })
}

pub fn get_exclude_patterns() -> io::Result<Vec<String>> {
    let exclude = Input::new()
        .with_prompt("輸入排除模式（例如：draft*,README.md，預設為空）")
        .default(String::new())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>();
    validate_exclude_patterns(&exclude)?;
    Ok(exclude)
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: String,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let options = get_conversion_options()?;
        let exclude = get_exclude_patterns()?;

        Ok(AppConfig {
            source_dir: PathBuf::from(&self.input),
            destination_dir: PathBuf::from(&self.output),
            options,
            exclude,
            no_progress: false,
        })
    }
}
