use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::ConversionOptions;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器
pub struct DefaultConfigAdapter {
    input: String,
    output: String,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            source_dir: PathBuf::from(&self.input),
            destination_dir: PathBuf::from(&self.output),
            options: ConversionOptions::default(),
            exclude: Vec::new(),
            no_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_uses_stock_converter_options() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new("notes".into(), "p".into())));
        let config = service.get_config().unwrap();
        assert_eq!(config.source_dir, PathBuf::from("notes"));
        assert_eq!(config.destination_dir, PathBuf::from("p"));
        assert_eq!(config.options, ConversionOptions::default());
        assert!(config.exclude.is_empty());
    }
}
