use std::io::{self, Write};
use std::time::Instant;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use regex::RegexSet;

/// 設定全域日誌，只在程式入口呼叫一次
pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = parse_log_level(log_level);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

pub fn parse_log_level(log_level: &str) -> log::LevelFilter {
    match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress || total == 0 {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            let style = ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                .map(|s| s.progress_chars("##-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(style);
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn start_file(&self, index: usize, total: usize, file_name: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(format!("轉換檔案 {}/{}：{}", index + 1, total, file_name));
    }

    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self, succeeded: usize, failed: usize) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        self.pb.finish_with_message(format!(
            "完成，成功 {} 個，失敗 {} 個，耗時 {:.1} 秒",
            succeeded, failed, elapsed
        ));
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

/// 將萬用字元模式（如 `draft*`）轉為對完整檔名比對的 RegexSet
pub fn create_exclude_set(exclude: &[String]) -> RegexSet {
    let patterns: Vec<_> = exclude
        .iter()
        .map(|p| format!("^{}$", regex::escape(p).replace("\\*", ".*")))
        .collect();

    RegexSet::new(&patterns).unwrap_or_else(|e| {
        log::warn!("無效的排除模式: {}，使用空集作為回退", e);
        RegexSet::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level("warn"), log::LevelFilter::Warn);
        assert_eq!(parse_log_level("verbose"), log::LevelFilter::Info);
    }

    #[test]
    fn exclude_patterns_match_whole_file_names() {
        let set = create_exclude_set(&["draft*".to_string(), "README.md".to_string()]);
        assert!(set.is_match("draft-2024.md"));
        assert!(set.is_match("README.md"));
        assert!(!set.is_match("final-draft.md"));
        assert!(!set.is_match("READMExmd"));
    }

    #[test]
    fn empty_exclude_list_matches_nothing() {
        assert!(!create_exclude_set(&[]).is_match("a.md"));
    }
}
