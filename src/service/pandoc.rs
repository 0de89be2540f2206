use std::ffi::OsString;
use std::process::{Command, Output};
use log::{error, info};
use crate::error::Error;
use crate::models::conversion::{ConversionOptions, ConversionOutcome, ConversionRequest};
use crate::service::traits::i_service::ConverterServiceTrait;

/// Pandoc 轉換服務，每個檔案啟動一次外部程序
pub struct PandocService {
    options: ConversionOptions,
}

impl PandocService {
    pub fn new(options: ConversionOptions) -> Self {
        PandocService { options }
    }

    /// 組出完整的命令列參數（不含工具本身）
    pub fn build_args(&self, request: &ConversionRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            request.source.clone().into(),
            "-f".into(),
            "markdown".into(),
            "-t".into(),
            "pdf".into(),
            "-o".into(),
            request.destination.clone().into(),
        ];
        args.push(format!("--pdf-engine={}", self.options.pdf_engine).into());
        args.push("-V".into());
        args.push(format!("mainfont={}", self.options.main_font).into());
        args.push("--standalone".into());
        args.push("--listings".into());
        args.push("--wrap=none".into());
        args.push("-c".into());
        args.push(self.options.stylesheet.clone().into());
        args
    }

    pub fn build_command(&self, request: &ConversionRequest) -> Command {
        let mut cmd = Command::new(&self.options.tool);
        cmd.args(self.build_args(request));
        cmd
    }
}

impl ConverterServiceTrait for PandocService {
    fn convert(&self, request: ConversionRequest) -> Result<ConversionOutcome, Error> {
        let file_name = request.file_name();
        let output = self
            .build_command(&request)
            .output()
            .map_err(|e| Error::Unclassified(format!("無法執行 {}: {}", self.options.tool, e)))?;

        match check_output(output) {
            Ok(()) => {
                info!("已將 {} 轉換為 PDF", file_name);
                Ok(ConversionOutcome::succeeded(request))
            }
            Err(e) if e.is_recoverable() => {
                error!("轉換 {} 失敗: {}", file_name, e);
                // 結果保留完整的標準錯誤輸出，日誌行才去除結尾換行
                let detail = match e {
                    Error::ExternalTool { stderr, .. } => stderr,
                    other => other.to_string(),
                };
                Ok(ConversionOutcome::failed(request, detail))
            }
            Err(e) => Err(e),
        }
    }
}

/// 以 UTF-8 解碼子程序輸出並檢查結束狀態
fn check_output(output: Output) -> Result<(), Error> {
    String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;
    if !output.status.success() {
        return Err(Error::ExternalTool {
            status: output.status.code(),
            stderr,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn request() -> ConversionRequest {
        ConversionRequest::new(Path::new("docs"), "report.md", Path::new("out"))
    }

    #[test]
    fn command_line_matches_pandoc_invocation() {
        let service = PandocService::new(ConversionOptions::default());
        let args: Vec<String> = service
            .build_args(&request())
            .into_iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        let source = Path::new("docs").join("report.md").to_string_lossy().to_string();
        let destination = Path::new("out").join("report.pdf").to_string_lossy().to_string();
        assert_eq!(
            args,
            vec![
                source.as_str(),
                "-f",
                "markdown",
                "-t",
                "pdf",
                "-o",
                destination.as_str(),
                "--pdf-engine=wkhtmltopdf",
                "-V",
                "mainfont=SimSun",
                "--standalone",
                "--listings",
                "--wrap=none",
                "-c",
                "styles.css",
            ]
        );
    }

    #[test]
    fn options_are_passed_through() {
        let service = PandocService::new(ConversionOptions {
            tool: "/opt/pandoc".into(),
            pdf_engine: "xelatex".into(),
            main_font: "Noto Serif".into(),
            stylesheet: "print.css".into(),
        });
        let cmd = service.build_command(&request());
        assert_eq!(cmd.get_program(), "/opt/pandoc");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert!(args.contains(&"--pdf-engine=xelatex".to_string()));
        assert!(args.contains(&"mainfont=Noto Serif".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("print.css"));
    }

    #[test]
    fn missing_tool_is_not_a_per_file_failure() {
        let service = PandocService::new(ConversionOptions {
            tool: "md-to-pdf-no-such-tool".into(),
            ..ConversionOptions::default()
        });
        let err = service.convert(request()).unwrap_err();
        assert!(matches!(err, Error::Unclassified(_)));
    }

    #[cfg(unix)]
    mod subprocess {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        // 以 sh 作為轉換工具，.md 內容即為腳本，$6 為輸出路徑
        fn run_script(script: &str) -> ConversionOutcome {
            let tmp = TempDir::new().unwrap();
            fs::write(tmp.path().join("doc.md"), script).unwrap();
            let service = PandocService::new(ConversionOptions {
                tool: "sh".into(),
                ..ConversionOptions::default()
            });
            let req = ConversionRequest::new(tmp.path(), "doc.md", tmp.path());
            service.convert(req).unwrap()
        }

        #[test]
        fn zero_exit_is_success() {
            let outcome = run_script(": > \"$6\"\n");
            assert!(outcome.success);
            assert!(outcome.error_detail.is_none());
        }

        #[test]
        fn nonzero_exit_captures_stderr() {
            let outcome = run_script("echo 'pdf engine missing' >&2\nexit 3\n");
            assert!(!outcome.success);
            assert_eq!(outcome.error_detail.as_deref(), Some("pdf engine missing\n"));
        }

        #[test]
        fn undecodable_stderr_is_an_encoding_failure() {
            let outcome = run_script("printf '\\377\\376' >&2\nexit 0\n");
            assert!(!outcome.success);
            assert!(outcome.error_detail.unwrap().contains("解碼"));
        }

        #[test]
        fn undecodable_stdout_is_an_encoding_failure() {
            let outcome = run_script("printf 'ok \\377\\376'\n: > \"$6\"\nexit 0\n");
            assert!(!outcome.success);
            assert!(outcome.error_detail.unwrap().contains("解碼"));
        }

        #[test]
        fn encoding_failure_wins_over_nonzero_exit() {
            let outcome = run_script("printf '\\377'\necho 'engine failed' >&2\nexit 2\n");
            assert!(!outcome.success);
            assert!(outcome.error_detail.unwrap().contains("解碼"));
        }
    }
}
