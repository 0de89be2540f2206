use md_to_pdf::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(report) => {
            log::info!(
                "程式執行完成，輸出目錄：{}，成功 {} 個，失敗 {} 個",
                report.destination_dir.display(),
                report.succeeded,
                report.failed
            );
            println!("轉換完成！輸出檔案位於：{}", report.destination_dir.display());
        }
        Err(e) => {
            log::error!("程式運行時發生錯誤: {}", e);
            eprintln!("錯誤：{}", e);
            std::process::exit(1);
        }
    }
}
