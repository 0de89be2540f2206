use crate::error::Error;
use crate::models::conversion::{BatchInput, BatchReport};

// Facade 接口，負責協調批次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 驗證路徑、列舉 Markdown 檔案並逐一轉換
    /// # 參數
    /// - input: 來源與輸出目錄、排除模式等
    /// # 回傳
    /// - 成功時返回各檔案的轉換結果；路徑無效或其他未分類錯誤時返回 Err
    fn execute_conversion(&self, input: BatchInput) -> Result<BatchReport, Error>;
}
