use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadmeShotsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("README.md ファイルが見つかりません: {0}")]
    ReadmeNotFound(String),

    #[error("スクリーンショットが見つかりません: {0}")]
    NoScreenshots(String),

    #[error("READMEのスクリーンショット節が最新ではありません: {0}（`readme-shots update` で更新してください）")]
    OutOfDate(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] readme_shots_common::Error),
}

impl ReadmeShotsError {
    /// 想定内の失敗（メッセージを出して正常終了する）
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReadmeShotsError::ReadmeNotFound(_) | ReadmeShotsError::NoScreenshots(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReadmeShotsError>;
