use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinderError>;

/// 运行期间的致命错误，全部在调用选择器之前检测（选择器/显示错误除外）
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("help directory not found: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("no help files found in {}", .0.display())]
    NoCards(PathBuf),

    #[error("no help files match keyword '{0}'")]
    NoMatches(String),

    #[error("picker failed: {0}")]
    Picker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FinderError {
    /// 进程退出码，所有错误统一为 1
    pub fn exit_code(&self) -> i32 {
        1
    }
}
