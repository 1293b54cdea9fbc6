use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// minifind 的自定义错误类型
///
/// 构造期错误（参数解析、可执行文件校验、根路径校验）在遍历开始前
/// 就会中止运行；`DirectoryUnreadable` 和 `WalkError` 是遍历期的
/// 局部错误，只会跳过对应子树。
#[derive(Debug, Error)]
pub enum FindError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// 无效的 inode 编号
    #[error("无效的 inode 编号: {0}")]
    InvalidInode(String),

    /// 无效的大小参数
    #[error("无效的大小参数: {0} (期望格式 [-|=|+]N)")]
    InvalidSize(String),

    /// 无效的硬链接数
    #[error("无效的硬链接数: {0}")]
    InvalidLinkCount(String),

    /// 无法识别的修饰符
    #[error("无法识别的修饰符: {0}")]
    UnknownModifier(String),

    /// 可执行文件不存在
    #[error("可执行文件不存在: {0}")]
    ExecutableNotFound(PathBuf),

    /// 目录不可读
    #[error("目录不可读 {path}: {source}")]
    DirectoryUnreadable { path: PathBuf, source: io::Error },

    /// 无法读取文件元数据
    #[error("无法读取文件元数据 {path}: {source}")]
    MetadataUnreadable { path: PathBuf, source: io::Error },

    /// 遍历目录时的其他错误
    #[error("目录遍历错误: {0}")]
    WalkError(String),

    /// 无法启动子进程
    #[error("无法启动进程 {program}: {source}")]
    SpawnFailure { program: PathBuf, source: io::Error },

    /// 子进程被信号终止
    #[error("子进程被信号终止: {0}")]
    ChildSignaled(i32),
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => FindError::DirectoryUnreadable {
                source: io::Error::new(io_err.kind(), io_err.to_string()),
                path,
            },
            None => FindError::WalkError(err.to_string()),
        }
    }
}
