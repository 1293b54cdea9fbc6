//! 文件系统遍历功能
//!
//! 本模块提供递归遍历文件系统、筛选普通文件并触发外部命令的功能。

use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use super::filter::{FileCandidate, PredicateSet};
use crate::errors::{FindError, FindResult};

/// 使用给定谓词集合处理文件系统遍历
///
/// 深度优先、不排序、不跟随符号链接。不可读的目录只产生一条警告，
/// 其子树被跳过，兄弟目录继续遍历；exec 调用失败则中止整个遍历。
pub struct FileWalker<'a> {
    predicates: &'a PredicateSet,
}

impl<'a> FileWalker<'a> {
    /// 使用给定谓词集合创建新的 FileWalker
    pub fn new(predicates: &'a PredicateSet) -> Self {
        Self { predicates }
    }

    /// 从给定路径开始遍历，对每个匹配文件调用 on_match
    ///
    /// 匹配回调先于 exec 调用执行；exec 按匹配顺序严格串行运行。
    pub fn walk<P, F>(&self, path: P, mut on_match: F) -> FindResult<()>
    where
        P: AsRef<Path>,
        F: FnMut(&Path),
    {
        for entry in WalkDir::new(path.as_ref()).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // 目录不可读等局部错误：跳过该子树，继续遍历
                    warn!("{}", FindError::from(err));
                    continue;
                }
            };

            // 非普通文件（目录自身、符号链接、设备等）不参与匹配
            if !entry.file_type().is_file() {
                continue;
            }

            let candidate = match FileCandidate::from_entry(&entry) {
                Ok(candidate) => candidate,
                Err(err) => {
                    warn!("{}", err);
                    continue;
                }
            };

            if self.predicates.matches(&candidate) {
                debug!("Matched {}", entry.path().display());
                on_match(entry.path());
                if let Some(command) = self.predicates.exec() {
                    command.invoke(entry.path())?;
                }
            }
        }

        Ok(())
    }
}
