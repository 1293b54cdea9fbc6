//! 文件查找模块
//!
//! 这个模块提供了文件系统遍历和搜索功能，
//! 包括按 inode、名称、大小、硬链接数过滤以及对匹配文件执行外部命令。

pub mod exec;
pub mod filter;
mod walker;

use std::path::{Path, PathBuf};

use log::info;

pub use self::exec::ExecCommand;
pub use self::filter::{FileCandidate, FilterCriterion, PredicateSet, SizeComparator};
pub use self::walker::FileWalker;

use crate::errors::FindResult;

/// 文件查找器
///
/// 持有一次运行的谓词集合，驱动遍历并把匹配结果交给调用方。
#[derive(Debug)]
pub struct Finder {
    predicates: PredicateSet,
}

impl Finder {
    /// 使用给定谓词集合创建新的文件查找器实例
    pub fn new(predicates: PredicateSet) -> Self {
        Self { predicates }
    }

    /// 在指定目录中查找符合条件的文件，收集为列表
    pub fn find<P: AsRef<Path>>(&self, root: P) -> FindResult<Vec<PathBuf>> {
        let mut results = Vec::new();
        self.run(root, |path| results.push(path.to_path_buf()))?;
        Ok(results)
    }

    /// 在指定目录中查找，对每个匹配文件立即调用 on_match
    ///
    /// 匹配回调之后立刻执行 exec 目标（如果设置了的话），
    /// 与原始 find 一致：先报告路径，再运行命令。
    pub fn run<P, F>(&self, root: P, on_match: F) -> FindResult<()>
    where
        P: AsRef<Path>,
        F: FnMut(&Path),
    {
        let root = root.as_ref();
        info!("Starting search in {}", root.display());

        let walker = FileWalker::new(&self.predicates);
        walker.walk(root, on_match)
    }
}
