//! 用于按属性查找文件的库
//!
//! 本库提供了经典 Unix find 的一个精简实现，支持：
//! - 递归目录遍历（不可读目录只跳过对应子树）
//! - 多种过滤条件（inode 编号、精确文件名、大小比较、硬链接数）
//! - 对每个匹配文件同步执行外部命令
//! - 详细的错误报告
//!
//! ## 匹配规则
//!
//! 同一类条件之间是 OR 关系（多个 `-size` 是备选项），
//! 不同类条件之间是 AND 关系；某类没有条件时视为恒满足。
//!
//! # 示例
//!
//! 基本用法：
//! ```no_run
//! use minifind::finder::{Finder, PredicateSet};
//!
//! // 从 (修饰符, 值) 对构造谓词集合
//! let predicates = PredicateSet::from_modifiers(&[
//!     ("-name".to_string(), "a.txt".to_string()),
//!     ("-size".to_string(), "+100".to_string()),
//! ]).unwrap();
//!
//! // 创建查找器并执行查找
//! let finder = Finder::new(predicates);
//! let results = finder.find(".").unwrap();
//!
//! // 输出结果
//! for path in results {
//!     println!("找到文件: {}", path.display());
//! }
//! ```
//!
//! 更多用法请参考各模块文档。

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::Finder;
