//! minifind 工具的命令行接口
//!
//! 本模块提供了 minifind 工具的命令行接口，
//! 包括参数解析、根路径校验以及向谓词集合传递修饰符。

use std::path::PathBuf;

use clap::Parser;

use crate::errors::FindError;

/// Unix find 命令的精简 Rust 实现
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 搜索的根路径
    pub path: PathBuf,

    /// 按 inode 编号过滤（可多次指定，任一匹配即可）
    #[arg(long, value_name = "INODE")]
    pub inum: Vec<String>,

    /// 按文件名精确匹配（可多次指定，任一匹配即可）
    #[arg(long, value_name = "NAME")]
    pub name: Vec<String>,

    /// 按大小过滤，格式 [-|=|+]SIZE（-小于 =等于 +大于，可多次指定）
    #[arg(long, value_name = "[-|=|+]SIZE", allow_hyphen_values = true)]
    pub size: Vec<String>,

    /// 按硬链接数过滤（可多次指定，任一匹配即可）
    #[arg(long, value_name = "NUM")]
    pub nlinks: Vec<String>,

    /// 对每个匹配文件执行的程序（最后一次指定生效）
    #[arg(long, value_name = "EXEC_PATH")]
    pub exec: Vec<String>,

    /// 启用调试日志
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// 验证命令行参数
    pub fn validate(&self) -> Result<(), FindError> {
        if !self.path.exists() {
            return Err(FindError::FileNotFound(self.path.clone()));
        }
        Ok(())
    }

    /// 把各个选项展开为有序的 (修饰符, 值) 对
    ///
    /// 修饰符使用 find 风格的单横线拼写，即谓词集合的构造契约；
    /// 同类修饰符保持命令行上的出现顺序。
    pub fn modifiers(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for value in &self.inum {
            pairs.push(("-inum".to_string(), value.clone()));
        }
        for value in &self.name {
            pairs.push(("-name".to_string(), value.clone()));
        }
        for value in &self.size {
            pairs.push(("-size".to_string(), value.clone()));
        }
        for value in &self.nlinks {
            pairs.push(("-nlinks".to_string(), value.clone()));
        }
        for value in &self.exec {
            pairs.push(("-exec".to_string(), value.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            path: PathBuf::from("."),
            inum: vec![],
            name: vec![],
            size: vec![],
            nlinks: vec![],
            exec: vec![],
            debug: false,
        }
    }

    #[test]
    fn test_cli_validation() {
        let cli = base_cli();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_invalid_path() {
        let mut cli = base_cli();
        cli.path = PathBuf::from("non_existent_path");
        assert!(matches!(cli.validate(), Err(FindError::FileNotFound(_))));
    }

    #[test]
    fn test_cli_modifier_pairs() {
        let mut cli = base_cli();
        cli.name = vec!["a.txt".to_string(), "b.txt".to_string()];
        cli.size = vec!["+100".to_string()];

        let pairs = cli.modifiers();
        assert_eq!(
            pairs,
            vec![
                ("-name".to_string(), "a.txt".to_string()),
                ("-name".to_string(), "b.txt".to_string()),
                ("-size".to_string(), "+100".to_string()),
            ]
        );
    }

    #[test]
    fn test_cli_parses_hyphen_size_values() {
        // --size 的值可能以 - 开头，不能被当作选项
        let cli = Cli::try_parse_from(["minifind", "/tmp", "--size", "-100"]).unwrap();
        assert_eq!(cli.size, vec!["-100".to_string()]);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["minifind", "/tmp", "--mtime", "7"]).is_err());
    }

    #[test]
    fn test_cli_requires_path() {
        assert!(Cli::try_parse_from(["minifind"]).is_err());
    }
}
