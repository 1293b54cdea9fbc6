use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use minifind::cli::Cli;
use minifind::finder::{Finder, PredicateSet};

fn main() {
    // 解析命令行参数；用法错误打印后以 0 退出，与原始 find 一致
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return;
        }
    };

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    info!("开始运行 minifind");
    let start_time = Instant::now();

    // 运行期错误打印到标准错误，进程仍然正常退出
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
    }

    let elapsed = start_time.elapsed();
    info!("搜索完成，耗时 {:.2?}", elapsed);
}

fn run(cli: &Cli) -> Result<()> {
    // 遍历开始前校验根路径和所有修饰符
    cli.validate()?;
    debug!("在路径中搜索: {}", cli.path.display());

    let predicates = PredicateSet::from_modifiers(&cli.modifiers())
        .with_context(|| "构建过滤器失败")?;

    // 执行搜索，匹配路径逐行输出
    let finder = Finder::new(predicates);
    finder.run(&cli.path, |path| println!("{}", path.display()))?;

    Ok(())
}
