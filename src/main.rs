// ==========================================
// 订单查询助手 - 命令行主入口
// ==========================================
// 技术栈: Rust + clap + tracing
// 系统定位: 只读订单查询 (价格 / 状态 / 详情)
// ==========================================

use std::process::ExitCode;

use clap::Parser;
use order_lookup::app::{self, Cli};
use order_lookup::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日志系统（输出到 stderr）
    logging::init(&cli.log_level, cli.log_format());

    tracing::info!("{} v{}", order_lookup::APP_NAME, order_lookup::VERSION);

    match app::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("执行失败: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
