// ============================================================================
// LitWrap - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序启动和错误退出
// 边界:
//   - ✅ 模块声明
//   - ✅ 顶层错误输出和退出码
//   - ❌ 不应包含命令实现
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod utils;

use utils::logger::Logger;

fn main() {
    if let Err(e) = cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
