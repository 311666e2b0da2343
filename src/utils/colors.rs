// ============================================================================
// LitWrap - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和开关控制
// 边界:
//   - ✅ 颜色输出格式化
//   - ✅ 颜色开关（配置 / 非终端输出）
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use colored::Colorize;

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 根据配置和终端状态决定是否启用颜色
    pub fn configure(enabled: bool) {
        if !enabled || !atty::is(atty::Stream::Stdout) {
            colored::control::set_override(false);
        }
    }

    /// 信息颜色
    pub fn info(text: &str) -> String {
        text.cyan().to_string()
    }

    /// 警告颜色
    pub fn warn(text: &str) -> String {
        text.yellow().to_string()
    }

    /// 错误颜色
    pub fn error(text: &str) -> String {
        text.red().to_string()
    }

    /// 成功颜色
    pub fn success(text: &str) -> String {
        text.green().to_string()
    }

    /// 次要信息
    pub fn dimmed(text: &str) -> String {
        text.bright_black().to_string()
    }
}
