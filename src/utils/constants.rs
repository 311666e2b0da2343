// ============================================================================
// LitWrap - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 输出图标定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 日志前缀
pub const APP_TAG: &str = "[LITWRAP]";

/// 分隔线
pub const SEPARATOR: &str = "───────────────────────────────────────";

/// 输出图标
pub mod icons {
    /// 文件图标
    pub const FILE: &str = "●";
    /// 改动前
    pub const BEFORE: &str = "-";
    /// 改动后
    pub const AFTER: &str = "+";
}
