// ============================================================================
// LitWrap - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 运行相关
    ("run.loading_catalog", "加载消息目录: {}"),
    ("run.catalog_loaded", "已加载 {} 条目录项"),
    ("run.catalog_empty", "消息目录为空，不会翻译任何内容: {}"),
    ("run.scanning", "扫描 {} 中的 *.{} 文件"),
    ("run.header", "已翻译的文件:"),
    ("run.completed", "扫描 {} 个文件，翻译 {} 个文件，改写 {} 行"),
    ("run.no_changes", "没有需要翻译的文件"),
    // 检查相关
    ("check.start", "检查可翻译的字面量（预演模式）..."),
    ("check.none", "没有需要翻译的内容"),
    ("check.would_change", "将翻译 {} 个文件（{} 行）"),
    ("check.file_header", "{}（{} 行）"),
    ("check.line_number", "第 {} 行"),
    // 初始化相关
    ("init.start", "初始化 LitWrap 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.create_failed", "创建配置文件失败: {}"),
    ("init.next_steps", "现在可以根据项目需要编辑配置文件"),
    // 错误信息
    ("error.read_catalog", "读取消息目录失败: {}"),
    ("error.parse_catalog", "消息目录格式错误: {}"),
    ("error.read_source", "读取源文件失败: {}"),
    ("error.write_source", "写入源文件失败: {}"),
    ("error.walk_directory", "遍历目录失败"),
    ("error.invalid_ignore_pattern", "无效的忽略模式: {}"),
    ("error.workspace_not_exist", "工作区路径不存在: {}"),
    ("error.unknown_format", "未知的输出格式: {}"),
];
