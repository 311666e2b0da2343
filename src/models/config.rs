// ============================================================================
// LitWrap - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ CLI 运行时参数合并
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含消息目录数据（目录按值显式传递）
//   - ❌ 不应包含改写逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::translator::RewriteRules;

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "litwrap.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LitWrap 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 消息目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// 扫描配置
    #[serde(default)]
    pub scan: ScanConfig,
    /// 改写配置
    #[serde(default)]
    pub rewrite: RewriteConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 消息目录配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 目录文件路径，相对路径基于工作区根目录
    #[serde(default = "Config::default_catalog_path")]
    pub path: String,
}

/// 扫描配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// 工作区根目录
    #[serde(default = "Config::default_root")]
    pub root: String,
    /// 源文件扩展名
    #[serde(default = "Config::default_extensions")]
    pub extensions: Vec<String>,
    /// 排除扫描的目录或文件模式
    #[serde(default = "Config::default_ignore_patterns")]
    pub ignore: Vec<String>,
}

/// 改写配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// 翻译函数名
    #[serde(default = "Config::default_wrapper")]
    pub wrapper: String,
    /// 排除标记
    #[serde(default = "Config::default_exclude_markers")]
    pub exclude_markers: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub workspace_root: Option<String>,
    pub catalog_path: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude_markers: Option<Vec<String>>,
    pub wrapper: Option<String>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_catalog_path() -> String {
        "res/locale/en.po".to_string()
    }

    fn default_root() -> String {
        ".".to_string()
    }

    fn default_extensions() -> Vec<String> {
        vec!["cpp".to_string()]
    }

    fn default_ignore_patterns() -> Vec<String> {
        vec![".git".to_string()]
    }

    fn default_wrapper() -> String {
        RewriteRules::default().wrapper
    }

    fn default_exclude_markers() -> Vec<String> {
        RewriteRules::default().exclude_markers
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置，配置文件从工作区根目录读取
    pub fn initialize(workspace_root: &Path) -> anyhow::Result<()> {
        let config = Self::load_for_root(workspace_root)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 工作区根目录下的配置文件路径
    pub fn config_file_in(workspace_root: &Path) -> PathBuf {
        workspace_root.join(CONFIG_FILE_NAME)
    }

    /// 读取工作区根目录下的配置文件
    pub fn load_for_root(workspace_root: &Path) -> anyhow::Result<Self> {
        Self::load_from(&Self::config_file_in(workspace_root))
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply(args);
        Ok(())
    }

    /// 用运行时参数覆盖当前值
    fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(root) = args.workspace_root {
            self.scan.root = root;
        }
        if let Some(path) = args.catalog_path {
            self.catalog.path = path;
        }
        if let Some(extensions) = args.extensions {
            self.scan.extensions = extensions;
        }
        if let Some(markers) = args.exclude_markers {
            self.rewrite.exclude_markers = markers;
        }
        if let Some(wrapper) = args.wrapper {
            self.rewrite.wrapper = wrapper;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 读取全局配置的一部分
    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// 获取工作区根目录（带默认值）
    pub fn get_workspace_root() -> PathBuf {
        let root = Self::read(|c| c.scan.root.clone()).unwrap_or_else(|_| Self::default_root());
        PathBuf::from(root)
    }

    /// 获取消息目录路径，相对路径基于工作区根目录
    pub fn get_catalog_path() -> PathBuf {
        let path =
            Self::read(|c| c.catalog.path.clone()).unwrap_or_else(|_| Self::default_catalog_path());
        resolve_against(&Self::get_workspace_root(), &path)
    }

    pub fn get_extensions() -> Vec<String> {
        Self::read(|c| c.scan.extensions.clone()).unwrap_or_else(|_| Self::default_extensions())
    }

    pub fn get_ignore_patterns() -> Vec<String> {
        Self::read(|c| c.scan.ignore.clone()).unwrap_or_else(|_| Self::default_ignore_patterns())
    }

    /// 获取改写规则
    pub fn get_rewrite_rules() -> RewriteRules {
        Self::read(|c| RewriteRules {
            wrapper: c.rewrite.wrapper.clone(),
            exclude_markers: c.rewrite.exclude_markers.clone(),
        })
        .unwrap_or_default()
    }

    pub fn get_verbose() -> bool {
        Self::read(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    pub fn get_colored() -> bool {
        Self::read(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read(|c| c.i18n.language.clone())
    }
}

/// 相对路径拼接到根目录下，绝对路径原样返回
fn resolve_against(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            scan: ScanConfig::default(),
            rewrite: RewriteConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Config::default_catalog_path(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: Config::default_root(),
            extensions: Config::default_extensions(),
            ignore: Config::default_ignore_patterns(),
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            wrapper: Config::default_wrapper(),
            exclude_markers: Config::default_exclude_markers(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
