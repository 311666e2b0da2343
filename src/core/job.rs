// ============================================================================
// LitWrap - 翻译任务
// ============================================================================
//
// 文件: src/core/job.rs
// 职责: 串联目录加载、源文件扫描和逐文件改写
// 边界:
//   - ✅ 从配置构建任务
//   - ✅ 顺序处理每个候选文件
//   - ✅ 汇总结果
//   - ❌ 不应包含 CLI 输出格式化
//   - ❌ 不应包含单行翻译算法
//   - ❌ 不应包含跨文件回滚（出错时已写入的文件保持改写状态）
//
// ============================================================================

use anyhow::Result;
use std::path::PathBuf;

use crate::core::catalog::Catalog;
use crate::core::rewriter::FileRewriter;
use crate::core::scanner::SourceScanner;
use crate::core::translator::{LineTranslator, RewriteRules};
use crate::models::config::{Config, ConfigDefaults};
use crate::models::report::{FileReport, RewriteSummary};
use crate::tf;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobMode {
    /// 改写并写回
    Apply,
    /// 只生成报告，不写文件
    DryRun,
}

/// 一次翻译任务
pub struct TranslationJob {
    /// 工作区根目录
    root: PathBuf,
    /// 消息目录路径
    catalog_path: PathBuf,
    extensions: Vec<String>,
    ignore: Vec<String>,
    rules: RewriteRules,
    /// 报告中是否保留逐行改动
    with_changes: bool,
}

impl TranslationJob {
    pub fn new(root: PathBuf, catalog_path: PathBuf) -> Self {
        Self {
            root,
            catalog_path,
            extensions: Config::default_extensions(),
            ignore: Vec::new(),
            rules: RewriteRules::default(),
            with_changes: false,
        }
    }

    /// 从全局配置构建
    pub fn new_from_config() -> Result<Self> {
        let root = Config::get_workspace_root();
        if !root.exists() {
            anyhow::bail!(tf!("error.workspace_not_exist", root.display()));
        }

        Ok(Self::new(root, Config::get_catalog_path())
            .with_extensions(Config::get_extensions())
            .with_ignore(Config::get_ignore_patterns())
            .with_rules(Config::get_rewrite_rules()))
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_rules(mut self, rules: RewriteRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_changes(mut self, with_changes: bool) -> Self {
        self.with_changes = with_changes;
        self
    }

    /// 加载消息目录
    ///
    /// 诊断信息走 tracing（stderr），标准输出只留给命令自身的结果。
    pub fn load_catalog(&self) -> Result<Catalog> {
        tracing::info!("{}", tf!("run.loading_catalog", self.catalog_path.display()));
        let catalog = Catalog::load(&self.catalog_path)?;

        if catalog.is_empty() {
            tracing::warn!("{}", tf!("run.catalog_empty", self.catalog_path.display()));
        } else {
            tracing::info!("{}", tf!("run.catalog_loaded", catalog.len()));
        }
        Ok(catalog)
    }

    /// 对已加载的目录执行任务，每个有改动的文件处理完后回调一次
    ///
    /// Apply 模式下回调发生在写回之前，回调出错时立即中止。
    pub fn execute<F>(
        &self,
        catalog: &Catalog,
        mode: JobMode,
        mut on_changed: F,
    ) -> Result<RewriteSummary>
    where
        F: FnMut(&FileReport) -> Result<()>,
    {
        tracing::info!(
            "{}",
            tf!("run.scanning", self.root.display(), self.extensions.join(","))
        );
        let files = SourceScanner::new(self.root.clone(), self.extensions.clone())
            .with_ignore(&self.ignore)?
            .scan()?;

        let rewriter = FileRewriter::new(LineTranslator::new(catalog, &self.rules));
        let mut summary = RewriteSummary::new(catalog.len());

        for path in &files {
            let rewrite = rewriter.plan(path)?;
            summary.record(&self.root, &rewrite, self.with_changes);

            if !rewrite.is_changed() {
                tracing::trace!(path = %path.display(), "no translatable literals");
                continue;
            }

            if let Some(report) = summary.files.last() {
                on_changed(report)?;
            }
            if mode == JobMode::Apply {
                rewrite.apply()?;
            }
        }

        Ok(summary)
    }
}
