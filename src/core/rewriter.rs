// ============================================================================
// LitWrap - 文件改写器
// ============================================================================
//
// 文件: src/core/rewriter.rs
// 职责: 对单个源文件逐行应用翻译器，并在有改动时整体写回
// 边界:
//   - ✅ 文件读取与逐行处理
//   - ✅ 改动记录收集
//   - ✅ 仅在有改动时写回
//   - ❌ 不应包含目录遍历逻辑
//   - ❌ 不应包含单行翻译算法
//   - ❌ 不应包含跨文件回滚
//
// ============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::translator::{LineOutcome, LineTranslator};
use crate::tf;

/// 单行改动
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    /// 行号（从 1 开始）
    pub line_number: usize,
    pub before: String,
    pub after: String,
}

/// 单个文件的改写计划
#[derive(Debug, Clone)]
pub struct FileRewrite {
    pub path: PathBuf,
    /// 重建后的完整内容（原始字节），保留原有换行符
    pub content: Vec<u8>,
    pub changes: Vec<LineChange>,
}

impl FileRewrite {
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    /// 写回文件；没有改动时不触碰文件，返回 false
    pub fn apply(&self) -> Result<bool> {
        if !self.is_changed() {
            return Ok(false);
        }

        fs::write(&self.path, &self.content)
            .with_context(|| tf!("error.write_source", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            lines = self.changes.len(),
            "source file rewritten"
        );
        Ok(true)
    }
}

/// 文件改写器
pub struct FileRewriter<'a> {
    translator: LineTranslator<'a>,
}

impl<'a> FileRewriter<'a> {
    pub fn new(translator: LineTranslator<'a>) -> Self {
        Self { translator }
    }

    /// 读取文件并生成改写计划，文件不要求是合法 UTF-8
    pub fn plan(&self, path: &Path) -> Result<FileRewrite> {
        let source = fs::read(path).with_context(|| tf!("error.read_source", path.display()))?;

        let (content, changes) = self.rewrite_bytes(&source);

        Ok(FileRewrite {
            path: path.to_path_buf(),
            content,
            changes,
        })
    }

    /// 逐行处理内容，返回重建内容和改动列表
    pub fn rewrite_bytes(&self, source: &[u8]) -> (Vec<u8>, Vec<LineChange>) {
        let mut content = Vec::with_capacity(source.len());
        let mut changes = Vec::new();

        for (index, line) in source.split_inclusive(|&b| b == b'\n').enumerate() {
            match self.translator.process(line) {
                LineOutcome::Changed(new_line) => {
                    changes.push(LineChange {
                        line_number: index + 1,
                        before: display_line(line),
                        after: display_line(&new_line),
                    });
                    content.extend_from_slice(&new_line);
                }
                LineOutcome::Unchanged => content.extend_from_slice(line),
            }
        }

        (content, changes)
    }
}

/// 报告用的行文本，去掉行尾换行符
fn display_line(line: &[u8]) -> String {
    String::from_utf8_lossy(line)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}
