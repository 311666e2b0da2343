// ============================================================================
// LitWrap - 消息目录加载器
// ============================================================================
//
// 文件: src/core/catalog.rs
// 职责: 解析 msgid/msgstr 两行一条的消息目录，构建 译文 -> 原文 映射
// 边界:
//   - ✅ 目录文件读取
//   - ✅ msgid/msgstr 行解析
//   - ✅ 目录格式错误检测
//   - ❌ 不应包含多行字符串、转义、注释、头部元数据处理
//   - ❌ 不应包含源码改写逻辑
//   - ❌ 不应修改目录文件本身
//
// 映射方向:
//   键为 msgstr（译文），值为 msgid（原文）。源码中出现的是译文字面量，
//   改写后包裹的是原文。方向与常规 gettext 相反，这是现有行为，保持不变。
//
// ============================================================================

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::tf;

/// 目录格式错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// msgstr 出现时没有待配对的 msgid（未出现过或为空串）
    #[error("unknown catalog format at line {line}: msgid should be read before msgstr")]
    MsgstrWithoutMsgid { line: usize },

    /// msgid/msgstr 行中没有双引号字符串
    #[error("unknown catalog format at line {line}: no quoted string in `{content}`")]
    MissingQuotedString { line: usize, content: String },
}

/// 消息目录：译文 -> 原文
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    texts: HashMap<String, String>,
}

impl Catalog {
    /// 从文件加载目录
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| tf!("error.read_catalog", path.display()))?;
        // 非 UTF-8 字节按替换字符处理，这样的键不会命中任何源码字面量
        let content = String::from_utf8_lossy(&bytes);

        let catalog = Self::parse(&content)
            .with_context(|| tf!("error.parse_catalog", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            entries = catalog.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// 解析目录文本
    ///
    /// 以 `msgid` 开头的行提供待配对的原文，以 `msgstr` 开头的行提供键。
    /// 其余行一律忽略。同一译文重复出现时后写覆盖先写。
    /// 出错时不返回任何部分结果。
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let mut texts = HashMap::new();
        let mut value = String::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            if line.starts_with("msgid") {
                value = first_quoted(line, line_number)?.to_string();
            } else if line.starts_with("msgstr") {
                let key = first_quoted(line, line_number)?;
                if value.is_empty() {
                    return Err(CatalogError::MsgstrWithoutMsgid { line: line_number });
                }
                texts.insert(key.to_string(), value.clone());
            }
        }

        Ok(Self { texts })
    }

    /// 按译文查找原文
    pub fn lookup(&self, translated: &str) -> Option<&str> {
        self.texts.get(translated).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// 取一行中第一个双引号内的内容
///
/// 只有一个引号时取其后的全部内容，与按引号切分后取第二段一致。
fn first_quoted(line: &str, line_number: usize) -> Result<&str, CatalogError> {
    line.split('"')
        .nth(1)
        .ok_or_else(|| CatalogError::MissingQuotedString {
            line: line_number,
            content: line.to_string(),
        })
}
