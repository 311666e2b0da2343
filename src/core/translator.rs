// ============================================================================
// LitWrap - 单行翻译器
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 将一行源码中命中目录的字符串字面量替换为翻译调用
// 边界:
//   - ✅ 按双引号切分行并识别字面量段
//   - ✅ 目录查找与包裹替换
//   - ✅ 排除标记判断
//   - ❌ 不应包含文件读写逻辑
//   - ❌ 不应包含目录解析逻辑
//   - ❌ 不应校验改写结果在宿主语言中的语法正确性
//
// 算法设计:
// 1. 按 '"' 切分整行（含换行符），奇数下标段视为字面量内容
// 2. 只遍历 段数/2（整除）个奇数下标段
// 3. 长度大于 1 且命中目录的段替换为 wrapper("原文")，其余段重新加上引号
// 4. 至少替换一处才重新拼接，否则返回 Unchanged
//
// ============================================================================

use crate::core::catalog::Catalog;

/// 单行翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// 至少有一个字面量被替换
    Changed(Vec<u8>),
    /// 未发生替换，原行保持不变
    Unchanged,
}

/// 改写规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    /// 翻译函数名，如 `_`
    pub wrapper: String,
    /// 以这些标记开头的行不做翻译
    pub exclude_markers: Vec<String>,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            wrapper: "_".to_string(),
            exclude_markers: vec!["BROWSER_LOG".to_string()],
        }
    }
}

/// 单行翻译器
///
/// 以字节处理整行（含行尾换行符），不要求源文件是合法 UTF-8。
pub struct LineTranslator<'a> {
    catalog: &'a Catalog,
    rules: &'a RewriteRules,
}

impl<'a> LineTranslator<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a RewriteRules) -> Self {
        Self { catalog, rules }
    }

    /// 该行是否带排除标记（只去掉行首空格，不去制表符）
    pub fn is_excluded(&self, line: &[u8]) -> bool {
        let start = line.iter().position(|&b| b != b' ').unwrap_or(line.len());
        let content = &line[start..];
        self.rules
            .exclude_markers
            .iter()
            .any(|marker| !marker.is_empty() && content.starts_with(marker.as_bytes()))
    }

    /// 处理一行，带排除标记的行直接视为未改变
    pub fn process(&self, line: &[u8]) -> LineOutcome {
        if self.is_excluded(line) {
            return LineOutcome::Unchanged;
        }
        self.translate(line)
    }

    /// 翻译一行
    ///
    /// 换行符属于最后一段，未闭合的尾段连同换行符一起被当作字面量。
    pub fn translate(&self, line: &[u8]) -> LineOutcome {
        let mut segments: Vec<Vec<u8>> = line
            .split(|&b| b == b'"')
            .map(<[u8]>::to_vec)
            .collect();
        if segments.len() < 2 {
            return LineOutcome::Unchanged;
        }

        let mut translated = false;
        // 段数为偶数（引号数为奇数）时，最后一段也会被当作字面量
        for i in 0..segments.len() / 2 {
            let index = i * 2 + 1;

            let replacement = match self.lookup(&segments[index]) {
                Some(original) => {
                    translated = true;
                    format!("{}(\"{}\")", self.rules.wrapper, original).into_bytes()
                }
                None => quoted(&segments[index]),
            };
            segments[index] = replacement;
        }

        if translated {
            LineOutcome::Changed(segments.concat())
        } else {
            LineOutcome::Unchanged
        }
    }

    /// 长度不超过 1 个字符的字面量从不替换，非 UTF-8 字面量不可能命中目录
    fn lookup(&self, literal: &[u8]) -> Option<&'a str> {
        let literal = std::str::from_utf8(literal).ok()?;
        if literal.chars().count() > 1 {
            self.catalog.lookup(literal)
        } else {
            None
        }
    }
}

fn quoted(segment: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(segment.len() + 2);
    out.push(b'"');
    out.extend_from_slice(segment);
    out.push(b'"');
    out
}
