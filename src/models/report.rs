// ============================================================================
// LitWrap - 改写报告数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 一次运行的改写结果汇总
// 边界:
//   - ✅ 汇总数据结构定义
//   - ✅ JSON 序列化
//   - ❌ 不应包含改写逻辑
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use serde::Serialize;
use std::path::Path;

use crate::core::rewriter::{FileRewrite, LineChange};

/// 单个文件的改写记录
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// 相对于工作区根目录的路径
    pub path: String,
    pub lines_changed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<LineChange>,
}

/// 运行汇总
#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteSummary {
    pub catalog_entries: usize,
    pub files_scanned: usize,
    pub files_changed: usize,
    pub lines_changed: usize,
    pub files: Vec<FileReport>,
}

impl RewriteSummary {
    pub fn new(catalog_entries: usize) -> Self {
        Self {
            catalog_entries,
            ..Self::default()
        }
    }

    /// 记录一个已扫描的文件；未改动的文件只计数
    pub fn record(&mut self, root: &Path, rewrite: &FileRewrite, with_changes: bool) {
        self.files_scanned += 1;
        if !rewrite.is_changed() {
            return;
        }

        self.files_changed += 1;
        self.lines_changed += rewrite.changes.len();
        self.files.push(FileReport {
            path: display_path(root, &rewrite.path),
            lines_changed: rewrite.changes.len(),
            changes: if with_changes {
                rewrite.changes.clone()
            } else {
                Vec::new()
            },
        });
    }
}

/// 以 "./相对路径" 形式显示，不在根目录下时原样显示
pub fn display_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => Path::new(".").join(relative).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rewrite(path: &str, lines: usize) -> FileRewrite {
        FileRewrite {
            path: PathBuf::from(path),
            content: Vec::new(),
            changes: (1..=lines)
                .map(|n| LineChange {
                    line_number: n,
                    before: "\"Bonjour\"".to_string(),
                    after: "_(\"Hello\")".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn counts_scanned_and_changed_files() {
        let root = Path::new("/work");
        let mut summary = RewriteSummary::new(3);
        summary.record(root, &rewrite("/work/a.cpp", 0), false);
        summary.record(root, &rewrite("/work/src/b.cpp", 2), false);

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.lines_changed, 2);
        assert_eq!(summary.files[0].path, "./src/b.cpp");
        assert!(summary.files[0].changes.is_empty());
    }

    #[test]
    fn serializes_change_details_when_requested() {
        let root = Path::new("/work");
        let mut summary = RewriteSummary::new(1);
        summary.record(root, &rewrite("/work/a.cpp", 1), true);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["files_changed"], 1);
        assert_eq!(json["files"][0]["changes"][0]["line_number"], 1);
    }

    #[test]
    fn path_outside_root_is_shown_as_is() {
        assert_eq!(
            display_path(Path::new("/work"), Path::new("/other/a.cpp")),
            "/other/a.cpp"
        );
    }
}
