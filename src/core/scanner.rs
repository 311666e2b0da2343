// ============================================================================
// LitWrap - 源文件扫描器
// ============================================================================
//
// 文件: src/core/scanner.rs
// 职责: 递归遍历工作区，收集待翻译的源文件
// 边界:
//   - ✅ 目录递归遍历
//   - ✅ 扩展名过滤
//   - ✅ 忽略模式匹配（整目录剪枝）
//   - ❌ 不应包含文件内容读取
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::{t, tf};

/// 源文件扫描器
pub struct SourceScanner {
    /// 工作区根目录
    root: PathBuf,
    /// 目标扩展名（不含点）
    extensions: Vec<String>,
    /// 忽略模式
    ignore: Vec<glob::Pattern>,
}

impl SourceScanner {
    pub fn new(root: PathBuf, extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        Self {
            root,
            extensions,
            ignore: Vec::new(),
        }
    }

    /// 设置忽略模式，非法模式直接报错
    pub fn with_ignore(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore = patterns
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern)
                    .with_context(|| tf!("error.invalid_ignore_pattern", pattern))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 收集全部候选文件，按文件名排序
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e))
        {
            let entry = entry.context(t!("error.walk_directory"))?;

            // 指向文件的符号链接也算候选文件，指向目录的链接不进入
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file && self.matches_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(root = %self.root.display(), files = files.len(), "scan finished");
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext)))
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        let relative_path = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or(entry.path())
            .to_string_lossy();
        let file_name = entry.file_name().to_string_lossy();

        self.ignore
            .iter()
            .any(|pattern| pattern.matches(&relative_path) || pattern.matches(&file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn collects_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "main.cpp");
        touch(dir.path(), "src/view/view.cpp");
        touch(dir.path(), "src/view/view.h");
        touch(dir.path(), "notes.cpp.txt");
        fs::create_dir_all(dir.path().join("dir.cpp")).unwrap();

        let files = SourceScanner::new(dir.path().to_path_buf(), vec!["cpp".to_string()])
            .scan()
            .unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("main.cpp"),
                dir.path().join("src/view/view.cpp"),
            ]
        );
    }

    #[test]
    fn ignored_directories_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".git/hooks/x.cpp");
        touch(dir.path(), "build/gen/out.cpp");
        touch(dir.path(), "src/a.cpp");

        let files = SourceScanner::new(dir.path().to_path_buf(), vec![".cpp".to_string()])
            .with_ignore(&[".git".to_string(), "build".to_string()])
            .unwrap()
            .scan()
            .unwrap();

        assert_eq!(files, vec![dir.path().join("src/a.cpp")]);
    }

    #[test]
    fn multiple_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.cpp");
        touch(dir.path(), "b.cc");
        touch(dir.path(), "c.h");

        let files = SourceScanner::new(
            dir.path().to_path_buf(),
            vec!["cpp".to_string(), "cc".to_string()],
        )
        .scan()
        .unwrap();

        assert_eq!(files.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_collected_but_linked_dirs_are_not_walked() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        touch(outside.path(), "shared.cpp");
        touch(outside.path(), "lib/inner.cpp");

        symlink(outside.path().join("shared.cpp"), dir.path().join("link.cpp")).unwrap();
        symlink(outside.path().join("lib"), dir.path().join("lib")).unwrap();

        let files = SourceScanner::new(dir.path().to_path_buf(), vec!["cpp".to_string()])
            .scan()
            .unwrap();

        assert_eq!(files, vec![dir.path().join("link.cpp")]);
    }

    #[test]
    fn invalid_ignore_pattern_is_rejected() {
        let scanner = SourceScanner::new(PathBuf::from("."), vec!["cpp".to_string()]);
        assert!(scanner.with_ignore(&["[".to_string()]).is_err());
    }
}
