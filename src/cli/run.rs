// ============================================================================
// LitWrap - CLI Run 命令
// ============================================================================
//
// 文件: src/cli/run.rs
// 职责: 就地改写源文件并列出被修改的文件
// 边界:
//   - ✅ 调用翻译任务并写回
//   - ✅ 输出被修改文件列表（标准输出只有标题和路径）
//   - ❌ 不应包含改写逻辑
//
// ============================================================================

use anyhow::Result;
use std::io::{self, Write};

use crate::core::{JobMode, TranslationJob};
use crate::models::config::Config;
use crate::models::report::RewriteSummary;
use crate::utils::logger::Logger;
use crate::{t, tf};

pub fn handle_run() -> Result<()> {
    let job = TranslationJob::new_from_config()?;

    let stdout = io::stdout();
    let summary = write_run(&job, &mut stdout.lock())?;

    // 汇总只在详细模式下输出
    if Config::get_verbose() {
        if summary.files_changed == 0 {
            Logger::info(t!("run.no_changes"));
        } else {
            Logger::success(tf!(
                "run.completed",
                summary.files_scanned,
                summary.files_changed,
                summary.lines_changed
            ));
        }
    }

    Ok(())
}

/// 目录加载成功后输出标题，随后每个被修改的文件输出一行路径
fn write_run<W: Write>(job: &TranslationJob, out: &mut W) -> Result<RewriteSummary> {
    let catalog = job.load_catalog()?;

    writeln!(out, "{}", t!("run.header"))?;
    let summary = job.execute(&catalog, JobMode::Apply, |report| {
        writeln!(out, "{}", report.path)?;
        Ok(())
    })?;
    out.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn workspace(catalog: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("res/locale")).unwrap();
        fs::write(root.join("res/locale/en.po"), catalog).unwrap();
        fs::write(root.join("main.cpp"), "cout << \"Bonjour\" << endl;\n").unwrap();
        fs::write(root.join("other.cpp"), "cout << \"Hi\" << endl;\n").unwrap();
        dir
    }

    fn job(root: &Path) -> TranslationJob {
        TranslationJob::new(root.to_path_buf(), root.join("res/locale/en.po"))
    }

    #[test]
    fn prints_only_header_and_modified_paths() {
        let dir = workspace("msgid \"Hello\"\nmsgstr \"Bonjour\"\n");

        let mut out = Vec::new();
        let summary = write_run(&job(dir.path()), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Translated files:\n./main.cpp\n");
        assert_eq!(summary.files_changed, 1);
    }

    #[test]
    fn empty_catalog_prints_only_header() {
        let dir = workspace("");

        let mut out = Vec::new();
        write_run(&job(dir.path()), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Translated files:\n");
    }

    #[test]
    fn malformed_catalog_prints_nothing() {
        let dir = workspace("msgstr \"Bonjour\"\n");

        let mut out = Vec::new();
        assert!(write_run(&job(dir.path()), &mut out).is_err());
        assert!(out.is_empty());
        assert_eq!(
            fs::read_to_string(dir.path().join("main.cpp")).unwrap(),
            "cout << \"Bonjour\" << endl;\n"
        );
    }
}
