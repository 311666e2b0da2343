// ============================================================================
// LitWrap - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 预演改写，报告将被修改的文件和行
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用翻译任务（不写回）
//   - ✅ 结果格式化输出（table / json）
//   - ❌ 不应修改任何文件
//   - ❌ 不应包含改写逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::core::{JobMode, TranslationJob};
use crate::models::report::RewriteSummary;
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, SEPARATOR};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 预演改写
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示每一行的改动
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    let json = match args.format.as_str() {
        "json" => true,
        "table" => false,
        other => anyhow::bail!(tf!("error.unknown_format", other)),
    };

    if !json {
        Logger::info(t!("check.start"));
    }

    let job = TranslationJob::new_from_config()?.with_changes(args.detail || json);
    let summary = dry_run(&job)?;

    if json {
        let stdout = io::stdout();
        write_json(&summary, &mut stdout.lock())?;
    } else {
        print_summary_table(&summary, args.detail);
    }

    Ok(())
}

/// 预演，不写任何文件
fn dry_run(job: &TranslationJob) -> Result<RewriteSummary> {
    let catalog = job.load_catalog()?;
    job.execute(&catalog, JobMode::DryRun, |_| Ok(()))
}

/// JSON 模式下标准输出只有这一份文档
fn write_json<W: Write>(summary: &RewriteSummary, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// 打印预演结果表格
fn print_summary_table(summary: &RewriteSummary, detail: bool) {
    if summary.files.is_empty() {
        Logger::success(t!("check.none"));
        return;
    }

    Logger::info("");
    Logger::info(SEPARATOR);
    for file in &summary.files {
        Logger::info(format!(
            "{} {}",
            icons::FILE,
            tf!("check.file_header", Colors::info(&file.path), file.lines_changed)
        ));

        if detail {
            for change in &file.changes {
                Logger::info(format!(
                    "    {}",
                    Colors::dimmed(&tf!("check.line_number", change.line_number))
                ));
                Logger::info(format!(
                    "      {} {}",
                    Colors::error(icons::BEFORE),
                    change.before.trim()
                ));
                Logger::info(format!(
                    "      {} {}",
                    Colors::success(icons::AFTER),
                    change.after.trim()
                ));
            }
        }
    }
    Logger::info(SEPARATOR);

    Logger::warn(tf!(
        "check.would_change",
        summary.files_changed,
        summary.lines_changed
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn json_report_with_empty_catalog_is_a_single_document() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("res/locale")).unwrap();
        fs::write(root.join("res/locale/en.po"), "").unwrap();
        fs::write(root.join("main.cpp"), "cout << \"Bonjour\" << endl;\n").unwrap();

        let job = TranslationJob::new(root.to_path_buf(), root.join("res/locale/en.po"))
            .with_changes(true);
        let summary = dry_run(&job).unwrap();

        let mut out = Vec::new();
        write_json(&summary, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["catalog_entries"], 0);
        assert_eq!(value["files_scanned"], 1);
        assert_eq!(value["files_changed"], 0);
    }

    #[test]
    fn json_report_lists_line_changes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("res/locale")).unwrap();
        fs::write(root.join("res/locale/en.po"), "msgid \"Hello\"\nmsgstr \"Bonjour\"\n")
            .unwrap();
        fs::write(root.join("main.cpp"), "cout << \"Bonjour\" << endl;\n").unwrap();

        let job = TranslationJob::new(root.to_path_buf(), root.join("res/locale/en.po"))
            .with_changes(true);
        let summary = dry_run(&job).unwrap();

        let mut out = Vec::new();
        write_json(&summary, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["files"][0]["path"], "./main.cpp");
        assert_eq!(
            value["files"][0]["changes"][0]["after"],
            "cout << _(\"Hello\") << endl;"
        );
        assert_eq!(
            fs::read_to_string(root.join("main.cpp")).unwrap(),
            "cout << \"Bonjour\" << endl;\n"
        );
    }
}
