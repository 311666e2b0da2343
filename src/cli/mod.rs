// ============================================================================
// LitWrap - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

pub mod check;
pub mod init;
pub mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::logger::init_tracing;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use run::handle_run;

/// LitWrap - wrap translatable string literals in a gettext call
#[derive(Debug, Parser)]
#[command(name = "litwrap")]
#[command(about = "Rewrite catalog-matched string literals into translation calls")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Workspace root directory
    #[arg(short = 'C', long, global = true)]
    pub workspace_root: Option<String>,

    /// Message catalog path (relative to the workspace root)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Source file extension to scan (repeatable)
    #[arg(short = 'e', long = "extension", global = true)]
    pub extensions: Vec<String>,

    /// Lines starting with this token are never rewritten (repeatable)
    #[arg(short = 'm', long = "marker", global = true)]
    pub markers: Vec<String>,

    /// Translation function name used to wrap literals
    #[arg(short = 'w', long, global = true)]
    pub wrapper: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite matching literals in place and list modified files
    Run,
    /// Report what would be rewritten without touching any file
    Check(CheckArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // 配置文件跟随 -C 指定的工作区
    Config::initialize(&config_dir(&cli))?;

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    Colors::configure(Config::get_colored());
    init_tracing(Config::get_verbose());

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => handle_run(),
        Commands::Check(args) => handle_check(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Directory holding the configuration file
fn config_dir(cli: &Cli) -> &Path {
    Path::new(cli.workspace_root.as_deref().unwrap_or("."))
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        workspace_root: cli.workspace_root.clone(),
        catalog_path: cli.catalog.clone(),
        extensions: non_empty(&cli.extensions),
        exclude_markers: non_empty(&cli.markers),
        wrapper: cli.wrapper.clone(),
        language: cli.language.clone(),
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_defaults_to_run() {
        let cli = Cli::try_parse_from(["litwrap"]).unwrap();
        assert!(cli.command.is_none());

        let args = build_runtime_args(&cli);
        assert!(args.extensions.is_none());
        assert!(args.exclude_markers.is_none());
        assert!(args.catalog_path.is_none());
    }

    #[test]
    fn repeated_flags_are_collected() {
        let cli = Cli::try_parse_from([
            "litwrap", "check", "-e", "cpp", "-e", "cc", "-m", "LOG", "--format", "json",
        ])
        .unwrap();

        let args = build_runtime_args(&cli);
        assert_eq!(args.extensions, Some(vec!["cpp".to_string(), "cc".to_string()]));
        assert_eq!(args.exclude_markers, Some(vec!["LOG".to_string()]));
        match cli.command {
            Some(Commands::Check(check)) => assert_eq!(check.format, "json"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_is_looked_up_in_workspace_root() {
        let cli = Cli::try_parse_from(["litwrap"]).unwrap();
        assert_eq!(config_dir(&cli), Path::new("."));

        let cli = Cli::try_parse_from(["litwrap", "check", "-C", "project"]).unwrap();
        assert_eq!(config_dir(&cli), Path::new("project"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
