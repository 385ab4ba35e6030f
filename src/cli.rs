// ==========================================
// 学生实习数据汇总 - 命令行入口
// ==========================================
// 流程: 解析参数 → 加载配置 → 收集源文件 → 汇总 → 写报表 → 输出摘要
// 退出码: 0 已汇总 / 2 无数据 / 1 致命错误
// ==========================================

use crate::config::{ConfigManager, ConsolidatorConfig};
use crate::domain::ProcessingOutcome;
use crate::export::{write_csv_file, write_xlsx};
use crate::i18n::t_in;
use crate::importer::{BatchConsolidator, Consolidator};
use crate::logging::LogFormat;
use crate::report::ConsolidationSummary;
use crate::source::{collect_from_dir, collect_from_zip, SourceFile};
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FATAL: i32 = 1;
pub const EXIT_NO_DATA: i32 = 2;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    UnknownArg(String),

    #[error("unsupported locale: {0} (expected en or zh-CN)")]
    UnknownLocale(String),

    #[error("missing INPUT (a .zip archive or a directory)")]
    MissingInput,

    #[error("unexpected extra input: {0}")]
    ExtraInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub csv: bool,
    pub json: bool,
    pub concurrent: bool,
    pub log_json: bool,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

impl CliArgs {
    /// 解析参数 (不含程序名)
    pub fn parse_from<I>(args: I) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input: Option<PathBuf> = None;
        let mut out_dir = None;
        let mut config = None;
        let mut csv = false;
        let mut json = false;
        let mut concurrent = false;
        let mut log_json = false;
        let mut locale = "en".to_string();

        let mut args = args.into_iter();
        while let Some(a) = args.next() {
            match a.as_str() {
                "-o" | "--out" => out_dir = Some(PathBuf::from(value_for(&a, &mut args)?)),
                "-c" | "--config" => config = Some(PathBuf::from(value_for(&a, &mut args)?)),
                "--csv" => csv = true,
                "--json" => json = true,
                "--concurrent" => concurrent = true,
                "--log-json" => log_json = true,
                "--locale" => {
                    let v = value_for(&a, &mut args)?;
                    locale = match v.as_str() {
                        "en" => "en".to_string(),
                        "zh-CN" | "zh-cn" | "zh" => "zh-CN".to_string(),
                        other => return Err(CliError::UnknownLocale(other.to_string())),
                    };
                }
                "-h" | "--help" => return Ok(Command::Help),
                flag if flag.starts_with('-') => return Err(CliError::UnknownArg(a)),
                _ => {
                    if input.is_some() {
                        return Err(CliError::ExtraInput(a));
                    }
                    input = Some(PathBuf::from(a));
                }
            }
        }

        Ok(Command::Run(CliArgs {
            input: input.ok_or(CliError::MissingInput)?,
            out_dir,
            config,
            csv,
            json,
            concurrent,
            log_json,
            locale,
        }))
    }

    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

fn value_for<I: Iterator<Item = String>>(flag: &str, args: &mut I) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

/// 执行一次汇总, 返回退出码
pub fn run(args: &CliArgs) -> anyhow::Result<i32> {
    let config = load_config(args.config.as_deref())?;
    let files = collect_sources(&args.input, &config)?;
    let outcome = consolidate(args, &config, files)?;

    let summary = ConsolidationSummary::from_outcome(&outcome)
        .localize_failures(&args.locale, &outcome);

    let mut written = Vec::new();
    if outcome.has_data() {
        let out_dir = resolve_out_dir(args.out_dir.as_deref());
        written = write_reports(&outcome, &config, &out_dir, args.csv)?;
    }

    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        for line in summary.render_lines(&args.locale) {
            println!("{}", line);
        }
        for path in &written {
            let path = path.display().to_string();
            println!(
                "{}",
                t_in(&args.locale, "summary.report_written", &[("path", path.as_str())])
            );
        }
    }

    Ok(if outcome.has_data() { EXIT_OK } else { EXIT_NO_DATA })
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConsolidatorConfig> {
    let manager = match path {
        Some(path) => ConfigManager::from_file(path)?,
        None => ConfigManager::new(),
    };
    Ok(manager.with_env_overrides()?.into_config())
}

/// 按输入类型收集源文件 (.zip 压缩包 / 目录)
pub fn collect_sources(input: &Path, config: &ConsolidatorConfig) -> anyhow::Result<Vec<SourceFile>> {
    let extensions = &config.batch.spreadsheet_extensions;
    if input.is_dir() {
        return Ok(collect_from_dir(input, extensions)?);
    }

    let is_zip = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if !is_zip {
        bail!(
            "input must be a .zip archive or a directory: {}",
            input.display()
        );
    }

    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    Ok(collect_from_zip(&bytes, extensions)?)
}

fn consolidate(
    args: &CliArgs,
    config: &ConsolidatorConfig,
    files: Vec<SourceFile>,
) -> anyhow::Result<ProcessingOutcome> {
    let consolidator = BatchConsolidator::from_config(&config.extraction, &config.batch)?;
    info!(files = files.len(), concurrent = args.concurrent, "开始汇总");

    if !args.concurrent {
        return Ok(consolidator.consolidate(files));
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start worker runtime")?;
    Ok(runtime.block_on(consolidator.consolidate_concurrent(files)))
}

fn resolve_out_dir(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(dir) => dir.to_path_buf(),
        None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// 写出报表, 返回已写文件路径
pub fn write_reports(
    outcome: &ProcessingOutcome,
    config: &ConsolidatorConfig,
    out_dir: &Path,
    with_csv: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let stem = &config.export.file_stem;
    let xlsx_path = out_dir.join(format!("{}.xlsx", stem));
    write_xlsx(&outcome.table, &xlsx_path, &config.export.sheet_name)?;
    let mut written = vec![xlsx_path];

    if with_csv {
        let csv_path = out_dir.join(format!("{}.csv", stem));
        write_csv_file(&outcome.table, &csv_path)?;
        written.push(csv_path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        CliArgs::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let Command::Run(args) = parse(&["batch.zip"]).unwrap() else {
            panic!("expected run command");
        };
        assert_eq!(args.input, PathBuf::from("batch.zip"));
        assert_eq!(args.out_dir, None);
        assert!(!args.csv && !args.json && !args.concurrent && !args.log_json);
        assert_eq!(args.log_format(), LogFormat::Text);
        assert_eq!(args.locale, "en");
    }

    #[test]
    fn test_parse_all_options() {
        let Command::Run(args) = parse(&[
            "--out", "reports", "-c", "cfg.json", "--csv", "--json", "--concurrent", "--log-json",
            "--locale", "zh", "uploads",
        ])
        .unwrap() else {
            panic!("expected run command");
        };
        assert_eq!(args.input, PathBuf::from("uploads"));
        assert_eq!(args.out_dir, Some(PathBuf::from("reports")));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert!(args.csv && args.json && args.concurrent);
        assert_eq!(args.log_format(), LogFormat::Json);
        assert_eq!(args.locale, "zh-CN");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&[]), Err(CliError::MissingInput));
        assert_eq!(
            parse(&["a.zip", "--out"]),
            Err(CliError::MissingValue("--out".to_string()))
        );
        assert_eq!(
            parse(&["a.zip", "--fast"]),
            Err(CliError::UnknownArg("--fast".to_string()))
        );
        assert_eq!(
            parse(&["a.zip", "b.zip"]),
            Err(CliError::ExtraInput("b.zip".to_string()))
        );
        assert_eq!(
            parse(&["a.zip", "--locale", "fr"]),
            Err(CliError::UnknownLocale("fr".to_string()))
        );
    }

    #[test]
    fn test_help_notes_timeout_scope() {
        assert!(HELP.contains("file_timeout_ms only applies in this mode"));
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(&["a.zip", "--help"]), Ok(Command::Help));
    }

    #[test]
    fn test_collect_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single.xlsx");
        std::fs::write(&path, b"not used").unwrap();
        let err = collect_sources(&path, &ConsolidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("must be a .zip archive or a directory"));
    }
}
