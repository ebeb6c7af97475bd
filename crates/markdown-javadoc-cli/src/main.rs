use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_javadoc_config::Config;
use markdown_javadoc_engine::{ConvertSettings, Converter, FileOutcome, RunReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Rewrite HTML-tagged Javadoc comments into Markdown `///` comments in place
#[derive(Debug, Parser)]
#[command(name = "markdown-javadoc", version)]
struct Cli {
    /// Directory (or single file) to convert, defaults to the current directory
    root: Option<PathBuf>,

    /// Only convert files whose name ends with this suffix
    #[arg(long)]
    suffix: Option<String>,

    /// Columns continuation lines are indented by
    #[arg(long, value_name = "COLUMNS")]
    indent: Option<usize>,

    /// Read defaults from this config file instead of the user config
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let (root, settings) = resolve(&cli, config);

    let report = Converter::new(settings)
        .dry_run(cli.dry_run)
        .run(&root)
        .with_context(|| format!("Failed to convert '{}'", root.display()))?;

    print_report(&report, cli.dry_run);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' not found", path.display()),
        },
        None => Ok(Config::load()
            .with_context(|| {
                format!(
                    "Failed to load config file {}",
                    Config::config_path().display()
                )
            })?
            .unwrap_or_default()),
    }
}

/// Command-line values win over the config file, which wins over defaults.
fn resolve(cli: &Cli, config: Config) -> (PathBuf, ConvertSettings) {
    let root = cli
        .root
        .clone()
        .or(config.root)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut settings = ConvertSettings::default();
    if let Some(suffix) = cli.suffix.clone().or(config.suffix) {
        settings = settings.with_suffix(suffix);
    }
    if let Some(indent) = cli.indent.or(config.continuation_indent) {
        settings = settings.with_continuation_indent(indent);
    }
    (root, settings)
}

/// A console line and the stream it belongs on
#[derive(Debug, PartialEq, Eq)]
enum ReportLine {
    Out(String),
    Err(String),
}

fn report_lines(report: &RunReport, dry_run: bool) -> Vec<ReportLine> {
    let verb = if dry_run { "Would update" } else { "Updated" };
    let mut lines: Vec<ReportLine> = report
        .files()
        .iter()
        .filter_map(|file| match &file.outcome {
            FileOutcome::Updated { .. } => Some(ReportLine::Out(format!(
                "{verb}: {}",
                file.path.display()
            ))),
            FileOutcome::Skipped => None,
            FileOutcome::Failed(err) => Some(ReportLine::Err(format!(
                "Error in '{}': {err}",
                file.path.display()
            ))),
        })
        .collect();
    lines.push(ReportLine::Out(format!(
        "{} updated, {} skipped, {} failed",
        report.updated(),
        report.skipped(),
        report.failed()
    )));
    lines
}

fn print_report(report: &RunReport, dry_run: bool) {
    for line in report_lines(report, dry_run) {
        match line {
            ReportLine::Out(text) => println!("{text}"),
            ReportLine::Err(text) => eprintln!("{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_javadoc_engine::{FileReport, IoError};
    use std::io::ErrorKind;

    fn sample_report() -> RunReport {
        [
            FileReport {
                path: PathBuf::from("src/A.java"),
                outcome: FileOutcome::Updated { blocks: 2 },
            },
            FileReport {
                path: PathBuf::from("src/B.java"),
                outcome: FileOutcome::Skipped,
            },
            FileReport {
                path: PathBuf::from("src/C.java"),
                outcome: FileOutcome::Failed(IoError::Write {
                    path: PathBuf::from("src/C.java"),
                    source: std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
                }),
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn report_lines_for_a_run() {
        assert_eq!(
            report_lines(&sample_report(), false),
            vec![
                ReportLine::Out("Updated: src/A.java".to_string()),
                ReportLine::Err(
                    "Error in 'src/C.java': Failed to write src/C.java: denied".to_string()
                ),
                ReportLine::Out("1 updated, 1 skipped, 1 failed".to_string()),
            ]
        );
    }

    #[test]
    fn report_lines_for_a_dry_run() {
        let lines = report_lines(&sample_report(), true);

        assert_eq!(lines[0], ReportLine::Out("Would update: src/A.java".to_string()));
    }

    #[test]
    fn empty_run_prints_only_summary() {
        assert_eq!(
            report_lines(&RunReport::default(), false),
            vec![ReportLine::Out("0 updated, 0 skipped, 0 failed".to_string())]
        );
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("markdown-javadoc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_to_current_directory() {
        let (root, settings) = resolve(&parse(&[]), Config::default());

        assert_eq!(root, PathBuf::from("."));
        assert_eq!(settings, ConvertSettings::default());
    }

    #[test]
    fn config_fills_missing_arguments() {
        let config = Config {
            root: Some(PathBuf::from("/src")),
            suffix: Some(".kt".to_string()),
            continuation_indent: Some(2),
        };

        let (root, settings) = resolve(&parse(&[]), config);

        assert_eq!(root, PathBuf::from("/src"));
        assert_eq!(settings.suffix(), ".kt");
        assert_eq!(settings.continuation_indent(), 2);
    }

    #[test]
    fn arguments_override_config() {
        let config = Config {
            root: Some(PathBuf::from("/src")),
            suffix: Some(".kt".to_string()),
            continuation_indent: Some(2),
        };

        let cli = parse(&["project", "--suffix", ".java", "--indent", "8", "--dry-run"]);
        let (root, settings) = resolve(&cli, config);

        assert!(cli.dry_run);
        assert_eq!(root, PathBuf::from("project"));
        assert_eq!(settings.suffix(), ".java");
        assert_eq!(settings.continuation_indent(), 8);
    }

    #[test]
    fn rejects_extra_positional_arguments() {
        let result = Cli::try_parse_from(["markdown-javadoc", "a", "b"]);
        assert!(result.is_err());
    }
}
