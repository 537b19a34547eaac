mod config;
mod error;
mod export;
mod report;

use anyhow::Result;
use arranger::{
    ArrangeError, ArrangeSummary, Document, LEFT_TO_RIGHT, Parent, TOP_TO_BOTTOM, run_command,
};
use clap::Parser;
use error::CliError;
use log::{debug, error, info};
use report::{Census, Reporter, RunReport};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Arrange the frames of a page into reading order", long_about = None)]
struct Args {
    /// Page document (JSON)
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Where to write the arranged page (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Arrangement command: left-to-right | top-to-bottom
    #[arg(short = 'm', long = "command")]
    command: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Skip the run report backup
    #[arg(long = "no-report")]
    no_report: bool,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = config::Config::load(&args.config)?;
    let command = command_from(args.command.as_deref(), &config.arrange.command);

    let mut page = load_page(&args.input)?;
    let census = Census::of(&page.children);
    debug!("Loaded page {}: {census:?}", args.input.display());

    let reporter = if config.report.enabled && !args.no_report {
        Reporter::spawn(config.report.output_dir.clone())
    } else {
        Reporter::disabled()
    };

    let result = run_command(&command, &mut page);
    reporter.submit(RunReport::new(&command, &result, census));

    let exit_code = match &result {
        Ok(summary) => {
            log_final_order(&page);
            write_page(&page, args.output.as_deref())?;
            info!("{}", describe(&command, &result));
            debug!("{summary:?}");
            0
        }
        Err(_) => {
            error!("{}", describe(&command, &result));
            if matches!(result, Err(ArrangeError::InvalidDirection(_))) {
                error!("Available commands: {LEFT_TO_RIGHT}, {TOP_TO_BOTTOM}");
            }
            1
        }
    };

    reporter.finish();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn load_page(path: &Path) -> Result<Document, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let page: Document = serde_json::from_str(&content).map_err(|e| CliError::PageParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    page.validate()?;
    Ok(page)
}

fn write_page(page: &Document, output: Option<&Path>) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(page)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n").map_err(|e| CliError::WriteFile {
                path: path.to_path_buf(),
                source: e,
            })?;
            info!("Arranged page saved to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Command from the command line or the config, with surrounding whitespace removed
fn command_from(arg: Option<&str>, configured: &str) -> String {
    arg.unwrap_or(configured).trim().to_string()
}

/// One-line outcome shown to the user
fn describe(command: &str, result: &arranger::Result<ArrangeSummary>) -> String {
    match result {
        Ok(summary) if summary.moves == 0 => {
            format!("Nothing to arrange ({})", summary.direction)
        }
        Ok(summary) => format!(
            "Arranged {} ({} collections, {} moves)",
            summary.direction, summary.collections, summary.moves
        ),
        Err(e) => format!("Arrange failed for '{command}': {e}"),
    }
}

fn log_final_order(page: &Document) {
    let root: Vec<&str> = page.children.iter().map(|i| i.id.as_str()).collect();
    debug!("root: {}", root.join(", "));
    for item in page.children.iter().filter(|i| i.is_container()) {
        if let Ok(order) = page.order(&Parent::Container(item.id.clone())) {
            let ids: Vec<&str> = order.iter().map(|id| id.as_str()).collect();
            debug!("{}: {}", item.id, ids.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arranger::Direction;
    use tempfile::TempDir;

    const PAGE: &str = r#"{
        "children": [
            {"id": "C", "x": 0, "y": 15, "width": 10, "height": 10},
            {"id": "B", "x": 20, "y": 0, "width": 10, "height": 10},
            {"id": "A", "x": 0, "y": 0, "width": 10, "height": 10}
        ]
    }"#;

    #[test]
    fn test_describe_success() {
        let summary = ArrangeSummary {
            direction: Direction::LeftToRight,
            collections: 2,
            moves: 5,
        };
        assert_eq!(
            describe("left-to-right", &Ok(summary)),
            "Arranged left-to-right (2 collections, 5 moves)"
        );
    }

    #[test]
    fn test_describe_empty_page() {
        let summary = ArrangeSummary {
            direction: Direction::TopToBottom,
            collections: 0,
            moves: 0,
        };
        assert_eq!(
            describe("top-to-bottom", &Ok(summary)),
            "Nothing to arrange (top-to-bottom)"
        );
    }

    #[test]
    fn test_command_is_trimmed_at_the_boundary() {
        assert_eq!(command_from(Some(" TOP_TO_BOTTOM\n"), "left-to-right"), "TOP_TO_BOTTOM");
        assert_eq!(command_from(None, "  left-to-right "), "left-to-right");
    }

    #[test]
    fn test_describe_failure() {
        let err = ArrangeError::InvalidDirection("sideways".to_string());
        let message = describe("sideways", &Err(err));
        assert!(message.starts_with("Arrange failed for 'sideways'"));
    }

    #[test]
    fn test_load_arrange_and_write_page() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("page.json");
        let output = temp_dir.path().join("arranged.json");
        std::fs::write(&input, PAGE).unwrap();

        let mut page = load_page(&input).unwrap();
        let summary = run_command("left-to-right", &mut page).unwrap();
        assert_eq!(summary.moves, 3);
        write_page(&page, Some(&output)).unwrap();

        let written: Document =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let order: Vec<&str> = written.children.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn test_load_page_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("page.json");
        std::fs::write(&input, "{ not json").unwrap();

        assert!(matches!(load_page(&input), Err(CliError::PageParse { .. })));
    }

    #[test]
    fn test_load_page_rejects_invalid_items() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("page.json");
        std::fs::write(
            &input,
            r#"{"children": [{"id": "a", "x": 0, "y": 0, "width": -5, "height": 1}]}"#,
        )
        .unwrap();

        assert!(matches!(
            load_page(&input),
            Err(CliError::Arrange(ArrangeError::InvalidItem { .. }))
        ));
    }

    #[test]
    fn test_load_missing_page() {
        let result = load_page(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CliError::ReadFile { .. })));
    }
}
