use chrono::Utc;
use sentiment_report::core::ZoomState;
use sentiment_report::report::{BatchResult, SentimentSnapshot};
use sentiment_report::{ReportConfig, ReportEngine};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: sentiment_report <pdf|text|batch> --input <snapshot.json> [--input <snapshot.json> ...] --output <path> [--config <config.json>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Pdf,
    Text,
    Batch,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    inputs: Vec<PathBuf>,
    output: PathBuf,
    config: Option<PathBuf>,
}

fn main() {
    let _ = sentiment_report::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => ReportConfig::from_json_str(&read_file(path)?).map_err(|e| e.to_string())?,
        None => ReportConfig::default(),
    };
    let engine = ReportEngine::new(config).map_err(|e| e.to_string())?;
    let generated_at = Utc::now();

    match args.command {
        CommandKind::Pdf => {
            let snapshot = single_snapshot(&args.inputs)?;
            let document = engine
                .analysis_document(&snapshot, &ZoomState::default(), generated_at)
                .map_err(|e| e.to_string())?;
            write_file(&args.output, document.bytes())
        }
        CommandKind::Text => {
            let snapshot = single_snapshot(&args.inputs)?;
            let text = engine.analysis_lines(&snapshot, generated_at).join("\n");
            write_file(&args.output, text.as_bytes())
        }
        CommandKind::Batch => {
            let results = args
                .inputs
                .iter()
                .map(|path| load_snapshot(path).map(|s| BatchResult::from_snapshot(&s)))
                .collect::<Result<Vec<_>, _>>()?;
            let text = engine.batch_report(&results, generated_at);
            write_file(&args.output, text.as_bytes())
        }
    }
}

fn single_snapshot(inputs: &[PathBuf]) -> Result<SentimentSnapshot, String> {
    match inputs {
        [path] => load_snapshot(path),
        _ => Err(format!("expected exactly one --input, got {}", inputs.len())),
    }
}

fn load_snapshot(path: &Path) -> Result<SentimentSnapshot, String> {
    SentimentSnapshot::from_json_str(&read_file(path)?)
        .map_err(|err| format!("`{}`: {err}", path.display()))
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!("failed to create directory `{}`: {err}", parent.display())
            })?;
        }
    }
    fs::write(path, bytes).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("pdf") => CommandKind::Pdf,
        Some("text") => CommandKind::Text,
        Some("batch") => CommandKind::Batch,
        _ => return Err(USAGE.to_owned()),
    };

    let mut inputs = Vec::new();
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                inputs.push(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    if inputs.is_empty() {
        return Err("missing --input".to_owned());
    }
    let output = output.ok_or_else(|| "missing --output".to_owned())?;

    Ok(CliArgs {
        command,
        inputs,
        output,
        config,
    })
}
