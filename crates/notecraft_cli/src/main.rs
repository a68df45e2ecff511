//! Command-line front end for the note content core.
//!
//! # Responsibility
//! - Run parse/serialize/classify/tag extraction on a file or stdin.
//! - Print machine-readable JSON so output can be piped into other tools.

use clap::{Parser, Subcommand};
use log::info;
use notecraft_core::{
    classify, core_version, extract_tags, init_logging_from_config, CoreConfig, Document,
    NoteContentService,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notecraft")]
#[command(about = "Inspect and convert note content")]
struct Cli {
    /// JSON config file (log level, log dir, preview length)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling logs; overrides the config value
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse note text into a node tree (JSON)
    Parse { input: Option<PathBuf> },
    /// Flatten a node tree (JSON) back into note text
    Serialize { input: Option<PathBuf> },
    /// Print derived content properties (JSON)
    Classify { input: Option<PathBuf> },
    /// Print hashtags, one per line
    Tags { input: Option<PathBuf> },
    /// Print the persistence projection: tags, properties, preview (JSON)
    Project { input: Option<PathBuf> },
    /// Print the core version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, String> {
    let mut config = match cli.config.as_deref() {
        Some(path) => CoreConfig::load(path).map_err(|err| err.to_string())?,
        None => CoreConfig::default(),
    };
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir;
    }
    if init_logging_from_config(&config)? {
        info!("event=cli_start module=cli status=ok version={}", core_version());
    }

    let service = NoteContentService::new(&config);
    match cli.command {
        Command::Parse { input } => {
            let text = read_input(input.as_deref())?;
            to_json(&service.parse(&text))
        }
        Command::Serialize { input } => {
            let raw = read_input(input.as_deref())?;
            let document: Document =
                serde_json::from_str(&raw).map_err(|err| format!("invalid node tree: {err}"))?;
            service.flatten(&document).map_err(|err| err.to_string())
        }
        Command::Classify { input } => {
            let text = read_input(input.as_deref())?;
            to_json(&classify(&text))
        }
        Command::Tags { input } => {
            let text = read_input(input.as_deref())?;
            Ok(extract_tags(&text).into_iter().collect::<Vec<_>>().join("\n"))
        }
        Command::Project { input } => {
            let text = read_input(input.as_deref())?;
            to_json(&service.project(&text))
        }
        Command::Version => Ok(format!("notecraft {}", core_version())),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read {}: {err}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("failed to encode output: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{run, Cli};
    use clap::Parser;
    use std::io::Write;

    fn run_args(args: &[&str]) -> Result<String, String> {
        run(Cli::try_parse_from(args.iter().copied()).expect("arguments should parse"))
    }

    fn note_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(content.as_bytes())
            .expect("note should be written");
        file
    }

    #[test]
    fn tags_command_lists_sorted_tags() {
        let file = note_file("#b text #a\n```\n#c\n```");
        let path = file.path().to_str().expect("utf-8 path");
        assert_eq!(run_args(&["notecraft", "tags", path]).unwrap(), "a\nb");
    }

    #[test]
    fn parse_then_serialize_restores_text() {
        let note = note_file("# Title\n- [ ] task #work");
        let note_path = note.path().to_str().expect("utf-8 path");
        let tree = run_args(&["notecraft", "parse", note_path]).unwrap();

        let tree_file = note_file(&tree);
        let tree_path = tree_file.path().to_str().expect("utf-8 path");
        let text = run_args(&["notecraft", "serialize", tree_path]).unwrap();
        assert_eq!(text, "# Title\n- [ ] task #work");
    }

    #[test]
    fn serialize_rejects_invalid_tree() {
        let tree_file = note_file(r#"[{"type": "HEADING", "level": 9, "children": []}]"#);
        let tree_path = tree_file.path().to_str().expect("utf-8 path");
        let err = run_args(&["notecraft", "serialize", tree_path]).unwrap_err();
        assert!(err.contains("heading level"));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = run_args(&["notecraft", "--config", "/nonexistent/notecraft.json", "version"])
            .unwrap_err();
        assert!(err.contains("failed to read config"));
    }
}
