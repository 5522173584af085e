//! extractprops - print the connection properties of a secure connect bundle
//!
//! Reads the bundle, resolves hostname/port/keyspace, base64-encodes the
//! certificate material and writes the six properties to stdout.

use clap::Parser;
use ec_config::resolve_bundle_path;
use ec_core::exit_codes::ExitCode;
use ec_core::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use ec_core::properties::{extract_properties, BundleProperties};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error};

/// Print connection properties stored in a secure connect bundle
#[derive(Parser, Debug)]
#[command(name = "extractprops")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the secure connect bundle (falls back to EASYCASS_BUNDLE)
    bundle: Option<PathBuf>,

    /// Quote values: key = "value"
    #[arg(short, long, conflicts_with = "json")]
    quote: bool,

    /// Print a JSON object instead of key = value lines
    #[arg(short, long)]
    json: bool,

    /// Log level for stderr output
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Log format for stderr output (human, jsonl)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

/// How properties are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputStyle {
    Plain,
    Quoted,
    Json,
}

impl Cli {
    fn style(&self) -> OutputStyle {
        if self.json {
            OutputStyle::Json
        } else if self.quote {
            OutputStyle::Quoted
        } else {
            OutputStyle::Plain
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    init_logging(&LogConfig::from_env(cli.log_level, cli.log_format));

    let exit_code = run(&cli);
    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> ExitCode {
    let Some(resolved) = resolve_bundle_path(cli.bundle.as_deref()) else {
        eprintln!("extractprops: no bundle given (pass a path or set EASYCASS_BUNDLE)");
        return ExitCode::ArgsError;
    };
    debug!(path = %resolved.path.display(), source = %resolved.source, "bundle path resolved");

    let props = match extract_properties(&resolved.path) {
        Ok(props) => props,
        Err(e) => {
            let code = e.exit_code();
            error!(code = %code, "extraction failed");
            eprintln!("extractprops: {}: {e}", resolved.path.display());
            return code;
        }
    };

    let rendered = match render(&props, cli.style()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("extractprops: failed to render output: {e}");
            return ExitCode::InternalError;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("extractprops: failed to write output: {e}");
        return ExitCode::IoError;
    }

    ExitCode::Clean
}

fn render(props: &BundleProperties, style: OutputStyle) -> Result<String, serde_json::Error> {
    if style == OutputStyle::Json {
        let mut text = serde_json::to_string_pretty(props)?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = String::new();
    for (name, value) in props.pairs() {
        match style {
            OutputStyle::Quoted => text.push_str(&format!("{name} = \"{value}\"\n")),
            _ => text.push_str(&format!("{name} = {value}\n")),
        }
    }
    Ok(text)
}
