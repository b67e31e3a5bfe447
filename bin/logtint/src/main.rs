//! logtint - render captured process logs as styled HTML
//!
//! Reads captured terminal output from a file or stdin, converts the SGR
//! escape sequences it contains, and writes an HTML fragment, a standalone
//! page, or a JSON token list.

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use tracing::{debug, info, warn};

use logtint::config::{Config, ConfigLoader, OutputFormat};
use logtint::{render_document, render_fragment, tokenize};

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Input file (stdin when absent)
    input: Option<PathBuf>,
    /// Output file (stdout when absent)
    output: Option<PathBuf>,
    /// Output form, overriding the configured one
    format: Option<OutputFormat>,
    /// Page title, overriding the configured one
    title: Option<String>,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--output" | "-o" => {
                    if i + 1 < args.len() {
                        app_args.output = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing output file path".into());
                    }
                }
                "--format" | "-f" => {
                    if i + 1 < args.len() {
                        let format = args[i + 1]
                            .parse::<OutputFormat>()
                            .map_err(|e| e.to_string())?;
                        app_args.format = Some(format);
                        i += 1;
                    } else {
                        return Err("Missing format name".into());
                    }
                }
                "--title" | "-t" => {
                    if i + 1 < args.len() {
                        app_args.title = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err("Missing page title".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("logtint v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg));
                }
                _ => {
                    if app_args.input.is_none() {
                        app_args.input = Some(PathBuf::from(&args[i]));
                    } else {
                        return Err(format!("Unexpected argument: {}", args[i]));
                    }
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("logtint - render captured process logs as styled HTML");
    println!();
    println!("USAGE:");
    println!("    logtint [OPTIONS] [FILE]");
    println!();
    println!("    Reads FILE, or stdin when no file is given.");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -f, --format <FORMAT>  Output form: html (fragment, default), page, tokens");
    println!("    -o, --output <PATH>    Write output to PATH instead of stdout");
    println!("    -t, --title <TITLE>    Page title for the page format");
    println!("    -d, --debug            Enable debug logging");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    logtint looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $LOGTINT_CONFIG");
    println!("    3. $XDG_CONFIG_HOME/logtint/config.toml");
    println!("    4. ~/.logtint/config.toml");
    println!("    5. ./logtint.toml");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    LOGTINT_CONFIG    Path to configuration file");
    println!("    LOGTINT_DEBUG     Enable debug logging (1 or true)");
    println!("    RUST_LOG          Set logging level (error, warn, info, debug, trace)");
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug
        || env::var("LOGTINT_DEBUG").map_or(false, |v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "warn"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        // Converted output goes to stdout; keep logs off it.
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("starting logtint v{}", env!("CARGO_PKG_VERSION"));

    let config = load_configuration(&args);
    let format = args.format.unwrap_or(config.output.format);

    let input = read_input(&args)?;
    let tokens = tokenize(&input);
    debug!("converted {} bytes into {} tokens", input.len(), tokens.len());

    let rendered = match format {
        OutputFormat::Html => render_fragment(&tokens),
        OutputFormat::Page => {
            let mut page = config.page.clone();
            if let Some(title) = &args.title {
                page.title = title.clone();
            }
            render_document(&tokens, &page)
        }
        OutputFormat::Tokens => serde_json::to_string(&tokens)?,
    };

    write_output(&args, &rendered)?;
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Config {
    if let Some(path) = &args.config_path {
        debug!("loading config from: {}", path.display());
        match ConfigLoader::load_from_file(path) {
            Ok(config) => {
                info!("configuration loaded from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("failed to load configuration: {}. Using defaults", e);
                Config::default()
            }
        }
    } else {
        ConfigLoader::load().unwrap_or_else(|e| {
            warn!("failed to load configuration: {}. Using defaults", e);
            Config::default()
        })
    }
}

fn read_input(args: &AppArgs) -> anyhow::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(args: &AppArgs, rendered: &str) -> anyhow::Result<()> {
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
