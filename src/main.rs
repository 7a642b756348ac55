use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use camel2snake::config::Config;
use camel2snake::source::{self, walk, ConvertedSource};
use camel2snake::{CaseConverter, Mode};

#[derive(Parser)]
#[command(
    name = "camel2snake",
    version,
    about = "C/C++ variable names: camelCase => snake_case"
)]
struct Cli {
    /// File or directory path
    #[arg(required_unless_present = "test")]
    path: Option<PathBuf>,

    /// Rewrite visited files
    #[arg(long, requires = "path")]
    rewrite: bool,

    /// (dev) Echo each line before and after conversion
    #[arg(short, long, requires = "path")]
    echo: bool,

    /// (dev) Convert one line and show how each name was split
    #[arg(
        short,
        long,
        value_name = "LINE",
        conflicts_with_all = ["path", "rewrite", "echo"]
    )]
    test: Option<String>,

    /// JSON config file (default: ~/.camel2snake/config.json when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let converter = CaseConverter::new(config.rules);
    let color = std::io::stdout().is_terminal();

    if let Some(line) = &cli.test {
        let conversion = converter.convert_text(line, Mode::Plain);
        for rename in &conversion.renames {
            println!("{:<15} => {:?}", rename.original, rename.words);
        }
        println!("{}", paint(&conversion.text, GREEN, color));
        return Ok(());
    }

    let path = cli.path.as_deref().context("A path is required")?;
    if !path.exists() {
        bail!("not found: {}", path.display());
    }

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        walk::collect_sources(path, &config.sources)
    };
    tracing::info!("{} source file(s) under {}", files.len(), path.display());

    let failures = source::process_files(&converter, &files, cli.rewrite, |file, outcome| {
        match outcome {
            Ok(converted) => {
                if cli.echo {
                    print_echo(&converted, color);
                } else if !cli.rewrite {
                    print!("{}", converted.text());
                }
                eprintln!("{} count: {}", file.display(), converted.renames());
            }
            Err(e) => eprintln!("{} error: {e:#}", file.display()),
        }
    });

    if !cli.rewrite {
        eprintln!("\nTo rewrite files, use '--rewrite'; to echo lines, use '--echo'");
    }
    if failures > 0 {
        bail!("{failures} file(s) could not be converted");
    }

    Ok(())
}

const RED: &str = "\x1b[38;5;217m";
const GREEN: &str = "\x1b[32m";

fn paint(text: &str, color_code: &str, enabled: bool) -> String {
    if enabled {
        format!("{color_code}{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// `-` / `+` line pairs; `#` marks lines read as a constructor initializer list.
fn print_echo(source: &ConvertedSource, color: bool) {
    println!();
    for line in &source.lines {
        let flag = if line.initializer_list { '#' } else { ' ' };
        println!("-{flag}|{}", paint(&line.original, RED, color));
        println!("+{flag}|{}", paint(&line.converted, GREEN, color));
    }
}
