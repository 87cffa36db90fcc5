use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use arm7_step::listing::{fmt_row, list_range};
use arm7_step::model::is_mapped;
use arm7_step::{load_raw_bin, repl, Image, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through ARM32 code in a raw binary image", long_about = None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// First address to decode (default: --base)
    #[arg(long, value_parser = parse_u32)]
    entry: Option<u32>,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Subcommand (default: step)
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive stepping: Enter steps, `thumb`/`arm` switch mode, `quit` leaves
    Step,
    /// Linear listing of [start, end) without following branches
    Range {
        /// Start address (hex or dec)
        #[arg(value_parser = parse_u32)]
        start: u32,
        /// End address (hex or dec, exclusive)
        #[arg(value_parser = parse_u32)]
        end: u32,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn session_config(img: &Image, entry: u32) -> Result<SessionConfig> {
    anyhow::ensure!(
        is_mapped(img, entry),
        "entry {entry:#010x} is outside the loaded image"
    );
    Ok(SessionConfig {
        entry,
        ..SessionConfig::default()
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;
    let cfg = session_config(&img, cli.entry.unwrap_or(cli.base))?;
    tracing::debug!(?cfg, bytes = img.len(), "image loaded");

    match cli.cmd.unwrap_or(Command::Step) {
        Command::Step => {
            let mut session = Session::new(&img, cfg);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            repl::run(&mut session, stdin.lock(), &mut stdout)?;
        }
        Command::Range { start, end, format, out } => {
            anyhow::ensure!(end >= start, "end must be >= start");
            let rows = list_range(&img, start, end)?;
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for row in &rows {
                        buf.push_str(&fmt_row(row));
                        buf.push('\n');
                    }
                    buf
                }
            };
            if let Some(path) = out {
                std::fs::write(path, text)?;
            } else {
                print!("{text}");
            }
        }
    }

    Ok(())
}
