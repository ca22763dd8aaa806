//! cachelens: inspect compressed, serialized cache entries.
//!
//! Reads a payload from a file or stdin, classifies it by its key,
//! decodes it and prints a report. `--list` renders the key listing for
//! a directory of payload files instead (file name = key).

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use cachelens::{
    build_rows, decode, detect, display_key, entry::TTL_PERSISTENT, logging::init_logging,
    to_ansi, to_pretty_json, KeyFilter, RawEntry, Settings, Ttl,
};

#[derive(Parser)]
#[command(name = "cachelens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decode and inspect compressed, serialized cache entries", long_about = None)]
struct Cli {
    /// Key the payload was stored under; drives format detection
    #[arg(short, long, default_value = "", env = "CACHELENS_KEY")]
    key: String,

    /// TTL in seconds as reported by the store (-1 no expiry, -2 missing)
    #[arg(long, default_value_t = TTL_PERSISTENT)]
    ttl: i64,

    /// Print plain JSON (no colors), e.g. for piping
    #[arg(long)]
    json: bool,

    /// List keys of a directory of payload files instead of decoding one
    #[arg(long, value_name = "DIR")]
    list: Option<PathBuf>,

    /// Filter pattern for --list (fragment or glob)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Verbose logging (debug)
    #[arg(short, long)]
    verbose: bool,

    /// Only warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Payload file (stdin when omitted)
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("loading configuration")?;

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        settings.log_level.as_str()
    };
    init_logging(level);

    match &cli.list {
        Some(dir) => run_list(&cli, &settings, dir),
        None => run_inspect(&cli, &settings),
    }
}

fn run_inspect(cli: &Cli, settings: &Settings) -> Result<()> {
    let payload = read_payload(cli.file.as_deref())?;

    let raw = RawEntry::new(cli.key.clone(), payload, cli.ttl);
    let tag = detect(&raw.key);
    let entry = decode(&raw, tag);

    if !cli.key.is_empty() {
        println!("key:    {}", display_key(&raw.key));
    }
    println!("format: {}", entry.format_label);
    println!("size:   {} bytes ({} KB)", entry.size_bytes, entry.size_kb());
    println!("ttl:    {}", raw.ttl());

    if let Some(err) = &entry.decode_error {
        let message = format!("decode failed: {err}");
        if settings.color && !cli.json {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{message}");
        }
    }

    let body = if cli.json || !settings.color {
        to_pretty_json(&entry.structured_value).context("rendering value")?
    } else {
        to_ansi(&entry.structured_value)
    };
    println!("{body}");
    Ok(())
}

fn run_list(cli: &Cli, settings: &Settings, dir: &Path) -> Result<()> {
    let pattern = cli.pattern.as_deref().unwrap_or(&settings.pattern);
    let filter = KeyFilter::new(pattern).context("compiling key pattern")?;

    let mut entries = Vec::new();
    for dirent in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let dirent = dirent?;
        if !dirent.file_type()?.is_file() {
            continue;
        }
        let key = dirent.file_name().to_string_lossy().into_owned();
        let size = dirent.metadata()?.len() as usize;
        // Files carry no expiry metadata.
        entries.push((key, size, Ttl::Persistent));
    }

    let rows = build_rows(entries, &filter);
    println!(
        "{:<40} {:>10} {:>10} {:>10}",
        "KEY", "TTL", "SIZE (KB)", "FORMAT"
    );
    for row in &rows {
        println!(
            "{:<40} {:>10} {:>10.2} {:>10}",
            row.display_key, row.ttl, row.size_kb, row.serialization
        );
    }
    println!("total keys: {}", rows.len());
    Ok(())
}

fn read_payload(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading payload from stdin")?;
            Ok(buf)
        }
    }
}
