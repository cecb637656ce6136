//! assetgen CLI

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use assetgen_core::discovery::DirDiscovery;
use assetgen_core::embed::{write_embedded, EmbedOptions, DEFAULT_BYTES_PER_LINE, DEFAULT_SYMBOL};
use assetgen_core::output::{write_report_json, write_report_plain, EmbedReport};
use assetgen_core::shaders::{load_shaders, write_shaders, DEFAULT_SHADER_EXTENSION};
use assetgen_core::subset::{ExternalSubsetter, Subsetter, DEFAULT_SUBSETTER};

mod picker;

/// CLI entrypoint for assetgen.
#[derive(Debug, Parser)]
#[command(
    name = "assetgen",
    version,
    about = "Embed icon fonts and shaders into C/C++ sources"
)]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, action = ArgAction::SetTrue)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Embed a binary file (optionally a subset font) as a byte array
    Icons(IconsArgs),
    /// Embed every shader in a directory as raw string constants
    Shaders(ShadersArgs),
    /// Open a file dialog for images and print the chosen path
    #[cfg(feature = "picker")]
    PickImage,
}

#[derive(Debug, Args)]
struct IconsArgs {
    /// Icon font or other binary file to embed
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Generated definition file (.cpp)
    #[arg(value_hint = ValueHint::FilePath)]
    source: PathBuf,

    /// Generated declaration file (.hpp)
    #[arg(value_hint = ValueHint::FilePath)]
    header: PathBuf,

    /// Keep only the glyphs for these characters
    #[arg(long = "subset", value_name = "CHARS")]
    subset: Option<String>,

    /// Subsetting program, invoked like pyftsubset
    #[arg(long = "subsetter", env = "ASSETGEN_SUBSETTER", default_value = DEFAULT_SUBSETTER)]
    subsetter: String,

    /// Array symbol; the length is exported as <SYMBOL>_len
    #[arg(long = "symbol", default_value = DEFAULT_SYMBOL)]
    symbol: String,

    /// Bytes per line in the generated definition
    #[arg(
        long = "per-line",
        default_value_t = DEFAULT_BYTES_PER_LINE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    per_line: usize,

    /// Skip the glyph coverage check of the subset font
    #[arg(long = "no-verify", action = ArgAction::SetTrue)]
    no_verify: bool,

    /// Print the run report as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ShadersArgs {
    /// Generated definition file (.cpp)
    #[arg(value_hint = ValueHint::FilePath)]
    source: PathBuf,

    /// Generated declaration file (.h)
    #[arg(value_hint = ValueHint::FilePath)]
    header: PathBuf,

    /// Directory holding the shader sources
    #[arg(value_hint = ValueHint::DirPath)]
    input_dir: PathBuf,

    /// Shader extensions to embed
    #[arg(
        long = "ext",
        value_delimiter = ',',
        default_value = DEFAULT_SHADER_EXTENSION
    )]
    extensions: Vec<String>,

    /// Descend into subdirectories
    #[arg(short = 'r', long = "recursive", action = ArgAction::SetTrue)]
    recursive: bool,

    /// Follow symlinks while scanning
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Print the run report as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Icons(args) => run_icons(args, &mut handle),
        Command::Shaders(args) => run_shaders(args, &mut handle),
        #[cfg(feature = "picker")]
        Command::PickImage => picker::run_pick_image(&mut handle),
    }
}

fn init_logging(quiet: bool) {
    let fallback = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run_icons(args: IconsArgs, out: impl Write) -> Result<()> {
    let opts = EmbedOptions::new()
        .with_symbol(&args.symbol)?
        .with_bytes_per_line(args.per_line);

    // an empty character set means no subsetting at all
    let subset = args.subset.as_deref().filter(|t| !t.is_empty());
    let data = match subset {
        Some(text) => {
            info!("subsetting font to only include: {text:?}");
            let subsetter = ExternalSubsetter::new(&args.subsetter);
            let data = subsetter
                .subset(&args.input, text)
                .with_context(|| format!("subsetting {}", args.input.display()))?;
            if !args.no_verify {
                verify_subset(&data, text)?;
            }
            data
        }
        None => {
            info!("embedding full file {}", args.input.display());
            fs::read(&args.input).with_context(|| format!("reading {}", args.input.display()))?
        }
    };

    write_embedded(&data, &args.source, &args.header, &opts)?;

    let report = EmbedReport {
        inputs: vec![args.input],
        symbols: vec![opts.symbol().to_string()],
        bytes: data.len(),
        subset: subset.map(str::to_string),
        definition: args.source,
        declaration: args.header,
    };
    emit_report(&report, args.json, out)
}

#[cfg(feature = "fontations")]
fn verify_subset(data: &[u8], text: &str) -> Result<()> {
    let coverage = assetgen_core::coverage::check_coverage(data, text)?;
    info!(glyphs = coverage.glyph_count, "subset font parsed");
    if !coverage.missing.is_empty() {
        let missing: String = coverage.missing.iter().collect();
        warn!("subset font has no glyphs for {missing:?}");
    }
    Ok(())
}

#[cfg(not(feature = "fontations"))]
fn verify_subset(_data: &[u8], _text: &str) -> Result<()> {
    warn!("built without font parsing; skipping coverage check");
    Ok(())
}

fn run_shaders(args: ShadersArgs, out: impl Write) -> Result<()> {
    let discovery = DirDiscovery::new(&args.input_dir, &args.extensions)
        .recursive(args.recursive)
        .follow_symlinks(args.follow_symlinks);

    let shaders = load_shaders(&discovery)?;
    if shaders.is_empty() {
        warn!(
            "no shaders matching {:?} in {}",
            args.extensions,
            args.input_dir.display()
        );
    }

    write_shaders(&shaders, &args.source, &args.header)?;
    info!("embedded {} shader(s)", shaders.len());

    let report = EmbedReport {
        bytes: shaders.iter().map(|s| s.text.len()).sum(),
        symbols: shaders.iter().map(|s| s.symbol.clone()).collect(),
        inputs: shaders.into_iter().map(|s| s.path).collect(),
        subset: None,
        definition: args.source,
        declaration: args.header,
    };
    emit_report(&report, args.json, out)
}

fn emit_report(report: &EmbedReport, json: bool, out: impl Write) -> Result<()> {
    if json {
        write_report_json(report, out)?;
    } else {
        write_report_plain(report, out)?;
    }
    Ok(())
}
