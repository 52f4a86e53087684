use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wordcut::{generate_from_path, GeneratorConfig, Target};

/// wordcut - generate a single-pass keyword recognizer from a word table
#[derive(Parser, Debug)]
#[command(name = "wordcut")]
#[command(about = "Generate a keyword recognizer function from a word table", long_about = None)]
struct Args {
    /// Word table to read
    #[arg(value_name = "TABLE")]
    table: PathBuf,

    /// Name of the generated function
    #[arg(value_name = "FUNCTION")]
    function_name: String,

    /// Language of the generated source
    #[arg(long, value_enum, default_value_t = TargetArg::Rust)]
    target: TargetArg,

    /// Write the source here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Type of the returned token identifier
    #[arg(long)]
    id_type: Option<String>,

    /// Type written through the value slot
    #[arg(long)]
    value_type: Option<String>,

    /// Character type (C++ only)
    #[arg(long)]
    char_type: Option<String>,

    /// Expression returned when nothing matches
    #[arg(long)]
    no_match: Option<String>,

    /// Predicate for word-continuation characters
    #[arg(long)]
    alnum: Option<String>,

    /// Predicate for word-start characters
    #[arg(long)]
    alpha: Option<String>,

    /// Reject tables where two rows share a literal
    #[arg(long)]
    strict: bool,

    /// Omit the "generated by" banner
    #[arg(long)]
    no_header: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TargetArg {
    Rust,
    Cpp,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Rust => Target::Rust,
            TargetArg::Cpp => Target::Cpp,
        }
    }
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::for_target(self.target.into())
            .with_function_name(self.function_name.as_str())
            .with_strict(self.strict)
            .with_header(!self.no_header);
        if let Some(ty) = &self.id_type {
            config = config.with_id_type(ty.as_str());
        }
        if let Some(ty) = &self.value_type {
            config = config.with_value_type(ty.as_str());
        }
        if let Some(ty) = &self.char_type {
            config = config.with_char_type(ty.as_str());
        }
        if let Some(expr) = &self.no_match {
            config = config.with_no_match(expr.as_str());
        }
        if let Some(alnum) = &self.alnum {
            config.alnum_predicate = alnum.clone();
        }
        if let Some(alpha) = &self.alpha {
            config.alpha_predicate = alpha.clone();
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "wordcut=debug,info",
        _ => "wordcut=trace,debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let generated = generate_from_path(&args.table, &config)
        .with_context(|| format!("failed to generate from {}", args.table.display()))?;

    match &args.output {
        Some(path) => fs::write(path, &generated.source)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(generated.source.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }

    let stats = generated.stats;
    tracing::info!(
        function = %config.function_name,
        target = config.target.name(),
        entries = stats.entries,
        branches = stats.branches,
        accepts = stats.accepts,
        merged_labels = stats.merged_labels,
        bytes = stats.bytes,
        "wrote recognizer"
    );

    Ok(())
}
