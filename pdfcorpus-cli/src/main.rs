use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

// Import from pdfcorpus-core
use pdfcorpus_core::{
    generate_extraction_report, validate_jsonl, CorpusProcessor, CorpusStorage, ExtractionMethod,
    FileStorage, IngestConfig, NoOpStorage,
};

use pdfcorpus::logging;

#[derive(Parser)]
#[command(name = "pdfcorpus")]
#[command(about = "Extract text and metadata from a directory of PDF reports")]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Defaults to `ingest` with default settings
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Extract every PDF of the input directory and write texts, metadata and a report
    Ingest(IngestArgs),

    /// Check that every line of a file is a standalone JSON value
    ValidateJsonl {
        /// Path to the .jsonl file
        path: PathBuf,
    },
}

#[derive(Args, Default)]
struct IngestArgs {
    /// Directory containing the PDF files (default: data/raw)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for texts, metadata and report (default: data/processed)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Extraction method
    #[arg(short, long, value_enum)]
    method: Option<MethodArg>,

    /// Never retry a blank primary extraction with the secondary backend
    #[arg(long)]
    no_fallback: bool,

    /// Process and print the report without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print a timing summary of extraction and metadata steps
    #[arg(long)]
    profile: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    /// pdf-extract, falling back to lopdf on blank output
    Primary,
    /// lopdf only
    Secondary,
}

impl From<MethodArg> for ExtractionMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Primary => ExtractionMethod::Primary,
            MethodArg::Secondary => ExtractionMethod::Secondary,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    match cli.command {
        Some(Command::ValidateJsonl { path }) => run_validate_jsonl(&path),
        Some(Command::Ingest(args)) => run_ingest(args),
        None => run_ingest(IngestArgs::default()),
    }
}

fn run_ingest(args: IngestArgs) -> Result<()> {
    println!("\n🦀 BEGINNING PDF INGESTION\n");

    // Load config, then apply CLI overrides
    let mut config = IngestConfig::load_with_fallback(args.config.as_deref());
    if let Some(input) = args.input {
        config.input_dir = input;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    if let Some(method) = args.method {
        config.method = method.into();
    }
    if args.no_fallback {
        config.fallback = false;
    }

    // Output folders are created up front, before any PDF is read
    let file_storage = if args.dry_run {
        println!("🚫 Dry run: nothing will be written");
        None
    } else {
        Some(
            FileStorage::new(&config.output_dir)?
                .with_report_filename(config.report_filename.clone()),
        )
    };
    let storage: &dyn CorpusStorage = match &file_storage {
        Some(storage) => storage,
        None => &NoOpStorage,
    };

    println!("📄 Input: {}", config.input_dir.display());
    let mut processor = CorpusProcessor::from_config(&config).with_profiling(args.profile);
    let corpus = processor.process_all_pdfs(&config.input_dir)?;

    if corpus.is_empty() {
        eprintln!("❌ No text extracted. Check your PDF files.");
        return Ok(());
    }

    println!("\n{}", "=".repeat(70));
    storage.save_results(&corpus)?;
    if let Some(file_storage) = &file_storage {
        println!("💾 Texts saved to: {}", file_storage.texts_dir().display());
        println!("💾 Metadata saved to: {}", file_storage.metadata_path().display());
    }

    println!("\n{}", "=".repeat(70));
    let report = generate_extraction_report(&corpus);
    println!("{report}");

    if let Some(report_path) = storage.save_report(&report)? {
        println!("✔ Report saved to: {}\n", report_path.display());
    }

    if let Some(summary) = processor.profiler().summary() {
        println!("{summary}");
    }

    Ok(())
}

fn run_validate_jsonl(path: &Path) -> Result<()> {
    let validation = validate_jsonl(path)?;
    println!("{validation}");

    if !validation.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
