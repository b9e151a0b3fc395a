//! restruct CLI - rebuild clean, structured documents from fragment dumps

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use restruct::{
    render, DocumentSource, FragmentDocument, NoiseProfile, PageFilter, Pipeline, PipelineOptions,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "restruct")]
#[command(version)]
#[command(about = "Rebuild clean, structured documents from fragment dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one fragment dump to a structured document
    Convert {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input path with a new extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: Format,

        /// Noise-profile JSON file for this document family
        #[arg(long, value_name = "FILE")]
        noise_profile: Option<PathBuf>,

        /// Keep the first page instead of dropping it as a cover
        #[arg(long)]
        keep_first_page: bool,
    },

    /// Convert every fragment dump in a folder
    Batch {
        /// Input folder containing .json fragment dumps
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output folder (defaults to the input folder)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Noise-profile JSON file applied to all documents
        #[arg(long, value_name = "FILE")]
        noise_profile: Option<PathBuf>,

        /// Keep first pages instead of dropping them as covers
        #[arg(long)]
        keep_first_page: bool,
    },

    /// Show document information without converting
    Info {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown output
    Markdown,
    /// Plain text output
    Text,
    /// The raw content stream as JSON
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Text => "txt",
            Format::Json => "json",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            noise_profile,
            keep_first_page,
        } => cmd_convert(&input, output, format, noise_profile, keep_first_page),
        Commands::Batch {
            input,
            output,
            noise_profile,
            keep_first_page,
        } => cmd_batch(&input, output, noise_profile, keep_first_page),
        Commands::Info { input } => cmd_info(&input),
    };
    std::process::exit(exit_code);
}

fn build_pipeline(
    noise_profile: Option<&Path>,
    keep_first_page: bool,
) -> restruct::Result<Pipeline> {
    let mut options = PipelineOptions::new();
    if let Some(path) = noise_profile {
        options = options.with_noise_profile(NoiseProfile::from_path(path)?);
    }
    if keep_first_page {
        options = options.keep_first_page();
    }
    Pipeline::new(options)
}

fn cmd_convert(
    input: &Path,
    output: Option<PathBuf>,
    format: Format,
    noise_profile: Option<PathBuf>,
    keep_first_page: bool,
) -> i32 {
    let pipeline = match build_pipeline(noise_profile.as_deref(), keep_first_page) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return 1;
        }
    };

    let output = output.unwrap_or_else(|| {
        let mut path = input.to_path_buf();
        // The dump is itself .json; keep the stream output distinct
        if format == Format::Json {
            path.set_extension("stream.json");
        } else {
            path.set_extension(format.extension());
        }
        path
    });

    match convert_one(&pipeline, input, &output, format) {
        Ok(true) => {
            println!("{} {}", "✓".green(), output.display());
            0
        }
        Ok(false) => {
            println!(
                "{} {}: no salvageable content, no output written",
                "∅".yellow(),
                input.display()
            );
            0
        }
        Err(e) => {
            eprintln!("{} {}: {}", "✗".red(), input.display(), e);
            1
        }
    }
}

/// Convert a single dump. Returns false when the document yielded no
/// content and no output file was written.
fn convert_one(
    pipeline: &Pipeline,
    input: &Path,
    output: &Path,
    format: Format,
) -> restruct::Result<bool> {
    let source = FragmentDocument::open(input)?;
    let stream = pipeline.process(&source)?;
    if stream.is_empty() {
        return Ok(false);
    }

    let render_options = RenderOptions::default();
    let content = match format {
        Format::Markdown => render::to_markdown(&stream, &render_options)?,
        Format::Text => render::to_text(&stream, &render_options)?,
        Format::Json => serde_json::to_string_pretty(&stream)?,
    };
    fs::write(output, content + "\n")?;
    Ok(true)
}

fn cmd_batch(
    input: &Path,
    output: Option<PathBuf>,
    noise_profile: Option<PathBuf>,
    keep_first_page: bool,
) -> i32 {
    let pipeline = match build_pipeline(noise_profile.as_deref(), keep_first_page) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return 1;
        }
    };

    let output_dir = output.unwrap_or_else(|| input.to_path_buf());
    if let Err(e) = fs::create_dir_all(&output_dir) {
        eprintln!("{} cannot create {}: {}", "error:".red().bold(), output_dir.display(), e);
        return 1;
    }

    let mut files: Vec<PathBuf> = match fs::read_dir(input) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
            .collect(),
        Err(e) => {
            eprintln!("{} cannot read {}: {}", "error:".red().bold(), input.display(), e);
            return 1;
        }
    };
    files.sort();

    if files.is_empty() {
        println!("no fragment dumps found in {}", input.display());
        return 0;
    }
    log::info!("found {} fragment dumps in {}", files.len(), input.display());
    println!("processing {} documents...", files.len());

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    // Documents are independent; the per-document pipeline itself stays
    // single-threaded
    let results: Vec<(PathBuf, restruct::Result<bool>)> = files
        .par_iter()
        .map(|file| {
            let stem = file.file_stem().map(|s| s.to_string_lossy().to_string());
            let out_name = format!("Cleaned_{}.md", stem.unwrap_or_default());
            let out_path = output_dir.join(out_name);
            let result = convert_one(&pipeline, file, &out_path, Format::Markdown);
            bar.inc(1);
            (file.clone(), result)
        })
        .collect();
    bar.finish_and_clear();

    let mut failures = 0;
    for (file, result) in &results {
        match result {
            Ok(true) => println!("{} {}", "✓".green(), file.display()),
            Ok(false) => println!("{} {} (no content)", "∅".yellow(), file.display()),
            Err(e) => {
                failures += 1;
                println!("{} {}: {}", "✗".red(), file.display(), e);
            }
        }
    }

    println!(
        "done: {} ok, {} failed",
        results.len() - failures,
        failures
    );
    if failures > 0 {
        1
    } else {
        0
    }
}

fn cmd_info(input: &Path) -> i32 {
    let source = match FragmentDocument::open(input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{} {}: {}", "✗".red(), input.display(), e);
            return 1;
        }
    };

    println!("{}", input.display().to_string().bold());
    println!("  pages:     {}", source.page_count());
    println!("  fragments: {}", source.fragment_count());

    let filter = PageFilter::default();
    let junk: Vec<usize> = source
        .pages
        .iter()
        .filter(|p| filter.is_junk(&p.plain_text(), p.index))
        .map(|p| p.index)
        .collect();
    if junk.is_empty() {
        println!("  junk pages: none");
    } else {
        println!(
            "  junk pages: {}",
            junk.iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    0
}
