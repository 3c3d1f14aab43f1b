//! docstruct CLI - document structuring tool
//!
//! Reads a text file whose pages are separated by form-feed characters
//! (the page-break convention of common text-layer extractors) and
//! structures it into sectioned JSON, Markdown, or plain text.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docstruct::{compose_document, CleanupOptions, Docstruct, JsonFormat};

#[derive(Parser)]
#[command(name = "docstruct")]
#[command(version)]
#[command(about = "Structure extracted page text into sectioned JSON, Markdown, and text", long_about = None)]
struct Cli {
    /// Input text file (pages separated by form feeds)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Structure pages into JSON
    Json {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Apply text cleanup before structuring
        #[arg(long)]
        cleanup: bool,
    },

    /// Structure pages into Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Apply text cleanup before structuring
        #[arg(long)]
        cleanup: bool,
    },

    /// Structure pages into plain text
    Text {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Apply text cleanup before structuring
        #[arg(long)]
        cleanup: bool,
    },

    /// Show structure information
    Info {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
            cleanup,
        }) => cmd_json(&input, output.as_deref(), compact, cleanup),
        Some(Commands::Markdown {
            input,
            output,
            cleanup,
        }) => cmd_markdown(&input, output.as_deref(), cleanup),
        Some(Commands::Text {
            input,
            output,
            cleanup,
        }) => cmd_text(&input, output.as_deref(), cleanup),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Default behavior: structure to JSON if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, cli.output.as_deref(), false, false)
            } else {
                println!("{}", "Usage: docstruct <FILE> [OUTPUT]".yellow());
                println!("       docstruct --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Split file content into pages at form-feed characters.
fn read_pages(input: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let pages: Vec<String> = content.split('\u{0C}').map(str::to_string).collect();
    log::debug!("read {} pages from {}", pages.len(), input.display());
    Ok(pages)
}

fn engine(cleanup: bool) -> Docstruct {
    let mut engine = Docstruct::new();
    if cleanup {
        engine = engine.with_cleanup(CleanupOptions::standard());
    }
    engine
}

/// Structure pages with a per-page progress bar.
fn structure_with_progress(
    engine: &Docstruct,
    pages: &[String],
) -> docstruct::Document {
    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut contents = Vec::with_capacity(pages.len());
    for (i, text) in pages.iter().enumerate() {
        let page = engine.structure_page(i as u32 + 1, text);
        contents.push((page.page_number, page.content));
        pb.inc(1);
    }
    pb.finish_and_clear();

    compose_document(contents)
}

fn write_or_print(
    content: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    cleanup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = read_pages(input)?;
    let doc = structure_with_progress(&engine(cleanup), &pages);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = docstruct::render::to_json(&doc, format)?;

    write_or_print(&json, output)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    cleanup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = read_pages(input)?;
    let doc = structure_with_progress(&engine(cleanup), &pages);
    let markdown = docstruct::render::to_markdown(&doc);

    write_or_print(&markdown, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    cleanup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = read_pages(input)?;
    let doc = structure_with_progress(&engine(cleanup), &pages);
    let text = docstruct::render::to_text(&doc);

    write_or_print(&text, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pages = read_pages(input)?;
    let doc = engine(false).structure(&pages).into_document();

    let sub_section_count: usize = doc
        .pages
        .iter()
        .flat_map(|p| p.sections())
        .map(|s| s.sub_sections.len())
        .sum();
    let paragraph_count: usize = doc
        .pages
        .iter()
        .flat_map(|p| p.sections())
        .map(|s| s.paragraph_count())
        .sum();

    println!("{}", "Document structure".green().bold());
    println!("  {} {}", "Pages:".dimmed(), doc.page_count());
    println!("  {} {}", "Sections:".dimmed(), doc.section_count());
    println!("  {} {}", "Sub-sections:".dimmed(), sub_section_count);
    println!("  {} {}", "Paragraphs:".dimmed(), paragraph_count);

    for page in &doc.pages {
        println!("{} {}", "Page".cyan(), page.page_number);
        for section in page.sections() {
            println!("  {}", section.section);
            for sub in &section.sub_sections {
                if let Some(ref name) = sub.sub_section {
                    println!("    {}", name.dimmed());
                }
            }
        }
    }

    Ok(())
}
