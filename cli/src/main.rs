//! undocx CLI - DOCX table to HTML converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use undocx::{
    detect_format_from_path, parse_file_with_options, ExtractionStats, Metadata, ParseOptions,
    RenderOptions, VerticalScan,
};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert DOCX tables to HTML", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX tables to HTML
    Html {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,

        /// Recover from malformed styles and properties
        #[arg(long)]
        lenient: bool,

        /// Maximum nesting depth of tables inside cells
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Print conversion statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Convert several DOCX files, one HTML file each
    Batch {
        /// Input DOCX files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Class attribute of top-level tables
    #[arg(long, env = "UNDOCX_TABLE_CLASS", default_value = undocx::render::DEFAULT_TABLE_CLASS)]
    table_class: String,

    /// Points of left indent per indentation level
    #[arg(long, env = "UNDOCX_INDENT_UNIT", default_value_t = undocx::render::DEFAULT_INDENT_UNIT_PT)]
    indent_unit: f32,

    /// Escape &, < and > in cell text
    #[arg(long)]
    escape: bool,

    /// Carry the tracked cell across columns when detecting vertical merges
    #[arg(long)]
    carry_over_merge: bool,
}

impl RenderArgs {
    fn to_options(&self) -> RenderOptions {
        let scan = if self.carry_over_merge {
            VerticalScan::CarryOver
        } else {
            VerticalScan::ColumnLocal
        };
        RenderOptions::new()
            .with_table_class(self.table_class.clone())
            .with_indent_unit(self.indent_unit)
            .with_escaped_text(self.escape)
            .with_vertical_scan(scan)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            render,
            lenient,
            max_depth,
            stats,
        }) => {
            let mut parse_options = ParseOptions::new();
            if lenient {
                parse_options = parse_options.lenient();
            }
            if let Some(depth) = max_depth {
                parse_options = parse_options.with_max_table_depth(depth);
            }
            cmd_html(
                &input,
                output.as_deref(),
                parse_options,
                &render.to_options(),
                stats,
            )
        }
        Some(Commands::Batch {
            inputs,
            output,
            render,
        }) => cmd_batch(&inputs, output.as_deref(), &render.to_options()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_html(
                    &input,
                    cli.output.as_deref(),
                    ParseOptions::new(),
                    &RenderOptions::default(),
                    false,
                )
            } else {
                println!("{}", "Usage: undocx <FILE> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    parse_options: ParseOptions,
    render_options: &RenderOptions,
    show_stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse_options)?;
    let result = undocx::render::to_html_with_stats(&doc, render_options)?;

    if let Some(path) = output {
        fs::write(path, &result.content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.content);
    }

    if show_stats {
        print_stats(&result.stats);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    render_options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut totals = ExtractionStats::new();
    let mut failures = Vec::new();

    for input in inputs {
        pb.set_message(input.display().to_string());

        let converted = undocx::parse_file(input)
            .and_then(|doc| undocx::render::to_html_with_stats(&doc, render_options));
        match converted {
            Ok(result) => {
                let target = html_path(input, output);
                fs::write(&target, &result.content)?;
                totals.merge(&result.stats);
            }
            Err(e) => {
                log::warn!("Failed to convert {}: {}", input.display(), e);
                failures.push((input, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} files converted ({} tables)",
        "Done!".green().bold(),
        inputs.len() - failures.len(),
        inputs.len(),
        totals.table_count
    );
    for (input, e) in &failures {
        println!("  {} {}: {}", "✗".red(), input.display(), e);
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} files failed", failures.len()).into())
    }
}

/// Output path for a converted file: the input name with an `.html` extension.
fn html_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input.with_extension("html");
    match output_dir {
        Some(dir) => dir.join(file_name.file_name().unwrap_or_default()),
        None => file_name,
    }
}

#[derive(Serialize)]
struct DocumentInfo<'a> {
    file: String,
    main_part: String,
    metadata: &'a Metadata,
    stats: &'a ExtractionStats,
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    // Lenient: show what we can even if styles or properties are malformed
    let doc = parse_file_with_options(input, ParseOptions::new().lenient())?;
    let stats = undocx::render::to_html_with_stats(&doc, &RenderOptions::default())?.stats;

    if json {
        let info = DocumentInfo {
            file: input.display().to_string(),
            main_part: format.main_part,
            metadata: &doc.metadata,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Main part".bold(), format.main_part);

    let meta = &doc.metadata;
    if let Some(ref title) = meta.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref subject) = meta.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref author) = meta.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref modified_by) = meta.last_modified_by {
        println!("{}: {}", "Last modified by".bold(), modified_by);
    }
    if let Some(ref created) = meta.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = meta.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    print_stats(&stats);

    Ok(())
}

fn print_stats(stats: &ExtractionStats) {
    eprintln!("{}", "Table Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "Tables".bold(), stats.table_count);
    eprintln!("{}: {}", "Nested tables".bold(), stats.nested_table_count);
    eprintln!("{}: {}", "Max depth".bold(), stats.max_depth);
    eprintln!("{}: {}", "Rows".bold(), stats.row_count);
    eprintln!("{}: {}", "Cells".bold(), stats.cell_count);
    eprintln!("{}: {}", "Merged cells".bold(), stats.merged_cell_count);
    eprintln!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    eprintln!("{}: {}", "Words".bold(), stats.word_count);
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX table to HTML converter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/undocx".dimmed());
    println!("License: MIT");
}
