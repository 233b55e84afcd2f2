//! Zorya CLI - Command-line tool for IGI game resource extraction.
//!
//! This is the main entry point for the Zorya command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use zorya::prelude::*;

/// Zorya - IGI game resource extraction tool
#[derive(Parser)]
#[command(name = "zorya")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List images in an ILFF resource file
    List {
        /// Path to the .res file
        #[arg(short, long, env = "INPUT_RES")]
        res: PathBuf,

        /// Filter pattern (glob-style)
        #[arg(short, long)]
        filter: Option<String>,

        /// Also show skipped entries and the scan status
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract images from an ILFF resource file
    Extract {
        /// Path to the .res file
        #[arg(short, long, env = "INPUT_RES")]
        res: PathBuf,

        /// Output directory
        #[arg(short, long, env = "OUTPUT_FOLDER")]
        output: PathBuf,

        /// Filter pattern (glob-style)
        #[arg(short, long)]
        filter: Option<String>,

        /// Output image format
        #[arg(long, value_enum, default_value = "tga")]
        format: ExportFormat,
    },

    /// Show container-level information about an ILFF resource file
    Info {
        /// Path to the .res file
        #[arg(short, long, env = "INPUT_RES")]
        res: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Truevision TGA (what the original tooling consumed)
    Tga,
    /// Portable Network Graphics
    Png,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Tga => "tga",
            Self::Png => "png",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            res,
            filter,
            detailed,
        } => {
            cmd_list(&res, filter.as_deref(), detailed)?;
        }
        Commands::Extract {
            res,
            output,
            filter,
            format,
        } => {
            cmd_extract(&res, &output, filter.as_deref(), format)?;
        }
        Commands::Info { res } => {
            cmd_info(&res)?;
        }
    }

    Ok(())
}

fn cmd_list(res_path: &Path, filter: Option<&str>, detailed: bool) -> Result<()> {
    let catalog = Catalog::open(res_path).context("Failed to open resource file")?;

    let mut count = 0;
    for (i, entry) in catalog.iter().enumerate() {
        let name = entry.display_name(i);
        if let Some(pattern) = filter {
            if !glob_match(pattern, &name) {
                continue;
            }
        }

        let image = entry.image();
        println!(
            "{:>5} x {:<5} {:>9.2} KB  {}",
            image.width(),
            image.height(),
            entry.payload_size() as f64 / 1024.0,
            name
        );
        count += 1;
    }

    println!("\nTotal: {} images", count);

    if detailed {
        for skip in catalog.skipped() {
            println!(
                "skipped at offset {}: {} ({})",
                skip.offset,
                skip.name.as_deref().unwrap_or("<unnamed>"),
                skip.reason
            );
        }
        println!("Scan status: {}", catalog.status());
    }

    Ok(())
}

fn cmd_extract(
    res_path: &Path,
    output: &Path,
    filter: Option<&str>,
    format: ExportFormat,
) -> Result<()> {
    println!("Opening resource file: {}", res_path.display());

    let start = Instant::now();
    let catalog = Catalog::open(res_path).context("Failed to open resource file")?;

    println!(
        "Decoded {} images ({} skipped) in {:?}",
        catalog.len(),
        catalog.skipped().len(),
        start.elapsed()
    );

    // Collect matching indices
    let indices: Vec<usize> = (0..catalog.len())
        .filter(|&i| {
            filter.map_or(true, |pattern| {
                glob_match(pattern, &catalog.entries()[i].display_name(i))
            })
        })
        .collect();

    println!("Extracting {} images...", indices.len());

    let pb = ProgressBar::new(indices.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    fs::create_dir_all(output)?;

    let start = Instant::now();
    for &idx in &indices {
        let entry = &catalog.entries()[idx];
        let output_path = output
            .join(export_stem(entry, idx))
            .with_extension(format.extension());

        write_image(entry, &output_path)
            .with_context(|| format!("Failed to export {}", output_path.display()))?;

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!("Extraction completed in {:?}", start.elapsed());

    Ok(())
}

fn cmd_info(res_path: &Path) -> Result<()> {
    let catalog = Catalog::open(res_path).context("Failed to open resource file")?;

    match catalog.resource_type() {
        Some(tag) => println!("Resource type: {}", tag),
        None => println!("Resource type: n/a"),
    }
    println!("Images:        {}", catalog.len());
    println!("Skipped:       {}", catalog.skipped().len());
    println!("Scan status:   {}", catalog.status());

    Ok(())
}

/// Re-encode one decoded entry to disk via the image crate.
fn write_image(entry: &ImageEntry, path: &Path) -> Result<()> {
    let buffer = entry.image();
    let image =
        image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
            .context("pixel buffer size mismatch")?;
    image.save(path)?;
    Ok(())
}

/// File stem for an exported entry, with path separators flattened.
fn export_stem(entry: &ImageEntry, index: usize) -> String {
    let name = entry.display_name(index);
    let stem = name.rsplit_once('.').map_or(name.as_str(), |(s, _)| s);
    stem.replace(['/', '\\'], "_")
}

/// Simple glob matching for filtering.
fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern_lower = pattern.to_lowercase();
    let name_lower = name.to_lowercase();

    if pattern_lower.contains('*') {
        // Handle * wildcard
        let parts: Vec<&str> = pattern_lower.split('*').collect();
        let mut pos = 0;

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }

            if let Some(found) = name_lower[pos..].find(part) {
                if i == 0 && found != 0 {
                    // First part must match at start if no leading *
                    return false;
                }
                pos += found + part.len();
            } else {
                return false;
            }
        }

        // If pattern ends with *, any remaining is ok
        // If not, must have consumed the whole string
        parts.last().map_or(true, |p| p.is_empty()) || pos == name_lower.len()
    } else {
        name_lower.contains(&pattern_lower)
    }
}
