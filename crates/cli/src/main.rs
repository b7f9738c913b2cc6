//! CLI tool for normalizing paragraph spacing in text files.

use anyhow::{Context, Result};
use clap::Parser;
use parafmt_core::{
    format_char_count, process_text_with, FormatMode, FormatOutcome, ParagraphNormalizer,
    TextFile,
};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Expand or collapse the blank lines between paragraphs.
#[derive(Parser, Debug)]
#[command(name = "parafmt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file(s); reads stdin when omitted or "-"
    input: Vec<PathBuf>,

    /// Formatting mode: pass-through, single-to-double or double-to-single
    #[arg(short, long, default_value = "single-to-double")]
    mode: FormatMode,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Leave CRLF and CR line endings as they are
    #[arg(long)]
    keep_line_endings: bool,

    /// Print one JSON result per input (implies --print)
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let normalizer = ParagraphNormalizer::new().with_unix_line_endings(!args.keep_line_endings);

    let inputs = if args.input.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.input.clone()
    };

    let mut failures = 0;

    for input_path in &inputs {
        log::debug!("Processing {} as {}", input_path.display(), args.mode);

        let outcome = read_input(input_path).and_then(|text| {
            process_text_with(&normalizer, &text, args.mode).map_err(anyhow::Error::from)
        });

        match outcome {
            Ok(outcome) => {
                if args.verbose {
                    eprintln!(
                        "{}: {} in, {} out",
                        input_path.display(),
                        format_char_count(outcome.input_chars),
                        format_char_count(outcome.output_chars)
                    );
                }

                if let Err(e) = emit(input_path, &outcome, &args) {
                    log::error!("{:#}", e);
                    eprintln!("Error writing {}: {:#}", input_path.display(), e);
                    failures += 1;
                }
            }
            Err(e) => {
                log::error!("{:#}", e);
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} inputs failed", failures, inputs.len());
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read one input, from stdin or from a file accepted as text.
fn read_input(input_path: &Path) -> Result<String> {
    if is_stdin(input_path) {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return decode_stdin(&bytes);
    }

    let file = TextFile::read(input_path)
        .with_context(|| format!("Failed to load {}", input_path.display()))?;
    log::debug!("{}: {}", file.name, file.notice().message);

    Ok(file.text)
}

/// Decode piped bytes the way text files are decoded.
fn decode_stdin(bytes: &[u8]) -> Result<String> {
    let file = TextFile::from_bytes("-", bytes, Some("text/plain"))?;
    Ok(file.text)
}

/// Print or write the result for one input.
fn emit(input_path: &Path, outcome: &FormatOutcome, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(outcome)?);
    } else if args.print || is_stdin(input_path) {
        println!("{}", outcome.text);
    } else {
        let output_path = get_output_path(input_path, args.output.as_ref())?;
        write_output(&output_path, &outcome.text)?;
        log::info!("Written to: {}", output_path.display());
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.formatted.txt", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file, ending it with a newline.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    if !content.is_empty() {
        file.write_all(b"\n")
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    Ok(())
}
