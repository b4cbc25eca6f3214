//! Huffarc CLI - Pure Rust Huffman file compression
//!
//! Compresses and decompresses single files with static Huffman coding:
//! the frequency table travels as the file header, the payload is the
//! bit-packed stream of per-byte codes.

mod utils;

use clap::{Parser, Subcommand};
use huffarc_huffman::{FrequencyTable, HuffmanTree, codec, dot};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use utils::{create_spinner, space_savings};

#[derive(Parser)]
#[command(name = "huffarc")]
#[command(author, version, about = "Pure Rust Huffman file compression")]
#[command(long_about = "
Huffarc compresses single files with static Huffman coding.

Examples:
  huffarc compress notes.txt notes.huf
  huffarc decompress notes.huf notes.txt
  huffarc info notes.huf
  huffarc info --json notes.huf
  huffarc dot notes.txt -o tree.dot
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Also export the code tree as a DOT graph
        #[arg(long, value_name = "PATH")]
        dot: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show a progress spinner
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress a file
    #[command(aliases = ["d", "x"])]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show a progress spinner
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        archive: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Export the code tree of a file as a DOT graph
    Dot {
        /// File whose tree to export (raw, uncompressed input)
        input: PathBuf,

        /// Output DOT file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            dot,
            verbose,
            progress,
        } => cmd_compress(&input, &output, dot.as_deref(), verbose, progress),
        Commands::Decompress {
            input,
            output,
            verbose,
            progress,
        } => cmd_decompress(&input, &output, verbose, progress),
        Commands::Info { archive, json } => cmd_info(&archive, json),
        Commands::Dot { input, output } => cmd_dot(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &std::path::Path,
    output: &std::path::Path,
    dot_path: Option<&std::path::Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let pb = create_spinner("Compressing", progress);
    let compressed = codec::compress(&data)?;
    fs::write(output, &compressed)?;
    pb.finish_and_clear();

    if let Some(path) = dot_path {
        let tree = HuffmanTree::build(&FrequencyTable::count(&data))?;
        let mut file = fs::File::create(path)?;
        dot::write_dot(&tree, &mut file)?;
        if verbose {
            println!("Tree graph written to {}", path.display());
        }
    }

    println!(
        "{} ({} bytes) -> {} ({} bytes, {:.1}% saved)",
        input.display(),
        data.len(),
        output.display(),
        compressed.len(),
        space_savings(data.len() as u64, compressed.len() as u64),
    );

    if verbose {
        let table = FrequencyTable::count(&data);
        println!("  Distinct symbols: {} (incl. end-of-stream)", table.len());
    }

    Ok(())
}

fn cmd_decompress(
    input: &std::path::Path,
    output: &std::path::Path,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let pb = create_spinner("Decompressing", progress);
    let restored = codec::decompress(&data)?;
    fs::write(output, &restored)?;
    pb.finish_and_clear();

    println!(
        "{} ({} bytes) -> {} ({} bytes)",
        input.display(),
        data.len(),
        output.display(),
        restored.len(),
    );

    if verbose {
        println!("  Payload decoded up to the end-of-stream symbol");
    }

    Ok(())
}

/// Header statistics for `info`.
#[derive(Serialize)]
struct ArchiveInfo {
    file: String,
    compressed_size: u64,
    header_size: u64,
    original_size: u64,
    distinct_symbols: usize,
    payload_bits: u64,
    space_savings_percent: f64,
}

fn cmd_info(archive: &std::path::Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(archive)?;

    let mut cursor = Cursor::new(&data);
    let table = FrequencyTable::deserialize(&mut cursor)?;
    let header_size = cursor.position();
    let tree = HuffmanTree::build(&table)?;

    let mut payload_bits = 0u64;
    for (symbol, weight) in table.iter() {
        payload_bits += weight * tree.code_for(symbol)?.len() as u64;
    }

    // The sentinel contributes exactly one count, not an input byte
    let original_size = table.total_weight() - 1;

    let info = ArchiveInfo {
        file: archive.display().to_string(),
        compressed_size: data.len() as u64,
        header_size,
        original_size,
        distinct_symbols: table.len(),
        payload_bits,
        space_savings_percent: space_savings(original_size, data.len() as u64),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Archive Information");
        println!("===================");
        println!("File: {}", info.file);
        println!("Compressed size: {} bytes", info.compressed_size);
        println!("  Header: {} bytes", info.header_size);
        println!("Original size: {} bytes", info.original_size);
        println!(
            "Distinct symbols: {} (incl. end-of-stream)",
            info.distinct_symbols
        );
        println!("Payload bits: {}", info.payload_bits);
        println!("Space savings: {:.1}%", info.space_savings_percent);
    }

    Ok(())
}

fn cmd_dot(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let tree = HuffmanTree::build(&FrequencyTable::count(&data))?;

    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            dot::write_dot(&tree, &mut file)?;
            println!("Tree graph written to {}", path.display());
        }
        None => {
            print!("{}", dot::dot_string(&tree));
        }
    }

    Ok(())
}
