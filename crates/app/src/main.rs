//! huffpress CLI: compress a text, save the packed buffer, load it back,
//! and verify the round trip.
//!
//! This binary stands in for the interactive front ends: it drives the
//! codec end to end and prints what a UI would display — the code table,
//! the compression stats, and optionally the tree.

mod config;
mod input_gen;

use std::fs;
use std::process;

use huffpress_core::pack::{load, save};
use huffpress_core::stats::measure;
use huffpress_core::{Error, HuffmanCodec};

use config::Config;
use input_gen::generate_sample_text;

/// Cap on how much of the encoded bitstream is echoed to the terminal.
const PREVIEW_BITS: usize = 128;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try --help for usage");
            process::exit(1);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    if config.print_config {
        config.print();
    }

    let text = match &config.input_file {
        Some(path) => fs::read_to_string(path)?,
        None => generate_sample_text(config.seed, config.sample_chars),
    };

    if text.is_empty() {
        println!("Input is empty: nothing to encode.");
        return Ok(());
    }

    let codec = HuffmanCodec::from_text(&text);
    let bits = codec.encode(&text)?;

    if config.show_codes {
        println!("=== Huffman Codes ===");
        let mut codes: Vec<_> = codec.codes().iter().collect();
        codes.sort_by_key(|&(symbol, code)| (code.len(), symbol));
        for (symbol, code) in codes {
            println!("{symbol:?}: {code}");
        }
        println!();
    }

    if config.show_tree {
        println!("=== Huffman Tree ===");
        print!("{}", codec.tree().render());
        println!();
    }

    if config.print_stats {
        println!("=== Compression ===");
        println!("{}", measure(&text, &bits));
        if bits.len() <= PREVIEW_BITS {
            println!("Encoded: {bits}");
        } else {
            let preview: String = bits.to_string().chars().take(PREVIEW_BITS).collect();
            println!("Encoded: {preview}... ({} bits total)", bits.len());
        }
        println!();
    }

    save(&bits, &config.output_file)?;
    println!("Packed data written to {}", config.output_file.display());

    // Read it back and prove the round trip
    let restored = load(&config.output_file)?;
    let decoded = codec.decode(&restored)?;

    if decoded == text {
        println!("Round trip: OK ({} chars)", decoded.chars().count());
        Ok(())
    } else {
        println!("Round trip: FAILED (decoded text differs)");
        process::exit(1);
    }
}
