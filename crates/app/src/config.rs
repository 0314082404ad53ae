//! Configuration for the huffpress CLI.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no input file it
//! compresses a generated sample text, seeded from the clock unless --seed
//! is given, so every run is reproducible on demand.

use std::path::PathBuf;

/// Complete configuration for one compression run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input text file (None = generate a sample)
    pub input_file: Option<PathBuf>,

    /// Where the packed buffer is written
    pub output_file: PathBuf,

    /// Seed for sample generation
    pub seed: u64,

    /// Length of the generated sample in characters
    pub sample_chars: usize,

    /// Render the Huffman tree after building it
    pub show_tree: bool,

    /// List the per-symbol codes
    pub show_codes: bool,

    /// Print the compression stats block
    pub print_stats: bool,

    /// Print the resolved configuration before running
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// Unknown flags and missing flag values are reported as errors rather
    /// than ignored.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut show_tree = false;
        let mut show_codes = true;
        let mut print_stats = true;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--show-tree" => {
                    show_tree = true;
                }
                "--no-codes" => {
                    show_codes = false;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Time-based seed unless one was given
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            output_file: output_file.unwrap_or_else(|| PathBuf::from("./compressed.bin")),
            seed,
            sample_chars: sample_chars.unwrap_or(400),
            show_tree,
            show_codes,
            print_stats,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:  {}", path.display()),
            None => println!("Input file:  (generate sample, {} chars)", self.sample_chars),
        }
        println!("Output file: {}", self.output_file.display());
        println!("Seed: {}", self.seed);
        println!();
    }
}

fn print_help() {
    println!("huffpress: Huffman text compression playground");
    println!();
    println!("USAGE:");
    println!("    huffpress [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input text file (default: generate sample)");
    println!("    --out <PATH>          Packed output file (default: ./compressed.bin)");
    println!("    --seed <N>            Seed for sample generation");
    println!("    --sample-chars <N>    Generated sample length (default: 400)");
    println!();
    println!("    --show-tree           Render the Huffman tree");
    println!("    --no-codes            Don't list per-symbol codes");
    println!("    --no-stats            Don't print compression stats");
    println!("    --print-config        Print resolved configuration");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpress                          # Compress a generated sample");
    println!("    huffpress --seed 42 --show-tree    # Deterministic run with tree dump");
    println!("    huffpress --in notes.txt           # Compress a specific file");
    println!();
}
