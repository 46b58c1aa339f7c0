//! Command-line driver for chord dictionary files

use std::env;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};

use chord_dictionary::api::{
    filter_dictionary, load_archetypes, load_dictionary_values, save_dictionary,
};
use chord_dictionary::expansion::expand;

fn print_usage() {
    println!("chord-dictionary - expand and filter chord dictionary files");
    println!();
    println!("Usage: chord-dictionary <COMMAND>");
    println!();
    println!("Commands:");
    println!("  transpose <input.json> <output.json>");
    println!("      Expand an archetype dictionary to all 12 chromatic roots");
    println!("  filter <input.json> <output.json> [--transpositions]");
    println!("      Project an expanded dictionary down to its summary fields;");
    println!("      --transpositions also keeps a flattened {{root: decimal}} map");
    println!("  --help");
    println!("      Show this help message");
}

fn run_transpose(input: &Path, output: &Path) -> Result<()> {
    let archetypes = load_archetypes(input)?;
    let expanded = expand(&archetypes)
        .with_context(|| format!("expanding archetypes from {}", input.display()))?;
    save_dictionary(output, &expanded)?;

    println!(
        "Expanded {} archetypes into {} entries -> {}",
        archetypes.len(),
        expanded.len(),
        output.display()
    );
    Ok(())
}

fn run_filter(input: &Path, output: &Path, flatten_transpositions: bool) -> Result<()> {
    let dictionary = load_dictionary_values(input)?;
    let filtered = filter_dictionary(&dictionary, flatten_transpositions);
    save_dictionary(output, &filtered)?;

    println!(
        "Filtered {} entries -> {}",
        filtered.len(),
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("transpose") if args.len() == 3 => {
            run_transpose(Path::new(&args[1]), Path::new(&args[2]))
        }
        Some("filter") if args.len() == 3 || args.len() == 4 => {
            let flatten = args.iter().any(|arg| arg == "--transpositions");
            if args.len() == 4 && !flatten {
                print_usage();
                process::exit(2);
            }
            run_filter(Path::new(&args[1]), Path::new(&args[2]), flatten)
        }
        Some("--help") | None => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            process::exit(2);
        }
    }
}
