use std::path::PathBuf;
use std::process;

use clap::Parser;

use wordfam::{wordlist, FamilyConfig, FamilyError, Registry, DEFAULT_INCREMENT};

/// Partition a word list into letter-pattern families.
#[derive(Parser)]
#[command(name = "families")]
struct Cli {
    /// Word-list file, one word per line.
    wordlist: PathBuf,

    /// Letter to partition by (ASCII).
    letter: char,

    /// Word slots a family gains per growth step.
    #[arg(long, default_value_t = DEFAULT_INCREMENT)]
    increment: usize,

    /// Print only the largest family.
    #[arg(long)]
    biggest: bool,

    /// Print one random word from the largest family.
    #[arg(long, conflicts_with = "biggest")]
    sample: bool,

    /// Emit a machine-readable report instead of the plain listing.
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.letter.is_ascii_alphabetic() {
        return Err(Box::new(FamilyError::Config(format!(
            "letter must be an ASCII letter, got {:?}",
            cli.letter
        ))));
    }

    let config = FamilyConfig::new(cli.increment)?;
    let words = wordlist::load(&cli.wordlist)?;
    let registry = Registry::generate(words.iter().map(String::as_str), cli.letter as u8, &config)?;

    if cli.sample {
        match registry.biggest() {
            Some(fam) => println!("{}", fam.random_word()?),
            None => eprintln!("word list is empty, nothing to sample"),
        }
        return Ok(());
    }

    if cli.json {
        print_json(&registry, cli.letter, cli.biggest)?;
    } else if cli.biggest {
        if let Some(fam) = registry.biggest() {
            print_family(fam);
        }
    } else {
        for fam in &registry {
            print_family(fam);
        }
    }
    Ok(())
}

/// The listing shape downstream tooling expects: a header, each word on its
/// own indented line, then a blank line.
fn print_family(fam: &wordfam::Family) {
    println!(
        "***Family signature: {} Num words: {}",
        fam.signature(),
        fam.len()
    );
    for word in fam.words() {
        println!("     {word}");
    }
    println!();
}

fn print_json(registry: &Registry, letter: char, biggest_only: bool) -> serde_json::Result<()> {
    let to_value = |fam: &wordfam::Family| {
        serde_json::json!({
            "signature": fam.signature(),
            "count": fam.len(),
            "words": fam.snapshot(),
        })
    };
    let families: Vec<serde_json::Value> = if biggest_only {
        registry.biggest().map(to_value).into_iter().collect()
    } else {
        registry.iter().map(to_value).collect()
    };
    let report = serde_json::json!({
        "letter": letter.to_string(),
        "family_count": registry.len(),
        "families": families,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
