use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use lexmax::{filter_redundant_with_stats, LexmaxError};

/// Drop anagram-redundant and sub-anagram words from a wordlist.
#[derive(Parser)]
#[command(name = "lexmax")]
struct Args {
    /// Input file with one word per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Print survivors in original input order instead of acceptance order.
    #[arg(long)]
    input_order: bool,

    /// Emit run counters as JSON on stderr.
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LexmaxError> {
    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let words: Vec<&str> = raw.lines().filter(|line| !line.is_empty()).collect();

    let (mut survivors, stats) = filter_redundant_with_stats(&words)?;

    if args.input_order {
        // Survivors had a unique vector, so each appears exactly once in
        // the input and the rank lookup is unambiguous.
        let rank: HashMap<&str, usize> = words
            .iter()
            .enumerate()
            .map(|(pos, word)| (*word, pos))
            .collect();
        survivors.sort_by_key(|word| rank[word.as_str()]);
    }

    for word in &survivors {
        println!("{word}");
    }

    if args.json {
        eprintln!(
            "{}",
            serde_json::to_string(&stats).map_err(io::Error::other)?
        );
    }
    Ok(())
}
