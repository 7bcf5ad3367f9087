// ELS search CLI tool
// Command-line interface for equidistant letter sequence search

use clap::Parser;
use torah_els::{ElsSearch, MatrixView, WindowOptions};

/// ELS Search Tool - find equidistant letter sequences in the corpus
#[derive(Parser, Debug)]
#[command(name = "els-search")]
#[command(about = "Search a Hebrew corpus for equidistant letter sequences", long_about = None)]
#[command(version)]
struct Args {
    /// Term to search for (Hebrew letters)
    #[arg(value_name = "TERM", required_unless_present = "scan")]
    term: Option<String>,

    /// Skip (stride) between letters; negative reads backwards
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    skip: i64,

    /// Use the term's gematria value as the skip instead of --skip
    #[arg(short = 'g', long)]
    gematria_skip: bool,

    /// Maximum number of matches to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Render a letter grid around the first match
    #[arg(short, long)]
    matrix: bool,

    /// Grid side length for --matrix (odd)
    #[arg(long, default_value = "21")]
    size: usize,

    /// List candidate words readable at the skip instead of searching
    #[arg(long)]
    scan: bool,

    /// Show the gematria value of the term
    #[arg(long)]
    gematria: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let engine = ElsSearch::new();

    if args.verbose {
        let (total, distinct) = engine.stats();
        println!(
            "Corpus loaded: {} letters, {} distinct\n",
            total, distinct
        );
    }

    if args.scan {
        return scan_words(&engine, &args);
    }

    // Safe: clap requires TERM unless --scan is present
    let term = args.term.as_deref().unwrap_or_default();

    if args.gematria {
        println!("Gematria of {}: {}", term, torah_els::gematria(term));
    }

    let matches = if args.gematria_skip {
        engine.search_gematria_skip(term)?
    } else {
        engine.search(term, args.skip)?
    };

    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("Found {} matches:\n", matches.len());

    for (idx, m) in matches.iter().take(args.limit).enumerate() {
        println!("{}. {}", idx + 1, m);
        if args.verbose {
            let indices = m
                .letter_indices()
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("   letters at [{}]", indices);
        }
    }

    if args.matrix {
        let view = engine.matrix_for(&matches[0], args.size);
        println!("\nGrid around {}:", matches[0]);
        print!("{}", render_matrix(&view));
    }

    Ok(())
}

fn scan_words(engine: &ElsSearch, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let opts = WindowOptions {
        limit: args.limit,
        ..WindowOptions::default()
    };
    let words = engine.scan_words(args.skip, &opts);

    if words.is_empty() {
        println!("No candidate words at skip {}.", args.skip);
        return Ok(());
    }

    println!("Candidate words at skip {}:\n", args.skip);
    for (idx, candidate) in words.iter().enumerate() {
        println!(
            "{}. {:<10} @ {}",
            idx + 1,
            candidate.word,
            candidate.start_index
        );
    }

    Ok(())
}

/// Render a grid as text, one row per line: `·` marks out-of-corpus
/// cells, brackets mark the matched letters
fn render_matrix(view: &MatrixView) -> String {
    let mut out = String::new();
    for (row_idx, row) in view.matrix.rows().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let highlighted = view.highlights.contains(&(row_idx, col_idx));
            let ch = cell.unwrap_or('·');
            if highlighted {
                out.push('[');
                out.push(ch);
                out.push(']');
            } else {
                out.push(' ');
                out.push(ch);
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
