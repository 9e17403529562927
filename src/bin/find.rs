// Hump Finder CLI Tool
// Command-line interface for CamelHump class name search

use clap::Parser;
use hump_finder::{BuildOptions, ClassFinder};
use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing::Level;

/// Hump Finder - Find class names by CamelHump abbreviation
#[derive(Parser, Debug)]
#[command(name = "hump-find")]
#[command(about = "Search simple class names with CamelHump, wildcard and ends-with queries", long_about = None)]
#[command(version)]
struct Args {
    /// File with one qualified name per line ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Query pattern
    /// - "FBar": CamelHump
    /// - "F*Bar": wildcard
    /// - "NMS ": ends with (note the trailing space)
    /// Without a pattern, queries are read line by line from stdin
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "20")]
    limit: usize,

    /// Keep a last name that has no trailing line break
    #[arg(long)]
    keep_tail: bool,

    /// Print index statistics after loading
    #[arg(short, long)]
    stats: bool,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = BuildOptions {
        keep_unterminated_tail: args.keep_tail,
    };
    let finder = ClassFinder::with_options(Some(open_input(&args)?), options)?;

    if args.stats {
        let stats = finder.stats();
        println!(
            "Index loaded: {} names ({} distinct)",
            stats.total, stats.distinct
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.pattern {
        Some(pattern) => print_results(&mut out, &finder, pattern, args.limit)?,
        None => {
            // Patterns come from stdin, so the index cannot be read from stdin too
            if args.input.as_os_str() == "-" {
                return Err("interactive mode needs --input to name a file".into());
            }
            for line in io::stdin().lock().lines() {
                let line = line?;
                print_results(&mut out, &finder, strip_line_end(&line), args.limit)?;
                out.flush()?;
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn open_input(args: &Args) -> io::Result<Box<dyn Read>> {
    if args.input.as_os_str() == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(&args.input)?))
    }
}

/// Drop a trailing `\r` left by CRLF input, keeping meaningful spaces
fn strip_line_end(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn print_results<W: Write>(
    out: &mut W,
    finder: &ClassFinder,
    pattern: &str,
    limit: usize,
) -> io::Result<()> {
    let results = finder.find_matching_limit(Some(pattern), limit);

    if results.is_empty() {
        writeln!(out, "No matches for {:?}.", pattern)?;
        return Ok(());
    }

    writeln!(out, "{} matches for {:?}:", results.len(), pattern)?;
    for (idx, name) in results.iter().enumerate() {
        writeln!(out, "{:>3}. {}", idx + 1, name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strip_line_end() {
        assert_eq!(strip_line_end("NMS \r"), "NMS ");
        assert_eq!(strip_line_end("NMS "), "NMS ");
    }

    #[test]
    fn test_print_results() {
        let finder = ClassFinder::from_reader(Cursor::new("a.A\na.B\n"));
        let mut out = Vec::new();
        print_results(&mut out, &finder, "*", 10).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("2 matches"));
        assert!(text.contains("  1. A"));
        assert!(text.contains("  2. B"));
    }

    #[test]
    fn test_print_no_results() {
        let finder = ClassFinder::from_reader(Cursor::new("a.A\n"));
        let mut out = Vec::new();
        print_results(&mut out, &finder, "Q", 10).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("No matches"));
    }
}
