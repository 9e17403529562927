// Performance benchmarks for hump-finder search operations

use hump_finder::ClassFinder;
use std::io::Cursor;
use std::time::Instant;

const PACKAGES: &[&str] = &["java.awt.event", "javax.swing", "org.omg.DynamicAny", "com.example"];
const WORDS: &[&str] = &["Foo", "Bar", "Baz", "Dyn", "Any", "Helper", "Event", "Input", "Stream"];

fn main() {
    println!("🏃 Hump Finder Performance Benchmarks\n");

    let input = synthetic_names(50_000);

    let start = Instant::now();
    let finder = ClassFinder::from_reader(Cursor::new(input));
    println!(
        "📥 Index built: {} names in {:.3}ms\n",
        finder.stats().total,
        start.elapsed().as_secs_f64() * 1000.0
    );

    bench_patterns(&finder, "🔤 CAMELHUMP", &["FBar", "DAH", "IS", "HelperEvent"]);
    bench_patterns(&finder, "✳️  WILDCARD", &["*", "F*Bar", "*Helper"]);
    bench_patterns(&finder, "⏎  ENDS WITH", &["FBaz ", "DynAnyH ", "Stream "]);

    println!("✅ Benchmarks completed!");
}

/// Deterministic pool of qualified names built from word triples
fn synthetic_names(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let package = PACKAGES[i % PACKAGES.len()];
        let a = WORDS[i % WORDS.len()];
        let b = WORDS[(i / WORDS.len()) % WORDS.len()];
        let c = WORDS[(i / (WORDS.len() * WORDS.len())) % WORDS.len()];
        out.push_str(&format!("{}.{}{}{}\n", package, a, b, c));
    }
    out
}

fn bench_patterns(finder: &ClassFinder, title: &str, patterns: &[&str]) {
    println!("{}", title);
    println!("─────────────────────────────");

    for pattern in patterns {
        let start = Instant::now();
        let results = finder.find_matching(Some(*pattern));
        let duration = start.elapsed();

        println!(
            "  {:<14} → {} results in {:.3}ms",
            format!("{:?}", pattern),
            results.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}
