//! Reads a text and `q` patterns from stdin and prints, for each pattern, the number of
//! occurrences followed by their positions in ascending order.
//!
//! ```text
//! s
//! q
//! p_1
//! ...
//! p_q
//! ```
use std::io::{BufWriter, Write};

use proconio::{input, marker::Bytes};
use suffix_array::SuffixArray;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    input! {
        s: Bytes,
        q: usize,
        patterns: [Bytes; q],
    }

    let sa = SuffixArray::new(s);
    tracing::debug!(len = sa.len(), "built suffix array");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for pattern in &patterns {
        let positions = sa.positions(pattern);
        write!(out, "{}", positions.len()).unwrap();
        for p in positions {
            write!(out, " {p}").unwrap();
        }
        writeln!(out).unwrap();
    }
    out.flush().unwrap();
}
