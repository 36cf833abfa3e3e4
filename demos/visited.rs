//! Marks the given indices as visited and prints them back in ascending
//! order.
//!
//! ```text
//! RUST_LOG=word_bitset=trace cargo run --example visited -- --capacity 200 199 0 64 65
//! ```

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use word_bitset::{BitSet, BitSetError};

#[derive(Parser, Debug)]
#[command(about = "Mark indices in a fixed-capacity bit set and list them in order")]
struct Args {
    /// Highest index the bit set accepts
    #[arg(short, long, default_value_t = 200)]
    capacity: usize,

    /// Start with positions 0..capacity already set
    #[arg(long)]
    fill_ones: bool,

    /// Skip out-of-range indices instead of failing
    #[arg(long)]
    lenient: bool,

    /// Indices to mark as visited
    indices: Vec<usize>,
}

fn main() -> Result<(), BitSetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let pattern = if args.fill_ones { !0 } else { 0 };
    let mut visited = BitSet::try_with_pattern(args.capacity, pattern)?;
    info!(
        capacity = visited.capacity(),
        words = visited.word_count(),
        "created bit set"
    );

    for idx in args.indices {
        match visited.try_set(idx) {
            Ok(()) => {}
            Err(err) if args.lenient => warn!(%err, "skipping index"),
            Err(err) => return Err(err),
        }
    }

    let ones: Vec<String> = visited.iter_ones().map(|i| i.to_string()).collect();
    println!("{}", ones.join(" "));
    info!(count = visited.count(), "done");
    Ok(())
}
