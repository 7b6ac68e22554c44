//! linksort-harness: sort test driver
//!
//! Builds integer lists from fixed sequences, sorts each with every
//! configured algorithm using a counting comparator, and prints one report
//! block per run. Exits with an error on the first case whose output does
//! not match its expected order.
//!
//! ## Configuration
//! - LINKSORT_CONFIG: YAML config path (default: linksort.yaml, optional)
//! - LINKSORT_PRINT_LIMIT: lists this long or longer are not printed (default: 100)
//! - LINKSORT_REVERSE_LEN: length of the reverse-ordered case (default: 100000)
//! - LINKSORT_NAIVE_LIMIT: largest case for the naive sort, or "none" (default: 10000)
//! - LINKSORT_LOG: tracing filter (default: info)

use tracing::info;

use linksort::config::HarnessConfig;
use linksort::harness::{run_all, HarnessError};
use linksort::utils::bootstrap::init_tracing;

fn main() -> Result<(), HarnessError> {
    init_tracing();

    let config = HarnessConfig::load()?;
    info!(
        reverse_len = config.reverse_len,
        naive_limit = ?config.naive_limit,
        "linksort-harness started"
    );

    let mut index = 0;
    let reports = run_all(&config, |report| {
        println!("\n[{}] {}", index, report);
        index += 1;
    })?;

    info!(runs = reports.len(), "all sort cases passed");
    Ok(())
}
