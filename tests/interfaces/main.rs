//! Interface tests for the list and the sort algorithms using Cucumber.
//!
//! ```bash
//! cargo test --test interfaces
//! ```

mod steps;

use cucumber::World;
use steps::list_core::ListWorld;
use steps::sort_engine::SortWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running List Interface Tests ===\n");
    ListWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features/list_core.feature")
        .await;

    println!("\n=== Running Sort Interface Tests ===\n");
    SortWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features/sort_engine.feature")
        .await;
}
