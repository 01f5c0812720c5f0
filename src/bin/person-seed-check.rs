//! # Person Seed Checker
//!
//! Loads a person seed file through the same code path the in-memory
//! repository uses at construction and reports what it found.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin person-seed-check tests/data/persons.json
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Checking seed file: tests/data/persons.json
//! ✓ Seed file is valid!
//!
//! Seed Summary:
//!   Records: 4
//!   Max id: 4
//!   Next id: 5
//!   Records with exactly 4 attributes: 4
//! ```
//!
//! ```text
//! Checking seed file: broken.json
//! ❌ Seed check failed: Duplicate person id 1 in seed data
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The seed file loads
//! - `1`: The file is missing, unparsable or has invalid records
//!
//! Set `RUST_LOG=debug` to see the repository's own log lines.

use person_service::person::PERSON_ATTRIBUTE_COUNT;
use person_service::repository::{InMemoryPersonRepository, PersonRepository};
use std::env;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("person-seed-check");

    if args.len() < 2 {
        eprintln!("Usage: {} <seed-file>", program);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} tests/data/persons.json", program);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    println!("Checking seed file: {}", path.display());

    let repository = match InMemoryPersonRepository::from_json_file(path) {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("❌ Seed check failed: {}", e);
            process::exit(1);
        }
    };

    let persons = match repository.get_persons().await {
        Ok(persons) => persons,
        Err(e) => {
            eprintln!("❌ Seed check failed: {}", e);
            process::exit(1);
        }
    };

    let max_id = repository.max_id().await;
    let complete = persons
        .iter()
        .filter(|p| p.attributes().len() == PERSON_ATTRIBUTE_COUNT)
        .count();

    println!("✓ Seed file is valid!");
    println!();
    println!("Seed Summary:");
    println!("  Records: {}", persons.len());
    println!("  Max id: {}", max_id);
    match max_id.next() {
        Some(next) => println!("  Next id: {}", next),
        None => println!("  Next id: none (id space exhausted)"),
    }
    println!(
        "  Records with exactly {} attributes: {}",
        PERSON_ATTRIBUTE_COUNT, complete
    );
}
