//! Basic usage example for obce-rs
//!
//! Converts a small in-memory dataset, then reads the listing back.
//!
//! Run with: cargo run --example basic_usage

use obce_rs::prelude::*;

const DATASET: &str = r#"{
  "municipalities": [
    {"hezkyNazev": "Praha", "souradnice": [50.0875, 14.4214]},
    {"hezkyNazev": "Brno", "souradnice": [49.1951, 16.6068]},
    {"hezkyNazev": "Bez souřadnic", "souradnice": null},
    {"hezkyNazev": "Ostrava", "souradnice": [49.8209, 18.2625]}
  ]
}"#;

fn main() -> Result<()> {
    println!("=== obce-rs Basic Usage Example ===\n");

    let doc: Document = obce_rs::parse_document(DATASET.as_bytes())?;
    let stats = doc.stats();
    println!("Municipalities: {}", stats.municipalities);
    println!("  with coordinates: {}", stats.with_coordinates);
    println!("  without coordinates: {}\n", stats.without_coordinates);

    let mut listing = Vec::new();
    let summary = convert_reader(DATASET.as_bytes(), &mut listing)?;
    println!("--- Listing ({} lines) ---", summary.written);
    print!("{}", String::from_utf8_lossy(&listing));

    println!("\n--- Read back ---");
    for entry in read_listing(listing.as_slice())? {
        if let Some((first, second)) = entry.coordinates.as_f64() {
            println!("  {:<10} {first:>8.4} {second:>8.4}", entry.name);
        }
    }

    Ok(())
}
