//! Scales command handler

use grade_point::scale::registry;

/// List every registered scale with its symbol table and classification bands.
pub fn run() {
    for scale in registry() {
        println!("\n=== {} ({}) ===\n", scale.id, scale.name);

        println!("Symbols:");
        for (symbol, point) in scale.symbols {
            println!("  {symbol:<4} {point:.1}");
        }

        println!("Bands:");
        for band in scale.bands {
            println!("  {:.2} - {:.2}  {}", band.min, band.max, band.label);
        }
    }
}
