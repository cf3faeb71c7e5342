//! Convert command handler

use grade_point::scale::convert_average;
use logger::error;

/// Convert an average between two registered scales and print the result.
pub fn run(value: f64, from_id: &str, to_id: &str) {
    match convert_average(value, from_id, to_id) {
        Ok(converted) => {
            println!("{value:.2} on the {from_id} scale = {converted:.2} on the {to_id} scale");
        }
        Err(err) => {
            error!("Conversion failed: {err}");
            eprintln!("✗ {err}");
        }
    }
}
