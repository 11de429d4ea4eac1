use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Writes the page context shared by most tests: base fare 1000.00,
/// baggage 50.00 per piece, insurance 200.00 flat, two passengers.
pub fn write_context(path: &Path) -> Result<(), Error> {
    let json = r#"{
    "prices": {
        "base_flight_cost": "1000.00",
        "baggage_unit_price": "50.00",
        "insurance_flat_price": "200.00"
    },
    "initial_baggage": 0,
    "passengers": [
        {"id": 10234, "full_name": "Alex Santos"},
        {"id": 10567, "full_name": "Bea Ramos"}
    ]
}"#;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

pub fn write_commands(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["op", "passenger", "delta", "value"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
