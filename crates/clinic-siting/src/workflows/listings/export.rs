use std::io::Write;

use serde::Serialize;

/// Writes rows as CSV with a header taken from the row's field names.
pub fn write_csv<W, T>(writer: W, rows: &[T]) -> Result<(), csv::Error>
where
    W: Write,
    T: Serialize,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
