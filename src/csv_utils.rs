//! CSV serialization utilities.
//!
//! Provides a generic function for writing CSV rows.

use serde::Serialize;
use std::io::Write;

/// Writes an iterator of records to a CSV writer, header first.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::NotificationRow;

    #[test]
    fn test_write_csv() -> csv::Result<()> {
        let rows = vec![
            NotificationRow {
                id: Some("n2".to_string()),
                kind: Some("Limit".to_string()),
                amount: Some("1.5".parse().unwrap()),
                timestamp: Some("2019-03-01T12:00:00.000Z".to_string()),
            },
            NotificationRow {
                id: None,
                kind: Some("CancelOrder".to_string()),
                amount: None,
                timestamp: None,
            },
        ];
        let mut output = Vec::new();
        write_csv(&mut output, rows.into_iter())?;

        let expected = "id,kind,amount,timestamp
n2,Limit,1.5,2019-03-01T12:00:00.000Z
,CancelOrder,,
";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
        Ok(())
    }
}
