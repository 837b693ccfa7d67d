//! Parsing of uploaded user CSV files.
use crate::types::User;
use std::io::Read;
use thiserror::Error;

/// Columns every record must have, in order.
const COLUMNS: [&str; 5] = ["id", "name", "phone_number", "country", "city"];

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("error reading CSV records: {0}")]
    Malformed(#[from] csv::Error),
    #[error("record {record}: expected {} fields, found {found}", COLUMNS.len())]
    FieldCount { record: usize, found: usize },
    #[error("record {record}: ID is not a number: {value:?}")]
    InvalidId { record: usize, value: String },
}

/// Parses a headerless CSV of `id,name,phone_number,country,city` records.
///
/// All records must have the same number of fields. Record indices in errors
/// are zero-based.
pub fn parse_users_csv<R: Read>(reader: R) -> Result<Vec<User>, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut users = Vec::new();
    for (record_idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != COLUMNS.len() {
            return Err(CsvError::FieldCount {
                record: record_idx,
                found: record.len(),
            });
        }

        let id = record[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| CsvError::InvalidId {
                record: record_idx,
                value: record[0].to_string(),
            })?;

        users.push(User {
            id,
            name: record[1].to_string(),
            phone_number: record[2].to_string(),
            country: record[3].to_string(),
            city: record[4].to_string(),
        });
    }

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_order() {
        let input = "1,Alice,+44 20 7946,UK,London\n2,\"Stone, Bob\",+1 212 555,USA,New York\n";

        let users = parse_users_csv(input.as_bytes()).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].city, "London");
        assert_eq!(users[1].name, "Stone, Bob");
        assert_eq!(users[1].phone_number, "+1 212 555");
    }

    #[test]
    fn empty_input_has_no_users() {
        assert!(parse_users_csv("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = parse_users_csv("notid,blablabla,,,".as_bytes()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidId { record: 0, ref value } if value == "notid"));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_users_csv("1,Alice,UK".as_bytes()).unwrap_err();
        assert!(matches!(err, CsvError::FieldCount { record: 0, found: 3 }));
    }

    #[test]
    fn rejects_ragged_records() {
        let err = parse_users_csv("1,a,b,c,d\n2,a,b\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CsvError::Malformed(_)));
    }

    #[test]
    fn reports_the_failing_record() {
        let err = parse_users_csv("1,a,b,c,d\nx,a,b,c,d\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "record 1: ID is not a number: \"x\"");
    }
}
