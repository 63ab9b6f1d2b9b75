/// Keyword CSV loader
///
/// Parses uploaded keyword lists in `keyword[,volume]` form: strips a
/// detected header line, drops rows whose keyword field is purely numeric
/// (assumed malformed), and falls back to volume 0 for anything
/// unparseable. Malformed rows never fail the batch.
use csv::ReaderBuilder;

use crate::normalizer::parse_volume_field;

/// Parse delimited keyword text into (keyword, volume) pairs.
///
/// The first row is treated as a header and dropped when any of its fields
/// contains "keyword" case-insensitively.
pub fn parse_keyword_csv(text: &str) -> Vec<(String, u64)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!("Skipping unreadable row {}: {}", index, err);
                continue;
            }
        };

        let keyword = match record.get(0) {
            Some(field) if !field.is_empty() => field,
            _ => continue,
        };

        if index == 0 && is_header_row(&record) {
            tracing::debug!("Dropping header row: {:?}", record);
            continue;
        }

        // A purely numeric keyword field marks a malformed row.
        if keyword.parse::<f64>().is_ok() {
            tracing::debug!("Dropping numeric keyword row: {}", keyword);
            continue;
        }

        let volume = record.get(1).map(parse_volume_field).unwrap_or(0);
        rows.push((keyword.to_string(), volume));
    }

    rows
}

fn is_header_row(record: &csv::StringRecord) -> bool {
    record
        .iter()
        .any(|field| field.to_lowercase().contains("keyword"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_numeric_rows_dropped() {
        let rows =
            parse_keyword_csv("keyword,volume\nbuy shoes,500\n123,999\nbest running shoes,300");

        assert_eq!(
            rows,
            vec![
                ("buy shoes".to_string(), 500),
                ("best running shoes".to_string(), 300)
            ]
        );
    }

    #[test]
    fn test_no_header_keeps_first_row() {
        let rows = parse_keyword_csv("buy shoes,500\nnike guide,300");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("buy shoes".to_string(), 500));
    }

    #[test]
    fn test_missing_volume_defaults_to_zero() {
        let rows = parse_keyword_csv("buy shoes\nnike guide,");
        assert_eq!(
            rows,
            vec![("buy shoes".to_string(), 0), ("nike guide".to_string(), 0)]
        );
    }

    #[test]
    fn test_unparseable_volume_defaults_to_zero() {
        let rows = parse_keyword_csv("buy shoes,lots\nnike guide,12.7");
        assert_eq!(
            rows,
            vec![("buy shoes".to_string(), 0), ("nike guide".to_string(), 12)]
        );
    }

    #[test]
    fn test_fields_trimmed() {
        let rows = parse_keyword_csv("  buy shoes  ,  500 ");
        assert_eq!(rows, vec![("buy shoes".to_string(), 500)]);
    }

    #[test]
    fn test_float_keyword_dropped() {
        let rows = parse_keyword_csv("12.5,100\nbuy shoes,500");
        assert_eq!(rows, vec![("buy shoes".to_string(), 500)]);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_keyword_csv("Keyword,Search Volume").is_empty());
        assert!(parse_keyword_csv("").is_empty());
    }
}
