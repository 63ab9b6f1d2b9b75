/// Input normalization for the keyword pipeline
///
/// Pairs raw keywords with caller-supplied volumes, trims and drops blank
/// keywords, and coerces loosely-typed volume fields to non-negative
/// integers. Unparseable volumes fall back to 0 rather than failing the
/// batch.
use serde_json::Value;

use crate::error::ValidationError;

/// Pair keywords with volumes and trim the batch.
///
/// A volume list whose length does not match the keyword list is treated as
/// absent and every volume defaults to 0. Keywords that are blank after
/// trimming are dropped along with their paired volume.
pub fn normalize_input(
    keywords: &[String],
    volumes: &[Value],
) -> Result<Vec<(String, u64)>, ValidationError> {
    if keywords.is_empty() {
        return Err(ValidationError::NoKeywords);
    }

    let volumes_aligned = volumes.len() == keywords.len();

    let mut records = Vec::with_capacity(keywords.len());
    for (index, raw) in keywords.iter().enumerate() {
        let keyword = raw.trim();
        if keyword.is_empty() {
            tracing::debug!("Dropping blank keyword at position {}", index);
            continue;
        }

        let volume = if volumes_aligned {
            coerce_volume(&volumes[index])
        } else {
            0
        };

        records.push((keyword.to_string(), volume));
    }

    if records.is_empty() {
        return Err(ValidationError::NoKeywords);
    }

    Ok(records)
}

/// Coerce a JSON volume field to a non-negative integer.
///
/// Accepts numbers and numeric strings; floats truncate, negatives and
/// everything unparseable fall back to 0.
pub fn coerce_volume(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(f) = n.as_f64() {
                if f > 0.0 {
                    f.trunc() as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => parse_volume_field(s),
        _ => 0,
    }
}

/// Parse a textual volume field ("500", "12.7") to a non-negative integer.
pub fn parse_volume_field(field: &str) -> u64 {
    let field = field.trim();
    if let Ok(v) = field.parse::<u64>() {
        return v;
    }
    match field.parse::<f64>() {
        Ok(f) if f > 0.0 => f.trunc() as u64,
        _ => 0,
    }
}
