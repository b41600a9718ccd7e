//! Lenient numeric decoding.
//!
//! The records endpoints are not consistent about numeric columns: `Age`
//! sometimes arrives as `12`, sometimes as `"12"`, and older rows may hold
//! `null`, a float or a negative. These helpers coerce all of them so a single
//! odd row never fails a whole list; values re-serialize as plain integers.

use serde::{Deserialize, Deserializer, de};

/// Any scalar a numeric column may carry. `null` is handled one level up
/// through `Option`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

/// Negative and non-finite values clamp to 0; fractions are truncated.
fn float_to_u64(f: f64) -> u64 {
    if f.is_finite() && f > 0.0 {
        f.trunc() as u64
    } else {
        0
    }
}

fn parse_u64<E: de::Error>(value: Option<NumberOrString>) -> Result<u64, E> {
    match value {
        None => Ok(0),
        Some(NumberOrString::Unsigned(n)) => Ok(n),
        Some(NumberOrString::Signed(_)) => Ok(0),
        Some(NumberOrString::Float(f)) => Ok(float_to_u64(f)),
        Some(NumberOrString::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            if let Ok(n) = trimmed.parse::<u64>() {
                return Ok(n);
            }
            trimmed
                .parse::<f64>()
                .map(float_to_u64)
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s)))
        }
    }
}

/// Deserialize a `u64` from a JSON number, a numeric string or `null`.
///
/// An empty string or `null` decodes as `0`, matching how an untouched
/// numeric form field is stored by the backend.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_u64(Option::<NumberOrString>::deserialize(deserializer)?)
}

/// Same as [`lenient_u64`] but narrowed to `u32`, saturating at `u32::MAX`.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = parse_u64::<D::Error>(Option::<NumberOrString>::deserialize(deserializer)?)?;
    Ok(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Deserialize a `String` from a JSON string, any number, or `null`.
///
/// Used for free-text columns such as a student's grade, which some rows
/// store as `10` and others as `"10A"`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        None => String::new(),
        Some(NumberOrString::Unsigned(n)) => n.to_string(),
        Some(NumberOrString::Signed(n)) => n.to_string(),
        Some(NumberOrString::Float(f)) => f.to_string(),
        Some(NumberOrString::Text(s)) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_u32")]
        age: u32,
        #[serde(deserialize_with = "lenient_u64")]
        salary: u64,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let row: Row = serde_json::from_str(r#"{"age": 12, "salary": "30000"}"#).unwrap();
        assert_eq!(row.age, 12);
        assert_eq!(row.salary, 30000);

        let row: Row = serde_json::from_str(r#"{"age": " 9 ", "salary": 0}"#).unwrap();
        assert_eq!(row.age, 9);
    }

    #[test]
    fn test_empty_string_is_zero() {
        let row: Row = serde_json::from_str(r#"{"age": "", "salary": ""}"#).unwrap();
        assert_eq!(row.age, 0);
        assert_eq!(row.salary, 0);
    }

    #[test]
    fn test_lenient_string() {
        #[derive(Deserialize)]
        struct Grade {
            #[serde(deserialize_with = "lenient_string")]
            grade: String,
        }

        let g: Grade = serde_json::from_str(r#"{"grade": 10}"#).unwrap();
        assert_eq!(g.grade, "10");
        let g: Grade = serde_json::from_str(r#"{"grade": "10A"}"#).unwrap();
        assert_eq!(g.grade, "10A");
    }

    #[test]
    fn test_rejects_garbage() {
        let res: Result<Row, _> = serde_json::from_str(r#"{"age": "ten", "salary": 1}"#);
        assert!(res.is_err());

        let res: Result<Row, _> = serde_json::from_str(r#"{"age": [1], "salary": 1}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_null_is_zero() {
        let row: Row = serde_json::from_str(r#"{"age": null, "salary": null}"#).unwrap();
        assert_eq!(row.age, 0);
        assert_eq!(row.salary, 0);
    }

    #[test]
    fn test_floats_are_truncated() {
        let row: Row = serde_json::from_str(r#"{"age": 12.9, "salary": 52000.5}"#).unwrap();
        assert_eq!(row.age, 12);
        assert_eq!(row.salary, 52000);

        let row: Row = serde_json::from_str(r#"{"age": "7.5", "salary": "1e3"}"#).unwrap();
        assert_eq!(row.age, 7);
        assert_eq!(row.salary, 1000);
    }

    #[test]
    fn test_negatives_clamp_to_zero() {
        let row: Row = serde_json::from_str(r#"{"age": -3, "salary": -0.5}"#).unwrap();
        assert_eq!(row.age, 0);
        assert_eq!(row.salary, 0);
    }

    #[test]
    fn test_u32_saturates() {
        let row: Row = serde_json::from_str(r#"{"age": 5000000000, "salary": 1}"#).unwrap();
        assert_eq!(row.age, u32::MAX);
    }

    #[test]
    fn test_lenient_string_any_scalar() {
        #[derive(Deserialize)]
        struct Grade {
            #[serde(deserialize_with = "lenient_string")]
            grade: String,
        }

        let g: Grade = serde_json::from_str(r#"{"grade": 3.5}"#).unwrap();
        assert_eq!(g.grade, "3.5");
        let g: Grade = serde_json::from_str(r#"{"grade": -1}"#).unwrap();
        assert_eq!(g.grade, "-1");
        let g: Grade = serde_json::from_str(r#"{"grade": null}"#).unwrap();
        assert_eq!(g.grade, "");
    }
}
