//! Raw dataset rows as published by the source file.
//!
//! The source schema is enforced only by convention: any field may be null,
//! missing, or carry a number where text is expected (and vice versa). Every
//! field is therefore optional here and deserialized leniently. Text is
//! trimmed and blank text is absent, whether it comes from a JSON string or a
//! CSV cell. Arrays and objects where a scalar belongs are treated as absent.
//! Defaulting to empty strings and zero coordinates happens later, in the
//! normalizer.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Column keys used by the source dataset.
pub mod columns {
    pub const NAME: &str = "機構名稱";
    pub const CODE: &str = "機構代碼";
    pub const KIND: &str = "機構種類";
    pub const CITY_CODE: &str = "縣市";
    pub const DISTRICT_CODE: &str = "區";
    pub const ADDRESS: &str = "地址全址";
    pub const LONGITUDE: &str = "經度";
    pub const LATITUDE: &str = "緯度";
    pub const ABC_TIER: &str = "O_ABC";
    pub const SERVICE_NAME: &str = "特約服務項目";
    pub const CONTRACT_CITY_CODE: &str = "特約縣市";
    pub const CONTRACT_AREA: &str = "特約區域";
    pub const PHONE: &str = "機構電話";
    pub const EMAIL: &str = "電子郵件";
    pub const MANAGER: &str = "機構負責人姓名";
    pub const CONTRACT_START: &str = "特約起日";
    pub const CONTRACT_END: &str = "特約迄日";

    /// All known columns in source order.
    pub const ALL: [&str; 17] = [
        NAME,
        CODE,
        KIND,
        CITY_CODE,
        DISTRICT_CODE,
        ADDRESS,
        LONGITUDE,
        LATITUDE,
        ABC_TIER,
        SERVICE_NAME,
        CONTRACT_CITY_CODE,
        CONTRACT_AREA,
        PHONE,
        EMAIL,
        MANAGER,
        CONTRACT_START,
        CONTRACT_END,
    ];
}

/// One row of the long-term-care contract dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "機構名稱", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "機構代碼", default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(rename = "機構種類", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(rename = "縣市", default, deserialize_with = "lenient_int")]
    pub city_code: Option<i64>,
    #[serde(rename = "區", default, deserialize_with = "lenient_int")]
    pub district_code: Option<i64>,
    #[serde(rename = "地址全址", default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(rename = "經度", default, deserialize_with = "lenient_float")]
    pub longitude: Option<f64>,
    #[serde(rename = "緯度", default, deserialize_with = "lenient_float")]
    pub latitude: Option<f64>,
    #[serde(rename = "O_ABC", default, deserialize_with = "lenient_text")]
    pub abc_tier: Option<String>,
    #[serde(rename = "特約服務項目", default, deserialize_with = "lenient_text")]
    pub service_name: Option<String>,
    #[serde(rename = "特約縣市", default, deserialize_with = "lenient_int")]
    pub contract_city_code: Option<i64>,
    #[serde(rename = "特約區域", default, deserialize_with = "lenient_text")]
    pub contract_area: Option<String>,
    #[serde(rename = "機構電話", default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(rename = "電子郵件", default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(rename = "機構負責人姓名", default, deserialize_with = "lenient_text")]
    pub manager: Option<String>,
    #[serde(rename = "特約起日", default, deserialize_with = "lenient_int")]
    pub contract_start: Option<i64>,
    #[serde(rename = "特約迄日", default, deserialize_with = "lenient_int")]
    pub contract_end: Option<i64>,
}

impl RawRecord {
    /// Build a record from text cells looked up by column key.
    ///
    /// Blank cells are treated as absent. Numeric columns that do not parse
    /// are treated as absent as well.
    pub fn from_cells<'a, F>(cell: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let text = |key: &str| cell(key).and_then(text_from_cell);
        let int = |key: &str| cell(key).and_then(int_from_text);
        let float = |key: &str| cell(key).and_then(float_from_text);
        Self {
            name: text(columns::NAME),
            code: text(columns::CODE),
            kind: text(columns::KIND),
            city_code: int(columns::CITY_CODE),
            district_code: int(columns::DISTRICT_CODE),
            address: text(columns::ADDRESS),
            longitude: float(columns::LONGITUDE),
            latitude: float(columns::LATITUDE),
            abc_tier: text(columns::ABC_TIER),
            service_name: text(columns::SERVICE_NAME),
            contract_city_code: int(columns::CONTRACT_CITY_CODE),
            contract_area: text(columns::CONTRACT_AREA),
            phone: text(columns::PHONE),
            email: text(columns::EMAIL),
            manager: text(columns::MANAGER),
            contract_start: int(columns::CONTRACT_START),
            contract_end: int(columns::CONTRACT_END),
        }
    }
}

/// Returns the trimmed cell, or `None` when it is blank.
pub fn text_from_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an integer cell. Integral floats such as `20230615.0` are accepted.
pub fn int_from_text(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed.parse::<f64>().ok().and_then(integral)
}

/// Parses a finite floating point cell.
pub fn float_from_text(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Int(value) => Some(value.to_string()),
            Scalar::Float(value) => Some(value.to_string()),
            Scalar::Text(value) => text_from_cell(&value),
            Scalar::Bool(value) => Some(value.to_string()),
            Scalar::Other(_) => None,
        }
    }

    fn to_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            Scalar::Float(value) => integral(*value),
            Scalar::Text(value) => int_from_text(value),
            Scalar::Bool(_) | Scalar::Other(_) => None,
        }
    }

    fn to_float(&self) -> Option<f64> {
        match self {
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Float(value) => value.is_finite().then_some(*value),
            Scalar::Text(value) => float_from_text(value),
            Scalar::Bool(_) | Scalar::Other(_) => None,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Scalar::to_int))
}

fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Scalar::to_float))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_rejects_fractions() {
        assert_eq!(integral(20230615.0), Some(20230615));
        assert_eq!(integral(1.5), None);
        assert_eq!(integral(f64::NAN), None);
    }

    #[test]
    fn cells_parse_leniently() {
        assert_eq!(int_from_text(" 20230615 "), Some(20230615));
        assert_eq!(int_from_text("20230615.0"), Some(20230615));
        assert_eq!(int_from_text("n/a"), None);
        assert_eq!(float_from_text("121.5"), Some(121.5));
        assert_eq!(float_from_text("NaN"), None);
        assert_eq!(text_from_cell("   "), None);
    }
}
