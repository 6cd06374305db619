use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// A promotional partner as served by `/api/brands`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub brand_id: i64,
    pub brand_name: String,
}

/// A time-bounded offer as served by `/api/promotions`.
///
/// `brand` is the partner's display name, not an id; the backend joins it in.
/// Dates stay raw ISO-8601 strings and are only parsed for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub brand: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

/// Render an ISO-8601 date or datetime as a short human date.
/// Unparseable input is shown verbatim rather than erroring.
pub fn display_date(raw: &str) -> String {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(d) = raw.parse::<NaiveDate>() {
        return d.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_deserializes_from_wire_shape() {
        let brands: Vec<Brand> =
            serde_json::from_value(serde_json::json!([{ "brand_id": 1, "brand_name": "Acme" }]))
                .expect("deserialize");
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].brand_id, 1);
        assert_eq!(brands[0].brand_name, "Acme");
    }

    #[test]
    fn promotion_deserializes_renamed_fields() {
        let promos: Vec<Promotion> = serde_json::from_value(serde_json::json!([{
            "id": 1,
            "brand": "Acme",
            "title": "Sale",
            "type": "Flash",
            "startDate": "2024-01-01",
            "endDate": "2024-01-02"
        }]))
        .expect("deserialize");
        assert_eq!(promos.len(), 1);
        let promo = &promos[0];
        assert_eq!(promo.id, 1);
        assert_eq!(promo.brand, "Acme");
        assert_eq!(promo.title, "Sale");
        assert_eq!(promo.kind, "Flash");
        assert_eq!(promo.start_date, "2024-01-01");
        assert_eq!(promo.end_date, "2024-01-02");
    }

    #[test]
    fn promotion_rejects_non_array_body() {
        let result: Result<Vec<Promotion>, _> =
            serde_json::from_str("{\"oops\": \"not an array\"}");
        assert!(result.is_err());
    }

    #[test]
    fn display_date_handles_date_and_datetime() {
        assert_eq!(display_date("2024-01-01"), "Jan 01, 2024");
        assert_eq!(display_date("2024-06-15T09:30:00"), "Jun 15, 2024");
    }

    #[test]
    fn display_date_falls_back_to_raw_input() {
        assert_eq!(display_date("soon"), "soon");
        assert_eq!(display_date(""), "");
    }
}
