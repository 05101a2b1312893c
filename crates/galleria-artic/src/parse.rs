//! Listing payload parsing, separated from transport so it can be tested
//! against inline JSON fixtures.

use serde_json::Value;

use crate::{ArticError, Artwork, ArtworkPage};

/// Parse a listing response body: `{data: [...], pagination: {total}}`.
pub(crate) fn parse_page(body: &Value) -> Result<ArtworkPage, ArticError> {
    let items = body["data"]
        .as_array()
        .ok_or_else(|| ArticError::Parse("missing `data` array".into()))?;
    let total = body["pagination"]["total"]
        .as_u64()
        .ok_or_else(|| ArticError::Parse("missing `pagination.total`".into()))?;

    let artworks = items
        .iter()
        .map(parse_artwork)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArtworkPage { artworks, total })
}

/// Parse one listing item. The id is required; every payload attribute is
/// normalized to a fixed default when absent, null, or empty.
fn parse_artwork(item: &Value) -> Result<Artwork, ArticError> {
    let id = item["id"]
        .as_u64()
        .ok_or_else(|| ArticError::Parse("item without integer `id`".into()))?;

    Ok(Artwork {
        id,
        title: text_or(&item["title"], "Unknown"),
        place_of_origin: text_or(&item["place_of_origin"], "Unknown"),
        artist_display: text_or(&item["artist_display"], "Unknown"),
        inscriptions: text_or(&item["inscriptions"], "None"),
        date_start: item["date_start"].as_i64().unwrap_or(0) as i32,
        date_end: item["date_end"].as_i64().unwrap_or(0) as i32,
    })
}

fn text_or(value: &Value, default: &str) -> String {
    match value.as_str() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_items() {
        let body = json!({
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte",
                    "place_of_origin": "France",
                    "artist_display": "Georges Seurat",
                    "inscriptions": "signed lower right",
                    "date_start": 1884,
                    "date_end": 1886
                },
                {
                    "id": 28560,
                    "title": "The Bedroom",
                    "place_of_origin": "Saint-Remy-de-Provence",
                    "artist_display": "Vincent van Gogh",
                    "inscriptions": null,
                    "date_start": 1889,
                    "date_end": 1889
                }
            ],
            "pagination": {"total": 129708, "limit": 2, "current_page": 1}
        });

        let page = parse_page(&body).unwrap();
        assert_eq!(page.total, 129708);
        assert_eq!(page.artworks.len(), 2);
        assert_eq!(page.artworks[0].id, 27992);
        assert_eq!(page.artworks[0].date_start, 1884);
        assert_eq!(page.artworks[1].artist_display, "Vincent van Gogh");
        assert_eq!(page.artworks[1].inscriptions, "None");
    }

    #[test]
    fn normalizes_missing_payload_fields() {
        let body = json!({
            "data": [{"id": 7}],
            "pagination": {"total": 1}
        });

        let page = parse_page(&body).unwrap();
        let art = &page.artworks[0];
        assert_eq!(art.title, "Unknown");
        assert_eq!(art.place_of_origin, "Unknown");
        assert_eq!(art.artist_display, "Unknown");
        assert_eq!(art.inscriptions, "None");
        assert_eq!(art.date_start, 0);
        assert_eq!(art.date_end, 0);
    }

    #[test]
    fn normalizes_empty_strings_like_nulls() {
        let body = json!({
            "data": [{"id": 7, "title": "", "inscriptions": ""}],
            "pagination": {"total": 1}
        });

        let page = parse_page(&body).unwrap();
        assert_eq!(page.artworks[0].title, "Unknown");
        assert_eq!(page.artworks[0].inscriptions, "None");
    }

    #[test]
    fn identical_input_produces_identical_artworks() {
        let body = json!({
            "data": [{"id": 42, "title": null, "date_start": 1901}],
            "pagination": {"total": 9}
        });

        assert_eq!(parse_page(&body).unwrap(), parse_page(&body).unwrap());
    }

    #[test]
    fn item_without_id_is_an_error() {
        let body = json!({
            "data": [{"title": "Untitled"}],
            "pagination": {"total": 1}
        });

        let err = parse_page(&body).unwrap_err();
        assert!(matches!(err, ArticError::Parse(_)));
    }

    #[test]
    fn missing_data_array_is_an_error() {
        let err = parse_page(&json!({"pagination": {"total": 1}})).unwrap_err();
        assert!(matches!(err, ArticError::Parse(_)));
    }

    #[test]
    fn missing_total_is_an_error() {
        let err = parse_page(&json!({"data": [], "pagination": {}})).unwrap_err();
        assert!(matches!(err, ArticError::Parse(_)));
    }

    #[test]
    fn empty_page_parses() {
        let page = parse_page(&json!({"data": [], "pagination": {"total": 0}})).unwrap();
        assert!(page.artworks.is_empty());
        assert_eq!(page.total, 0);
    }
}
