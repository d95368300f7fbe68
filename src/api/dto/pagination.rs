//! Cursor pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};
use uuid::Uuid;

/// Query parameters of `GET /urls`.
///
/// Uses `serde_with` so `?page_size=10` parses as an integer and an empty
/// `?cursor=` means "first page".
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct LinksQueryParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub cursor: Option<Uuid>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(query: &str) -> Result<LinksQueryParams, String> {
        let uri: Uri = format!("/urls?{query}").parse().unwrap();
        Query::<LinksQueryParams>::try_from_uri(&uri)
            .map(|Query(params)| params)
            .map_err(|e| e.to_string())
    }

    #[test]
    fn test_defaults() {
        let params = parse("").unwrap();
        assert!(params.cursor.is_none());
        assert!(params.page_size.is_none());
    }

    #[test]
    fn test_page_size_parsed_as_integer() {
        assert_eq!(parse("page_size=10").unwrap().page_size, Some(10));
    }

    #[test]
    fn test_empty_cursor_is_first_page() {
        assert!(parse("cursor=").unwrap().cursor.is_none());
    }

    #[test]
    fn test_cursor_parsed_as_uuid() {
        let id = Uuid::now_v7();
        assert_eq!(parse(&format!("cursor={id}")).unwrap().cursor, Some(id));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(parse("cursor=not-a-uuid").is_err());
        assert!(parse("page_size=ten").is_err());
        assert!(parse("page_size=-1").is_err());
    }
}
