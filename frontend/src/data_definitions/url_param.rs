//! Typed URL path segments for router state.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

/// Route-segment wrapper: any serde value becomes a path segment via
/// cbor + url-safe base64. Encoding equal values always yields the same
/// segment, so filter/page state stays shareable and bookmarkable.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display produces the segment that FromStr parses back
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "failed to decode url segment: {}", err),
            Self::Cbor(err) => write!(f, "failed to deserialize url segment: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::Base64)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(bytes))
            .map_err(UrlParamParseError::Cbor)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::listing_query::{FilterCategory, ListingQuery};

    #[test]
    fn round_trips_a_listing_query() {
        let mut query = ListingQuery::default();
        query.search = "savings groups".to_string();
        query.toggle(FilterCategory::Theme, "gender");
        query.toggle(FilterCategory::MediaType, "podcast");

        let param = UrlParam::from(query.clone());
        let segment = param.to_string();
        let parsed: UrlParam<ListingQuery> = segment.parse().unwrap();
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn equal_values_encode_identically() {
        let mut a = ListingQuery::default();
        a.toggle(FilterCategory::Theme, "funding");
        a.toggle(FilterCategory::Country, "kenya");
        let mut b = ListingQuery::default();
        b.toggle(FilterCategory::Country, "kenya");
        b.toggle(FilterCategory::Theme, "funding");

        assert_eq!(UrlParam::from(a).to_string(), UrlParam::from(b).to_string());
    }

    #[test]
    fn rejects_garbage() {
        let parsed = "not!base64!".parse::<UrlParam<ListingQuery>>();
        assert!(parsed.is_err());
    }
}
