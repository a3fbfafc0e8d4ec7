//! Reverse Geocoding
//!
//! Device coordinates are turned into a [`Locality`] with the Google
//! Geocoding API. Only the first result is consulted.

use reqwest::Url;
use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::models::Locality;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DISTRICT_TYPE: &str = "administrative_area_level_3";
const COUNTRY_TYPE: &str = "country";

#[derive(Debug, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressComponent {
    #[serde(default)]
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

/// District and country of the first result; missing parts stay empty
pub fn locality_from(response: &GeocodeResponse) -> Locality {
    let Some(first) = response.results.first() else {
        return Locality::default();
    };
    let find = |kind: &str| {
        first
            .address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.clone())
            .unwrap_or_default()
    };
    Locality {
        district: find(DISTRICT_TYPE),
        country: find(COUNTRY_TYPE),
    }
}

impl ApiClient {
    pub async fn reverse_geocode(&self, lat: f64, lng: f64, key: &str) -> Result<Locality, ApiError> {
        let url = Url::parse_with_params(
            GEOCODE_URL,
            &[("latlng", format!("{},{}", lat, lng)), ("key", key.to_string())],
        )
        .map_err(|e| ApiError::Url(e.to_string()))?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: GeocodeResponse = super::ensure_ok(response)?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(locality_from(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_district_and_country() {
        let body: GeocodeResponse = serde_json::from_str(
            r#"{"results": [{"address_components": [
                {"long_name": "Kakkanad", "types": ["sublocality"]},
                {"long_name": "Kanayannur", "types": ["administrative_area_level_3", "political"]},
                {"long_name": "India", "types": ["country", "political"]}
            ]}, {"address_components": [
                {"long_name": "Elsewhere", "types": ["administrative_area_level_3"]}
            ]}]}"#,
        )
        .unwrap();
        let locality = locality_from(&body);
        assert_eq!(locality.district, "Kanayannur");
        assert_eq!(locality.country, "India");
    }

    #[test]
    fn test_no_results_is_empty_locality() {
        let body: GeocodeResponse = serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert_eq!(locality_from(&body), Locality::default());
        assert!(!locality_from(&body).is_known());
    }
}
