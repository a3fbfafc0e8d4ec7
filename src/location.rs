//! Device Location
//!
//! Wraps the browser geolocation API in a future and resolves the position
//! to a [`Locality`] for the Now strip.

use js_sys::{Promise, Reflect};
use leptos::logging::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::Locality;

/// `GeolocationPositionError.PERMISSION_DENIED`
const PERMISSION_DENIED: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// What the Buzz Wall knows about the device position
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Pending,
    Denied,
    Ready(Locality),
}

impl LocationState {
    pub fn locality(&self) -> Option<&Locality> {
        match self {
            LocationState::Ready(locality) => Some(locality),
            _ => None,
        }
    }
}

fn classify(code: Option<f64>, message: String) -> LocationError {
    if code == Some(PERMISSION_DENIED) {
        LocationError::PermissionDenied
    } else {
        LocationError::Unavailable(message)
    }
}

fn error_from_js(err: JsValue) -> LocationError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64());
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    classify(code, message)
}

fn number(target: &JsValue, key: &str) -> Result<f64, LocationError> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| LocationError::Unavailable(format!("position has no {}", key)))
}

/// Latitude and longitude of the device; prompts for permission if needed
pub async fn current_position() -> Result<(f64, f64), LocationError> {
    let window = web_sys::window().ok_or_else(|| LocationError::Unavailable("no window".into()))?;
    let geolocation = window.navigator().geolocation().map_err(error_from_js)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    let position = JsFuture::from(promise).await.map_err(error_from_js)?;
    let coords = Reflect::get(&position, &JsValue::from_str("coords")).map_err(error_from_js)?;

    Ok((number(&coords, "latitude")?, number(&coords, "longitude")?))
}

/// Position plus reverse geocode. A failed geocode still yields a
/// (blank) locality; only position errors are reported.
pub async fn resolve_locality(api: &ApiClient, config: &AppConfig) -> Result<Locality, LocationError> {
    let (lat, lng) = current_position().await?;
    let Some(key) = config.maps_api_key.as_deref() else {
        warn!("[Location] No maps key configured, skipping reverse geocode");
        return Ok(Locality::default());
    };
    match api.reverse_geocode(lat, lng, key).await {
        Ok(locality) => Ok(locality),
        Err(e) => {
            warn!("[Location] Reverse geocode failed: {}", e);
            Ok(Locality::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_code_maps_to_permission_error() {
        assert_eq!(classify(Some(1.0), "User denied".into()), LocationError::PermissionDenied);
        assert_eq!(
            classify(Some(3.0), "Timeout expired".into()),
            LocationError::Unavailable("Timeout expired".into())
        );
        assert!(matches!(classify(None, String::new()), LocationError::Unavailable(_)));
    }

    #[test]
    fn test_only_ready_state_has_locality() {
        assert!(LocationState::Pending.locality().is_none());
        assert!(LocationState::Denied.locality().is_none());
        let ready = LocationState::Ready(Locality { district: "Kochi".into(), country: "India".into() });
        assert_eq!(ready.locality().map(|l| l.district.as_str()), Some("Kochi"));
    }
}
