//! Daily Login Reward

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::de::{flexible_bool, flexible_i64};
use crate::config::STREAK_LENGTH;

/// Response of `dailyLoginApi.php`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyLogin {
    /// `None` when the server sent no recognisable answer (error payloads)
    #[serde(default, deserialize_with = "answered_flag")]
    pub already_logged: Option<bool>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub login_count: i64,
}

/// Only an explicit yes or no counts; anything else is unanswered.
fn answered_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let explicit_no = match &value {
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "no" | "false" | "0"),
        _ => false,
    };
    if explicit_no {
        return Ok(Some(false));
    }
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match flexible_bool(v) {
            Ok(true) => Ok(Some(true)),
            _ => Ok(None),
        },
    }
}

/// Gold stars earned this week, gray stars still to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyStreak {
    pub gold: u32,
    pub gray: u32,
}

impl DailyLogin {
    /// The streak modal only opens on the first login of the day
    pub fn streak(&self) -> Option<DailyStreak> {
        if self.already_logged != Some(false) {
            return None;
        }
        let gold = self.login_count.clamp(0, i64::from(STREAK_LENGTH)) as u32;
        Some(DailyStreak {
            gold,
            gray: STREAK_LENGTH - gold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(json: &str) -> DailyLogin {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_login_of_day_opens_streak() {
        let streak = login(r#"{"already_logged": "no", "login_count": "3"}"#).streak();
        assert_eq!(streak, Some(DailyStreak { gold: 3, gray: 4 }));
    }

    #[test]
    fn test_repeat_login_has_no_streak() {
        assert_eq!(login(r#"{"already_logged": "yes", "login_count": "3"}"#).streak(), None);
    }

    #[test]
    fn test_error_payload_has_no_streak() {
        let login = login(r#"{"error": "user not found"}"#);
        assert_eq!(login.already_logged, None);
        assert_eq!(login.streak(), None);
    }

    #[test]
    fn test_unrecognised_flag_has_no_streak() {
        assert_eq!(login(r#"{"already_logged": "maybe", "login_count": 2}"#).streak(), None);
        assert_eq!(login(r#"{"already_logged": null, "login_count": 2}"#).streak(), None);
    }

    #[test]
    fn test_streak_is_clamped() {
        let streak = login(r#"{"already_logged": "no", "login_count": 12}"#).streak().unwrap();
        assert_eq!((streak.gold, streak.gray), (7, 0));
        let streak = login(r#"{"already_logged": "no", "login_count": -2}"#).streak().unwrap();
        assert_eq!((streak.gold, streak.gray), (0, 7));
    }
}
