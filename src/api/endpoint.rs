//! API Endpoints
//!
//! Every remote call is described by an [`Endpoint`]: a script path under
//! the API base plus its query pairs. Keeping requests as plain data lets the
//! engagement layer hand them to any [`super::EngagementApi`].

use reqwest::Url;

use super::ApiError;
use crate::models::{Locality, PageId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn new(path: &'static str) -> Self {
        Self { path, query: Vec::new() }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Value of a query parameter, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn url(&self, base: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", base.trim_end_matches('/'), self.path);
        // parse_with_params leaves a bare `?` behind when there are no pairs
        let url = if self.query.is_empty() {
            Url::parse(&joined)
        } else {
            Url::parse_with_params(&joined, self.query.iter().map(|(k, v)| (*k, v.as_str())))
        };
        url.map_err(|e| ApiError::Url(e.to_string()))
    }

    // ========================
    // Engagement
    // ========================

    /// Flips the server-side follow state
    pub fn follow_toggle(page_id: &PageId, user_id: &UserId) -> Self {
        Self::new("event-Follow.php")
            .param("page_id", page_id)
            .param("userId", user_id)
    }

    /// Like toggle for challenge submissions and certificates
    pub fn toggle_like(
        challenge_id: &str,
        people_data_id: &str,
        user_id: &UserId,
        task_id: &str,
        owner: &UserId,
    ) -> Self {
        Self::new("toggle-like.php")
            .param("challenge_id", challenge_id)
            .param("people_data_id", people_data_id)
            .param("user_id", user_id)
            .param("task_id", task_id)
            .param("owner", owner)
    }

    pub fn toggle_post_like(page_id: &PageId, post_id: &str, user_id: &UserId) -> Self {
        Self::new("toggle-post-likes.php")
            .param("page_id", page_id)
            .param("post_id", post_id)
            .param("user_id", user_id)
    }

    pub fn check_already_liked(challenge_id: &str, people_data_id: &str, user_id: &UserId) -> Self {
        Self::new("checkAlreadyLiked.php")
            .param("challenge_id", challenge_id)
            .param("people_data_id", people_data_id)
            .param("user_id", user_id)
    }

    pub fn report_media(challenge_id: &str, people_data_id: &str, user_id: &UserId) -> Self {
        Self::new("report-media.php")
            .param("challenge_id", challenge_id)
            .param("people_data_id", people_data_id)
            .param("user_id", user_id)
    }

    // ========================
    // Retrievals
    // ========================

    pub fn buzz_wall(user_id: &UserId) -> Self {
        Self::new("getBuzzWall.php").param("userId", user_id)
    }

    /// `country` is only sent when known
    pub fn now(locality: &Locality) -> Self {
        let endpoint = Self::new("getNow.php").param("district", &locality.district);
        if locality.country.is_empty() {
            endpoint
        } else {
            endpoint.param("country", &locality.country)
        }
    }

    pub fn ongoing_tasks(user_id: &UserId) -> Self {
        Self::new("getOngoingTasks.php").param("user_id", user_id)
    }

    pub fn verification_tasks(user_id: &UserId) -> Self {
        Self::new("getVerificationTasks.php").param("user_id", user_id)
    }

    pub fn one_challenge(page_id: &PageId, user_id: &UserId, district: Option<&str>) -> Self {
        let endpoint = Self::new("getOneChallenge.php")
            .param("id", page_id)
            .param("userId", user_id);
        match district {
            Some(d) => endpoint.param("district", d),
            None => endpoint,
        }
    }

    pub fn challenge_one(challenge_id: &str, user_id: &UserId) -> Self {
        Self::new("getChallengeOne.php")
            .param("challenge_id", challenge_id)
            .param("user_id", user_id)
    }

    pub fn instructions(kind: &str) -> Self {
        Self::new("getInstructions.php").param("type", kind)
    }

    /// POSTed as a form with `user_id`
    pub fn daily_login() -> Self {
        Self::new("dailyLoginApi.php")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_toggle_url() {
        let url = Endpoint::follow_toggle(&PageId::new("12"), &UserId::new("7"))
            .url("https://api.example/app/")
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example/app/event-Follow.php?page_id=12&userId=7");
    }

    #[test]
    fn test_like_urls() {
        let user = UserId::new("5");
        let url = Endpoint::toggle_like("3", "44", &user, "9", &UserId::new("8"))
            .url("https://api.example")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example/toggle-like.php?challenge_id=3&people_data_id=44&user_id=5&task_id=9&owner=8"
        );

        let post = Endpoint::toggle_post_like(&PageId::new("2"), "77", &user);
        assert_eq!(post.path, "toggle-post-likes.php");
        assert_eq!(post.get("post_id"), Some("77"));
    }

    #[test]
    fn test_now_omits_unknown_country() {
        let only_district = Locality { district: "Ernakulam".into(), country: String::new() };
        let endpoint = Endpoint::now(&only_district);
        assert_eq!(endpoint.get("district"), Some("Ernakulam"));
        assert_eq!(endpoint.get("country"), None);

        let both = Locality { district: "Ernakulam".into(), country: "India".into() };
        assert_eq!(Endpoint::now(&both).get("country"), Some("India"));
    }

    #[test]
    fn test_query_values_are_encoded() {
        let locality = Locality { district: "New Delhi".into(), country: String::new() };
        let url = Endpoint::now(&locality).url("https://api.example").unwrap();
        assert_eq!(url.as_str(), "https://api.example/getNow.php?district=New+Delhi");
    }

    #[test]
    fn test_daily_login_has_no_query() {
        let url = Endpoint::daily_login().url("https://api.example").unwrap();
        assert_eq!(url.as_str(), "https://api.example/dailyLoginApi.php");
    }
}
