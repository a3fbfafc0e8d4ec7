//! Buzz Wall Feed Models
//!
//! Feed rows arrive as one heterogeneous array. The `info_type` field picks
//! the card: `"challenge"`, `"post"`, and everything else is a certificate.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::de::{flexible_bool, flexible_i64, flexible_opt_bool, flexible_string};
use super::task::TaskFrequency;
use super::{PageId, PageSummary, UserId};

/// A challenge published by a page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Challenge {
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_id: String,
    #[serde(default)]
    pub page_id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_type: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub icon: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default)]
    pub frequency: TaskFrequency,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub referral_count: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub user_referral_count: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub entry_points: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub reward_points: i64,
    /// Gift rewards on top of points
    #[serde(default, deserialize_with = "flexible_bool")]
    pub rewards: bool,
    #[serde(default, deserialize_with = "flexible_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub completed: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub finished: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_following: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_now: bool,
}

/// Whether the user may open a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDecision {
    Allowed,
    /// Referral challenge still short of this many referrals
    NeedsReferrals(i64),
}

impl Challenge {
    pub fn entry_decision(&self) -> EntryDecision {
        match self.frequency {
            TaskFrequency::Referral if self.referral_count > self.user_referral_count => {
                EntryDecision::NeedsReferrals(self.referral_count - self.user_referral_count)
            }
            _ => EntryDecision::Allowed,
        }
    }

    pub fn page_summary(&self) -> PageSummary {
        PageSummary {
            page_id: self.page_id.clone(),
            title: self.page_title.clone(),
            icon: self.icon.clone(),
            page_type: self.page_type.clone(),
        }
    }
}

/// A page post (text, image or video)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "flexible_string")]
    pub post_id: String,
    #[serde(default)]
    pub page_id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_icon: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_type: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub caption: String,
    #[serde(default, rename = "textData", deserialize_with = "flexible_string")]
    pub text: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub video: String,
    /// `DD-MM-YYYY HH:MM:SS`
    #[serde(default, deserialize_with = "flexible_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub like_count: i64,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub already_liked: bool,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub comment_count: i64,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_following: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_now: bool,
}

impl Post {
    pub fn page_summary(&self) -> PageSummary {
        PageSummary {
            page_id: self.page_id.clone(),
            title: self.page_title.clone(),
            icon: self.page_icon.clone(),
            page_type: self.page_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// A user's completion certificate for a challenge
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub people_data_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub task_id: String,
    /// Owner of the certificate
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub page_id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub page_type: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub icon: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub user_image: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub first_character: String,
    /// Already formatted by the server
    #[serde(default, deserialize_with = "flexible_string")]
    pub date: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image2: String,
    #[serde(default, rename = "mediaType", deserialize_with = "flexible_string")]
    pub media_type: String,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub like_count: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub comment_count: i64,
    /// The challenge behind the certificate has expired
    #[serde(default, deserialize_with = "flexible_bool")]
    pub complete: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_following: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_now: bool,
}

impl Certificate {
    pub fn page_summary(&self) -> PageSummary {
        PageSummary {
            page_id: self.page_id.clone(),
            title: self.page_title.clone(),
            icon: self.icon.clone(),
            page_type: self.page_type.clone(),
        }
    }

    pub fn media_kind(&self) -> Option<MediaKind> {
        if self.image2.is_empty() {
            None
        } else if self.media_type == "video" {
            Some(MediaKind::Video)
        } else {
            Some(MediaKind::Image)
        }
    }

    pub fn avatar_letter(&self) -> &str {
        if self.first_character.is_empty() { "U" } else { &self.first_character }
    }
}

/// One Buzz Wall row
#[derive(Debug, Clone, PartialEq)]
pub enum FeedItem {
    Challenge(Challenge),
    Post(Post),
    Certificate(Certificate),
}

impl FeedItem {
    pub fn page_id(&self) -> &PageId {
        match self {
            FeedItem::Challenge(c) => &c.page_id,
            FeedItem::Post(p) => &p.page_id,
            FeedItem::Certificate(c) => &c.page_id,
        }
    }

    /// Server snapshot of the follow state at fetch time
    pub fn is_following(&self) -> bool {
        match self {
            FeedItem::Challenge(c) => c.is_following,
            FeedItem::Post(p) => p.is_following,
            FeedItem::Certificate(c) => c.is_following,
        }
    }

    /// Stable list key across refetches
    pub fn key(&self) -> String {
        match self {
            FeedItem::Challenge(c) => format!("challenge-{}", c.challenge_id),
            FeedItem::Post(p) => format!("post-{}", p.post_id),
            FeedItem::Certificate(c) => format!("certificate-{}-{}", c.challenge_id, c.people_data_id),
        }
    }

    /// Completed challenges stay in the payload but are not rendered
    pub fn is_visible(&self) -> bool {
        !matches!(self, FeedItem::Challenge(c) if c.completed)
    }
}

impl<'de> Deserialize<'de> for FeedItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let info_type = value
            .get("info_type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let item = match info_type.as_str() {
            "challenge" => serde_json::from_value(value).map(FeedItem::Challenge),
            "post" => serde_json::from_value(value).map(FeedItem::Post),
            _ => serde_json::from_value(value).map(FeedItem::Certificate),
        };
        item.map_err(serde::de::Error::custom)
    }
}

/// A nearby page for the "Now" strip
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NowItem {
    #[serde(default)]
    pub id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default, rename = "type", deserialize_with = "flexible_string")]
    pub kind: String,
}

impl NowItem {
    pub fn is_place(&self) -> bool {
        self.kind == "places"
    }
}

/// Page details returned by `getOneChallenge.php`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageDetail {
    #[serde(default, alias = "page_id")]
    pub id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub icon: String,
    #[serde(default, deserialize_with = "flexible_opt_bool")]
    pub is_following: Option<bool>,
}

/// One onboarding page of the Buzz Wall introduction
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instruction {
    #[serde(default, deserialize_with = "flexible_string")]
    pub title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub description: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(frequency: TaskFrequency, needed: i64, have: i64) -> Challenge {
        serde_json::from_value(serde_json::json!({
            "info_type": "challenge",
            "page_id": 3,
        }))
        .map(|c: Challenge| Challenge {
            frequency,
            referral_count: needed,
            user_referral_count: have,
            ..c
        })
        .unwrap()
    }

    #[test]
    fn test_referral_gate() {
        assert_eq!(
            challenge(TaskFrequency::Referral, 5, 5).entry_decision(),
            EntryDecision::Allowed
        );
        assert_eq!(
            challenge(TaskFrequency::Referral, 5, 7).entry_decision(),
            EntryDecision::Allowed
        );
        assert_eq!(
            challenge(TaskFrequency::Referral, 5, 3).entry_decision(),
            EntryDecision::NeedsReferrals(2)
        );
        // Only referral challenges are gated
        assert_eq!(
            challenge(TaskFrequency::Food, 5, 0).entry_decision(),
            EntryDecision::Allowed
        );
    }

    #[test]
    fn test_feed_dispatch_on_info_type() {
        let items: Vec<FeedItem> = serde_json::from_str(
            r#"[
                {"info_type": "challenge", "page_id": "7", "title": "Run 5k", "frequency": "referral",
                 "referral_count": "3", "user_referral_count": 1, "is_following": "yes"},
                {"info_type": "post", "page_id": 8, "post_id": 90, "like_count": "4", "already_liked": true},
                {"info_type": "certificate", "page_id": 9, "challenge_id": 11, "complete": "yes"},
                {"page_id": 10, "people_data_id": "12"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 4);
        match &items[0] {
            FeedItem::Challenge(c) => {
                assert_eq!(c.page_id.as_str(), "7");
                assert_eq!(c.frequency, TaskFrequency::Referral);
                assert_eq!(c.entry_decision(), EntryDecision::NeedsReferrals(2));
                assert!(c.is_following);
            }
            other => panic!("expected challenge, got {:?}", other),
        }
        match &items[1] {
            FeedItem::Post(p) => {
                assert_eq!(p.post_id, "90");
                assert_eq!(p.like_count, 4);
                assert!(p.already_liked);
            }
            other => panic!("expected post, got {:?}", other),
        }
        assert!(matches!(&items[2], FeedItem::Certificate(c) if c.complete));
        assert!(matches!(&items[3], FeedItem::Certificate(c) if c.people_data_id == "12"));
        assert_eq!(items[3].page_id().as_str(), "10");
        assert_eq!(items[1].key(), "post-90");
        assert_eq!(items[3].key(), "certificate--12");
    }

    #[test]
    fn test_completed_challenge_hidden() {
        let items: Vec<FeedItem> = serde_json::from_str(
            r#"[{"info_type": "challenge", "completed": "true"}, {"info_type": "challenge"}]"#,
        )
        .unwrap();
        assert!(!items[0].is_visible());
        assert!(items[1].is_visible());
    }

    #[test]
    fn test_certificate_media_kind() {
        let mut cert: Certificate = serde_json::from_str(r#"{"image2": "a.mp4", "mediaType": "video"}"#).unwrap();
        assert_eq!(cert.media_kind(), Some(MediaKind::Video));
        cert.media_type = "image".into();
        assert_eq!(cert.media_kind(), Some(MediaKind::Image));
        cert.image2.clear();
        assert_eq!(cert.media_kind(), None);
        assert_eq!(cert.avatar_letter(), "U");
    }
}
