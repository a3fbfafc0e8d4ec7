//! Task And Verification Models
//!
//! Status strings from the API become closed enums here so every card
//! renders through an exhaustive match.

use serde::{Deserialize, Deserializer};

use super::de::{flexible_bool, flexible_i64, flexible_opt_string, flexible_string};
use super::PageId;

/// Challenge/task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskFrequency {
    Food,
    Experience,
    Bootcamp,
    Challenges,
    Referral,
    /// Any other category the server sends
    #[default]
    General,
}

impl TaskFrequency {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => TaskFrequency::Food,
            "experience" => TaskFrequency::Experience,
            "bootcamp" => TaskFrequency::Bootcamp,
            "challenges" => TaskFrequency::Challenges,
            "referral" => TaskFrequency::Referral,
            _ => TaskFrequency::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFrequency::Food => "Food",
            TaskFrequency::Experience => "Experience",
            TaskFrequency::Bootcamp => "Bootcamp",
            TaskFrequency::Challenges => "Challenge",
            TaskFrequency::Referral => "Referral",
            TaskFrequency::General => "Task",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskFrequency::Food => "🍽",
            TaskFrequency::Experience => "👓",
            TaskFrequency::Bootcamp => "💪",
            TaskFrequency::Challenges => "🏆",
            TaskFrequency::Referral => "🤝",
            TaskFrequency::General => "✔",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskFrequency::Food => "badge badge-food",
            TaskFrequency::Experience => "badge badge-experience",
            TaskFrequency::Bootcamp => "badge badge-bootcamp",
            TaskFrequency::Challenges => "badge badge-challenges",
            TaskFrequency::Referral => "badge badge-referral",
            TaskFrequency::General => "badge badge-general",
        }
    }

    /// Food and experience tasks are always open to continue
    pub fn is_location_based(&self) -> bool {
        matches!(self, TaskFrequency::Food | TaskFrequency::Experience)
    }
}

impl<'de> Deserialize<'de> for TaskFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        flexible_string(deserializer).map(|s| TaskFrequency::from_str(&s))
    }
}

/// Page branding attached to task rows (`selectedMovie` on the wire)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageBrand {
    #[serde(default, deserialize_with = "flexible_string")]
    pub title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
}

/// An ongoing task
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_id: String,
    #[serde(default)]
    pub page_id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub task_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_title: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub description: String,
    #[serde(default)]
    pub frequency: TaskFrequency,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub pending_task: bool,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub entry_points: i64,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub reward_points: i64,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub start_date: String,
    #[serde(default, rename = "selectedMovie")]
    pub brand: PageBrand,
}

/// Whether a task card can be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAvailability {
    Continue,
    /// Not yet unlocked; the card is dimmed and ignores taps
    Pending,
}

impl TaskAvailability {
    pub fn status_label(&self) -> &'static str {
        match self {
            TaskAvailability::Continue => "Continue",
            TaskAvailability::Pending => "Pending",
        }
    }
}

impl Task {
    pub fn availability(&self) -> TaskAvailability {
        if self.pending_task || self.frequency.is_location_based() {
            TaskAvailability::Continue
        } else {
            TaskAvailability::Pending
        }
    }
}

/// Raw moderation status of a submitted task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    UnderVerification,
    Pending,
    Completed,
    Approved,
    Rejected,
    #[default]
    Unknown,
}

impl VerificationStatus {
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "under_verification" => VerificationStatus::UnderVerification,
            "pending" => VerificationStatus::Pending,
            "completed" => VerificationStatus::Completed,
            "approved" => VerificationStatus::Approved,
            "rejected" => VerificationStatus::Rejected,
            _ => VerificationStatus::Unknown,
        }
    }

    /// Display bucket; unknown statuses belong to none
    pub fn bucket(&self) -> Option<VerificationBucket> {
        match self {
            VerificationStatus::UnderVerification | VerificationStatus::Pending => {
                Some(VerificationBucket::UnderReview)
            }
            VerificationStatus::Completed | VerificationStatus::Approved => {
                Some(VerificationBucket::Completed)
            }
            VerificationStatus::Rejected => Some(VerificationBucket::Rejected),
            VerificationStatus::Unknown => None,
        }
    }
}

impl<'de> Deserialize<'de> for VerificationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        flexible_string(deserializer).map(|s| VerificationStatus::from_str(&s))
    }
}

/// The three groups of the Verification tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationBucket {
    UnderReview,
    Completed,
    Rejected,
}

impl VerificationBucket {
    pub const ALL: [VerificationBucket; 3] = [
        VerificationBucket::UnderReview,
        VerificationBucket::Completed,
        VerificationBucket::Rejected,
    ];

    pub fn section_title(&self) -> &'static str {
        match self {
            VerificationBucket::UnderReview => "Under Verification",
            VerificationBucket::Completed => "Completed Verification",
            VerificationBucket::Rejected => "Rejected Verification",
        }
    }

    pub fn card_title(&self) -> &'static str {
        match self {
            VerificationBucket::UnderReview => "Under Review",
            VerificationBucket::Completed => "Verified",
            VerificationBucket::Rejected => "Rejected",
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            VerificationBucket::UnderReview => "View Status",
            VerificationBucket::Completed => "View Details",
            VerificationBucket::Rejected => "Restart Task",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VerificationBucket::UnderReview => "⏳",
            VerificationBucket::Completed => "✅",
            VerificationBucket::Rejected => "❌",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            VerificationBucket::UnderReview => "status-review",
            VerificationBucket::Completed => "status-completed",
            VerificationBucket::Rejected => "status-rejected",
        }
    }
}

/// A task submission awaiting or past moderation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerificationTask {
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_id: String,
    #[serde(default)]
    pub page_id: PageId,
    #[serde(default, deserialize_with = "flexible_string")]
    pub task_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub challenge_title: String,
    #[serde(default)]
    pub frequency: TaskFrequency,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub submitted_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub created_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub completion_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub rejection_reason: Option<String>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub reward_points: i64,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
    #[serde(default, rename = "selectedMovie")]
    pub brand: PageBrand,
}

impl VerificationTask {
    /// Submission time, falling back to creation time
    pub fn submitted_or_created(&self) -> &str {
        self.submitted_date
            .as_deref()
            .or(self.created_date.as_deref())
            .unwrap_or_default()
    }

    pub fn subtitle(&self, bucket: VerificationBucket) -> String {
        match bucket {
            VerificationBucket::UnderReview => "Your submission is being verified".to_string(),
            VerificationBucket::Completed => "Task completed successfully".to_string(),
            VerificationBucket::Rejected => self
                .rejection_reason
                .clone()
                .unwrap_or_else(|| "Task needs to be redone".to_string()),
        }
    }
}

/// Verification tasks split into display buckets, server order preserved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationGroups {
    pub under_review: Vec<VerificationTask>,
    pub completed: Vec<VerificationTask>,
    pub rejected: Vec<VerificationTask>,
}

impl VerificationGroups {
    pub fn bucket(&self, bucket: VerificationBucket) -> &[VerificationTask] {
        match bucket {
            VerificationBucket::UnderReview => &self.under_review,
            VerificationBucket::Completed => &self.completed,
            VerificationBucket::Rejected => &self.rejected,
        }
    }
}

pub fn group_verification(tasks: &[VerificationTask]) -> VerificationGroups {
    let mut groups = VerificationGroups::default();
    for task in tasks {
        match task.verification_status.bucket() {
            Some(VerificationBucket::UnderReview) => groups.under_review.push(task.clone()),
            Some(VerificationBucket::Completed) => groups.completed.push(task.clone()),
            Some(VerificationBucket::Rejected) => groups.rejected.push(task.clone()),
            None => {}
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(json: serde_json::Value) -> Task {
        serde_json::from_value(json).unwrap()
    }

    fn verification(id: &str, status: &str) -> VerificationTask {
        serde_json::from_value(serde_json::json!({
            "challenge_id": id,
            "verification_status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_task_availability() {
        assert_eq!(
            task(serde_json::json!({"pending_task": "yes", "frequency": "bootcamp"})).availability(),
            TaskAvailability::Continue
        );
        assert_eq!(
            task(serde_json::json!({"frequency": "food"})).availability(),
            TaskAvailability::Continue
        );
        assert_eq!(
            task(serde_json::json!({"frequency": "experience", "pending_task": "no"})).availability(),
            TaskAvailability::Continue
        );
        assert_eq!(
            task(serde_json::json!({"frequency": "challenges"})).availability(),
            TaskAvailability::Pending
        );
        assert_eq!(task(serde_json::json!({})).availability(), TaskAvailability::Pending);
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(TaskAvailability::Continue.status_label(), "Continue");
        assert_eq!(TaskAvailability::Pending.status_label(), "Pending");
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!(TaskFrequency::from_str("Food"), TaskFrequency::Food);
        assert_eq!(TaskFrequency::from_str("challenges"), TaskFrequency::Challenges);
        assert_eq!(TaskFrequency::from_str("weekly"), TaskFrequency::General);
        assert_eq!(TaskFrequency::General.label(), "Task");
        assert_eq!(TaskFrequency::Challenges.label(), "Challenge");
        let t = task(serde_json::json!({"frequency": null}));
        assert_eq!(t.frequency, TaskFrequency::General);
    }

    #[test]
    fn test_group_verification() {
        let tasks = vec![
            verification("1", "pending"),
            verification("2", "approved"),
            verification("3", "under_verification"),
            verification("4", "rejected"),
            verification("5", "completed"),
            verification("6", "archived"),
        ];
        let groups = group_verification(&tasks);

        let ids = |b: VerificationBucket| {
            groups.bucket(b).iter().map(|t| t.challenge_id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(VerificationBucket::UnderReview), vec!["1", "3"]);
        assert_eq!(ids(VerificationBucket::Completed), vec!["2", "5"]);
        assert_eq!(ids(VerificationBucket::Rejected), vec!["4"]);
    }

    #[test]
    fn test_rejected_subtitle_falls_back() {
        let mut t = verification("9", "rejected");
        assert_eq!(t.subtitle(VerificationBucket::Rejected), "Task needs to be redone");
        t.rejection_reason = Some("Photo is blurry".into());
        assert_eq!(t.subtitle(VerificationBucket::Rejected), "Photo is blurry");
    }

    #[test]
    fn test_submitted_falls_back_to_created() {
        let t: VerificationTask = serde_json::from_value(serde_json::json!({
            "submitted_date": "",
            "created_date": "2024-05-01 10:00:00",
        }))
        .unwrap();
        assert_eq!(t.submitted_or_created(), "2024-05-01 10:00:00");
    }
}
