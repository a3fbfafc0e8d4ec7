//! Screen Retrievals
//!
//! Typed GET/POST helpers for the Buzz Wall and Todo screens.

use serde::Deserialize;

use super::{ApiClient, ApiError, Endpoint};
use crate::models::de::{flexible_bool, flexible_string};
use crate::models::{
    Challenge, DailyLogin, FeedItem, Instruction, Locality, NowItem, PageDetail, PageId, Task,
    UserId, VerificationTask,
};

/// `checkAlreadyLiked.php` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LikeStatus {
    #[serde(default, deserialize_with = "flexible_bool")]
    pub liked: bool,
    /// Page of the user who owns the submission
    #[serde(default, rename = "user_pageId", deserialize_with = "flexible_string")]
    pub user_page_id: String,
}

#[derive(Deserialize)]
struct TaskList<T> {
    #[serde(default = "Vec::new")]
    tasks: Vec<T>,
}

#[derive(Deserialize)]
struct DataList<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

impl ApiClient {
    pub async fn buzz_wall(&self, user_id: &UserId) -> Result<Vec<FeedItem>, ApiError> {
        self.get_json(&Endpoint::buzz_wall(user_id)).await
    }

    /// Nearby pages; nothing is requested until the locality is known
    pub async fn now(&self, locality: &Locality) -> Result<Vec<NowItem>, ApiError> {
        if !locality.is_known() {
            return Ok(Vec::new());
        }
        self.get_json(&Endpoint::now(locality)).await
    }

    pub async fn instructions(&self, kind: &str) -> Result<Vec<Instruction>, ApiError> {
        let list: DataList<Instruction> = self.get_json(&Endpoint::instructions(kind)).await?;
        Ok(list.data)
    }

    pub async fn daily_login(&self, user_id: &UserId) -> Result<DailyLogin, ApiError> {
        self.post_form(&Endpoint::daily_login(), &[("user_id", user_id.as_str())])
            .await
    }

    pub async fn ongoing_tasks(&self, user_id: &UserId) -> Result<Vec<Task>, ApiError> {
        let list: TaskList<Task> = self.get_json(&Endpoint::ongoing_tasks(user_id)).await?;
        Ok(list.tasks)
    }

    pub async fn verification_tasks(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<VerificationTask>, ApiError> {
        let list: TaskList<VerificationTask> =
            self.get_json(&Endpoint::verification_tasks(user_id)).await?;
        Ok(list.tasks)
    }

    pub async fn page_detail(
        &self,
        page_id: &PageId,
        user_id: &UserId,
        district: Option<&str>,
    ) -> Result<PageDetail, ApiError> {
        self.get_json(&Endpoint::one_challenge(page_id, user_id, district))
            .await
    }

    pub async fn challenge(&self, challenge_id: &str, user_id: &UserId) -> Result<Challenge, ApiError> {
        self.get_json(&Endpoint::challenge_one(challenge_id, user_id))
            .await
    }

    pub async fn like_status(
        &self,
        challenge_id: &str,
        people_data_id: &str,
        user_id: &UserId,
    ) -> Result<LikeStatus, ApiError> {
        self.get_json(&Endpoint::check_already_liked(challenge_id, people_data_id, user_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_status_decodes_yes_no() {
        let status: LikeStatus =
            serde_json::from_str(r#"{"liked": "yes", "user_pageId": 31}"#).unwrap();
        assert!(status.liked);
        assert_eq!(status.user_page_id, "31");

        let status: LikeStatus = serde_json::from_str(r#"{"liked": "no"}"#).unwrap();
        assert!(!status.liked);
    }

    #[test]
    fn test_task_list_tolerates_missing_tasks() {
        let list: TaskList<Task> = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(list.tasks.is_empty());
    }
}
