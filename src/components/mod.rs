//! UI Components
//!
//! Reusable Leptos components.

mod follow_popup;
mod follow_badge;
mod like_button;
mod report_dialog;
mod toast;
mod challenge_card;
mod post_card;
mod certificate_card;
mod feed_item_card;
mod task_card;
mod verification_card;
mod now_strip;
mod daily_login_modal;
mod instructions_overlay;
mod location_gate;
mod top_bar;
mod bottom_nav;

pub use follow_popup::FollowPopup;
pub use follow_badge::FollowBadge;
pub use like_button::LikeButton;
pub use report_dialog::ReportDialog;
pub use toast::Toasts;
pub use challenge_card::ChallengeCard;
pub use post_card::PostCard;
pub use certificate_card::CertificateCard;
pub use feed_item_card::FeedItemCard;
pub use task_card::TaskCard;
pub use verification_card::VerificationSection;
pub use now_strip::NowStrip;
pub use daily_login_modal::DailyLoginModal;
pub use instructions_overlay::InstructionsOverlay;
pub use location_gate::LocationGate;
pub use top_bar::TopBar;
pub use bottom_nav::BottomNav;
