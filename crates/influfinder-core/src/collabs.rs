//! Collaboration records and their tab categorization.
//!
//! A collaboration moves through a status funnel:
//!
//! - VIP influencers: `invited -> accepted -> scheduled -> visited -> in_review -> completed`
//! - everyone else: `applied -> accepted -> scheduled -> visited -> in_review -> completed`
//!
//! Either entry point can end in `declined`. The tab a record appears under
//! is derived from its status and never stored.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Fine-grained lifecycle status of a collaboration.
///
/// Spellings from earlier data revisions are accepted on input and mapped to
/// their current equivalent (`pending`, `active`, `content_submitted`,
/// `rejected`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollabStatus {
    /// Direct invitation from a business. Only VIP influencers receive these.
    Invited,
    #[serde(alias = "pending")]
    Applied,
    #[serde(alias = "active")]
    Accepted,
    Scheduled,
    Visited,
    #[serde(alias = "content_submitted")]
    InReview,
    Completed,
    #[serde(alias = "rejected")]
    Declined,
}

impl CollabStatus {
    pub const ALL: [CollabStatus; 8] = [
        CollabStatus::Invited,
        CollabStatus::Applied,
        CollabStatus::Accepted,
        CollabStatus::Scheduled,
        CollabStatus::Visited,
        CollabStatus::InReview,
        CollabStatus::Completed,
        CollabStatus::Declined,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CollabStatus::Invited => "invited",
            CollabStatus::Applied => "applied",
            CollabStatus::Accepted => "accepted",
            CollabStatus::Scheduled => "scheduled",
            CollabStatus::Visited => "visited",
            CollabStatus::InReview => "in_review",
            CollabStatus::Completed => "completed",
            CollabStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for CollabStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollabStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "invited" => Ok(CollabStatus::Invited),
            "applied" | "pending" => Ok(CollabStatus::Applied),
            "accepted" | "active" => Ok(CollabStatus::Accepted),
            "scheduled" => Ok(CollabStatus::Scheduled),
            "visited" => Ok(CollabStatus::Visited),
            "in_review" | "content_submitted" => Ok(CollabStatus::InReview),
            "completed" => Ok(CollabStatus::Completed),
            "declined" | "rejected" => Ok(CollabStatus::Declined),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

/// Coarse bucket used for tab filtering and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollabCategory {
    Invitations,
    Applied,
    Active,
    InReview,
    Completed,
    Declined,
}

impl CollabCategory {
    /// Tab order as shown to a VIP influencer.
    pub const ALL: [CollabCategory; 6] = [
        CollabCategory::Invitations,
        CollabCategory::Applied,
        CollabCategory::Active,
        CollabCategory::InReview,
        CollabCategory::Completed,
        CollabCategory::Declined,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CollabCategory::Invitations => "invitations",
            CollabCategory::Applied => "applied",
            CollabCategory::Active => "active",
            CollabCategory::InReview => "in_review",
            CollabCategory::Completed => "completed",
            CollabCategory::Declined => "declined",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CollabCategory::Invitations => "Invitations",
            CollabCategory::Applied => "Applied",
            CollabCategory::Active => "Active",
            CollabCategory::InReview => "In Review",
            CollabCategory::Completed => "Completed",
            CollabCategory::Declined => "Declined",
        }
    }
}

impl std::fmt::Display for CollabCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollabCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollabCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Kind of account viewing or owning a collaboration.
///
/// VIP influencers (1M+ followers) receive direct invitations; regular
/// influencers and normal users apply to open offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    VipInfluencer,
    RegularInfluencer,
    NormalUser,
}

impl UserType {
    #[must_use]
    pub fn is_vip(self) -> bool {
        self == UserType::VipInfluencer
    }

    #[must_use]
    pub fn is_influencer(self) -> bool {
        matches!(self, UserType::VipInfluencer | UserType::RegularInfluencer)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::VipInfluencer => "vip_influencer",
            UserType::RegularInfluencer => "regular_influencer",
            UserType::NormalUser => "normal_user",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "vip_influencer" => Ok(UserType::VipInfluencer),
            "regular_influencer" => Ok(UserType::RegularInfluencer),
            "normal_user" => Ok(UserType::NormalUser),
            other => Err(CoreError::UnknownUserType(other.to_string())),
        }
    }
}

/// One tracked exchange between a creator and a business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: String,
    pub offer_id: String,
    pub business_name: String,
    /// Icon token for the business category, e.g. `"dining"`.
    pub business_logo: String,
    pub title: String,
    pub status: CollabStatus,
    pub user_type: UserType,
    pub applied_date: NaiveDate,
    pub what_you_get: String,
    pub content_required: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declined_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

impl Collaboration {
    /// Tab this record falls under for the given viewer.
    #[must_use]
    pub fn category(&self, viewer: Option<UserType>) -> CollabCategory {
        categorize(self.status, viewer)
    }
}

/// Map a status to its display tab.
///
/// `invited` gets its own `invitations` tab. A viewer known not to be a VIP
/// has no such tab, so their invitations are shown under `applied` instead.
/// With no viewer given, `invited` always maps to `invitations`.
/// Declined records always land in `declined`, never in `completed`.
#[must_use]
pub fn categorize(status: CollabStatus, viewer: Option<UserType>) -> CollabCategory {
    match status {
        CollabStatus::Invited => match viewer {
            Some(user_type) if !user_type.is_vip() => CollabCategory::Applied,
            _ => CollabCategory::Invitations,
        },
        CollabStatus::Applied => CollabCategory::Applied,
        CollabStatus::Accepted | CollabStatus::Scheduled | CollabStatus::Visited => {
            CollabCategory::Active
        }
        CollabStatus::InReview => CollabCategory::InReview,
        CollabStatus::Completed => CollabCategory::Completed,
        CollabStatus::Declined => CollabCategory::Declined,
    }
}

/// Categorize an untyped status string.
///
/// Unrecognized values fall back to `applied` and are reported as a
/// data-integrity warning rather than an error.
#[must_use]
pub fn categorize_raw(status: &str, viewer: Option<UserType>) -> CollabCategory {
    match status.parse::<CollabStatus>() {
        Ok(parsed) => categorize(parsed, viewer),
        Err(_) => {
            tracing::warn!(
                status,
                fallback = %CollabCategory::Applied,
                "unrecognized collaboration status; using fallback tab"
            );
            CollabCategory::Applied
        }
    }
}

/// Tabs shown to a viewer, in display order.
#[must_use]
pub fn visible_tabs(viewer: UserType) -> Vec<CollabCategory> {
    CollabCategory::ALL
        .into_iter()
        .filter(|c| viewer.is_vip() || *c != CollabCategory::Invitations)
        .collect()
}

/// Tab selection, including the catch-all `all` tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabFilter {
    #[default]
    All,
    Only(CollabCategory),
}

impl TabFilter {
    #[must_use]
    pub fn matches(self, category: CollabCategory) -> bool {
        match self {
            TabFilter::All => true,
            TabFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for TabFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TabFilter::All)
        } else {
            s.parse().map(TabFilter::Only)
        }
    }
}

/// Records under the selected tab, in input order.
#[must_use]
pub fn filter_collabs<'a>(
    collabs: &'a [Collaboration],
    filter: TabFilter,
    viewer: Option<UserType>,
) -> Vec<&'a Collaboration> {
    collabs
        .iter()
        .filter(|c| filter.matches(c.category(viewer)))
        .collect()
}

/// Badge counts per tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub invitations: usize,
    pub applied: usize,
    pub active: usize,
    pub in_review: usize,
    pub completed: usize,
    pub declined: usize,
}

impl TabCounts {
    #[must_use]
    pub fn get(&self, filter: TabFilter) -> usize {
        match filter {
            TabFilter::All => self.all,
            TabFilter::Only(CollabCategory::Invitations) => self.invitations,
            TabFilter::Only(CollabCategory::Applied) => self.applied,
            TabFilter::Only(CollabCategory::Active) => self.active,
            TabFilter::Only(CollabCategory::InReview) => self.in_review,
            TabFilter::Only(CollabCategory::Completed) => self.completed,
            TabFilter::Only(CollabCategory::Declined) => self.declined,
        }
    }

    fn bump(&mut self, category: CollabCategory) {
        self.all += 1;
        let slot = match category {
            CollabCategory::Invitations => &mut self.invitations,
            CollabCategory::Applied => &mut self.applied,
            CollabCategory::Active => &mut self.active,
            CollabCategory::InReview => &mut self.in_review,
            CollabCategory::Completed => &mut self.completed,
            CollabCategory::Declined => &mut self.declined,
        };
        *slot += 1;
    }
}

/// Count records per tab for the given viewer.
#[must_use]
pub fn count_by_tab(collabs: &[Collaboration], viewer: Option<UserType>) -> TabCounts {
    collabs.iter().fold(TabCounts::default(), |mut counts, c| {
        counts.bump(c.category(viewer));
        counts
    })
}

#[cfg(test)]
#[path = "collabs_test.rs"]
mod tests;
