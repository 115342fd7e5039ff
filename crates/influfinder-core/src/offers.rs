//! Offer feed: what businesses put up for barter, and who may take it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collabs::UserType;
use crate::tiers::{calculate_tier_level, progress_to_next_tier, TierLevel, TierProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Story,
    Post,
    Reel,
    Review,
    Video,
}

impl ContentKind {
    #[must_use]
    pub fn label(self, quantity: u32) -> &'static str {
        let plural = quantity != 1;
        match (self, plural) {
            (ContentKind::Story, false) => "Story",
            (ContentKind::Story, true) => "Stories",
            (ContentKind::Post, false) => "Post",
            (ContentKind::Post, true) => "Posts",
            (ContentKind::Reel, false) => "Reel",
            (ContentKind::Reel, true) => "Reels",
            (ContentKind::Review, false) => "Review",
            (ContentKind::Review, true) => "Reviews",
            (ContentKind::Video, false) => "Video",
            (ContentKind::Video, true) => "Videos",
        }
    }
}

/// A deliverable the creator owes in exchange, e.g. three stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequirement {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub quantity: u32,
}

/// Render deliverables the way offer cards show them, e.g. `"3 Stories + 1 Post"`.
#[must_use]
pub fn content_summary(requirements: &[ContentRequirement]) -> String {
    requirements
        .iter()
        .map(|r| format!("{} {}", r.quantity, r.kind.label(r.quantity)))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// How creators reach an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    /// Business invites VIP influencers directly.
    Invitation,
    /// Open to applications.
    Application,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Pending,
    Completed,
}

/// Bar for influencer accounts (VIP and regular).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerRequirements {
    pub min_followers: u64,
    pub tier_required: TierLevel,
}

/// Stricter bar for normal user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserRequirements {
    pub min_followers: u64,
    /// Minimum engagement rate in percent.
    pub min_engagement: f64,
    pub tier_required: TierLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub business_name: String,
    pub business_logo: String,
    pub title: String,
    pub description: String,
    /// Free-form feed category, e.g. `"Food & Dining"`.
    pub category: String,
    pub what_you_get: String,
    pub content_required: Vec<ContentRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub influencer_requirements: InfluencerRequirements,
    pub user_requirements: UserRequirements,
    pub offer_type: OfferType,
    pub status: OfferStatus,
    #[serde(default)]
    pub applicants: u32,
    /// Retail value of what the business gives, in whole dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Offer {
    #[must_use]
    pub fn content_summary(&self) -> String {
        content_summary(&self.content_required)
    }

    /// Minimum tier that applies to the given account type.
    #[must_use]
    pub fn tier_required_for(&self, user_type: UserType) -> TierLevel {
        if user_type.is_influencer() {
            self.influencer_requirements.tier_required
        } else {
            self.user_requirements.tier_required
        }
    }
}

/// The creator looking at the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub name: String,
    pub user_type: UserType,
    pub followers: u64,
    /// Engagement rate in percent.
    pub engagement_rate: f64,
    /// Lifetime completed collaborations.
    pub completed_collabs: u32,
}

impl CreatorProfile {
    #[must_use]
    pub fn tier(&self) -> TierLevel {
        calculate_tier_level(i64::from(self.completed_collabs))
    }

    #[must_use]
    pub fn progress(&self) -> TierProgress {
        progress_to_next_tier(i64::from(self.completed_collabs))
    }
}

/// How an eligible creator takes up an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Invite,
    Apply,
}

impl Access {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Access::Invite => "invite",
            Access::Apply => "apply",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum IneligibleReason {
    OfferNotActive { status: OfferStatus },
    InvitationOnly,
    TierTooLow { required: TierLevel, current: TierLevel },
    NotEnoughFollowers { required: u64, actual: u64 },
    EngagementTooLow { required: f64, actual: f64 },
}

impl std::fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IneligibleReason::OfferNotActive { status } => {
                write!(f, "offer is not active ({status:?})")
            }
            IneligibleReason::InvitationOnly => write!(f, "invitation only (VIP influencers)"),
            IneligibleReason::TierTooLow { required, current } => write!(
                f,
                "requires tier {} {required}, currently tier {} {current}",
                required.as_u8(),
                current.as_u8()
            ),
            IneligibleReason::NotEnoughFollowers { required, actual } => {
                write!(f, "requires {required}+ followers, has {actual}")
            }
            IneligibleReason::EngagementTooLow { required, actual } => {
                write!(f, "requires {required}%+ engagement, has {actual}%")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "eligibility", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible { access: Access },
    Ineligible { reasons: Vec<IneligibleReason> },
}

impl Eligibility {
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible { .. })
    }
}

/// Decide whether `creator` can take up `offer`, and how.
///
/// Influencers are held to the offer's influencer requirements, normal users
/// to the stricter user requirements. Invitation-only offers are reachable by
/// VIP influencers alone. Every unmet rule is reported.
#[must_use]
pub fn check_eligibility(offer: &Offer, creator: &CreatorProfile) -> Eligibility {
    let mut reasons = Vec::new();

    if offer.status != OfferStatus::Active {
        reasons.push(IneligibleReason::OfferNotActive {
            status: offer.status,
        });
    }

    let access = match (offer.offer_type, creator.user_type.is_vip()) {
        (OfferType::Invitation | OfferType::Both, true) => Some(Access::Invite),
        (OfferType::Invitation, false) => None,
        (OfferType::Application, _) | (OfferType::Both, false) => Some(Access::Apply),
    };
    if access.is_none() {
        reasons.push(IneligibleReason::InvitationOnly);
    }

    let current = creator.tier();
    let (min_followers, min_engagement) = if creator.user_type.is_influencer() {
        (offer.influencer_requirements.min_followers, None)
    } else {
        (
            offer.user_requirements.min_followers,
            Some(offer.user_requirements.min_engagement),
        )
    };

    let required = offer.tier_required_for(creator.user_type);
    if !current.meets(required) {
        reasons.push(IneligibleReason::TierTooLow { required, current });
    }
    if creator.followers < min_followers {
        reasons.push(IneligibleReason::NotEnoughFollowers {
            required: min_followers,
            actual: creator.followers,
        });
    }
    if let Some(min) = min_engagement {
        if creator.engagement_rate < min {
            reasons.push(IneligibleReason::EngagementTooLow {
                required: min,
                actual: creator.engagement_rate,
            });
        }
    }

    match access {
        Some(access) if reasons.is_empty() => Eligibility::Eligible { access },
        _ => Eligibility::Ineligible { reasons },
    }
}

/// Feed category filter. `"all"` (or blank) keeps everything; anything else is
/// a case-insensitive substring match on the offer category, so `"food"`
/// selects `"Food & Dining"`.
#[must_use]
pub fn filter_by_category<'a>(offers: &'a [Offer], category: &str) -> Vec<&'a Offer> {
    let needle = category.trim().to_lowercase();
    if needle.is_empty() || needle == "all" {
        return offers.iter().collect();
    }
    offers
        .iter()
        .filter(|o| o.category.to_lowercase().contains(&needle))
        .collect()
}

/// Header totals for a feed view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    pub offers: usize,
    pub applicants: u64,
    /// Sum of `estimated_value` over offers that declare one.
    pub estimated_value: u64,
}

impl FeedSummary {
    #[must_use]
    pub fn from_offers<'a, I>(offers: I) -> Self
    where
        I: IntoIterator<Item = &'a Offer>,
    {
        offers
            .into_iter()
            .fold(FeedSummary::default(), |mut summary, offer| {
                summary.offers += 1;
                summary.applicants += u64::from(offer.applicants);
                summary.estimated_value += u64::from(offer.estimated_value.unwrap_or(0));
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_offer(offer_type: OfferType) -> Offer {
        Offer {
            id: "8".to_string(),
            business_name: "Home Haven Decor".to_string(),
            business_logo: "home".to_string(),
            title: "Room Makeover Collaboration".to_string(),
            description: "Transform your space with our furniture and decor items.".to_string(),
            category: "Home & Decor".to_string(),
            what_you_get: "Furniture & decor for one room".to_string(),
            content_required: vec![
                ContentRequirement {
                    kind: ContentKind::Reel,
                    quantity: 2,
                },
                ContentRequirement {
                    kind: ContentKind::Post,
                    quantity: 3,
                },
                ContentRequirement {
                    kind: ContentKind::Video,
                    quantity: 1,
                },
            ],
            location: Some("Nationwide Shipping".to_string()),
            image_url: None,
            influencer_requirements: InfluencerRequirements {
                min_followers: 15_000,
                tier_required: TierLevel::Elite,
            },
            user_requirements: UserRequirements {
                min_followers: 30_000,
                min_engagement: 4.0,
                tier_required: TierLevel::Master,
            },
            offer_type,
            status: OfferStatus::Active,
            applicants: 89,
            estimated_value: None,
            deadline: None,
        }
    }

    fn make_creator(user_type: UserType, completed_collabs: u32) -> CreatorProfile {
        CreatorProfile {
            name: "Sofia".to_string(),
            user_type,
            followers: 125_000,
            engagement_rate: 4.8,
            completed_collabs,
        }
    }

    #[test]
    fn content_summary_pluralizes() {
        let offer = make_offer(OfferType::Both);
        assert_eq!(offer.content_summary(), "2 Reels + 3 Posts + 1 Video");
        assert_eq!(content_summary(&[]), "");
    }

    #[test]
    fn vip_is_invited() {
        let offer = make_offer(OfferType::Invitation);
        let creator = make_creator(UserType::VipInfluencer, 30);
        assert_eq!(
            check_eligibility(&offer, &creator),
            Eligibility::Eligible {
                access: Access::Invite
            }
        );
    }

    #[test]
    fn regular_influencer_applies_to_mixed_offer() {
        let offer = make_offer(OfferType::Both);
        let creator = make_creator(UserType::RegularInfluencer, 30);
        assert_eq!(
            check_eligibility(&offer, &creator),
            Eligibility::Eligible {
                access: Access::Apply
            }
        );
    }

    #[test]
    fn invitation_only_blocks_non_vip() {
        let offer = make_offer(OfferType::Invitation);
        let creator = make_creator(UserType::RegularInfluencer, 30);
        let result = check_eligibility(&offer, &creator);
        let expected = [IneligibleReason::InvitationOnly];
        assert!(matches!(
            result,
            Eligibility::Ineligible { ref reasons } if reasons == &expected
        ));
    }

    #[test]
    fn normal_user_held_to_stricter_bar() {
        let offer = make_offer(OfferType::Application);
        let mut creator = make_creator(UserType::NormalUser, 30);
        creator.engagement_rate = 3.5;
        let Eligibility::Ineligible { reasons } = check_eligibility(&offer, &creator) else {
            panic!("expected ineligible");
        };
        // 30 collabs is Elite; normal users need Master
        assert!(reasons.contains(&IneligibleReason::TierTooLow {
            required: TierLevel::Master,
            current: TierLevel::Elite,
        }));
        assert!(reasons
            .iter()
            .any(|r| matches!(r, IneligibleReason::EngagementTooLow { .. })));
        assert_eq!(reasons.len(), 2);
    }

    #[test]
    fn reports_every_unmet_rule() {
        let mut offer = make_offer(OfferType::Invitation);
        offer.status = OfferStatus::Completed;
        let mut creator = make_creator(UserType::RegularInfluencer, 2);
        creator.followers = 900;
        let Eligibility::Ineligible { reasons } = check_eligibility(&offer, &creator) else {
            panic!("expected ineligible");
        };
        assert_eq!(reasons.len(), 4);
        assert!(reasons[0].to_string().contains("not active"));
    }

    #[test]
    fn category_filter_is_substring_and_case_insensitive() {
        let mut food = make_offer(OfferType::Both);
        food.category = "Food & Dining".to_string();
        food.applicants = 10;
        let home = make_offer(OfferType::Both);
        let offers = vec![food, home];

        assert_eq!(filter_by_category(&offers, "all").len(), 2);
        assert_eq!(filter_by_category(&offers, "").len(), 2);
        let picked = filter_by_category(&offers, "FOOD");
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].category, "Food & Dining");
        assert!(filter_by_category(&offers, "tech").is_empty());

        let summary = FeedSummary::from_offers(filter_by_category(&offers, "all"));
        assert_eq!(summary.offers, 2);
        assert_eq!(summary.applicants, 99);
        assert_eq!(summary.estimated_value, 0);
    }

    #[test]
    fn feed_summary_totals_declared_values() {
        let mut dining = make_offer(OfferType::Both);
        dining.estimated_value = Some(180);
        let mut spa = make_offer(OfferType::Both);
        spa.estimated_value = Some(350);
        let unpriced = make_offer(OfferType::Both);
        let offers = [dining, spa, unpriced];

        let summary = FeedSummary::from_offers(&offers);
        assert_eq!(summary.offers, 3);
        assert_eq!(summary.applicants, 267);
        assert_eq!(summary.estimated_value, 530);
    }

    #[test]
    fn creator_tier_tracks_completed_collabs() {
        let creator = make_creator(UserType::VipInfluencer, 24);
        assert_eq!(creator.tier(), TierLevel::Pro);
        assert_eq!(creator.progress().collabs_needed, 1);
    }

    #[test]
    fn content_requirement_uses_type_key() {
        let req: ContentRequirement =
            serde_json::from_str(r#"{"type":"story","quantity":3}"#).unwrap();
        assert_eq!(req.kind, ContentKind::Story);
        assert_eq!(req.quantity, 3);
    }
}
