//! Business rules for the Influfinder creator marketplace.
//!
//! Tier progression from lifetime completed collaborations, tab
//! categorization of collaboration statuses, offer eligibility, and the
//! YAML catalog that feeds them.

pub mod app_config;
pub mod catalog;
pub mod collabs;
pub mod config;
pub mod error;
pub mod offers;
pub mod tiers;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, parse_catalog, Catalog};
pub use collabs::{
    categorize, categorize_raw, count_by_tab, filter_collabs, visible_tabs, CollabCategory,
    CollabStatus, Collaboration, TabCounts, TabFilter, UserType,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use offers::{
    check_eligibility, content_summary, filter_by_category, Access, ContentKind,
    ContentRequirement, CreatorProfile, Eligibility, FeedSummary, IneligibleReason, Offer,
    OfferStatus, OfferType,
};
pub use tiers::{
    calculate_tier_level, progress_to_next_tier, tier_info, TierInfo, TierLevel, TierProgress,
    TIER_CONFIG,
};
