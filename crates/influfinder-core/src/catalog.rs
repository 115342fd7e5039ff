use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collabs::{CollabStatus, Collaboration};
use crate::offers::{CreatorProfile, Offer};
use crate::ConfigError;

/// Everything the marketplace screens render from: the signed-in creator,
/// their collaborations, and the open offer feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub creator: CreatorProfile,
    #[serde(default)]
    pub collaborations: Vec<Collaboration>,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl Catalog {
    #[must_use]
    pub fn find_offer(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Number of collaborations in the catalog that reached `completed`.
    #[must_use]
    pub fn completed_collab_count(&self) -> usize {
        self.collaborations
            .iter()
            .filter(|c| c.status == CollabStatus::Completed)
            .count()
    }
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog = parse_catalog(&content)?;

    tracing::debug!(
        path = %path.display(),
        collaborations = catalog.collaborations.len(),
        offers = catalog.offers.len(),
        "catalog loaded"
    );

    Ok(catalog)
}

/// Parse and validate catalog YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = serde_yaml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    let creator = &catalog.creator;
    if creator.name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "creator name must be non-empty".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&creator.engagement_rate) {
        return Err(ConfigError::Validation(format!(
            "creator '{}' has engagement rate {}; must be between 0 and 100",
            creator.name, creator.engagement_rate
        )));
    }

    let mut seen_collabs = HashSet::new();
    for collab in &catalog.collaborations {
        if collab.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "collaboration id must be non-empty".to_string(),
            ));
        }
        if collab.title.trim().is_empty() || collab.business_name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "collaboration '{}' needs a title and business name",
                collab.id
            )));
        }
        if !seen_collabs.insert(collab.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate collaboration id: '{}'",
                collab.id
            )));
        }
        if collab.status == CollabStatus::Invited && !collab.user_type.is_vip() {
            tracing::warn!(
                collab_id = %collab.id,
                user_type = %collab.user_type,
                "invitation recorded for a non-VIP account"
            );
        }
    }

    let mut seen_offers = HashSet::new();
    for offer in &catalog.offers {
        if offer.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "offer id must be non-empty".to_string(),
            ));
        }
        if offer.title.trim().is_empty() || offer.business_name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "offer '{}' needs a title and business name",
                offer.id
            )));
        }
        if !seen_offers.insert(offer.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate offer id: '{}'",
                offer.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
