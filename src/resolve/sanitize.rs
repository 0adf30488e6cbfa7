//! Removal of backend-only fields from the published configuration

use crate::site::SiteConfig;

/// Top-level fields that belong to the backend's storage record
///
/// None of these may appear in the published configuration.
pub const SERVER_ONLY_FIELDS: &[&str] = &[
    "_id",
    "userId",
    "storeId",
    "subdomain",
    "createdAt",
    "updatedAt",
    "siteType",
    "store",
];

/// Strips server-only fields from the top level of the configuration
///
/// Returns the names of the fields that were actually removed.
pub fn sanitize(config: &mut SiteConfig) -> Vec<&'static str> {
    SERVER_ONLY_FIELDS
        .iter()
        .copied()
        .filter(|field| config.extra.remove(*field).is_some())
        .collect()
}
