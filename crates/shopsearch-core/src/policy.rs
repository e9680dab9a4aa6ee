//! Decides whether a request should skip the external provider.

use crate::config::{IntegrationType, ProviderConfig};
use crate::types::PageKind;

/// `true` when the shop's own search has to answer the request.
///
/// The orchestrator takes this as an input; callers compute it here once per
/// request from configuration and the page being rendered.
pub fn use_shop_search(config: &ProviderConfig, page: PageKind) -> bool {
    !config.active
        || !config.has_usable_shop_key()
        || config.integration_type == IntegrationType::Di
        || page == PageKind::Other
        || (page == PageKind::Navigation && !config.active_on_category_pages)
}
