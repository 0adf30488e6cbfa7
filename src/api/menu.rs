use crate::api::client::ApiClient;
use crate::api::types::{Envelope, MenuData, MenuItem};
use crate::ApiResult;

impl ApiClient {
    /// Fetches the live menu, surfacing any failure
    ///
    /// Calls `GET {base}/restaurant/get-all-menu/?id={storeId}`.
    pub async fn try_fetch_menu(&self) -> ApiResult<Vec<MenuItem>> {
        let mut url = Self::endpoint(&self.base_url, "/restaurant/get-all-menu/")?;
        url.query_pairs_mut().append_pair("id", &self.store_id);

        let request = self.client.get(url.clone());
        let envelope: Envelope<MenuData> = self.send_json(request, &url).await?;

        tracing::debug!("Fetched {} menu items", envelope.data.menu_list.len());
        Ok(envelope.data.menu_list)
    }

    /// Fetches the live menu, degrading to an empty list on failure
    ///
    /// A menu page with no dishes is preferable to a broken page, so the
    /// error is logged and swallowed here.
    pub async fn fetch_menu(&self) -> Vec<MenuItem> {
        match self.try_fetch_menu().await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Error fetching menu items: {}", e);
                Vec::new()
            }
        }
    }
}

/// Groups menu items by category, keeping first-seen category order
pub fn group_by_category(items: &[MenuItem]) -> Vec<(&str, Vec<&MenuItem>)> {
    let mut groups: Vec<(&str, Vec<&MenuItem>)> = Vec::new();

    for item in items {
        match groups.iter().position(|(name, _)| *name == item.category) {
            Some(index) => groups[index].1.push(item),
            None => groups.push((item.category.as_str(), vec![item])),
        }
    }

    groups
}
