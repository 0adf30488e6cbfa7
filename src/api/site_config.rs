use crate::api::client::ApiClient;
use crate::api::types::{Envelope, SiteConfigData};
use crate::site::PartialSiteConfig;
use crate::ApiResult;

impl ApiClient {
    /// Fetches the store's partial site configuration
    ///
    /// Calls `GET {base}/site/get-site-config/?storeId={id}` once. Any
    /// failure is returned to the caller; generation cannot continue without
    /// the remote document.
    pub async fn fetch_site_config(&self) -> ApiResult<PartialSiteConfig> {
        let mut url = Self::endpoint(&self.base_url, "/site/get-site-config/")?;
        url.query_pairs_mut().append_pair("storeId", &self.store_id);

        tracing::info!("Fetching site configuration for store {}", self.store_id);
        let request = self.client.get(url.clone());
        let envelope: Envelope<SiteConfigData<PartialSiteConfig>> =
            self.send_json(request, &url).await?;

        Ok(envelope.data.site_config)
    }
}
