use crate::api::client::ApiClient;
use crate::api::types::{ApiResponse, ContactFormData};
use crate::ApiResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactNumberPayload<'a> {
    phone: &'a str,
    store_id: &'a str,
    to_email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactFormPayload<'a> {
    #[serde(flatten)]
    form: &'a ContactFormData,
    store_id: &'a str,
    to_email: &'a str,
}

impl ApiClient {
    /// Records a guest's phone number with the notification service
    ///
    /// Calls `POST {notification}/api/contact-number`.
    pub async fn submit_contact_number(
        &self,
        phone: &str,
        to_email: &str,
    ) -> ApiResult<ApiResponse> {
        let url = Self::endpoint(&self.notification_url, "/api/contact-number")?;
        let payload = ContactNumberPayload {
            phone,
            store_id: &self.store_id,
            to_email,
        };

        let request = self.client.post(url.clone()).json(&payload);
        let result = self.send_json(request, &url).await;
        if let Err(e) = &result {
            tracing::error!("Failed to send phone number: {}", e);
        }
        result
    }

    /// Sends the contact form to the restaurant's inbox
    ///
    /// The phone number is captured first, addressed to `site_email` (the
    /// contact address published in the site configuration); if that fails
    /// the form is not sent. Then calls `POST {base}/email/contact-form`,
    /// addressed to `to_email`.
    pub async fn submit_contact_form(
        &self,
        form: &ContactFormData,
        to_email: &str,
        site_email: &str,
    ) -> ApiResult<ApiResponse> {
        self.submit_contact_number(&form.phone, site_email).await?;

        let url = Self::endpoint(&self.base_url, "/email/contact-form")?;
        let payload = ContactFormPayload {
            form,
            store_id: &self.store_id,
            to_email,
        };

        let request = self.client.post(url.clone()).json(&payload);
        let result: ApiResult<ApiResponse> = self.send_json(request, &url).await;
        match &result {
            Ok(response) => tracing::info!("Contact form sent: {}", response.message),
            Err(e) => tracing::error!("Failed to send contact form: {}", e),
        }
        result
    }
}
