use crate::api::client::ApiClient;
use crate::api::types::ReservationForm;
use crate::ApiResult;
use serde::Serialize;
use serde_json::Value;

/// Message sent when the guest leaves no special requests
pub const DEFAULT_RESERVATION_MESSAGE: &str = "Reservation request";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReservationPayload<'a> {
    #[serde(flatten)]
    form: &'a ReservationForm,
    message: &'a str,
    store_id: &'a str,
    to_email: &'a str,
}

impl<'a> ReservationPayload<'a> {
    fn new(form: &'a ReservationForm, store_id: &'a str, to_email: &'a str) -> Self {
        let message = form
            .special_requests
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_RESERVATION_MESSAGE);

        Self {
            form,
            message,
            store_id,
            to_email,
        }
    }
}

impl ApiClient {
    /// Sends a reservation request
    ///
    /// Calls `POST {base}/email/reservation-form` and returns the provider's
    /// response body untouched.
    pub async fn submit_reservation(
        &self,
        form: &ReservationForm,
        to_email: &str,
    ) -> ApiResult<Value> {
        let url = Self::endpoint(&self.base_url, "/email/reservation-form")?;
        let payload = ReservationPayload::new(form, &self.store_id, to_email);

        tracing::info!(
            "Submitting reservation for {} guests on {} at {}",
            form.guests,
            form.date,
            form.time
        );
        let request = self.client.post(url.clone()).json(&payload);
        let result = self.send_json(request, &url).await;
        if let Err(e) = &result {
            tracing::error!("Failed to submit reservation: {}", e);
        }
        result
    }
}
