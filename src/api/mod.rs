//! Backend API client
//!
//! This module wraps every call the site makes to its backend:
//! - Fetching the remote site configuration at build time
//! - Listing the live menu
//! - Capturing a contact number and sending the contact form
//! - Sending a reservation request
//!
//! Every call is attempted once. Nothing here retries.

mod client;
mod contact;
mod menu;
mod reservation;
mod site_config;
mod types;

pub use client::{build_http_client, ApiClient};
pub use menu::group_by_category;
pub use reservation::DEFAULT_RESERVATION_MESSAGE;
pub use types::{ApiResponse, ContactFormData, Dietary, MenuItem, ReservationForm};
