use serde::{Deserialize, Serialize};

/// Dietary flags on a menu item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dietary {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub spicy: bool,
}

/// One dish from the live menu
///
/// The backend may send the record id as `_id`, `id` or both; `_id` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMenuItem")]
pub struct MenuItem {
    /// Backend record id
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Dietary>,
    #[serde(default)]
    pub category: String,
}

/// Menu item as it arrives on the wire
#[derive(Debug, Deserialize)]
struct RawMenuItem {
    #[serde(rename = "_id")]
    backend_id: Option<String>,
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    dietary: Option<Dietary>,
    #[serde(default)]
    category: String,
}

impl TryFrom<RawMenuItem> for MenuItem {
    type Error = String;

    fn try_from(raw: RawMenuItem) -> Result<Self, Self::Error> {
        let id = raw
            .backend_id
            .or(raw.id)
            .ok_or_else(|| format!("menu item '{}' has no id", raw.name))?;

        Ok(Self {
            id,
            name: raw.name,
            description: raw.description,
            price: raw.price,
            image: raw.image,
            dietary: raw.dietary,
            category: raw.category,
        })
    }
}

/// Body returned by the contact endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// What a guest types into the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// What a guest types into the reservation form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Requested date, as entered
    pub date: String,
    /// Requested time, as entered
    pub time: String,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteConfigData<T> {
    pub site_config: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuData {
    #[serde(default)]
    pub menu_list: Vec<MenuItem>,
}
