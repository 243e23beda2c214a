use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listing is offered for rent or for sale
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Purpose {
    #[default]
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "For Sale")]
    ForSale,
}

/// Country reference entry (static lookup data)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub emoji: &'static str,
    pub continent: &'static str,
    pub currency: &'static str,
    pub phone_prefix: &'static str,
}

/// Core listing record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    /// Composed "<area>, <city>" label used for display and search
    pub location: String,
    pub city: String,
    pub area: String,
    pub street: String,
    pub country: String,
    /// Free-form tag: Apartment, House, Villa, Studio, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub purpose: Purpose,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub has_gas: bool,
    pub has_electricity: bool,
    pub phone_number: String,
    pub whatsapp_number: String,
    pub images: Vec<String>,
    /// Display name of the owning user, copied at creation time
    pub host_name: String,
    pub rating: f32,
}

impl Property {
    pub const MAX_IMAGES: usize = 4;

    pub fn compose_location(area: &str, city: &str) -> String {
        format!("{}, {}", area, city)
    }

    pub fn is_owned_by(&self, name: &str) -> bool {
        self.host_name == name
    }
}

/// The single local user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
    /// URI or embedded data reference
    pub avatar: String,
    pub member_since: String,
    /// Informational only, recomputed by the store
    pub listings: u32,
    pub rating: f32,
}

impl UserProfile {
    pub const DEFAULT_AVATAR: &'static str = "https://picsum.photos/seed/user123/200/200";

    /// Fresh profile for a user who joins at `joined`
    pub fn joined_at(name: &str, email: &str, joined: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            bio: String::new(),
            avatar: Self::DEFAULT_AVATAR.to_string(),
            member_since: joined.format("%b %Y").to_string(),
            listings: 0,
            rating: 5.0,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.j@gethome.com".to_string(),
            bio: "Looking for a comfortable home and providing great stays.".to_string(),
            avatar: Self::DEFAULT_AVATAR.to_string(),
            member_since: "Jan 2024".to_string(),
            listings: 2,
            rating: 4.9,
        }
    }
}
