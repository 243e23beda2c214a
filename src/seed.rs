//! Built-in dataset used when nothing usable is persisted yet.

use crate::models::{Property, Purpose, UserProfile};

/// Seed listings, newest first
pub fn default_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern Sunset Villa".to_string(),
            description: "A stunning architectural masterpiece with panoramic ocean views."
                .to_string(),
            price: 450.0,
            currency: "USD".to_string(),
            location: "Malibu".to_string(),
            city: "Malibu".to_string(),
            area: "Pacific Heights".to_string(),
            street: "Sunset Blvd 101".to_string(),
            country: "United States".to_string(),
            kind: "Villa".to_string(),
            purpose: Purpose::ForRent,
            bedrooms: 4,
            bathrooms: 3.5,
            has_gas: true,
            has_electricity: true,
            phone_number: "123456789".to_string(),
            whatsapp_number: "123456789".to_string(),
            images: vec![
                "https://picsum.photos/seed/villa1/800/600".to_string(),
                "https://picsum.photos/seed/villa1b/800/600".to_string(),
            ],
            host_name: "Sarah J.".to_string(),
            rating: 4.9,
        },
        Property {
            id: "2".to_string(),
            title: "Standard Town House".to_string(),
            description: "Nice living area with full utilities.".to_string(),
            price: 85_000.0,
            currency: "PKR".to_string(),
            location: "Gulberg".to_string(),
            city: "Lahore".to_string(),
            area: "Block L".to_string(),
            street: "Main Blvd".to_string(),
            country: "Pakistan".to_string(),
            kind: "House".to_string(),
            purpose: Purpose::ForSale,
            bedrooms: 3,
            bathrooms: 2.0,
            has_gas: true,
            has_electricity: true,
            phone_number: "03001234567".to_string(),
            whatsapp_number: "03001234567".to_string(),
            images: vec!["https://picsum.photos/seed/lhr1/800/600".to_string()],
            host_name: "Alex Johnson".to_string(),
            rating: 4.7,
        },
    ]
}

pub fn default_profile() -> UserProfile {
    UserProfile::default()
}
