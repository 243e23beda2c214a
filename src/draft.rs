use crate::countries;
use crate::models::{Property, Purpose};
use crate::store::new_listing_id;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

const NEW_LISTING_RATING: f32 = 5.0;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("invalid listing: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("please upload at least one image")]
    MissingImage,

    #[error("{field} must be a valid number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown country {0:?}")]
    UnknownCountry(String),
}

/// Raw "post a listing" form input, before it becomes a [`Property`]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListingDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    pub purpose: Purpose,
    pub kind: String,
    /// Country name; empty picks the default country
    pub country: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Area is required"))]
    pub area: String,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub has_gas: bool,
    pub has_electricity: bool,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    pub whatsapp_number: String,
    pub images: Vec<String>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            purpose: Purpose::ForRent,
            kind: "Apartment".to_string(),
            country: countries::default_country().name.to_string(),
            city: String::new(),
            area: String::new(),
            street: String::new(),
            price: String::new(),
            bedrooms: "1".to_string(),
            bathrooms: "1".to_string(),
            has_gas: true,
            has_electricity: true,
            phone_number: String::new(),
            whatsapp_number: String::new(),
            images: Vec::new(),
        }
    }
}

impl ListingDraft {
    /// Prefill the form for editing an existing listing
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            description: property.description.clone(),
            purpose: property.purpose,
            kind: property.kind.clone(),
            country: property.country.clone(),
            city: property.city.clone(),
            area: property.area.clone(),
            street: property.street.clone(),
            price: property.price.to_string(),
            bedrooms: property.bedrooms.to_string(),
            bathrooms: property.bathrooms.to_string(),
            has_gas: property.has_gas,
            has_electricity: property.has_electricity,
            phone_number: property.phone_number.clone(),
            whatsapp_number: property.whatsapp_number.clone(),
            images: property.images.clone(),
        }
    }

    /// Add uploaded image references, keeping at most four
    pub fn add_images<I: IntoIterator<Item = String>>(&mut self, images: I) {
        self.images.extend(images);
        self.images.truncate(Property::MAX_IMAGES);
    }

    /// Assemble the listing record.
    ///
    /// When `editing` is set, its id, host and rating carry over; otherwise
    /// a fresh id is generated and the listing is hosted by `host_name`.
    pub fn into_property(
        mut self,
        host_name: &str,
        editing: Option<&Property>,
    ) -> Result<Property, DraftError> {
        self.validate()?;
        if self.images.is_empty() {
            return Err(DraftError::MissingImage);
        }
        self.images.truncate(Property::MAX_IMAGES);

        let country = if self.country.is_empty() {
            countries::default_country()
        } else {
            countries::find_by_name(&self.country)
                .ok_or_else(|| DraftError::UnknownCountry(self.country.clone()))?
        };

        let price: f64 = parse_number("price", &self.price)?;
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidNumber {
                field: "price",
                value: self.price,
            });
        }
        let bedrooms: u32 = parse_number("bedrooms", &self.bedrooms)?;
        let bathrooms: f32 = parse_number("bathrooms", &self.bathrooms)?;
        if !bathrooms.is_finite() || bathrooms < 0.0 {
            return Err(DraftError::InvalidNumber {
                field: "bathrooms",
                value: self.bathrooms,
            });
        }

        let (id, host_name, rating) = match editing {
            Some(existing) => (existing.id.clone(), existing.host_name.clone(), existing.rating),
            None => (new_listing_id(), host_name.to_string(), NEW_LISTING_RATING),
        };

        Ok(Property {
            id,
            location: Property::compose_location(&self.area, &self.city),
            title: self.title,
            description: self.description,
            price,
            currency: country.currency.to_string(),
            city: self.city,
            area: self.area,
            street: self.street,
            country: country.name.to_string(),
            kind: self.kind,
            purpose: self.purpose,
            bedrooms,
            bathrooms,
            has_gas: self.has_gas,
            has_electricity: self.has_electricity,
            phone_number: self.phone_number,
            whatsapp_number: self.whatsapp_number,
            images: self.images,
            host_name,
            rating,
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, DraftError> {
    raw.trim().parse().map_err(|_| DraftError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn filled() -> ListingDraft {
        ListingDraft {
            title: "Luxury House with Garden".to_string(),
            country: "United Arab Emirates".to_string(),
            city: "Dubai".to_string(),
            area: "Marina".to_string(),
            street: "Street 4, House #23".to_string(),
            price: "2500.50".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2.5".to_string(),
            phone_number: "501234567".to_string(),
            images: vec!["blob:1".to_string()],
            ..ListingDraft::default()
        }
    }

    #[test]
    fn new_listing_gets_fresh_identity() {
        let property = filled().into_property("Alex Johnson", None).unwrap();

        assert_eq!(property.id.len(), 9);
        assert_eq!(property.host_name, "Alex Johnson");
        assert_eq!(property.rating, 5.0);
        assert_eq!(property.currency, "AED");
        assert_eq!(property.location, "Marina, Dubai");
        assert_eq!(property.price, 2500.5);
        assert_eq!(property.bathrooms, 2.5);
        assert_eq!(property.kind, "Apartment");
        assert_eq!(property.purpose, Purpose::ForRent);
    }

    #[test]
    fn edit_keeps_id_host_and_rating() {
        let existing = seed::default_properties().remove(0);
        let mut draft = ListingDraft::from_property(&existing);
        draft.title = "Modern Sunset Villa II".to_string();
        draft.area = "Point Dume".to_string();

        let property = draft.into_property("Someone Else", Some(&existing)).unwrap();

        assert_eq!(property.id, existing.id);
        assert_eq!(property.host_name, "Sarah J.");
        assert_eq!(property.rating, existing.rating);
        assert_eq!(property.bathrooms, 3.5);
        assert_eq!(property.location, "Point Dume, Malibu");
    }

    #[test]
    fn requires_an_image() {
        let mut draft = filled();
        draft.images.clear();

        assert!(matches!(
            draft.into_property("Alex Johnson", None),
            Err(DraftError::MissingImage)
        ));
    }

    #[test]
    fn required_fields_are_checked() {
        let mut draft = filled();
        draft.street.clear();
        draft.phone_number.clear();

        let Err(DraftError::Invalid(errors)) = draft.into_property("Alex Johnson", None) else {
            panic!("expected validation errors");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("street"));
        assert!(fields.contains_key("phone_number"));
        assert!(!fields.contains_key("title"));
    }

    #[test]
    fn bad_numbers_and_countries_are_rejected() {
        let mut draft = filled();
        draft.price = "cheap".to_string();
        assert!(matches!(
            draft.into_property("A", None),
            Err(DraftError::InvalidNumber { field: "price", .. })
        ));

        let mut draft = filled();
        draft.bedrooms = "-1".to_string();
        assert!(matches!(
            draft.into_property("A", None),
            Err(DraftError::InvalidNumber { field: "bedrooms", .. })
        ));

        let mut draft = filled();
        draft.country = "Narnia".to_string();
        assert!(matches!(
            draft.into_property("A", None),
            Err(DraftError::UnknownCountry(_))
        ));
    }

    #[test]
    fn images_are_capped_at_four() {
        let mut draft = filled();
        draft.add_images((0..5).map(|i| format!("blob:{}", i + 2)));
        assert_eq!(draft.images.len(), Property::MAX_IMAGES);
        assert_eq!(draft.images[0], "blob:1");
    }
}
