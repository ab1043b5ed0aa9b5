//! Declarative field constraints for property payloads.
//!
//! Validation is a pure function from raw deserialized input to either `Ok(())`
//! or the full list of violated rules. Expected validation failures are values,
//! never panics or control-flow exceptions; the route layer turns them into
//! HTTP 400 responses via [`crate::errors::Error::Validation`].
//!
//! Bounds and defaults are named constants so tests can assert them
//! independently of how the checks are written.

use crate::api::models::properties::{PropertyCreate, PropertyUpdate};
use crate::types::PropertyId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const TITLE_MAX_LEN: usize = 200;
pub const CITY_MAX_LEN: usize = 100;
pub const PRICE_MAX: f64 = 100_000_000.0;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const BEDROOMS_MAX: i64 = 50;
pub const BATHROOMS_MAX: f64 = 20.0;
pub const SURFACE_MAX: f64 = 10_000.0;

/// Currency symbol applied when a create request omits one.
pub const DEFAULT_CURRENCY: &str = "€";

/// A single violated rule: which field, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    /// Path of the offending field ("price", "id", ...)
    pub path: String,
    /// Human-readable description of the violated rule
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &str, message: &str) -> Self {
        Self {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

/// Validate a create payload, reporting every violated rule.
pub fn validate_create(input: &PropertyCreate) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    check_title(Some(&input.title), &mut issues);
    check_city(Some(&input.city), &mut issues);
    check_price(Some(input.price), &mut issues);
    check_currency(input.currency.as_deref(), &mut issues);
    check_image(input.image.as_deref(), &mut issues);
    check_description(input.description.as_deref(), &mut issues);
    check_bedrooms(input.bedrooms, &mut issues);
    check_bathrooms(input.bathrooms, &mut issues);
    check_surface(input.surface, &mut issues);

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// Validate an update payload. Identical per-field constraints to
/// [`validate_create`], but every field is optional.
pub fn validate_update(input: &PropertyUpdate) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    check_title(input.title.as_deref(), &mut issues);
    check_city(input.city.as_deref(), &mut issues);
    check_price(input.price, &mut issues);
    check_currency(input.currency.as_deref(), &mut issues);
    check_image(input.image.as_deref(), &mut issues);
    check_description(input.description.as_deref(), &mut issues);
    check_bedrooms(input.bedrooms, &mut issues);
    check_bathrooms(input.bathrooms, &mut issues);
    check_surface(input.surface, &mut issues);

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

/// Parse a path parameter as a property id. A malformed id is a client error
/// (HTTP 400), never a "not found".
pub fn parse_property_id(raw: &str) -> Result<PropertyId, Vec<ValidationIssue>> {
    Uuid::parse_str(raw).map_err(|_| vec![ValidationIssue::new("id", "Invalid property ID format")])
}

fn check_title(title: Option<&str>, issues: &mut Vec<ValidationIssue>) {
    let Some(title) = title else { return };
    if title.is_empty() {
        issues.push(ValidationIssue::new("title", "Title is required"));
    } else if title.chars().count() > TITLE_MAX_LEN {
        issues.push(ValidationIssue::new("title", "Title must be less than 200 characters"));
    }
}

fn check_city(city: Option<&str>, issues: &mut Vec<ValidationIssue>) {
    let Some(city) = city else { return };
    if city.is_empty() {
        issues.push(ValidationIssue::new("city", "City is required"));
    } else if city.chars().count() > CITY_MAX_LEN {
        issues.push(ValidationIssue::new("city", "City must be less than 100 characters"));
    }
}

fn check_price(price: Option<f64>, issues: &mut Vec<ValidationIssue>) {
    let Some(price) = price else { return };
    if price <= 0.0 {
        issues.push(ValidationIssue::new("price", "Price must be positive"));
    } else if price > PRICE_MAX {
        issues.push(ValidationIssue::new("price", "Price is too high"));
    }
}

fn check_currency(currency: Option<&str>, issues: &mut Vec<ValidationIssue>) {
    let Some(currency) = currency else { return };
    if currency.chars().count() != 1 {
        issues.push(ValidationIssue::new("currency", "Currency must be a single character"));
    }
}

fn check_image(image: Option<&str>, issues: &mut Vec<ValidationIssue>) {
    let Some(image) = image else { return };
    // Empty string is an accepted "no image" marker.
    if !image.is_empty() && url::Url::parse(image).is_err() {
        issues.push(ValidationIssue::new("image", "Image must be a valid URL"));
    }
}

fn check_description(description: Option<&str>, issues: &mut Vec<ValidationIssue>) {
    let Some(description) = description else { return };
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        issues.push(ValidationIssue::new("description", "Description must be less than 1000 characters"));
    }
}

fn check_bedrooms(bedrooms: Option<i64>, issues: &mut Vec<ValidationIssue>) {
    let Some(bedrooms) = bedrooms else { return };
    if bedrooms < 0 {
        issues.push(ValidationIssue::new("bedrooms", "Bedrooms cannot be negative"));
    } else if bedrooms > BEDROOMS_MAX {
        issues.push(ValidationIssue::new("bedrooms", "Too many bedrooms"));
    }
}

fn check_bathrooms(bathrooms: Option<f64>, issues: &mut Vec<ValidationIssue>) {
    let Some(bathrooms) = bathrooms else { return };
    if bathrooms < 0.0 {
        issues.push(ValidationIssue::new("bathrooms", "Bathrooms cannot be negative"));
    } else if bathrooms > BATHROOMS_MAX {
        issues.push(ValidationIssue::new("bathrooms", "Too many bathrooms"));
    }
}

fn check_surface(surface: Option<f64>, issues: &mut Vec<ValidationIssue>) {
    let Some(surface) = surface else { return };
    if surface < 0.0 {
        issues.push(ValidationIssue::new("surface", "Surface cannot be negative"));
    } else if surface > SURFACE_MAX {
        issues.push(ValidationIssue::new("surface", "Surface is too large"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_create() -> PropertyCreate {
        PropertyCreate {
            title: "Loft".to_string(),
            city: "Lyon".to_string(),
            price: 100_000.0,
            currency: None,
            image: None,
            description: None,
            bedrooms: None,
            bathrooms: None,
            surface: None,
            kind: None,
        }
    }

    #[test]
    fn test_minimal_create_is_valid() {
        assert!(validate_create(&minimal_create()).is_ok());
    }

    #[test]
    fn test_all_violations_are_reported_together() {
        let input = PropertyCreate {
            title: String::new(),
            city: String::new(),
            price: -5.0,
            ..minimal_create()
        };

        let issues = validate_create(&input).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|issue| issue.path.as_str()).collect();
        assert_eq!(paths, vec!["title", "city", "price"]);
    }

    #[test]
    fn test_price_bounds() {
        let too_high = PropertyCreate {
            price: 200_000_000.0,
            ..minimal_create()
        };
        let issues = validate_create(&too_high).unwrap_err();
        assert_eq!(issues, vec![ValidationIssue::new("price", "Price is too high")]);

        let at_max = PropertyCreate {
            price: PRICE_MAX,
            ..minimal_create()
        };
        assert!(validate_create(&at_max).is_ok());
    }

    #[test]
    fn test_title_and_city_length_bounds() {
        let at_limit = PropertyCreate {
            title: "t".repeat(TITLE_MAX_LEN),
            city: "c".repeat(CITY_MAX_LEN),
            ..minimal_create()
        };
        assert!(validate_create(&at_limit).is_ok());

        let over_limit = PropertyCreate {
            title: "t".repeat(TITLE_MAX_LEN + 1),
            ..minimal_create()
        };
        assert_eq!(validate_create(&over_limit).unwrap_err()[0].path, "title");
    }

    #[test]
    fn test_currency_must_be_single_character() {
        let valid = PropertyCreate {
            currency: Some("€".to_string()),
            ..minimal_create()
        };
        assert!(validate_create(&valid).is_ok());

        let invalid = PropertyCreate {
            currency: Some("EUR".to_string()),
            ..minimal_create()
        };
        assert_eq!(validate_create(&invalid).unwrap_err()[0].path, "currency");
    }

    #[test]
    fn test_image_accepts_url_empty_or_absent() {
        for image in [None, Some(String::new()), Some("https://example.com/a.jpg".to_string())] {
            let input = PropertyCreate {
                image,
                ..minimal_create()
            };
            assert!(validate_create(&input).is_ok());
        }

        let invalid = PropertyCreate {
            image: Some("not a url".to_string()),
            ..minimal_create()
        };
        assert_eq!(validate_create(&invalid).unwrap_err()[0].path, "image");
    }

    #[test]
    fn test_room_and_surface_bounds() {
        let valid = PropertyCreate {
            bedrooms: Some(BEDROOMS_MAX),
            bathrooms: Some(BATHROOMS_MAX),
            surface: Some(SURFACE_MAX),
            ..minimal_create()
        };
        assert!(validate_create(&valid).is_ok());

        let invalid = PropertyCreate {
            bedrooms: Some(BEDROOMS_MAX + 1),
            bathrooms: Some(-1.0),
            surface: Some(SURFACE_MAX + 1.0),
            ..minimal_create()
        };
        let issues = validate_create(&invalid).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["bedrooms", "bathrooms", "surface"]);
    }

    #[test]
    fn test_update_with_no_fields_is_valid() {
        assert!(validate_update(&PropertyUpdate::default()).is_ok());
    }

    #[test]
    fn test_update_checks_provided_fields() {
        let input = PropertyUpdate {
            title: Some(String::new()),
            price: Some(0.0),
            ..Default::default()
        };
        let issues = validate_update(&input).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["title", "price"]);
    }

    #[test]
    fn test_parse_property_id() {
        assert!(parse_property_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        let issues = parse_property_id("not-a-uuid").unwrap_err();
        assert_eq!(issues[0].path, "id");
        assert!(issues[0].message.contains("ID format"));
    }
}
