//! Bundled sample listings for the offline fallback.
//!
//! When the API is unreachable and the fallback capability is enabled, the
//! client store substitutes these records so a UI stays usable. The ids are
//! fixed so repeated fallbacks are stable within a session.

use crate::api::models::properties::{PropertyResponse, PropertyType};
use chrono::Utc;
use uuid::Uuid;

/// The bundled sample listings, in display order.
pub fn sample_properties() -> Vec<PropertyResponse> {
    let seeds = [
        (
            1u128,
            "Modern Apartment in City Center",
            "Paris",
            850_000.0,
            Some("https://via.placeholder.com/400x300/4f46e5/white?text=Property+Image"),
            "Beautiful modern apartment located in the heart of Paris. This stunning property features high-end finishes, floor-to-ceiling windows with city views, and premium appliances throughout.",
            85.0,
            2,
            2.0,
            PropertyType::Apartment,
        ),
        (
            2,
            "Luxury Villa with Garden",
            "Nice",
            1_200_000.0,
            Some("https://via.placeholder.com/400x300/059669/white?text=Villa+Image"),
            "Stunning luxury villa with beautiful garden and pool area. Perfect for families seeking luxury living in the French Riviera.",
            220.0,
            4,
            3.0,
            PropertyType::Villa,
        ),
        (
            3,
            "Cozy Studio Near Metro",
            "Lyon",
            320_000.0,
            None,
            "Perfect starter home or investment property. Located just minutes from metro station with easy access to city center.",
            35.0,
            1,
            1.0,
            PropertyType::Studio,
        ),
        (
            4,
            "Penthouse with Terrace",
            "Cannes",
            2_500_000.0,
            Some("https://via.placeholder.com/400x300/6366f1/white?text=Penthouse"),
            "Exclusive penthouse with panoramic views and private terrace. Ultimate luxury living on the French Riviera.",
            150.0,
            3,
            3.0,
            PropertyType::Penthouse,
        ),
        (
            5,
            "Family House with Garden",
            "Bordeaux",
            680_000.0,
            Some("https://via.placeholder.com/400x300/059669/white?text=House+Image"),
            "Spacious family home with large garden. Perfect for families with children, quiet neighborhood with good schools nearby.",
            180.0,
            4,
            2.0,
            PropertyType::House,
        ),
        (
            6,
            "Modern Townhouse",
            "Toulouse",
            450_000.0,
            Some("https://via.placeholder.com/400x300/4f46e5/white?text=Townhouse"),
            "Contemporary townhouse with modern amenities and small private garden. Great location near public transport.",
            125.0,
            3,
            2.0,
            PropertyType::Townhouse,
        ),
    ];

    let now = Utc::now();
    seeds
        .into_iter()
        .map(|(id, title, city, price, image, description, size, bedrooms, bathrooms, kind)| PropertyResponse {
            id: Uuid::from_u128(id),
            title: title.to_string(),
            city: city.to_string(),
            price,
            currency: "€".to_string(),
            image: image.map(str::to_string),
            description: Some(description.to_string()),
            bedrooms: Some(bedrooms),
            bathrooms: Some(bathrooms),
            size: Some(size),
            kind: Some(kind),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
