//! Fixed sample data loaded into the directory at process start.

use crate::domain::entities::{Business, ContactInfo, Service};

/// Returns the sample business seeded into every fresh process.
///
/// Identifiers are fixed slugs so the record is addressable in tests and
/// demos without the process having to remember generated ids.
pub fn sample_business() -> Business {
    Business {
        id: "home-pro-services".to_string(),
        name: "Home Pro Services".to_string(),
        description: "Professional home maintenance and repair services".to_string(),
        category: "home".to_string(),
        location: "New York, NY".to_string(),
        rating: 4.8,
        services: vec![Service {
            id: "basic-home-inspection".to_string(),
            name: "Basic Home Inspection".to_string(),
            description: "Comprehensive home inspection service".to_string(),
            price: 150.00,
            duration: "2 hours".to_string(),
        }],
        contact: ContactInfo {
            email: "contact@homepro.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "123 Main St, New York, NY".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_business_shape() {
        let business = sample_business();

        assert_eq!(business.id, "home-pro-services");
        assert_eq!(business.name, "Home Pro Services");
        assert_eq!(business.category, "home");
        assert_eq!(business.rating, 4.8);
        assert_eq!(business.services.len(), 1);
        assert_eq!(business.services[0].price, 150.00);
        assert_eq!(business.contact.email, "contact@homepro.com");
    }
}
