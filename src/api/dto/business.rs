//! DTOs for business directory endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Business, BusinessFilter, ContactInfo, Service};

/// Query parameters for `GET /api/businesses`.
#[derive(Debug, Deserialize, Default)]
pub struct BusinessListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl BusinessListQuery {
    /// Converts the raw query parameters into a domain filter.
    ///
    /// Empty-string parameters (`?search=`) count as absent predicates, so
    /// the domain filter only ever sees meaningful terms.
    pub fn into_filter(self) -> BusinessFilter {
        BusinessFilter {
            search: self.search.filter(|s| !s.is_empty()),
            category: self.category.filter(|c| !c.is_empty()),
        }
    }
}

/// JSON representation of a service offered by a business.
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
}

/// JSON representation of business contact details.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// JSON representation of a listed business.
#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub rating: f64,
    pub services: Vec<ServiceResponse>,
    pub contact: ContactResponse,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            price: service.price,
            duration: service.duration,
        }
    }
}

impl From<ContactInfo> for ContactResponse {
    fn from(contact: ContactInfo) -> Self {
        Self {
            email: contact.email,
            phone: contact.phone,
            address: contact.address,
        }
    }
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            name: business.name,
            description: business.description,
            category: business.category,
            location: business.location,
            rating: business.rating,
            services: business.services.into_iter().map(Into::into).collect(),
            contact: business.contact.into(),
        }
    }
}
