//! Business entity with its embedded services and contact details.

/// A service offered by a business.
///
/// Owned exclusively by its parent [`Business`]; has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
}

/// Contact details embedded in exactly one business. Value object, no identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A listed business in the directory.
///
/// Services keep their insertion order; the order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub rating: f64,
    pub services: Vec<Service>,
    pub contact: ContactInfo,
}

/// Optional predicates for business list queries, combined with logical AND.
///
/// `None` on a field means no filtering on that dimension.
#[derive(Debug, Clone, Default)]
pub struct BusinessFilter {
    /// Case-insensitive substring match against name OR description.
    pub search: Option<String>,
    /// Case-insensitive exact match against category.
    pub category: Option<String>,
}

impl BusinessFilter {
    /// Returns true when the business satisfies every supplied predicate.
    pub fn matches(&self, business: &Business) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !business.name.to_lowercase().contains(&term)
                && !business.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if let Some(category) = &self.category
            && business.category.to_lowercase() != category.to_lowercase()
        {
            return false;
        }

        true
    }
}
