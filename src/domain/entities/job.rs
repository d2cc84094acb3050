//! Job request entity posted by customers looking for a service provider.

/// A customer-submitted job request.
///
/// The id and `created_at` are caller-supplied; neither is validated or
/// normalized. Duplicate ids are allowed (lookups return the first append).
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub status: String,
    pub category: String,
    pub location: String,
    pub created_at: String,
}

/// Optional predicates for job list queries, combined with logical AND.
///
/// Unlike [`super::BusinessFilter`], both predicates are case-SENSITIVE
/// exact matches.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<String>,
    pub category: Option<String>,
}

impl JobFilter {
    /// Returns true when the job satisfies every supplied predicate.
    pub fn matches(&self, job: &JobRequest) -> bool {
        if let Some(status) = &self.status
            && job.status != *status
        {
            return false;
        }

        if let Some(category) = &self.category
            && job.category != *category
        {
            return false;
        }

        true
    }
}
