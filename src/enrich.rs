use crate::{EnrichResponse, LookupQuery, Result, Transport};

/// Endpoint path of the combined person and company lookup.
pub const ENRICH_PATH: &str = "/profile-company/lookup";

/// Fluent builder for `GET /profile-company/lookup`.
///
/// Takes the same identifiers as [`crate::PersonLookup`] but also returns
/// details about the person's current employer.
#[derive(Clone, Debug)]
pub struct PersonEnrich<'a> {
    transport: &'a Transport,
    query: LookupQuery,
}

impl<'a> PersonEnrich<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            transport,
            query: LookupQuery::default(),
        }
    }

    /// RocketReach profile ID.
    pub fn id(mut self, id: u64) -> Self {
        self.query.id = Some(id);
        self
    }

    /// Public LinkedIn profile URL.
    pub fn linkedin_url(mut self, url: impl Into<String>) -> Self {
        self.query.linkedin_url = Some(url.into());
        self
    }

    /// Full name; pair with an employer for a reliable match.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.query.name = Some(name.into());
        self
    }

    /// Current employer name.
    pub fn current_employer(mut self, employer: impl Into<String>) -> Self {
        self.query.current_employer = Some(employer.into());
        self
    }

    /// Current job title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.query.title = Some(title.into());
        self
    }

    /// Known email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.query.email = Some(email.into());
        self
    }

    /// National Provider Identifier, for healthcare professionals.
    pub fn npi_number(mut self, npi: u64) -> Self {
        self.query.npi_number = Some(npi);
        self
    }

    /// Clears every identifier.
    pub fn reset(mut self) -> Self {
        self.query = LookupQuery::default();
        self
    }

    /// Identifiers accumulated so far.
    pub fn query(&self) -> &LookupQuery {
        &self.query
    }

    /// Fetches the person together with their current employer.
    pub async fn enrich(&self) -> Result<EnrichResponse> {
        let params = self.query.to_map();
        let data = self.transport.get(ENRICH_PATH, &params).await?;
        Ok(EnrichResponse::new(data))
    }
}
