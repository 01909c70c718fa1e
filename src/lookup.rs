use crate::{LookupQuery, PersonResponse, Result, Transport};

/// Endpoint path of the person lookup.
pub const LOOKUP_PATH: &str = "/person/lookup";

/// Fluent builder for `GET /person/lookup`.
#[derive(Clone, Debug)]
pub struct PersonLookup<'a> {
    transport: &'a Transport,
    query: LookupQuery,
}

impl<'a> PersonLookup<'a> {
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

    /// Looks up the person matching the accumulated identifiers.
    pub async fn lookup(&self) -> Result<PersonResponse> {
        let params = self.query.to_map();
        let data = self.transport.get(LOOKUP_PATH, &params).await?;
        Ok(PersonResponse::new(data))
    }
}

#[cfg(test)]
mod tests {
    use super::PersonLookup;
    use crate::{ClientOptions, LookupQuery, Transport};

    #[test]
    fn setters_fill_lookup_query() {
        let transport = Transport::new("key", &ClientOptions::default());
        let lookup = PersonLookup::new(&transport)
            .id(12)
            .name("Ada Lovelace")
            .current_employer("Analytical Engines")
            .title("Analyst")
            .email("ada@example.com")
            .linkedin_url("https://linkedin.com/in/ada")
            .npi_number(1234567890);

        assert_eq!(
            lookup.query(),
            &LookupQuery {
                id: Some(12),
                linkedin_url: Some("https://linkedin.com/in/ada".to_owned()),
                name: Some("Ada Lovelace".to_owned()),
                current_employer: Some("Analytical Engines".to_owned()),
                title: Some("Analyst".to_owned()),
                email: Some("ada@example.com".to_owned()),
                npi_number: Some(1234567890),
            }
        );
        assert!(lookup.reset().query().is_empty());
    }
}
