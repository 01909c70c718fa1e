use crate::{query::Values, Result, SearchQuery, SearchResponse, Transport};

/// Endpoint path of the people search.
pub const SEARCH_PATH: &str = "/person/search";

macro_rules! filter_setters {
    ($($(#[$doc:meta])* $field:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $field(mut self, values: impl Into<Values>) -> Self {
                self.query.$field = Some(values.into().0);
                self
            }
        )+
    };
}

/// Fluent builder for `POST /person/search`.
#[derive(Clone, Debug)]
pub struct PeopleSearch<'a> {
    transport: &'a Transport,
    query: SearchQuery,
}

impl<'a> PeopleSearch<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            transport,
            query: SearchQuery::default(),
        }
    }

    filter_setters!(
        /// Full names to match.
        name,
        current_title,
        current_employer,
        /// Employer domains such as `example.com`.
        current_employer_domain,
        location,
        linkedin_url,
        /// Required contact channels, e.g. `email` or `phone`.
        contact_method,
        industry,
        company_size,
        company_funding,
        company_revenue,
        seniority,
        skills,
        education,
    );

    /// 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.query.page = page;
        self
    }

    /// Number of profiles per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.query.page_size = page_size;
        self
    }

    /// Sort order, `relevance` unless set.
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.query.order_by = order_by.into();
        self
    }

    /// Drops every filter and restores default paging.
    pub fn reset(mut self) -> Self {
        self.query = SearchQuery::default();
        self
    }

    /// Filters accumulated so far.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Runs the search with the accumulated filters.
    pub async fn search(&self) -> Result<SearchResponse> {
        let payload = self.query.to_payload();
        let data = self.transport.post(SEARCH_PATH, &payload).await?;
        Ok(SearchResponse::new(data))
    }
}

#[cfg(test)]
mod tests {
    use super::PeopleSearch;
    use crate::{ClientOptions, SearchQuery, Transport};

    #[test]
    fn setters_accumulate_filters() {
        let transport = Transport::new("key", &ClientOptions::default());
        let search = PeopleSearch::new(&transport)
            .name("Ada Lovelace")
            .current_employer(["Analytical Engines", "Babbage & Co"])
            .skills(vec!["math".to_owned()])
            .page(3)
            .page_size(25)
            .order_by("popularity");

        let query = search.query();
        assert_eq!(query.name, Some(vec!["Ada Lovelace".to_owned()]));
        assert_eq!(query.current_employer.as_ref().map(Vec::len), Some(2));
        assert_eq!(query.skills, Some(vec!["math".to_owned()]));
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.order_by, "popularity");
    }

    #[test]
    fn reset_restores_defaults() {
        let transport = Transport::new("key", &ClientOptions::default());
        let search = PeopleSearch::new(&transport)
            .location("Paris")
            .page(9)
            .reset();
        assert_eq!(search.query(), &SearchQuery::default());
    }
}
