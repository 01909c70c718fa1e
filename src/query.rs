use serde::Serialize;
use serde_json::Value;

use crate::JsonMap;

/// One or more string values for a search filter.
///
/// Lets filter setters accept a single `&str` as well as collections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Values(pub Vec<String>);

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Self(vec![value.to_owned()])
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for Values {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Values {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|value| (*value).to_owned()).collect())
    }
}

/// Filters and paging for a people search.
///
/// All filters are optional; unset filters are left out of the request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_title: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_employer: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_employer_domain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_funding: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_revenue: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
    pub page: u32,
    pub page_size: u32,
    pub order_by: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            name: None,
            current_title: None,
            current_employer: None,
            current_employer_domain: None,
            location: None,
            linkedin_url: None,
            contact_method: None,
            industry: None,
            company_size: None,
            company_funding: None,
            company_revenue: None,
            seniority: None,
            skills: None,
            education: None,
            page: 1,
            page_size: 10,
            order_by: "relevance".to_owned(),
        }
    }
}

impl SearchQuery {
    /// Flat mapping of every set field, paging included.
    pub fn to_map(&self) -> JsonMap {
        to_object(self)
    }

    /// Request body for the search endpoint.
    ///
    /// Filters are nested under `query`; paging and ordering stay top-level.
    pub fn to_payload(&self) -> JsonMap {
        let mut filters = self.to_map();
        let page = filters.remove("page").unwrap_or(Value::from(1));
        let page_size = filters.remove("page_size").unwrap_or(Value::from(10));
        let order_by = filters
            .remove("order_by")
            .unwrap_or(Value::from("relevance"));

        let mut payload = JsonMap::new();
        payload.insert("query".to_owned(), Value::Object(filters));
        payload.insert("page".to_owned(), page);
        payload.insert("page_size".to_owned(), page_size);
        payload.insert("order_by".to_owned(), order_by);
        payload
    }
}

/// Identifiers for a single-person lookup or enrichment.
///
/// At least one field should be set for the API to resolve a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LookupQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_employer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npi_number: Option<u64>,
}

impl LookupQuery {
    /// Mapping of every set field, used as GET parameters.
    pub fn to_map(&self) -> JsonMap {
        to_object(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn to_object<T: Serialize>(value: &T) -> JsonMap {
    // Plain structs of strings and integers always serialize to an object.
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => JsonMap::new(),
    }
}
