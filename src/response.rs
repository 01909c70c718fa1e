use serde_json::Value;

use crate::JsonMap;

fn str_field<'a>(map: &'a JsonMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn u64_field(map: &JsonMap, key: &str) -> Option<u64> {
    map.get(key).and_then(Value::as_u64)
}

fn array_field<'a>(map: &'a JsonMap, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn object_field(map: &JsonMap, key: &str) -> Option<JsonMap> {
    map.get(key).and_then(Value::as_object).cloned()
}

/// Page of profiles returned by a people search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResponse {
    profiles: Vec<Value>,
    pagination: JsonMap,
    raw: JsonMap,
}

impl SearchResponse {
    pub fn new(data: JsonMap) -> Self {
        Self {
            profiles: array_field(&data, "profiles").to_vec(),
            pagination: object_field(&data, "pagination").unwrap_or_default(),
            raw: data,
        }
    }

    pub fn profiles(&self) -> &[Value] {
        &self.profiles
    }

    pub fn pagination(&self) -> &JsonMap {
        &self.pagination
    }

    /// Number of profiles on this page.
    pub fn count(&self) -> usize {
        self.profiles.len()
    }

    /// Total matches across all pages, `0` when unknown.
    pub fn total(&self) -> u64 {
        u64_field(&self.pagination, "total").unwrap_or(0)
    }

    pub fn current_page(&self) -> u64 {
        u64_field(&self.pagination, "start").unwrap_or(1)
    }

    pub fn next_page(&self) -> Option<u64> {
        u64_field(&self.pagination, "next")
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn raw(&self) -> &JsonMap {
        &self.raw
    }
}

impl From<JsonMap> for SearchResponse {
    fn from(data: JsonMap) -> Self {
        Self::new(data)
    }
}

/// Profile returned by a person lookup.
///
/// Lookups can complete asynchronously upstream; check [`PersonResponse::status`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonResponse {
    data: JsonMap,
}

impl PersonResponse {
    pub fn new(data: JsonMap) -> Self {
        Self { data }
    }

    pub fn id(&self) -> Option<u64> {
        u64_field(&self.data, "id")
    }

    pub fn name(&self) -> Option<&str> {
        str_field(&self.data, "name")
    }

    pub fn current_title(&self) -> Option<&str> {
        str_field(&self.data, "current_title")
    }

    pub fn current_employer(&self) -> Option<&str> {
        str_field(&self.data, "current_employer")
    }

    pub fn linkedin_url(&self) -> Option<&str> {
        str_field(&self.data, "linkedin_url")
    }

    pub fn location(&self) -> Option<&str> {
        str_field(&self.data, "location")
    }

    pub fn status(&self) -> Option<&str> {
        str_field(&self.data, "status")
    }

    pub fn is_complete(&self) -> bool {
        self.status() == Some("complete")
    }

    pub fn is_searching(&self) -> bool {
        self.status() == Some("searching")
    }

    pub fn emails(&self) -> &[Value] {
        array_field(&self.data, "emails")
    }

    pub fn phones(&self) -> &[Value] {
        array_field(&self.data, "phones")
    }

    pub fn raw(&self) -> &JsonMap {
        &self.data
    }
}

impl From<JsonMap> for PersonResponse {
    fn from(data: JsonMap) -> Self {
        Self::new(data)
    }
}

/// Person profile combined with their current employer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrichResponse {
    person: JsonMap,
    company: JsonMap,
}

impl EnrichResponse {
    /// Accepts both the nested `{"person": .., "company": ..}` shape and the
    /// flat profile shape, where company details live in `current_employer*`
    /// fields.
    pub fn new(data: JsonMap) -> Self {
        let person = object_field(&data, "person");
        let company = object_field(&data, "company");
        if person.is_some() || company.is_some() {
            return Self {
                person: person.unwrap_or_default(),
                company: company.unwrap_or_default(),
            };
        }

        let mut company = JsonMap::new();
        for (target, source) in [
            ("id", "current_employer_id"),
            ("name", "current_employer"),
            ("domain", "current_employer_domain"),
            ("website", "current_employer_website"),
            ("linkedin_url", "current_employer_linkedin_url"),
        ] {
            if let Some(value) = data.get(source).filter(|value| !value.is_null()) {
                company.insert(target.to_owned(), value.clone());
            }
        }

        Self {
            person: data,
            company,
        }
    }

    pub fn person_id(&self) -> Option<u64> {
        u64_field(&self.person, "id")
    }

    pub fn person_name(&self) -> Option<&str> {
        str_field(&self.person, "name")
    }

    pub fn person_emails(&self) -> &[Value] {
        array_field(&self.person, "emails")
    }

    pub fn person_phones(&self) -> &[Value] {
        array_field(&self.person, "phones")
    }

    pub fn company_id(&self) -> Option<u64> {
        u64_field(&self.company, "id")
    }

    pub fn company_name(&self) -> Option<&str> {
        str_field(&self.company, "name")
    }

    pub fn company_domain(&self) -> Option<&str> {
        str_field(&self.company, "domain")
    }

    pub fn company_industry(&self) -> Option<&str> {
        str_field(&self.company, "industry")
    }

    pub fn company_employee_count(&self) -> Option<&str> {
        str_field(&self.company, "employee_count")
    }

    pub fn company_location(&self) -> Option<&str> {
        str_field(&self.company, "location")
    }

    pub fn person(&self) -> &JsonMap {
        &self.person
    }

    pub fn company(&self) -> &JsonMap {
        &self.company
    }
}

impl From<JsonMap> for EnrichResponse {
    fn from(data: JsonMap) -> Self {
        Self::new(data)
    }
}
