//! Filter objects and their query-string form.
//!
//! Filters are cleaned before serialization: fields that are null, absent or
//! empty strings are dropped, while meaningful falsy values such as `false`
//! or `0` are kept.

use serde::Serialize;
use serde_json::Value;

use crate::error::PortalError;
use crate::pagination::Pagination;

/// Search fields of the student table.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct StudentFilters {
    pub name: String,
    pub class: String,
    pub gender: String,
    pub roll_no: String,
    pub phone_no: String,
    pub vaccine_name: String,
    pub vaccination: Option<bool>,
}

/// Student table filter a search box or select writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Class,
    RollNo,
    Vaccinated,
    VaccineName,
}

impl StudentFilters {
    /// Applies one filter edit and returns the pagination to fetch with next:
    /// any filter change goes back to the first page. The vaccinated filter
    /// takes `Yes`, `No` or anything else for "either".
    pub fn set(&mut self, field: FilterField, value: String, pagination: Pagination) -> Pagination {
        match field {
            FilterField::Name => self.name = value,
            FilterField::Class => self.class = value,
            FilterField::RollNo => self.roll_no = value,
            FilterField::VaccineName => self.vaccine_name = value,
            FilterField::Vaccinated => {
                self.vaccination = match value.as_str() {
                    "Yes" => Some(true),
                    "No" => Some(false),
                    _ => None,
                }
            }
        }
        pagination.with_page(1)
    }

    /// Subset forwarded to report generation; other filters are not sent.
    pub fn report_filters(&self) -> ReportFilters {
        ReportFilters {
            class: self.class.clone(),
            vaccine_name: self.vaccine_name.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ReportFilters {
    pub class: String,
    pub vaccine_name: String,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// Serializes a filter struct into cleaned `(key, value)` pairs.
pub fn clean_filters<F: Serialize>(filters: &F) -> Result<Vec<(String, String)>, PortalError> {
    let pairs = match serde_json::to_value(filters)? {
        Value::Object(fields) => fields
            .into_iter()
            .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
            .collect(),
        _ => Vec::new(),
    };
    Ok(pairs)
}

/// `limit`, `offset` and then every non-empty filter.
pub fn list_query<F: Serialize>(
    pagination: Pagination,
    filters: &F,
) -> Result<Vec<(String, String)>, PortalError> {
    let mut pairs = pagination.query_pairs();
    pairs.extend(clean_filters(filters)?);
    Ok(pairs)
}

pub fn to_query_string(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(pairs: &[(String, String)]) -> Vec<&str> {
        let mut keys: Vec<&str> = pairs.iter().map(|(key, _)| key.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn empty_filters_produce_no_pairs() {
        let pairs = clean_filters(&StudentFilters::default()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn false_and_zero_survive_cleaning() {
        let pairs = clean_filters(&json!({
            "vaccination": false,
            "doses": 0,
            "name": "",
            "class": null,
        }))
        .unwrap();
        assert_eq!(keys(&pairs), vec!["doses", "vaccination"]);
        assert!(pairs.contains(&("vaccination".to_string(), "false".to_string())));
    }

    #[test]
    fn list_query_puts_paging_first() {
        let filters = StudentFilters {
            name: "ann lee".into(),
            vaccination: Some(true),
            ..StudentFilters::default()
        };
        let pairs = list_query(Pagination::new(3, 5), &filters).unwrap();
        assert_eq!(
            to_query_string(&pairs),
            "limit=5&offset=10&name=ann+lee&vaccination=true"
        );
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let mut filters = StudentFilters::default();
        let on_page_four = Pagination::new(4, 5);
        let next = filters.set(FilterField::Name, "Asha".into(), on_page_four);
        assert_eq!(next.page, 1);
        assert_eq!(next.limit, 5);
        assert_eq!(filters.name, "Asha");
    }

    #[test]
    fn vaccinated_filter_maps_yes_no_and_either() {
        let mut filters = StudentFilters::default();
        let paging = Pagination::first(5);
        filters.set(FilterField::Vaccinated, "No".into(), paging);
        assert_eq!(filters.vaccination, Some(false));
        filters.set(FilterField::Vaccinated, "Yes".into(), paging);
        assert_eq!(filters.vaccination, Some(true));
        filters.set(FilterField::Vaccinated, String::new(), paging);
        assert_eq!(filters.vaccination, None);
    }

    #[test]
    fn report_keeps_only_class_and_vaccine() {
        let filters = StudentFilters {
            name: "Ann".into(),
            class: "Grade 4".into(),
            roll_no: "17".into(),
            vaccine_name: "covaxin".into(),
            vaccination: Some(false),
            ..StudentFilters::default()
        };
        let pairs = clean_filters(&filters.report_filters()).unwrap();
        assert_eq!(keys(&pairs), vec!["class", "vaccine_name"]);
    }
}
