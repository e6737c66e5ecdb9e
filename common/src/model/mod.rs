//! Records exchanged verbatim with the student and vaccine services.

pub mod catalog;
pub mod drive;
pub mod import_record;
pub mod student;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as a missing key: as the field's
/// default. Pair with `#[serde(default)]` so absent keys are covered too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One page of a remote list, as returned by the `limit`/`offset` endpoints.
///
/// `total` is the server-side count of matching records and only feeds the
/// page count; endpoints that return unpaged lists leave it at zero. An empty
/// search may come back as `{"data": null, "total": null}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_response;
    use crate::model::student::Student;

    #[test]
    fn null_data_is_an_empty_page() {
        let page = decode_response::<Page<Student>>(200, r#"{"data":null,"total":0}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn null_total_counts_as_zero() {
        let page: Page<Student> =
            serde_json::from_str(r#"{"data":[{"id":1,"name":"Asha"}],"total":null}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn missing_keys_still_default() {
        let page: Page<Student> = serde_json::from_str("{}").unwrap();
        assert_eq!(page, Page::default());
    }
}
