//! Fixed option lists offered by the forms and filters.

pub const VACCINES: [&str; 3] = ["pfizer shield", "covishield", "covaxin"];

pub const GENDERS: [&str; 2] = ["Male", "Female"];

pub const GRADE_COUNT: u8 = 12;

/// Class labels `Grade 1` through `Grade 12`.
pub fn classes() -> Vec<String> {
    (1..=GRADE_COUNT).map(|grade| format!("Grade {grade}")).collect()
}

pub fn is_known_vaccine(name: &str) -> bool {
    VACCINES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_grades_in_order() {
        let classes = classes();
        assert_eq!(classes.len(), 12);
        assert_eq!(classes.first().map(String::as_str), Some("Grade 1"));
        assert_eq!(classes.last().map(String::as_str), Some("Grade 12"));
    }

    #[test]
    fn vaccine_lookup_is_exact() {
        assert!(is_known_vaccine("covaxin"));
        assert!(!is_known_vaccine("Covaxin"));
        assert!(!is_known_vaccine(""));
    }
}
