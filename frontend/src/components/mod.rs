pub mod dashboard;
pub mod drives;
pub mod fields;
pub mod header;
pub mod login;
pub mod pagination;
pub mod reports;
pub mod status;
pub mod students;
