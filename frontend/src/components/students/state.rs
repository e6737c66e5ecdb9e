//! State of the student management screen.

use common::envelope::ApiResult;
use common::model::import_record::ReportLink;
use common::model::student::{Student, StudentForm, VaccinateForm};
use common::pagination::Pagination;
use common::query::StudentFilters;
use common::resource::{ListState, SaveFlag};
use common::validation::FieldErrors;

use crate::config::portal_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Closed,
    Student,
    Vaccinate,
    Report,
}

pub struct StudentsPage {
    pub list: ListState<Student>,
    pub filters: StudentFilters,
    pub pagination: Pagination,

    /// Shared by every write on this screen, so only one save, import or
    /// report request runs at a time.
    pub save: SaveFlag,
    pub dialog: Dialog,

    /// Add/edit dialog values and the snapshot taken when it opened.
    pub form: StudentForm,
    pub pristine: StudentForm,
    pub form_errors: FieldErrors,

    pub vaccinate: VaccinateForm,
    pub vaccinate_errors: FieldErrors,
    pub vaccinate_name: String,

    /// Outcome of the last report request while the report dialog is open.
    pub report: Option<ApiResult<ReportLink>>,

    pub loaded: bool,
}

impl StudentsPage {
    pub fn new() -> Self {
        Self {
            list: ListState::default(),
            filters: StudentFilters::default(),
            pagination: Pagination::first(portal_config().page_size),
            save: SaveFlag::default(),
            dialog: Dialog::Closed,
            form: StudentForm::default(),
            pristine: StudentForm::default(),
            form_errors: FieldErrors::default(),
            vaccinate: VaccinateForm::default(),
            vaccinate_errors: FieldErrors::default(),
            vaccinate_name: String::new(),
            report: None,
            loaded: false,
        }
    }

    /// Closes whichever dialog is open and resets its form.
    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
        self.form = StudentForm::default();
        self.pristine = StudentForm::default();
        self.form_errors = FieldErrors::default();
        self.vaccinate = VaccinateForm::default();
        self.vaccinate_errors = FieldErrors::default();
        self.vaccinate_name.clear();
        self.report = None;
    }
}
