//! View rendering for the student management screen: filter bar, toolbar
//! with the two spreadsheet imports and report generation, the paginated
//! table, and the three dialogs.

use common::model::catalog::{self, GENDERS, VACCINES};
use common::model::import_record::ImportKind;
use common::model::student::Student;
use common::query::FilterField;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Msg, StudentField};
use super::state::{Dialog, StudentsPage};
use crate::components::fields::{input_field, owned, select_field, InputSpec};
use crate::components::pagination::PaginationControl;
use crate::components::status::{error_banner, skeleton_rows};
use crate::config::portal_config;
use crate::tops_sheet::modal_sheet::ModalSheet;

const COLUMNS: [&str; 9] = [
    "Name",
    "Class",
    "Gender",
    "Roll No",
    "Phone No",
    "Vaccinated",
    "Vaccine",
    "Vaccine Date",
    "Actions",
];

pub fn view(page: &StudentsPage, ctx: &Context<StudentsPage>) -> Html {
    let link = ctx.link();

    html! {
        <section class="card">
            <div class="toolbar">
                <h2>{ "Students" }</h2>
                <div class="toolbar-actions">
                    <button class="primary-btn" onclick={link.callback(|_| Msg::OpenAdd)}>{ "Add Student" }</button>
                    { import_button(link, ImportKind::Students, "Import Students", page.save.is_saving()) }
                    { import_button(link, ImportKind::VaccineRecords, "Import Vaccinations", page.save.is_saving()) }
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::OpenReport)}>{ "Generate Report" }</button>
                </div>
            </div>

            { filter_bar(page, link) }
            { error_banner(page.list.error.as_ref(), link.callback(|_| Msg::Fetch)) }

            <table class="data-table">
                <thead>
                    <tr>{ for COLUMNS.iter().map(|column| html! { <th>{ *column }</th> }) }</tr>
                </thead>
                <tbody>{ table_rows(page, link) }</tbody>
            </table>
            <PaginationControl
                page={page.pagination.page}
                total_pages={page.pagination.total_pages(page.list.total)}
                on_change={link.callback(Msg::SetPage)}
            />

            { student_dialog(page, link) }
            { vaccinate_dialog(page, link) }
            { report_dialog(page, link) }
        </section>
    }
}

fn filter_bar(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let filters = &page.filters;
    let vaccinated = match filters.vaccination {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "",
    };
    let set = |field: FilterField| link.callback(move |value: String| Msg::SetFilter(field, value));

    html! {
        <div class="filter-bar">
            { input_field(
                InputSpec::text("", filters.name.clone()).placeholder("Search by name"),
                set(FilterField::Name),
            ) }
            { select_field("", &catalog::classes(), &filters.class, "All classes", None, false, set(FilterField::Class)) }
            { input_field(
                InputSpec::text("", filters.roll_no.clone()).placeholder("Roll No"),
                set(FilterField::RollNo),
            ) }
            { select_field("", &owned(&["Yes", "No"]), vaccinated, "Vaccinated?", None, false, set(FilterField::Vaccinated)) }
            { select_field("", &owned(&VACCINES), &filters.vaccine_name, "Any vaccine", None, false, set(FilterField::VaccineName)) }
        </div>
    }
}

fn table_rows(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    if page.list.loading {
        return skeleton_rows(COLUMNS.len(), page.pagination.limit as usize);
    }
    if page.list.records.is_empty() {
        return html! {
            <tr><td class="empty" colspan={COLUMNS.len().to_string()}>{ "No students found" }</td></tr>
        };
    }
    html! {
        { for page.list.records.iter().map(|student| student_row(student, link)) }
    }
}

fn student_row(student: &Student, link: &Scope<StudentsPage>) -> Html {
    let vaccinated = student.is_vaccinated();
    let edit = {
        let student = student.clone();
        link.callback(move |_| Msg::OpenEdit(student.clone()))
    };
    let vaccinate = {
        let student = student.clone();
        link.callback(move |_| Msg::OpenVaccinate(student.clone()))
    };
    let dash = || "-".to_string();

    html! {
        <tr key={student.id.map(|id| id.to_string()).unwrap_or_else(|| student.roll_no.clone())}>
            <td>{ student.name.clone() }</td>
            <td>{ student.class.clone() }</td>
            <td>{ student.gender.clone() }</td>
            <td>{ student.roll_no.clone() }</td>
            <td>{ student.phone_no.clone() }</td>
            <td>
                <span class={classes!("badge", if vaccinated { "badge-ok" } else { "badge-pending" })}>
                    { if vaccinated { "Yes" } else { "No" } }
                </span>
            </td>
            <td>{ student.vaccine_name.clone().unwrap_or_else(dash) }</td>
            <td>{ student.vaccine_date.as_deref().map(common::drive_date::display).unwrap_or_else(dash) }</td>
            <td class="row-actions">
                <button class="secondary-btn" onclick={edit}>{ "Edit" }</button>
                <button class="primary-btn" disabled={vaccinated} onclick={vaccinate}>{ "Vaccinate" }</button>
            </td>
        </tr>
    }
}

/// File picker styled as a button. The input is cleared after each pick so
/// the same file can be chosen again.
fn import_button(link: &Scope<StudentsPage>, kind: ImportKind, label: &str, busy: bool) -> Html {
    let onchange = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        file.map(|file| Msg::Import(kind, file))
    });

    html! {
        <label class={classes!("secondary-btn", "file-btn", busy.then_some("disabled"))}>
            { label.to_string() }
            <input type="file" accept=".xlsx" hidden=true disabled={busy} {onchange} />
        </label>
    }
}

fn student_dialog(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let form = &page.form;
    let errors = &page.form_errors;
    let editing = form.is_editing();
    let saving = page.save.is_saving();
    let edit = |field: StudentField| link.callback(move |value: String| Msg::EditField(field, value));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <ModalSheet
            open={page.dialog == Dialog::Student}
            title={if editing { "Edit Student" } else { "Add Student" }}
            on_close={link.callback(|_| Msg::CloseDialog)}
        >
            <form class="sheet-form" {onsubmit}>
                { input_field(
                    InputSpec::text("Name", form.name.clone())
                        .placeholder("Student name")
                        .error(errors.get("name")),
                    edit(StudentField::Name),
                ) }
                { select_field("Class", &catalog::classes(), &form.class, "Select class", errors.get("class"), false, edit(StudentField::Class)) }
                { select_field("Gender", &owned(&GENDERS), &form.gender, "Select gender", errors.get("gender"), editing, edit(StudentField::Gender)) }
                { input_field(
                    InputSpec::text("Roll No", form.roll_no.clone())
                        .error(errors.get("roll_no"))
                        .disabled(editing),
                    edit(StudentField::RollNo),
                ) }
                { input_field(
                    InputSpec::text("Phone No", form.phone_no.clone())
                        .kind("tel")
                        .error(errors.get("phone_no")),
                    edit(StudentField::PhoneNo),
                ) }
                <button type="submit" class="primary-btn full-width" disabled={saving}>
                    { if saving { "Saving..." } else if editing { "Update" } else { "Save" } }
                </button>
            </form>
        </ModalSheet>
    }
}

fn vaccinate_dialog(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let saving = page.save.is_saving();
    let drive_id = page
        .vaccinate
        .drive_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    let student_id = page
        .vaccinate
        .student_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitVaccination
    });

    html! {
        <ModalSheet
            open={page.dialog == Dialog::Vaccinate}
            title={format!("Vaccinate {}", page.vaccinate_name)}
            on_close={link.callback(|_| Msg::CloseDialog)}
        >
            <form class="sheet-form" {onsubmit}>
                { input_field(
                    InputSpec::text("Student ID", student_id)
                        .error(page.vaccinate_errors.get("student_id"))
                        .disabled(true),
                    Callback::noop(),
                ) }
                { input_field(
                    InputSpec::text("Drive ID", drive_id)
                        .kind("number")
                        .placeholder("Enter drive id")
                        .error(page.vaccinate_errors.get("drive_id")),
                    link.callback(Msg::SetDriveId),
                ) }
                <button type="submit" class="primary-btn full-width" disabled={saving}>
                    { if saving { "Saving..." } else { "Vaccinate" } }
                </button>
            </form>
        </ModalSheet>
    }
}

fn report_dialog(page: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let saving = page.save.is_saving();
    let filters = page.filters.report_filters();
    let scope = |value: &str| if value.is_empty() { "All".to_string() } else { value.to_string() };

    let outcome = match &page.report {
        None => html! {},
        Some(Ok(report)) => html! {
            <a class="primary-btn full-width" href={portal_config().public_link(&report.file)} target="_blank" rel="noreferrer">
                { "Download Report" }
            </a>
        },
        Some(Err(_)) => html! { <p class="field-error">{ "Failed to generate report" }</p> },
    };

    html! {
        <ModalSheet
            open={page.dialog == Dialog::Report}
            title="Generate Report"
            on_close={link.callback(|_| Msg::CloseDialog)}
        >
            <dl class="report-scope">
                <dt>{ "Class" }</dt><dd>{ scope(&filters.class) }</dd>
                <dt>{ "Vaccine" }</dt><dd>{ scope(&filters.vaccine_name) }</dd>
            </dl>
            <button class="primary-btn full-width" disabled={saving} onclick={link.callback(|_| Msg::GenerateReport)}>
                { if saving { "Generating..." } else { "Generate" } }
            </button>
            { outcome }
        </ModalSheet>
    }
}
