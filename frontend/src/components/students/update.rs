//! Update function for the student management screen.
//!
//! Writes share one `SaveFlag`; a second submit while one is pending is
//! ignored. Successful writes close the dialog and refetch the current page,
//! failures are notified and leave the dialog open with its values.

use common::model::import_record::ImportKind;
use common::model::student::{StudentForm, VaccinateForm};
use common::resource::FetchOutcome;
use common::validation::{validate_student, validate_vaccination};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::{Msg, StudentField};
use super::state::{Dialog, StudentsPage};
use crate::api;
use crate::notify::{notify, notify_failure, notify_info, notify_success, Tone};

pub fn update(page: &mut StudentsPage, ctx: &Context<StudentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch => {
            let token = page.list.begin_fetch();
            let pagination = page.pagination;
            let filters = page.filters.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::students::list(pagination, filters).await;
                link.send_message(Msg::Loaded(token, result));
            });
            true
        }
        Msg::Loaded(token, result) => match page.list.finish_fetch(token, result) {
            FetchOutcome::Stale => {
                log!("students: dropped stale page");
                false
            }
            FetchOutcome::Failed => {
                if let Some(failure) = &page.list.error {
                    error!(format!("students: {failure}"));
                }
                true
            }
            FetchOutcome::Applied => true,
        },
        Msg::SetPage(number) => {
            page.pagination = page.pagination.with_page(number);
            ctx.link().send_message(Msg::Fetch);
            false
        }
        Msg::SetFilter(field, value) => {
            page.pagination = page.filters.set(field, value, page.pagination);
            ctx.link().send_message(Msg::Fetch);
            true
        }

        Msg::OpenAdd => {
            page.close_dialog();
            page.dialog = Dialog::Student;
            true
        }
        Msg::OpenEdit(student) => {
            page.close_dialog();
            page.form = StudentForm::from_student(&student);
            page.pristine = page.form.clone();
            page.dialog = Dialog::Student;
            true
        }
        Msg::CloseDialog => {
            if page.save.is_saving() {
                return false;
            }
            page.close_dialog();
            true
        }
        Msg::EditField(field, value) => {
            let editing = page.form.is_editing();
            match field {
                StudentField::Name => page.form.name = value,
                StudentField::Class => page.form.class = value,
                StudentField::PhoneNo => page.form.phone_no = value,
                // Locked while editing an existing record.
                StudentField::Gender if !editing => page.form.gender = value,
                StudentField::RollNo if !editing => page.form.roll_no = value,
                StudentField::Gender | StudentField::RollNo => return false,
            }
            true
        }
        Msg::Submit => {
            if let Err(errors) = validate_student(&page.form) {
                page.form_errors = errors;
                return true;
            }
            page.form_errors = Default::default();
            submit_student(page, ctx);
            true
        }
        Msg::Saved(result) => {
            page.save.finish();
            match result {
                Ok(success) => {
                    notify_success(&success.message);
                    page.close_dialog();
                    ctx.link().send_message(Msg::Fetch);
                }
                Err(failure) => notify_failure(&failure),
            }
            true
        }

        Msg::OpenVaccinate(student) => {
            if student.is_vaccinated() {
                return false;
            }
            page.close_dialog();
            page.vaccinate = VaccinateForm::for_student(&student);
            page.vaccinate_name = student.name;
            page.dialog = Dialog::Vaccinate;
            true
        }
        Msg::SetDriveId(raw) => {
            page.vaccinate.drive_id = raw.trim().parse().ok();
            true
        }
        Msg::SubmitVaccination => {
            let record = match validate_vaccination(&page.vaccinate) {
                Ok(record) => record,
                Err(errors) => {
                    page.vaccinate_errors = errors;
                    return true;
                }
            };
            if !page.save.try_begin() {
                return false;
            }
            page.vaccinate_errors = Default::default();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::students::vaccinate(record).await;
                link.send_message(Msg::Vaccinated(result));
            });
            true
        }
        Msg::Vaccinated(result) => {
            page.save.finish();
            match result {
                Ok(success) => {
                    notify_success(&success.message);
                    page.close_dialog();
                    ctx.link().send_message(Msg::Fetch);
                }
                Err(failure) => notify_failure(&failure),
            }
            true
        }

        Msg::Import(kind, file) => {
            if !ImportKind::accepts(&file.name()) {
                notify(
                    Tone::Error,
                    "Unsupported file",
                    "Only .xlsx spreadsheets can be imported",
                );
                return false;
            }
            if !page.save.try_begin() {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::students::bulk_upload(kind, file).await;
                link.send_message(Msg::Imported(kind, result));
            });
            true
        }
        Msg::Imported(kind, result) => {
            page.save.finish();
            match result {
                Ok(success) => {
                    notify_success(&success.message);
                    notify_info(&format!(
                        "{} is being processed. Check its status under Reports.",
                        kind.label()
                    ));
                }
                Err(failure) => notify_failure(&failure),
            }
            true
        }

        Msg::OpenReport => {
            page.close_dialog();
            page.dialog = Dialog::Report;
            true
        }
        Msg::GenerateReport => {
            if !page.save.try_begin() {
                return false;
            }
            page.report = None;
            let filters = page.filters.report_filters();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::students::generate_report(filters).await;
                link.send_message(Msg::ReportReady(result));
            });
            true
        }
        Msg::ReportReady(result) => {
            page.save.finish();
            if let Err(failure) = &result {
                notify_failure(failure);
            }
            // A report that arrives after the dialog closed is dropped.
            if page.dialog == Dialog::Report {
                page.report = Some(result);
            }
            true
        }
    }
}

/// Posts the full record when adding, or only the changed fields when editing.
fn submit_student(page: &mut StudentsPage, ctx: &Context<StudentsPage>) {
    let link = ctx.link().clone();

    if !page.form.is_editing() {
        if !page.save.try_begin() {
            return;
        }
        let student = page.form.to_new_student();
        spawn_local(async move {
            let result = api::students::add(student).await;
            link.send_message(Msg::Saved(result));
        });
        return;
    }

    let patch = match page.form.edit_patch(&page.pristine) {
        Ok(patch) => patch,
        Err(err) => {
            error!(format!("students: could not diff form: {err}"));
            notify(Tone::Error, "Update failed", &err.to_string());
            return;
        }
    };
    if !page.save.try_begin() {
        return;
    }
    log!(format!("students: patching {:?}", patch.changed_fields()));
    spawn_local(async move {
        let result = api::students::update(patch).await;
        link.send_message(Msg::Saved(result));
    });
}
