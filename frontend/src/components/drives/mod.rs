//! Vaccination drive scheduling.
//!
//! New drives must be dated at least the lead time ahead; existing drives can
//! be edited until their date has passed, and edits send only changed fields.

use chrono::{Local, Utc};
use common::diff::dirty_patch;
use common::drive_date;
use common::envelope::{ApiResult, Success};
use common::model::catalog::{self, VACCINES};
use common::model::drive::{DriveForm, VaccineDrive};
use common::model::Page;
use common::resource::{FetchOutcome, ListState, SaveFlag};
use common::sequence::RequestToken;
use common::validation::{validate_drive, FieldErrors};
use gloo_console::{error, log};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::fields::{checkbox_group, input_field, owned, select_field, InputSpec};
use crate::components::status::{error_banner, skeleton_rows};
use crate::notify::{notify, notify_failure, notify_success, Tone};
use crate::tops_sheet::modal_sheet::ModalSheet;

pub enum Msg {
    Fetch,
    Loaded(RequestToken, ApiResult<Page<VaccineDrive>>),
    OpenAdd,
    OpenEdit(VaccineDrive),
    Close,
    SetVaccine(String),
    SetDate(String),
    SetDoses(String),
    ToggleClass(String),
    Submit,
    Saved(ApiResult<Success<VaccineDrive>>),
}

pub struct DrivesPage {
    list: ListState<VaccineDrive>,
    save: SaveFlag,
    dialog_open: bool,
    form: DriveForm,
    /// Snapshot of the drive being edited; `None` while adding.
    pristine: Option<DriveForm>,
    errors: FieldErrors,
    loaded: bool,
}

const COLUMNS: [&str; 6] = ["ID", "Vaccine", "Date", "Doses", "Classes", "Actions"];

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

impl DrivesPage {
    fn reset_form(&mut self) {
        self.dialog_open = false;
        self.form = DriveForm::new_drive(today());
        self.pristine = None;
        self.errors = FieldErrors::default();
    }

    fn submit(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        match self.pristine.clone() {
            Some(pristine) => {
                let patch = match dirty_patch(&pristine, &self.form) {
                    Ok(patch) => patch,
                    Err(err) => {
                        error!(format!("drives: could not diff form: {err}"));
                        notify(Tone::Error, "Update failed", &err.to_string());
                        return;
                    }
                };
                if !self.save.try_begin() {
                    return;
                }
                if !patch.has_changes() {
                    log!("drives: nothing changed, sending id only");
                }
                spawn_local(async move {
                    link.send_message(Msg::Saved(api::drives::update(patch).await));
                });
            }
            None => {
                let drive = match self.form.to_new_drive() {
                    Ok(drive) => drive,
                    Err(err) => {
                        self.errors.insert("drive_date", err.to_string());
                        return;
                    }
                };
                if !self.save.try_begin() {
                    return;
                }
                spawn_local(async move {
                    link.send_message(Msg::Saved(api::drives::add(drive).await));
                });
            }
        }
    }
}

impl Component for DrivesPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            list: ListState::default(),
            save: SaveFlag::default(),
            dialog_open: false,
            form: DriveForm::new_drive(today()),
            pristine: None,
            errors: FieldErrors::default(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let token = self.list.begin_fetch();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::drives::list().await;
                    link.send_message(Msg::Loaded(token, result));
                });
                true
            }
            Msg::Loaded(token, result) => match self.list.finish_fetch(token, result) {
                FetchOutcome::Stale => {
                    log!("drives: dropped stale list");
                    false
                }
                FetchOutcome::Failed => {
                    if let Some(failure) = &self.list.error {
                        error!(format!("drives: {failure}"));
                    }
                    true
                }
                FetchOutcome::Applied => true,
            },
            Msg::OpenAdd => {
                self.reset_form();
                self.dialog_open = true;
                true
            }
            Msg::OpenEdit(drive) => {
                if !drive_date::is_editable(&drive.drive_date, Utc::now()) {
                    notify(Tone::Info, "Drive closed", "Past drives cannot be edited");
                    return false;
                }
                self.reset_form();
                self.form = DriveForm::from_drive(&drive);
                self.pristine = Some(self.form.clone());
                self.dialog_open = true;
                true
            }
            Msg::Close => {
                if self.save.is_saving() {
                    return false;
                }
                self.reset_form();
                true
            }
            Msg::SetVaccine(name) => {
                self.form.vaccine_name = name;
                true
            }
            Msg::SetDate(date) => {
                self.form.drive_date = date;
                true
            }
            Msg::SetDoses(raw) => {
                self.form.doses = raw.trim().parse().unwrap_or(0);
                true
            }
            Msg::ToggleClass(class) => {
                if let Some(position) = self.form.classes.iter().position(|c| *c == class) {
                    self.form.classes.remove(position);
                } else {
                    self.form.classes.push(class);
                }
                true
            }
            Msg::Submit => {
                if let Err(errors) = validate_drive(&self.form, today()) {
                    self.errors = errors;
                    return true;
                }
                self.errors = FieldErrors::default();
                self.submit(ctx);
                true
            }
            Msg::Saved(result) => {
                self.save.finish();
                match result {
                    Ok(success) => {
                        notify_success(&success.message);
                        self.reset_form();
                        ctx.link().send_message(Msg::Fetch);
                    }
                    Err(failure) => notify_failure(&failure),
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Fetch);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let rows = if self.list.loading {
            skeleton_rows(COLUMNS.len(), 5)
        } else if self.list.records.is_empty() {
            html! {
                <tr><td class="empty" colspan={COLUMNS.len().to_string()}>{ "No drives scheduled" }</td></tr>
            }
        } else {
            let now = Utc::now();
            html! { { for self.list.records.iter().map(|drive| drive_row(drive, now, link)) } }
        };

        html! {
            <section class="card">
                <div class="toolbar">
                    <h2>{ "Vaccination Drives" }</h2>
                    <button class="primary-btn" onclick={link.callback(|_| Msg::OpenAdd)}>{ "Schedule Drive" }</button>
                </div>
                { error_banner(self.list.error.as_ref(), link.callback(|_| Msg::Fetch)) }
                <table class="data-table">
                    <thead>
                        <tr>{ for COLUMNS.iter().map(|column| html! { <th>{ *column }</th> }) }</tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
                { self.dialog(link) }
            </section>
        }
    }
}

fn drive_row(drive: &VaccineDrive, now: chrono::DateTime<Utc>, link: &Scope<DrivesPage>) -> Html {
    let editable = drive_date::is_editable(&drive.drive_date, now);
    let onclick = {
        let drive = drive.clone();
        link.callback(move |_| Msg::OpenEdit(drive.clone()))
    };
    let id = drive.id.map(|id| id.to_string()).unwrap_or_default();

    html! {
        <tr key={id.clone()}>
            <td>{ id }</td>
            <td>{ drive.vaccine_name.clone() }</td>
            <td>{ drive_date::display(&drive.drive_date) }</td>
            <td>{ drive.doses }</td>
            <td>{ drive.classes.clone() }</td>
            <td class="row-actions">
                <button
                    class="secondary-btn"
                    disabled={!editable}
                    title={if editable { "" } else { "Past drives cannot be edited" }}
                    {onclick}
                >
                    { "Edit" }
                </button>
            </td>
        </tr>
    }
}

impl DrivesPage {
    fn dialog(&self, link: &Scope<Self>) -> Html {
        let form = &self.form;
        let editing = form.is_editing();
        let saving = self.save.is_saving();
        // Edits keep their original date, so the floor only guides new drives.
        let min_date = (!editing).then(|| {
            drive_date::creation_floor(today())
                .format("%Y-%m-%d")
                .to_string()
        });
        let doses = if form.doses == 0 {
            String::new()
        } else {
            form.doses.to_string()
        };
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <ModalSheet
                open={self.dialog_open}
                title={if editing { "Edit Drive" } else { "Schedule Drive" }}
                on_close={link.callback(|_| Msg::Close)}
            >
                <form class="sheet-form" {onsubmit}>
                    { select_field(
                        "Vaccine",
                        &owned(&VACCINES),
                        &form.vaccine_name,
                        "Select vaccine",
                        self.errors.get("vaccine_name"),
                        false,
                        link.callback(Msg::SetVaccine),
                    ) }
                    { input_field(
                        InputSpec::text("Drive Date", form.drive_date.clone())
                            .kind("date")
                            .min(min_date)
                            .error(self.errors.get("drive_date")),
                        link.callback(Msg::SetDate),
                    ) }
                    { input_field(
                        InputSpec::text("Doses", doses)
                            .kind("number")
                            .placeholder("Number of doses")
                            .min(Some("1".to_string()))
                            .error(self.errors.get("doses")),
                        link.callback(Msg::SetDoses),
                    ) }
                    { checkbox_group(
                        "Classes",
                        &catalog::classes(),
                        &form.classes,
                        self.errors.get("classes"),
                        link.callback(Msg::ToggleClass),
                    ) }
                    <button type="submit" class="primary-btn full-width" disabled={saving}>
                        { if saving { "Saving..." } else if editing { "Update" } else { "Save" } }
                    </button>
                </form>
            </ModalSheet>
        }
    }
}
