//! Dashboard: student counts and upcoming drives.
//!
//! The two cards load from different services and never wait on each other;
//! a failing drive list leaves the count cards intact and vice versa.

use chrono::Local;
use common::dashboard::{self, CardState, DashboardCounts};
use common::drive_date;
use common::envelope::ApiResult;
use common::model::drive::VaccineDrive;
use common::model::Page;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::card_grid::CardGrid;

pub enum Msg {
    CountsLoaded(ApiResult<DashboardCounts>),
    DrivesLoaded(ApiResult<Page<VaccineDrive>>),
}

pub struct DashboardPage {
    counts: CardState<DashboardCounts>,
    drives: CardState<Vec<VaccineDrive>>,
    loaded: bool,
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            counts: CardState::Loading,
            drives: CardState::Loading,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CountsLoaded(result) => {
                self.counts = match result {
                    Ok(counts) => CardState::Ready(counts),
                    Err(failure) => {
                        error!(format!("dashboard counts: {failure}"));
                        CardState::Failed(failure.message)
                    }
                };
            }
            Msg::DrivesLoaded(result) => {
                self.drives = match result {
                    Ok(page) => CardState::Ready(dashboard::upcoming_drives(
                        &page.data,
                        Local::now().date_naive(),
                    )),
                    Err(failure) => {
                        error!(format!("upcoming drives: {failure}"));
                        CardState::Failed(failure.message)
                    }
                };
            }
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::CountsLoaded(api::dashboard::counts().await));
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::DrivesLoaded(api::drives::list().await));
            });
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section>
                <CardGrid columns={2}>
                    { count_card("Total Students", "groups", &self.counts, |counts| counts.total_students.to_string()) }
                    { count_card("Vaccinated Students", "vaccines", &self.counts, DashboardCounts::vaccinated_summary) }
                </CardGrid>
                <h3>{ "Upcoming Vaccination Drives" }</h3>
                <div class="card">{ upcoming_card(&self.drives) }</div>
            </section>
        }
    }
}

fn loader() -> Html {
    html! { <div class="loader" aria-label="loading"></div> }
}

fn failed(message: &str) -> Html {
    let text = if message.is_empty() { "Error" } else { message };
    html! { <span class="error-text">{ text.to_string() }</span> }
}

fn count_card(
    title: &str,
    icon: &str,
    state: &CardState<DashboardCounts>,
    render: impl Fn(&DashboardCounts) -> String,
) -> Html {
    let body = match state {
        CardState::Loading => loader(),
        CardState::Failed(message) => failed(message),
        CardState::Ready(counts) => html! { { render(counts) } },
    };

    html! {
        <div class="card stat-card">
            <div class="stat-title">
                <span>{ title.to_string() }</span>
                <i class="material-icons">{ icon.to_string() }</i>
            </div>
            <div class="stat-value">{ body }</div>
        </div>
    }
}

fn upcoming_card(state: &CardState<Vec<VaccineDrive>>) -> Html {
    match state {
        CardState::Loading => loader(),
        CardState::Failed(message) => failed(message),
        CardState::Ready(drives) if drives.is_empty() => html! {
            <p>{ "No vaccination drives scheduled in the next 30 days." }</p>
        },
        CardState::Ready(drives) => html! {
            <table class="data-table">
                <thead>
                    <tr><th>{ "Vaccine Name" }</th><th>{ "Date" }</th><th>{ "Classes" }</th></tr>
                </thead>
                <tbody>
                    { for drives.iter().map(|drive| html! {
                        <tr key={drive.id.unwrap_or_default()}>
                            <td>{ drive.vaccine_name.clone() }</td>
                            <td>{ drive_date::display(&drive.drive_date) }</td>
                            <td>{ drive.classes.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    }
}
