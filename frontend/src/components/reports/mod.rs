//! Import and report job status list.
//!
//! Bulk imports are acknowledged immediately by the student service and
//! processed later; their progress is only visible here.

use common::envelope::ApiResult;
use common::model::import_record::ImportRecordStatus;
use common::model::Page;
use common::pagination::Pagination;
use common::resource::{FetchOutcome, ListState};
use common::sequence::RequestToken;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::pagination::PaginationControl;
use crate::components::status::{error_banner, skeleton_rows};
use crate::config::portal_config;

pub enum Msg {
    Fetch,
    Loaded(RequestToken, ApiResult<Page<ImportRecordStatus>>),
    SetPage(u32),
}

pub struct ReportsPage {
    list: ListState<ImportRecordStatus>,
    pagination: Pagination,
    loaded: bool,
}

const COLUMNS: [&str; 8] = [
    "ID",
    "File",
    "Status",
    "Link",
    "Processed Records",
    "Total Records",
    "Request Type",
    "Error",
];

impl Component for ReportsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            list: ListState::default(),
            pagination: Pagination::first(portal_config().page_size),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let token = self.list.begin_fetch();
                let pagination = self.pagination;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::imports::list(pagination).await;
                    link.send_message(Msg::Loaded(token, result));
                });
                true
            }
            Msg::Loaded(token, result) => match self.list.finish_fetch(token, result) {
                FetchOutcome::Stale => {
                    log!("import records: dropped stale page");
                    false
                }
                FetchOutcome::Failed => {
                    if let Some(failure) = &self.list.error {
                        error!(format!("import records: {failure}"));
                    }
                    true
                }
                FetchOutcome::Applied => true,
            },
            Msg::SetPage(page) => {
                self.pagination = self.pagination.with_page(page);
                ctx.link().send_message(Msg::Fetch);
                false
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
        let config = portal_config();

        let rows = if self.list.loading {
            skeleton_rows(COLUMNS.len(), self.pagination.limit as usize)
        } else {
            html! {
                { for self.list.records.iter().map(|record| html! {
                    <tr key={record.request_id.clone()}>
                        <td>{ record.request_id.clone() }</td>
                        <td>{ record.file_name.clone() }</td>
                        <td>{ record.status.clone() }</td>
                        <td>
                            if record.file_path.is_empty() {
                                { "-" }
                            } else {
                                <a href={config.public_link(&record.file_path)} target="_blank" rel="noreferrer">
                                    { "Download" }
                                </a>
                            }
                        </td>
                        <td>{ record.processed_records }</td>
                        <td>{ record.total_records }</td>
                        <td>{ record.request_type.clone() }</td>
                        <td>{ record.error_message.clone() }</td>
                    </tr>
                }) }
            }
        };

        html! {
            <section class="card">
                { error_banner(self.list.error.as_ref(), link.callback(|_| Msg::Fetch)) }
                <table class="data-table">
                    <thead>
                        <tr>{ for COLUMNS.iter().map(|column| html! { <th>{ *column }</th> }) }</tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
                <PaginationControl
                    page={self.pagination.page}
                    total_pages={self.pagination.total_pages(self.list.total)}
                    on_change={link.callback(Msg::SetPage)}
                />
            </section>
        }
    }
}
