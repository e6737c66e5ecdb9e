use crate::app::App;

mod api;
mod app;
mod card_grid;
mod components;
mod config;
mod navigation;
mod notify;
mod session;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
