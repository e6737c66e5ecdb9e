//! Root component: resolves the current path to a screen, applies the session
//! guard and keeps the address bar in sync with in-app navigation.

use common::route::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html};

use crate::components::dashboard::DashboardPage;
use crate::components::drives::DrivesPage;
use crate::components::header::Header;
use crate::components::login::LoginPage;
use crate::components::reports::ReportsPage;
use crate::components::students::StudentsPage;
use crate::{navigation, session};

pub enum Msg {
    Navigate(Route),
    /// Back/forward moved the address bar.
    PathChanged,
    SignedIn,
    SignedOut,
}

pub struct App {
    route: Route,
    popstate: Option<Closure<dyn Fn()>>,
}

impl App {
    /// Shows `requested`, or the login screen when it needs a session we do
    /// not have. The address bar follows whatever is actually shown.
    fn show(&mut self, requested: Route, push: bool) {
        let shown = requested.guard(session::has_session());
        if shown != requested || !push {
            navigation::replace(shown);
        } else {
            navigation::push(shown);
        }
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(shown.title());
        }
        self.route = shown;
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn()>::new(move || link.send_message(Msg::PathChanged));
        let registered = web_sys::window()
            .map(|window| {
                window
                    .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                    .is_ok()
            })
            .unwrap_or(false);

        let mut app = Self {
            route: Route::Login,
            popstate: registered.then_some(popstate),
        };
        app.show(navigation::current_route(), false);
        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                self.show(route, true);
            }
            Msg::PathChanged => self.show(navigation::current_route(), false),
            Msg::SignedIn => self.show(Route::Dashboard, true),
            Msg::SignedOut => {
                session::clear();
                self.show(Route::Login, true);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let page = match self.route {
            Route::Login => {
                return html! { <LoginPage on_signed_in={link.callback(|_| Msg::SignedIn)} /> };
            }
            Route::Dashboard => html! { <DashboardPage /> },
            Route::Students => html! { <StudentsPage /> },
            Route::Drives => html! { <DrivesPage /> },
            Route::Reports => html! { <ReportsPage /> },
            Route::NotFound => html! {
                <section class="card not-found">
                    <h2>{ "Not found" }</h2>
                    <p>{ "The page you are looking for does not exist." }</p>
                </section>
            },
        };

        html! {
            <div class="portal">
                <Header
                    current={self.route}
                    on_navigate={link.callback(Msg::Navigate)}
                    on_logout={link.callback(|_| Msg::SignedOut)}
                />
                <main class="portal-main">{ page }</main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(popstate)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok();
        }
    }
}
