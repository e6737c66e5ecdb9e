use common::route::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

/// Title bar with the screen navigation and logout.
pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let logout = props.on_logout.reform(|_: MouseEvent| ());

        html! {
            <header class="portal-header">
                <div class="portal-title-row">
                    <span class="portal-title">{ "School Vaccination Portal" }</span>
                    <button class="icon-btn" aria-label="logout" title="Logout" onclick={logout}>
                        <i class="material-icons">{ "logout" }</i>
                    </button>
                </div>
                <nav class="portal-nav">
                    { for Route::NAVIGATION.into_iter().map(|route| nav_link(route, props)) }
                </nav>
            </header>
        }
    }
}

fn icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "bar_chart",
        Route::Students => "person",
        Route::Drives => "vaccines",
        Route::Reports => "summarize",
        Route::Login | Route::NotFound => "",
    }
}

fn nav_link(route: Route, props: &HeaderProps) -> Html {
    let onclick = props.on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        route
    });
    let class = classes!("nav-btn", (props.current == route).then_some("active"));

    html! {
        <a {class} href={route.path()} {onclick}>
            <i class="material-icons">{ icon(route) }</i>
            <span>{ route.title() }</span>
        </a>
    }
}
