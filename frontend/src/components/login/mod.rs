//! Login screen. Credentials are checked by the configured verifier; on
//! success an opaque session token is stored and the parent is told.

use common::session::{self, Credentials};
use common::validation::FieldErrors;
use yew::prelude::*;

use crate::components::fields::{input_field, InputSpec};
use crate::config::portal_config;

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_signed_in: Callback<()>,
}

pub struct LoginPage {
    credentials: Credentials,
    errors: FieldErrors,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            credentials: Credentials::default(),
            errors: FieldErrors::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(username) => self.credentials.username = username,
            Msg::SetPassword(password) => self.credentials.password = password,
            Msg::Submit => {
                match session::login(&portal_config().credentials, &self.credentials) {
                    Ok(token) => {
                        crate::session::store(&token);
                        self.errors = FieldErrors::default();
                        ctx.props().on_signed_in.emit(());
                    }
                    Err(errors) => self.errors = errors,
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-page">
                <h1 class="login-title">{ "Login" }</h1>
                <form class="card login-card" {onsubmit}>
                    { input_field(
                        InputSpec::text("Username", self.credentials.username.clone())
                            .placeholder("Enter your username")
                            .error(self.errors.get("username")),
                        link.callback(Msg::SetUsername),
                    ) }
                    { input_field(
                        InputSpec::text("Password", self.credentials.password.clone())
                            .kind("password")
                            .placeholder("Enter your password")
                            .error(self.errors.get("password")),
                        link.callback(Msg::SetPassword),
                    ) }
                    <button type="submit" class="primary-btn full-width">{ "Login" }</button>
                </form>
            </div>
        }
    }
}
