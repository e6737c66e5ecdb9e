//! Labelled form controls with inline error text.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn error_text(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <div class="field-error">{ message.to_string() }</div> },
        None => html! {},
    }
}

fn field_class(error: Option<&str>) -> Classes {
    classes!("field", error.map(|_| "invalid"))
}

pub struct InputSpec<'a> {
    pub label: &'a str,
    pub value: String,
    pub input_type: &'a str,
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
    pub disabled: bool,
    pub min: Option<String>,
}

impl<'a> InputSpec<'a> {
    pub fn text(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            input_type: "text",
            placeholder: "",
            error: None,
            disabled: false,
            min: None,
        }
    }

    pub fn kind(mut self, input_type: &'a str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn min(mut self, min: Option<String>) -> Self {
        self.min = min;
        self
    }
}

pub fn input_field(spec: InputSpec<'_>, on_input: Callback<String>) -> Html {
    let oninput = on_input.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    html! {
        <label class={field_class(spec.error)}>
            <span class="field-label">{ spec.label.to_string() }</span>
            <input
                type={spec.input_type.to_string()}
                value={spec.value}
                placeholder={spec.placeholder.to_string()}
                disabled={spec.disabled}
                min={spec.min}
                {oninput}
            />
            { error_text(spec.error) }
        </label>
    }
}

/// `<select>` with an empty leading option shown as `placeholder`.
pub fn select_field(
    label: &str,
    options: &[String],
    value: &str,
    placeholder: &str,
    error: Option<&str>,
    disabled: bool,
    on_change: Callback<String>,
) -> Html {
    let onchange = on_change.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    html! {
        <label class={field_class(error)}>
            { if label.is_empty() { html! {} } else { html! { <span class="field-label">{ label.to_string() }</span> } } }
            <select {onchange} disabled={disabled}>
                <option value="" selected={value.is_empty()}>{ placeholder.to_string() }</option>
                { for options.iter().map(|option| html! {
                    <option value={option.clone()} selected={option == value}>{ option.clone() }</option>
                }) }
            </select>
            { error_text(error) }
        </label>
    }
}

/// Multi-select rendered as a checkbox list; toggling emits the option label.
pub fn checkbox_group(
    label: &str,
    options: &[String],
    selected: &[String],
    error: Option<&str>,
    on_toggle: Callback<String>,
) -> Html {
    html! {
        <fieldset class={field_class(error)}>
            <legend class="field-label">{ label.to_string() }</legend>
            <div class="checkbox-grid">
                { for options.iter().map(|option| {
                    let value = option.clone();
                    let onchange = on_toggle.reform(move |_: Event| value.clone());
                    html! {
                        <label class="checkbox">
                            <input type="checkbox" checked={selected.contains(option)} {onchange} />
                            { option.clone() }
                        </label>
                    }
                }) }
            </div>
            { error_text(error) }
        </fieldset>
    }
}

/// Options of a fixed `&str` list as owned labels.
pub fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}
