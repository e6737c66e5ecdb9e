//! Loading and failure placeholders shared by the list screens.

use common::envelope::Failure;
use yew::prelude::*;

/// Banner for a failed list read, with a retry action. Renders nothing when
/// there is no error.
pub fn error_banner(error: Option<&Failure>, on_retry: Callback<MouseEvent>) -> Html {
    match error {
        Some(failure) => html! {
            <div class="error-banner" role="alert">
                <strong>{ failure.error.clone() }</strong>
                <span>{ failure.message.clone() }</span>
                <button class="secondary-btn" onclick={on_retry}>{ "Retry" }</button>
            </div>
        },
        None => html! {},
    }
}

pub fn skeleton_rows(columns: usize, rows: usize) -> Html {
    html! {
        { for (0..rows.max(1)).map(|_| html! {
            <tr class="skeleton-row">
                { for (0..columns).map(|_| html! { <td><div class="skeleton"></div></td> }) }
            </tr>
        }) }
    }
}
