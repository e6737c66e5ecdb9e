//! Transient notifications stacked in the bottom-right corner.

use common::envelope::Failure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const STACK_ID: &str = "notification-stack";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Success => "#2f9e44",
            Tone::Error => "#e03131",
            Tone::Info => "#1971c2",
        }
    }

    fn lifetime_ms(self) -> u32 {
        match self {
            Tone::Success => 3_000,
            Tone::Info => 4_000,
            Tone::Error => 6_000,
        }
    }
}

fn stack(document: &Document) -> Option<HtmlElement> {
    if let Some(existing) = document.get_element_by_id(STACK_ID) {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let stack: HtmlElement = document.create_element("div").ok()?.unchecked_into();
    stack.set_id(STACK_ID);
    stack.set_class_name("notification-stack");
    document.body()?.append_child(&stack).ok()?;
    Some(stack)
}

/// Shows `title` and `message` for a few seconds.
pub fn notify(tone: Tone, title: &str, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(stack) = stack(&document) else {
        return;
    };
    let (Ok(card), Ok(heading), Ok(body)) = (
        document.create_element("div"),
        document.create_element("strong"),
        document.create_element("div"),
    ) else {
        return;
    };

    heading.set_text_content(Some(title));
    body.set_text_content(Some(message));
    card.set_class_name("notification");
    card.append_child(&heading).ok();
    card.append_child(&body).ok();

    let card: HtmlElement = card.unchecked_into();
    card.style()
        .set_property("border-left-color", tone.color())
        .ok();

    if stack.append_child(&card).is_ok() {
        let lifetime = tone.lifetime_ms();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(lifetime).await;
            card.remove();
        });
    }
}

pub fn notify_success(message: &str) {
    notify(Tone::Success, "Success", message);
}

pub fn notify_info(message: &str) {
    notify(Tone::Info, "Info", message);
}

/// Backend failures use `error` as the title and `message` as the body.
pub fn notify_failure(failure: &Failure) {
    notify(Tone::Error, &failure.error, &failure.message);
}
