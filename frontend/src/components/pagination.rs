use yew::prelude::*;

/// Page buttons shown on each side of the current page.
const SPREAD: u32 = 2;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_change: Callback<u32>,
}

pub struct PaginationControl;

impl Component for PaginationControl {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PaginationControl
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let last = props.total_pages.max(1);
        let page = props.page.max(1);
        let first_shown = page.saturating_sub(SPREAD).max(1);
        let last_shown = (page + SPREAD).min(last);

        let button = |target: u32, label: String, disabled: bool, active: bool| {
            let onclick = props.on_change.reform(move |_: MouseEvent| target);
            html! {
                <button class={classes!("page-btn", active.then_some("active"))} {disabled} {onclick}>
                    { label }
                </button>
            }
        };

        html! {
            <div class="pagination">
                { button(page.saturating_sub(1).max(1), "‹".to_string(), page <= 1, false) }
                { for (first_shown..=last_shown).map(|n| button(n, n.to_string(), false, n == page)) }
                { button((page + 1).min(last), "›".to_string(), page >= last, false) }
            </div>
        }
    }
}
