use uuid::Uuid;
use yew::{html, Callback, Children, Component, Context, Html, Properties};

/// Dialog sheet over a dimmed backdrop. Content is only mounted while open so
/// each opening starts from the caller's current form state.
pub struct ModalSheet {
    title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-{}", Uuid::new_v4().simple()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let close = props.on_close.reform(|_| ());

        html! {
            <div class="top-sheet show" role="dialog" aria-modal="true" aria-labelledby={self.title_id.clone()}>
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        <h3 id={self.title_id.clone()}>{ props.title.clone() }</h3>
                        <button class="icon-btn" aria-label="close" onclick={close}>{ "✕" }</button>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        }
    }
}
