use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::IconGlyph;
use crate::content::Icon;
use crate::disclosure::{Disclosure, DisclosureAction};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let disclosure = use_reducer(Disclosure::default);

    let toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            disclosure.dispatch(DisclosureAction::Toggle);
        })
    };

    let is_open = disclosure.is_open();

    html! {
        <div class={classes!("faq-item", is_open.then(|| "open"))}>
            <button
                type="button"
                class="faq-question"
                onclick={toggle}
                aria-expanded={is_open.to_string()}
            >
                <span class="question-text">{&props.question}</span>
                <IconGlyph icon={Icon::ChevronDown} class={classes!(disclosure.indicator_class())} />
            </button>
            <div class={disclosure.panel_class()}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}
