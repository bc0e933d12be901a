use yew::prelude::*;

use shared::wheel::Decision;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin" };
    let button_class = if props.is_spinning {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON
    };

    html! {
        <button
            class={button_class}
            disabled={props.is_spinning}
            onclick={props.onclick.clone()}
        >
            { button_text }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: Option<&'static str>,
    pub decision: Decision,
}

/// Shows the status line(s) for the last spin, colored by how it went.
#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(message) = props.message else {
        return html! {};
    };

    let tone = match props.decision {
        Decision::Win => styles::RESULT_WIN,
        Decision::Loss => styles::RESULT_LOSS,
        Decision::Pending => styles::RESULT_RETRY,
    };

    html! {
        <div class={styles::RESULT_WRAP}>
            { for message.lines().map(|line| html! { <p class={tone}>{ line }</p> }) }
        </div>
    }
}
