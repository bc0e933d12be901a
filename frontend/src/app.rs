use yew::prelude::*;

use crate::pages::wheel::WheelPage;
use crate::styles;

/// Single-screen app: the promotional wheel is the whole surface.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::APP_SHELL}>
            <WheelPage />
        </div>
    }
}
