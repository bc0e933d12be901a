mod controls;
mod wheel_canvas;

use gloo_timers::future::TimeoutFuture;
use rand::thread_rng;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::device::DeviceIdentity;
use shared::session::{Effect, Phase, PlaySession, SessionEvent};
use shared::wheel::{landing_angle, next_spin_target, Decision};

use crate::services::{api, device};
use crate::styles;
use controls::{ResultDisplay, SpinButton};
use wheel_canvas::WheelCanvas;

/// Reports a decisive outcome to the backend. Identity is normally acquired
/// at load; if that failed it is derived again here, right before the call.
async fn report_outcome(identity: Option<DeviceIdentity>, decision: Decision) -> bool {
    let Some(identity) = identity.or_else(device::device_identity) else {
        log::error!("no device identity available, outcome not recorded");
        return false;
    };

    match api::record_play(&identity, decision).await {
        Ok(()) => {
            log::info!("recorded {decision:?} for this device");
            true
        }
        Err(err) => {
            log::error!("failed to record outcome: {err}");
            false
        }
    }
}

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let session = use_state(PlaySession::new);
    let identity = use_state(|| None::<DeviceIdentity>);
    // Absolute rotation in degrees; kept across retry spins so the wheel
    // always keeps moving forward from where it stopped
    let rotation = use_state(|| 0u32);

    // Ask the backend whether this device has already played. Any failure
    // on this path fail-opens into a playable session.
    {
        let session = session.clone();
        let identity = identity.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let already_played = match device::device_identity() {
                    Some(id) => {
                        identity.set(Some(id.clone()));
                        match api::check_user(&id).await {
                            Ok(response) => response.exists,
                            Err(err) => {
                                log::error!(
                                    "check_user failed, treating device as unplayed: {err}"
                                );
                                false
                            }
                        }
                    }
                    None => {
                        log::error!("could not derive a device identity, treating as unplayed");
                        false
                    }
                };
                if already_played {
                    log::info!("game already completed on this device");
                }

                let mut checked = (*session).clone();
                checked.handle(SessionEvent::CheckCompleted { already_played });
                session.set(checked);
            });
            || ()
        });
    }

    let on_spin = {
        let session = session.clone();
        let identity = identity.clone();
        let rotation = rotation.clone();

        Callback::from(move |_: MouseEvent| {
            if !session.can_spin() {
                return;
            }

            let target = next_spin_target(*rotation, &mut thread_rng());
            let mut spinning = (*session).clone();
            let effects = spinning.handle(SessionEvent::SpinStarted);
            session.set(spinning.clone());
            rotation.set(target);

            for effect in effects {
                let Effect::StartSpinTimer { duration_ms } = effect else {
                    continue;
                };
                let session = session.clone();
                let identity = identity.clone();
                let mut current = spinning.clone();

                spawn_local(async move {
                    TimeoutFuture::new(duration_ms).await;

                    let effects = current.handle(SessionEvent::WheelStopped {
                        angle: landing_angle(target),
                    });
                    session.set(current.clone());

                    for effect in effects {
                        let Effect::RecordOutcome { decision } = effect else {
                            continue;
                        };
                        let accepted = report_outcome((*identity).clone(), decision).await;
                        current.handle(SessionEvent::ReportCompleted { accepted });
                        session.set(current.clone());
                    }
                });
            }
        })
    };

    // A device that already played only ever sees the terminal screen
    if session.is_locked() {
        return html! {
            <div class={styles::LOCKED_SCREEN}>
                <h1 class={styles::LOCKED_TITLE}>{"Game Over"}</h1>
            </div>
        };
    }

    let phase = session.phase();
    let is_spinning = phase == Phase::Resolving;

    html! {
        <div class={styles::PAGE}>
            <div class={styles::CARD}>
                <div class={styles::WHEEL_WRAP}>
                    <WheelCanvas rotation={*rotation} is_spinning={is_spinning} />
                </div>

                <ResultDisplay message={session.message()} decision={session.decision()} />

                <div class="flex justify-center mt-4">
                    if phase == Phase::Checking {
                        <div class={styles::LOADING_SPINNER}></div>
                    } else if session.can_spin() || is_spinning {
                        <SpinButton is_spinning={is_spinning} onclick={on_spin} />
                    }
                </div>
            </div>
        </div>
    }
}
