use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MouseEvent};
use yew::prelude::*;

use crate::config;

const FADE_IN_DELAY_MS: u32 = 30;
const EXIT_FLASH_MS: u32 = 650;

#[derive(Properties, PartialEq)]
pub struct IntroScreenProps {
    pub open: bool,
    /// Fired synchronously from the tap gesture. Starting background music
    /// must happen inside this call stack; some platforms refuse playback
    /// requests issued from a deferred callback.
    pub on_tap: Callback<()>,
    /// Fired once the flash-to-white transition has run, to reveal content.
    pub on_enter: Callback<()>,
}

/// Full-screen cover that blocks the page until the user taps to enter.
#[function_component(IntroScreen)]
pub fn intro_screen(props: &IntroScreenProps) -> Html {
    let fade_in = use_state(|| false);
    let fade_white = use_state(|| false);
    let is_wide = use_state(|| false);

    // Wide viewports get the landscape cover art, narrow ones the portrait
    // variant. Recomputed on every media-query change event.
    {
        let is_wide = is_wide.clone();
        use_effect_with_deps(
            move |_| {
                let mq: Option<MediaQueryList> = web_sys::window()
                    .and_then(|w| w.match_media("(min-width: 768px)").ok().flatten());

                let mut subscription = None;
                if let Some(mq) = mq {
                    is_wide.set(mq.matches());

                    let mq_for_cb = mq.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        is_wide.set(mq_for_cb.matches());
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = mq
                        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("failed to watch viewport media query: {:?}", e);
                    }
                    subscription = Some((mq, callback));
                }

                move || {
                    if let Some((mq, callback)) = subscription {
                        let _ = mq.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Fade in shortly after the gate is (re)shown.
    {
        let fade_in = fade_in.clone();
        let fade_white = fade_white.clone();
        use_effect_with_deps(
            move |open| {
                let mut timer = None;
                if *open {
                    fade_white.set(false);
                    fade_in.set(false);
                    let fade_in = fade_in.clone();
                    timer = Some(Timeout::new(FADE_IN_DELAY_MS, move || fade_in.set(true)));
                }
                move || drop(timer)
            },
            props.open,
        );
    }

    let handle_enter = {
        let fade_white = fade_white.clone();
        let on_tap = props.on_tap.clone();
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| {
            // Still inside the user's gesture stack here.
            on_tap.emit(());
            fade_white.set(true);
            let on_enter = on_enter.clone();
            Timeout::new(EXIT_FLASH_MS, move || on_enter.emit(())).forget();
        })
    };

    if !props.open {
        return html! {};
    }

    let img_src = if *is_wide {
        config::asset_url("intropc.png")
    } else {
        config::asset_url("intro.jpg")
    };

    html! {
        <div class="intro-gate">
            <div
                class="intro-gate-backdrop"
                style={format!("background-image:url({})", img_src)}
            />
            <div class="intro-gate-scrim" />
            <div class={classes!("intro-gate-flash", fade_white.then_some("visible"))} />
            <button
                type="button"
                onclick={handle_enter}
                class={classes!("intro-gate-cover", fade_in.then_some("visible"))}
                aria-label="Entrar a la invitación"
                title="Entrar"
            >
                <img
                    src={img_src.clone()}
                    alt="Portada invitación"
                    draggable="false"
                    class={if *is_wide { "cover-wide" } else { "cover-narrow" }}
                />
                <div class="intro-gate-hint">
                    <span>{"Toca para abrir"}</span>
                </div>
            </button>
        </div>
    }
}
