//! The two overlay dialogs: gift information and dress-code suggestions.
//! Both are controlled entirely by the parent's boolean; they only signal
//! intent to close.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data;
use crate::utils::scripts;

const TIKTOK_EMBED_SRC: &str = "https://www.tiktok.com/embed.js";
/// Delay before touching the embed script, so the modal DOM paints first.
const EMBED_PAINT_DELAY_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(GiftModal)]
pub fn gift_modal(props: &ModalProps) -> Html {
    let copy_bank = Callback::from(move |_: MouseEvent| {
        let text = data::bank_transfer_text();
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        spawn_local(async move {
            let result = JsFuture::from(clipboard.write_text(&text)).await;
            let message = match result {
                Ok(_) => "Datos bancarios copiados.",
                Err(e) => {
                    log::warn!("clipboard write failed: {:?}", e);
                    "No se pudo copiar automáticamente. Copia manualmente."
                }
            };
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        });
    });

    if !props.open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <div class="linen-card modal-card">
                    <div class="modal-header">
                        <h3 class="linen-title">{"Hacer un regalo"}</h3>
                        <button
                            class="modal-close"
                            onclick={on_close_click}
                            aria-label="Cerrar"
                            title="Cerrar"
                        >
                            {"Cerrar"}
                        </button>
                    </div>
                    <div class="modal-body">
                        <div class="gift-intro">
                            <div class="linen-body pre-line">{data::GIFTS_TEXT}</div>
                        </div>
                        <div class="gift-options">
                            {
                                data::GIFT_OPTIONS.iter().map(|option| html! {
                                    <div key={option.title} class="gift-option">
                                        <div class="gift-option-icon">
                                            <span>{option.icon}</span>
                                        </div>
                                        <div class="gift-option-text">
                                            <div class="linen-title">{option.title}</div>
                                            <div class="linen-body">
                                                {
                                                    match option.amount {
                                                        Some(amount) => format!("${}", amount),
                                                        None => "El monto que tú desees".to_string(),
                                                    }
                                                }
                                            </div>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="bank-details">
                            <div class="bank-details-header">
                                <div class="linen-title">{"Datos bancarios"}</div>
                                <button class="bank-copy-button" onclick={copy_bank}>
                                    {"Copiar"}
                                </button>
                            </div>
                            <pre class="bank-details-text">{data::bank_transfer_text()}</pre>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TikTokEmbedProps {
    video_id: &'static str,
    cite: &'static str,
}

/// The markup the TikTok embed script scans for and hydrates.
#[function_component(TikTokEmbed)]
fn tiktok_embed(props: &TikTokEmbedProps) -> Html {
    html! {
        <blockquote
            class="tiktok-embed"
            cite={props.cite}
            data-video-id={props.video_id}
            style="max-width:605px;min-width:325px"
        >
            <section />
        </blockquote>
    }
}

fn reload_embeds() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = js_sys::Reflect::get(&window, &"tiktokEmbed".into()).and_then(|embed| {
        let load: js_sys::Function =
            js_sys::Reflect::get(&embed, &"load".into())?.dyn_into::<js_sys::Function>()?;
        load.call0(&embed)
    });
    if let Err(e) = result {
        log::warn!("tiktok embed reload failed: {:?}", e);
    }
}

/// Insert the embed script the first time the modal opens; afterwards just
/// ask the script to re-scan the DOM for new blockquotes.
fn ensure_tiktok_embeds() {
    if scripts::script_present(TIKTOK_EMBED_SRC) {
        reload_embeds();
    } else {
        scripts::insert_script(TIKTOK_EMBED_SRC, reload_embeds);
    }
}

#[function_component(DressModal)]
pub fn dress_modal(props: &ModalProps) -> Html {
    use_effect_with_deps(
        move |open| {
            let mut timer = None;
            if *open {
                timer = Some(Timeout::new(EMBED_PAINT_DELAY_MS, ensure_tiktok_embeds));
            }
            move || drop(timer)
        },
        props.open,
    );

    if !props.open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <div class="linen-card modal-card">
                    <div class="modal-header">
                        <h3 class="linen-title">{"Ideas de vestimenta"}</h3>
                        <button
                            class="modal-close"
                            onclick={on_close_click}
                            aria-label="Cerrar"
                            title="Cerrar"
                        >
                            {"Cerrar"}
                        </button>
                    </div>
                    <div class="modal-body">
                        <div class="dress-videos">
                            {
                                data::DRESS_VIDEOS.iter().map(|video| html! {
                                    <div key={video.video_id} class="dress-video">
                                        <TikTokEmbed video_id={video.video_id} cite={video.cite} />
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="dress-videos-note">
                            {"Si no cargan al instante, espera un segundo (TikTok tarda en cargar sus videos!)."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
