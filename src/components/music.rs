//! Background-music control backed by a hidden YouTube player.
//!
//! The IFrame API script is loaded lazily and exactly once per page; the
//! player itself is created when the API reports ready. Play requests that
//! arrive before that are latched and honored on readiness, which matters
//! because the intro gate's tap can easily beat the script load.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::utils::scripts;

const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";
const PLAYER_CONTAINER_ID: &str = "yt-audio-player";

/// Playing state codes reported by the player's state-change events.
/// Everything else (buffering, cued, ended, unstarted) is ignored.
const STATE_PLAYING: f64 = 1.0;
const STATE_PAUSED: f64 = 2.0;

/// The ready/pending half of the controller, kept free of JS types so the
/// latch semantics are testable on their own.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct PlaybackGate {
    ready: bool,
    pending_play: bool,
}

impl PlaybackGate {
    /// A play request: returns true when it can be executed right now.
    /// Otherwise the request is latched until [`Self::became_ready`].
    pub fn request_play(&mut self) -> bool {
        if self.ready {
            true
        } else {
            self.pending_play = true;
            false
        }
    }

    /// Mark the widget ready. Returns true when a latched play request
    /// should fire; the latch is consumed so a repeated ready callback
    /// cannot re-trigger playback.
    pub fn became_ready(&mut self) -> bool {
        self.ready = true;
        std::mem::take(&mut self.pending_play)
    }

    /// Whether toggle-style control is allowed. Toggles never queue.
    pub fn can_control(&self) -> bool {
        self.ready
    }

    /// Re-latch a request that could not be executed after all.
    fn relatch(&mut self) {
        self.pending_play = true;
    }
}

struct PlayerCtl {
    gate: PlaybackGate,
    player: Option<JsValue>,
    start_seconds: u32,
}

/// Cloneable capability handle held by the root component. Play/pause is
/// only reachable through this; the player renders no native controls.
#[derive(Clone)]
pub struct MusicHandle {
    inner: Rc<RefCell<PlayerCtl>>,
}

impl PartialEq for MusicHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MusicHandle {
    pub fn new(start_seconds: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PlayerCtl {
                gate: PlaybackGate::default(),
                player: None,
                start_seconds,
            })),
        }
    }

    /// Seek to the configured offset and play. Must be called from inside a
    /// user-gesture call stack; requests arriving before the player is ready
    /// are latched and executed on readiness.
    pub fn play_from_start(&self) {
        let (player, start) = {
            let mut ctl = self.inner.borrow_mut();
            if !ctl.gate.request_play() {
                return;
            }
            match &ctl.player {
                Some(p) => (p.clone(), ctl.start_seconds),
                None => {
                    ctl.gate.relatch();
                    return;
                }
            }
        };
        seek_and_play(&player, start);
    }

    /// Play from the start when paused, pause when playing. A no-op while
    /// the player does not exist or is not ready.
    pub fn toggle(&self) {
        let (player, start) = {
            let ctl = self.inner.borrow();
            if !ctl.gate.can_control() {
                return;
            }
            match &ctl.player {
                Some(p) => (p.clone(), ctl.start_seconds),
                None => return,
            }
        };
        let state = call_method(&player, "getPlayerState", &[])
            .ok()
            .and_then(|v| v.as_f64());
        if state == Some(STATE_PLAYING) {
            if let Err(e) = call_method(&player, "pauseVideo", &[]) {
                log::warn!("pauseVideo failed: {:?}", e);
            }
        } else {
            seek_and_play(&player, start);
        }
    }

    fn mark_ready_and_flush(&self) {
        let (pending, player, start) = {
            let mut ctl = self.inner.borrow_mut();
            let pending = ctl.gate.became_ready();
            (pending, ctl.player.clone(), ctl.start_seconds)
        };
        if pending {
            if let Some(player) = player {
                seek_and_play(&player, start);
            }
        }
    }

    fn attach_player(&self, player: JsValue) {
        self.inner.borrow_mut().player = Some(player);
    }

    fn detach_player(&self) -> Option<JsValue> {
        self.inner.borrow_mut().player.take()
    }
}

/// Invoke a method on the player object, reflecting it by name. The player
/// is foreign code; every call site treats failure as non-fatal.
fn call_method(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let f: js_sys::Function = js_sys::Reflect::get(target, &method.into())?.dyn_into()?;
    match args {
        [] => f.call0(target),
        [a] => f.call1(target, a),
        [a, b] => f.call2(target, a, b),
        _ => Err(JsValue::from_str("unsupported arity")),
    }
}

fn seek_and_play(player: &JsValue, start_seconds: u32) {
    // A failed seek is tolerable, the video then plays from wherever it is.
    if let Err(e) = call_method(
        player,
        "seekTo",
        &[JsValue::from_f64(start_seconds as f64), JsValue::TRUE],
    ) {
        log::warn!("seekTo failed: {:?}", e);
    }
    if let Err(e) = call_method(player, "playVideo", &[]) {
        log::warn!("playVideo failed: {:?}", e);
    }
}

fn iframe_api_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &"YT".into())
        .ok()
        .filter(|yt| !yt.is_undefined())
        .and_then(|yt| js_sys::Reflect::get(&yt, &"Player".into()).ok())
        .map(|player| player.is_function())
        .unwrap_or(false)
}

/// Load the IFrame API script once per page and run `on_ready` when the API
/// is usable. The API calls the global `onYouTubeIframeAPIReady` hook itself
/// once it has finished bootstrapping.
fn ensure_iframe_api(on_ready: impl FnOnce() + 'static) {
    if iframe_api_loaded() {
        on_ready();
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let hook = Closure::once(on_ready);
    if let Err(e) = js_sys::Reflect::set(
        &window,
        &"onYouTubeIframeAPIReady".into(),
        hook.as_ref(),
    ) {
        log::warn!("failed to install iframe api hook: {:?}", e);
        return;
    }
    hook.forget();

    if !scripts::script_present(IFRAME_API_SRC) {
        scripts::insert_script(IFRAME_API_SRC, || {});
    }
}

fn build_player(
    handle: &MusicHandle,
    playing: UseStateHandle<bool>,
    video_id: &str,
    start_seconds: u32,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let yt = js_sys::Reflect::get(&window, &"YT".into())?;
    let ctor: js_sys::Function = js_sys::Reflect::get(&yt, &"Player".into())?.dyn_into()?;

    let player_vars = js_sys::Object::new();
    js_sys::Reflect::set(&player_vars, &"start".into(), &start_seconds.into())?;
    js_sys::Reflect::set(&player_vars, &"autoplay".into(), &0.into())?;
    js_sys::Reflect::set(&player_vars, &"controls".into(), &0.into())?;
    js_sys::Reflect::set(&player_vars, &"rel".into(), &0.into())?;
    js_sys::Reflect::set(&player_vars, &"playsinline".into(), &1.into())?;

    let on_ready = {
        let handle = handle.clone();
        Closure::wrap(Box::new(move |_event: JsValue| {
            handle.mark_ready_and_flush();
        }) as Box<dyn FnMut(JsValue)>)
    };
    let on_state_change = Closure::wrap(Box::new(move |event: JsValue| {
        let state = js_sys::Reflect::get(&event, &"data".into())
            .ok()
            .and_then(|v| v.as_f64());
        if state == Some(STATE_PLAYING) {
            playing.set(true);
        } else if state == Some(STATE_PAUSED) {
            playing.set(false);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let events = js_sys::Object::new();
    js_sys::Reflect::set(&events, &"onReady".into(), on_ready.as_ref())?;
    js_sys::Reflect::set(&events, &"onStateChange".into(), on_state_change.as_ref())?;
    // The player lives for the page's lifetime, so the callbacks do too.
    on_ready.forget();
    on_state_change.forget();

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"height".into(), &"0".into())?;
    js_sys::Reflect::set(&options, &"width".into(), &"0".into())?;
    js_sys::Reflect::set(&options, &"videoId".into(), &video_id.into())?;
    js_sys::Reflect::set(&options, &"playerVars".into(), &player_vars)?;
    js_sys::Reflect::set(&options, &"events".into(), &events)?;

    let args = js_sys::Array::of2(&PLAYER_CONTAINER_ID.into(), &options);
    let player = js_sys::Reflect::construct(&ctor, &args)?;
    handle.attach_player(player.into());
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct MusicButtonProps {
    pub handle: MusicHandle,
    pub video_id: &'static str,
    pub start_seconds: u32,
}

#[function_component(MusicButton)]
pub fn music_button(props: &MusicButtonProps) -> Html {
    let playing = use_state(|| false);

    {
        let handle = props.handle.clone();
        let playing = playing.clone();
        let video_id = props.video_id;
        let start_seconds = props.start_seconds;
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));

                let build = {
                    let mounted = mounted.clone();
                    let handle = handle.clone();
                    move || {
                        // The API may come up after this controller is gone.
                        if !mounted.get() {
                            return;
                        }
                        if let Err(e) = build_player(&handle, playing, video_id, start_seconds) {
                            log::warn!("failed to create player: {:?}", e);
                        }
                    }
                };
                ensure_iframe_api(build);

                move || {
                    mounted.set(false);
                    if let Some(player) = handle.detach_player() {
                        if let Err(e) = call_method(&player, "destroy", &[]) {
                            log::warn!("player destroy failed: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let onclick = {
        let handle = props.handle.clone();
        Callback::from(move |_: MouseEvent| handle.toggle())
    };
    let label = if *playing {
        "Pausar música"
    } else {
        "Reproducir música"
    };

    html! {
        <>
            <div class="yt-player-host">
                <div id={PLAYER_CONTAINER_ID}></div>
            </div>
            <button class="music-button" onclick={onclick} aria-label={label} title={label}>
                if *playing {
                    <i class="fa-solid fa-pause"></i>
                } else {
                    <i class="fa-solid fa-music"></i>
                }
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_before_ready_is_latched_and_consumed_once() {
        let mut gate = PlaybackGate::default();
        assert!(!gate.request_play());
        // Readiness consumes the latch exactly once.
        assert!(gate.became_ready());
        assert!(!gate.became_ready());
    }

    #[test]
    fn ready_without_pending_request_does_not_fire() {
        let mut gate = PlaybackGate::default();
        assert!(!gate.became_ready());
    }

    #[test]
    fn play_after_ready_executes_immediately() {
        let mut gate = PlaybackGate::default();
        gate.became_ready();
        assert!(gate.request_play());
        // Nothing was latched along the way.
        assert!(!gate.became_ready());
    }

    #[test]
    fn toggle_is_gated_on_readiness_and_never_queues() {
        let mut gate = PlaybackGate::default();
        assert!(!gate.can_control());
        assert!(!gate.became_ready());
        assert!(gate.can_control());
    }

    #[test]
    fn toggle_on_missing_player_is_a_noop() {
        let handle = MusicHandle::new(18);
        handle.toggle();
        handle.inner.borrow_mut().gate.became_ready();
        handle.toggle();
        assert!(handle.inner.borrow().player.is_none());
    }

    #[test]
    fn play_without_player_relatches_even_when_ready() {
        let handle = MusicHandle::new(18);
        handle.inner.borrow_mut().gate.became_ready();
        handle.play_from_start();
        assert!(handle.inner.borrow().gate.pending_play);
    }
}
