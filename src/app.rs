use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::gallery::{GalleryCarousel, ImageModal};
use crate::components::intro::IntroScreen;
use crate::components::modals::{DressModal, GiftModal};
use crate::components::music::{MusicButton, MusicHandle};
use crate::components::sections::CardSection;
use crate::config;
use crate::data;
use crate::data::Photo;

/// Root of the page. Owns all top-level view state; children only report
/// intent through callbacks.
#[function_component(App)]
pub fn app() -> Html {
    let entered = use_state(|| false);
    let selected_photo = use_state(|| None::<Photo>);
    let gift_open = use_state(|| false);
    let dress_open = use_state(|| false);
    let music = use_memo(|_| MusicHandle::new(data::MUSIC_START_SECONDS), ());

    // Issued synchronously from the intro tap. The play request has to go
    // out inside the gesture call stack, before any other state change.
    let on_intro_tap = {
        let music = music.clone();
        Callback::from(move |_| music.play_from_start())
    };
    let on_enter = {
        let entered = entered.clone();
        Callback::from(move |_| entered.set(true))
    };

    let on_photo_click = {
        let selected_photo = selected_photo.clone();
        Callback::from(move |photo: Photo| selected_photo.set(Some(photo)))
    };
    let on_lightbox_close = {
        let selected_photo = selected_photo.clone();
        Callback::from(move |_| selected_photo.set(None))
    };

    let open_gift = {
        let gift_open = gift_open.clone();
        Callback::from(move |_: MouseEvent| gift_open.set(true))
    };
    let close_gift = {
        let gift_open = gift_open.clone();
        Callback::from(move |_| gift_open.set(false))
    };
    let open_dress = {
        let dress_open = dress_open.clone();
        Callback::from(move |_: MouseEvent| dress_open.set(true))
    };
    let close_dress = {
        let dress_open = dress_open.clone();
        Callback::from(move |_| dress_open.set(false))
    };

    let bg_url = config::asset_url("novios.jpg");

    html! {
        <div class="page">
            <div
                class="page-background"
                style={format!("background-image:url({})", bg_url)}
            />
            <div class="page-scrim" />

            <div class={classes!("content-column", entered.then_some("entered"))}>
                <div class="hero">
                    <p class="hero-kicker">{"Invitación Matrimonio"}</p>
                    <h1 class="hero-names">{data::COUPLE}</h1>
                    <div class="hero-verse">
                        <p>{data::VERSE}</p>
                        <p class="hero-verse-ref">{data::VERSE_REF}</p>
                    </div>
                    <p class="hero-date">{data::DATE_LONG}</p>
                    <a href="#presentacion" class="hero-cta">{"Ver invitación"}</a>
                </div>

                <CardSection id="presentacion" title="Presentación">
                    {"Con la bendición de Dios, queremos invitarte a celebrar nuestro matrimonio y compartir un día especial de celebración al aire libre y en el campo."}
                </CardSection>

                <section class="page-section">
                    <Countdown target_iso={data::EVENT_DATE_ISO} />
                </section>

                <CardSection id="evento" title="Fecha, hora y lugar">
                    <div class="event-facts">
                        <div class="event-fact">
                            <i class="fa-solid fa-calendar-days"></i>
                            <span>{data::EVENT_DATE}</span>
                        </div>
                        <div class="event-fact">
                            <i class="fa-solid fa-clock"></i>
                            <span>{data::EVENT_TIME}</span>
                        </div>
                        <div class="event-fact">
                            <i class="fa-solid fa-location-dot"></i>
                            <span>{data::EVENT_PLACE}</span>
                        </div>
                    </div>
                    <div class="map-frame">
                        <iframe
                            src={data::MAP_EMBED_URL}
                            style="border:0"
                            allowfullscreen=true
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Ubicación matrimonio"
                        />
                    </div>
                    <a
                        href={data::MAPS_URL}
                        target="_blank"
                        rel="noreferrer"
                        class="linen-btn"
                    >
                        {"Cómo llegar"}
                    </a>
                </CardSection>

                <GalleryCarousel
                    id="galeria"
                    title={data::GALLERY_TITLE}
                    photos={data::gallery_photos()}
                    on_photo_click={on_photo_click}
                />

                <CardSection id="acceso" title="Acceso y estacionamientos">
                    {data::ACCESS_TEXT}
                </CardSection>

                <CardSection id="celebracion" title="Nuestra celebración">
                    {data::CELEBRATION_TEXT}
                </CardSection>

                <CardSection id="vestimenta" title="Vestimenta sugerida">
                    {data::DRESS_CODE_TEXT}
                    <button onclick={open_dress} class="linen-btn">
                        {"Ver sugerencias"}
                    </button>
                </CardSection>

                <CardSection id="regalos" title="Hacer un regalo">
                    {"Si deseas hacernos un regalo, aquí encontrarás la información 💛\n\n"}
                    <button onclick={open_gift} class="linen-btn">
                        {"Haz click aqui!"}
                    </button>
                </CardSection>

                <CardSection id="rsvp" title="Confirmación de asistencia">
                    {data::RSVP_TEXT}
                </CardSection>

                <CardSection id="fotografia" title="Fotografía">
                    {data::PHOTOGRAPHY_TEXT}
                </CardSection>

                <CardSection id="info-importante" title="Información importante">
                    {data::UPDATES_TEXT}
                </CardSection>

                <div class="closing pre-line">{data::CLOSING_TEXT}</div>
            </div>

            <GiftModal open={*gift_open} on_close={close_gift} />
            <DressModal open={*dress_open} on_close={close_dress} />

            <IntroScreen
                open={!*entered}
                on_tap={on_intro_tap}
                on_enter={on_enter}
            />

            <MusicButton
                handle={(*music).clone()}
                video_id={data::MUSIC_VIDEO_ID}
                start_seconds={data::MUSIC_START_SECONDS}
            />

            <ImageModal photo={(*selected_photo).clone()} on_close={on_lightbox_close} />
        </div>
    }
}
