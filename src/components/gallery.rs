use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::Photo;

#[derive(Properties, PartialEq)]
pub struct GalleryCarouselProps {
    pub id: &'static str,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
    pub photos: Vec<Photo>,
    pub on_photo_click: Callback<Photo>,
}

/// Horizontal snap-scroll strip of photos. Tapping one reports it upward so
/// the root can open the lightbox.
#[function_component(GalleryCarousel)]
pub fn gallery_carousel(props: &GalleryCarouselProps) -> Html {
    html! {
        <section id={props.id} class="page-section">
            <div class="linen-card">
                <div class="gallery-header">
                    <h2 class="linen-title">{props.title}</h2>
                    if let Some(subtitle) = props.subtitle {
                        <p class="gallery-subtitle">{subtitle}</p>
                    }
                    <div class="gallery-icon">
                        <i class="fa-solid fa-camera"></i>
                    </div>
                </div>
                <div class="gallery-strip">
                    {
                        props.photos.iter().map(|photo| {
                            let on_photo_click = props.on_photo_click.clone();
                            let photo_for_click = photo.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_photo_click.emit(photo_for_click.clone());
                            });
                            html! {
                                <button
                                    key={photo.src.clone()}
                                    type="button"
                                    class="gallery-item"
                                    {onclick}
                                    title="Ver foto"
                                >
                                    <img
                                        src={photo.src.clone()}
                                        alt={photo.alt}
                                        loading="lazy"
                                        draggable="false"
                                    />
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <p class="gallery-hint">{crate::data::GALLERY_HINT}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub photo: Option<Photo>,
    pub on_close: Callback<()>,
}

/// Lightbox for a selected gallery photo. Renders nothing while no photo is
/// selected. Clicking the backdrop closes; clicks on the image itself must
/// not bubble into the backdrop handler.
#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let Some(photo) = &props.photo else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_frame_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="image-modal-backdrop" onclick={on_backdrop_click}>
            <div class="image-modal-frame" onclick={on_frame_click}>
                <button
                    class="image-modal-close"
                    onclick={on_close_click}
                    aria-label="Cerrar"
                    title="Cerrar"
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <img src={photo.src.clone()} alt={photo.alt} draggable="false" />
            </div>
        </div>
    }
}
