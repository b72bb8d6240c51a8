//! Static content for the invitation. Everything the page shows comes from
//! here; components consume it read-only.

use crate::config;

#[derive(Clone, PartialEq)]
pub struct Photo {
    pub src: String,
    pub alt: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct BankAccount {
    pub holder: &'static str,
    pub rut: &'static str,
    pub bank: &'static str,
    pub account_type: &'static str,
    pub account_number: &'static str,
    pub email: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct GiftOption {
    pub icon: &'static str,
    pub title: &'static str,
    /// None means "whatever amount you wish".
    pub amount: Option<u32>,
}

#[derive(Clone, PartialEq)]
pub struct DressVideo {
    pub video_id: &'static str,
    pub cite: &'static str,
}

pub const COUPLE: &str =
    "María José Abarzúa Riquelme & Christopher Nicolás Rubiera Larson";
pub const VERSE: &str =
    "“Dos son mejor que uno, porque obtienen más fruto de su esfuerzo.”";
pub const VERSE_REF: &str = "Eclisiastés 4:9";
pub const DATE_LONG: &str = "28 de febrero de 2026";
pub const EVENT_DATE_ISO: &str = "2026-02-28T12:00:00-03:00";

pub const EVENT_DATE: &str = "Viernes 28 de febrero de 2026";
pub const EVENT_TIME: &str = "12:00 hrs";
pub const EVENT_PLACE: &str = "Campo familiar";
pub const MAPS_URL: &str = "https://maps.app.goo.gl/K4fihCHNPv52Ez6r5";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m17!1m12!1m3!1d3192.6654382893203!2d-72.77955732415943!3d-36.85048787223271!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m2!1m1!2zMzbCsDUxJzAxLjgiUyA3MsKwNDYnMzcuMSJX!5e0!3m2!1ses!2scl!4v1768185552512!5m2!1ses!2scl";

pub const MUSIC_VIDEO_ID: &str = "sD9_l3oDOag";
pub const MUSIC_START_SECONDS: u32 = 18;

pub const GIFTS_TEXT: &str = "Tu presencia es lo más importante para nosotros.\n\nSi deseas hacernos un regalo, preferimos que sea un aporte para comenzar nuestro sueño de construir nuestro hogar y seguir dando pasos en esta nueva etapa de vida, siempre de la mano de Dios.";

pub const GIFT_OPTIONS: &[GiftOption] = &[GiftOption {
    icon: "💛",
    title: "Aporte libre",
    amount: None,
}];

pub const BANK: BankAccount = BankAccount {
    holder: "María José Abarzúa Riquelme",
    rut: "16285678-2",
    bank: "Mercado Pago",
    account_type: "Cuenta Vista",
    account_number: "1097629220",
    email: "mjabarzuar@gmail.com",
};

pub const RSVP_TEXT: &str =
    "Por favor confirma tu asistencia por el mismo medio que recibiste esta invitacion.";

pub const ACCESS_TEXT: &str = "El lugar del matrimonio se encuentra en un sector de cerro.\n\n🚗 Vehículos sin tracción 4x4: deberán estacionarse en la parte superior.\n🚙 Vehículos 4x4: podrán bajar hasta el estacionamiento habilitado cercano al lugar del evento.\n\nTe recomendamos venir con calzado cómodo.";

pub const CELEBRATION_TEXT: &str = "Será al aire libre, en el campo, pensada para compartir, relajarnos y disfrutar juntos.\n\nHabrá cóctel, asado, piscina, postres y una celebración durante todo el día.";

pub const DRESS_CODE_TEXT: &str = "Te invitamos a venir con un estilo relajado y cómodo, acorde a una celebración de día en el campo.\n\n👔 Hombres: prendas de lino (camisa, pantalón o bermuda), mocasines o calzado cómodo.\n👗 Mujeres: vestidos relajados, frescos y adecuados para un entorno natural.\n\nLa vestimenta es sugerida y opcional; lo más importante es que te sientas cómodo/a.\n\nSi deseas disfrutar de la piscina, no olvides traer traje de baño.";

pub const PHOTOGRAPHY_TEXT: &str = "Para que puedan disfrutar la ceremonia con tranquilidad, contaremos con un fotógrafo profesional.\nLes pedimos amablemente no interrumpir su trabajo durante la ceremonia.\nLuego, con mucho cariño, compartiremos las fotos para que también puedan tener este recuerdo.";

pub const UPDATES_TEXT: &str = "Esta invitación es una página web y podrá actualizarse con nueva información.\nLes recomendamos revisarla periódicamente para estar al tanto de cualquier novedad.";

pub const CLOSING_TEXT: &str = "Gracias por acompañarnos y ser parte de este momento tan importante en nuestras vidas.\n\n¡Te esperamos con mucho cariño!";

pub const GALLERY_TITLE: &str = "Retratos de nuestro amor";
pub const GALLERY_HINT: &str = "Desliza para ver más / Presiona para agrandar";

const GALLERY_FILES: &[(&str, &str)] = &[
    ("galeria/1.jpg", "Retrato 1"),
    ("galeria/2.jpg", "Retrato 2"),
    ("galeria/3.jpg", "Retrato 3"),
    ("galeria/6.jpg", "Retrato 6"),
    ("galeria/7.jpg", "Retrato 7"),
    ("galeria/8.jpg", "Retrato 8"),
    ("galeria/9.jpg", "Retrato 9"),
    ("galeria/11.jpg", "Retrato 11"),
];

pub fn gallery_photos() -> Vec<Photo> {
    GALLERY_FILES
        .iter()
        .map(|&(path, alt)| Photo {
            src: config::asset_url(path),
            alt,
        })
        .collect()
}

pub const DRESS_VIDEOS: &[DressVideo] = &[
    DressVideo {
        video_id: "7460441085836365074",
        cite: "https://www.tiktok.com/@ortcclothingco/video/7460441085836365074",
    },
    DressVideo {
        video_id: "7366359414439300384",
        cite: "https://www.tiktok.com/@_victoreis_/video/7366359414439300384",
    },
];

/// The block shown in the gift modal and copied to the clipboard.
pub fn bank_transfer_text() -> String {
    format!(
        "Titular: {}\nRUT: {}\nBanco: {}\nTipo: {}\nN° Cuenta: {}\nEmail: {}",
        BANK.holder, BANK.rut, BANK.bank, BANK.account_type, BANK.account_number, BANK.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_text_lists_every_field_in_order() {
        let text = bank_transfer_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Titular: María José Abarzúa Riquelme");
        assert_eq!(lines[1], "RUT: 16285678-2");
        assert_eq!(lines[2], "Banco: Mercado Pago");
        assert_eq!(lines[3], "Tipo: Cuenta Vista");
        assert_eq!(lines[4], "N° Cuenta: 1097629220");
        assert_eq!(lines[5], "Email: mjabarzuar@gmail.com");
    }

    #[test]
    fn gallery_photos_resolve_against_base() {
        let photos = gallery_photos();
        assert_eq!(photos.len(), 8);
        assert!(photos[0].src.ends_with("galeria/1.jpg"));
        assert_eq!(photos[0].alt, "Retrato 1");
    }
}
