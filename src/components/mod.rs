pub mod countdown;
pub mod gallery;
pub mod intro;
pub mod modals;
pub mod music;
pub mod sections;
