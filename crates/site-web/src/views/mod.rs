//! DOM composition for the two logical views. Markup is built through
//! web-sys; all interactivity goes through a handful of delegated click
//! listeners whose closures are owned by the app and retired on re-render.

pub mod home;
pub mod project;
