//! Form rendering module
//!
//! - `field_renderer`: bordered inputs with inline validation messages
//! - `registration_form`: the lead capture form and its action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
