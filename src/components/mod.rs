//! UI Components for the templates portal.
//!
//! Portal chrome (cards, previews, back button) and the interactive pieces
//! shared by every template (FAQ accordion, contact form, icons).

mod back_button;
mod contact_form;
mod faq_list;
pub mod icons;
mod template_card;
mod template_preview;

pub use back_button::BackButton;
pub use contact_form::ContactForm;
pub use faq_list::FaqList;
pub use icons::{Icon, IconGlyph};
pub use template_card::TemplateCard;
pub use template_preview::TemplatePreview;
