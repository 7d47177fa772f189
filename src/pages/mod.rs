//! Page components for the templates portal.

mod access;
mod gallery;
mod template_detail;

pub use access::AccessPage;
pub use gallery::GalleryPage;
pub use template_detail::TemplateDetailPage;
