//! Visual theme for the portal and its template sites.

mod styles;

pub use styles::GLOBAL_STYLES;
