//! Portal context provider.
//!
//! Provides the navigation controller and configuration to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page component
//! let mut nav = use_navigation();
//! nav.write().dispatch(NavEvent::GoBack);
//!
//! let config = use_config();
//! let delay = config.submit_delay();
//! ```

use dioxus::prelude::*;
use portal_core::{MemoryLocation, NavigationController, PortalConfig};

/// Controller type used by the desktop app.
pub type PortalNavigation = NavigationController<MemoryLocation>;

/// Everything the UI needs at launch, built from config and command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Startup {
    pub config: PortalConfig,
    pub controller: PortalNavigation,
}

/// Get the startup state set in `main` before launch.
pub fn get_startup() -> Option<Startup> {
    crate::get_startup()
}

/// Hook to access the navigation controller from context.
///
/// Views read the current state and report user intent by dispatching
/// `NavEvent`s through the returned signal.
pub fn use_navigation() -> Signal<PortalNavigation> {
    use_context::<Signal<PortalNavigation>>()
}

/// Hook to access the portal configuration.
pub fn use_config() -> PortalConfig {
    use_context::<PortalConfig>()
}
