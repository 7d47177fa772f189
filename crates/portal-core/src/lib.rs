//! Client Templates Portal Core Library
//!
//! Navigation, access gating and template bookkeeping for the templates
//! portal, independent of any UI toolkit.
//!
//! ## Overview
//!
//! A client enters an access code, sees a gallery of marketing-site templates
//! and opens any of them full-screen. Gallery cards carry a live miniature of
//! the template. Nothing is persisted and nothing leaves the process: the
//! access check is a comparison against a configured secret, and contact forms
//! only simulate sending.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portal_core::{NavEvent, NavigationController, PortalConfig, Transition};
//!
//! let config = PortalConfig {
//!     access_code: Some("CAMILA-2025".to_string()),
//!     ..PortalConfig::default()
//! };
//! let mut nav = NavigationController::new(
//!     config.access_gate()?,
//!     config.registry()?,
//!     config.location()?,
//! );
//!
//! nav.dispatch(NavEvent::CodeChanged("CAMILA-2025".to_string()));
//! if let Transition::SubmitStarted { .. } = nav.dispatch(NavEvent::SubmitCode) {
//!     nav.dispatch(NavEvent::SubmissionSettled);
//! }
//! ```

pub mod access;
pub mod compositor;
pub mod config;
pub mod detail;
pub mod error;
pub mod location;
pub mod logging;
pub mod navigation;
pub mod registry;
pub mod timer;

// Re-exports
pub use access::{AccessCode, AccessGate, WRONG_CODE_MESSAGE};
pub use compositor::PreviewFrame;
pub use config::PortalConfig;
pub use detail::{
    DetailMode, DetailViewState, SubmissionStatus, SubmitBehavior, SubmitPlan, DEFAULT_SUBMIT_DELAY,
};
pub use error::{PortalError, PortalResult};
pub use location::{Location, MemoryLocation, CODE_PARAM};
pub use navigation::{NavEvent, NavigationController, NavigationState, Transition, View};
pub use registry::{
    columns, CardAction, CreatedAt, DisplayLocale, GridColumns, TemplateDescriptor, TemplateId,
    TemplateRegistry, EXTERNAL_REL, EXTERNAL_TARGET,
};
pub use timer::{CancelHandle, ScopedTask, TimerSlot};
