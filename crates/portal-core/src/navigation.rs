//! Navigation controller - the portal's top-level view-state machine.
//!
//! ```text
//!            SubmitCode + SubmissionSettled
//!   Gate ─────────────────────────────────▶ Gallery ──SelectTemplate──▶ Detail(id)
//!    ▲                                        │  ▲                          │
//!    └──────────────── GoBack ────────────────┘  └──────DismissDetail───────┘
//! ```
//!
//! Views report user intent as [`NavEvent`]s; the controller owns all
//! navigation state and answers each event with a [`Transition`]. Exactly one
//! view is current at any time.

use tracing::{debug, info, warn};

use crate::access::AccessGate;
use crate::location::{Location, CODE_PARAM};
use crate::registry::{CardAction, TemplateId, TemplateRegistry};

/// The view currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Gate,
    Gallery,
    Detail(TemplateId),
}

/// Navigation state owned by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Current text of the access field
    pub code: String,
    pub authenticated: bool,
    /// Key of the full-screen detail view, if any
    pub active_template_id: Option<String>,
    /// A gate submission is waiting for its cosmetic delay
    pub submitting: bool,
}

/// User intent reported by a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    CodeChanged(String),
    SubmitCode,
    SubmissionSettled,
    /// Card selected in the gallery (descriptor id)
    SelectTemplate(String),
    DismissDetail,
    GoBack,
}

/// Controller's answer to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Handled; the view did not change
    Stay,
    /// Not applicable to the current view
    Ignored,
    /// Wrong access code
    Rejected,
    /// Valid code accepted and echoed; waiting for `SubmissionSettled`
    SubmitStarted { code: String },
    ViewChanged(View),
    /// Caller opens `url` in a new browsing context; state unchanged
    OpenExternal { url: String },
}

/// View-state machine for gate, gallery and detail views.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController<L: Location> {
    gate: AccessGate,
    registry: TemplateRegistry,
    location: L,
    state: NavigationState,
}

impl<L: Location> NavigationController<L> {
    pub fn new(gate: AccessGate, registry: TemplateRegistry, location: L) -> Self {
        Self {
            gate,
            registry,
            location,
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Whether the gate's submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.gate.can_submit(&self.state.code, self.state.submitting)
    }

    /// Whether the gate shows its inline error.
    pub fn shows_code_error(&self) -> bool {
        self.gate.shows_error(&self.state.code)
    }

    /// Resolve the state to exactly one view.
    ///
    /// An active key outside the known template set resolves to the gallery.
    pub fn current_view(&self) -> View {
        if !self.state.authenticated {
            return View::Gate;
        }
        match self
            .state
            .active_template_id
            .as_deref()
            .and_then(TemplateId::from_key)
        {
            Some(id) => View::Detail(id),
            None => View::Gallery,
        }
    }

    pub fn dispatch(&mut self, event: NavEvent) -> Transition {
        let view = self.current_view();
        let transition = match (view, event) {
            // The submitted code is frozen until the submission settles
            (View::Gate, NavEvent::CodeChanged(_)) if self.state.submitting => {
                Transition::Ignored
            }
            (View::Gate, NavEvent::CodeChanged(code)) => {
                self.state.code = code;
                Transition::Stay
            }
            (View::Gate, NavEvent::SubmitCode) => self.submit_code(),
            (View::Gate, NavEvent::SubmissionSettled) => self.settle_submission(),
            (View::Gallery, NavEvent::SelectTemplate(id)) => self.select_template(&id),
            (View::Gallery, NavEvent::GoBack) => self.go_back(),
            (View::Detail(_), NavEvent::DismissDetail) => self.dismiss_detail(),
            (view, event) => {
                debug!(?view, ?event, "Ignoring navigation event");
                Transition::Ignored
            }
        };

        if let Transition::ViewChanged(next) = transition {
            info!(from = ?view, to = ?next, "View changed");
        }
        transition
    }

    fn submit_code(&mut self) -> Transition {
        if self.state.submitting {
            return Transition::Ignored;
        }
        match self.gate.check(&self.state.code) {
            Ok(trimmed) => {
                self.location.set_query(CODE_PARAM, &trimmed);
                self.state.submitting = true;
                Transition::SubmitStarted { code: trimmed }
            }
            Err(e) => {
                debug!("Access code rejected: {}", e);
                Transition::Rejected
            }
        }
    }

    fn settle_submission(&mut self) -> Transition {
        if !self.state.submitting {
            return Transition::Ignored;
        }
        self.state.submitting = false;
        if !self.gate.is_valid(&self.state.code) {
            warn!("Access code changed while submitting, staying on gate");
            self.location.remove_query(CODE_PARAM);
            return Transition::Rejected;
        }
        self.state.authenticated = true;
        Transition::ViewChanged(View::Gallery)
    }

    fn select_template(&mut self, descriptor_id: &str) -> Transition {
        let Some(descriptor) = self.registry.get(descriptor_id) else {
            warn!("Selected template not in registry: {}", descriptor_id);
            return Transition::Ignored;
        };

        match CardAction::for_descriptor(descriptor) {
            CardAction::OpenDetail(detail_id) => {
                let Some(id) = TemplateId::from_key(&detail_id) else {
                    warn!("No detail view for '{}', staying on gallery", detail_id);
                    return Transition::Stay;
                };
                self.state.active_template_id = Some(detail_id);
                Transition::ViewChanged(View::Detail(id))
            }
            CardAction::OpenExternal { url } => {
                info!("Opening template externally: {}", url);
                Transition::OpenExternal { url }
            }
        }
    }

    fn dismiss_detail(&mut self) -> Transition {
        self.state.active_template_id = None;
        Transition::ViewChanged(View::Gallery)
    }

    fn go_back(&mut self) -> Transition {
        self.state = NavigationState::default();
        self.location.remove_query(CODE_PARAM);
        Transition::ViewChanged(View::Gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessCode;
    use crate::location::MemoryLocation;
    use crate::registry::DisplayLocale;

    const SECRET: &str = "CAMILA-2025";

    fn controller() -> NavigationController<MemoryLocation> {
        NavigationController::new(
            AccessGate::new(AccessCode::new(SECRET).unwrap()),
            TemplateRegistry::builtin(DisplayLocale::En).unwrap(),
            MemoryLocation::default(),
        )
    }

    fn enter_gallery(nav: &mut NavigationController<MemoryLocation>) {
        nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
        nav.dispatch(NavEvent::SubmitCode);
        nav.dispatch(NavEvent::SubmissionSettled);
    }

    #[test]
    fn test_starts_at_gate() {
        let nav = controller();
        assert_eq!(nav.current_view(), View::Gate);
        assert!(!nav.can_submit());
        assert!(!nav.shows_code_error());
    }

    #[test]
    fn test_wrong_code_rejected_without_side_effects() {
        let mut nav = controller();
        nav.dispatch(NavEvent::CodeChanged("ACME-2025".to_string()));
        assert!(nav.shows_code_error());
        assert_eq!(nav.dispatch(NavEvent::SubmitCode), Transition::Rejected);
        assert_eq!(nav.current_view(), View::Gate);
        assert_eq!(nav.location().query(CODE_PARAM), None);
        assert!(!nav.state().submitting);
    }

    #[test]
    fn test_valid_submit_echoes_trimmed_code() {
        let mut nav = controller();
        nav.dispatch(NavEvent::CodeChanged(format!("  {}  ", SECRET)));
        assert!(nav.can_submit());

        assert_eq!(
            nav.dispatch(NavEvent::SubmitCode),
            Transition::SubmitStarted {
                code: SECRET.to_string()
            }
        );
        assert_eq!(nav.location().query(CODE_PARAM).as_deref(), Some(SECRET));
        assert!(!nav.can_submit(), "disabled while in flight");

        // Duplicate submit while in flight does nothing
        assert_eq!(nav.dispatch(NavEvent::SubmitCode), Transition::Ignored);

        assert_eq!(
            nav.dispatch(NavEvent::SubmissionSettled),
            Transition::ViewChanged(View::Gallery)
        );
        assert!(nav.state().authenticated);
        assert_eq!(nav.current_view(), View::Gallery);
    }

    #[test]
    fn test_code_locked_while_submitting() {
        let mut nav = controller();
        nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
        nav.dispatch(NavEvent::SubmitCode);

        assert_eq!(
            nav.dispatch(NavEvent::CodeChanged("WRONG".to_string())),
            Transition::Ignored
        );
        assert_eq!(nav.state().code, SECRET);
        assert_eq!(
            nav.dispatch(NavEvent::SubmissionSettled),
            Transition::ViewChanged(View::Gallery)
        );
    }

    #[test]
    fn test_settle_rechecks_code() {
        let mut nav = controller();
        nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
        nav.dispatch(NavEvent::SubmitCode);
        nav.state.code = "WRONG".to_string();

        assert_eq!(nav.dispatch(NavEvent::SubmissionSettled), Transition::Rejected);
        assert!(!nav.state().authenticated);
        assert!(!nav.state().submitting);
        assert_eq!(nav.current_view(), View::Gate);
        assert_eq!(nav.location().query(CODE_PARAM), None);
    }

    #[test]
    fn test_settle_without_submit_is_ignored() {
        let mut nav = controller();
        assert_eq!(nav.dispatch(NavEvent::SubmissionSettled), Transition::Ignored);
        assert_eq!(nav.current_view(), View::Gate);
    }

    #[test]
    fn test_go_back_resets_gate() {
        let mut nav = controller();
        enter_gallery(&mut nav);

        assert_eq!(
            nav.dispatch(NavEvent::GoBack),
            Transition::ViewChanged(View::Gate)
        );
        assert_eq!(nav.state(), &NavigationState::default());
        assert_eq!(nav.location().query(CODE_PARAM), None);
    }

    #[test]
    fn test_detail_dismiss_returns_to_gallery() {
        let mut nav = controller();
        enter_gallery(&mut nav);

        assert_eq!(
            nav.dispatch(NavEvent::SelectTemplate("voices-on-stage-card".to_string())),
            Transition::ViewChanged(View::Detail(TemplateId::VoicesOnStage))
        );
        assert_eq!(
            nav.state().active_template_id.as_deref(),
            Some("voices-on-stage")
        );

        assert_eq!(
            nav.dispatch(NavEvent::DismissDetail),
            Transition::ViewChanged(View::Gallery)
        );
        assert_eq!(nav.state().active_template_id, None);
        assert!(nav.state().authenticated);
    }

    #[test]
    fn test_external_selection_keeps_state() {
        let mut nav = controller();
        enter_gallery(&mut nav);
        let before = nav.state().clone();

        assert_eq!(
            nav.dispatch(NavEvent::SelectTemplate("personal-site".to_string())),
            Transition::OpenExternal {
                url: "https://mariacamilasolorza.com".to_string()
            }
        );
        assert_eq!(nav.state(), &before);
        assert_eq!(nav.current_view(), View::Gallery);
    }

    #[test]
    fn test_events_outside_their_view_are_ignored() {
        let mut nav = controller();
        assert_eq!(nav.dispatch(NavEvent::GoBack), Transition::Ignored);
        assert_eq!(nav.dispatch(NavEvent::DismissDetail), Transition::Ignored);
        assert_eq!(
            nav.dispatch(NavEvent::SelectTemplate("voices-on-stage-card".to_string())),
            Transition::Ignored
        );

        enter_gallery(&mut nav);
        assert_eq!(
            nav.dispatch(NavEvent::CodeChanged("other".to_string())),
            Transition::Ignored
        );
        assert_eq!(nav.state().code, SECRET);
    }
}
