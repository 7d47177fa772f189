//! Property-based tests for the gate, the FAQ accordion and the controller
//!
//! Uses proptest to check invariants over arbitrary inputs and event sequences.

use proptest::prelude::*;
use portal_core::{
    columns, AccessCode, AccessGate, DetailViewState, DisplayLocale, GridColumns, Location,
    MemoryLocation, NavEvent, NavigationController, PreviewFrame, TemplateId, TemplateRegistry,
    View, CODE_PARAM,
};

const SECRET: &str = "CAMILA-2025";

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary codes, with the secret mixed in so valid inputs actually occur
fn code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => ".{0,40}",
        1 => "[ \t]{0,3}".prop_map(|pad| format!("{}{}{}", pad, SECRET, pad)),
        1 => Just(SECRET.to_lowercase()),
    ]
}

fn faq_id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["faq-a", "faq-b", "faq-c", "faq-d"]).prop_map(str::to_string)
}

fn event_strategy() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        2 => code_strategy().prop_map(NavEvent::CodeChanged),
        2 => Just(NavEvent::SubmitCode),
        2 => Just(NavEvent::SubmissionSettled),
        2 => prop::sample::select(vec![
            "voices-on-stage-card",
            "voices-on-stage-light-card",
            "personal-site",
            "missing",
        ])
        .prop_map(|id| NavEvent::SelectTemplate(id.to_string())),
        1 => Just(NavEvent::DismissDetail),
        1 => Just(NavEvent::GoBack),
    ]
}

fn gate() -> AccessGate {
    AccessGate::new(AccessCode::new(SECRET).unwrap())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Validity is exactly trimmed equality with the secret
    #[test]
    fn validity_is_trimmed_equality(code in code_strategy()) {
        prop_assert_eq!(gate().is_valid(&code), code.trim() == SECRET);
    }

    /// Submit is never enabled for an invalid code
    #[test]
    fn invalid_code_never_submittable(code in code_strategy(), submitting in any::<bool>()) {
        let gate = gate();
        if !gate.is_valid(&code) {
            prop_assert!(!gate.can_submit(&code, submitting));
        }
        if submitting {
            prop_assert!(!gate.can_submit(&code, submitting));
        }
    }

    /// At most one FAQ entry is ever open, and it is the last one opened
    #[test]
    fn faq_exclusive_open(clicks in prop::collection::vec(faq_id_strategy(), 0..30)) {
        let mut state = DetailViewState::default();
        for id in &clicks {
            let was_open = state.is_faq_open(id);
            state.toggle_faq(id);
            if was_open {
                prop_assert_eq!(state.open_faq.clone(), None);
            } else {
                prop_assert_eq!(state.open_faq.as_deref(), Some(id.as_str()));
            }
        }
    }

    /// Column layout depends only on the count
    #[test]
    fn columns_threshold(n in 0usize..10_000) {
        let expected = if n <= 1 { GridColumns::Single } else { GridColumns::Double };
        prop_assert_eq!(columns(n), expected);
    }

    /// Scaled content always fills the viewport exactly
    #[test]
    fn preview_fills_viewport(scale in 0.01f32..=1.0) {
        let frame = PreviewFrame { scale, ..PreviewFrame::default() };
        prop_assert!(frame.validate().is_ok());
        prop_assert!((frame.content_percent() * scale - 100.0).abs() < 0.01);
    }

    /// The controller's state and view stay consistent under any event sequence
    #[test]
    fn controller_invariants(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut nav = NavigationController::new(
            gate(),
            TemplateRegistry::builtin(DisplayLocale::En).unwrap(),
            MemoryLocation::default(),
        );

        for event in events {
            nav.dispatch(event);
            let state = nav.state();

            // Only known detail keys are ever stored
            if let Some(key) = state.active_template_id.as_deref() {
                prop_assert!(TemplateId::from_key(key).is_some());
            }
            // The gallery is reached only with the secret in the field
            if state.authenticated || state.submitting {
                prop_assert_eq!(state.code.trim(), SECRET);
            }

            match nav.current_view() {
                View::Gate => prop_assert!(!state.authenticated),
                View::Gallery => prop_assert!(state.authenticated),
                View::Detail(id) => {
                    prop_assert!(state.authenticated);
                    prop_assert_eq!(state.active_template_id.as_deref(), Some(id.key()));
                }
            }

            // The echoed code is always the trimmed secret, and only while
            // a submission is in flight or after it settled
            if let Some(code) = nav.location().query(CODE_PARAM) {
                prop_assert_eq!(code, SECRET);
                prop_assert!(state.authenticated || state.submitting);
            }
        }
    }
}
