//! End-to-end navigation flows through the controller
//!
//! Drives the controller the way the desktop UI does: one event per user
//! interaction, checking the visible view and the echoed query after each.

use portal_core::{
    AccessCode, AccessGate, DisplayLocale, Location, MemoryLocation, NavEvent,
    NavigationController, TemplateId, TemplateRegistry, Transition, View, CODE_PARAM,
};

const SECRET: &str = "CAMILA-2025";

fn controller() -> NavigationController<MemoryLocation> {
    NavigationController::new(
        AccessGate::new(AccessCode::new(SECRET).unwrap()),
        TemplateRegistry::builtin(DisplayLocale::En).unwrap(),
        MemoryLocation::default(),
    )
}

/// Gate -> Gallery -> Detail -> Gallery -> Gate, checking every stop
#[test]
fn test_full_session() {
    let mut nav = controller();
    assert_eq!(nav.current_view(), View::Gate);

    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    assert!(matches!(
        nav.dispatch(NavEvent::SubmitCode),
        Transition::SubmitStarted { .. }
    ));
    assert_eq!(nav.location().href(), "http://localhost/?code=CAMILA-2025");
    assert_eq!(
        nav.dispatch(NavEvent::SubmissionSettled),
        Transition::ViewChanged(View::Gallery)
    );

    nav.dispatch(NavEvent::SelectTemplate("voices-on-stage-card".to_string()));
    assert_eq!(nav.current_view(), View::Detail(TemplateId::VoicesOnStage));

    // Dismiss goes back to the gallery, not the gate
    nav.dispatch(NavEvent::DismissDetail);
    assert_eq!(nav.current_view(), View::Gallery);
    assert_eq!(nav.location().query(CODE_PARAM).as_deref(), Some(SECRET));

    nav.dispatch(NavEvent::GoBack);
    assert_eq!(nav.current_view(), View::Gate);
    assert_eq!(nav.state().code, "");
    assert_eq!(nav.location().href(), "http://localhost/");
}

/// Every in-app template can be opened and closed
#[test]
fn test_every_detail_view_reachable() {
    let mut nav = controller();
    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    nav.dispatch(NavEvent::SubmitCode);
    nav.dispatch(NavEvent::SubmissionSettled);

    let card_ids: Vec<(String, Option<String>)> = nav
        .registry()
        .iter()
        .map(|d| (d.id.clone(), d.detail_id.clone()))
        .collect();

    let mut opened = Vec::new();
    for (card_id, detail_id) in card_ids {
        let transition = nav.dispatch(NavEvent::SelectTemplate(card_id));
        match detail_id {
            Some(key) => {
                let expected = TemplateId::from_key(&key).unwrap();
                assert_eq!(transition, Transition::ViewChanged(View::Detail(expected)));
                opened.push(expected);
                nav.dispatch(NavEvent::DismissDetail);
            }
            None => assert!(matches!(transition, Transition::OpenExternal { .. })),
        }
        assert_eq!(nav.current_view(), View::Gallery);
    }

    assert_eq!(opened, TemplateId::ALL.to_vec());
}

/// Wrong codes can be retried indefinitely
#[test]
fn test_no_lockout_after_failures() {
    let mut nav = controller();
    for attempt in 0..10 {
        nav.dispatch(NavEvent::CodeChanged(format!("WRONG-{}", attempt)));
        assert_eq!(nav.dispatch(NavEvent::SubmitCode), Transition::Rejected);
    }

    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    assert!(nav.can_submit());
    assert!(matches!(
        nav.dispatch(NavEvent::SubmitCode),
        Transition::SubmitStarted { .. }
    ));
}

/// Re-entering after going back requires the code again
#[test]
fn test_reentry_after_go_back() {
    let mut nav = controller();
    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    nav.dispatch(NavEvent::SubmitCode);
    nav.dispatch(NavEvent::SubmissionSettled);
    nav.dispatch(NavEvent::GoBack);

    assert!(!nav.can_submit());
    assert_eq!(nav.dispatch(NavEvent::SubmitCode), Transition::Rejected);

    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    nav.dispatch(NavEvent::SubmitCode);
    assert_eq!(
        nav.dispatch(NavEvent::SubmissionSettled),
        Transition::ViewChanged(View::Gallery)
    );
}

/// Typing over a code that is already submitting cannot change what gets in
#[test]
fn test_edit_during_submit_keeps_submitted_code() {
    let mut nav = controller();
    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    assert!(matches!(
        nav.dispatch(NavEvent::SubmitCode),
        Transition::SubmitStarted { .. }
    ));

    assert_eq!(
        nav.dispatch(NavEvent::CodeChanged("WRONG".to_string())),
        Transition::Ignored
    );
    assert_eq!(
        nav.dispatch(NavEvent::SubmissionSettled),
        Transition::ViewChanged(View::Gallery)
    );
    assert_eq!(nav.state().code, SECRET);
    assert_eq!(nav.location().query(CODE_PARAM).as_deref(), Some(SECRET));
}
