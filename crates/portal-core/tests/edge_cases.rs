//! Edge case and fallback tests
//!
//! Unknown template keys, registries of unusual size and gate inputs at
//! the boundaries of the validation predicate.

use portal_core::{
    columns, AccessCode, AccessGate, CreatedAt, DisplayLocale, GridColumns, MemoryLocation,
    NavEvent, NavigationController, TemplateDescriptor, TemplateRegistry, Transition, View,
};

const SECRET: &str = "CAMILA-2025";

fn descriptor(id: &str, detail_id: Option<&str>) -> TemplateDescriptor {
    TemplateDescriptor {
        id: id.to_string(),
        title: format!("Template {}", id),
        variant_title: None,
        author: "Studio".to_string(),
        description: "Test template".to_string(),
        created_at: CreatedAt::new("2025-10-01", DisplayLocale::En).unwrap(),
        preview_image: format!("/previews/{}.png", id),
        preview_url: format!("https://example.com/{}", id),
        detail_id: detail_id.map(str::to_string),
        preview_id: None,
    }
}

fn controller_with(registry: TemplateRegistry) -> NavigationController<MemoryLocation> {
    let mut nav = NavigationController::new(
        AccessGate::new(AccessCode::new(SECRET).unwrap()),
        registry,
        MemoryLocation::default(),
    );
    nav.dispatch(NavEvent::CodeChanged(SECRET.to_string()));
    nav.dispatch(NavEvent::SubmitCode);
    nav.dispatch(NavEvent::SubmissionSettled);
    nav
}

// ============================================================================
// Unknown Template Fallback
// ============================================================================

/// A detail key outside the known set keeps the gallery and is not stored
#[test]
fn test_unknown_detail_id_falls_back_to_gallery() {
    let registry = TemplateRegistry::new(vec![descriptor("retired", Some("voices-retired"))]).unwrap();
    let mut nav = controller_with(registry);

    assert_eq!(
        nav.dispatch(NavEvent::SelectTemplate("retired".to_string())),
        Transition::Stay
    );
    assert_eq!(nav.current_view(), View::Gallery);
    assert_eq!(nav.state().active_template_id, None);

    // Still on the gallery, so going back works normally
    assert_eq!(
        nav.dispatch(NavEvent::GoBack),
        Transition::ViewChanged(View::Gate)
    );
}

/// Selecting an id that is not a card does nothing
#[test]
fn test_unknown_card_id_ignored() {
    let registry = TemplateRegistry::builtin(DisplayLocale::En).unwrap();
    let mut nav = controller_with(registry);
    assert_eq!(
        nav.dispatch(NavEvent::SelectTemplate("nope".to_string())),
        Transition::Ignored
    );
    assert_eq!(nav.current_view(), View::Gallery);
}

// ============================================================================
// Registry Size
// ============================================================================

/// An empty registry still renders a (single-column) gallery
#[test]
fn test_empty_registry() {
    let registry = TemplateRegistry::new(Vec::new()).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.columns(), GridColumns::Single);

    let nav = controller_with(registry);
    assert_eq!(nav.current_view(), View::Gallery);
}

#[test]
fn test_column_boundaries() {
    assert_eq!(columns(0), GridColumns::Single);
    assert_eq!(columns(1), GridColumns::Single);
    assert_eq!(columns(2), GridColumns::Double);
    assert_eq!(columns(usize::MAX), GridColumns::Double);
}

// ============================================================================
// Gate Input Boundaries
// ============================================================================

/// Whitespace around the code is ignored, whitespace inside is not
#[test]
fn test_whitespace_handling() {
    let gate = AccessGate::new(AccessCode::new(SECRET).unwrap());
    for ok in ["CAMILA-2025", " CAMILA-2025", "CAMILA-2025\n", "\t CAMILA-2025 \r\n"] {
        assert!(gate.is_valid(ok), "{:?}", ok);
    }
    for bad in ["CAMILA - 2025", "CAMILA-2025.", "CAMILA\u{2011}2025", "ＣAMILA-2025"] {
        assert!(!gate.is_valid(bad), "{:?}", bad);
    }
}

/// Unicode secrets compare exactly
#[test]
fn test_unicode_secret() {
    let gate = AccessGate::new(AccessCode::new("Señora-2025").unwrap());
    assert!(gate.is_valid("Señora-2025"));
    assert!(!gate.is_valid("Senora-2025"));
}

/// Very long inputs are simply invalid
#[test]
fn test_long_input() {
    let gate = AccessGate::new(AccessCode::new(SECRET).unwrap());
    let long = SECRET.repeat(1000);
    assert!(!gate.is_valid(&long));
    assert!(gate.shows_error(&long));
}
