//! Template registry - the static list of templates shown in the gallery.
//!
//! Descriptors are built once at startup. The set of in-app detail views is
//! closed ([`TemplateId`]); a descriptor either points into that set via
//! `detail_id` or opens its `preview_url` externally.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

/// `target` for external template links.
pub const EXTERNAL_TARGET: &str = "_blank";
/// `rel` for external template links, so the opened page cannot reach back.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Identifier of an in-app detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Dark, orange/gold edition
    VoicesOnStage,
    /// Light edition on cream background
    VoicesOnStageLight,
    /// Third revision with extended sections
    VoicesOnStageV3,
    /// First revision, single-page layout
    VoicesOnStageV1,
}

impl TemplateId {
    /// Every known detail view, in gallery order.
    pub const ALL: [TemplateId; 4] = [
        TemplateId::VoicesOnStage,
        TemplateId::VoicesOnStageLight,
        TemplateId::VoicesOnStageV3,
        TemplateId::VoicesOnStageV1,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TemplateId::VoicesOnStage => "voices-on-stage",
            TemplateId::VoicesOnStageLight => "voices-on-stage-light",
            TemplateId::VoicesOnStageV3 => "voices-on-stage-v3",
            TemplateId::VoicesOnStageV1 => "voices-on-stage-v1",
        }
    }

    /// Lookup over the closed set. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TemplateId {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| PortalError::UnknownTemplate(s.to_string()))
    }
}

/// Locale used to format creation dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocale {
    #[default]
    En,
    Es,
}

impl DisplayLocale {
    fn chrono_locale(&self) -> chrono::Locale {
        match self {
            DisplayLocale::En => chrono::Locale::en_US,
            DisplayLocale::Es => chrono::Locale::es_ES,
        }
    }

    fn date_format(&self) -> &'static str {
        match self {
            DisplayLocale::En => "%B %-d, %Y",
            DisplayLocale::Es => "%-d de %B de %Y",
        }
    }
}

impl FromStr for DisplayLocale {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(DisplayLocale::En),
            "es" | "es-es" | "es-cl" => Ok(DisplayLocale::Es),
            other => Err(PortalError::Config(format!("unsupported locale: {}", other))),
        }
    }
}

/// Creation date with its display label derived once at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedAt {
    pub iso: String,
    pub label: String,
}

impl CreatedAt {
    /// Parse an ISO `YYYY-MM-DD` date and format it for `locale`.
    pub fn new(iso: &str, locale: DisplayLocale) -> PortalResult<Self> {
        let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
            .map_err(|e| PortalError::InvalidDate(format!("{}: {}", iso, e)))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| PortalError::InvalidDate(iso.to_string()))?;
        let label = midnight
            .and_utc()
            .format_localized(locale.date_format(), locale.chrono_locale())
            .to_string();

        Ok(Self {
            iso: iso.to_string(),
            label,
        })
    }
}

/// Static metadata describing one listed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Unique key for list rendering
    pub id: String,
    pub title: String,
    pub variant_title: Option<String>,
    pub author: String,
    pub description: String,
    pub created_at: CreatedAt,
    /// Static asset shown when no live preview is available
    pub preview_image: String,
    /// Opened in a new context when there is no in-app detail view
    pub preview_url: String,
    /// Key into the detail-view set
    pub detail_id: Option<String>,
    /// Key selecting a live miniature for the card thumbnail
    pub preview_id: Option<String>,
}

impl TemplateDescriptor {
    /// Detail view to show as the card's live thumbnail, if any.
    pub fn live_preview(&self) -> Option<TemplateId> {
        self.preview_id.as_deref().and_then(TemplateId::from_key)
    }
}

/// What the card's "View Template" action does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Open the in-app detail view with this key
    OpenDetail(String),
    /// Open the URL in a new browsing context
    OpenExternal { url: String },
}

impl CardAction {
    pub fn for_descriptor(descriptor: &TemplateDescriptor) -> Self {
        match &descriptor.detail_id {
            Some(detail_id) => CardAction::OpenDetail(detail_id.clone()),
            None => CardAction::OpenExternal {
                url: descriptor.preview_url.clone(),
            },
        }
    }
}

/// Gallery grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridColumns {
    Single,
    Double,
}

impl GridColumns {
    pub fn class(&self) -> &'static str {
        match self {
            GridColumns::Single => "template-grid",
            GridColumns::Double => "template-grid template-grid--double",
        }
    }
}

/// Column layout for `count` cards: single column up to one card.
pub fn columns(count: usize) -> GridColumns {
    if count <= 1 {
        GridColumns::Single
    } else {
        GridColumns::Double
    }
}

/// Ordered, immutable list of descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    descriptors: Vec<TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(descriptors: Vec<TemplateDescriptor>) -> PortalResult<Self> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.id.as_str()) {
                return Err(PortalError::DuplicateTemplate(descriptor.id.clone()));
            }
        }
        Ok(Self { descriptors })
    }

    /// The portal's shipped templates, with dates formatted for `locale`.
    pub fn builtin(locale: DisplayLocale) -> PortalResult<Self> {
        let in_app = |id: TemplateId,
                      title: &str,
                      variant: &str,
                      description: &str,
                      iso: &str|
         -> PortalResult<TemplateDescriptor> {
            Ok(TemplateDescriptor {
                id: format!("{}-card", id.key()),
                title: title.to_string(),
                variant_title: Some(variant.to_string()),
                author: "Camila Solorza".to_string(),
                description: description.to_string(),
                created_at: CreatedAt::new(iso, locale)?,
                preview_image: format!("/previews/{}.png", id.key()),
                preview_url: format!("https://mariacamilasolorza.com/templates/{}", id.key()),
                detail_id: Some(id.key().to_string()),
                preview_id: Some(id.key().to_string()),
            })
        };

        Self::new(vec![
            in_app(
                TemplateId::VoicesOnStage,
                "Voices on Stage",
                "Dark edition",
                "Premium ten-week speaking program on a dark stage palette with orange and gold accents.",
                "2025-09-18",
            )?,
            in_app(
                TemplateId::VoicesOnStageLight,
                "Voices on Stage",
                "Light edition",
                "The same program on a warm cream palette, tuned for daylight reading.",
                "2025-09-22",
            )?,
            in_app(
                TemplateId::VoicesOnStageV3,
                "Voices on Stage",
                "Version 3",
                "Extended layout with a mentor bio, pricing tiers and a longer FAQ.",
                "2025-10-02",
            )?,
            in_app(
                TemplateId::VoicesOnStageV1,
                "Voices on Stage",
                "Version 1",
                "The first single-page draft: hero, program, testimonials and a contact form.",
                "2025-08-30",
            )?,
            TemplateDescriptor {
                id: "personal-site".to_string(),
                title: "Camila Solorza".to_string(),
                variant_title: Some("Personal site".to_string()),
                author: "Camila Solorza".to_string(),
                description: "Hosted personal site with coaching services and booking links."
                    .to_string(),
                created_at: CreatedAt::new("2025-07-14", locale)?,
                preview_image: "/previews/personal-site.png".to_string(),
                preview_url: "https://mariacamilasolorza.com".to_string(),
                detail_id: None,
                preview_id: None,
            },
        ])
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn columns(&self) -> GridColumns {
        columns(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id_lookup_is_closed() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::from_key(id.key()), Some(id));
            assert_eq!(id.key().parse::<TemplateId>().unwrap(), id);
        }
        assert_eq!(TemplateId::from_key("voices-on-ice"), None);
        assert!(matches!(
            "voices-on-ice".parse::<TemplateId>(),
            Err(PortalError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_columns() {
        assert_eq!(columns(0), columns(1));
        assert_eq!(columns(1), GridColumns::Single);
        assert_eq!(columns(2), GridColumns::Double);
        assert_eq!(columns(4), GridColumns::Double);
    }

    #[test]
    fn test_created_at_label_english() {
        let created = CreatedAt::new("2025-10-03", DisplayLocale::En).unwrap();
        assert_eq!(created.iso, "2025-10-03");
        assert_eq!(created.label, "October 3, 2025");
    }

    #[test]
    fn test_created_at_label_spanish() {
        let created = CreatedAt::new("2025-10-03", DisplayLocale::Es).unwrap();
        assert_eq!(created.label, "3 de octubre de 2025");
    }

    #[test]
    fn test_created_at_is_deterministic() {
        let a = CreatedAt::new("2025-01-31", DisplayLocale::En).unwrap();
        let b = CreatedAt::new("2025-01-31", DisplayLocale::En).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_created_at_rejects_bad_iso() {
        assert!(matches!(
            CreatedAt::new("03/10/2025", DisplayLocale::En),
            Err(PortalError::InvalidDate(_))
        ));
        assert!(CreatedAt::new("2025-02-30", DisplayLocale::En).is_err());
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("EN".parse::<DisplayLocale>().unwrap(), DisplayLocale::En);
        assert_eq!("es-CL".parse::<DisplayLocale>().unwrap(), DisplayLocale::Es);
        assert!("fr".parse::<DisplayLocale>().is_err());
    }

    #[test]
    fn test_builtin_registry() {
        let registry = TemplateRegistry::builtin(DisplayLocale::En).unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.columns(), GridColumns::Double);

        // Every in-app descriptor points into the closed set
        for descriptor in registry.iter() {
            if let Some(detail_id) = &descriptor.detail_id {
                assert!(TemplateId::from_key(detail_id).is_some(), "{}", detail_id);
            }
        }

        let external = registry.get("personal-site").unwrap();
        assert_eq!(
            CardAction::for_descriptor(external),
            CardAction::OpenExternal {
                url: "https://mariacamilasolorza.com".to_string()
            }
        );
        assert_eq!(external.live_preview(), None);
    }

    #[test]
    fn test_card_action_follows_detail_id() {
        let registry = TemplateRegistry::builtin(DisplayLocale::En).unwrap();
        let dark = registry.get("voices-on-stage-card").unwrap();
        assert_eq!(
            CardAction::for_descriptor(dark),
            CardAction::OpenDetail("voices-on-stage".to_string())
        );
        assert_eq!(dark.live_preview(), Some(TemplateId::VoicesOnStage));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let registry = TemplateRegistry::builtin(DisplayLocale::En).unwrap();
        let first = registry.iter().next().cloned().unwrap();
        let result = TemplateRegistry::new(vec![first.clone(), first]);
        assert!(matches!(result, Err(PortalError::DuplicateTemplate(_))));
    }

    #[test]
    fn test_unknown_preview_id_falls_back_to_image() {
        let registry = TemplateRegistry::builtin(DisplayLocale::En).unwrap();
        let mut descriptor = registry.iter().next().cloned().unwrap();
        descriptor.preview_id = Some("retired-preview".to_string());
        assert_eq!(descriptor.live_preview(), None);
    }
}
