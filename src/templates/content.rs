//! Static copy for the template sites.
//!
//! Every variant is a `SiteContent` constant; optional sections are `None`
//! (or an empty slice) when a variant does not carry them.

pub use portal_core::SubmitBehavior;

use crate::components::Icon;

/// Visual family a site renders with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteTheme {
    /// Near-black stage with orange/gold accents
    Dark,
    /// Cream paper with the same accents
    Light,
    /// Dark with elevated, shadowed cards
    Stage,
    /// Warm editorial palette
    Paper,
}

impl SiteTheme {
    pub fn class(&self) -> &'static str {
        match self {
            SiteTheme::Dark => "site site--dark",
            SiteTheme::Light => "site site--light",
            SiteTheme::Stage => "site site--stage",
            SiteTheme::Paper => "site site--paper",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct NavLink {
    /// Section id scrolled to
    pub target: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CtaLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub lead: &'static str,
    pub secondary: CtaLink,
    pub primary: CtaLink,
}

/// Title and one line of body text
#[derive(Debug, PartialEq)]
pub struct Blurb {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ProgramSection {
    pub heading: &'static str,
    pub intro: Option<&'static str>,
    pub items: &'static [Blurb],
    /// Check mark before each item
    pub checked: bool,
}

#[derive(Debug, PartialEq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct ServiceSection {
    pub heading: &'static str,
    pub items: &'static [ServiceItem],
}

#[derive(Debug, PartialEq)]
pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
}

/// Long-form section with a checklist and a sample week
#[derive(Debug, PartialEq)]
pub struct Experience {
    pub heading: &'static str,
    pub body: &'static str,
    pub checklist: &'static [&'static str],
    pub schedule_title: &'static str,
    /// (day, activity)
    pub schedule: &'static [(&'static str, &'static str)],
    pub note: &'static str,
}

/// Single headline event with quick facts
#[derive(Debug, PartialEq)]
pub struct EventSpotlight {
    pub heading: &'static str,
    pub facts: &'static [&'static str],
    pub body: &'static str,
    pub cta: CtaLink,
}

#[derive(Debug, PartialEq)]
pub struct EventItem {
    pub title: &'static str,
    pub meta: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct EventList {
    pub heading: &'static str,
    pub items: &'static [EventItem],
    pub action_label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TestimonialSection {
    pub heading: &'static str,
    pub items: &'static [Testimonial],
}

/// Blog-style resource cards
#[derive(Debug, PartialEq)]
pub struct ResourceList {
    pub heading: &'static str,
    pub items: &'static [Blurb],
    pub action_label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqSection {
    pub heading: Option<&'static str>,
    pub items: &'static [FaqItem],
}

#[derive(Debug, PartialEq)]
pub struct ContactInterest {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactCopy {
    pub heading: &'static str,
    pub intro: Option<&'static str>,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub city_placeholder: &'static str,
    pub interests: &'static [ContactInterest],
    pub message_placeholder: &'static str,
    pub submit_label: &'static str,
    pub sending_label: &'static str,
    pub note: &'static str,
    pub thanks: &'static str,
    pub behavior: SubmitBehavior,
}

#[derive(Debug, PartialEq)]
pub struct SiteContent {
    pub theme: SiteTheme,
    pub brand: &'static str,
    pub edition: Option<&'static str>,
    pub nav: &'static [NavLink],
    pub nav_cta: &'static str,
    pub hero: Hero,
    /// Feature tiles under the hero
    pub highlights: &'static [Blurb],
    pub program: Option<ProgramSection>,
    pub services: Option<ServiceSection>,
    pub achievements: &'static [Achievement],
    pub experience: Option<Experience>,
    pub events: Option<EventList>,
    pub testimonials: TestimonialSection,
    pub spotlight: Option<EventSpotlight>,
    pub resources: Option<ResourceList>,
    pub faq: Option<FaqSection>,
    pub contact: ContactCopy,
    pub footer_owner: &'static str,
    pub footer_tagline: &'static str,
}
