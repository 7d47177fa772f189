//! Static page sections shared by every template site.

use dioxus::prelude::*;

use super::content::*;
use crate::components::{Icon, IconGlyph};

#[component]
pub fn SiteHeader(site: &'static SiteContent) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "brand-mark",
                    div { class: "brand-mark__badge",
                        IconGlyph { icon: Icon::Mic, class: "brand-mark__icon" }
                    }
                    span { class: "brand-mark__name", "{site.brand}" }
                    if let Some(edition) = site.edition {
                        span { class: "brand-mark__edition", "{edition}" }
                    }
                }
                nav { class: "site-nav",
                    for link in site.nav.iter() {
                        a { key: "{link.target}", href: "#{link.target}", "{link.label}" }
                    }
                }
                a { class: "site-button site-button--primary site-header__cta", href: "#contacto",
                    "{site.nav_cta}"
                }
            }
        }
    }
}

#[component]
pub fn HeroSection(hero: &'static Hero, highlights: &'static [Blurb]) -> Element {
    rsx! {
        section { id: "home", class: "site-section site-hero",
            div { class: "site-hero__glow" }
            div { class: "site-hero__inner",
                span { class: "site-pill", "{hero.badge}" }
                h1 { class: "site-hero__headline", "{hero.headline}" }
                p { class: "site-hero__lead", "{hero.lead}" }
                div { class: "site-hero__actions",
                    a { class: "site-button site-button--ghost", href: "#{hero.secondary.target}",
                        "{hero.secondary.label}"
                    }
                    a { class: "site-button site-button--primary", href: "#{hero.primary.target}",
                        "{hero.primary.label}"
                    }
                }
            }
            if !highlights.is_empty() {
                div { class: "site-grid site-grid--3 site-hero__highlights",
                    for item in highlights.iter() {
                        article { key: "{item.title}", class: "site-card",
                            h3 { class: "site-card__title", "{item.title}" }
                            p { class: "site-card__text", "{item.text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProgramBlock(program: &'static ProgramSection) -> Element {
    rsx! {
        section { id: "programa", class: "site-section",
            div { class: "site-container",
                h2 { class: "site-heading", "{program.heading}" }
                if let Some(intro) = program.intro {
                    p { class: "site-intro", "{intro}" }
                }
                div { class: "site-grid site-grid--3",
                    for item in program.items.iter() {
                        div { key: "{item.title}", class: "site-card site-card--row",
                            if program.checked {
                                IconGlyph { icon: Icon::Check, class: "site-accent" }
                            }
                            div {
                                div { class: "site-card__title", "{item.title}" }
                                p { class: "site-card__text", "{item.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ServicesBlock(services: &'static ServiceSection) -> Element {
    rsx! {
        section { id: "servicios", class: "site-section",
            div { class: "site-container",
                h2 { class: "site-heading", "{services.heading}" }
                div { class: "site-grid site-grid--3",
                    for item in services.items.iter() {
                        div { key: "{item.title}", class: "site-card",
                            div { class: "site-card__row",
                                IconGlyph { icon: item.icon, class: "site-accent" }
                                div {
                                    h3 { class: "site-card__title", "{item.title}" }
                                    if let Some(subtitle) = item.subtitle {
                                        p { class: "site-card__meta", "{subtitle}" }
                                    }
                                }
                            }
                            p { class: "site-card__text", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AchievementsBlock(achievements: &'static [Achievement]) -> Element {
    rsx! {
        section { id: "logros", class: "site-section",
            div { class: "site-container site-grid site-grid--3",
                for item in achievements.iter() {
                    div { key: "{item.label}", class: "site-card site-card--center",
                        div { class: "site-stat", "{item.value}" }
                        div { class: "site-card__meta", "{item.label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceBlock(experience: &'static Experience) -> Element {
    rsx! {
        section { id: "experiencia", class: "site-section site-section--band",
            div { class: "site-container site-split",
                div {
                    h2 { class: "site-heading", "{experience.heading}" }
                    p { class: "site-intro", "{experience.body}" }
                    ul { class: "site-checklist",
                        for line in experience.checklist.iter() {
                            li { key: "{line}",
                                IconGlyph { icon: Icon::Check, class: "site-accent" }
                                "{line}"
                            }
                        }
                    }
                }
                div { class: "site-card site-card--feature",
                    h3 { class: "site-card__title", "{experience.schedule_title}" }
                    ol { class: "site-schedule",
                        for (day, activity) in experience.schedule.iter() {
                            li { key: "{day}",
                                strong { "{day}" }
                                " {activity}"
                            }
                        }
                    }
                    p { class: "site-card__meta", "{experience.note}" }
                }
            }
        }
    }
}

#[component]
pub fn EventsBlock(events: &'static EventList) -> Element {
    rsx! {
        section { id: "eventos", class: "site-section",
            div { class: "site-container",
                h2 { class: "site-heading", "{events.heading}" }
                div { class: "site-grid site-grid--3",
                    for event in events.items.iter() {
                        div { key: "{event.title}", class: "site-card",
                            h3 { class: "site-card__title", "{event.title}" }
                            p { class: "site-card__meta", "{event.meta}" }
                            p { class: "site-card__text", "{event.description}" }
                            a { class: "site-link", href: "#contacto",
                                "{events.action_label}"
                                IconGlyph { icon: Icon::ArrowRight }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TestimonialsBlock(testimonials: &'static TestimonialSection) -> Element {
    rsx! {
        section { id: "testimonios", class: "site-section",
            div { class: "site-container",
                h2 { class: "site-heading", "{testimonials.heading}" }
                div { class: "site-grid site-grid--3",
                    for item in testimonials.items.iter() {
                        blockquote { key: "{item.attribution}", class: "site-card",
                            p { class: "site-quote", "“{item.quote}”" }
                            footer { class: "site-card__meta", "{item.attribution}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SpotlightBlock(spotlight: &'static EventSpotlight) -> Element {
    rsx! {
        section { id: "evento", class: "site-section",
            div { class: "site-container",
                h2 { class: "site-heading", "{spotlight.heading}" }
                div { class: "site-card",
                    div { class: "site-spotlight",
                        div { class: "site-spotlight__facts",
                            for fact in spotlight.facts.iter() {
                                div { key: "{fact}", "{fact}" }
                            }
                        }
                        p { class: "site-card__text", "{spotlight.body}" }
                    }
                    a {
                        class: "site-button site-button--primary",
                        href: "#{spotlight.cta.target}",
                        "{spotlight.cta.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResourcesBlock(resources: &'static ResourceList) -> Element {
    rsx! {
        section { id: "blog", class: "site-section",
            div { class: "site-container",
                h2 { class: "site-heading", "{resources.heading}" }
                div { class: "site-grid site-grid--3",
                    for post in resources.items.iter() {
                        div { key: "{post.title}", class: "site-card",
                            h3 { class: "site-card__title", "{post.title}" }
                            p { class: "site-card__text", "{post.text}" }
                            span { class: "site-link",
                                "{resources.action_label}"
                                IconGlyph { icon: Icon::ArrowRight }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter(owner: &'static str, tagline: &'static str, year: i32) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { "© {year} {owner}. Todos los derechos reservados." }
                div { class: "site-footer__tagline", "{tagline}" }
            }
        }
    }
}
