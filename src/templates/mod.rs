//! Template detail views.
//!
//! One static `SiteContent` per `TemplateId`, rendered by a single
//! `TemplateView`. Each mounted view owns its own FAQ and contact state.

pub mod content;
mod sections;
mod voices_on_stage;
mod voices_v1;
mod voices_v3;

use chrono::Datelike;
use dioxus::prelude::*;
use portal_core::{DetailMode, DetailViewState, TemplateId};

use crate::components::{BackButton, ContactForm, FaqList};
use crate::context::use_config;
use crate::hooks::use_scoped_timer;
use content::{SiteContent, SubmitBehavior};
use sections::*;

/// Content for a template. Total over the closed set of ids.
pub fn site_for(template: TemplateId) -> &'static SiteContent {
    match template {
        TemplateId::VoicesOnStage => &voices_on_stage::DARK,
        TemplateId::VoicesOnStageLight => &voices_on_stage::LIGHT,
        TemplateId::VoicesOnStageV3 => &voices_v3::SITE,
        TemplateId::VoicesOnStageV1 => &voices_v1::SITE,
    }
}

/// Full rendering of one template site.
///
/// In `DetailMode::Preview` the back button is omitted and the FAQ and
/// contact form ignore input.
#[component]
pub fn TemplateView(
    template: TemplateId,
    #[props(default)]
    mode: DetailMode,
    on_back: EventHandler<()>,
) -> Element {
    let site = site_for(template);
    let config = use_config();
    let mut state = use_signal(DetailViewState::default);
    let timer = use_scoped_timer();
    let year = use_hook(|| chrono::Local::now().year());

    let on_toggle = move |id: String| {
        if mode.interactive() {
            state.write().toggle_faq(&id);
        }
    };

    let on_submit = move |_: ()| {
        if !mode.interactive() {
            return;
        }
        let plan = state
            .write()
            .submit(site.contact.behavior, config.submit_delay());
        match plan.delay() {
            Some(delay) => {
                tracing::info!("Contact form submitted for {}", template);
                timer.schedule(delay, move || plan.fire(&mut state.write()));
            }
            None => tracing::debug!("Contact form already sending for {}", template),
        }
    };

    let current = state.read().clone();

    rsx! {
        div { class: "{site.theme.class()}",
            if mode.show_back_button() {
                BackButton { on_back }
            }

            SiteHeader { site }

            main {
                HeroSection { hero: &site.hero, highlights: site.highlights }
                if let Some(program) = &site.program {
                    ProgramBlock { program }
                }
                if let Some(services) = &site.services {
                    ServicesBlock { services }
                }
                if !site.achievements.is_empty() {
                    AchievementsBlock { achievements: site.achievements }
                }
                if let Some(experience) = &site.experience {
                    ExperienceBlock { experience }
                }
                if let Some(events) = &site.events {
                    EventsBlock { events }
                }
                TestimonialsBlock { testimonials: &site.testimonials }
                if let Some(spotlight) = &site.spotlight {
                    SpotlightBlock { spotlight }
                }
                if let Some(resources) = &site.resources {
                    ResourcesBlock { resources }
                }
                if let Some(faq) = &site.faq {
                    section { id: "faq", class: "site-section",
                        div { class: "site-container",
                            if let Some(heading) = faq.heading {
                                h2 { class: "site-heading", "{heading}" }
                            }
                            FaqList {
                                items: faq.items,
                                open: current.open_faq.clone(),
                                on_toggle,
                            }
                        }
                    }
                }
                section { id: "contacto", class: "site-section site-section--band",
                    div { class: "site-container",
                        h2 { class: "site-heading", "{site.contact.heading}" }
                        if let Some(intro) = site.contact.intro {
                            p { class: "site-intro", "{intro}" }
                        }
                        div { class: "site-card",
                            ContactForm {
                                copy: &site.contact,
                                sending: current.is_sending(),
                                sent: current.is_sent(),
                                on_submit,
                            }
                        }
                    }
                }
            }

            SiteFooter { owner: site.footer_owner, tagline: site.footer_tagline, year }
        }
    }
}
