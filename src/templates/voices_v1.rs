//! Voices on Stage V1: editorial layout, no FAQ, instant form confirmation.

use super::content::*;

pub static SITE: SiteContent = SiteContent {
    theme: SiteTheme::Paper,
    brand: "Voices on Stage · V1",
    edition: None,
    nav: &[
        NavLink { target: "programa", label: "Programa" },
        NavLink { target: "experiencia", label: "Experiencia" },
        NavLink { target: "testimonios", label: "Testimonios" },
        NavLink { target: "contacto", label: "Contacto" },
    ],
    nav_cta: "Aplicar ahora",
    hero: Hero {
        badge: "Edición 2025 · 10 semanas",
        headline: "Modela tu presencia escénica desde la primera semana",
        lead: "Entrenamiento integral para líderes, founders y equipos que necesitan comunicar con \
               claridad, narrativa y confianza. Finaliza con un evento en escenario real.",
        secondary: CtaLink { label: "Ver plan semanal", target: "programa" },
        primary: CtaLink { label: "Habla con el equipo", target: "contacto" },
    },
    highlights: &[
        Blurb {
            title: "Mentoría premium",
            text: "Acompañamiento semanal con feedback accionable y seguimiento personalizado.",
        },
        Blurb {
            title: "Evento final",
            text: "Presentación en escenario real con producción audiovisual y público invitado.",
        },
        Blurb {
            title: "Comunidad global",
            text: "Acceso a una red de speakers en Australia, LatAm y Europa.",
        },
    ],
    program: Some(ProgramSection {
        heading: "Programa semanal con foco en iteración",
        intro: Some(
            "Cada módulo combina herramientas técnicas, práctica guiada y un plan individual que se \
             ajusta según tus métricas de avance.",
        ),
        items: &[
            Blurb {
                title: "Bases de voz y presencia",
                text: "Respiración, anclaje corporal y proyección para ganar seguridad.",
            },
            Blurb {
                title: "Arquitectura narrativa",
                text: "Construye historias memorables con inicios potentes y cierres claros.",
            },
            Blurb {
                title: "Ensayos guiados",
                text: "Simulacros grabados, métricas y plan de mejora cada semana.",
            },
        ],
        checked: false,
    }),
    services: None,
    achievements: &[],
    experience: Some(Experience {
        heading: "Experiencia integral con soporte en vivo",
        body: "Selecciona tus objetivos y recibe acompañamiento en sesiones grupales, coaching uno a \
               uno, revisiones de guion y clinics de voz. El cierre es un evento tipo TED con \
               producción profesional.",
        checklist: &[
            "Clínicas de storytelling y slides efectivas",
            "Feedback inmediato con métricas de progreso",
            "Librería de recursos para practicar entre sesiones",
        ],
        schedule_title: "Semana tipo",
        schedule: &[
            ("Lunes:", "laboratorio de guion + feedback grupal."),
            ("Miércoles:", "coaching 1:1 enfocado en voz y presencia."),
            ("Viernes:", "ensayo general grabado y revisión métrica."),
        ],
        note: "El evento final se realiza en un teatro boutique con producción audiovisual, \
               fotografía y networking con empresas aliadas.",
    }),
    events: None,
    testimonials: TestimonialSection {
        heading: "Lo que dicen los speakers",
        items: &[
            Testimonial {
                quote: "En 10 semanas pasé de evitar presentaciones a liderar un townhall para 400 \
                        personas.",
                attribution: "Mariana D. · Product Lead",
            },
            Testimonial {
                quote: "Cada sesión tuvo foco y rigor. Terminás con un guion pulido y dominio del \
                        escenario.",
                attribution: "Luis A. · Consultant",
            },
        ],
    },
    spotlight: None,
    resources: None,
    faq: None,
    contact: ContactCopy {
        heading: "Conversemos sobre tu próxima charla",
        intro: Some(
            "Completa el formulario y el equipo coordinará una llamada de diagnóstico para \
             comprender tus metas de comunicación.",
        ),
        name_placeholder: "Nombre completo",
        email_placeholder: "Correo electrónico",
        city_placeholder: "Ciudad / País",
        interests: &[
            ContactInterest { value: "miedo-escenico", label: "Superar miedo escénico" },
            ContactInterest { value: "estructura-charla", label: "Estructurar una charla" },
            ContactInterest { value: "voz-presencia", label: "Mejorar voz y presencia" },
            ContactInterest { value: "equipo-corporativo", label: "Entrenamiento para mi equipo" },
        ],
        message_placeholder: "Cuéntanos qué te gustaría lograr",
        submit_label: "Enviar",
        sending_label: "Enviando…",
        note: "Cupos limitados · Programa premium",
        thanks: "¡Gracias! Te contactaremos en las próximas 48 horas.",
        behavior: SubmitBehavior::Instant { hide_after_ms: 4000 },
    },
    footer_owner: "Voices on Stage",
    footer_tagline: "Inspira · Comunica · Transforma",
};
