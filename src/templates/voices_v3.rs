//! Voices on Stage V3: stacked sections with events and a resources feed.

use super::content::*;
use super::voices_on_stage::{ACHIEVEMENTS, FAQ};
use crate::components::Icon;

pub static SITE: SiteContent = SiteContent {
    theme: SiteTheme::Stage,
    brand: "VOICES ON STAGE",
    edition: Some("V3 Edition"),
    nav: &[
        NavLink { target: "home", label: "Inicio" },
        NavLink { target: "programa", label: "Programa" },
        NavLink { target: "servicios", label: "Servicios" },
        NavLink { target: "logros", label: "Logros" },
        NavLink { target: "eventos", label: "Eventos" },
        NavLink { target: "testimonios", label: "Testimonios" },
        NavLink { target: "blog", label: "Blog" },
        NavLink { target: "faq", label: "FAQ" },
        NavLink { target: "contacto", label: "Contacto" },
    ],
    nav_cta: "Inscríbete",
    hero: Hero {
        badge: "Edición V3 · Orange + Gold",
        headline: "Tu voz merece un escenario.",
        lead: "Un programa premium de 10 semanas para comunicar con seguridad, autenticidad y \
               liderazgo. Finaliza con un evento en escenario real estilo TED.",
        secondary: CtaLink { label: "Ver Programa", target: "programa" },
        primary: CtaLink { label: "Próximos Eventos", target: "eventos" },
    },
    highlights: &[],
    program: Some(ProgramSection {
        heading: "Programa 10 semanas",
        intro: Some(
            "Entrenamiento premium con acompañamiento cercano, objetivos claros y métricas para \
             medir tu progreso en voz, narrativa y liderazgo.",
        ),
        items: &[
            Blurb { title: "Voz y presencia", text: "Respiración, proyección, dicción y manejo del cuerpo." },
            Blurb { title: "Storytelling", text: "Estructura, claridad y narrativa memorable." },
            Blurb { title: "Pánico a poder", text: "Estrategias para el miedo escénico y manejo de nervios." },
            Blurb { title: "Diseño de charla", text: "Construcción de mensaje, slides esenciales y ritmo." },
            Blurb { title: "Ensayos guiados", text: "Prácticas con feedback accionable todas las semanas." },
            Blurb { title: "Evento final", text: "Presentación en Voices on Stage frente a público real." },
        ],
        checked: true,
    }),
    services: Some(ServiceSection {
        heading: "Formación a tu medida",
        items: &[
            ServiceItem {
                title: "Coaching 1:1",
                subtitle: Some("Entrenamiento personalizado"),
                description: "Sesiones privadas enfocadas en storytelling, voz, presencia y dicción \
                              con feedback de alta exigencia.",
                icon: Icon::Users,
            },
            ServiceItem {
                title: "Workshops para equipos",
                subtitle: Some("Empresas & organizaciones"),
                description: "Talleres prácticos para potenciar presentaciones, liderazgo y \
                              comunicación con clientes.",
                icon: Icon::Star,
            },
            ServiceItem {
                title: "Evento final",
                subtitle: Some("Voices on Stage"),
                description: "Un escenario profesional con curaduría, producción audiovisual y \
                              ponencias frente a público real.",
                icon: Icon::Mic,
            },
        ],
    }),
    achievements: ACHIEVEMENTS,
    experience: None,
    events: Some(EventList {
        heading: "Eventos y experiencias",
        items: &[
            EventItem {
                title: "Voices on Stage 2025",
                meta: "Octubre 2025 · Gold Coast · Presencial + Streaming",
                description: "Cierre del programa con ponencias en vivo, producción profesional y \
                              networking con invitados clave.",
            },
            EventItem {
                title: "Masterclass Storytelling",
                meta: "Próxima fecha · Online",
                description: "Define la arquitectura de tu charla y aprende recursos narrativos \
                              para sostener la atención del público.",
            },
            EventItem {
                title: "Taller Voz & Presencia",
                meta: "Próxima fecha · Híbrido",
                description: "Dicción, respiración, proyección y lenguaje corporal para escenarios \
                              exigentes y cámaras.",
            },
        ],
        action_label: "Reservar cupo",
    }),
    testimonials: TestimonialSection {
        heading: "Lo que dicen quienes ya se subieron al escenario",
        items: &[
            Testimonial {
                quote: "Pasé de temer al escenario a disfrutarlo. La práctica semanal y el feedback \
                        marcaron la diferencia por completo.",
                attribution: "Ana P. · Ingeniera · Sydney",
            },
            Testimonial {
                quote: "Descubrí que mi historia puede inspirar y aprendí a contarla sin miedo ni \
                        improvisación.",
                attribution: "Daniel R. · Founder · Melbourne",
            },
            Testimonial {
                quote: "El evento final fue inolvidable. Me sentí en un TEDx y ahora lidero charlas \
                        en mi empresa.",
                attribution: "Sofía G. · HR Manager · Brisbane",
            },
        ],
    },
    spotlight: None,
    resources: Some(ResourceList {
        heading: "Recursos y consejos prácticos",
        items: &[
            Blurb {
                title: "Calma tus nervios antes de hablar",
                text: "Técnicas inmediatas de respiración y foco para entrar con seguridad.",
            },
            Blurb {
                title: "Estructura una charla memorable",
                text: "Inicio potente, historia central y cierre con acción, paso a paso.",
            },
            Blurb {
                title: "Voz saludable para escenarios",
                text: "Hábitos diarios para proteger la voz y proyectar sin esfuerzos.",
            },
        ],
        action_label: "Leer artículo",
    }),
    faq: Some(FaqSection {
        heading: Some("Preguntas frecuentes"),
        items: FAQ,
    }),
    contact: ContactCopy {
        heading: "Contacto",
        intro: None,
        name_placeholder: "Nombre completo",
        email_placeholder: "Email",
        city_placeholder: "Ciudad",
        interests: &[
            ContactInterest { value: "miedo-escenico", label: "Superar miedo escénico" },
            ContactInterest { value: "charla-profesional", label: "Charla profesional" },
            ContactInterest { value: "storytelling-liderazgo", label: "Storytelling y liderazgo" },
            ContactInterest { value: "voz-diccion", label: "Voz y dicción" },
        ],
        message_placeholder: "¿Qué te gustaría lograr en 10 semanas?",
        submit_label: "Enviar",
        sending_label: "Enviando…",
        note: "Cupos limitados · Programa premium",
        thanks: "¡Gracias! Te contactaremos pronto.",
        behavior: SubmitBehavior::Delayed,
    },
    footer_owner: "Voices on Stage",
    footer_tagline: "Inspira. Comunica. Transforma.",
};
