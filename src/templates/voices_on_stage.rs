//! Voices on Stage, edition 2.0. Shared by the dark and light variants.

use super::content::*;
use crate::components::Icon;

pub static DARK: SiteContent = site(SiteTheme::Dark);
pub static LIGHT: SiteContent = site(SiteTheme::Light);

const NAV: &[NavLink] = &[
    NavLink { target: "home", label: "Inicio" },
    NavLink { target: "programa", label: "Programa" },
    NavLink { target: "servicios", label: "Servicios" },
    NavLink { target: "logros", label: "Logros" },
    NavLink { target: "testimonios", label: "Testimonios" },
    NavLink { target: "evento", label: "Evento" },
    NavLink { target: "faq", label: "FAQ" },
    NavLink { target: "contacto", label: "Contacto" },
];

const PROGRAM: &[Blurb] = &[
    Blurb { title: "Voz y presencia", text: "Respiración, proyección, dicción y manejo del cuerpo." },
    Blurb { title: "Storytelling", text: "Estructura, claridad de ideas y narrativa memorable." },
    Blurb { title: "Pánico a poder", text: "Estrategias para el miedo escénico y manejo de nervios." },
    Blurb { title: "Diseño de charla", text: "Mensaje, slides esenciales y ritmo." },
    Blurb { title: "Ensayos guiados", text: "Prácticas con feedback accionable todas las semanas." },
    Blurb { title: "Evento final", text: "Presentación en Voices on Stage frente a público real." },
];

const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        title: "Curso Voices on Stage (10 semanas)",
        subtitle: None,
        description: "Entrenamiento premium con prácticas reales, feedback y acompañamiento cercano.",
        icon: Icon::Star,
    },
    ServiceItem {
        title: "Coaching personalizado",
        subtitle: None,
        description: "Mentoría 1:1 en liderazgo, mentalidad y performance para potenciar tu voz.",
        icon: Icon::Users,
    },
    ServiceItem {
        title: "Workshops corporativos",
        subtitle: None,
        description: "Comunicación para equipos: presentaciones, reuniones y ventas.",
        icon: Icon::Mic,
    },
];

pub(super) const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { value: "150+", label: "Personas formadas" },
    Achievement { value: "4", label: "Ciudades en Australia" },
    Achievement { value: "98%", label: "Satisfacción" },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Pasé de temer al escenario a disfrutarlo. La práctica semanal y el feedback marcaron la diferencia.",
        attribution: "Ana P. · Ingeniera · Sydney",
    },
    Testimonial {
        quote: "Descubrí que mi historia puede inspirar y aprendí a contarla sin miedo.",
        attribution: "Daniel R. · Founder · Melbourne",
    },
    Testimonial {
        quote: "El evento final fue inolvidable. Me sentí en un TEDx y ahora doy charlas en mi empresa.",
        attribution: "Sofía G. · HR Manager · Brisbane",
    },
];

pub(super) const FAQ: &[FaqItem] = &[
    FaqItem {
        id: "faq-experience",
        question: "¿Necesito experiencia previa?",
        answer: "No. Empezamos desde tu punto actual y diseñamos un plan que te lleve al escenario con confianza.",
    },
    FaqItem {
        id: "faq-includes",
        question: "¿Qué incluye el curso?",
        answer: "10 semanas de formación, ensayos guiados, coaching premium y tu presentación final.",
    },
    FaqItem {
        id: "faq-city",
        question: "¿Puedo tomarlo desde otra ciudad?",
        answer: "Sí. Formato híbrido con sesiones online y práctica presencial opcional.",
    },
    FaqItem {
        id: "faq-seats",
        question: "¿Cuántos cupos hay?",
        answer: "Grupo reducido para asegurar acompañamiento cercano.",
    },
];

const INTERESTS: &[ContactInterest] = &[
    ContactInterest { value: "miedo-escenico", label: "Superar miedo escénico" },
    ContactInterest { value: "charla-profesional", label: "Dar una charla profesional" },
    ContactInterest { value: "storytelling-liderazgo", label: "Storytelling y liderazgo" },
    ContactInterest { value: "voz-diccion", label: "Mejorar mi voz y dicción" },
];

const fn site(theme: SiteTheme) -> SiteContent {
    SiteContent {
        theme,
        brand: "VOICES ON STAGE",
        edition: Some("Edición 2.0"),
        nav: NAV,
        nav_cta: "Inscríbete",
        hero: Hero {
            badge: "Edición 2.0",
            headline: "Tu voz merece un escenario.",
            lead: "Un programa premium de 10 semanas para comunicar con seguridad, autenticidad y \
                   liderazgo. Cierre en escenario real tipo TED.",
            secondary: CtaLink { label: "Ver programa", target: "programa" },
            primary: CtaLink { label: "Reservar mi lugar", target: "contacto" },
        },
        highlights: &[],
        program: Some(ProgramSection {
            heading: "Voices on Stage: transformación guiada",
            intro: None,
            items: PROGRAM,
            checked: true,
        }),
        services: Some(ServiceSection {
            heading: "Formación a tu medida",
            items: SERVICES,
        }),
        achievements: ACHIEVEMENTS,
        experience: None,
        events: None,
        testimonials: TestimonialSection {
            heading: "Lo que dicen",
            items: TESTIMONIALS,
        },
        spotlight: Some(EventSpotlight {
            heading: "Evento tipo TED: tu momento",
            facts: &[
                "🗓 Octubre 2025",
                "📍 Gold Coast · Presencial + Streaming",
                "👥 10 ponentes (cupos actuales)",
            ],
            body: "Un escenario profesional, curaduría de charlas y producción cuidada. Tu charla \
                   será el resultado de 10 semanas de trabajo estratégico.",
            cta: CtaLink { label: "Quiero estar en el escenario", target: "contacto" },
        }),
        resources: None,
        faq: Some(FaqSection {
            heading: None,
            items: FAQ,
        }),
        contact: ContactCopy {
            heading: "Contacto",
            intro: None,
            name_placeholder: "Nombre completo",
            email_placeholder: "Email",
            city_placeholder: "Ciudad",
            interests: INTERESTS,
            message_placeholder: "¿Qué te gustaría lograr en 10 semanas?",
            submit_label: "Enviar",
            sending_label: "Enviando…",
            note: "Cupos limitados · Programa premium",
            thanks: "¡Gracias! Te contactaremos pronto.",
            behavior: SubmitBehavior::Delayed,
        },
        footer_owner: "Voices on Stage",
        footer_tagline: "Inspira. Comunica. Transforma.",
    }
}
