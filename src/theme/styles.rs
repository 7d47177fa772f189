//! Global CSS styles for the templates portal.
//!
//! Cream and ink portal chrome; each template site scopes its own palette
//! under `.site--{dark,light,stage,paper}`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CREAM (Backgrounds) */
  --cream-50: #FFFBF6;
  --cream-100: #FDF6ED;
  --cream-200: #F8EBDD;
  --cream-300: #F1DEC9;
  --cream-400: #E8CFB2;

  /* INK (Text) */
  --ink-700: #30323D;
  --ink-800: #232530;
  --ink-900: #171923;

  /* ACCENT (Focus, Hover) */
  --accent-300: #C6B79B;
  --accent-400: #B8A683;
  --accent-500: #A8946B;

  /* STAGE (Template accents) */
  --stage-orange: #FF6A00;
  --stage-gold: #FFD700;
  --stage-gradient: linear-gradient(90deg, #FF6A00, #FFD700);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-4xl: 2.25rem;
  --text-6xl: 3.75rem;

  /* Effects */
  --shadow-soft: 0 6px 24px -8px rgba(17, 24, 39, 0.15);
  --ease-out-smooth: cubic-bezier(0.16, 1, 0.3, 1);
  --transition-fast: 200ms ease-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
  color: var(--ink-900);
  background: var(--cream-100);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button, input, select, textarea {
  font: inherit;
  color: inherit;
}

button {
  cursor: pointer;
  background: none;
  border: none;
}

button:disabled {
  cursor: not-allowed;
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
  flex-shrink: 0;
}

.startup-error {
  display: flex;
  min-height: 100vh;
  align-items: center;
  justify-content: center;
  color: var(--ink-700);
}

/* === Portal Controls === */
.btn-primary,
.btn-view {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  white-space: nowrap;
  border-radius: 0.5rem;
  padding: 0.5rem 1.25rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--cream-50);
  background: var(--ink-800);
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn-primary:hover:not(:disabled),
.btn-view:hover {
  transform: translateY(-1px);
  background: var(--ink-900);
}

.btn-primary:disabled {
  opacity: 0.5;
}

.btn-primary:focus-visible,
.btn-view:focus-visible,
.back-button:focus-visible {
  outline: 2px solid var(--ink-800);
  outline-offset: 2px;
}

.field-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-800);
}

.text-input {
  flex: 1;
  min-width: 0;
  border-radius: 0.5rem;
  border: 1px solid var(--cream-300);
  background: rgba(255, 255, 255, 0.9);
  padding: 0.5rem 0.75rem;
  transition: border-color var(--transition-fast);
}

.text-input:focus {
  outline: none;
  border-color: var(--accent-400);
}

.field-error {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: rgba(35, 37, 48, 0.8);
}

.back-button {
  position: absolute;
  top: 1.5rem;
  left: 1.5rem;
  z-index: 50;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 0.5rem;
  border: 1px solid rgba(241, 222, 201, 0.7);
  background: rgba(255, 255, 255, 0.8);
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-800);
  box-shadow: var(--shadow-soft);
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.back-button:hover {
  border-color: var(--accent-400);
  color: var(--ink-900);
}

.back-button__icon {
  width: 1rem;
  height: 1rem;
  transition: transform var(--transition-fast);
}

.back-button:hover .back-button__icon {
  transform: translateX(-2px);
}

/* === Access Gate === */
.access-backdrop {
  position: relative;
  display: flex;
  min-height: 100vh;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: radial-gradient(circle at 30% 20%, var(--cream-50), var(--cream-200));
}

.access-vignette {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(ellipse at center, transparent 55%, rgba(232, 207, 178, 0.35));
}

.access-page {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 28rem;
}

.access-panel {
  border-radius: 1rem;
  border: 1px solid rgba(241, 222, 201, 0.5);
  background: rgba(255, 255, 255, 0.7);
  padding: 2rem;
  box-shadow: var(--shadow-soft);
  backdrop-filter: blur(8px);
}

.access-header {
  margin-bottom: 2rem;
}

.access-title {
  font-size: var(--text-3xl);
  font-weight: 600;
  letter-spacing: -0.01em;
}

.access-lead {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: rgba(48, 50, 61, 0.8);
}

.access-row {
  display: flex;
  gap: 0.75rem;
}

.access-footer {
  margin-top: 1.5rem;
  font-size: var(--text-xs);
  color: rgba(48, 50, 61, 0.7);
}

/* === Gallery === */
.gallery-page {
  position: relative;
  min-height: 100vh;
  padding: 5rem 1.5rem 3rem;
  background: var(--cream-100);
}

.gallery-panel {
  margin: 0 auto;
  width: 100%;
  max-width: min(100%, 76rem);
  border-radius: 1rem;
  border: 1px solid rgba(241, 222, 201, 0.5);
  background: rgba(255, 255, 255, 0.8);
  padding: 3rem;
  box-shadow: var(--shadow-soft);
}

.gallery-header {
  margin-bottom: 2rem;
}

.gallery-title {
  font-size: var(--text-4xl);
  font-weight: 600;
  letter-spacing: -0.01em;
}

.template-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 768px) {
  .template-grid--double {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

/* === Template Card === */
.template-card {
  display: flex;
  height: 100%;
  flex-direction: column;
  overflow: hidden;
  border-radius: 1rem;
  border: 1px solid rgba(241, 222, 201, 0.6);
  background: rgba(255, 255, 255, 0.85);
  box-shadow: var(--shadow-soft);
  transition: transform var(--transition-fast);
}

.template-card:hover {
  transform: translateY(-4px);
}

.template-card__figure {
  width: 100%;
  aspect-ratio: 4 / 3;
  overflow: hidden;
  border-bottom: 1px solid rgba(241, 222, 201, 0.5);
  background: rgba(253, 246, 237, 0.7);
}

.template-card__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-fast);
}

.template-card:hover .template-card__img {
  transform: scale(1.02);
}

.template-card__body {
  display: flex;
  flex: 1;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
}

.template-card__title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.template-card__variant {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--accent-500);
}

.template-card__author {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: rgba(48, 50, 61, 0.8);
}

.template-card__date {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.24em;
  color: rgba(48, 50, 61, 0.7);
}

.template-card__description {
  font-size: var(--text-sm);
  line-height: 1.625;
  color: rgba(48, 50, 61, 0.9);
}

.template-card__actions {
  margin-top: auto;
  padding-top: 0.5rem;
}

/* === Live Preview === */
.template-preview__content .site {
  min-height: 0;
}

.template-preview__fade {
  background: linear-gradient(to top, var(--cream-100), transparent);
}

/* === Template Sites === */
.site {
  position: relative;
  min-height: 100vh;
  --site-bg: #0B0B12;
  --site-text: #FFFFFF;
  --site-muted: rgba(255, 255, 255, 0.7);
  --site-faint: rgba(255, 255, 255, 0.6);
  --site-border: rgba(255, 255, 255, 0.1);
  --site-card-bg: rgba(255, 255, 255, 0.05);
  --site-card-shadow: none;
  --site-chrome: rgba(0, 0, 0, 0.4);
  --site-input-bg: rgba(0, 0, 0, 0.4);
  --site-accent: var(--stage-gold);
  --site-cta: var(--stage-gradient);
  --site-cta-text: #000000;
  --site-card-radius: 1.5rem;
  background: var(--site-bg);
  color: var(--site-text);
}

.site--light {
  --site-bg: #FFF9F2;
  --site-text: var(--ink-900);
  --site-muted: rgba(48, 50, 61, 0.8);
  --site-faint: rgba(48, 50, 61, 0.65);
  --site-border: #E6D9C7;
  --site-card-bg: rgba(255, 255, 255, 0.85);
  --site-card-shadow: 0 18px 50px -28px rgba(118, 97, 74, 0.45);
  --site-chrome: rgba(255, 255, 255, 0.8);
  --site-input-bg: #FFFFFF;
  --site-accent: var(--stage-orange);
}

.site--stage {
  --site-bg: #0A0B12;
  --site-card-bg: rgba(15, 16, 24, 0.92);
  --site-card-shadow: 0 0 0 1px rgba(255, 255, 255, 0.06), 0 18px 40px rgba(5, 8, 15, 0.55);
  --site-chrome: rgba(0, 0, 0, 0.3);
  --site-card-radius: 1.25rem;
}

.site--paper {
  --site-bg: #FDF8F1;
  --site-text: var(--ink-900);
  --site-muted: rgba(48, 50, 61, 0.8);
  --site-faint: rgba(48, 50, 61, 0.7);
  --site-border: rgba(241, 222, 201, 0.7);
  --site-card-bg: #FFFFFF;
  --site-card-shadow: 0 1px 2px rgba(17, 24, 39, 0.06);
  --site-chrome: rgba(255, 255, 255, 0.9);
  --site-input-bg: #FFFFFF;
  --site-accent: #FFAF6D;
  --site-cta: linear-gradient(90deg, #FFAF6D, #FFD9A3);
  --site-cta-text: var(--ink-900);
  --site-card-radius: 1rem;
}

.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  border-bottom: 1px solid var(--site-border);
  background: var(--site-chrome);
  backdrop-filter: blur(8px);
}

.site-header__inner,
.site-footer__inner {
  margin: 0 auto;
  display: flex;
  width: 100%;
  max-width: 72rem;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0 1.5rem;
}

.site-header__inner {
  height: 4rem;
}

.brand-mark {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.brand-mark__badge {
  display: flex;
  width: 2rem;
  height: 2rem;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  background: var(--site-cta);
  color: var(--site-cta-text);
}

.brand-mark__icon {
  width: 1rem;
  height: 1rem;
}

.brand-mark__name {
  font-weight: 600;
  letter-spacing: 0.025em;
}

.brand-mark__edition,
.site-pill {
  display: inline-flex;
  align-items: center;
  border-radius: 9999px;
  border: 1px solid var(--site-border);
  background: var(--site-card-bg);
  padding: 0.125rem 0.625rem;
  font-size: var(--text-xs);
  color: var(--site-muted);
}

.site-nav {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  font-size: var(--text-sm);
  color: var(--site-muted);
}

.site-nav a:hover {
  color: var(--site-text);
}

.site-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 1rem;
  padding: 0.75rem 1.5rem;
  font-weight: 600;
  transition: filter var(--transition-fast), background var(--transition-fast);
}

.site-button--primary {
  background: var(--site-cta);
  color: var(--site-cta-text);
}

.site-button--primary:hover:not(:disabled) {
  filter: brightness(1.1);
}

.site-button--primary:disabled {
  opacity: 0.6;
}

.site-button--ghost {
  border: 1px solid var(--site-border);
  background: var(--site-card-bg);
}

.site-header__cta {
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
}

.site-section {
  padding: 6rem 1.5rem;
}

.site-section--band {
  background: var(--site-card-bg);
}

.site-container {
  margin: 0 auto;
  max-width: 72rem;
}

.site-hero {
  position: relative;
  overflow: hidden;
}

.site-hero__glow {
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  opacity: 0.6;
  background:
    radial-gradient(20rem 20rem at 0% 0%, rgba(255, 106, 0, 0.2), transparent),
    radial-gradient(24rem 24rem at 100% 100%, rgba(255, 215, 0, 0.2), transparent);
}

.site-hero__inner {
  position: relative;
  margin: 0 auto;
  max-width: 56rem;
  text-align: center;
}

.site-hero__headline {
  margin-top: 1rem;
  font-size: var(--text-6xl);
  font-weight: 700;
  line-height: 1.1;
}

.site-hero__lead {
  margin: 1rem auto 0;
  max-width: 42rem;
  font-size: var(--text-lg);
  color: var(--site-muted);
}

.site-hero__actions {
  margin-top: 2rem;
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.site-hero__highlights {
  position: relative;
  margin: 3rem auto 0;
  max-width: 64rem;
}

.site-heading {
  font-size: var(--text-4xl);
  font-weight: 600;
}

.site-intro {
  margin-top: 0.75rem;
  max-width: 48rem;
  color: var(--site-muted);
}

.site-grid {
  margin-top: 2.5rem;
  display: grid;
  gap: 1.5rem;
}

.site-grid--3 {
  grid-template-columns: repeat(3, minmax(0, 1fr));
}

.site-card {
  border-radius: var(--site-card-radius);
  border: 1px solid var(--site-border);
  background: var(--site-card-bg);
  box-shadow: var(--site-card-shadow);
  padding: 1.5rem;
  backdrop-filter: blur(8px);
}

.site-card--row,
.site-card__row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.site-card--center {
  text-align: center;
}

.site-card--feature {
  padding: 2rem;
  border-radius: 2rem;
}

.site-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.site-card__text {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--site-muted);
}

.site-card__meta {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--site-faint);
}

.site-accent {
  color: var(--site-accent);
}

.site-stat {
  font-size: var(--text-4xl);
  font-weight: 700;
}

.site-quote {
  color: var(--site-muted);
}

.site-link {
  margin-top: 1.5rem;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--site-accent);
}

.site-split {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  align-items: center;
  gap: 2.5rem;
}

.site-checklist {
  margin-top: 1.5rem;
  list-style: none;
  display: grid;
  gap: 0.75rem;
  font-size: var(--text-sm);
  color: var(--site-muted);
}

.site-checklist li {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.site-schedule {
  margin: 1rem 0 1.5rem;
  padding-left: 1.25rem;
  display: grid;
  gap: 0.75rem;
  font-size: var(--text-sm);
  color: var(--site-muted);
}

.site-spotlight {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 1.5rem;
  margin-bottom: 1.5rem;
}

.site-spotlight__facts {
  display: grid;
  gap: 0.5rem;
  color: var(--site-muted);
}

/* === FAQ === */
.faq-grid {
  margin-top: 2.5rem;
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.faq-item__question {
  display: flex;
  width: 100%;
  align-items: center;
  justify-content: space-between;
  text-align: left;
  font-weight: 500;
}

.faq-item__chevron {
  color: var(--site-faint);
  transition: transform var(--transition-fast);
}

.faq-item__chevron--open {
  transform: rotate(180deg);
}

.faq-item__answer {
  margin-top: 0.75rem;
  font-size: var(--text-sm);
  color: var(--site-muted);
}

/* === Contact Form === */
.contact-form {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.contact-form__wide {
  grid-column: span 2;
}

.site-input {
  border-radius: 0.75rem;
  border: 1px solid var(--site-border);
  background: var(--site-input-bg);
  padding: 0.5rem 0.75rem;
  font-size: var(--text-sm);
}

.site-input::placeholder {
  color: var(--site-faint);
}

.site-input:focus {
  outline: none;
  border-color: rgba(255, 106, 0, 0.6);
}

.site-input option {
  color: #000000;
}

.contact-form__actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.contact-form__note {
  font-size: var(--text-sm);
  color: var(--site-faint);
}

.contact-form__sent {
  border-radius: 0.75rem;
  border: 1px solid rgba(52, 211, 153, 0.3);
  background: rgba(52, 211, 153, 0.1);
  padding: 0.5rem 0.75rem;
  font-size: var(--text-sm);
  color: #6EE7B7;
}

.site--light .contact-form__sent,
.site--paper .contact-form__sent {
  color: #047857;
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--site-border);
  background: var(--site-chrome);
  padding: 2.5rem 0;
  font-size: var(--text-sm);
  color: var(--site-faint);
}

.site-footer__tagline {
  opacity: 0.85;
}

/* === Responsive === */
@media (max-width: 768px) {
  .site-nav,
  .site-header__cta,
  .brand-mark__edition {
    display: none;
  }

  .site-grid--3,
  .site-split,
  .site-spotlight,
  .faq-grid,
  .contact-form {
    grid-template-columns: 1fr;
  }

  .contact-form__wide {
    grid-column: auto;
  }

  .site-hero__headline {
    font-size: var(--text-4xl);
  }

  .site-footer__inner {
    flex-direction: column;
  }

  .gallery-panel {
    padding: 2rem;
  }
}
"#;
