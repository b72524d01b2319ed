//! Site stylesheet.
//!
//! Dark, industrial theme with a brass accent. Injected once by [`crate::App`]
//! in a `<style>` element, so the bundle has no separate CSS asset.

/// Complete CSS for the site.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #0d0d0f;
    --bg-card: #16161a;
    --bg-secondary: #1c1c21;
    --fg: #ececec;
    --fg-muted: #9a9aa3;
    --primary: #d4a23c;
    --primary-fg: #111111;
    --border: rgba(255, 255, 255, 0.1);
    --border-faint: rgba(255, 255, 255, 0.05);
    --font-heading: "Oswald", "Bebas Neue", Impact, sans-serif;
    --font-body: "Inter", system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--fg);
    font-family: var(--font-body);
    line-height: 1.6;
}

h1, h2, h3, h4 {
    font-family: var(--font-heading);
    letter-spacing: 0.03em;
    margin: 0;
}

a { color: inherit; text-decoration: none; }
img { display: block; max-width: 100%; }

.site { min-height: 100vh; display: flex; flex-direction: column; }
.site-main { flex: 1; }
.container { width: 100%; max-width: 1280px; margin: 0 auto; padding: 0 1rem; }
.container.narrow { max-width: 1024px; }

.accent { color: var(--primary); }
.bright { color: #fff; font-weight: 600; }
.muted { color: var(--fg-muted); }
.lead { font-size: 1.125rem; margin-bottom: 2rem; }

.visually-hidden {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
    white-space: nowrap;
}

/* Sections fade up as they scroll into view; without view timelines they fade in on load. */
@keyframes fade-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: none; }
}
.fade-in { animation: fade-in 0.6s ease-out both; }
@supports (animation-timeline: view()) {
    .fade-in {
        animation-duration: auto;
        animation-timeline: view();
        animation-range: entry 0% entry 40%;
    }
}
@media (prefers-reduced-motion: reduce) {
    .fade-in { animation: none; }
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.9rem 2rem;
    font-family: var(--font-heading);
    font-size: 1.25rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    border-radius: 2px;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background 0.2s, color 0.2s, border-color 0.2s, transform 0.2s;
}
.btn-primary { background: var(--primary); color: var(--primary-fg); }
.btn-primary:hover { background: #e0b458; transform: translateY(-2px); }
.btn-outline { border-color: rgba(255, 255, 255, 0.3); color: #fff; }
.btn-outline:hover { border-color: var(--primary); color: var(--primary); }
.btn-light { background: #fff; color: #000; }
.btn-light:hover { background: var(--primary); }
.btn-block { width: 100%; }

/* Top bar */
.top-bar {
    display: none;
    background: rgba(28, 28, 33, 0.3);
    border-bottom: 1px solid var(--border-faint);
    padding: 0.5rem 0;
    font-size: 0.875rem;
    color: var(--fg-muted);
}
.top-bar-inner { display: flex; justify-content: space-between; align-items: center; }
.top-bar-group { display: flex; gap: 1.5rem; }
.top-bar-item { display: inline-flex; align-items: center; gap: 0.5rem; }
.top-bar-item:hover { color: var(--primary); }
.top-bar-item.strong { font-weight: 700; }

/* Header */
.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(13, 13, 15, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
}
.nav-inner { height: 5rem; display: flex; justify-content: space-between; align-items: center; }
.nav-brand img { height: 8rem; width: auto; object-fit: contain; }
.nav-links { display: none; align-items: center; gap: 2rem; }
.nav-link {
    font-family: var(--font-heading);
    font-size: 1.125rem;
    letter-spacing: 0.05em;
    transition: color 0.2s;
}
.nav-link:hover, .nav-link.active { color: var(--primary); }
.nav-cta { padding: 0.5rem 1.5rem; font-size: 1.125rem; }
.nav-toggle { background: none; border: 0; color: var(--fg); padding: 0.5rem; cursor: pointer; }
.nav-mobile {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem;
    background: var(--bg-card);
    border-bottom: 1px solid var(--border);
}

/* Hero */
.hero {
    position: relative;
    height: 100vh;
    min-height: 600px;
    display: flex;
    align-items: center;
    overflow: hidden;
}
.hero-backdrop { position: absolute; inset: 0; }
.hero-backdrop img { width: 100%; height: 100%; object-fit: cover; }
.hero-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, rgba(0,0,0,0.9), rgba(0,0,0,0.7), rgba(0,0,0,0.4));
}
.hero-inner { position: relative; z-index: 1; }
.hero-content { max-width: 56rem; }
.hero-badge {
    display: inline-block;
    margin-bottom: 1.5rem;
    padding: 0.5rem 1rem;
    background: rgba(212, 162, 60, 0.2);
    border: 1px solid rgba(212, 162, 60, 0.3);
    color: var(--primary);
    font-weight: 700;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}
.hero-title { font-size: clamp(3.5rem, 9vw, 6rem); line-height: 1; color: #fff; margin-bottom: 1.5rem; }
.hero-title .accent { color: var(--primary); }
.hero-description { font-size: 1.375rem; color: #fff; max-width: 42rem; margin-bottom: 2.5rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.hero-scroll-hint {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    color: rgba(255, 255, 255, 0.5);
    animation: bounce 1.5s infinite;
}
@keyframes bounce {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, -25%); }
}

/* Section scaffolding */
.capabilities, .about, .equipment, .gallery, .contact { padding: 6rem 0; }
.about, .contact { background: var(--bg-secondary); }
.about, .equipment { border-top: 1px solid var(--border-faint); border-bottom: 1px solid var(--border-faint); }

.section-heading { text-align: center; margin-bottom: 3rem; }
.section-heading.align-left { text-align: left; }
.section-eyebrow {
    display: block;
    color: var(--primary);
    font-weight: 700;
    font-size: 0.875rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    margin-bottom: 0.5rem;
}
.section-title { font-size: clamp(2.25rem, 5vw, 3.75rem); color: #fff; line-height: 1.15; }
.section-rule { height: 4px; width: 5rem; background: var(--primary); margin: 1.5rem auto 0; }
.section-heading.align-left .section-rule { margin-left: 0; }

.panel {
    background: var(--bg-card);
    border: 1px solid var(--border);
    padding: 2rem;
    margin-bottom: 3rem;
}
.panel-title {
    font-size: 1.875rem;
    color: #fff;
    text-transform: uppercase;
    text-align: center;
    margin-bottom: 2rem;
}

/* Capabilities */
.finish-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
.finish-card, .tile {
    display: flex;
    flex-direction: column;
    align-items: center;
    background: var(--bg);
    border: 1px solid var(--border-faint);
    transition: border-color 0.2s;
}
.finish-card { padding: 1.5rem; }
.finish-card:hover, .tile:hover { border-color: rgba(212, 162, 60, 0.5); }
.finish-thumb {
    width: 6rem;
    height: 6rem;
    margin-bottom: 1rem;
    border-radius: 0.5rem;
    overflow: hidden;
    border: 2px solid rgba(212, 162, 60, 0.3);
}
.finish-thumb img, .tile-thumb img { width: 100%; height: 100%; object-fit: cover; }
.finish-name { color: #fff; font-weight: 700; font-size: 1.125rem; text-transform: uppercase; letter-spacing: 0.05em; }
.finish-description { color: var(--fg-muted); font-size: 0.875rem; text-align: center; }

.tile-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.tile { padding: 1rem; }
.tile-thumb {
    width: 4rem;
    height: 4rem;
    margin-bottom: 0.75rem;
    border-radius: 50%;
    overflow: hidden;
    border: 2px solid rgba(212, 162, 60, 0.3);
}
.tile-icon { color: var(--primary); margin-bottom: 0.75rem; }
.tile-name {
    color: #fff;
    font-size: 0.875rem;
    font-weight: 500;
    text-align: center;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

/* About */
.about-intro { font-size: 1.125rem; color: var(--fg-muted); margin: 0; }
.about-intro strong { color: #fff; font-size: 1.25rem; }
.about-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.about-grid .panel { margin-bottom: 0; }
.about-card-title {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: var(--primary);
    font-size: 1.5rem;
    text-transform: uppercase;
    margin-bottom: 1rem;
}
.about-card-icon { font-size: 1.875rem; }

/* Equipment */
.equipment-grid { display: grid; grid-template-columns: 1fr; gap: 4rem; align-items: center; }
.equipment-photo { position: relative; }
.equipment-photo img { position: relative; width: 100%; border: 1px solid var(--border); border-radius: 2px; }
.equipment-glow {
    position: absolute;
    inset: -1rem;
    background: rgba(212, 162, 60, 0.2);
    filter: blur(24px);
    opacity: 0.5;
}
.inventory { border: 1px solid var(--border); padding: 1.5rem; margin-bottom: 2rem; }
.inventory-title { color: var(--primary); font-size: 1.25rem; text-transform: uppercase; margin-bottom: 1rem; }
.inventory-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; color: var(--fg-muted); }
.inventory-list li { display: flex; gap: 0.75rem; }
.text-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--primary);
    font-family: var(--font-heading);
    font-size: 1.25rem;
    border-bottom: 1px solid var(--primary);
    padding-bottom: 0.25rem;
}
.text-link:hover { color: #fff; border-color: #fff; }

/* Gallery */
.gallery-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
.gallery-item {
    position: relative;
    padding: 0;
    border: 0;
    border-radius: 2px;
    overflow: hidden;
    cursor: pointer;
    background: none;
}
.gallery-item.featured { grid-column: span 2; grid-row: span 2; }
.gallery-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
.gallery-item:hover img { transform: scale(1.1); }
.gallery-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.6);
    opacity: 0;
    transition: opacity 0.3s;
}
.gallery-item:hover .gallery-overlay, .gallery-item:focus-visible .gallery-overlay { opacity: 1; }
.gallery-overlay span {
    color: var(--primary);
    font-family: var(--font-heading);
    font-size: 1.25rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    border: 1px solid var(--primary);
    padding: 0.5rem 1rem;
}

/* Lightbox */
.lightbox {
    position: fixed;
    inset: 0;
    z-index: 60;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.95);
}
.lightbox-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    z-index: 1;
    color: #fff;
    background: none;
    border: 0;
    cursor: pointer;
}
.lightbox-close:hover { color: var(--primary); }
.lightbox-image { max-width: 100%; max-height: 100%; object-fit: contain; }

/* Contact */
.contact { position: relative; overflow: hidden; }
.contact-grid-bg {
    position: absolute;
    inset: 0;
    opacity: 0.05;
    background-image: linear-gradient(#fff 1px, transparent 1px), linear-gradient(90deg, #fff 1px, transparent 1px);
    background-size: 40px 40px;
}
.contact-inner { position: relative; z-index: 1; }
.contact-card {
    max-width: 56rem;
    margin: 0 auto;
    padding: 2rem;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 2px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}
.contact-header { text-align: center; margin-bottom: 2.5rem; }
.contact-header .section-title { margin-bottom: 1rem; }
.contact-form { display: grid; gap: 1.5rem; }
.form-row { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
.form-field { display: grid; gap: 0.5rem; }
.form-field label {
    font-size: 0.875rem;
    font-weight: 700;
    color: var(--fg-muted);
    text-transform: uppercase;
    letter-spacing: 0.08em;
}
.form-field input, .form-field textarea {
    width: 100%;
    background: var(--bg);
    border: 1px solid var(--border);
    color: #fff;
    padding: 0.75rem 1rem;
    font: inherit;
    outline: none;
    transition: border-color 0.2s;
}
.form-field input:focus, .form-field textarea:focus { border-color: var(--primary); }
.form-status { font-size: 0.875rem; text-align: center; }
.form-status.success { display: flex; justify-content: center; align-items: center; gap: 0.5rem; color: #4ade80; }
.form-status.error { color: #f87171; }
.form-status p { margin: 0.25rem 0; }
.form-status-phones { display: flex; justify-content: center; gap: 1.5rem; }
.form-status-phones a { text-decoration: underline; }

/* Footer */
.footer { background: var(--bg-secondary); padding: 4rem 0 2rem; border-top: 1px solid var(--border-faint); }
.footer-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; margin-bottom: 3rem; }
.footer-logo { height: 6rem; margin-bottom: 1.5rem; opacity: 0.9; }
.footer-heading { color: var(--primary); font-size: 1.25rem; margin-bottom: 1.5rem; }
.footer-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; }
.footer-link { display: inline-flex; align-items: center; gap: 0.5rem; color: var(--fg-muted); transition: color 0.2s; }
.footer-link:hover { color: #fff; }
.footer-contact { display: flex; align-items: flex-start; gap: 0.75rem; }
.footer-phones { display: grid; gap: 0.5rem; }
.footer-bottom {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    font-size: 0.875rem;
    color: var(--fg-muted);
}
.footer-bottom p { margin: 0; }
.footer-legal { display: flex; gap: 1.5rem; }
.footer-legal span { cursor: pointer; }
.footer-legal span:hover { color: #fff; }

/* Not found */
.not-found {
    height: 60vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
}
.not-found-code { font-size: 8rem; color: var(--primary); margin-bottom: 1rem; }
.not-found-title { font-size: 1.5rem; color: var(--fg-muted); margin: 0 0 0.5rem; }
.not-found .btn { margin-top: 2rem; }

@media (min-width: 768px) {
    .top-bar { display: block; }
    .nav-links { display: flex; }
    .nav-toggle, .nav-mobile { display: none; }
    .nav-brand img { height: 10rem; }
    .panel { padding: 3rem; }
    .contact-card { padding: 3rem; }
    .finish-grid { grid-template-columns: repeat(3, 1fr); }
    .tile-grid { grid-template-columns: repeat(3, 1fr); }
    .tile-grid.wide { grid-template-columns: repeat(4, 1fr); }
    .about-grid, .form-row { grid-template-columns: repeat(2, 1fr); }
    .gallery-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-grid { grid-template-columns: repeat(3, 1fr); }
    .footer-bottom { flex-direction: row; justify-content: space-between; }
}

@media (min-width: 1024px) {
    .tile-grid { grid-template-columns: repeat(6, 1fr); }
    .tile-grid.wide { grid-template-columns: repeat(7, 1fr); }
    .equipment-grid { grid-template-columns: repeat(2, 1fr); }
    .equipment-copy { padding-left: 2.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::SITE_CSS;

    #[test]
    fn anchor_targets_land_flush_with_viewport_top() {
        assert!(!SITE_CSS.contains("scroll-padding"));
        assert!(!SITE_CSS.contains("scroll-margin"));
    }

    #[test]
    fn router_fragment_jumps_are_smooth() {
        assert!(SITE_CSS.contains("html { scroll-behavior: smooth; }"));
    }

    #[test]
    fn fade_in_has_keyframes() {
        assert!(SITE_CSS.contains("@keyframes fade-in"));
        assert!(SITE_CSS.contains(".fade-in {"));
    }
}
