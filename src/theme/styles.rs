//! Global CSS styles for Tourails.
//!
//! Light theme is the default palette; `.dark` on the root wrapper swaps
//! the custom properties. Component classes follow the order of the
//! screens that introduce them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app-root {
  /* PRIMARY (Deep navy) */
  --primary: #12263f;
  --primary-soft: #1f3b5c;
  --primary-foreground: #ffffff;

  /* SECONDARY (Lagoon blue) */
  --secondary: #0ea5b7;
  --secondary-glow: rgba(14, 165, 183, 0.3);
  --secondary-foreground: #ffffff;

  /* ACCENT (Sunset coral) */
  --accent: #ff6b4a;
  --accent-glow: rgba(255, 107, 74, 0.35);
  --accent-foreground: #ffffff;

  /* SURFACES */
  --background: #f8f6f2;
  --card: #ffffff;
  --muted: #efece6;
  --border: #e4e1da;
  --glass: rgba(255, 255, 255, 0.7);
  --glass-border: rgba(18, 38, 63, 0.08);

  /* TEXT */
  --foreground: #1b2330;
  --muted-foreground: #667085;

  /* SEMANTIC */
  --destructive: #e5484d;
  --success: #22c55e;

  /* STRENGTH METER */
  --strength-weak: #ef4444;
  --strength-fair: #f59e0b;
  --strength-good: #3b82f6;
  --strength-strong: #22c55e;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Outfit', 'Inter', system-ui, sans-serif;

  /* Shape */
  --radius: 1rem;
  --radius-lg: 1.5rem;
  --shadow-card: 0 8px 30px rgba(18, 38, 63, 0.08);
  --shadow-elevated: 0 20px 50px rgba(18, 38, 63, 0.16);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;

  min-height: 100vh;
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.app-root.dark {
  --primary: #cfe3ff;
  --primary-soft: #9fbde0;
  --primary-foreground: #0b1320;
  --background: #0b1320;
  --card: #131e30;
  --muted: #1b2940;
  --border: #24344e;
  --glass: rgba(19, 30, 48, 0.7);
  --glass-border: rgba(255, 255, 255, 0.08);
  --foreground: #eef2f8;
  --muted-foreground: #94a3b8;
  --shadow-card: 0 8px 30px rgba(0, 0, 0, 0.35);
  --shadow-elevated: 0 20px 50px rgba(0, 0, 0, 0.5);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

button:disabled {
  cursor: not-allowed;
}

/* === Layout Helpers === */
.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.container.narrow {
  max-width: 680px;
}

.center { text-align: center; }
.muted { color: var(--muted-foreground); }
.text-secondary { color: var(--secondary); }
.link { color: var(--secondary); font-weight: 500; }
.link:hover { text-decoration: underline; }
.w-full { width: 100%; }
.flex-1 { flex: 1; }
.rounded-full { border-radius: 9999px; }
.invisible { visibility: hidden; }

.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page > main {
  flex: 1;
}

.hero-gradient {
  background:
    radial-gradient(circle at 15% 20%, var(--secondary-glow), transparent 45%),
    radial-gradient(circle at 85% 10%, var(--accent-glow), transparent 40%),
    var(--background);
}

.gradient-text {
  background: linear-gradient(90deg, var(--secondary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.glass-card {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius-lg);
  backdrop-filter: blur(18px);
  box-shadow: var(--shadow-card);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.glass-card:hover {
  border-color: var(--secondary-glow);
}

.avatar {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
  flex-shrink: 0;
}

.avatar.sm {
  width: 2.25rem;
  height: 2.25rem;
  font-size: 0.875rem;
}

.gradient-avatar {
  background: linear-gradient(135deg, var(--primary-soft), var(--secondary));
  color: #ffffff;
}

.avatar-wrap {
  position: relative;
}

.online-dot {
  position: absolute;
  bottom: 0;
  right: 0;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 9999px;
  background: var(--success);
  border: 2px solid var(--card);
}

.icon-btn {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  transition: background var(--transition-fast), color var(--transition-fast), transform var(--transition-fast);
}

.icon-btn:hover {
  background: var(--muted);
}

.icon-btn:active {
  transform: scale(0.85);
}

.spinner {
  display: inline-block;
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 9999px;
  border: 2px solid var(--secondary-glow);
  border-top-color: var(--secondary);
  animation: spin 0.9s linear infinite;
}

.empty-state {
  text-align: center;
  padding: 3rem 1rem;
  color: var(--muted-foreground);
}

.empty-icon {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-weight: 600;
  border-radius: 0.75rem;
  white-space: nowrap;
  transition: all var(--transition-normal);
}

.btn:disabled {
  opacity: 0.5;
  pointer-events: none;
}

.btn-default { background: var(--primary); color: var(--primary-foreground); }
.btn-default:hover { background: var(--primary-soft); }
.btn-destructive { background: var(--destructive); color: #ffffff; }
.btn-outline { border: 1px solid var(--border); background: transparent; }
.btn-outline:hover { background: var(--muted); }
.btn-secondary { background: var(--secondary); color: var(--secondary-foreground); }
.btn-secondary:hover { box-shadow: 0 0 20px var(--secondary-glow); }
.btn-ghost { background: transparent; }
.btn-ghost:hover { background: var(--muted); }
.btn-link { color: var(--secondary); text-decoration: underline; text-underline-offset: 4px; }
.btn-gradient { background: linear-gradient(90deg, var(--secondary), var(--accent)); color: #ffffff; }
.btn-gradient:hover { box-shadow: 0 0 24px var(--accent-glow); transform: translateY(-1px); }
.btn-accent { background: var(--accent); color: var(--accent-foreground); font-weight: 700; }
.btn-accent:hover { box-shadow: 0 0 30px var(--accent-glow); transform: scale(1.05); }
.btn-glass { background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); backdrop-filter: blur(12px); }
.btn-glass.on-dark { color: #ffffff; border-color: rgba(255, 255, 255, 0.3); }
.btn-glass:hover { background: rgba(255, 255, 255, 0.2); }
.btn-hero { background: var(--accent); color: var(--accent-foreground); box-shadow: 0 10px 30px var(--accent-glow); }
.btn-hero:hover { transform: translateY(-2px); }
.btn-hero-outline { border: 2px solid rgba(255, 255, 255, 0.6); color: #ffffff; background: transparent; }
.btn-hero-outline:hover { background: rgba(255, 255, 255, 0.12); }

.btn-size-default { height: 2.75rem; padding: 0 1.25rem; font-size: 0.9375rem; }
.btn-size-sm { height: 2.25rem; padding: 0 0.875rem; font-size: 0.875rem; }
.btn-size-lg { height: 3.25rem; padding: 0 2rem; font-size: 1rem; }
.btn-size-xl { height: 3.75rem; padding: 0 2.5rem; font-size: 1.125rem; border-radius: 1rem; }
.btn-size-icon { height: 2.5rem; width: 2.5rem; padding: 0; font-size: 1.125rem; }

.btn-arrow { font-size: 1.25rem; }

.has-dot { position: relative; }
.has-dot::after {
  content: "";
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--accent);
}

/* === Logo === */
.logo {
  display: inline-flex;
  align-items: center;
}

.logo-text {
  font-family: var(--font-display);
  font-weight: 800;
  letter-spacing: 0.04em;
}

.logo-tour { color: var(--primary); }
.logo-ails { color: var(--secondary); }
.logo-text-sm { font-size: 1.125rem; }
.logo-text-md { font-size: 1.5rem; }
.logo-text-lg { font-size: 2rem; }
.logo-text-xl { font-size: 2.75rem; }

.logo-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  background: linear-gradient(135deg, var(--secondary), var(--accent));
}

.logo-mark-sm { width: 2rem; height: 2rem; font-size: 1rem; }
.logo-mark-md { width: 2.5rem; height: 2.5rem; font-size: 1.25rem; }
.logo-mark-lg { width: 3rem; height: 3rem; font-size: 1.5rem; }
.logo-mark-xl { width: 4rem; height: 4rem; font-size: 2rem; }

/* === Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
}

.input-wrapper,
.search-input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.input-field {
  width: 100%;
  height: 3rem;
  padding: 0 1rem;
  border-radius: 0.875rem;
  border: 1px solid var(--border);
  background: var(--glass);
  color: var(--foreground);
  font: inherit;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--secondary);
  box-shadow: 0 0 0 3px var(--secondary-glow);
}

.input-field::placeholder { color: var(--muted-foreground); }
.input-field.has-icon { padding-left: 3rem; }
.input-field.has-trailing { padding-right: 3rem; }

.input-field.textarea {
  height: auto;
  padding: 0.75rem 1rem;
  resize: none;
}

.input-icon,
.search-icon {
  position: absolute;
  left: 1rem;
  color: var(--muted-foreground);
  pointer-events: none;
}

.input-trailing {
  position: absolute;
  right: 0.5rem;
  display: flex;
  align-items: center;
}

.search-input { padding-left: 3rem; padding-right: 3rem; }
.search-lg .search-input { height: 3.5rem; font-size: 1rem; padding-left: 3.5rem; }
.search-lg .search-icon { left: 1.25rem; }

.char-counter {
  text-align: right;
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

/* === Pills === */
.category-pills,
.interest-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.interest-pills { gap: 0.75rem; }

.pill {
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
  font-size: 0.875rem;
  font-weight: 500;
  background: var(--muted);
  color: var(--muted-foreground);
  transition: all var(--transition-fast);
}

.pill:hover { color: var(--foreground); transform: scale(1.04); }

.pill-check { font-weight: 700; }

.pill.selected {
  background: var(--secondary);
  color: var(--secondary-foreground);
  box-shadow: 0 0 18px var(--secondary-glow);
}

/* === Toggle Switch === */
.toggle-switch {
  width: 3.5rem;
  height: 2rem;
  border-radius: 9999px;
  padding: 0.25rem;
  background: var(--muted);
  display: flex;
  transition: background var(--transition-normal);
}

.toggle-switch.on { background: var(--secondary); }

.toggle-knob {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  background: #ffffff;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);
  transition: transform var(--transition-normal);
}

.toggle-switch.on .toggle-knob { transform: translateX(1.5rem); }
.toggle-switch:active { transform: scale(0.92); }

/* === Password Meter === */
.password-meter {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.meter-segments {
  display: flex;
  gap: 0.25rem;
}

.meter-segment {
  flex: 1;
  height: 0.25rem;
  border-radius: 9999px;
  background: var(--muted);
  transition: background var(--transition-normal);
}

.meter-segment.strength-weak { background: var(--strength-weak); }
.meter-segment.strength-fair { background: var(--strength-fair); }
.meter-segment.strength-good { background: var(--strength-good); }
.meter-segment.strength-strong { background: var(--strength-strong); }

.meter-label {
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: transparent;
  transition: all var(--transition-normal);
}

.navbar-scrolled {
  background: var(--glass);
  backdrop-filter: blur(20px);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-card);
}

.navbar-inner {
  height: 5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-links {
  display: flex;
  gap: 2rem;
}

.navbar-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted-foreground);
  transition: color var(--transition-fast);
}

.navbar-link:hover,
.navbar-link.active { color: var(--secondary); }

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.navbar-menu-btn {
  display: none;
  font-size: 1.5rem;
  padding: 0.5rem;
  border-radius: 0.5rem;
}

.navbar-mobile {
  display: none;
  padding: 1rem 1.5rem;
  background: var(--card);
  border-bottom: 1px solid var(--border);
}

.navbar-mobile-link {
  display: block;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  color: var(--muted-foreground);
  font-weight: 500;
}

.navbar-mobile-link:hover { background: var(--muted); color: var(--foreground); }

.navbar-mobile-actions {
  display: flex;
  gap: 0.5rem;
  padding-top: 1rem;
  margin-top: 1rem;
  border-top: 1px solid var(--border);
}

@media (max-width: 768px) {
  .navbar-links,
  .navbar-actions { display: none; }
  .navbar-menu-btn { display: block; }
  .navbar-mobile { display: block; }
}

/* === Footer === */
.footer-brand { display: flex; flex-direction: column; }

.site-footer {
  border-top: 1px solid var(--border);
  padding: 3rem 0;
}

.footer-inner {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
}

.footer-tagline { color: var(--muted-foreground); font-size: 0.875rem; margin-top: 0.25rem; }
.footer-links { display: flex; gap: 1.5rem; font-size: 0.875rem; color: var(--muted-foreground); }
.footer-links a:hover { color: var(--secondary); }
.footer-copy { font-size: 0.75rem; color: var(--muted-foreground); }

/* === Home: Hero === */
.hero-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  color: #ffffff;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  transform: scale(1.05);
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, rgba(11, 19, 32, 0.55), rgba(11, 19, 32, 0.85));
}

.hero-content {
  position: relative;
  z-index: 1;
  padding-top: 6rem;
}

.hero-kicker {
  display: inline-block;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  font-size: 0.875rem;
  margin-bottom: 1.5rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.75rem, 6vw, 5rem);
  line-height: 1.05;
  font-weight: 800;
  margin-bottom: 1.5rem;
}

.hero-lede {
  max-width: 36rem;
  font-size: 1.25rem;
  color: rgba(255, 255, 255, 0.75);
  margin-bottom: 2.5rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 3rem;
}

.hero-stats { display: flex; gap: 3rem; }
.hero-stat { display: flex; flex-direction: column; }
.hero-stat-value { font-size: 2rem; font-weight: 800; }
.hero-stat-label { font-size: 0.875rem; color: rgba(255, 255, 255, 0.65); }

/* === Home: Features === */
.features-section {
  position: relative;
  padding: 6rem 0;
}

.section-rule {
  position: absolute;
  left: 0;
  width: 100%;
  height: 1px;
  background: linear-gradient(90deg, transparent, var(--border), transparent);
}

.section-rule.top { top: 0; }
.section-rule.bottom { bottom: 0; }

.section-heading {
  text-align: center;
  margin-bottom: 4rem;
}

.eyebrow {
  display: block;
  color: var(--secondary);
  font-size: 0.875rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  margin-bottom: 1rem;
}

.section-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 4vw, 3rem);
  font-weight: 800;
  line-height: 1.15;
  margin-bottom: 1.5rem;
}

.section-lede {
  max-width: 40rem;
  margin: 0 auto;
  font-size: 1.125rem;
  color: var(--muted-foreground);
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.feature-card { padding: 2rem; }

.feature-icon {
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.75rem;
  background: linear-gradient(135deg, var(--primary-soft), var(--secondary));
  margin-bottom: 1.5rem;
  transition: transform var(--transition-normal);
}

.feature-card:hover .feature-icon { transform: scale(1.1); }
.feature-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
.feature-card:hover .feature-title { color: var(--secondary); }
.feature-description { color: var(--muted-foreground); line-height: 1.7; }

/* === Home: Call to action === */
.cta-section {
  position: relative;
  padding: 8rem 0;
  overflow: hidden;
  color: #ffffff;
  text-align: center;
}

.cta-backdrop {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, #12263f, #1f3b5c 60%, #0ea5b7);
}

.cta-orb {
  position: absolute;
  width: 24rem;
  height: 24rem;
  border-radius: 9999px;
  filter: blur(64px);
}

.cta-orb-right { top: 0; right: 0; background: rgba(255, 255, 255, 0.06); }
.cta-orb-left { bottom: 0; left: 0; background: var(--accent-glow); }

.cta-content {
  position: relative;
  z-index: 1;
  max-width: 56rem;
}

.cta-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.8);
  margin-bottom: 2rem;
}

.cta-badge-icon { color: var(--accent); }

.cta-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  font-weight: 800;
  margin-bottom: 1.5rem;
}

.cta-lede {
  max-width: 40rem;
  margin: 0 auto 2.5rem;
  font-size: 1.25rem;
  color: rgba(255, 255, 255, 0.7);
}

.cta-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

/* === Page headers === */
.page-hero { padding: 6rem 0 3rem; }

.page-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 4vw, 3rem);
  font-weight: 800;
  margin-bottom: 1rem;
}

.page-lede {
  font-size: 1.125rem;
  color: var(--muted-foreground);
  margin-bottom: 2rem;
}

.page-heading { margin-bottom: 3rem; }

.heading-badge {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1.5rem;
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2rem;
  background: linear-gradient(135deg, var(--primary-soft), var(--secondary));
}

.section-subtitle {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

/* === Explore === */
.filter-panel {
  border-bottom: 1px solid var(--border);
  overflow: hidden;
}

.filter-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
  padding-top: 1.5rem;
  padding-bottom: 1.5rem;
}

.region-select {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.region-select select {
  background: var(--muted);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 0.5rem 1rem;
  font: inherit;
  font-size: 0.875rem;
  color: var(--foreground);
}

.region-select select:focus { outline: none; border-color: var(--secondary); }

.region-select-icon { color: var(--muted-foreground); }

.destinations-section { padding: 3rem 0; }

.result-count { margin-bottom: 2rem; }
.result-count-value { color: var(--foreground); font-weight: 600; }

.destinations-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.5rem;
}

.destination-card { overflow: hidden; }
.destination-card:hover { box-shadow: var(--shadow-elevated); }

.destination-media {
  position: relative;
  height: 14rem;
  overflow: hidden;
}

.destination-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms ease;
}

.destination-card:hover .destination-image { transform: scale(1.1); }

.destination-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.6), transparent 60%);
}

.destination-save {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(6px);
  display: flex;
  align-items: center;
  justify-content: center;
}

.destination-save:hover { background: rgba(255, 255, 255, 0.3); }
.save-heart { color: #ffffff; font-size: 1.25rem; transition: color var(--transition-fast); }
.save-heart.saved { color: var(--accent); }

.destination-price {
  position: absolute;
  top: 1rem;
  left: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(6px);
  color: #ffffff;
  font-size: 0.875rem;
  font-weight: 500;
}

.destination-location {
  position: absolute;
  left: 1rem;
  bottom: 1rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: #ffffff;
}

.destination-name { font-weight: 600; }
.destination-body { padding: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }

.destination-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: 0.875rem;
}

.destination-rating { display: flex; align-items: center; gap: 0.25rem; font-weight: 500; }
.star { color: var(--accent); }

.load-more { text-align: center; margin-top: 3rem; }

.map-section { padding: 0 0 4rem; }

.map-placeholder {
  text-align: center;
  padding: 4rem 1rem;
  border-style: dashed;
}

.map-icon { font-size: 3rem; display: block; margin-bottom: 1rem; }

/* === Community === */
.feed-page { padding: 5rem 0 3rem; }
.feed-column { max-width: 640px; }

.story-strip {
  display: flex;
  gap: 1rem;
  padding: 1.25rem;
  margin: 1.5rem 0;
  overflow-x: auto;
}

.story-bubble {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  flex-shrink: 0;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.story-bubble:hover { transform: scale(1.05); }

.story-ring {
  width: 4rem;
  height: 4rem;
  border-radius: 9999px;
  padding: 2px;
  display: flex;
}

.story-ring.new,
.story-ring.add { background: linear-gradient(135deg, var(--accent), var(--secondary)); }
.story-ring.seen { background: var(--border); }

.story-avatar,
.story-add {
  width: 100%;
  height: 100%;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
}

.story-avatar { background: linear-gradient(135deg, var(--primary-soft), var(--secondary)); color: #ffffff; }
.story-add { background: var(--background); font-size: 1.5rem; }
.story-name { font-size: 0.75rem; color: var(--muted-foreground); }

.feed { display: flex; flex-direction: column; gap: 1.5rem; }
.post-card { overflow: hidden; }

.post-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
}

.post-author { flex: 1; display: flex; flex-direction: column; }
.post-author-name { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; font-size: 0.875rem; }

.verified-badge {
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background: var(--secondary);
  color: var(--secondary-foreground);
  font-size: 0.625rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.post-location { font-size: 0.75rem; color: var(--muted-foreground); }
.post-image { width: 100%; aspect-ratio: 1 / 1; object-fit: cover; }

.post-actions {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem 0;
}

.post-actions-left { display: flex; gap: 0.5rem; }
.like-btn.liked { color: var(--accent); }
.save-btn.saved { color: var(--secondary); }

.post-body {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 0.5rem 1rem 1rem;
  font-size: 0.875rem;
}

.post-likes { font-weight: 600; }
.post-caption-author { font-weight: 600; }
.post-caption { line-height: 1.5; }

.post-comments { align-self: flex-start; color: var(--muted-foreground); }
.post-comments:hover { color: var(--foreground); }
.post-time { font-size: 0.75rem; color: var(--muted-foreground); text-transform: uppercase; }

.feed-loading {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 2rem 0;
}

/* === Messages === */
.messages-page { height: 100vh; }

.messages-layout {
  flex: 1;
  display: flex;
  padding-top: 5rem;
  min-height: 0;
}

.conversation-sidebar {
  width: 22rem;
  border-right: 1px solid var(--border);
  display: flex;
  flex-direction: column;
}

.conversation-sidebar-header {
  padding: 1rem;
  border-bottom: 1px solid var(--border);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.conversation-sidebar-title { font-size: 1.5rem; font-weight: 700; }
.conversation-items { flex: 1; overflow-y: auto; }
.conversation-empty { padding: 1rem; color: var(--muted-foreground); font-size: 0.875rem; }

.conversation-item {
  width: 100%;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  text-align: left;
  transition: background var(--transition-fast);
}

.conversation-item:hover { background: var(--muted); }
.conversation-item.selected { background: var(--muted); border-left: 3px solid var(--secondary); }

.conversation-summary { flex: 1; min-width: 0; }

.conversation-summary-top,
.conversation-summary-bottom {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.conversation-user { font-weight: 600; }
.conversation-time { font-size: 0.75rem; color: var(--muted-foreground); }

.conversation-preview {
  font-size: 0.875rem;
  color: var(--muted-foreground);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.unread-badge {
  min-width: 1.25rem;
  height: 1.25rem;
  padding: 0 0.375rem;
  border-radius: 9999px;
  background: var(--accent);
  color: var(--accent-foreground);
  font-size: 0.75rem;
  font-weight: 600;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.chat-view {
  flex: 1;
  display: flex;
  flex-direction: column;
  min-width: 0;
}

.chat-empty {
  align-items: center;
  justify-content: center;
  color: var(--muted-foreground);
}

.chat-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  border-bottom: 1px solid var(--border);
}

.chat-contact { flex: 1; }
.chat-contact-name { font-size: 1rem; font-weight: 600; }
.chat-presence { font-size: 0.75rem; }
.chat-header-actions { display: flex; gap: 0.25rem; }

.chat-messages {
  flex: 1;
  overflow-y: auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.message-row { display: flex; }
.message-row-sent { justify-content: flex-end; }
.message-row-received { justify-content: flex-start; }

.message-bubble {
  max-width: 70%;
  padding: 0.75rem 1rem;
  border-radius: 1.25rem;
}

.message-bubble-sent {
  background: linear-gradient(135deg, var(--secondary), var(--primary-soft));
  color: #ffffff;
  border-bottom-right-radius: 0.375rem;
}

.message-bubble-received {
  background: var(--muted);
  border-bottom-left-radius: 0.375rem;
}

.message-bubble-content { font-size: 0.9375rem; white-space: pre-wrap; }

.message-bubble-meta {
  display: flex;
  justify-content: flex-end;
  gap: 0.25rem;
  margin-top: 0.25rem;
  font-size: 0.6875rem;
  opacity: 0.7;
}

.message-bubble-time { font-variant-numeric: tabular-nums; }
.message-status { letter-spacing: -0.2em; }

.typing-indicator { display: flex; gap: 0.25rem; padding: 0.875rem 1rem; }

.typing-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--muted-foreground);
  animation: bounce 1s ease-in-out infinite;
}

.message-input-bar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem;
  border-top: 1px solid var(--border);
}

.message-input-field {
  flex: 1;
  position: relative;
  display: flex;
  align-items: center;
}

.message-input-textarea {
  flex: 1;
  min-height: 2.75rem;
  max-height: 8rem;
  padding: 0.625rem 3rem 0.625rem 1rem;
  border-radius: 1.375rem;
  border: 1px solid var(--border);
  background: var(--glass);
  color: var(--foreground);
  font: inherit;
  resize: none;
}

.message-input-textarea:focus { outline: none; border-color: var(--secondary); }
.emoji-btn { position: absolute; right: 0.25rem; }

.message-send-btn {
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 9999px;
  background: var(--muted);
  color: var(--muted-foreground);
  font-size: 1.125rem;
  transition: all var(--transition-fast);
}

.message-send-btn.active {
  background: linear-gradient(90deg, var(--secondary), var(--accent));
  color: #ffffff;
}

/* === Onboarding === */
.onboarding-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.onboarding-header { padding: 1.5rem; }
.onboarding-body { flex: 1; }

.step-progress {
  list-style: none;
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 2rem;
}

.step-progress-item { display: flex; align-items: center; }

.step-dot {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--muted);
  color: var(--muted-foreground);
  transition: all var(--transition-normal);
}

.step-dot.done,
.step-dot.current {
  background: var(--secondary);
  color: var(--secondary-foreground);
}

.step-dot.current { transform: scale(1.1); }

.step-connector {
  width: 6rem;
  height: 2px;
  margin: 0 0.5rem;
  background: var(--muted);
  transition: background var(--transition-normal);
}

.step-connector.done { background: var(--secondary); }

.onboarding-step { padding: 1rem 0 2rem; }

.step-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
.step-lede { margin-bottom: 2rem; }

.account-type-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1rem;
}

.account-type-card {
  padding: 1.5rem;
  border-radius: var(--radius-lg);
  text-align: left;
  border: 1px solid transparent;
  transition: all var(--transition-fast);
}

.account-type-card:hover { transform: scale(1.02); }

.account-type-card.selected {
  background: rgba(14, 165, 183, 0.15);
  border-color: var(--secondary);
  box-shadow: 0 0 24px var(--secondary-glow);
}

.account-type-emoji { display: block; font-size: 2rem; margin-bottom: 0.75rem; }
.account-type-title { font-size: 1.125rem; font-weight: 600; margin-bottom: 0.25rem; }
.account-type-description { font-size: 0.875rem; color: var(--muted-foreground); }

.photo-upload {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.photo-drop {
  width: 12rem;
  height: 12rem;
  border-radius: var(--radius-lg);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  overflow: hidden;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.photo-drop.glass-card { border: 2px dashed var(--border); }
.photo-drop.glass-card:hover { border-color: var(--secondary); }
.photo-drop:hover { transform: scale(1.02); }
.photo-drop.has-photo { padding: 0; }
.photo-preview { width: 100%; height: 100%; object-fit: cover; }
.photo-drop-icon { font-size: 2.5rem; color: var(--muted-foreground); }
.photo-drop-hint { font-size: 0.875rem; color: var(--muted-foreground); }
.photo-remove { font-size: 0.875rem; color: var(--muted-foreground); }
.photo-remove:hover { color: var(--foreground); }
.photo-error { font-size: 0.875rem; color: var(--destructive); }

.onboarding-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 2rem;
  padding-bottom: 2rem;
}

/* === Safety === */
.safety-page { padding: 6rem 0 3rem; }
.safety-section { max-width: 56rem; margin: 0 auto 4rem; }

.sos-wrap { max-width: 36rem; margin: 0 auto 3rem; }

.sos-button {
  width: 100%;
  padding: 2rem;
  border-radius: 1.5rem;
  background: linear-gradient(90deg, var(--destructive), rgba(229, 72, 77, 0.8));
  color: #ffffff;
  text-align: center;
  transition: transform var(--transition-fast);
}

.sos-button:hover { transform: scale(1.02); }
.sos-button:hover .sos-icon { animation: pulse 1s ease-in-out infinite; }
.sos-icon { display: block; font-size: 3rem; margin-bottom: 1rem; }
.sos-button h2 { font-size: 1.5rem; margin-bottom: 0.5rem; }
.sos-button p { opacity: 0.8; }

.safety-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1rem;
}

.safety-card { display: flex; gap: 1rem; padding: 1.5rem; }

.safety-card-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.75rem;
  background: rgba(14, 165, 183, 0.15);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  flex-shrink: 0;
}

.safety-card-body { flex: 1; font-size: 0.875rem; }

.safety-card-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.25rem;
}

.safety-card-top h3 { font-size: 1rem; }

.status-chip {
  font-size: 0.75rem;
  font-weight: 500;
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--muted);
  color: var(--muted-foreground);
}

.privacy-list { padding: 0; overflow: hidden; }

.privacy-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem;
}

.privacy-row + .privacy-row { border-top: 1px solid var(--border); }

.privacy-row-text { display: flex; align-items: center; gap: 1rem; }
.privacy-row-text h3 { font-size: 1rem; font-weight: 500; }
.privacy-row-text p { font-size: 0.875rem; }

.privacy-lock {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.75rem;
  background: var(--muted);
  display: flex;
  align-items: center;
  justify-content: center;
}

.verify-card {
  max-width: 56rem;
  margin: 0 auto;
  padding: 2rem;
  text-align: center;
}

.verify-badge {
  width: 5rem;
  height: 5rem;
  margin: 0 auto 1.5rem;
  border-radius: 9999px;
  background: linear-gradient(135deg, var(--secondary), var(--accent));
  color: #ffffff;
  font-size: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.verify-card h3 { font-size: 1.5rem; margin-bottom: 0.5rem; }
.verify-card p { max-width: 28rem; margin: 0 auto 1.5rem; }

/* === Signup === */
.signup-page {
  min-height: 100vh;
  display: flex;
}

.signup-aside {
  flex: 1;
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.signup-aside-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, var(--accent-glow), rgba(14, 165, 183, 0.5), #12263f);
}

.signup-highlights {
  position: relative;
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 24rem;
  padding: 2rem;
}

.signup-highlight {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(18px);
  color: #ffffff;
  font-weight: 500;
}

.signup-highlight-icon { font-size: 1.5rem; }

.signup-main {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.signup-card { width: 100%; max-width: 28rem; }
.signup-logo { display: inline-block; margin-bottom: 3rem; }
.signup-title { font-size: 2.25rem; font-weight: 800; margin-bottom: 0.75rem; }

.signup-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  margin-top: 2rem;
}

.terms-row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  font-size: 0.875rem;
}

.terms-row input { margin-top: 0.25rem; accent-color: var(--secondary); }

.form-error {
  font-size: 0.875rem;
  color: var(--destructive);
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  background: rgba(229, 72, 77, 0.08);
}

.signup-signin { text-align: center; margin-top: 2rem; }

@media (max-width: 1024px) {
  .signup-aside { display: none; }
}

/* === Dashboard === */
.dashboard-page { min-height: 100vh; display: flex; }

.sidebar {
  position: fixed;
  top: 0;
  left: 0;
  height: 100vh;
  z-index: 40;
  display: flex;
  flex-direction: column;
  background: var(--card);
  border-right: 1px solid var(--border);
  transition: width var(--transition-normal);
}

.sidebar-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem;
}

.sidebar.collapsed .sidebar-header {
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem 0.5rem;
}

.sidebar-nav {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 0 1rem;
}

.sidebar-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  color: var(--muted-foreground);
  transition: all var(--transition-fast);
}

.sidebar-item:hover {
  background: var(--muted);
  color: var(--foreground);
  transform: translateX(4px);
}

.sidebar-item.active {
  background: rgba(14, 165, 183, 0.15);
  color: var(--secondary);
}

.sidebar.collapsed .sidebar-item { justify-content: center; }
.sidebar-icon { font-size: 1.25rem; flex-shrink: 0; }
.sidebar-label { font-weight: 500; }

.sidebar-footer {
  padding: 1rem;
  border-top: 1px solid var(--border);
}

.dashboard-main {
  flex: 1;
  transition: margin-left var(--transition-normal);
}

.dashboard-topbar {
  position: sticky;
  top: 0;
  z-index: 30;
  height: 4rem;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  background: var(--glass);
  backdrop-filter: blur(20px);
  border-bottom: 1px solid var(--border);
}

.dashboard-topbar-left { flex: 1; max-width: 28rem; }
.dashboard-topbar-right { display: flex; align-items: center; gap: 1rem; }

.dashboard-content {
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.dashboard-welcome { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.stat-card { padding: 1.5rem; }

.stat-card-top {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.stat-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.75rem;
  background: rgba(14, 165, 183, 0.15);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  transition: transform var(--transition-fast);
}

.stat-card:hover .stat-icon { transform: scale(1.1); }

.stat-change {
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--success);
  background: rgba(34, 197, 94, 0.1);
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
}

.stat-value { font-size: 1.875rem; font-weight: 700; }
.stat-label { font-size: 0.875rem; }

.dashboard-columns {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 1.5rem;
}

@media (max-width: 1024px) {
  .dashboard-columns { grid-template-columns: 1fr; }
}

.trips-card,
.activity-card { padding: 1.5rem; }

.activity-card h2,
.card-heading h2 { font-size: 1.25rem; font-weight: 600; }

.card-heading {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.trip-list,
.activity-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.activity-card h2 { margin-bottom: 1.5rem; }

.trip-row {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border-radius: 0.75rem;
  background: var(--muted);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.trip-row:hover h3,
.trip-row:hover .trip-chevron { color: var(--secondary); }

.trip-emoji {
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 0.75rem;
  background: linear-gradient(135deg, var(--primary-soft), var(--secondary));
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
}

.trip-info { flex: 1; }
.trip-info h3 { font-size: 1rem; font-weight: 600; }
.trip-info p { font-size: 0.875rem; }
.trip-chevron { font-size: 1.5rem; color: var(--muted-foreground); }

.activity-row { display: flex; align-items: flex-start; gap: 0.75rem; }
.activity-text { flex: 1; min-width: 0; font-size: 0.875rem; }
.activity-user { font-weight: 500; }
.activity-time { font-size: 0.75rem; margin-top: 0.25rem; }

/* === Not found === */
.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 100vh;
  text-align: center;
}

.not-found-code { font-size: 6rem; font-weight: 800; line-height: 1; }

/* === Animations === */
@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-in-left {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(20px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slide-down {
  from { transform: translateY(-100%); }
  to { transform: translateY(0); }
}

@keyframes expand-in {
  from { opacity: 0; max-height: 0; }
  to { opacity: 1; max-height: 40rem; }
}

@keyframes pulse {
  0%, 100% { opacity: 0.3; transform: scale(1); }
  50% { opacity: 0.5; transform: scale(1.2); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-4px); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.fade-up { animation: fade-up 0.6s ease both; }
.fade-in { animation: fade-in 0.4s ease both; }
.fade-in-left { animation: fade-in-left 0.6s ease both; }
.slide-in { animation: slide-in 0.3s ease both; }
.slide-down { animation: slide-down 0.6s ease-out both; }
.expand-in { animation: expand-in 0.3s ease both; overflow: hidden; }
.pulse { animation: pulse 6s ease-in-out infinite; }
.pulse-slow { animation: pulse 8s ease-in-out infinite; }
.spin { animation: spin 1s linear infinite; }

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
