//! Global CSS styles for consentgate.
//!
//! Light paper-white form on a gray page; blue for pending actions, green
//! for completed ones.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --page-bg: #f3f4f6;
  --panel-bg: #ffffff;
  --card-bg: #f9fafb;
  --border: #e5e7eb;

  /* PENDING (Blue) */
  --blue-soft: #dbeafe;
  --blue-hover: #bfdbfe;
  --blue: #2563eb;

  /* DONE (Green) */
  --green-soft: #dcfce7;
  --green: #16a34a;
  --green-solid: #22c55e;
  --green-solid-hover: #16a34a;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;

  --radius: 0.5rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.terms-page {
  min-height: 100vh;
  padding: 3rem 1rem;
}

.terms-panel {
  max-width: 48rem;
  margin: 0 auto;
  background: var(--panel-bg);
  padding: 2rem;
  border-radius: var(--radius);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.terms-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.header-icon {
  padding: 0.5rem;
  background: var(--blue-soft);
  border-radius: var(--radius);
}

/* === Typography === */
.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
}

.page-subtitle,
.document-description {
  color: var(--text-secondary);
}

.section-header {
  font-size: var(--text-xl);
  font-weight: 500;
  margin-bottom: 1rem;
}

/* === Document Cards === */
.document-list,
.agreement-rows {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.document-card {
  padding: 1rem;
  background: var(--card-bg);
  border-radius: var(--radius);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.document-title {
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.sign-btn {
  padding: 0.5rem 0.75rem;
  border: none;
  border-radius: var(--radius);
  font-size: 1.25rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.sign-btn.unsigned {
  background: var(--blue-soft);
  color: var(--blue);
}

.sign-btn.unsigned:hover {
  background: var(--blue-hover);
}

.sign-btn.signed {
  background: var(--green-soft);
  color: var(--green);
  cursor: default;
}

/* === Agreements === */
.agreement-row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  cursor: pointer;
}

.agreement-row:hover {
  background: var(--card-bg);
}

.agreement-checkbox {
  margin-top: 0.25rem;
  width: 1rem;
  height: 1rem;
  accent-color: var(--blue);
}

.agreement-statement {
  color: var(--text-secondary);
}

/* === Status === */
.gate-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--border);
}

.status-dot.ready {
  background: var(--green-solid);
}

.status-next {
  margin-left: auto;
  max-width: 60%;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-proceed {
  font-family: inherit;
  border-radius: var(--radius);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  padding: 0.5rem 1rem;
  border: none;
  background: var(--blue);
  color: white;
}

.btn-ghost {
  align-self: flex-start;
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  background: var(--card-bg);
}

.btn-proceed {
  width: 100%;
  padding: 1rem;
  border: none;
  font-weight: 600;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: var(--green-solid);
  color: white;
}

.btn-proceed:hover {
  background: var(--green-solid-hover);
}

.btn-proceed.is-disabled,
.btn-proceed.is-disabled:hover {
  background: var(--border);
  color: var(--text-muted);
  cursor: not-allowed;
}

/* === Payment Summary === */
.consent-summary ul {
  list-style: none;
  margin-bottom: 1.5rem;
}

.summary-item {
  color: var(--green);
  padding: 0.25rem 0;
}

.summary-meta {
  font-size: var(--text-sm);
  color: var(--text-muted);
}
"#;
