//! Global CSS styles for the Tokensmith studio.
//!
//! Parchment-and-ink card table aesthetic.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink-black: #14110d;
  --ink-lighter: #1c1812;
  --ink-border: #2d2719;

  /* PARCHMENT (Surfaces, Text) */
  --parchment: #f0e6d2;
  --parchment-dim: rgba(240, 230, 210, 0.7);
  --parchment-muted: rgba(240, 230, 210, 0.45);

  /* GOLD (Titles, Important Actions) */
  --gold: #c9a54c;
  --gold-glow: rgba(201, 165, 76, 0.35);

  /* ARCANE BLUE (Interactive, Focus) */
  --arcane: #4a7ba6;
  --arcane-glow: rgba(74, 123, 166, 0.35);

  /* SEMANTIC */
  --danger: #c0392b;
  --info: #3e7c5b;

  /* MANA */
  --mana-w: #f8f6d8;
  --mana-u: #c1d7e9;
  --mana-b: #a69f9d;
  --mana-r: #e49977;
  --mana-g: #a3c095;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-mono);
  background: var(--ink-black);
  color: var(--parchment);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Layout === */
.studio {
  max-width: 680px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.studio-header {
  text-align: center;
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--gold);
  letter-spacing: 0.05em;
}

.tagline {
  color: var(--parchment-dim);
  font-size: var(--text-sm);
  font-style: italic;
}

.studio-hint {
  margin-top: 3rem;
  text-align: center;
  color: var(--parchment-muted);
  font-style: italic;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--gold);
  margin-bottom: 0.75rem;
}

/* === Search === */
.search-section {
  display: flex;
  gap: 0.75rem;
  align-items: center;
}

.search-input-wrapper {
  position: relative;
  flex: 1;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-sm);
  opacity: 0.6;
}

.search-input {
  width: 100%;
  padding-left: 2.4rem;
}

/* === Inputs === */
.form-field {
  margin-bottom: 1rem;
  flex: 1;
}

.form-row {
  display: flex;
  gap: 1rem;
}

.input-label {
  display: block;
  font-size: var(--text-sm);
  color: var(--parchment-dim);
  margin-bottom: 0.35rem;
}

.input-hint {
  color: var(--parchment-muted);
  font-size: var(--text-xs);
  font-style: italic;
}

.input-field {
  width: 100%;
  padding: 0.6rem 0.75rem;
  background: transparent;
  border: 1px solid var(--ink-border);
  border-radius: 6px;
  color: var(--arcane);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder {
  color: var(--parchment-muted);
  font-style: italic;
}

.input-field:focus {
  outline: none;
  border-color: var(--arcane);
  box-shadow: 0 0 8px var(--arcane-glow);
}

.input-field:disabled {
  opacity: 0.5;
}

/* === Buttons === */
.btn-primary,
.btn-accent,
.btn-ghost {
  padding: 0.6rem 1.4rem;
  border-radius: 6px;
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all var(--transition-fast);
  background: transparent;
}

.btn-primary {
  border: 1px solid var(--arcane);
  color: var(--arcane);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 10px var(--arcane-glow);
  transform: translateY(-1px);
}

.btn-accent {
  border: 1px solid var(--gold);
  color: var(--gold);
}

.btn-accent:hover:not(:disabled) {
  box-shadow: 0 0 10px var(--gold-glow);
  transform: translateY(-1px);
}

.btn-ghost {
  border: 1px solid var(--ink-border);
  color: var(--parchment-dim);
}

.btn-ghost:hover:not(:disabled) {
  border-color: var(--parchment-dim);
}

.btn-primary:disabled,
.btn-accent:disabled,
.btn-ghost:disabled {
  opacity: 0.4;
  cursor: default;
}

.icon-btn {
  background: transparent;
  border: none;
  color: inherit;
  font-size: var(--text-lg);
  cursor: pointer;
  line-height: 1;
  padding: 0 0.25rem;
}

/* === Results === */
.results-section {
  margin-top: 2rem;
}

.results-count {
  color: var(--parchment-muted);
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

.results-grid {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.result-card {
  display: flex;
  gap: 1rem;
  align-items: center;
  padding: 0.75rem;
  background: var(--ink-lighter);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  cursor: pointer;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.result-card:hover {
  border-color: var(--gold);
  box-shadow: 0 0 10px var(--gold-glow);
}

.result-card__img {
  width: 72px;
  border-radius: 4px;
  flex-shrink: 0;
}

.result-card__img--missing {
  height: 100px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--ink-black);
  color: var(--parchment-muted);
  font-size: var(--text-xs);
  font-style: italic;
}

.result-card__name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--parchment);
}

.result-card__line {
  color: var(--parchment-dim);
  font-size: var(--text-sm);
}

/* === Customize === */
.customize-section {
  margin-top: 2rem;
}

.selected-card {
  display: flex;
  gap: 1rem;
  align-items: center;
  margin-bottom: 1.5rem;
  padding: 0.75rem;
  background: var(--ink-lighter);
  border: 1px solid var(--gold);
  border-radius: 8px;
}

.selected-card__img {
  width: 72px;
  border-radius: 4px;
}

.selected-card__name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--gold);
}

.selected-card__line {
  color: var(--parchment-dim);
  font-size: var(--text-sm);
}

/* === Color Pills === */
.color-pills {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

.pill {
  padding: 0.35rem 0.9rem;
  border: 1px solid var(--ink-border);
  border-radius: 999px;
  background: transparent;
  color: var(--parchment-dim);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover:not(:disabled) {
  border-color: var(--parchment-dim);
}

.pill.selected {
  color: var(--ink-black);
}

.pill--w.selected { background: var(--mana-w); border-color: var(--mana-w); }
.pill--u.selected { background: var(--mana-u); border-color: var(--mana-u); }
.pill--b.selected { background: var(--mana-b); border-color: var(--mana-b); }
.pill--r.selected { background: var(--mana-r); border-color: var(--mana-r); }
.pill--g.selected { background: var(--mana-g); border-color: var(--mana-g); }

.pill:disabled {
  opacity: 0.4;
  cursor: default;
}

.pill-letter {
  font-weight: 700;
}

/* === Preview === */
.preview-section {
  margin-top: 2rem;
  text-align: center;
}

.token-image {
  max-width: 100%;
  border-radius: 12px;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
}

.token-dimensions {
  color: var(--parchment-muted);
  font-size: var(--text-xs);
  margin-top: 0.5rem;
}

.preview-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-top: 1.25rem;
}

/* === Notices === */
.notice-stack {
  position: fixed;
  top: 20px;
  right: 20px;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 1000;
  max-width: 320px;
}

.notice {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.85rem 1rem;
  border-radius: 8px;
  color: #fff;
  font-size: var(--text-sm);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.35);
}

.notice--error {
  background: var(--danger);
}

.notice--info {
  background: var(--info);
}

.notice-message {
  flex: 1;
}

.notice-dismiss {
  color: rgba(255, 255, 255, 0.8);
}

.notice-dismiss:hover {
  color: #fff;
}

/* === Loading === */
.loading-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgba(20, 17, 13, 0.75);
  z-index: 900;
}

.loading-spinner {
  width: 42px;
  height: 42px;
  border: 3px solid var(--ink-border);
  border-top-color: var(--gold);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

.loading-label {
  color: var(--parchment-dim);
  font-style: italic;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
