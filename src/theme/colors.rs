//! Color constants for the card-table aesthetic.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK_BLACK: &str = "#14110d";
pub const INK_LIGHTER: &str = "#1c1812";
pub const INK_BORDER: &str = "#2d2719";

// === PARCHMENT (Surfaces, Text) ===
pub const PARCHMENT: &str = "#f0e6d2";
pub const PARCHMENT_DIM: &str = "rgba(240, 230, 210, 0.7)";
pub const PARCHMENT_MUTED: &str = "rgba(240, 230, 210, 0.45)";

// === GOLD (Titles, Important Actions) ===
pub const GOLD: &str = "#c9a54c";
pub const GOLD_GLOW: &str = "rgba(201, 165, 76, 0.35)";

// === ARCANE BLUE (Interactive, Focus) ===
pub const ARCANE: &str = "#4a7ba6";
pub const ARCANE_GLOW: &str = "rgba(74, 123, 166, 0.35)";

// === SEMANTIC ===
pub const DANGER: &str = "#c0392b";
pub const INFO: &str = "#3e7c5b";

// === MANA ===
pub const MANA_WHITE: &str = "#f8f6d8";
pub const MANA_BLUE: &str = "#c1d7e9";
pub const MANA_BLACK: &str = "#a69f9d";
pub const MANA_RED: &str = "#e49977";
pub const MANA_GREEN: &str = "#a3c095";
