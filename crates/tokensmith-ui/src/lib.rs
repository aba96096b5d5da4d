//! Tokensmith UI Components
//!
//! This crate provides the Dioxus building blocks shared by the token
//! studio: buttons, form inputs, the five-color toggle pills, the notice
//! banner stack, and the loading overlay.
//!
//! ## Design Philosophy
//!
//! Parchment-and-ink card table aesthetic:
//! - **Gold (#c9a54c)**: titles, the generate/download actions
//! - **Arcane blue (#4a7ba6)**: links, focus states, interactive accents
//! - **Ink (#14110d)**: background darkness
//! - Errors stay crimson and transient; nothing modal, nothing blocking

pub mod components;

pub use components::*;
