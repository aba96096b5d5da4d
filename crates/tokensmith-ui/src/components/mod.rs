//! Shared UI components for the token studio.

mod button;
mod color_pills;
mod input;
mod loading;
mod notice_stack;

pub use button::{Button, ButtonVariant, IconButton};
pub use color_pills::ColorPills;
pub use input::{Input, SearchInput};
pub use loading::LoadingOverlay;
pub use notice_stack::NoticeStack;
