//! UI components for the Tokensmith studio.

mod customize_form;
mod result_card;
mod results_list;
mod search_bar;
mod token_preview;

pub use customize_form::CustomizeForm;
pub use result_card::ResultCard;
pub use results_list::ResultsList;
pub use search_bar::SearchBar;
pub use token_preview::TokenPreview;
