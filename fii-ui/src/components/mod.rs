//! Reusable Dioxus RSX components for the ranking page.

mod custom_select;
mod error_display;
mod loading_spinner;
mod option_button;
mod page_header;
mod range_slider;
mod toggle;

pub use custom_select::CustomSelect;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use option_button::OptionButton;
pub use page_header::PageHeader;
pub use range_slider::RangeSlider;
pub use toggle::Toggle;
