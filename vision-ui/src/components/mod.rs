mod error_display;
mod generate_button;
mod limit_slider;
mod loading_spinner;
mod question_field;
mod theme_toggle;
mod vision_display;

pub use error_display::ErrorDisplay;
pub use generate_button::GenerateButton;
pub use limit_slider::LimitSlider;
pub use loading_spinner::LoadingSpinner;
pub use question_field::QuestionField;
pub use theme_toggle::ThemeToggle;
pub use vision_display::VisionDisplay;
