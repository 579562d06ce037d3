use super::{ErrorDisplay, LoadingSpinner};
use crate::markdown;
use leptos::prelude::*;
use vision_app::domain::{GenerationState, GenerationStatus};

/// Loader while pending, otherwise the last result as markdown.
#[component]
pub fn VisionDisplay(#[prop(into)] generation: Signal<GenerationState>) -> impl IntoView {
    view! {
        <section class="vision">
            {move || {
                generation.with(|state| match state.status() {
                    GenerationStatus::Pending => view! { <LoadingSpinner/> }.into_any(),
                    GenerationStatus::Error(message) => {
                        view! { <ErrorDisplay message=message.clone()/> }.into_any()
                    }
                    GenerationStatus::Success(text) => {
                        let html_content = markdown::to_html(text);
                        view! { <div class="vision__content" inner_html=html_content></div> }
                            .into_any()
                    }
                    GenerationStatus::Idle => view! {
                        <p class="vision__placeholder">
                            "Your vision statement will appear here."
                        </p>
                    }
                    .into_any(),
                })
            }}
        </section>
    }
}
