use leptos::prelude::*;

#[component]
pub fn GenerateButton(
    #[prop(into)] label: Signal<&'static str>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="generate-button"
            class=("generate-button--busy", move || is_loading.get())
            prop:disabled=move || is_loading.get()
        >
            {move || label.get()}
            <Show when=move || is_loading.get()>
                <span class="dot">"."</span>
                <span class="dot">"."</span>
                <span class="dot">"."</span>
            </Show>
        </button>
    }
}
