use leptos::prelude::*;
use vision_errors::REQUIRED_MESSAGE;

#[component]
pub fn QuestionField(
    number: usize,
    question: &'static str,
    value: RwSignal<String>,
    #[prop(into)] has_error: Signal<bool>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    let input_id = format!("question{}", number);

    view! {
        <div class="question">
            <label class="question__label" for=input_id.clone()>{question}</label>
            <input
                id=input_id
                name=format!("question{}", number)
                type="text"
                class="question__input"
                class=("question__input--error", move || has_error.get())
                placeholder=question
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
                aria-invalid=move || if has_error.get() { "true" } else { "false" }
            />
            <Show when=move || has_error.get()>
                <span class="question__error">{REQUIRED_MESSAGE}</span>
            </Show>
        </div>
    }
}
