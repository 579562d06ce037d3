use leptos::prelude::*;
use std::ops::RangeInclusive;

#[component]
pub fn LimitSlider(
    label: &'static str,
    range: RangeInclusive<u32>,
    value: RwSignal<u32>,
) -> impl IntoView {
    let (min, max) = (*range.start(), *range.end());

    view! {
        <div class="limit">
            <label class="limit__label">
                {label} ": " {move || value.get()}
            </label>
            <input
                type="range"
                class="limit__range"
                min=min.to_string()
                max=max.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<u32>() {
                        value.set(parsed.clamp(min, max));
                    }
                }
            />
        </div>
    }
}
