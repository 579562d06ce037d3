pub mod components;
pub mod markdown;
pub mod pages;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::HomePage;
use theme::{apply_to_document, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = ThemeContext::provide();

    Effect::new(move |_| apply_to_document(theme.current()));

    view! {
        <Title text="Vision Statement Generator"/>
        <Meta name="description" content="Turn ten answers about your organization into a vision statement"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
