use leptos::prelude::*;
use leptos_meta::MetaTags;
use vision_app::domain::{ThemePreference, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use vision_ui::App;

const CSS: &str = r#"
:root, [data-theme="light"] {
    --base: #ffffff; --surface: #f8fafc; --overlay: #d1d5db; --muted: #9ca3af;
    --text: #1f2937; --accent: #3b82f6; --accent-2: #22d3ee; --love: #ef4444;
}
[data-theme="dark"] {
    --base: #1d232a; --surface: #2a323c; --overlay: #3d4451; --muted: #6b7280;
    --text: #a6adbb; --accent: #3b82f6; --accent-2: #22d3ee; --love: #f87272;
}
[data-theme="corporate"] {
    --base: #ffffff; --surface: #f1f5f9; --overlay: #cbd5e1; --muted: #94a3b8;
    --text: #181a2a; --accent: #4b6bfb; --accent-2: #7b92b2; --love: #ef4444;
}
[data-theme="luxury"] {
    --base: #09090b; --surface: #171618; --overlay: #2e2d2f; --muted: #6b6b6b;
    --text: #dca54c; --accent: #dca54c; --accent-2: #ffffff; --love: #f87272;
}
[data-theme="winter"] {
    --base: #ffffff; --surface: #f2f7ff; --overlay: #e3e9f4; --muted: #94a3b8;
    --text: #394e6a; --accent: #047aff; --accent-2: #463aa2; --love: #e11d48;
}
[data-theme="black"] {
    --base: #000000; --surface: #0d0d0d; --overlay: #1a1a1a; --muted: #4d4d4d;
    --text: #d6d6d6; --accent: #ffffff; --accent-2: #9ca3af; --love: #ff6f6f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Roboto', -apple-system, sans-serif;
    background: var(--base); color: var(--text); min-height: 100vh;
    transition: background 0.2s ease, color 0.2s ease;
}
.container { max-width: 960px; margin: 2rem auto; padding: 0 1.5rem; }
.theme-toggle { display: flex; gap: 0.5rem; justify-content: center; align-items: center; margin: 1.25rem auto; cursor: pointer; }
.theme-toggle__input { width: 2.5rem; height: 1.25rem; accent-color: var(--accent); cursor: pointer; }
.vision-form { text-align: center; padding: 1.5rem 1rem; }
.hero__title {
    font-size: clamp(1.5rem, 4vw, 2.25rem); font-weight: 800; margin: 1.25rem 0 2rem;
    background: linear-gradient(90deg, var(--accent), var(--accent-2), var(--accent));
    background-size: 200% auto; -webkit-background-clip: text; background-clip: text; color: transparent;
    animation: gradient 4s linear infinite;
}
@keyframes gradient { to { background-position: 200% center; } }
.hero__subtitle { font-weight: 400; font-size: clamp(0.7rem, 2vw, 1.25rem); margin: 1.25rem 0 2rem; }
.question { margin-bottom: 1rem; text-align: left; }
.question__label { display: block; margin: 0.5rem 0; font-size: clamp(1rem, 2vw, 1.25rem); }
.question__input {
    width: 100%; padding: 0.5rem; border: 2px solid var(--overlay); border-radius: 4px;
    background: var(--surface); color: var(--text); font-size: 1rem; transition: all 0.3s;
}
.question__input:hover { border-color: var(--accent); }
.question__input:focus { outline: none; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); }
.question__input--error { border-color: var(--love); }
.question__error { color: var(--love); font-size: 0.875rem; }
.limit { margin: 1rem 0; text-align: left; }
.limit__label { display: block; font-size: clamp(1rem, 2vw, 1.25rem); }
.limit__range { width: 100%; accent-color: var(--accent); }
.generate-button {
    display: flex; align-items: center; justify-content: center; gap: 0.25rem;
    min-width: 16rem; margin: 1rem auto; padding: 0.75rem 1.5rem; border: none; border-radius: 9999px;
    background: linear-gradient(90deg, var(--accent-2), var(--accent)); color: #ffffff;
    font-size: 1rem; font-weight: 600; cursor: pointer;
}
.generate-button:disabled { cursor: wait; opacity: 0.8; }
.dot { animation: blink 1.4s infinite both; }
.dot:nth-child(2) { animation-delay: 0.2s; }
.dot:nth-child(3) { animation-delay: 0.4s; }
@keyframes blink { 0%, 80%, 100% { opacity: 0; } 40% { opacity: 1; } }
.vision {
    margin: 1rem auto; padding: 1rem; border: 2px solid var(--overlay); border-radius: 8px;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); transition: border-color 0.2s;
}
.vision:hover { border-color: var(--accent); }
.vision__placeholder { color: var(--muted); text-align: center; }
.vision__content { text-align: justify; line-height: 1.75; padding: 0.5rem 1rem; }
.vision__content p, .vision__content ul, .vision__content ol { margin-bottom: 1rem; }
.vision__content h1, .vision__content h2, .vision__content h3 { margin: 1rem 0 0.5rem; }
.vision__content li { margin-left: 1.5rem; }
.vision__content code { font-family: monospace; background: var(--surface); padding: 0 0.25rem; }
.loading { display: flex; flex-direction: column; align-items: center; padding: 2rem; }
.loading__robot { color: #289ad5; animation: pulse 1s ease-in-out infinite alternate; }
@keyframes pulse { from { opacity: 0.3; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
.loading__text { margin-top: 1rem; color: var(--muted); font-style: italic; }
.error { text-align: center; padding: 1rem; }
.error__message { color: var(--love); }
"#;

/// Applies the stored theme before first paint so hydration never flashes.
/// Unknown stored names fall back to the default, as `ThemeSettings::load` does.
fn theme_bootstrap_script() -> String {
    let known = ThemePreference::ALL
        .iter()
        .map(|theme| format!("'{}'", theme.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"(function() {{
    try {{
        var known = [{known}];
        var stored = localStorage.getItem('{key}');
        var theme = known.indexOf(stored) >= 0 ? stored : '{default}';
        document.documentElement.setAttribute('{attr}', theme);
    }} catch (e) {{}}
}})();"#,
        key = THEME_STORAGE_KEY,
        attr = THEME_ATTRIBUTE,
        default = ThemePreference::default().as_str(),
    )
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🤖</text></svg>"/>
                <script>{theme_bootstrap_script()}</script>
                <style>{CSS}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
