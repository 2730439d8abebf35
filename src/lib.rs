pub mod browser;
pub mod components;
pub mod content;
pub mod lead;
pub mod sections;

use components::App;
use leptos::*;
use wasm_bindgen::prelude::*;

/// Root component. Rendering errors fall back to a short notice with a
/// reload button instead of a blank page.
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="mx-auto max-w-2xl px-4 py-20 text-slate-900">
                <h2 class="text-2xl font-semibold">"Midagi läks valesti"</h2>
                <p class="mt-3 text-slate-600">"Lehte ei õnnestunud kuvada. Palun laadi leht uuesti."</p>
                <ul class="mt-3 text-sm text-slate-500">
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button
                    class="mt-6 rounded-xl bg-slate-900 px-4 py-2.5 text-sm font-semibold text-white"
                    on:click=move |_| browser::reload()
                >
                    "Laadi uuesti"
                </button>
            </main>
        }>
            <App/>
        </ErrorBoundary>
    }
}

/// Mount the page to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
