use std::collections::HashMap;

use leptos::prelude::*;

use formgen::{FieldFailure, FormSession};

mod components;

use components::form_view::FormView;
use components::schema_editor::SchemaEditor;

#[component]
pub fn App() -> impl IntoView {
    // The one session context; every mutation goes through its transition
    // methods. Input values and failures live beside it and are threaded
    // into the components as props.
    let session = RwSignal::new(FormSession::new());
    let values = RwSignal::new(HashMap::<String, String>::new());
    let failures = RwSignal::new(Vec::<FieldFailure>::new());
    let (dark_mode, set_dark_mode) = signal(false);

    view! {
        <div class=move || {
            if dark_mode.get() {
                "min-h-screen p-8 bg-gray-900 text-gray-100"
            } else {
                "min-h-screen p-8 bg-gray-50 text-gray-900"
            }
        }>
            <div class="flex justify-between items-center mb-8">
                <h1 class="text-3xl font-bold">"Form Generator"</h1>
                <button
                    type="button"
                    class="px-4 py-2 text-sm bg-blue-500 text-white rounded-lg hover:bg-blue-700 transition-colors"
                    on:click=move |_| set_dark_mode.update(|d| *d = !*d)
                >
                    {move || if dark_mode.get() { "Light Mode" } else { "Dark Mode" }}
                </button>
            </div>

            <div class="flex flex-col md:flex-row gap-8">
                <div class="w-full md:w-1/2">
                    <SchemaEditor session=session values=values failures=failures/>
                </div>
                <div class="w-full md:w-1/2">
                    <FormView session=session values=values failures=failures/>
                </div>
            </div>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
