//! Schema editor panel.
//!
//! A raw JSON textarea over the session's schema. A parse failure keeps the
//! last good schema live and shows the error inline under the editor; a
//! successful edit replaces the schema and clears any stale input values
//! and failures.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

use formgen::{FieldFailure, FormSession};

#[component]
pub fn SchemaEditor(
    session: RwSignal<FormSession>,
    values: RwSignal<HashMap<String, String>>,
    failures: RwSignal<Vec<FieldFailure>>,
) -> impl IntoView {
    let (schema_text, set_schema_text) = signal(session.with_untracked(|s| s.schema_json()));
    let (parse_error, set_parse_error) = signal(Option::<String>::None);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let textarea: web_sys::HtmlTextAreaElement = target.dyn_into().unwrap();
        let raw = textarea.value();
        set_schema_text.set(raw.clone());

        let mut outcome = Ok(());
        session.update(|s| outcome = s.edit_schema(&raw));
        match outcome {
            Ok(()) => {
                set_parse_error.set(None);
                // A new schema always starts unsubmitted with a clean sheet.
                values.set(HashMap::new());
                failures.set(Vec::new());
            }
            Err(err) => set_parse_error.set(Some(err.to_string())),
        }
    };

    let on_copy = move |_| {
        let json = session.with(|s| s.schema_json());
        // Copy to clipboard using JS; encode the text as a JS string
        // literal so patterns with backslashes survive.
        if let Ok(literal) = serde_json::to_string(&json) {
            let _ = js_sys::eval(&format!("navigator.clipboard.writeText({literal})"));
        }
    };

    view! {
        <div>
            <label class="block text-sm font-medium mb-1">"Form Schema (JSON)"</label>
            <textarea
                rows=24
                class=move || format!(
                    "w-full px-3 py-2 font-mono text-sm border rounded-md bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500 {}",
                    if parse_error.get().is_some() { "border-red-300" } else { "border-gray-300" }
                )
                spellcheck="false"
                autocomplete="off"
                prop:value=move || schema_text.get()
                on:input=on_input
            />
            {move || parse_error.get().map(|err| view! {
                <p class="mt-1 text-xs text-red-500">{err}</p>
            })}
            <button
                type="button"
                class="mt-4 px-6 py-2 bg-green-500 text-white rounded-lg hover:bg-green-700 transition-colors"
                on:click=on_copy
            >
                "Copy Form JSON"
            </button>
        </div>
    }
}
