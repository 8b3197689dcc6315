//! Generated form panel.
//!
//! Renders the current schema as an interactive form: title, optional
//! description, one control per field in list order, and a submit button
//! gated by the session's ruleset. Failure messages render inline under
//! their field; ruleset build issues (bad pattern, unsupported field type)
//! render as a notice above the form.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

use formgen::{Field, FieldFailure, FieldKind, FormSession};

use super::submission::SubmissionPanel;

#[component]
pub fn FormView(
    session: RwSignal<FormSession>,
    values: RwSignal<HashMap<String, String>>,
    failures: RwSignal<Vec<FieldFailure>>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entered = values.get();
        let mut outcome = Ok(());
        session.update(|s| outcome = s.submit(&entered).map(|_| ()));
        match outcome {
            Ok(()) => failures.set(Vec::new()),
            Err(list) => failures.set(list),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            {move || session.with(|s| {
                let schema = s.schema().clone();
                let issues: Vec<String> =
                    s.build_issues().iter().map(|i| i.to_string()).collect();

                view! {
                    <h2 class="text-2xl font-semibold">{schema.form_title.clone()}</h2>
                    {schema.form_description.clone().map(|desc| view! {
                        <p class="text-lg text-gray-500">{desc}</p>
                    })}
                    {(!issues.is_empty()).then(|| view! {
                        <div class="p-3 bg-amber-50 border border-amber-300 rounded-md space-y-1">
                            {issues.into_iter().map(|msg| view! {
                                <p class="text-sm text-amber-700">{msg}</p>
                            }).collect_view()}
                        </div>
                    })}
                    {schema.fields.iter().map(|field| view! {
                        <FieldControl field=field.clone() values=values failures=failures/>
                    }).collect_view()}
                }
            })}
            <button
                type="submit"
                class="w-full py-3 bg-blue-500 text-white rounded-lg font-semibold hover:bg-blue-700 transition-colors"
            >
                "Submit"
            </button>
        </form>
        <SubmissionPanel session=session/>
    }
}

/// One form control, chosen by the field's kind. The match is exhaustive:
/// a new kind cannot be added without deciding how it renders.
#[component]
fn FieldControl(
    field: Field,
    values: RwSignal<HashMap<String, String>>,
    failures: RwSignal<Vec<FieldFailure>>,
) -> impl IntoView {
    let field_id = field.id.clone();
    let failure_message = {
        let id = field_id.clone();
        move || {
            failures.with(|list| {
                list.iter()
                    .find(|f| f.field_id == id)
                    .map(|f| f.message.clone())
            })
        }
    };

    let control = match field.kind {
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            let id_for_input = field_id.clone();
            let id_for_value = field_id.clone();

            let on_input = move |ev: web_sys::Event| {
                let target = ev.target().unwrap();
                let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
                let value = input.value();
                values.update(|v| {
                    v.insert(id_for_input.clone(), value);
                });
            };

            view! {
                <input
                    type=input_type
                    placeholder=field.placeholder.clone().unwrap_or_default()
                    class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || {
                        values.with(|v| v.get(&id_for_value).cloned().unwrap_or_default())
                    }
                    on:input=on_input
                />
            }
            .into_any()
        }
        FieldKind::Select => {
            let id_for_change = field_id.clone();
            let id_for_value = field_id.clone();

            let on_change = move |ev: web_sys::Event| {
                let target = ev.target().unwrap();
                let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
                let value = select.value();
                values.update(|v| {
                    v.insert(id_for_change.clone(), value);
                });
            };

            view! {
                <select
                    class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || {
                        values.with(|v| v.get(&id_for_value).cloned().unwrap_or_default())
                    }
                    on:change=on_change
                >
                    <option value="">"-- Select --"</option>
                    {field.options.iter().map(|opt| {
                        let value = opt.value.clone();
                        let label = opt.label.clone();
                        view! { <option value=value>{label}</option> }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
        FieldKind::Unsupported => view! {
            <div class="px-3 py-2 text-sm italic text-gray-500 bg-gray-100 rounded-md">
                "Unsupported field type"
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="space-y-2">
            <label class="block text-lg font-medium">
                {field.label.clone()}
                {field.required.then(|| view! {
                    <span class="text-red-500 font-medium">" *"</span>
                })}
            </label>
            {control}
            {move || failure_message().map(|msg| view! {
                <p class="text-sm text-red-500">{msg}</p>
            })}
        </div>
    }
}
