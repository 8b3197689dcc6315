//! Submission panel.
//!
//! Shown once the session reaches the submitted state: a success banner and
//! a button that offers the captured payload as a JSON file download. The
//! download is a fire-and-forget browser side effect; a failure to build
//! the blob is logged and otherwise ignored.

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::{JsCast, JsValue};

use formgen::{FormSession, SessionState};

#[component]
pub fn SubmissionPanel(session: RwSignal<FormSession>) -> impl IntoView {
    view! {
        {move || {
            let submitted = session.with(|s| s.state() == SessionState::Submitted);
            submitted.then(|| {
                let json = session.with(|s| {
                    s.payload().map(|p| p.to_pretty_json()).unwrap_or_default()
                });
                view! {
                    <div class="mt-6">
                        <p class="text-green-500">"Form submitted successfully!"</p>
                        <button
                            type="button"
                            class="mt-4 px-6 py-2 bg-yellow-500 text-white rounded-lg hover:bg-yellow-700 transition-colors"
                            on:click=move |_| download_json("form_submission.json", &json)
                        >
                            "Download Submission as JSON"
                        </button>
                    </div>
                }
            })
        }}
    }
}

/// Offer `contents` as a JSON file download via a blob object URL and a
/// programmatic anchor click.
fn download_json(filename: &str, contents: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");

    let blob = match web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(err) => {
            log::warn!("failed to build download blob: {err:?}");
            return;
        }
    };
    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("failed to create object url: {err:?}");
            return;
        }
    };

    if let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}
