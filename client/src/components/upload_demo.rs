//! Image/video upload demo: drag-and-drop or browse, preview, then a canned
//! verification report.

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::state::upload::{MediaKind, Preview, UploadState};
use crate::util::reports::{self, Report};

/// Upload widget for one media kind.
///
/// The file input lives outside the drop area so the area's click handler
/// can open it without re-triggering itself.
#[component]
pub fn UploadDemo(kind: MediaKind, prompt: &'static str, button_label: &'static str) -> impl IntoView {
    let state = RwSignal::new(UploadState::new(kind));
    let report = RwSignal::new(None::<Report>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let slug = kind.slug();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(state, &file);
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !state.get_untracked().drag_over {
            state.update(UploadState::drag_enter);
        }
    };

    let on_drag_leave = move |_: leptos::ev::DragEvent| state.update(UploadState::drag_leave);

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        state.update(UploadState::drag_leave);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                handle_file(state, &file);
            }
        }
    };

    let on_area_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_verify = move |_| {
        let next = match kind {
            MediaKind::Image => reports::image_report(),
            MediaKind::Video => reports::video_report(),
        };
        report.set(Some(next));
    };

    let area_class = move || {
        if state.get().drag_over {
            format!("upload-area {slug}-upload-area drag-over")
        } else {
            format!("upload-area {slug}-upload-area")
        }
    };

    let area_body = move || match state.get().preview {
        Some(preview) => preview_view(kind, preview),
        None => view! {
            <div class="upload-prompt">
                <i class="fas fa-cloud-upload-alt"></i>
                <p>{prompt}</p>
            </div>
        }
        .into_any(),
    };

    let result_body = move || match report.get() {
        Some(report) => view! { <ReportCard report/> }.into_any(),
        None => view! {
            <div class="result-placeholder">
                <i class="fas fa-search"></i>
                <p>"Results will appear here"</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="demo-container">
            <div class="demo-input">
                <input
                    type="file"
                    class="visually-hidden"
                    accept=kind.accept()
                    node_ref=file_input
                    on:change=on_file_change
                />
                <div
                    class=area_class
                    on:click=on_area_click
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    {area_body}
                </div>
                <button
                    class="btn btn-primary demo-btn"
                    disabled=move || !state.get().can_verify()
                    on:click=on_verify
                >
                    {button_label}
                </button>
            </div>
            <div class=format!("demo-output {slug}-result-area")>{result_body}</div>
        </div>
    }
}

fn preview_view(kind: MediaKind, preview: Preview) -> AnyView {
    let caption = kind.selected_caption();
    match kind {
        MediaKind::Image => view! {
            <div class="upload-preview">
                <img src=preview.url alt=preview.name/>
                <p>{caption}</p>
            </div>
        }
        .into_any(),
        MediaKind::Video => view! {
            <div class="upload-preview">
                <video width="100%" controls=true>
                    <source src=preview.url type=preview.mime/>
                    "Your browser does not support the video tag."
                </video>
                <p>{caption}</p>
            </div>
        }
        .into_any(),
    }
}

/// Validate a chosen or dropped file and swap it into the preview.
#[cfg(feature = "hydrate")]
fn handle_file(state: RwSignal<UploadState>, file: &web_sys::File) {
    use crate::util::browser;

    let mime = file.type_();
    if let Err(err) = state.get_untracked().check(&mime) {
        browser::alert(err);
        return;
    }
    let Some(url) = browser::object_url(file) else {
        return;
    };
    let preview = Preview { name: file.name(), mime, url };
    let mut outcome = Ok(None);
    state.update(|s| outcome = s.accept(preview));
    match outcome {
        Ok(Some(replaced)) => browser::revoke_object_url(&replaced.url),
        Ok(None) => {}
        Err(err) => browser::alert(err),
    }
}
