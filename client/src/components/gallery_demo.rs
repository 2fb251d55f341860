//! Deepfake gallery demo: pick a sample, see its canned verdict.

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::util::reports::{GALLERY, GallerySample, GalleryVerdict, Report};

#[component]
pub fn GalleryDemo() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static str>);
    let report = RwSignal::new(None::<Report>);

    let on_pick = move |sample: GallerySample| {
        selected.set(Some(sample.id));
        report.set(Some(GalleryVerdict::from_tag(Some(sample.tag)).report()));
    };

    let result_body = move || match report.get() {
        Some(report) => view! { <ReportCard report/> }.into_any(),
        None => view! {
            <div class="result-placeholder">
                <i class="fas fa-hand-pointer"></i>
                <p>"Select a sample to analyze"</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="demo-container">
            <div class="demo-input">
                <h3>"Choose a sample"</h3>
                <div class="gallery">
                    {GALLERY
                        .iter()
                        .map(|sample| {
                            let sample = *sample;
                            let class = move || {
                                if selected.get() == Some(sample.id) { "gallery-item selected" } else { "gallery-item" }
                            };
                            view! {
                                <div class=class data-result=sample.tag on:click=move |_| on_pick(sample)>
                                    <img src=sample.src alt=sample.caption/>
                                    <span class="gallery-caption">{sample.caption}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="demo-output deepfake-result-area">{result_body}</div>
        </div>
    }
}
