//! Tabbed container for the four demo widgets.

use leptos::prelude::*;

use crate::components::gallery_demo::GalleryDemo;
use crate::components::text_demo::TextDemo;
use crate::components::upload_demo::UploadDemo;
use crate::state::ui::DemoTab;
use crate::state::upload::MediaKind;

/// Demo section. Exactly one tab button and its pane are active at a time.
#[component]
pub fn DemoSection() -> impl IntoView {
    let active = RwSignal::new(DemoTab::default());

    let select = move |tab: DemoTab| {
        #[cfg(feature = "hydrate")]
        log::debug!("demo tab -> {}", tab.pane_id());
        active.set(tab);
    };

    let pane_class = move |tab: DemoTab| {
        move || if active.get() == tab { "tab-pane active" } else { "tab-pane" }
    };

    view! {
        <section id="demo" class="demo">
            <div class="container">
                <div class="section-header">
                    <h2>"Try It Yourself"</h2>
                    <p>"Experience TruthLens on text, images, video, and faces."</p>
                </div>
                <div class="demo-tabs">
                    {DemoTab::ALL
                        .into_iter()
                        .map(|tab| {
                            let class = move || if active.get() == tab { "tab-btn active" } else { "tab-btn" };
                            view! {
                                <button class=class data-tab=tab.pane_id() on:click=move |_| select(tab)>
                                    <i class=tab.icon()></i>
                                    " "
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="tab-content">
                    <div class=pane_class(DemoTab::Text) id=DemoTab::Text.pane_id()>
                        <TextDemo/>
                    </div>
                    <div class=pane_class(DemoTab::Image) id=DemoTab::Image.pane_id()>
                        <UploadDemo
                            kind=MediaKind::Image
                            prompt="Drag & drop an image here or click to browse"
                            button_label="Verify Image"
                        />
                    </div>
                    <div class=pane_class(DemoTab::Video) id=DemoTab::Video.pane_id()>
                        <UploadDemo
                            kind=MediaKind::Video
                            prompt="Drag & drop a video here or click to browse"
                            button_label="Analyze Video"
                        />
                    </div>
                    <div class=pane_class(DemoTab::Deepfake) id=DemoTab::Deepfake.pane_id()>
                        <GalleryDemo/>
                    </div>
                </div>
            </div>
        </section>
    }
}
