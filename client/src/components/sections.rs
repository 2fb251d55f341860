//! Static content sections of the landing page.

use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-file-alt",
        title: "AI Text Detection",
        body: "Spot machine-written essays, reviews, and articles by their statistical fingerprints.",
    },
    Feature {
        icon: "fas fa-image",
        title: "Image Verification",
        body: "Flag edited, composited, or fully generated images before they spread.",
    },
    Feature {
        icon: "fas fa-video",
        title: "Video Analysis",
        body: "Check footage frame by frame for splices and synthetic faces.",
    },
    Feature {
        icon: "fas fa-user-secret",
        title: "Deepfake Detection",
        body: "Catch face swaps and lip-sync forgeries with facial consistency checks.",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("Upload", "Paste text or drop in an image or video."),
    ("Analyze", "Our models inspect structure, artifacts, and metadata."),
    ("Review", "Get a clear score with the signals behind it."),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-inner">
                <h1>"See Through " <span class="gradient-text">"AI Deception"</span></h1>
                <p class="hero-subtitle">
                    "TruthLens detects AI-generated text, manipulated images, and deepfake video in seconds."
                </p>
                <div class="hero-actions">
                    <a href="#demo" class="btn btn-primary">"Try the Demo"</a>
                    <a href="#how-it-works" class="btn btn-outline">"Learn More"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2>"What We Detect"</h2>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">
                                        <i class=f.icon></i>
                                    </div>
                                    <h3>{f.title}</h3>
                                    <p>{f.body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <h2>"How It Works"</h2>
                </div>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, body))| {
                            view! {
                                <li class="step">
                                    <span class="step-number">{i + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2>"Get in Touch"</h2>
                    <p>"Interested in the API or an enterprise plan? We'd love to hear from you."</p>
                </div>
                <a href="mailto:hello@truthlens.example" class="btn btn-primary">"Contact Sales"</a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"\u{00a9} TruthLens. All results shown on this page are simulated."</p>
            </div>
        </footer>
    }
}
