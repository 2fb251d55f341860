//! Renders a canned [`Report`] for the media and gallery demos.

use leptos::prelude::*;

use crate::util::reports::{Details, Metric, Report};

#[component]
pub fn ReportCard(report: Report) -> impl IntoView {
    let banner_class = format!("report-banner {}", report.tone.class());
    let icon_class = format!("report-icon {}", report.tone.class());
    let grid_style = format!("grid-template-columns: repeat({}, 1fr);", report.columns());

    let details = match report.details {
        Details::Paragraph { heading, body } => view! {
            <div class="report-card">
                <h4>{heading}</h4>
                <p>{body}</p>
            </div>
        }
        .into_any(),
        Details::Issues { heading, items } => view! {
            <div class="report-card">
                <h4>{heading}</h4>
                <ul class="report-issues">
                    {items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="report">
            <div class=banner_class>
                <div class="report-banner__head">
                    <div class=icon_class>
                        <i class=report.icon.class()></i>
                    </div>
                    <h3>{report.title}</h3>
                </div>
                <p>{report.intro}</p>
            </div>
            <div class="report-metrics" style=grid_style>
                {report.metrics.into_iter().map(|metric| view! { <MetricCard metric/> }).collect::<Vec<_>>()}
                {report
                    .processing_time
                    .map(|time| {
                        view! {
                            <div class="report-card">
                                <h4>"Processing Time"</h4>
                                <p class="report-time">{time}</p>
                            </div>
                        }
                    })}
            </div>
            {details}
        </div>
    }
}

#[component]
fn MetricCard(metric: Metric) -> impl IntoView {
    let fill_class = format!("score-fill {}", metric.tone.class());
    let caption_class = format!("score-caption {}", metric.tone.class());
    let width = metric.bar_width();
    let caption = metric.caption();

    view! {
        <div class="report-card">
            <h4>{metric.label}</h4>
            <div class="score-track">
                <div class=fill_class style:width=width></div>
            </div>
            <p class=caption_class>{caption}</p>
        </div>
    }
}
