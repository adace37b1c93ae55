//! Job card component

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dioxus::prelude::*;
use jobs_client::JobWithCompany;

use crate::config::BasePath;

/// Props for JobCard
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    pub job: JobWithCompany,
}

/// Card for a single job posting
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let base_path = try_use_context::<BasePath>().unwrap_or_default();

    let job = &props.job.job;
    let company_name = props.job.company_name().unwrap_or("Company").to_string();
    let logo_alt = props.job.company_name().unwrap_or("Company logo").to_string();
    let initial = placeholder_initial(props.job.company_name());
    let logo_url = resolve_logo_url(props.job.logo_url(), &base_path);
    let posted = job.posted_date.as_deref().map(format_posted_date);
    let required = qualification_items(job.required_qualification.as_deref());
    let preferred = qualification_items(job.preferred_qualification.as_deref());

    rsx! {
        div {
            class: "p-6 bg-white rounded-lg border border-gray-200",

            h2 {
                class: "text-2xl font-medium text-gray-900 mb-4",
                "{job.title}"
            }

            // Company, date, location, work type
            div {
                class: "flex flex-wrap gap-6 mb-8 text-gray-600",
                div {
                    class: "flex items-center gap-2",
                    if let Some(src) = logo_url {
                        img {
                            src: "{src}",
                            alt: "{logo_alt}",
                            class: "w-8 h-8 object-contain"
                        }
                    } else {
                        div {
                            class: "w-8 h-8 bg-gray-100 rounded flex items-center justify-center",
                            "{initial}"
                        }
                    }
                    span { "{company_name}" }
                }
                if let Some(posted) = posted {
                    div {
                        class: "flex items-center gap-2",
                        svg {
                            class: "w-5 h-5",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"
                            }
                        }
                        span { "{posted}" }
                    }
                }
                if let Some(location) = &job.location {
                    div {
                        class: "flex items-center gap-2",
                        svg {
                            class: "w-5 h-5",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"
                            }
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M15 11a3 3 0 11-6 0 3 3 0 016 0z"
                            }
                        }
                        span { "{location}" }
                    }
                }
                if let Some(work_type) = &job.work_type {
                    div {
                        class: "flex items-center gap-2",
                        svg {
                            class: "w-5 h-5",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                            }
                        }
                        span { "{work_type}" }
                    }
                }
            }

            div {
                class: "space-y-6 mb-8",
                if !required.is_empty() {
                    QualificationList { title: "Required Qualifications", items: required }
                }
                if !preferred.is_empty() {
                    QualificationList { title: "Preferred Qualifications", items: preferred }
                }
            }

            a {
                href: "{job.application_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "block w-full py-3 bg-[#0066FF] text-white rounded-md hover:bg-blue-600 transition-colors font-medium text-center",
                "Apply Now"
            }
        }
    }
}

#[component]
fn QualificationList(title: &'static str, items: Vec<String>) -> Element {
    rsx! {
        div {
            h3 { class: "text-lg font-medium text-gray-900 mb-4", "{title}" }
            ul {
                class: "list-disc pl-5 space-y-2 text-gray-600",
                for (index, item) in items.iter().enumerate() {
                    li { key: "{index}", "{item}" }
                }
            }
        }
    }
}

/// Absolute URLs are used as-is; anything else is served from under the base path.
pub fn resolve_logo_url(logo_url: Option<&str>, base_path: &BasePath) -> Option<String> {
    let logo_url = logo_url.map(str::trim).filter(|u| !u.is_empty())?;
    match url::Url::parse(logo_url) {
        Ok(_) => Some(logo_url.to_string()),
        Err(_) => Some(base_path.join(logo_url)),
    }
}

fn placeholder_initial(company_name: Option<&str>) -> String {
    company_name
        .and_then(|name| name.chars().next())
        .unwrap_or('C')
        .to_string()
}

/// `Mar 5, 2024`, always on the UTC calendar day.
pub fn format_posted_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc().date())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One item per non-empty line.
pub fn qualification_items(text: Option<&str>) -> Vec<String> {
    text.map(|text| {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
