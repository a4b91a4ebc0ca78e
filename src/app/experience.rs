use leptos::{either::Either, prelude::*};

use super::use_i18n;
use crate::i18n::t;

struct TimelineEntry {
    /// Translation key prefix holding `title`, `d1`..`d3` and, for schools, `school`.
    key: &'static str,
    organization: Option<&'static str>,
    start: u16,
    /// `None` while ongoing.
    end: Option<u16>,
}

static WORK: [TimelineEntry; 2] = [
    TimelineEntry {
        key: "experience.accelera",
        organization: Some("ACCELERALIA"),
        start: 2023,
        end: None,
    },
    TimelineEntry {
        key: "experience.storyville",
        organization: Some("Storyville"),
        start: 2022,
        end: Some(2023),
    },
];

static EDUCATION: [TimelineEntry; 2] = [
    TimelineEntry {
        key: "experience.daw",
        organization: None,
        start: 2020,
        end: Some(2022),
    },
    TimelineEntry {
        key: "experience.dam",
        organization: None,
        start: 2018,
        end: Some(2020),
    },
];

#[component]
fn Timeline(title_key: &'static str, entries: &'static [TimelineEntry]) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div>
            <h3 class="text-2xl font-bold mb-8">{i18n.t(title_key)}</h3>
            <ol class="relative border-l-2 border-primary/40 space-y-10">
                {entries
                    .iter()
                    .map(|entry| {
                        let key = entry.key;
                        let organization = entry.organization;
                        let (start, end) = (entry.start, entry.end);
                        let period = move || match end {
                            Some(end) => format!("{start} - {end}"),
                            None => format!("{start} - {}", t(i18n.locale(), "experience.present")),
                        };
                        let field = move |name: &'static str| {
                            move || t(i18n.locale(), &format!("{key}.{name}"))
                        };
                        view! {
                            <li class="ml-6">
                                <span class="absolute -left-2 w-4 h-4 rounded-full bg-primary"></span>
                                <span class="text-sm font-semibold text-primary">{period}</span>
                                <h4 class="text-xl font-bold mt-1">{field("title")}</h4>
                                <p class="text-secondary font-medium mb-3">
                                    {match organization {
                                        Some(name) => Either::Left(name),
                                        None => Either::Right(field("school")),
                                    }}
                                </p>
                                <ul class="list-disc ml-5 space-y-1 text-secondary">
                                    <li>{field("d1")}</li>
                                    <li>{field("d2")}</li>
                                    <li>{field("d3")}</li>
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="experience" class="py-20 px-4 bg-surface">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">{i18n.t("experience.title")}</h2>
                    <p class="text-xl max-w-2xl mx-auto text-secondary">
                        {i18n.t("experience.subtitle")}
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Timeline title_key="experience.work" entries=&WORK />
                    <Timeline title_key="experience.education" entries=&EDUCATION />
                </div>
            </div>
        </section>
    }
}
