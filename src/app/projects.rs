use leptos::prelude::*;

use super::hero::GITHUB_URL;
use super::use_i18n;

struct Project {
    /// Translation key prefix, e.g. `projects.ecommerce`.
    key: &'static str,
    technologies: &'static [&'static str],
    demo_link: Option<&'static str>,
    repo_link: Option<&'static str>,
}

static PROJECTS: [Project; 3] = [
    Project {
        key: "projects.ecommerce",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        demo_link: Some("https://demo.com"),
        repo_link: Some(GITHUB_URL),
    },
    Project {
        key: "projects.tasks",
        technologies: &["Vue.js", "Firebase", "Tailwind CSS"],
        demo_link: Some("https://demo.com"),
        repo_link: Some(GITHUB_URL),
    },
    Project {
        key: "projects.portfolio",
        technologies: &["Rust", "Leptos", "Axum", "Tailwind CSS"],
        demo_link: None,
        repo_link: Some(GITHUB_URL),
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_i18n();

    let cards = PROJECTS
        .iter()
        .map(|project| {
            let title_key = format!("{}.title", project.key);
            let description_key = format!("{}.description", project.key);
            let title = move || crate::i18n::t(i18n.locale(), &title_key);
            let description = move || crate::i18n::t(i18n.locale(), &description_key);
            view! {
                <article class="rounded-lg shadow-lg overflow-hidden bg-background hover:shadow-xl transition-all duration-300 hover:-translate-y-1">
                    <div class="h-48 flex items-center justify-center bg-muted text-4xl">"🖼️"</div>
                    <div class="p-6">
                        <h3 class="text-xl font-semibold mb-2">{title}</h3>
                        <p class="mb-4 text-secondary">{description}</p>
                        <div class="flex flex-wrap gap-2 mb-4">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 text-sm rounded-full bg-primary/20 text-primary">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-4">
                            {project
                                .demo_link
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-2 rounded-lg bg-primary text-white font-medium hover:bg-primary/80 transition-colors"
                                        >
                                            {i18n.t("projects.demo")}
                                        </a>
                                    }
                                })}
                            {project
                                .repo_link
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="px-4 py-2 border rounded-lg font-medium hover:bg-muted transition-colors"
                                        >
                                            {i18n.t("projects.code")}
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="py-20 px-4 bg-surface">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">{i18n.t("projects.title")}</h2>
                    <p class="text-xl max-w-2xl mx-auto text-secondary">
                        {i18n.t("projects.subtitle")}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}
