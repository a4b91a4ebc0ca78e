use leptos::prelude::*;

use super::use_i18n;

struct SkillCategory {
    title_key: &'static str,
    icon: &'static str,
    skills: &'static [&'static str],
}

static CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title_key: "skills.frontend",
        icon: "🎨",
        skills: &[
            "JavaScript",
            "TypeScript",
            "React",
            "Vue.js",
            "Next.js",
            "HTML5",
            "CSS3",
            "Tailwind CSS",
            "SASS/SCSS",
        ],
    },
    SkillCategory {
        title_key: "skills.backend",
        icon: "⚙️",
        skills: &[
            "Node.js",
            "PHP",
            "Python",
            "Express.js",
            "Laravel",
            "API REST",
            "GraphQL",
        ],
    },
    SkillCategory {
        title_key: "skills.databases",
        icon: "🗄️",
        skills: &["MySQL", "PostgreSQL", "MongoDB", "Firebase", "Redis", "SQLite"],
    },
    SkillCategory {
        title_key: "skills.tools",
        icon: "🛠️",
        skills: &[
            "Git", "GitHub", "Docker", "AWS", "Vercel", "Webpack", "Vite", "Jest", "Cypress",
        ],
    },
    SkillCategory {
        title_key: "skills.design",
        icon: "🎭",
        skills: &["Figma", "Adobe XD", "Three.js", "Blender", "UI/UX Design"],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">{i18n.t("skills.title")}</h2>
                    <p class="text-xl max-w-2xl mx-auto text-secondary">
                        {i18n.t("skills.subtitle")}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="rounded-lg shadow-lg p-6 bg-surface">
                                    <div class="text-center mb-6">
                                        <div class="text-4xl mb-3">{category.icon}</div>
                                        <h3 class="text-xl font-bold">{i18n.t(category.title_key)}</h3>
                                    </div>
                                    <ul class="space-y-3">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="flex items-center justify-between p-3 rounded-lg bg-muted">
                                                        <span class="font-medium text-secondary">{*skill}</span>
                                                        <span class="w-2 h-2 rounded-full bg-primary"></span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
