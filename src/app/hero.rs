use leptos::prelude::*;

use super::use_i18n;

macro_rules! contact_email {
    () => {
        "julievillegas77@gmail.com"
    };
}

pub const CONTACT_EMAIL: &str = contact_email!();
pub const CONTACT_MAILTO: &str = concat!("mailto:", contact_email!());
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/julievillegas77";
pub const GITHUB_URL: &str = "https://github.com/julsluks";

/// (label, href, icon)
pub const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("Email", CONTACT_MAILTO, "📧"),
    ("LinkedIn", LINKEDIN_URL, "💼"),
    ("GitHub", GITHUB_URL, "💻"),
];

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex gap-4">
            {SOCIAL_LINKS
                .into_iter()
                .map(|(label, href, icon)| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-2xl text-secondary hover:text-primary transition-colors"
                            aria-label=label
                        >
                            <span aria-hidden="true">{icon}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section
            id="home"
            class="flex flex-col justify-center items-center min-h-screen px-4 pt-16 text-center"
        >
            <h1 class="text-4xl md:text-6xl font-bold mb-4">{i18n.t("hero.greeting")}</h1>
            <p class="text-2xl md:text-3xl text-primary font-semibold mb-2">
                {i18n.t("hero.role")}
            </p>
            <p class="text-lg md:text-xl text-secondary max-w-2xl mb-8">
                {i18n.t("hero.tagline")}
            </p>
            <SocialLinks />
            <a
                href="#projects"
                class="mt-12 px-6 py-3 rounded-lg bg-primary text-white font-medium hover:bg-primary/80 transition-colors"
            >
                {i18n.t("hero.scroll")}
                " ↓"
            </a>
        </section>
    }
}
