use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Title};

use super::contact::Contact;
use super::experience::Experience;
use super::header::Navbar;
use super::hero::{Hero, SocialLinks};
use super::projects::Projects;
use super::skills::Skills;
use super::{use_i18n, I18n};
use crate::i18n::Locale;

const BUILD_TIME: &str = env!("BUILD_TIME");

/// The one page of the site, rendered under `/` and each locale prefix.
#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = I18n::from_location();
    provide_context(i18n);

    view! {
        <Html attr:lang=move || i18n.locale().code() />
        <Title text=i18n.t("meta.title") />
        <Meta name="description" content=i18n.t("meta.description") />
        {Locale::ALL
            .into_iter()
            .map(|locale| {
                view! { <Link rel="alternate" hreflang=locale.code() href=locale.home_path() /> }
            })
            .collect_view()}
        <Navbar />
        <main>
            <Hero />
            <Projects />
            <Skills />
            <Experience />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    // RFC 3339, so the year is the first four characters
    let year = BUILD_TIME.get(..4).unwrap_or_default();

    view! {
        <footer class="py-8 px-4 border-t bg-surface">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-secondary">
                    "© " {year} " Julie Villegas. " {i18n.t("footer.rights")}
                </p>
                <SocialLinks />
            </div>
        </footer>
    }
}
