mod contact;
mod experience;
mod header;
mod hero;
mod homepage;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::i18n::{t, Locale};
use crate::theme::THEME_KEY;
use homepage::HomePage;
pub use theme::{use_theme, ThemeContext, ThemeProvider, ThemeToggle};

/// Sets the root class from storage (or the OS preference) before first paint.
fn theme_bootstrap_script() -> String {
    format!(
        "(function(){{try{{var t=localStorage.getItem('{THEME_KEY}');\
if(t!=='light'&&t!=='dark'){{t=window.matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light';}}\
document.documentElement.classList.add(t);}}catch(e){{}}}})();"
    )
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <script inner_html=theme_bootstrap_script()></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground transition-colors">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <ThemeProvider>
            <Router>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/es") view=HomePage />
                    <Route path=path!("/en") view=HomePage />
                    <Route path=path!("/ca") view=HomePage />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let locale = Locale::from_path(&use_location().pathname.get_untracked()).unwrap_or_default();
    view! {
        <main class="flex flex-col flex-grow justify-center items-center min-h-screen">
            <h1 class="text-2xl font-bold">{t(locale, "not_found")}</h1>
            <A href="/" attr:class="mt-4 text-primary hover:underline">
                "← "
                {t(locale, "nav.home")}
            </A>
        </main>
    }
}

/// The active locale for the current page. Provided by the page, read by every section.
#[derive(Debug, Clone, Copy)]
pub struct I18n(Memo<Locale>);

impl I18n {
    fn from_location() -> Self {
        let pathname = use_location().pathname;
        Self(Memo::new(move |_| {
            Locale::from_path(&pathname.get()).unwrap_or_default()
        }))
    }

    pub fn locale(self) -> Locale {
        self.0.get()
    }

    /// A reactive lookup, for use directly in `view!`.
    pub fn t(self, key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || t(self.0.get(), key)
    }
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}
