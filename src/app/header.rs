use leptos::prelude::*;
use leptos_router::components::A;

use super::{use_i18n, ThemeToggle};
use crate::i18n::Locale;

const SECTIONS: [(&str, &str); 4] = [
    ("#projects", "nav.projects"),
    ("#skills", "nav.skills"),
    ("#experience", "nav.experience"),
    ("#contact", "nav.contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        SECTIONS
            .into_iter()
            .map(|(href, key)| {
                view! {
                    <a
                        href=href
                        class="px-1 py-2 text-sm font-medium text-secondary hover:text-primary transition-colors"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {i18n.t(key)}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 w-full z-50 bg-background/90 backdrop-blur-md shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href=move || i18n.locale().home_path() attr:class="text-xl font-bold text-primary">
                        "<JV/>"
                    </A>
                    <div class="hidden md:flex items-center space-x-8">
                        {links}
                        <LanguageToggle />
                        <ThemeToggle />
                    </div>
                    <div class="flex md:hidden items-center space-x-4">
                        <LanguageToggle />
                        <ThemeToggle />
                        <button
                            type="button"
                            class="p-2 rounded-lg"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="flex flex-col md:hidden pb-4 space-y-2">{links}</div>
                </Show>
            </div>
        </nav>
    }
}

/// Switches locale by navigating to that locale's prefixed home page.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                type="button"
                class="flex items-center gap-1 px-2 py-1 rounded-lg hover:bg-muted transition-colors"
                aria-label=i18n.t("nav.language")
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span>{move || i18n.locale().flag()}</span>
                <span class="text-sm uppercase">{move || i18n.locale().code()}</span>
            </button>
            <Show when=move || open.get()>
                <ul class="absolute right-0 mt-2 w-40 rounded-lg shadow-lg bg-surface py-1">
                    {Locale::ALL
                        .into_iter()
                        .map(|locale| {
                            view! {
                                <li>
                                    <A
                                        href=locale.home_path()
                                        attr:class=move || {
                                            if i18n.locale() == locale {
                                                "flex gap-2 px-4 py-2 text-primary font-semibold"
                                            } else {
                                                "flex gap-2 px-4 py-2 hover:bg-muted"
                                            }
                                        }
                                        on:click=move |_| set_open.set(false)
                                    >
                                        <span>{locale.flag()}</span>
                                        <span>{locale.name()}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
