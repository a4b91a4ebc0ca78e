use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use super::use_i18n;
use crate::theme::{ThemeSetting, ThemeStorage, ThemeStore, THEME_KEY};

/// `window.localStorage`, through leptos-use. An empty string means nothing is stored.
#[derive(Clone, Copy)]
struct BrowserStorage {
    value: Signal<String>,
    set_value: WriteSignal<String>,
}

impl BrowserStorage {
    fn new() -> Self {
        let (value, set_value, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
        Self { value, set_value }
    }
}

impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        let value = self.value.get_untracked();
        (!value.is_empty()).then_some(value)
    }

    fn save(&self, value: &str) {
        self.set_value.set(value.to_string());
    }
}

#[cfg(feature = "hydrate")]
fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

#[cfg(not(feature = "hydrate"))]
fn prefers_dark() -> bool {
    false
}

#[cfg(feature = "hydrate")]
fn apply_root_class(theme: ThemeSetting) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    for other in ThemeSetting::ALL {
        if other != theme {
            let _ = classes.remove_1(other.class());
        }
    }
    let _ = classes.add_1(theme.class());
}

#[cfg(not(feature = "hydrate"))]
fn apply_root_class(_: ThemeSetting) {}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<ThemeSetting>,
    store: StoredValue<Option<ThemeStore>>,
}

impl ThemeContext {
    pub fn theme(&self) -> ThemeSetting {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.store.update_value(|store| {
            if let Some(store) = store {
                let theme = store.toggle();
                log::debug!("theme switched to {theme}");
            }
        });
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Owns the page's [`ThemeStore`]. The store is only initialised in the browser, after
/// hydration, so the server render and the first client render agree.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (theme, set_theme) = signal(ThemeSetting::default());
    let store = StoredValue::new(None::<ThemeStore>);
    let storage = BrowserStorage::new();

    Effect::new(move |_| {
        if store.with_value(Option::is_none) {
            let mut initialised = ThemeStore::init(storage, prefers_dark());
            initialised.subscribe(move |theme| set_theme.set(theme));
            store.set_value(Some(initialised));
        }
        apply_root_class(theme.get());
    });

    provide_context(ThemeContext { theme, store });

    children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let i18n = use_i18n();

    let label = move || match ctx.theme() {
        ThemeSetting::Light => i18n.t("nav.to_dark")(),
        ThemeSetting::Dark => i18n.t("nav.to_light")(),
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-lg bg-muted hover:bg-primary/20 transition-colors"
            aria-label=label
            title=label
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.theme() {
                ThemeSetting::Light => "🌙",
                ThemeSetting::Dark => "☀️",
            }}
        </button>
    }
}
