use dashmap::DashMap;
use rust_embed::Embed;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

pub static GLOBAL_TRANSLATION_CACHE: LazyLock<DashMap<Locale, Arc<Translations>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
pub struct Assets;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Es,
    En,
    Ca,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Es, Locale::En, Locale::Ca];

    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
            Self::Ca => "Català",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Es => "🇪🇸",
            Self::En => "🇬🇧",
            Self::Ca => "🏴",
        }
    }

    /// Locale selected by the first path segment, e.g. `/en` or `/ca/`.
    pub fn from_path(path: &str) -> Option<Self> {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }

    /// Site path for this locale's home page.
    pub fn home_path(self) -> String {
        format!("/{}", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            "ca" => Ok(Self::Ca),
            _ => Err(()),
        }
    }
}

/// One locale's strings, keyed by dotted path (`contact.form.send`).
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn parse(json: &str) -> Option<Self> {
        let root: Value = serde_json::from_str(json).ok()?;
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries);
        Some(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

pub fn translations(locale: Locale) -> Arc<Translations> {
    let cache = &*GLOBAL_TRANSLATION_CACHE;
    cache
        .entry(locale)
        .or_insert_with(|| {
            let parsed = Assets::get(&format!("{}.json", locale.code()))
                .and_then(|file| String::from_utf8(file.data.into()).ok())
                .and_then(|content| Translations::parse(&content));
            if parsed.is_none() {
                log::warn!("couldn't load translations for {locale}");
            }
            Arc::new(parsed.unwrap_or_default())
        })
        .clone()
}

/// Look `key` up in `locale`, then in the default locale, then give back the key itself.
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(s) = translations(locale).get(key) {
        return s.to_string();
    }
    if locale != Locale::default() {
        if let Some(s) = translations(Locale::default()).get(key) {
            return s.to_string();
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_path() {
        assert_eq!(Locale::from_path("/en"), Some(Locale::En));
        assert_eq!(Locale::from_path("/ca/"), Some(Locale::Ca));
        assert_eq!(Locale::from_path("/es/projects"), Some(Locale::Es));
        assert_eq!(Locale::from_path("es"), Some(Locale::Es));
        assert_eq!(Locale::from_path("/"), None);
        assert_eq!(Locale::from_path("/fr"), None);
        assert_eq!(Locale::from_path("/english"), None);
    }

    #[test]
    fn test_flatten_nested_keys() {
        let tr = Translations::parse(
            r#"{"contact": {"title": "Contacto", "form": {"send": "Enviar"}}, "year": 2024}"#,
        )
        .unwrap();
        assert_eq!(tr.get("contact.title"), Some("Contacto"));
        assert_eq!(tr.get("contact.form.send"), Some("Enviar"));
        assert_eq!(tr.get("year"), Some("2024"));
        assert_eq!(tr.get("contact"), None);
        assert!(Translations::parse("not json").is_none());
    }

    #[test]
    fn test_every_locale_has_the_default_keys() {
        let base = translations(Locale::default());
        assert!(!base.is_empty());
        for locale in Locale::ALL {
            let tr = translations(locale);
            for key in base.entries.keys() {
                assert!(tr.get(key).is_some(), "{locale} is missing {key}");
            }
        }
    }

    #[test]
    fn test_lookup_falls_back() {
        assert_eq!(t(Locale::Es, "contact.title"), "Contacto");
        assert_eq!(t(Locale::En, "contact.title"), "Contact");
        assert_eq!(t(Locale::Ca, "contact.title"), "Contacte");
        assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
    }
}
