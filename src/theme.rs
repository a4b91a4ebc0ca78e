use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Key the theme is persisted under in client storage.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeSetting {
    #[default]
    Light,
    Dark,
}

impl ThemeSetting {
    pub const ALL: [ThemeSetting; 2] = [ThemeSetting::Light, ThemeSetting::Dark];

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The class applied to the document root.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

impl FromStr for ThemeSetting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Where the theme survives between sessions.
pub trait ThemeStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// In-process storage. Clones share the same slot, which is what a page
/// reload looks like to the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .expect("should be able to lock theme storage")
            .clone()
    }

    fn save(&self, value: &str) {
        *self
            .slot
            .lock()
            .expect("should be able to lock theme storage") = Some(value.to_string());
    }
}

type Listener = Box<dyn Fn(ThemeSetting) + Send + Sync>;

/// Process-wide theme state. `toggle` is the only way to change it.
pub struct ThemeStore {
    current: ThemeSetting,
    storage: Box<dyn ThemeStorage>,
    listeners: Vec<Listener>,
}

impl ThemeStore {
    /// A valid stored value wins; otherwise the platform preference decides
    /// and is written back so later loads agree.
    pub fn init(storage: impl ThemeStorage + 'static, prefers_dark: bool) -> Self {
        let current = match storage.load().and_then(|s| s.parse().ok()) {
            Some(theme) => theme,
            None => {
                let theme = ThemeSetting::from_preference(prefers_dark);
                storage.save(theme.class());
                theme
            }
        };
        Self {
            current,
            storage: Box::new(storage),
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> ThemeSetting {
        self.current
    }

    /// Register a listener. It is called once with the current value, then on every toggle.
    pub fn subscribe(&mut self, listener: impl Fn(ThemeSetting) + Send + Sync + 'static) {
        listener(self.current);
        self.listeners.push(Box::new(listener));
    }

    pub fn toggle(&mut self) -> ThemeSetting {
        self.current = self.current.toggled();
        self.storage.save(self.current.class());
        for listener in &self.listeners {
            listener(self.current);
        }
        self.current
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
