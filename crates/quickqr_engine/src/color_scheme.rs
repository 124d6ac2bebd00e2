/// One-shot query for the host's light/dark preference.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// Reads the `COLORFGBG` convention (`"fg;bg"`, ANSI color indexes) set by
/// many terminals. Background 0-6 or 8 is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvColorScheme {
    colorfgbg: Option<String>,
    fallback_dark: bool,
}

impl EnvColorScheme {
    pub fn new(colorfgbg: Option<String>, fallback_dark: bool) -> Self {
        Self {
            colorfgbg,
            fallback_dark,
        }
    }

    /// Light when the terminal does not say, like a page with no preference.
    pub fn from_env() -> Self {
        Self::new(std::env::var("COLORFGBG").ok(), false)
    }
}

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        let background = self
            .colorfgbg
            .as_deref()
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(0..=6 | 8) => true,
            Some(_) => false,
            None => self.fallback_dark,
        }
    }
}
