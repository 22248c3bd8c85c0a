//! The ordered package list every task iterates over.

/// Built-in package list. Order matters: `-sys` crates publish before the
/// wrappers that depend on them.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "allegro-sys",
    "allegro_image-sys",
    "allegro_audio-sys",
    "allegro_acodec-sys",
    "allegro_dialog-sys",
    "allegro_primitives-sys",
    "allegro_font-sys",
    "allegro_ttf-sys",
    "allegro",
    "allegro_image",
    "allegro_audio",
    "allegro_acodec",
    "allegro_dialog",
    "allegro_primitives",
    "allegro_font",
    "allegro_ttf",
    "examples",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList {
    names: Vec<String>,
}

impl PackageList {
    /// Build a list from names, dropping blank entries.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(Into::into)
            .map(|name: String| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The documentation directory followed by every package, as used by
    /// version stamping and clean.
    pub fn with_leading<'a>(&'a self, first: &'a str) -> impl Iterator<Item = &'a str> {
        std::iter::once(first).chain(self.iter())
    }

    /// Every package except `excluded`.
    pub fn without<'a>(&'a self, excluded: &'a str) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |name| *name != excluded)
    }
}

impl Default for PackageList {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGES.iter().copied())
    }
}
