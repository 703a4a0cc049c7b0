use std::fmt;

use serde::{Deserialize, Serialize};

/// Language tag on a spell.
///
/// The recognized set is advisory: anything else round-trips through
/// [`Language::Other`] untouched, so a spell tagged with a language we have
/// never heard of still loads, filters, and displays (with the default
/// icon). Serializes as its plain lowercase label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Csharp,
    Cpp,
    Ruby,
    Go,
    Rust,
    Php,
    Html,
    Css,
    Sql,
    Other(String),
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Csharp => "csharp",
            Language::Cpp => "cpp",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Other(label) => label,
        }
    }

    /// Display glyph for list rows. Unrecognized languages get the scroll.
    pub fn icon(&self) -> &'static str {
        match self {
            Language::Javascript => "⚡",
            Language::Typescript => "🔷",
            Language::Python => "🐍",
            Language::Java => "☕",
            Language::Csharp => "🔧",
            Language::Cpp => "⚙️",
            Language::Ruby => "💎",
            Language::Go => "🔵",
            Language::Rust => "🦀",
            Language::Php => "🐘",
            Language::Html => "🌐",
            Language::Css => "🎨",
            Language::Sql => "🗄️",
            Language::Other(_) => "📜",
        }
    }
}

impl From<&str> for Language {
    fn from(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "javascript" => Language::Javascript,
            "typescript" => Language::Typescript,
            "python" => Language::Python,
            "java" => Language::Java,
            "csharp" => Language::Csharp,
            "cpp" => Language::Cpp,
            "ruby" => Language::Ruby,
            "go" => Language::Go,
            "rust" => Language::Rust,
            "php" => Language::Php,
            "html" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            _ => Language::Other(label.to_string()),
        }
    }
}

impl From<String> for Language {
    fn from(label: String) -> Self {
        Language::from(label.as_str())
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
