//! Language identification and detection
//!
//! Maps content types and file extensions to language IDs, and each language
//! to the lexical family whose scanner understands its comments and strings.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum LanguageId {
    #[default]
    PlainText,
    // C-like
    Rust,
    C,
    Cpp,
    CSharp,
    Java,
    JavaScript,
    TypeScript,
    Go,
    Json,
    // Stylesheets
    Css,
    Scss,
    Less,
    // Hash-comment languages
    Python,
    Shell,
    Yaml,
    Toml,
    // Other
    Sql,
}

/// How a language spells comments and string literals.
///
/// Languages in the same family share one scanner implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalFamily {
    /// `//` and `/* */` comments, `"` and `'` literals with `\` escapes
    CFamily,
    /// C-like, but `'` also introduces lifetimes and labels
    Rust,
    /// `/* */` comments plus the `//` dialect comment, both quote styles
    Css,
    /// `#` line comments, both quote styles
    Script,
    /// `--` and `/* */` comments, `'` strings and `"` identifiers, no escapes
    Sql,
    /// No comments or strings at all
    Plain,
}

impl LanguageId {
    /// Every language, in declaration order
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::PlainText,
        LanguageId::Rust,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::CSharp,
        LanguageId::Java,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Go,
        LanguageId::Json,
        LanguageId::Css,
        LanguageId::Scss,
        LanguageId::Less,
        LanguageId::Python,
        LanguageId::Shell,
        LanguageId::Yaml,
        LanguageId::Toml,
        LanguageId::Sql,
    ];

    /// Resolve a host content-type name (case-insensitive).
    ///
    /// Unknown content types resolve to plain text.
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type.trim().to_lowercase().as_str() {
            "rust" => LanguageId::Rust,
            "c" => LanguageId::C,
            "cpp" | "c++" | "c/c++" => LanguageId::Cpp,
            "csharp" | "c#" | "cs" => LanguageId::CSharp,
            "java" => LanguageId::Java,
            "javascript" | "js" | "node.js" => LanguageId::JavaScript,
            "typescript" | "ts" => LanguageId::TypeScript,
            "go" | "golang" => LanguageId::Go,
            "json" => LanguageId::Json,
            "css" => LanguageId::Css,
            "scss" | "sass" => LanguageId::Scss,
            "less" => LanguageId::Less,
            "python" | "py" => LanguageId::Python,
            "shell" | "bash" | "sh" | "shellscript" => LanguageId::Shell,
            "yaml" | "yml" => LanguageId::Yaml,
            "toml" => LanguageId::Toml,
            "sql" | "t-sql" | "tsql" => LanguageId::Sql,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => LanguageId::Rust,
            "c" | "h" => LanguageId::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => LanguageId::Cpp,
            "cs" => LanguageId::CSharp,
            "java" => LanguageId::Java,
            "js" | "mjs" | "cjs" | "jsx" => LanguageId::JavaScript,
            "ts" | "tsx" | "mts" => LanguageId::TypeScript,
            "go" => LanguageId::Go,
            "json" => LanguageId::Json,
            "css" => LanguageId::Css,
            "scss" | "sass" => LanguageId::Scss,
            "less" => LanguageId::Less,
            "py" | "pyi" => LanguageId::Python,
            "sh" | "bash" | "zsh" => LanguageId::Shell,
            "yaml" | "yml" => LanguageId::Yaml,
            "toml" => LanguageId::Toml,
            "sql" => LanguageId::Sql,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Rust => "Rust",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::CSharp => "C#",
            LanguageId::Java => "Java",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Go => "Go",
            LanguageId::Json => "JSON",
            LanguageId::Css => "CSS",
            LanguageId::Scss => "SCSS",
            LanguageId::Less => "LESS",
            LanguageId::Python => "Python",
            LanguageId::Shell => "Shell",
            LanguageId::Yaml => "YAML",
            LanguageId::Toml => "TOML",
            LanguageId::Sql => "SQL",
        }
    }

    /// Which scanner handles this language
    pub fn lexical_family(&self) -> LexicalFamily {
        match self {
            LanguageId::Rust => LexicalFamily::Rust,
            LanguageId::C
            | LanguageId::Cpp
            | LanguageId::CSharp
            | LanguageId::Java
            | LanguageId::JavaScript
            | LanguageId::TypeScript
            | LanguageId::Go
            | LanguageId::Json => LexicalFamily::CFamily,
            LanguageId::Css | LanguageId::Scss | LanguageId::Less => LexicalFamily::Css,
            LanguageId::Python | LanguageId::Shell | LanguageId::Yaml | LanguageId::Toml => {
                LexicalFamily::Script
            }
            LanguageId::Sql => LexicalFamily::Sql,
            LanguageId::PlainText => LexicalFamily::Plain,
        }
    }

    /// Built-in bracket list as consecutive open/close pairs
    pub fn default_brace_list(&self) -> &'static str {
        "(){}[]"
    }

    /// Template literals in JavaScript and TypeScript, raw strings in Go
    pub fn has_backtick_strings(&self) -> bool {
        matches!(
            self,
            LanguageId::JavaScript | LanguageId::TypeScript | LanguageId::Go
        )
    }

    /// Whether `ch`, placed right before a `//`, `#` or quote, lets that
    /// character open a comment or string.
    ///
    /// CSS line comments and Shell comments need whitespace before them;
    /// YAML quotes also open after flow indicators and `:`.
    pub fn is_context_boundary(&self, ch: char) -> bool {
        match self {
            LanguageId::Css | LanguageId::Scss | LanguageId::Less | LanguageId::Shell => {
                ch.is_whitespace()
            }
            LanguageId::Yaml => ch.is_whitespace() || matches!(ch, '[' | '{' | ',' | ':'),
            _ => false,
        }
    }
}

impl LexicalFamily {
    /// Characters that open and close string literals
    pub fn quotes(&self) -> &'static [char] {
        match self {
            LexicalFamily::Plain => &[],
            _ => &['"', '\''],
        }
    }

    /// Escape character inside string literals, if the family has one
    pub fn escape(&self) -> Option<char> {
        match self {
            LexicalFamily::Sql | LexicalFamily::Plain => None,
            _ => Some('\\'),
        }
    }

    /// Characters that take part in comment delimiters, including the
    /// newline that ends a line comment
    pub fn comment_chars(&self) -> &'static [char] {
        match self {
            LexicalFamily::CFamily | LexicalFamily::Rust | LexicalFamily::Css => {
                &['/', '*', '\n']
            }
            LexicalFamily::Script => &['#', '\n'],
            LexicalFamily::Sql => &['-', '/', '*', '\n'],
            LexicalFamily::Plain => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type() {
        assert_eq!(LanguageId::from_content_type("CSharp"), LanguageId::CSharp);
        assert_eq!(LanguageId::from_content_type("css"), LanguageId::Css);
        assert_eq!(LanguageId::from_content_type("TypeScript"), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_content_type(" Rust "), LanguageId::Rust);
        assert_eq!(LanguageId::from_content_type("plaintext"), LanguageId::PlainText);
        assert_eq!(LanguageId::from_content_type("cobol"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("rs"), LanguageId::Rust);
        assert_eq!(LanguageId::from_extension("SCSS"), LanguageId::Scss);
        assert_eq!(LanguageId::from_extension("yml"), LanguageId::Yaml);
        assert_eq!(LanguageId::from_extension("txt"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageId::from_path(Path::new("/src/lib.rs")),
            LanguageId::Rust
        );
        assert_eq!(
            LanguageId::from_path(Path::new("styles/site.less")),
            LanguageId::Less
        );
        assert_eq!(
            LanguageId::from_path(Path::new("Makefile")),
            LanguageId::PlainText
        );
    }

    #[test]
    fn test_families() {
        assert_eq!(LanguageId::Json.lexical_family(), LexicalFamily::CFamily);
        assert_eq!(LanguageId::Scss.lexical_family(), LexicalFamily::Css);
        assert_eq!(LanguageId::Toml.lexical_family(), LexicalFamily::Script);
        assert_eq!(LexicalFamily::Sql.escape(), None);
        assert!(LexicalFamily::Plain.quotes().is_empty());
    }

    #[test]
    fn test_all_is_complete() {
        for lang in LanguageId::ALL {
            // Display names are unique
            let same_name = LanguageId::ALL
                .iter()
                .filter(|other| other.display_name() == lang.display_name())
                .count();
            assert_eq!(same_name, 1, "{:?}", lang);
        }
        assert_eq!(LanguageId::ALL.len(), 18);
    }

    #[test]
    fn test_context_boundaries() {
        assert!(LanguageId::Scss.is_context_boundary(' '));
        assert!(LanguageId::Shell.is_context_boundary('\t'));
        assert!(LanguageId::Yaml.is_context_boundary(','));
        assert!(!LanguageId::Shell.is_context_boundary(','));
        assert!(!LanguageId::Python.is_context_boundary(' '));
        assert!(!LanguageId::C.is_context_boundary(' '));
    }

    #[test]
    fn test_backtick_strings() {
        assert!(LanguageId::TypeScript.has_backtick_strings());
        assert!(LanguageId::Go.has_backtick_strings());
        assert!(!LanguageId::Rust.has_backtick_strings());
        assert!(!LanguageId::Shell.has_backtick_strings());
    }
}
