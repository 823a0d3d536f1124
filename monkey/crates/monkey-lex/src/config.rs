//! Lexer configuration.
//!
//! The only tunable today is the set of namespace prefixes: identifiers
//! such as `math` or `file` that glue onto a following `.name` to form a
//! single qualified identifier (`math.sqrt`). The set must agree with the
//! builtin registry the evaluator uses.

use monkey_util::FxHashSet;

/// Namespace prefixes recognised when no configuration is given.
pub const DEFAULT_NAMESPACES: &[&str] = &["os", "file", "directory", "math", "string"];

/// Settings that change how source text is tokenized.
///
/// # Example
///
/// ```
/// use monkey_lex::LexerConfig;
///
/// let config = LexerConfig::default().with_namespace("net");
/// assert!(config.is_namespace("math"));
/// assert!(config.is_namespace("net"));
/// assert!(!config.is_namespace("foo"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    namespaces: FxHashSet<String>,
}

impl LexerConfig {
    /// Creates a configuration with no namespace prefixes.
    ///
    /// Every `a.b` then lexes as `Ident Period Ident`.
    pub fn empty() -> Self {
        Self {
            namespaces: FxHashSet::default(),
        }
    }

    /// Creates a configuration from an explicit list of prefixes.
    pub fn with_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a namespace prefix.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.insert(namespace.into());
        self
    }

    /// Returns true if `ident` is a namespace prefix.
    #[inline]
    pub fn is_namespace(&self, ident: &str) -> bool {
        self.namespaces.contains(ident)
    }

    /// Returns the configured prefixes in sorted order.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.namespaces.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::with_namespaces(DEFAULT_NAMESPACES.iter().copied())
    }
}
