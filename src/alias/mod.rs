//! Git alias expansion.
//!
//! Before dispatch, the command name is looked up as a git alias. A plain
//! alias like `co = checkout --quiet` rewrites `co foo` into
//! `checkout --quiet foo`, and the rewritten command is what gets matched
//! against the builtin commands. This is what lets an alias point at a hubbub
//! builtin.
//!
//! Expansion never fails from the caller's point of view. A missing alias, a
//! failed lookup, an empty alias, a shell alias (`!...`) or one with broken
//! quoting all leave the invocation untouched. Shell aliases still work
//! because the unexpanded name is passed through to git, which runs them.
//!
//! Expansion happens once: an alias that expands to another alias is not
//! resolved again here.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use hubbub::alias::AliasExpander;
//!
//! let aliases = HashMap::from([("co".to_string(), "checkout --quiet".to_string())]);
//! let expansion = AliasExpander::new(&aliases).expand("co").unwrap();
//! assert_eq!(expansion.command, "checkout");
//! assert_eq!(expansion.params, vec!["--quiet"]);
//! ```

pub mod words;

use std::collections::HashMap;

use crate::cli::Args;
use crate::error::{HubbubError, Result};
use crate::shell::ProcessRequest;

/// Where alias definitions come from.
pub trait AliasSource {
    /// The raw alias value for `name`, or `None` if no alias is defined.
    fn lookup(&self, name: &str) -> Result<Option<String>>;
}

impl AliasSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get(name).cloned())
    }
}

/// Reads `alias.<name>` from git's configuration.
#[derive(Debug, Clone)]
pub struct GitConfigAliases {
    base: ProcessRequest,
}

impl GitConfigAliases {
    /// Query through `base`, the wrapped program plus any global flags.
    pub fn new(base: ProcessRequest) -> Self {
        Self { base }
    }

    /// Query the repository the invocation in `args` targets.
    pub fn for_args(args: &Args) -> Self {
        Self::new(args.git_request(Vec::<String>::new()))
    }
}

impl AliasSource for GitConfigAliases {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        let request = self
            .base
            .clone()
            .args(["config", "--get"])
            .arg(format!("alias.{}", name));

        let (outcome, stdout) = request.capture()?;
        match outcome.exit_code {
            Some(0) => Ok(Some(stdout.trim_end_matches(['\n', '\r']).to_string())),
            // `git config --get` exits 1 when the key is not set.
            Some(1) => Ok(None),
            code => Err(HubbubError::AliasLookup {
                name: name.to_string(),
                message: format!("'{}' exited with {:?}", request, code),
            }),
        }
    }
}

/// The result of expanding an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The command the alias names.
    pub command: String,
    /// Words the alias adds ahead of the invocation's own params.
    pub params: Vec<String>,
}

/// Resolves command names against an [`AliasSource`].
pub struct AliasExpander<'a> {
    source: &'a dyn AliasSource,
}

impl<'a> AliasExpander<'a> {
    pub fn new(source: &'a dyn AliasSource) -> Self {
        Self { source }
    }

    /// Expand `name`, or `None` when it should be used unchanged.
    pub fn expand(&self, name: &str) -> Option<Expansion> {
        match self.resolve(name) {
            Ok(expansion) => expansion,
            Err(e) => {
                tracing::debug!("not expanding '{}': {}", name, e);
                None
            }
        }
    }

    /// Rewrite the command and params of `args` in place.
    ///
    /// Returns whether anything changed.
    pub fn apply(&self, args: &mut Args) -> bool {
        match self.expand(args.command()) {
            Some(expansion) => {
                tracing::debug!(
                    "alias '{}' expands to '{}' {:?}",
                    args.command(),
                    expansion.command,
                    expansion.params
                );
                args.set_command(expansion.command);
                args.prepend_params(expansion.params);
                true
            }
            None => false,
        }
    }

    /// Like [`expand`](Self::expand), but reports why nothing was expanded.
    ///
    /// `Ok(None)` means no alias is defined.
    pub fn resolve(&self, name: &str) -> Result<Option<Expansion>> {
        let value = match self.source.lookup(name)? {
            Some(value) => value,
            None => return Ok(None),
        };

        if value.starts_with('!') {
            return Err(HubbubError::ShellAlias {
                name: name.to_string(),
            });
        }

        let mut words = words::split(&value)
            .map_err(|source| HubbubError::MalformedAlias {
                name: name.to_string(),
                source,
            })?
            .into_iter();

        let command = words.next().ok_or_else(|| HubbubError::EmptyAlias {
            name: name.to_string(),
        })?;

        Ok(Some(Expansion {
            command,
            params: words.collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::words::SplitError;
    use crate::shell::Process;

    fn aliases(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    struct FailingSource;

    impl AliasSource for FailingSource {
        fn lookup(&self, name: &str) -> Result<Option<String>> {
            Err(HubbubError::AliasLookup {
                name: name.to_string(),
                message: "git exploded".to_string(),
            })
        }
    }

    #[test]
    fn alias_words_precede_original_params() {
        let source = aliases(&[("co", "checkout --quiet")]);
        let mut args = Args::new(["co", "foo"]);

        assert!(AliasExpander::new(&source).apply(&mut args));

        assert_eq!(args.command(), "checkout");
        assert_eq!(args.params(), ["--quiet", "foo"]);
    }

    #[test]
    fn quoted_alias_words_are_kept_together() {
        let source = aliases(&[("lg", r#"log --format="%h %s""#)]);
        let expansion = AliasExpander::new(&source).expand("lg").unwrap();
        assert_eq!(expansion.command, "log");
        assert_eq!(expansion.params, ["--format=%h %s"]);
    }

    #[test]
    fn shell_alias_is_not_expanded() {
        let source = aliases(&[("hello", "!echo hello")]);
        let expander = AliasExpander::new(&source);

        assert!(matches!(
            expander.resolve("hello"),
            Err(HubbubError::ShellAlias { .. })
        ));

        let mut args = Args::new(["hello", "world"]);
        assert!(!expander.apply(&mut args));
        assert_eq!(args.command(), "hello");
        assert_eq!(args.params(), ["world"]);
    }

    #[test]
    fn empty_alias_is_not_expanded() {
        let source = aliases(&[("nothing", ""), ("blank", "   ")]);
        let expander = AliasExpander::new(&source);

        for name in ["nothing", "blank"] {
            assert!(matches!(
                expander.resolve(name),
                Err(HubbubError::EmptyAlias { .. })
            ));
            assert!(expander.expand(name).is_none());
        }
    }

    #[test]
    fn malformed_alias_is_not_expanded() {
        let source = aliases(&[("broken", "log 'oops")]);
        let expander = AliasExpander::new(&source);

        match expander.resolve("broken") {
            Err(HubbubError::MalformedAlias { source, .. }) => {
                assert_eq!(source, SplitError::UnterminatedSingleQuote)
            }
            other => panic!("expected MalformedAlias, got {:?}", other),
        }

        let mut args = Args::new(["broken"]);
        assert!(!expander.apply(&mut args));
        assert_eq!(args.command(), "broken");
    }

    #[test]
    fn lookup_failure_is_swallowed() {
        let expander = AliasExpander::new(&FailingSource);
        let mut args = Args::new(["status", "-s"]);

        assert!(!expander.apply(&mut args));
        assert_eq!(args.command(), "status");
        assert_eq!(args.params(), ["-s"]);
    }

    #[test]
    fn missing_alias_is_idempotent() {
        let source = aliases(&[]);
        let expander = AliasExpander::new(&source);
        let mut args = Args::new(["status", "-s"]);

        assert!(matches!(expander.resolve("status"), Ok(None)));
        assert!(!expander.apply(&mut args));
        assert!(!expander.apply(&mut args));
        assert_eq!(args.command(), "status");
        assert_eq!(args.params(), ["-s"]);
    }

    #[test]
    fn expansion_is_single_level() {
        let source = aliases(&[("a", "b --one"), ("b", "status")]);
        let mut args = Args::new(["a"]);

        AliasExpander::new(&source).apply(&mut args);

        assert_eq!(args.command(), "b");
        assert_eq!(args.params(), ["--one"]);
    }

    #[cfg(unix)]
    #[test]
    fn git_config_lookup_distinguishes_missing_from_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("fake-git");
        std::fs::write(
            &script,
            "case \"$3\" in\n  alias.co) echo 'checkout --quiet' ;;\n  alias.bad) exit 3 ;;\n  *) exit 1 ;;\nesac\n",
        )
        .unwrap();

        let source = GitConfigAliases::new(ProcessRequest::new("sh").arg(script.to_string_lossy()));
        assert_eq!(
            source.lookup("co").unwrap().as_deref(),
            Some("checkout --quiet")
        );
        assert_eq!(source.lookup("missing").unwrap(), None);
        assert!(matches!(
            source.lookup("bad"),
            Err(HubbubError::AliasLookup { .. })
        ));
    }

    #[test]
    fn git_config_lookup_uses_global_flags() {
        let args = Args::new(["-C", "/tmp/repo", "co"]);
        let source = GitConfigAliases::for_args(&args);
        assert_eq!(source.base.argv(), vec!["git", "-C", "/tmp/repo"]);
    }
}
