//! The parsed form of one invocation.
//!
//! hubbub can't parse its command line with a fixed grammar: whatever it
//! doesn't recognize has to reach git byte for byte. [`Args`] therefore only
//! splits argv into three parts:
//!
//! ```text
//! hubbub [global flags] <command> [params...]
//! ```
//!
//! Global flags are the leading words that look like flags (`-C dir`,
//! `-c key=value`, `--no-pager`, ...). They are kept aside and put back in
//! front of every git command hubbub runs. `--noop` is hubbub's own global
//! flag and is removed: it turns on dry-run mode.
//!
//! Builtin commands mutate `Args` to describe what should run: they edit the
//! params of the forwarded git command, queue extra processes before or after
//! it, or suppress forwarding. [`Args::commands`] assembles the final queue.

use crate::shell::ProcessRequest;

/// Global flag that turns on dry-run mode.
pub const NOOP_FLAG: &str = "--noop";

/// One invocation: global flags, command, params and the processes to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    executable: String,
    global_flags: Vec<String>,
    command: String,
    params: Vec<String>,
    noop: bool,
    before: Vec<ProcessRequest>,
    after: Vec<ProcessRequest>,
    forward: bool,
}

impl Args {
    /// Parse argv (without the program name), wrapping `git`.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = argv.into_iter().map(Into::into).collect();
        let command_index = global_flags_len(&words);
        let mut global_flags: Vec<String> = words.drain(..command_index).collect();

        let before_len = global_flags.len();
        global_flags.retain(|flag| flag != NOOP_FLAG);
        let noop = global_flags.len() != before_len;

        let mut rest = words.into_iter();
        let command = rest.next().unwrap_or_default();

        Self {
            executable: "git".to_string(),
            global_flags,
            command,
            params: rest.collect(),
            noop,
            before: Vec::new(),
            after: Vec::new(),
            forward: true,
        }
    }

    /// Wrap `executable` instead of `git`.
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn global_flags(&self) -> &[String] {
        &self.global_flags
    }

    /// The command name; empty when the invocation has none.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    /// Whether there is no command at all.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Insert `words` ahead of the existing params.
    pub fn prepend_params<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut params: Vec<String> = words.into_iter().map(Into::into).collect();
        params.append(&mut self.params);
        self.params = params;
    }

    /// Replace the param at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace_param(&mut self, index: usize, value: impl Into<String>) {
        self.params[index] = value.into();
    }

    /// Remove `flag` wherever it stands as a flag. Returns whether any was
    /// removed.
    ///
    /// Positions are read as in [`Args::first_positional`]: a word that is
    /// the value of one of `value_flags`, or that comes after `--`, is kept.
    pub fn take_flag(&mut self, flag: &str, value_flags: &[&str]) -> bool {
        let mut skip_next = false;
        let mut after_separator = false;
        let mut removed = false;

        let params = std::mem::take(&mut self.params);
        for param in params {
            if skip_next {
                skip_next = false;
            } else if !after_separator {
                if param == "--" {
                    after_separator = true;
                } else if param == flag {
                    removed = true;
                    continue;
                } else if param.starts_with('-') {
                    skip_next = value_flags.contains(&param.as_str());
                }
            }
            self.params.push(param);
        }

        removed
    }

    /// Index of the first positional param.
    ///
    /// Words starting with `-` are flags; a flag listed in `value_flags`
    /// (without an inline `=value`) also consumes the next word. Everything
    /// after `--` is positional.
    pub fn first_positional(&self, value_flags: &[&str]) -> Option<usize> {
        let mut skip_next = false;
        let mut after_separator = false;

        for (index, param) in self.params.iter().enumerate() {
            if skip_next {
                skip_next = false;
            } else if after_separator {
                return Some(index);
            } else if param == "--" {
                after_separator = true;
            } else if param.starts_with('-') && param.len() > 1 {
                skip_next = value_flags.contains(&param.as_str());
            } else {
                return Some(index);
            }
        }

        None
    }

    /// Whether dry-run mode (`--noop`) is on.
    pub fn is_noop(&self) -> bool {
        self.noop
    }

    /// Queue `request` ahead of the forwarded command.
    pub fn before(&mut self, request: ProcessRequest) {
        self.before.push(request);
    }

    /// Queue `request` after the forwarded command.
    pub fn after(&mut self, request: ProcessRequest) {
        self.after.push(request);
    }

    /// Don't forward the command to git; only the before/after chains run.
    pub fn no_forward(&mut self) {
        self.forward = false;
    }

    /// A request for the wrapped program carrying the global flags.
    pub fn git_request<I, S>(&self, words: I) -> ProcessRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProcessRequest::new(&self.executable)
            .args(self.global_flags.iter().cloned())
            .args(words)
    }

    /// The command as git would receive it.
    pub fn forwarded(&self) -> ProcessRequest {
        self.git_request(std::iter::once(self.command.clone()).chain(self.params.iter().cloned()))
    }

    /// Every process to run, in order.
    pub fn commands(&self) -> Vec<ProcessRequest> {
        let mut queue = self.before.clone();
        if self.forward {
            queue.push(self.forwarded());
        }
        queue.extend(self.after.iter().cloned());
        queue
    }
}

/// Number of leading words that are global flags.
///
/// `--version` and `--help` are treated as commands.
fn global_flags_len(words: &[String]) -> usize {
    let mut len = 0;
    let mut takes_value = false;

    for word in words {
        if takes_value {
            takes_value = false;
        } else if word == "--version" || word == "--help" || !word.starts_with('-') {
            break;
        } else {
            takes_value = word == "-c" || word == "-C";
        }
        len += 1;
    }

    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Process;

    #[test]
    fn command_and_params() {
        let args = Args::new(["push", "origin", "main"]);
        assert_eq!(args.command(), "push");
        assert_eq!(args.params(), ["origin", "main"]);
        assert!(args.global_flags().is_empty());
        assert!(!args.is_noop());
        assert_eq!(args.executable(), "git");
    }

    #[test]
    fn no_words_is_empty_invocation() {
        let args = Args::new(Vec::<String>::new());
        assert!(args.is_empty());
        assert!(args.params().is_empty());
    }

    #[test]
    fn only_global_flags_is_empty_invocation() {
        let args = Args::new(["-C", "repo", "--no-pager"]);
        assert!(args.is_empty());
        assert_eq!(args.global_flags(), ["-C", "repo", "--no-pager"]);
    }

    #[test]
    fn global_flags_are_split_off() {
        let args = Args::new(["-c", "color.ui=never", "--no-pager", "-C", "sub", "log", "-n", "3"]);
        assert_eq!(
            args.global_flags(),
            ["-c", "color.ui=never", "--no-pager", "-C", "sub"]
        );
        assert_eq!(args.command(), "log");
        assert_eq!(args.params(), ["-n", "3"]);
    }

    #[test]
    fn noop_is_removed_from_global_flags() {
        let args = Args::new(["--noop", "--bare", "--noop", "status"]);
        assert!(args.is_noop());
        assert_eq!(args.global_flags(), ["--bare"]);
        assert_eq!(args.command(), "status");
    }

    #[test]
    fn noop_after_command_is_a_param() {
        let args = Args::new(["status", "--noop"]);
        assert!(!args.is_noop());
        assert_eq!(args.params(), ["--noop"]);
    }

    #[test]
    fn version_and_help_flags_are_commands() {
        let version = Args::new(["--no-pager", "--version"]);
        assert_eq!(version.command(), "--version");
        assert_eq!(version.global_flags(), ["--no-pager"]);

        let help = Args::new(["--help", "push"]);
        assert_eq!(help.command(), "--help");
        assert_eq!(help.params(), ["push"]);
    }

    #[test]
    fn prepend_keeps_original_params_last() {
        let mut args = Args::new(["co", "foo", "bar"]);
        args.prepend_params(["--quiet", "-b"]);
        assert_eq!(args.params(), ["--quiet", "-b", "foo", "bar"]);
    }

    #[test]
    fn first_positional_skips_flags_and_values() {
        let args = Args::new(["clone", "--depth", "1", "-q", "--branch=main", "a/b", "dir"]);
        assert_eq!(args.first_positional(&["--depth"]), Some(4));

        let args = Args::new(["clone", "-q"]);
        assert_eq!(args.first_positional(&[]), None);

        let args = Args::new(["clone", "--", "-weird"]);
        assert_eq!(args.first_positional(&[]), Some(1));

        let args = Args::new(["push", "-", "x"]);
        assert_eq!(args.first_positional(&[]), Some(0));
    }

    #[test]
    fn take_flag_removes_flag_occurrences() {
        let mut args = Args::new(["clone", "-p", "a/b", "-p"]);
        assert!(args.take_flag("-p", &[]));
        assert_eq!(args.params(), ["a/b"]);
        assert!(!args.take_flag("-p", &[]));
    }

    #[test]
    fn take_flag_keeps_values_and_operands() {
        let mut args = Args::new(["clone", "-o", "-p", "a/b", "--", "-p"]);
        assert!(!args.take_flag("-p", &["-o"]));
        assert_eq!(args.params(), ["-o", "-p", "a/b", "--", "-p"]);

        let mut args = Args::new(["clone", "-p", "-o", "-p", "a/b", "--", "-p"]);
        assert!(args.take_flag("-p", &["-o"]));
        assert_eq!(args.params(), ["-o", "-p", "a/b", "--", "-p"]);
    }

    #[test]
    fn commands_wrap_forwarded_command() {
        let mut args = Args::new(["-C", "repo", "push", "origin"]);
        args.before(ProcessRequest::new("echo").arg("first"));
        args.after(args.git_request(["push", "staging"]));

        let argv: Vec<Vec<String>> = args.commands().iter().map(|c| c.argv()).collect();
        assert_eq!(
            argv,
            vec![
                vec!["echo", "first"],
                vec!["git", "-C", "repo", "push", "origin"],
                vec!["git", "-C", "repo", "push", "staging"],
            ]
        );
    }

    #[test]
    fn no_forward_drops_the_git_command() {
        let mut args = Args::new(["alias"]);
        args.no_forward();
        assert!(args.commands().is_empty());
    }

    #[test]
    fn executable_can_be_replaced() {
        let args = Args::new(["status"]).with_executable("/usr/local/bin/git");
        assert_eq!(args.forwarded().program(), "/usr/local/bin/git");
    }
}
