// ============================================================================
// Toxide - Environment Data Model
// ============================================================================
//
// File: src/models/env.rs
// Responsibility: test environment data structure definitions
// Boundaries:
//   - ✅ Environment information data structures
//   - ✅ Command line splitting and failure-tolerance marker
//   - ✅ Group strategy enumeration
//   - ❌ No environment execution logic
//   - ❌ No configuration file parsing
//   - ❌ No CLI-related logic
//
// ============================================================================

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Execution strategy of an environment group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStrategy {
    /// Members run concurrently with everything else
    Free,
    /// Members run sequentially inside a single worker
    Serial,
    /// Members run concurrently, with the pool drained before and after
    IsolatedFree,
    /// Members run sequentially, with the pool drained before and after
    IsolatedSerial,
}

impl GroupStrategy {
    /// Ordering rank: non-isolated groups first, fully isolated last
    pub fn rank(&self) -> u8 {
        match self {
            GroupStrategy::Free | GroupStrategy::Serial => 0,
            GroupStrategy::IsolatedFree => 1,
            GroupStrategy::IsolatedSerial => 2,
        }
    }

    /// Whether the pool must be empty before and after this group runs
    pub fn is_isolated(&self) -> bool {
        matches!(self, GroupStrategy::IsolatedFree | GroupStrategy::IsolatedSerial)
    }

    /// Whether members of this group run sequentially inside one worker
    pub fn is_serial(&self) -> bool {
        matches!(self, GroupStrategy::Serial | GroupStrategy::IsolatedSerial)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStrategy::Free => "free",
            GroupStrategy::Serial => "serial",
            GroupStrategy::IsolatedFree => "isolated_free",
            GroupStrategy::IsolatedSerial => "isolated_serial",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim() {
            "free" => Ok(GroupStrategy::Free),
            "serial" => Ok(GroupStrategy::Serial),
            "isolated_free" => Ok(GroupStrategy::IsolatedFree),
            "isolated_serial" => Ok(GroupStrategy::IsolatedSerial),
            other => Err(format!(
                "unknown strategy {}, expected free, serial, isolated_free or isolated_serial",
                other
            )),
        }
    }
}

impl fmt::Display for GroupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One command of an environment's command list
#[derive(Debug, Clone, Serialize)]
pub struct EnvCommand {
    /// Command line as written, without the tolerance marker
    pub line: String,
    /// Split argument vector
    pub argv: Vec<String>,
    /// Leading `-` marker: a failure does not abort the remaining commands
    pub tolerate_failure: bool,
}

impl EnvCommand {
    /// Build a command from a raw config line, honoring the `-` prefix
    pub fn from_line(raw: &str) -> Self {
        let trimmed = raw.trim();
        let (tolerate_failure, line) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        Self {
            line: line.to_string(),
            argv: split_command_line(line),
            tolerate_failure,
        }
    }

    /// Program name, if the line was non-empty
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }
}

/// A fully resolved test environment
#[derive(Debug, Clone, Serialize)]
pub struct TestEnv {
    /// Environment name (`lint`, `test`, ...)
    pub name: String,
    /// Interpreter selector, if declared
    pub basepython: Option<String>,
    /// Environment variable overrides applied before execution
    pub setenv: HashMap<String, String>,
    /// Declared dependency requirements (reported, never installed)
    pub deps: Vec<String>,
    /// Ordered command list
    pub commands: Vec<EnvCommand>,
    /// Group name, if the environment was grouped explicitly
    pub group: Option<String>,
    /// Strategy declared for the group, if any
    pub group_strategy: Option<GroupStrategy>,
}

impl TestEnv {
    pub fn new(name: String) -> Self {
        Self {
            name,
            basepython: None,
            setenv: HashMap::new(),
            deps: Vec::new(),
            commands: Vec::new(),
            group: None,
            group_strategy: None,
        }
    }

    /// Whether there is anything to execute
    pub fn has_commands(&self) -> bool {
        self.commands.iter().any(|command| !command.argv.is_empty())
    }
}

/// Split a command line into argv without involving a shell.
///
/// Whitespace separates words; single and double quotes group them.
/// An unterminated quote swallows the rest of the line, matching how
/// tox treats its command values.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut argv = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => {
                if c == '\'' || c == '"' {
                    quote = Some(c);
                    in_word = true;
                } else if c.is_whitespace() {
                    if in_word {
                        argv.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                } else {
                    current.push(c);
                    in_word = true;
                }
            }
        }
    }
    if in_word {
        argv.push(current);
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parse_and_rank() {
        assert_eq!(GroupStrategy::from_str("free").unwrap(), GroupStrategy::Free);
        assert_eq!(
            GroupStrategy::from_str("isolated_serial").unwrap(),
            GroupStrategy::IsolatedSerial
        );
        assert!(GroupStrategy::from_str("parallel").is_err());

        assert_eq!(GroupStrategy::Free.rank(), 0);
        assert_eq!(GroupStrategy::Serial.rank(), 0);
        assert_eq!(GroupStrategy::IsolatedFree.rank(), 1);
        assert_eq!(GroupStrategy::IsolatedSerial.rank(), 2);
        assert!(!GroupStrategy::Free.is_isolated());
        assert!(GroupStrategy::IsolatedSerial.is_isolated());
    }

    #[test]
    fn command_tolerance_marker() {
        let tolerant = EnvCommand::from_line("- py.test -v");
        assert!(tolerant.tolerate_failure);
        assert_eq!(tolerant.line, "py.test -v");
        assert_eq!(tolerant.argv, vec!["py.test", "-v"]);

        let strict = EnvCommand::from_line("flake8 mypkg");
        assert!(!strict.tolerate_failure);
        assert_eq!(strict.program(), Some("flake8"));
    }

    #[test]
    fn splits_quoted_words() {
        assert_eq!(
            split_command_line(r#"sh -c "echo hello world""#),
            vec!["sh", "-c", "echo hello world"]
        );
        assert_eq!(split_command_line("a 'b c' d"), vec!["a", "b c", "d"]);
        assert_eq!(split_command_line("  spaced   out  "), vec!["spaced", "out"]);
        assert!(split_command_line("").is_empty());
    }
}
