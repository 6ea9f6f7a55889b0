// ============================================================================
// Toxide - Configuration Data Model
// ============================================================================
//
// File: src/models/config.rs
// Responsibility: typed configuration structures and resolution
// Boundaries:
//   - ✅ Configuration data structure definitions
//   - ✅ Environment inheritance and placeholder substitution
//   - ✅ Configuration validation and defaults
//   - ✅ Global configuration access and runtime overrides
//   - ❌ No raw INI tokenization (core::ini)
//   - ❌ No execution logic
//   - ❌ No CLI argument handling
//
// ============================================================================

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::ini::{parse_bool, parse_lines, parse_list, IniDocument, IniSection};
use crate::models::env::{EnvCommand, GroupStrategy, TestEnv};

/// Global configuration holder
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// Name given to the implicit default environment (the bare `[testenv]`)
pub const DEFAULT_ENV_NAME: &str = "python";

/// Fully resolved toxide configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory containing the configuration file
    pub toxinidir: PathBuf,
    /// `[tox]` core settings
    pub core: CoreConfig,
    /// Named environments in declaration order
    pub envs: Vec<TestEnv>,
    /// Implicit default environment from the bare `[testenv]`
    pub default_env: Option<TestEnv>,
    /// `[pytest]` passthrough settings
    pub pytest: PytestConfig,
    /// `[flake8]` passthrough settings
    pub flake8: Flake8Config,
    /// Output settings (CLI-driven)
    pub output: OutputConfig,
    /// Execution settings
    pub execution: ExecutionConfig,
    /// Interface language
    pub language: String,
}

/// `[tox]` section settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoreConfig {
    /// Shared cache directory path
    pub distshare: Option<String>,
    /// Ordered default run set
    pub envlist: Vec<String>,
}

/// `[pytest]` section settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct PytestConfig {
    /// Default CLI flags handed to pytest invocations
    pub addopts: Option<String>,
}

/// `[flake8]` section settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct Flake8Config {
    /// Suppressed rule codes
    pub ignore: Vec<String>,
    /// Cyclomatic complexity threshold
    pub max_complexity: Option<i64>,
    /// Path globs skipped by the linter
    pub exclude: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize)]
pub struct OutputConfig {
    /// Show live progress display
    pub show_progress: bool,
    /// Verbose output
    pub verbose: bool,
    /// Colored output
    pub colored: bool,
}

/// Execution settings
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionConfig {
    /// Parallel execution enabled in the config file
    pub mp: bool,
    /// Raw worker count value (`4`, `cpu_count`, ...)
    pub processes: Option<String>,
    /// Per-environment timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Cancel pending environments after the first failure
    pub fail_fast: bool,
}

/// CLI runtime overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub fail_fast: Option<bool>,
    pub language: Option<String>,
}

/// A single validation finding
#[derive(Debug, Clone, Serialize)]
pub struct ConfigIssue {
    /// Whether the finding blocks a run
    pub severity: IssueSeverity,
    /// Human-readable description
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Configuration defaults, usable before the global config exists
pub trait ConfigDefaults {
    fn default_num_processes() -> usize {
        num_cpus::get()
    }

    fn default_show_progress() -> bool {
        true
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// Initialize the global configuration from a file path
    pub fn initialize(path: &Path) -> anyhow::Result<()> {
        let config = Self::load_from(path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// Load and resolve a configuration file; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let toxinidir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if path.exists() {
            let document = IniDocument::from_file(path)?;
            Self::from_document(&document, toxinidir)
        } else {
            Ok(Self::empty(toxinidir))
        }
    }

    /// Resolve a parsed document into a typed configuration
    pub fn from_document(document: &IniDocument, toxinidir: PathBuf) -> anyhow::Result<Self> {
        let core = match document.section("tox") {
            Some(section) => CoreConfig {
                distshare: section.get("distshare").map(str::to_string),
                envlist: section.get("envlist").map(parse_list).unwrap_or_default(),
            },
            None => CoreConfig::default(),
        };

        let execution = match document.section("tox") {
            Some(section) => ExecutionConfig {
                mp: section.get("mp").and_then(parse_bool).unwrap_or(false),
                processes: section.get("processes").map(str::to_string),
                timeout_seconds: None,
                fail_fast: false,
            },
            None => ExecutionConfig::default(),
        };

        let pytest = match document.section("pytest") {
            Some(section) => {
                PytestConfig { addopts: section.get("addopts").map(str::to_string) }
            }
            None => PytestConfig::default(),
        };

        let flake8 = match document.section("flake8") {
            Some(section) => Flake8Config {
                ignore: section.get("ignore").map(parse_list).unwrap_or_default(),
                max_complexity: section.get("max_complexity").and_then(|v| v.parse().ok()),
                exclude: section.get("exclude").map(parse_list).unwrap_or_default(),
            },
            None => Flake8Config::default(),
        };

        let base = document.section("testenv");
        let substitution = SubstitutionContext::new(&toxinidir, core.distshare.as_deref());

        let default_env = base
            .map(|section| inherit_env(DEFAULT_ENV_NAME, Some(section), None, &substitution))
            .transpose()?;

        let mut envs = Vec::new();
        for section in &document.sections {
            if let Some(name) = section.name.strip_prefix("testenv:") {
                let name = name.trim();
                if name.is_empty() {
                    anyhow::bail!("environment section with empty name: [{}]", section.name);
                }
                envs.push(inherit_env(name, base, Some(section), &substitution)?);
            }
        }

        Ok(Self {
            toxinidir,
            core,
            envs,
            default_env,
            pytest,
            flake8,
            output: OutputConfig {
                show_progress: Self::default_show_progress(),
                verbose: Self::default_verbose(),
                colored: Self::default_colored(),
            },
            execution,
            language: Self::default_language(),
        })
    }

    fn empty(toxinidir: PathBuf) -> Self {
        Self {
            toxinidir,
            core: CoreConfig::default(),
            envs: Vec::new(),
            default_env: None,
            pytest: PytestConfig::default(),
            flake8: Flake8Config::default(),
            output: OutputConfig {
                show_progress: Self::default_show_progress(),
                verbose: Self::default_verbose(),
                colored: Self::default_colored(),
            },
            execution: ExecutionConfig::default(),
            language: Self::default_language(),
        }
    }

    /// Look up an environment by name, falling back to the implicit default
    pub fn env(&self, name: &str) -> Option<&TestEnv> {
        self.envs
            .iter()
            .find(|env| env.name == name)
            .or_else(|| self.default_env.as_ref().filter(|env| env.name == name))
    }

    /// One environment by name. A name without its own `[testenv:NAME]`
    /// section resolves against the base section.
    pub fn resolve_env(&self, name: &str) -> anyhow::Result<TestEnv> {
        if let Some(env) = self.env(name) {
            return Ok(env.clone());
        }
        match &self.default_env {
            Some(base) => {
                // Derive an on-the-fly environment from the base section
                let mut env = base.clone();
                env.name = name.to_string();
                Ok(env)
            }
            None => anyhow::bail!("unknown environment: {}", name),
        }
    }

    /// Environments selected by an explicit list, or the envlist default
    pub fn select_envs(&self, requested: Option<&[String]>) -> anyhow::Result<Vec<TestEnv>> {
        let names: Vec<String> = match requested {
            Some(names) if !names.is_empty() => names.to_vec(),
            _ => self.core.envlist.clone(),
        };
        if names.is_empty() {
            anyhow::bail!("no environments selected: envlist is empty and none were requested");
        }

        names.iter().map(|name| self.resolve_env(name)).collect()
    }

    /// Resolve the parallel execution settings (CLI overrides the file).
    ///
    /// Returns `(use_mp, num_processes)`; a zero count disables parallel
    /// execution even when `use_mp` was requested.
    pub fn resolve_mp_options(
        &self,
        cli_mp: bool,
        cli_np: Option<i64>,
    ) -> anyhow::Result<(bool, usize)> {
        if !cli_mp && !self.execution.mp {
            return Ok((false, 0));
        }

        let num_processes = match cli_np {
            Some(value) => {
                if value < 0 {
                    anyhow::bail!("--np must be a non-negative integer");
                }
                value as usize
            }
            None => match self.execution.processes.as_deref() {
                None | Some("cpu_count") => Self::default_num_processes(),
                Some(raw) => raw
                    .parse::<usize>()
                    .map_err(|_| anyhow::anyhow!("processes must be an integer, got: {}", raw))?,
            },
        };

        Ok((true, num_processes))
    }

    /// Validate the configuration, returning findings in document order
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for name in &self.core.envlist {
            if self.envs.iter().all(|env| env.name != *name) {
                issues.push(ConfigIssue {
                    severity: IssueSeverity::Warning,
                    message: format!(
                        "envlist names {} but no [testenv:{}] section exists; it will run with base settings",
                        name, name
                    ),
                });
            }
        }

        if let Some(raw) = self.execution.processes.as_deref() {
            if raw != "cpu_count" && raw.parse::<usize>().is_err() {
                issues.push(ConfigIssue {
                    severity: IssueSeverity::Error,
                    message: format!("[tox] processes must be an integer or cpu_count, got: {}", raw),
                });
            }
        }

        for env in &self.envs {
            if !env.has_commands() {
                issues.push(ConfigIssue {
                    severity: IssueSeverity::Warning,
                    message: format!("environment {} declares no commands and will be skipped", env.name),
                });
            }
            for command in &env.commands {
                for placeholder in unresolved_placeholders(&command.line) {
                    issues.push(ConfigIssue {
                        severity: IssueSeverity::Warning,
                        message: format!(
                            "environment {} command references unknown placeholder {{{}}}",
                            env.name, placeholder
                        ),
                    });
                }
            }
        }

        if let Some(max_complexity) = self.flake8.max_complexity {
            if max_complexity < 0 {
                issues.push(ConfigIssue {
                    severity: IssueSeverity::Error,
                    message: format!(
                        "[flake8] max_complexity must be non-negative, got: {}",
                        max_complexity
                    ),
                });
            }
        }

        for pattern in &self.flake8.exclude {
            if let Err(err) = glob::Pattern::new(pattern) {
                issues.push(ConfigIssue {
                    severity: IssueSeverity::Error,
                    message: format!("[flake8] exclude pattern {} is invalid: {}", pattern, err),
                });
            }
        }

        issues
    }

    /// Generate the starter configuration file content
    pub fn default_ini_template() -> &'static str {
        r#"[tox]
distshare = {homedir}/.tox/distshare
envlist = lint,test
mp = true
processes = cpu_count

[testenv]
setenv =
    PYTHONPATH = {toxinidir}
deps = ./
commands =
    - py.test

[testenv:lint]
basepython = python2.7
deps = flake8
commands =
    - flake8 mypkg

[pytest]
addopts = -v

[flake8]
ignore = E501,E12,E261,F403,W503
max_complexity = 10
exclude = .tox,dist,doc,*egg,build
"#
    }

    /// Write the starter configuration file
    pub fn create_default_config_file(path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, Self::default_ini_template())?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Global configuration access
    // ------------------------------------------------------------------

    /// Merge CLI runtime overrides into the global configuration
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            config.output.show_progress = show_progress;
        }
        if let Some(timeout_seconds) = args.timeout_seconds {
            config.execution.timeout_seconds = Some(timeout_seconds);
        }
        if let Some(fail_fast) = args.fail_fast {
            config.execution.fail_fast = fail_fast;
        }
        if let Some(language) = args.language {
            config.language = language;
        }

        Ok(())
    }

    /// Snapshot of the whole global configuration
    pub fn snapshot() -> anyhow::Result<Config> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.clone())
    }

    /// Verbose output setting (with default)
    pub fn get_verbose() -> bool {
        Self::snapshot().map(|config| config.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// Colored output setting
    pub fn get_colored() -> anyhow::Result<bool> {
        Ok(Self::snapshot()?.output.colored)
    }

    /// Progress display setting (with default)
    pub fn get_show_progress() -> bool {
        Self::snapshot()
            .map(|config| config.output.show_progress)
            .unwrap_or_else(|_| Self::default_show_progress())
    }

    /// Interface language
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::snapshot()?.language)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self { mp: false, processes: None, timeout_seconds: None, fail_fast: false }
    }
}

// ----------------------------------------------------------------------
// Environment resolution
// ----------------------------------------------------------------------

/// Placeholder values shared by every environment of one file
struct SubstitutionContext {
    toxinidir: String,
    distshare: Option<String>,
    homedir: String,
}

impl SubstitutionContext {
    fn new(toxinidir: &Path, distshare: Option<&str>) -> Self {
        let homedir = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let toxinidir = toxinidir.to_string_lossy().to_string();
        // distshare may itself contain {homedir}/{toxinidir}
        let distshare = distshare.map(|raw| {
            raw.replace("{homedir}", &homedir).replace("{toxinidir}", &toxinidir)
        });
        Self { toxinidir, distshare, homedir }
    }

    /// Substitute known placeholders, leaving unknown ones untouched
    fn apply(&self, value: &str, envname: &str) -> String {
        let mut result = value.replace("{toxinidir}", &self.toxinidir);
        result = result.replace("{envname}", envname);
        result = result.replace("{homedir}", &self.homedir);
        if let Some(distshare) = &self.distshare {
            result = result.replace("{distshare}", distshare);
        }
        result
    }
}

/// Resolve one environment: own section keys override the base section
fn inherit_env(
    name: &str,
    base: Option<&IniSection>,
    own: Option<&IniSection>,
    substitution: &SubstitutionContext,
) -> anyhow::Result<TestEnv> {
    let lookup = |key: &str| -> Option<&str> {
        own.and_then(|section| section.get(key)).or_else(|| base.and_then(|section| section.get(key)))
    };

    let mut env = TestEnv::new(name.to_string());
    env.basepython = lookup("basepython").map(str::to_string);

    if let Some(raw) = lookup("setenv") {
        for line in parse_lines(raw) {
            let (key, value) = line.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("environment {}: setenv entry without `=`: {}", name, line)
            })?;
            env.setenv
                .insert(key.trim().to_string(), substitution.apply(value.trim(), name));
        }
    }

    if let Some(raw) = lookup("deps") {
        env.deps = parse_lines(raw)
            .into_iter()
            .map(|dep| substitution.apply(&dep, name))
            .collect();
    }

    if let Some(raw) = lookup("commands") {
        env.commands = parse_lines(raw)
            .into_iter()
            .map(|line| EnvCommand::from_line(&substitution.apply(&line, name)))
            .collect();
    }

    if let Some(group) = lookup("group") {
        env.group = Some(group.trim().to_string());
    }
    if let Some(raw) = lookup("group_strategy") {
        let strategy = GroupStrategy::from_str(raw)
            .map_err(|err| anyhow::anyhow!("environment {}: {}", name, err))?;
        env.group_strategy = Some(strategy);
    }

    Ok(env)
}

/// Placeholder names present in a value that resolution left behind
fn unresolved_placeholders(value: &str) -> Vec<String> {
    let pattern = Regex::new(r"\{([a-z_]+)\}").unwrap();
    pattern.captures_iter(value).map(|captures| captures[1].to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::env::GroupStrategy;

    const REFERENCE: &str = r#"[tox]
distshare = {homedir}/.tox/distshare
envlist = lint,test

[testenv]
setenv =
    PYTHONPATH = {toxinidir}
deps = ./
commands =
    - py.test

[testenv:lint]
basepython = python2.7
deps = flake8
commands =
    - flake8 mypkg

[testenv:test]
group = suite
group_strategy = serial

[pytest]
addopts = -v

[flake8]
ignore = E501,E12,E261,F403,W503
max_complexity = 10
exclude = .tox,dist,doc,*egg,build
"#;

    fn reference_config() -> Config {
        let document = IniDocument::parse(REFERENCE).unwrap();
        Config::from_document(&document, PathBuf::from("/proj")).unwrap()
    }

    #[test]
    fn envlist_declares_exactly_two_environments_plus_default() {
        let config = reference_config();
        assert_eq!(config.core.envlist, vec!["lint", "test"]);
        assert_eq!(config.envs.len(), 2);
        let default = config.default_env.as_ref().unwrap();
        assert_eq!(default.name, DEFAULT_ENV_NAME);
    }

    #[test]
    fn flake8_ignore_list_is_exact() {
        let config = reference_config();
        assert_eq!(config.flake8.ignore, vec!["E501", "E12", "E261", "F403", "W503"]);
        assert_eq!(config.flake8.max_complexity, Some(10));
        assert_eq!(config.flake8.exclude, vec![".tox", "dist", "doc", "*egg", "build"]);
    }

    #[test]
    fn pytest_addopts_passthrough() {
        let config = reference_config();
        assert_eq!(config.pytest.addopts.as_deref(), Some("-v"));
    }

    #[test]
    fn named_env_overrides_base_and_inherits_the_rest() {
        let config = reference_config();
        let lint = config.env("lint").unwrap();
        assert_eq!(lint.basepython.as_deref(), Some("python2.7"));
        assert_eq!(lint.deps, vec!["flake8"]);
        assert_eq!(lint.commands.len(), 1);
        assert_eq!(lint.commands[0].argv, vec!["flake8", "mypkg"]);
        assert!(lint.commands[0].tolerate_failure);
        // setenv inherited from the base section, with substitution applied
        assert_eq!(lint.setenv.get("PYTHONPATH").map(String::as_str), Some("/proj"));
    }

    #[test]
    fn resolve_env_derives_sectionless_names_from_the_base() {
        let config = reference_config();
        // Same lookup the run and show commands share
        let derived = config.resolve_env("py39").unwrap();
        assert_eq!(derived.name, "py39");
        assert_eq!(derived.commands.len(), 1);
        assert_eq!(derived.commands[0].argv[0], "py.test");

        let mut without_base = config.clone();
        without_base.default_env = None;
        assert!(without_base.resolve_env("py39").is_err());
    }

    #[test]
    fn group_keys_resolve_to_strategy() {
        let config = reference_config();
        let test = config.env("test").unwrap();
        assert_eq!(test.group.as_deref(), Some("suite"));
        assert_eq!(test.group_strategy, Some(GroupStrategy::Serial));
        // commands inherited from base keep the tolerance marker
        assert!(test.commands[0].tolerate_failure);
        assert_eq!(test.commands[0].argv, vec!["py.test"]);
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let raw = "[testenv:bad]\ngroup = g\ngroup_strategy = sideways\n";
        let document = IniDocument::parse(raw).unwrap();
        assert!(Config::from_document(&document, PathBuf::from(".")).is_err());
    }

    #[test]
    fn select_envs_defaults_to_envlist() {
        let config = reference_config();
        let selected = config.select_envs(None).unwrap();
        let names: Vec<_> = selected.iter().map(|env| env.name.as_str()).collect();
        assert_eq!(names, vec!["lint", "test"]);
    }

    #[test]
    fn select_envs_rejects_unknown_names_without_base() {
        let document = IniDocument::parse("[tox]\nenvlist = a\n").unwrap();
        let config = Config::from_document(&document, PathBuf::from(".")).unwrap();
        assert!(config.select_envs(Some(&["nope".to_string()])).is_err());
    }

    #[test]
    fn envlist_name_without_section_falls_back_to_base() {
        let raw = "[tox]\nenvlist = py27\n\n[testenv]\ncommands =\n    true\n";
        let document = IniDocument::parse(raw).unwrap();
        let config = Config::from_document(&document, PathBuf::from(".")).unwrap();
        let selected = config.select_envs(None).unwrap();
        assert_eq!(selected[0].name, "py27");
        assert_eq!(selected[0].commands[0].argv, vec!["true"]);
    }

    #[test]
    fn mp_options_follow_cli_over_file() {
        let raw = "[tox]\nmp = true\nprocesses = 3\n";
        let document = IniDocument::parse(raw).unwrap();
        let config = Config::from_document(&document, PathBuf::from(".")).unwrap();

        assert_eq!(config.resolve_mp_options(false, None).unwrap(), (true, 3));
        assert_eq!(config.resolve_mp_options(true, Some(7)).unwrap(), (true, 7));
        assert_eq!(config.resolve_mp_options(true, Some(0)).unwrap(), (true, 0));

        let plain = Config::from_document(&IniDocument::parse("[tox]\n").unwrap(), PathBuf::from("."))
            .unwrap();
        assert_eq!(plain.resolve_mp_options(false, None).unwrap(), (false, 0));
        assert_eq!(
            plain.resolve_mp_options(true, None).unwrap(),
            (true, Config::default_num_processes())
        );
    }

    #[test]
    fn invalid_processes_value_is_an_error() {
        let raw = "[tox]\nmp = true\nprocesses = many\n";
        let document = IniDocument::parse(raw).unwrap();
        let config = Config::from_document(&document, PathBuf::from(".")).unwrap();
        assert!(config.resolve_mp_options(false, None).is_err());
    }

    #[test]
    fn validate_flags_bad_globs_and_missing_sections() {
        let raw = "[tox]\nenvlist = ghost\n\n[flake8]\nexclude = [bad\n";
        let document = IniDocument::parse(raw).unwrap();
        let config = Config::from_document(&document, PathBuf::from(".")).unwrap();
        let issues = config.validate();
        assert!(issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Warning && issue.message.contains("ghost")));
        assert!(issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Error && issue.message.contains("[bad")));
    }

    #[test]
    fn load_from_reads_a_file_and_sets_toxinidir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tox.ini");
        std::fs::write(&path, REFERENCE).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.toxinidir, dir.path());
        assert_eq!(config.core.envlist, vec!["lint", "test"]);
        // substitution used the file's directory
        let lint = config.env("lint").unwrap();
        assert_eq!(
            lint.setenv.get("PYTHONPATH").map(String::as_str),
            Some(dir.path().to_str().unwrap())
        );
    }

    #[test]
    fn load_from_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("tox.ini")).unwrap();
        assert!(config.envs.is_empty());
        assert!(config.core.envlist.is_empty());
        assert!(config.select_envs(None).is_err());
    }

    #[test]
    fn created_config_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tox.ini");
        Config::create_default_config_file(&path).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.core.envlist, vec!["lint", "test"]);
        assert!(config.env("lint").is_some());
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        let document = IniDocument::parse(Config::default_ini_template()).unwrap();
        let config = Config::from_document(&document, PathBuf::from(".")).unwrap();
        assert_eq!(config.core.envlist, vec!["lint", "test"]);
        assert!(config.execution.mp);
        assert_eq!(config.execution.processes.as_deref(), Some("cpu_count"));
        assert!(config.validate().iter().all(|issue| issue.severity != IssueSeverity::Error));
    }
}
