/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Run configuration loading and resolution.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. explicit CLI flags ([`Overrides`]),
//! 2. an optional YAML file ([`FileConfig`]),
//! 3. built-in defaults (the `DEFAULT_*` constants).
//!
//! A simulation runs when its CLI switch is set **or** its section is
//! present in the file.  The expected YAML structure is:
//! ```yaml
//! seed: 42
//! out_dir: results
//! processes:
//!   count: 128
//!   max_arrive_time: 256
//!   max_execution_time: 16
//!   distribution: uniform
//!   algorithms: [LCFS, SJF]      # optional, default: all four
//! pages:
//!   count: 64
//!   total_refs: 512
//!   distribution: normal
//!   policies: [FIFO, LFU]        # optional, default: all three
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::paging::Policy;
use crate::scheduler::Algorithm;
use crate::workload::Distribution;

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_NUM_PROCESSES: u16 = 128;
pub const DEFAULT_MAX_ARRIVE_TIME: u16 = 256;
pub const DEFAULT_MAX_EXECUTION_TIME: u16 = 16;
pub const DEFAULT_NUM_PAGES: u16 = 64;
pub const DEFAULT_TOTAL_REFS: u16 = 512;

// ── YAML file layout ──────────────────────────────────────────────────────────

/// The YAML file as written.  Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub out_dir: Option<PathBuf>,
    pub processes: Option<ProcessSection>,
    pub pages: Option<PageSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSection {
    pub count: Option<u16>,
    pub max_arrive_time: Option<u16>,
    pub max_execution_time: Option<u16>,
    pub distribution: Option<Distribution>,
    #[serde(default)]
    pub algorithms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSection {
    pub count: Option<u16>,
    pub total_refs: Option<u16>,
    pub distribution: Option<Distribution>,
    #[serde(default)]
    pub policies: Vec<String>,
}

impl FileConfig {
    /// Parses the YAML file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is
    /// structurally invalid (including unknown keys).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading run configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let file: FileConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        debug!(?file, "configuration file parsed");
        Ok(file)
    }
}

// ── CLI layer ─────────────────────────────────────────────────────────────────

/// Values given explicitly on the command line.  `None`/`false` defers to
/// the file or the default.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sim_processes: bool,
    pub sim_pages: bool,
    pub num_processes: Option<u16>,
    pub max_arrive_time: Option<u16>,
    pub max_execution_time: Option<u16>,
    pub num_pages: Option<u16>,
    pub total_refs: Option<u16>,
    pub distribution: Option<Distribution>,
    pub seed: Option<u64>,
    pub out_dir: Option<PathBuf>,
}

// ── Resolved configuration ────────────────────────────────────────────────────

/// Fully resolved process-scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRunConfig {
    pub count: u16,
    pub max_arrive_time: u16,
    pub max_execution_time: u16,
    pub distribution: Distribution,
    pub algorithms: Vec<Algorithm>,
}

impl ProcessRunConfig {
    fn workload_path(&self) -> PathBuf {
        PathBuf::from(format!("{}-processes", self.count))
            .join(format!("{}-max-arrive-time", self.max_arrive_time))
            .join(format!("{}-max-execution-time", self.max_execution_time))
    }

    /// `<base>/in/<n>-processes/<a>-max-arrive-time/<e>-max-execution-time`
    pub fn input_dir(&self, base: &Path) -> PathBuf {
        base.join("in").join(self.workload_path())
    }

    /// Same layout under `out/`, one directory per algorithm.
    pub fn output_dir(&self, base: &Path, algorithm: Algorithm) -> PathBuf {
        base.join("out")
            .join(self.workload_path())
            .join(algorithm.name())
    }
}

/// Fully resolved paging run.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRunConfig {
    pub num_pages: u16,
    pub total_refs: u16,
    pub distribution: Distribution,
    pub policies: Vec<Policy>,
}

impl PageRunConfig {
    fn workload_path(&self) -> PathBuf {
        PathBuf::from(format!("{}-pages", self.num_pages)).join(format!("{}-refs", self.total_refs))
    }

    /// `<base>/in/<p>-pages/<r>-refs`
    pub fn input_dir(&self, base: &Path) -> PathBuf {
        base.join("in").join(self.workload_path())
    }

    /// Same layout under `out/`, one directory per policy.
    pub fn output_dir(&self, base: &Path, policy: Policy) -> PathBuf {
        base.join("out").join(self.workload_path()).join(policy.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub processes: Option<ProcessRunConfig>,
    pub pages: Option<PageRunConfig>,
}

impl SimConfig {
    /// Merge `overrides` over `file` over the defaults.
    ///
    /// # Errors
    /// * neither simulation was requested,
    /// * an algorithm or policy name in the file is unknown.
    pub fn resolve(file: FileConfig, overrides: &Overrides) -> Result<Self> {
        let processes = if overrides.sim_processes || file.processes.is_some() {
            let section = file.processes.unwrap_or_default();
            let algorithms = if section.algorithms.is_empty() {
                Algorithm::ALL.to_vec()
            } else {
                section
                    .algorithms
                    .iter()
                    .map(|name| name.parse::<Algorithm>())
                    .collect::<Result<Vec<_>, _>>()
                    .context("Invalid entry in processes.algorithms")?
            };
            Some(ProcessRunConfig {
                count: overrides
                    .num_processes
                    .or(section.count)
                    .unwrap_or(DEFAULT_NUM_PROCESSES),
                max_arrive_time: overrides
                    .max_arrive_time
                    .or(section.max_arrive_time)
                    .unwrap_or(DEFAULT_MAX_ARRIVE_TIME),
                max_execution_time: overrides
                    .max_execution_time
                    .or(section.max_execution_time)
                    .unwrap_or(DEFAULT_MAX_EXECUTION_TIME),
                distribution: overrides
                    .distribution
                    .or(section.distribution)
                    .unwrap_or(Distribution::Uniform),
                algorithms,
            })
        } else {
            None
        };

        let pages = if overrides.sim_pages || file.pages.is_some() {
            let section = file.pages.unwrap_or_default();
            let policies = if section.policies.is_empty() {
                Policy::ALL.to_vec()
            } else {
                section
                    .policies
                    .iter()
                    .map(|name| name.parse::<Policy>())
                    .collect::<Result<Vec<_>, _>>()
                    .context("Invalid entry in pages.policies")?
            };
            Some(PageRunConfig {
                num_pages: overrides
                    .num_pages
                    .or(section.count)
                    .unwrap_or(DEFAULT_NUM_PAGES),
                total_refs: overrides
                    .total_refs
                    .or(section.total_refs)
                    .unwrap_or(DEFAULT_TOTAL_REFS),
                distribution: overrides
                    .distribution
                    .or(section.distribution)
                    .unwrap_or(Distribution::Normal),
                policies,
            })
        } else {
            None
        };

        if processes.is_none() && pages.is_none() {
            bail!(
                "no simulation requested: pass --sim-processes and/or --sim-pages, \
                 or add a `processes:`/`pages:` section to the config file"
            );
        }

        Ok(Self {
            seed: overrides.seed.or(file.seed),
            out_dir: overrides
                .out_dir
                .clone()
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            processes,
            pages,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    fn load(yaml: &str) -> FileConfig {
        let f = yaml_tempfile(yaml);
        FileConfig::load_from_file(f.path()).unwrap()
    }

    // ── FileConfig ────────────────────────────────────────────────────────────

    #[test]
    fn load_full_yaml() {
        let file = load(
            r#"
seed: 42
out_dir: results
processes:
  count: 64
  max_arrive_time: 128
  max_execution_time: 32
  distribution: normal
  algorithms: [LCFS, PreemptiveSJF]
pages:
  count: 32
  total_refs: 1024
  distribution: uniform
  policies: [FIFO]
"#,
        );
        let cfg = SimConfig::resolve(file, &Overrides::default()).unwrap();

        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.out_dir, PathBuf::from("results"));

        let p = cfg.processes.unwrap();
        assert_eq!(p.count, 64);
        assert_eq!(p.max_arrive_time, 128);
        assert_eq!(p.max_execution_time, 32);
        assert_eq!(p.distribution, Distribution::Normal);
        assert_eq!(p.algorithms, vec![Algorithm::Lcfs, Algorithm::PreemptiveSjf]);

        let pg = cfg.pages.unwrap();
        assert_eq!(pg.num_pages, 32);
        assert_eq!(pg.total_refs, 1024);
        assert_eq!(pg.distribution, Distribution::Uniform);
        assert_eq!(pg.policies, vec![Policy::Fifo]);
    }

    #[test]
    fn empty_section_uses_defaults() {
        let file = load("processes: {}\n");
        let cfg = SimConfig::resolve(file, &Overrides::default()).unwrap();

        let p = cfg.processes.unwrap();
        assert_eq!(p.count, DEFAULT_NUM_PROCESSES);
        assert_eq!(p.max_arrive_time, DEFAULT_MAX_ARRIVE_TIME);
        assert_eq!(p.max_execution_time, DEFAULT_MAX_EXECUTION_TIME);
        assert_eq!(p.algorithms, Algorithm::ALL.to_vec());
        assert!(cfg.pages.is_none(), "pages section absent → not requested");
        assert_eq!(cfg.out_dir, PathBuf::from("."));
    }

    #[test]
    fn missing_file_returns_error() {
        let result = FileConfig::load_from_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        assert!(FileConfig::load_from_file(f.path()).is_err());
    }

    #[test]
    fn unknown_key_returns_error() {
        let f = yaml_tempfile("processes:\n  cuont: 3\n");
        assert!(FileConfig::load_from_file(f.path()).is_err());
    }

    #[test]
    fn out_of_range_value_returns_error() {
        let f = yaml_tempfile("pages:\n  total_refs: 70000\n");
        assert!(FileConfig::load_from_file(f.path()).is_err());
    }

    #[test]
    fn unknown_algorithm_name_returns_error() {
        let file = load("processes:\n  algorithms: [LCFS, RoundRobin]\n");
        let err = SimConfig::resolve(file, &Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("RoundRobin"));
    }

    // ── Resolution ────────────────────────────────────────────────────────────

    #[test]
    fn nothing_requested_returns_error() {
        assert!(SimConfig::resolve(FileConfig::default(), &Overrides::default()).is_err());
    }

    #[test]
    fn cli_switch_without_file_uses_defaults() {
        let overrides = Overrides {
            sim_pages: true,
            ..Default::default()
        };
        let cfg = SimConfig::resolve(FileConfig::default(), &overrides).unwrap();
        let pg = cfg.pages.unwrap();
        assert_eq!(pg.num_pages, DEFAULT_NUM_PAGES);
        assert_eq!(pg.total_refs, DEFAULT_TOTAL_REFS);
        assert_eq!(pg.distribution, Distribution::Normal);
        assert_eq!(pg.policies, Policy::ALL.to_vec());
        assert!(cfg.processes.is_none());
    }

    #[test]
    fn cli_values_override_file_values() {
        let file = load("seed: 1\nprocesses:\n  count: 10\n  max_arrive_time: 5\n");
        let overrides = Overrides {
            num_processes: Some(20),
            seed: Some(99),
            out_dir: Some(PathBuf::from("/tmp/x")),
            ..Default::default()
        };
        let cfg = SimConfig::resolve(file, &overrides).unwrap();
        let p = cfg.processes.unwrap();
        assert_eq!(p.count, 20, "CLI wins");
        assert_eq!(p.max_arrive_time, 5, "file value kept");
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.out_dir, PathBuf::from("/tmp/x"));
    }

    // ── Output layout ─────────────────────────────────────────────────────────

    #[test]
    fn process_directories_follow_workload_parameters() {
        let p = ProcessRunConfig {
            count: 128,
            max_arrive_time: 256,
            max_execution_time: 16,
            distribution: Distribution::Uniform,
            algorithms: vec![],
        };
        let base = Path::new("base");
        assert_eq!(
            p.input_dir(base),
            PathBuf::from("base/in/128-processes/256-max-arrive-time/16-max-execution-time")
        );
        assert_eq!(
            p.output_dir(base, Algorithm::PreemptiveLcfs),
            PathBuf::from(
                "base/out/128-processes/256-max-arrive-time/16-max-execution-time/PreemptiveLCFS"
            )
        );
    }

    #[test]
    fn page_directories_follow_workload_parameters() {
        let pg = PageRunConfig {
            num_pages: 64,
            total_refs: 512,
            distribution: Distribution::Normal,
            policies: vec![],
        };
        let base = Path::new("base");
        assert_eq!(pg.input_dir(base), PathBuf::from("base/in/64-pages/512-refs"));
        assert_eq!(
            pg.output_dir(base, Policy::PERSISTENT_LFU),
            PathBuf::from("base/out/64-pages/512-refs/PersistentFrequencyLFU")
        );
    }
}
