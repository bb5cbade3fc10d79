//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LibraryError, LibraryResult};

use super::types::{Config, OutputFormat, Verbosity};
use super::ConfigWarning;

const PROJECT_CONFIG: &str = "athenaeum.toml";
const USER_CONFIG: &str = "athenaeum/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LibraryResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LibraryError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let (Some(seed), Some(dir)) = (config.seed.path.as_mut(), path.parent()) {
        if seed.is_relative() {
            *seed = dir.join(&*seed);
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file to read, then apply env overrides.
///
/// An explicit path must exist. Discovered files are optional, but once
/// found they must parse.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
) -> LibraryResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(project_root),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((config.with_env_overrides(), warnings))
}

fn discover(project_root: &Path) -> Option<PathBuf> {
    let project = project_root.join(PROJECT_CONFIG);
    if project.is_file() {
        return Some(project);
    }
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG))
        .filter(|path| path.is_file())
}

/// Apply environment variable overrides (ATHENAEUM_* prefix).
///
/// `lookup` stands in for `std::env::var` so overrides can be tested
/// without touching the process environment.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ATHENAEUM_SEED
    if let Some(seed) = lookup("ATHENAEUM_SEED").filter(|s| !s.trim().is_empty()) {
        config.seed.path = Some(PathBuf::from(seed));
    }

    // ATHENAEUM_VERBOSITY
    if let Some(verbosity) = lookup("ATHENAEUM_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "normal" => Verbosity::Normal,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => config.output.verbosity,
        };
    }

    // ATHENAEUM_FORMAT
    if let Some(format) = lookup("ATHENAEUM_FORMAT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "text" => OutputFormat::Text,
            _ => config.output.format,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["seed", "path", "output", "verbosity", "format"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
