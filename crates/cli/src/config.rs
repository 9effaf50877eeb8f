use scriptboard_core::seed::DEMO_PROJECT_TITLE;
use scriptboard_core::Storyboard;

use crate::error::{CliError, CliResult};

/// Default number of tags shown as badges on a timeline card.
pub const DEFAULT_BADGE_TAGS: usize = 2;

/// Which content a new session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    /// The three-segment example script.
    Demo,
    /// A single placeholder segment.
    Blank,
}

impl SeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Blank => "blank",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CliError> {
        match s.trim() {
            "demo" => Ok(Self::Demo),
            "blank" => Ok(Self::Blank),
            other => Err(CliError::Config(format!(
                "SCRIPTBOARD_SEED must be 'demo' or 'blank', got '{other}'"
            ))),
        }
    }
}

/// Editor configuration loaded from environment variables.
///
/// Command-line flags override these values in `main.rs`.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Project title shown in the header (default: the seed's own title).
    pub project_title: Option<String>,
    /// Starting content (default: `demo`).
    pub seed: SeedKind,
    /// Tag badges per timeline card (default: `2`).
    pub badge_tags: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            project_title: None,
            seed: SeedKind::Demo,
            badge_tags: DEFAULT_BADGE_TAGS,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default       |
    /// |-----------------------------|---------------|
    /// | `SCRIPTBOARD_PROJECT_TITLE` | seed title    |
    /// | `SCRIPTBOARD_SEED`          | `demo`        |
    /// | `SCRIPTBOARD_BADGE_TAGS`    | `2`           |
    pub fn from_env() -> CliResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        let project_title = lookup("SCRIPTBOARD_PROJECT_TITLE")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let seed = match lookup("SCRIPTBOARD_SEED") {
            Some(raw) => SeedKind::from_str(&raw)?,
            None => SeedKind::Demo,
        };

        let badge_tags = match lookup("SCRIPTBOARD_BADGE_TAGS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CliError::Config(format!(
                    "SCRIPTBOARD_BADGE_TAGS must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_BADGE_TAGS,
        };

        Ok(Self {
            project_title,
            seed,
            badge_tags,
        })
    }

    /// The snapshot a session starts from.
    pub fn initial_board(&self) -> Storyboard {
        let board = match self.seed {
            SeedKind::Demo => Storyboard::demo(),
            SeedKind::Blank => Storyboard::blank(DEMO_PROJECT_TITLE),
        };
        match &self.project_title {
            Some(title) => board.set_project_title(title.as_str()),
            None => board,
        }
    }
}
