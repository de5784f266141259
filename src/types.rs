//! Shared types used across the launcher.
use clap::ValueEnum;

/// How the exit status of the two-stage pipeline is derived.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum StatusPolicy {
    /// Only the epp stage decides; a failing BLANT stage is ignored (plain shell pipe).
    #[default]
    LastStage,
    /// Any failing stage fails the pipeline (`pipefail`).
    AnyStage,
}

impl StatusPolicy {
    /// Shell prologue that puts the policy into effect.
    pub fn shell_prologue(self) -> &'static str {
        match self {
            StatusPolicy::LastStage => "",
            StatusPolicy::AnyStage => "set -o pipefail\n",
        }
    }
}

impl std::fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusPolicy::LastStage => "last-stage",
            StatusPolicy::AnyStage => "any-stage",
        };
        write!(f, "{}", s)
    }
}
