//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show the commands being run and output of passing phases.
    Verbose,
    /// Show phases, outcomes and output of failing phases.
    #[default]
    Normal,
}

impl OutputMode {
    /// Select the mode from the `--verbose` flag.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows commands and output of passing phases.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
