use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that controls how a report is plotted. The coordinate math
/// itself has nothing to configure; this only covers the policy for dealing
/// with bad input.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlotConfig {
    /// If enabled, the first invalid report line aborts the whole plot. If
    /// disabled, invalid lines are logged and skipped, and the rest of the
    /// report is still plotted.
    pub strict: bool,

    /// The most moves a single report line may contain. Lines with more moves
    /// than this are treated as invalid. Typed-in reports never legitimately
    /// get anywhere near the default, so hitting this almost always means
    /// garbage input.
    #[validate(range(min = 1, max = 100000))]
    pub max_moves: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            strict: true,
            max_moves: 1000,
        }
    }
}
