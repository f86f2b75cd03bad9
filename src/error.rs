//! Configuration errors.

/// Errors returned by [`SimulationConfig::new`](crate::SimulationConfig::new).
///
/// Each variant names the offending field and carries the rejected value.
/// Validation happens once, at construction; the simulation loop itself
/// cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Starting portfolio value must be positive and finite.
    #[error("initial_portfolio must be positive and finite, got {0}")]
    InitialPortfolio(f64),

    /// Win probability must lie in `[0, 1]`.
    #[error("win_rate must be in [0, 1], got {0}")]
    WinRate(f64),

    /// Payoff multiplier on wins must be non-negative and finite.
    #[error("win_roi must be non-negative and finite, got {0}")]
    WinRoi(f64),

    /// Fraction of the risked amount lost on losses must lie in `[0, 1]`.
    #[error("loss_fraction must be in [0, 1], got {0}")]
    LossFraction(f64),

    /// Fraction of the portfolio risked per trade must lie in `[0, 1]`.
    #[error("risk_fraction must be in [0, 1], got {0}")]
    RiskFraction(f64),
}
