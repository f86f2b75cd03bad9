//! Simulation configuration.

use crate::error::ConfigError;

/// Parameters for one risk-of-ruin simulation.
///
/// Every trade risks `risk_fraction` of the *current* portfolio value, so
/// gains and losses compound. A winning trade returns `win_roi` times the
/// risked amount; a losing trade forfeits `loss_fraction` of it.
///
/// Construction goes through [`SimulationConfig::new`], which rejects
/// out-of-range values up front. Once built, a config is valid for any number
/// of simulation runs.
///
/// # Example
///
/// ```
/// use ruinbook::SimulationConfig;
///
/// let config = SimulationConfig::new(1_000.0, 0.3, 3.0, 0.7, 0.05, 200)?;
/// assert_eq!(config.initial_portfolio(), 1_000.0);
/// assert_eq!(config.num_trades(), 200);
/// # Ok::<(), ruinbook::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    initial_portfolio: f64,
    win_rate: f64,
    win_roi: f64,
    loss_fraction: f64,
    risk_fraction: f64,
    num_trades: usize,
}

impl SimulationConfig {
    /// Create a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `initial_portfolio` — Starting value, must be positive and finite.
    /// * `win_rate` — Probability of a winning trade, in `[0, 1]`.
    /// * `win_roi` — Payoff multiplier on the risked amount for wins, `>= 0`.
    /// * `loss_fraction` — Fraction of the risked amount lost on losses, in `[0, 1]`.
    /// * `risk_fraction` — Fraction of the current portfolio risked per trade, in `[0, 1]`.
    /// * `num_trades` — Upper bound on simulated trades.
    ///
    /// Returns the first [`ConfigError`] encountered, checked in field order.
    pub fn new(
        initial_portfolio: f64,
        win_rate: f64,
        win_roi: f64,
        loss_fraction: f64,
        risk_fraction: f64,
        num_trades: usize,
    ) -> Result<Self, ConfigError> {
        if !initial_portfolio.is_finite() || initial_portfolio <= 0.0 {
            return Err(ConfigError::InitialPortfolio(initial_portfolio));
        }
        if !win_rate.is_finite() || !(0.0..=1.0).contains(&win_rate) {
            return Err(ConfigError::WinRate(win_rate));
        }
        if !win_roi.is_finite() || win_roi < 0.0 {
            return Err(ConfigError::WinRoi(win_roi));
        }
        if !loss_fraction.is_finite() || !(0.0..=1.0).contains(&loss_fraction) {
            return Err(ConfigError::LossFraction(loss_fraction));
        }
        if !risk_fraction.is_finite() || !(0.0..=1.0).contains(&risk_fraction) {
            return Err(ConfigError::RiskFraction(risk_fraction));
        }
        Ok(Self {
            initial_portfolio,
            win_rate,
            win_roi,
            loss_fraction,
            risk_fraction,
            num_trades,
        })
    }

    /// Starting portfolio value.
    #[inline]
    pub fn initial_portfolio(&self) -> f64 {
        self.initial_portfolio
    }

    /// Probability of the win branch.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        self.win_rate
    }

    /// Payoff multiplier applied to the risked amount on wins.
    #[inline]
    pub fn win_roi(&self) -> f64 {
        self.win_roi
    }

    /// Fraction of the risked amount lost on losing trades.
    #[inline]
    pub fn loss_fraction(&self) -> f64 {
        self.loss_fraction
    }

    /// Fraction of the current portfolio value risked per trade.
    #[inline]
    pub fn risk_fraction(&self) -> f64 {
        self.risk_fraction
    }

    /// Upper bound on simulated trades.
    #[inline]
    pub fn num_trades(&self) -> usize {
        self.num_trades
    }
}

impl Default for SimulationConfig {
    /// A moderately-sized book: $10k start, coin-flip trades paying 2:1 on
    /// the 1% risked per trade, over 1000 trades.
    fn default() -> Self {
        Self {
            initial_portfolio: 10_000.0,
            win_rate: 0.5,
            win_roi: 2.0,
            loss_fraction: 0.5,
            risk_fraction: 0.01,
            num_trades: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_config() {
        let config = SimulationConfig::new(1_000.0, 0.3, 3.0, 0.7, 0.05, 200).unwrap();
        assert_eq!(config.win_rate(), 0.3);
        assert_eq!(config.win_roi(), 3.0);
        assert_eq!(config.loss_fraction(), 0.7);
        assert_eq!(config.risk_fraction(), 0.05);
    }

    #[test]
    fn accepts_boundary_values() {
        // Probabilities and fractions may sit exactly on 0 or 1.
        assert!(SimulationConfig::new(1.0, 0.0, 0.0, 0.0, 0.0, 0).is_ok());
        assert!(SimulationConfig::new(1.0, 1.0, 5.0, 1.0, 1.0, 10).is_ok());
    }

    #[test]
    fn rejects_nonpositive_portfolio() {
        assert_eq!(
            SimulationConfig::new(0.0, 0.5, 2.0, 0.5, 0.01, 100),
            Err(ConfigError::InitialPortfolio(0.0))
        );
        assert_eq!(
            SimulationConfig::new(-10.0, 0.5, 2.0, 0.5, 0.01, 100),
            Err(ConfigError::InitialPortfolio(-10.0))
        );
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        assert_eq!(
            SimulationConfig::new(1.0, 1.1, 2.0, 0.5, 0.01, 100),
            Err(ConfigError::WinRate(1.1))
        );
        assert_eq!(
            SimulationConfig::new(1.0, -0.1, 2.0, 0.5, 0.01, 100),
            Err(ConfigError::WinRate(-0.1))
        );
        assert_eq!(
            SimulationConfig::new(1.0, 0.5, 2.0, 1.5, 0.01, 100),
            Err(ConfigError::LossFraction(1.5))
        );
        assert_eq!(
            SimulationConfig::new(1.0, 0.5, 2.0, 0.5, 2.0, 100),
            Err(ConfigError::RiskFraction(2.0))
        );
    }

    #[test]
    fn rejects_negative_payoff() {
        assert_eq!(
            SimulationConfig::new(1.0, 0.5, -1.0, 0.5, 0.01, 100),
            Err(ConfigError::WinRoi(-1.0))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(SimulationConfig::new(f64::NAN, 0.5, 2.0, 0.5, 0.01, 100).is_err());
        assert!(SimulationConfig::new(f64::INFINITY, 0.5, 2.0, 0.5, 0.01, 100).is_err());
        assert!(SimulationConfig::new(1.0, f64::NAN, 2.0, 0.5, 0.01, 100).is_err());
        assert!(SimulationConfig::new(1.0, 0.5, f64::INFINITY, 0.5, 0.01, 100).is_err());
        assert!(SimulationConfig::new(1.0, 0.5, 2.0, f64::NAN, 0.01, 100).is_err());
        assert!(SimulationConfig::new(1.0, 0.5, 2.0, 0.5, f64::NAN, 100).is_err());
    }

    #[test]
    fn default_is_valid() {
        let d = SimulationConfig::default();
        let rebuilt = SimulationConfig::new(
            d.initial_portfolio(),
            d.win_rate(),
            d.win_roi(),
            d.loss_fraction(),
            d.risk_fraction(),
            d.num_trades(),
        );
        assert_eq!(rebuilt, Ok(d));
    }
}
