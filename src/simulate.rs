//! The trade-simulation loop.

use std::fmt;

use crate::config::SimulationConfig;
use crate::rng::RandomSource;

/// Outcome of one simulated trade sequence.
///
/// The trajectory always starts at the configured initial portfolio value and
/// gains one entry per executed trade. A ruined run stops at the first entry
/// `<= 0`, so a non-positive value can only ever be the final entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Portfolio value over time; entry 0 is the starting value.
    pub trajectory: Vec<f64>,
    /// True if the portfolio fell to zero or below.
    pub ruined: bool,
}

impl SimulationResult {
    /// Portfolio value after the last executed trade.
    pub fn final_value(&self) -> f64 {
        self.trajectory.last().copied().unwrap_or(0.0)
    }

    /// Number of trades actually executed (may be fewer than configured on ruin).
    pub fn trades_executed(&self) -> usize {
        self.trajectory.len().saturating_sub(1)
    }

    /// Returns true if the run completed without ruin.
    pub fn survived(&self) -> bool {
        !self.ruined
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Result")?;
        writeln!(
            f,
            "  Start value:     {:>12.2}",
            self.trajectory.first().copied().unwrap_or(0.0)
        )?;
        writeln!(f, "  Final value:     {:>12.2}", self.final_value())?;
        writeln!(f, "  Trades executed: {:>12}", self.trades_executed())?;
        write!(
            f,
            "  Outcome:         {:>12}",
            if self.ruined { "ruined" } else { "survived" }
        )
    }
}

/// Run the stochastic recurrence for up to `num_trades` steps.
///
/// Each step risks `risk_fraction` of the current (not initial) portfolio
/// value, draws one uniform `u` from `rng`, and branches on `u < win_rate`:
/// strictly less, so `[0, win_rate)` wins and `[win_rate, 1)` loses. Wins add
/// `risked * win_roi`; losses subtract `risked * loss_fraction`. The loop
/// stops the moment a value reaches zero or below — ruin is an absorbing
/// state, never simulated past.
///
/// Exactly one draw is consumed per executed trade, in step order, and
/// nothing else touches external state: the same config and draw sequence
/// always produce the same trajectory.
///
/// # Example
///
/// ```
/// use ruinbook::{simulate, SeededRng, SimulationConfig};
///
/// let config = SimulationConfig::new(1_000.0, 0.3, 3.0, 0.7, 0.05, 200)?;
/// let result = simulate(&config, &mut SeededRng::seed(42));
///
/// assert_eq!(result.trajectory[0], 1_000.0);
/// assert!(result.trajectory.len() <= 201);
/// # Ok::<(), ruinbook::ConfigError>(())
/// ```
pub fn simulate<R: RandomSource>(config: &SimulationConfig, rng: &mut R) -> SimulationResult {
    let mut current = config.initial_portfolio();
    let mut trajectory = Vec::with_capacity(config.num_trades() + 1);
    trajectory.push(current);

    for _ in 0..config.num_trades() {
        let risked = current * config.risk_fraction();
        let u = rng.next_uniform();

        current = if u < config.win_rate() {
            current + risked * config.win_roi()
        } else {
            current - risked * config.loss_fraction()
        };
        trajectory.push(current);

        if current <= 0.0 {
            return SimulationResult {
                trajectory,
                ruined: true,
            };
        }
    }

    SimulationResult {
        trajectory,
        ruined: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedDraws;

    // Fractions chosen as exact binary values so trajectory comparisons are exact.
    fn config(win_rate: f64, num_trades: usize) -> SimulationConfig {
        SimulationConfig::new(100.0, win_rate, 1.0, 1.0, 0.5, num_trades).unwrap()
    }

    #[test]
    fn win_branch_adds_payoff_on_risked_amount() {
        // risked = 100 * 0.5 = 50, win pays 50 * 1.0
        let mut draws = ScriptedDraws::new(vec![0.2]);
        let result = simulate(&config(0.5, 1), &mut draws);
        assert_eq!(result.trajectory, vec![100.0, 150.0]);
        assert!(!result.ruined);
    }

    #[test]
    fn loss_branch_subtracts_fraction_of_risked_amount() {
        // risked = 50, loss forfeits 50 * 1.0
        let mut draws = ScriptedDraws::new(vec![0.9]);
        let result = simulate(&config(0.5, 1), &mut draws);
        assert_eq!(result.trajectory, vec![100.0, 50.0]);
        assert!(!result.ruined);
    }

    #[test]
    fn draw_equal_to_win_rate_is_a_loss() {
        // The win interval is [0, win_rate): the boundary draw loses.
        let mut draws = ScriptedDraws::new(vec![0.5]);
        let result = simulate(&config(0.5, 1), &mut draws);
        assert_eq!(result.trajectory, vec![100.0, 50.0]);
    }

    #[test]
    fn risk_compounds_on_current_value() {
        // Two wins: 100 -> 150 -> 225. The second trade risks 75, not 50.
        let mut draws = ScriptedDraws::new(vec![0.0, 0.0]);
        let result = simulate(&config(0.5, 2), &mut draws);
        assert_eq!(result.trajectory, vec![100.0, 150.0, 225.0]);
    }

    #[test]
    fn stops_immediately_on_ruin() {
        // Full risk, full loss: first losing trade zeroes the book. The
        // remaining scripted draws must never be consumed.
        let cfg = SimulationConfig::new(100.0, 0.5, 1.0, 1.0, 1.0, 10).unwrap();
        let mut draws = ScriptedDraws::new(vec![0.9, 0.0, 0.0]);
        let result = simulate(&cfg, &mut draws);

        assert!(result.ruined);
        assert_eq!(result.trajectory, vec![100.0, 0.0]);
        assert_eq!(draws.consumed(), 1);
    }

    #[test]
    fn ruin_on_final_trade_still_counts() {
        let cfg = SimulationConfig::new(100.0, 0.5, 1.0, 1.0, 1.0, 2).unwrap();
        let mut draws = ScriptedDraws::new(vec![0.0, 0.9]);
        let result = simulate(&cfg, &mut draws);

        assert!(result.ruined);
        assert_eq!(result.trajectory, vec![100.0, 200.0, 0.0]);
        assert_eq!(result.trades_executed(), cfg.num_trades());
    }

    #[test]
    fn zero_trades_consumes_no_draws() {
        let cfg = SimulationConfig::new(100.0, 0.5, 1.0, 1.0, 0.5, 0).unwrap();
        let mut draws = ScriptedDraws::new(vec![]);
        let result = simulate(&cfg, &mut draws);

        assert_eq!(result.trajectory, vec![100.0]);
        assert!(!result.ruined);
        assert_eq!(draws.consumed(), 0);
    }

    #[test]
    fn result_queries() {
        let cfg = SimulationConfig::new(100.0, 0.5, 1.0, 1.0, 0.5, 1).unwrap();
        let result = simulate(&cfg, &mut ScriptedDraws::new(vec![0.9]));

        assert_eq!(result.final_value(), 50.0);
        assert_eq!(result.trades_executed(), 1);
        assert!(result.survived());
    }

    #[test]
    fn display_format() {
        let cfg = SimulationConfig::new(100.0, 0.5, 1.0, 1.0, 0.5, 1).unwrap();
        let result = simulate(&cfg, &mut ScriptedDraws::new(vec![0.2]));
        let s = format!("{result}");
        assert!(s.contains("Start value:"));
        assert!(s.contains("Final value:"));
        assert!(s.contains("survived"));
    }
}
