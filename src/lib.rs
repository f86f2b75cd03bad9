//! # ruinbook
//!
//! A deterministic risk-of-ruin simulator for leveraged trade sequences.
//!
//! Each trade risks a fixed fraction of the *current* portfolio value, wins
//! with a fixed probability, and pays (or forfeits) a fixed multiple of the
//! risked amount. The simulation walks one path of portfolio value and stops
//! the moment the value reaches zero or below — ruin is an absorbing state.
//!
//! ## Quick Start
//!
//! ```
//! use ruinbook::{simulate, SeededRng, SimulationConfig};
//!
//! // $1000 book, 30% win rate, 3:1 payoff, 70% loss on the 5% risked per trade.
//! let config = SimulationConfig::new(1_000.0, 0.3, 3.0, 0.7, 0.05, 200).unwrap();
//!
//! let result = simulate(&config, &mut SeededRng::seed(42));
//!
//! assert_eq!(result.trajectory[0], 1_000.0);
//! assert!(result.trajectory.len() <= 201);
//! if result.ruined {
//!     assert!(result.final_value() <= 0.0);
//! }
//! ```
//!
//! ## Reproducibility
//!
//! Randomness is injected, never global. A [`SeededRng`] replays the same
//! stream for the same seed on every platform, and [`ScriptedDraws`] hands
//! the loop an explicit draw sequence:
//!
//! ```
//! use ruinbook::{simulate, ScriptedDraws, SimulationConfig};
//!
//! let config = SimulationConfig::new(100.0, 0.5, 1.0, 1.0, 0.5, 3).unwrap();
//! let mut draws = ScriptedDraws::new(vec![0.2, 0.9, 0.5]);
//!
//! // 0.2 wins (u < 0.5); 0.9 and 0.5 lose — the win interval is [0, win_rate).
//! let result = simulate(&config, &mut draws);
//! assert_eq!(result.trajectory, vec![100.0, 150.0, 75.0, 37.5]);
//! assert_eq!(draws.consumed(), 3);
//! ```
//!
//! ## Configuration
//!
//! | Parameter | Meaning | Domain |
//! |-----------|---------|--------|
//! | `initial_portfolio` | starting value | `> 0`, finite |
//! | `win_rate` | probability of a winning trade | `[0, 1]` |
//! | `win_roi` | payoff multiple of the risked amount on wins | `>= 0` |
//! | `loss_fraction` | share of the risked amount lost on losses | `[0, 1]` |
//! | `risk_fraction` | share of the current portfolio risked per trade | `[0, 1]` |
//! | `num_trades` | upper bound on simulated trades | any `usize` |
//!
//! Out-of-range values are rejected at construction with a [`ConfigError`]:
//!
//! ```
//! use ruinbook::{ConfigError, SimulationConfig};
//!
//! let err = SimulationConfig::new(1_000.0, 1.5, 3.0, 0.7, 0.05, 200);
//! assert_eq!(err, Err(ConfigError::WinRate(1.5)));
//! ```
//!
//! ## Reporting
//!
//! The [`report`] module renders a finished run as a text chart with a ruin
//! threshold line, plus a one-line verdict. Presentation is strictly
//! downstream of the simulation and never feeds back into it.

mod config;
mod error;
pub mod report;
mod rng;
mod simulate;

// Re-export public API
pub use config::SimulationConfig;
pub use error::ConfigError;
pub use rng::{RandomSource, ScriptedDraws, SeededRng};
pub use simulate::{SimulationResult, simulate};
