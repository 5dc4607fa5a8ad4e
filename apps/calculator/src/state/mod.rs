//! # State Module
//!
//! Manages the calculator's application state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────┬──────────────────────┐           │
//! │          ▼                          ▼                                   │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │   CalculatorState        │  │   ConfigState            │            │
//! │  │                          │  │                          │            │
//! │  │  Arc<Mutex<              │  │  currency symbol         │            │
//! │  │    CalculatorSession     │  │  whole-unit display      │            │
//! │  │  >>                      │  │  slider defaults         │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorState: Protected by Arc<Mutex<T>> for exclusive access    │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::{CalculatorSession, CalculatorState};
pub use config::ConfigState;
