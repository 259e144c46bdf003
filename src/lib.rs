// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gauge;
pub mod insights;
pub mod lexicon;
pub mod models;
pub mod parser;
pub mod snapshot;
pub mod utils;

pub use gauge::{GaugeResult, Zone, compute_gauge};
pub use insights::{Insights, compute_insights};
pub use parser::parse_quick_add;
