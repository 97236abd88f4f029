// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match resolution: where the query meets the page.
//!
//! The tier sequence trades precision for recall one step at a time, so a
//! snippet always shows the strictest kind of match the page has to offer.

pub mod paragraph;
pub mod tiered;
pub mod utils;

pub use tiered::{Resolution, TierMatcher, TierResult};
