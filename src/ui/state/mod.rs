// SPDX-License-Identifier: MPL-2.0
//! UI state value types
//!
//! Range-checked settings shared by the viewer and the app configuration.

pub mod min_scale;
pub mod stall_timeout;

pub use min_scale::MinScale;
pub use stall_timeout::StallTimeout;
