// SPDX-License-Identifier: MPL-2.0
//! Shared presentation constants.

pub mod design_tokens;
