// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Framework-free cropping logic.

pub mod crop;
pub mod selector;
pub mod sequence;
pub mod session;

pub use crop::{CropError, CropRegion};
pub use selector::{Direction, Selector};
pub use session::{CropSession, SessionError};
