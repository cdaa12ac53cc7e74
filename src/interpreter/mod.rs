// SPDX-License-Identifier: MIT

pub mod command;
pub mod condition;
pub mod loader;
pub mod script;
pub mod snapshot;
pub mod types;
