// SPDX-License-Identifier: MIT

//! Checks that gate scripted commands in a CodeCarnage match.
//!
//! A [`Check`](interpreter::condition::Check) compares two live quantities
//! (player health, distance to the opponent) read from a
//! [`GameSnapshot`](interpreter::snapshot::GameSnapshot). A command may fire only
//! when all of its checks hold.

pub mod error;
pub mod interpreter;
