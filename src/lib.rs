//! storectl: command-line client for the Fake Store product catalog API
//!
//! Layers (inner to outer):
//! - `domain`: product shapes and typed command parsing
//! - `application`: JSON request helper and catalog service
//! - `infrastructure`: HTTP transport and service wiring
//! - `cli`: argument definitions, dispatch, terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
