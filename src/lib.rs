//! rhc-context: Command-Context Resolution
//!
//! Works out which OpenShift domain, application or team a command targets from explicit
//! options, local git metadata and broker lookups.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod git;
pub mod logging;
pub mod options;
pub mod rest;
pub mod schema;
pub mod server;
