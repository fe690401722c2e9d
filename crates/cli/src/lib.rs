//! Plumbing shared by the Kibana Pod command-line binaries.

pub mod config;
