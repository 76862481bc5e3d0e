//! k8s-release-dev - Development CLI for Kubernetes release resolution and
//! image publishing

pub mod checksum;
pub mod config;
pub mod publish;
pub mod release;
pub mod utils;
