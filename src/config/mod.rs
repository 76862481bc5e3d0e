//! Configuration for k8s-release-dev

pub mod settings;

pub use settings::Settings;
