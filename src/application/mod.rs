/// Portfolio service client
pub mod client;
/// Application configuration module
pub mod config;
/// Demonstration sequence run by the binary
pub mod demo;
/// Request harness printing every call
pub mod harness;
/// Service interfaces
pub mod interfaces;
