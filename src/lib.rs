//! Core library for the `wafprobe` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, configuration overlay, the fingerprint and pacing
//! policies, the worker pool that drives request traffic, and the stats
//! aggregation that feeds progress and final reports. The primary
//! user-facing interface is the `wafprobe` command-line application;
//! library APIs may evolve as the CLI grows.
//!
//! `wafprobe` is intended for testing infrastructure you own or are
//! explicitly authorized to test.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod fingerprint;
pub mod gate;
pub mod http;
pub mod logger;
pub mod pacing;
pub mod report;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod stats;
pub mod target;
