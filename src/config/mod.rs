// ABOUTME: Configuration management for the Sous Chef server
// ABOUTME: Environment-driven settings for ports, database, and cache sizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
