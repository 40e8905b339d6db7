// ABOUTME: Main library entry point for the Sous Chef meal planning API
// ABOUTME: Wires catalog queries, plan assembly, and shopping list aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

#![deny(unsafe_code)]

//! # Sous Chef
//!
//! A meal planning service built on a relational recipe catalog. Given a
//! day count and optional filters (fridge ingredients, dietary tags, a
//! cultural tag), it assembles a multi-day meal plan with one recipe per
//! meal category per day, then derives the shopping list of ingredients
//! the user still needs.
//!
//! ## Architecture
//!
//! - **Database**: `SQLite`-backed recipe catalog (recipes, ingredients,
//!   tags, substitutions, ratings)
//! - **Services**: plan assembly and shopping list aggregation over the
//!   read-only catalog
//! - **Routes**: thin `axum` JSON boundary
//! - **Cache**: bounded store for generated export artifacts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use souschef::config::environment::ServerConfig;
//! use souschef::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Sous Chef configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Bounded cache for generated export artifacts
pub mod cache;

/// Configuration management
pub mod config;

/// Recipe catalog storage and queries
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models: recipes, meal plans, shopping lists
pub mod models;

/// HTTP routes for the JSON API
pub mod routes;

/// Plan assembly and shopping list aggregation
pub mod services;
