// ABOUTME: Business logic services over the read-only recipe catalog
// ABOUTME: Plan assembly and shopping list aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Core services
//!
//! Data flows one direction: catalog query → plan assembly → shopping
//! list aggregation. Both services are pure functions of their inputs
//! plus the read-only catalog.

/// Multi-day meal plan assembly
pub mod planner;

/// Shopping list derivation from an assembled plan
pub mod shopping_list;
