// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Comunidade Local Ativa: discover local businesses, earn points, level up.
//!
//! This crate provides the progression core (points, levels, badges), the
//! capped activity ledger, the local session store and the distance helpers
//! used to list nearby businesses.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
