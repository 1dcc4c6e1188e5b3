//! Surcharge Engine for shift hour classification
//!
//! This crate splits a worked shift into ordinary and overtime hours, and then
//! classifies those hours into day, night and holiday surcharge categories
//! (HED, HEN, HEFD, HEFN, RN, RD) using exact decimal arithmetic.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
