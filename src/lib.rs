//! Pattern Sherpa - Automated Architecture Decision Support Engine
//!
//! Given a catalog of architecture patterns scored against quality attributes
//! and a set of requirements with natural-language applicability conditions,
//! this crate derives consistent operating concerns and selects exactly one
//! pattern per decision category to maximize weighted satisfaction of the
//! requested quality attributes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
