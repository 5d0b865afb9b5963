//! Wayfinder - Guided Decision Graph Engine
//!
//! This crate implements a guided decision tree: users answer a sequence of
//! branching questions, each answer leading to the next question or a terminal
//! recommendation. The graph is produced at build time from CMS content and
//! loaded as a JSON artifact at session start.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
