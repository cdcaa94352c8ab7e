//! # IO Layer
//!
//! Interfaces that expose backend functionality to the outside world.

pub mod rest;
