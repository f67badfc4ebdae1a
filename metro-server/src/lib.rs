//! Metro route planner server.
//!
//! Builds a graph of metro stations from line data and answers: "what is
//! the cheapest way from this station to that one?", where riding a stop
//! is cheap and changing lines is not.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod source;
pub mod stations;
pub mod upstream;
pub mod web;
