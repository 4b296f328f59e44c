#![cfg_attr(not(test), no_std)]

//! Ring light firmware core: network ingress and render wiring around
//! [`ringlight_composer`].

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
