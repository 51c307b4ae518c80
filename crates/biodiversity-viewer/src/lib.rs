//! Desktop viewer for the USTP campus biodiversity catalogue.
//!
//! This crate provides a Dioxus desktop application with a home page of
//! campuses and a map page that plots where species were observed. View
//! logic lives in `biodiversity-map`; this crate owns app state, data
//! loading and rendering.

pub mod components;
pub mod config;
pub mod demo;
pub mod loader;
pub mod state;
