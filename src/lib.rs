//! Merma API Library
//!
//! Backend slice of the retail shrinkage (merma) tracking application:
//! the users listing endpoint, and the data access layer for shrinkage
//! headers, their detail lines, shrinkage reasons and the product catalog.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
