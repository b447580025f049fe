//! HTTP handlers for the Sessions domain

pub mod admin;
pub mod auth;
