//! CUIT Lookup Gateway Library
//!
//! This library provides a single lookup endpoint for Argentine tax identifiers
//! (CUIT), backed by the AFIP public registry or the TusFacturasAPP commercial
//! API, and normalizes both providers' answers into one response shape.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core business logic.
//! - `integrations`: External service integrations.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `lookup`: Lookup orchestration.
//! - `models`: Request and response models.
//! - `normalize`: Provider payload mapping.
//! - `openapi`: OpenAPI document and Swagger UI.
//! - `routes`: Router assembly.
//! - `services`: External service clients (AFIP, TusFacturasAPP).
//! - `validation`: CUIT validation.

pub mod api;
pub mod core;
pub mod integrations;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod validation;
