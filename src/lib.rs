//! AutoIMS backend
//!
//! Ciclo de vida de los trabajos de taller, inventario de repuestos y
//! facturación sobre PostgreSQL, expuesto como API REST con axum.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
