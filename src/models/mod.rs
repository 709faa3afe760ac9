//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL de `migrations/`, los requests validados y las reglas
//! de dominio puras (máquina de estados, stock, importes, ranking).

pub mod auth;
pub mod billing;
pub mod customer;
pub mod dashboard;
pub mod employee;
pub mod inventory;
pub mod job_part;
pub mod service_job;
pub mod service_request;
pub mod vehicle;
