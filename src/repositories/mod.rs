//! Repositorios
//!
//! Acceso a PostgreSQL. Las operaciones que tocan stock, repuestos de un job
//! o facturas corren en una sola transacción con la fila del job bloqueada.

pub mod billing_repository;
pub mod customer_repository;
pub mod dashboard_repository;
pub mod employee_repository;
pub mod inventory_repository;
pub mod job_part_repository;
pub mod service_job_repository;
pub mod service_request_repository;
pub mod vehicle_repository;
