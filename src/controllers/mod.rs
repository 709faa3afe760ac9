pub mod auth_controller;
pub mod billing_controller;
pub mod customer_controller;
pub mod dashboard_controller;
pub mod employee_controller;
pub mod inventory_controller;
pub mod job_part_controller;
pub mod service_job_controller;
pub mod service_request_controller;
pub mod vehicle_controller;
