//! Modelo de ServiceJob y su máquina de estados
//!
//! Un job es la unidad de trabajo y asignación de un pedido. Su ciclo de vida:
//!
//! ```text
//! Unassigned -> Assigned -> In_Progress -> Completed
//!      \            \            \
//!       +------------+------------+--> Cancelled
//! ```
//!
//! Las reglas de transición viven aquí como funciones puras; los repositorios
//! las aplican dentro de la transacción que bloquea la fila del job.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;

use crate::models::service_request::RequestStatus;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_money_amount;

/// Estado del job - mapea al ENUM job_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "job_status")]
pub enum JobStatus {
    Unassigned,
    Assigned,
    #[sqlx(rename = "In_Progress")]
    #[serde(rename = "In_Progress")]
    InProgress,
    Completed,
    Cancelled,
}

/// Resultado de validar una transición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Mismo estado: no se toca nada
    Unchanged,
    Advance,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Unassigned => "Unassigned",
            JobStatus::Assigned => "Assigned",
            JobStatus::InProgress => "In_Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Cancelled)
    }

    /// Asignar (o reasignar) solo antes de empezar el trabajo
    pub fn accepts_assignment(&self) -> bool {
        matches!(self, JobStatus::Unassigned | JobStatus::Assigned)
    }

    fn successor(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Unassigned => Some(JobStatus::Assigned),
            JobStatus::Assigned => Some(JobStatus::InProgress),
            JobStatus::InProgress => Some(JobStatus::Completed),
            JobStatus::Completed | JobStatus::Cancelled => None,
        }
    }

    /// Valida el paso `self -> next`. Solo se permite el siguiente estado o
    /// `Cancelled` desde cualquier estado no terminal; repetir el estado actual
    /// es un no-op.
    pub fn transition_to(&self, next: JobStatus) -> AppResult<Transition> {
        if *self == next {
            return Ok(Transition::Unchanged);
        }

        let allowed = if self.is_terminal() {
            false
        } else {
            next == JobStatus::Cancelled || self.successor() == Some(next)
        };

        if allowed {
            Ok(Transition::Advance)
        } else {
            Err(AppError::InvalidTransition(format!(
                "cannot move job from {} to {}",
                self.as_str(),
                next.as_str()
            )))
        }
    }

    /// Estado que hereda el pedido dueño cuando el job entra en `self`
    pub fn propagated_request_status(&self) -> Option<RequestStatus> {
        match self {
            JobStatus::InProgress => Some(RequestStatus::InProgress),
            JobStatus::Completed => Some(RequestStatus::Completed),
            _ => None,
        }
    }
}

/// ServiceJob - mapea a la tabla service_jobs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceJob {
    pub job_id: i32,
    pub request_id: i32,
    pub assigned_employee_id: Option<i32>,
    pub job_status: JobStatus,
    pub labor_charge: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Request para abrir un job sobre un pedido
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(range(min = 1))]
    pub request_id: i32,
}

/// Request para asignar un empleado
#[derive(Debug, Deserialize, Validate)]
pub struct AssignJobRequest {
    #[validate(range(min = 1))]
    pub employee_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: JobStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLaborChargeRequest {
    #[validate(custom = "validate_money_amount")]
    pub labor_charge: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [JobStatus; 5] = [
        JobStatus::Unassigned,
        JobStatus::Assigned,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    #[test]
    fn test_forward_steps_are_allowed() {
        assert_eq!(
            JobStatus::Unassigned.transition_to(JobStatus::Assigned).unwrap(),
            Transition::Advance
        );
        assert_eq!(
            JobStatus::Assigned.transition_to(JobStatus::InProgress).unwrap(),
            Transition::Advance
        );
        assert_eq!(
            JobStatus::InProgress.transition_to(JobStatus::Completed).unwrap(),
            Transition::Advance
        );
    }

    #[test]
    fn test_skipping_states_is_rejected() {
        let err = JobStatus::Unassigned
            .transition_to(JobStatus::Completed)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
        assert!(JobStatus::Unassigned.transition_to(JobStatus::InProgress).is_err());
        assert!(JobStatus::Assigned.transition_to(JobStatus::Completed).is_err());
    }

    #[test]
    fn test_backward_moves_are_rejected() {
        assert!(JobStatus::InProgress.transition_to(JobStatus::Assigned).is_err());
        assert!(JobStatus::Assigned.transition_to(JobStatus::Unassigned).is_err());
        for next in ALL {
            if next != JobStatus::Completed {
                assert!(JobStatus::Completed.transition_to(next).is_err(), "{:?}", next);
            }
        }
    }

    #[test]
    fn test_cancel_from_any_open_state() {
        for from in [JobStatus::Unassigned, JobStatus::Assigned, JobStatus::InProgress] {
            assert_eq!(
                from.transition_to(JobStatus::Cancelled).unwrap(),
                Transition::Advance
            );
        }
        assert!(JobStatus::Cancelled.transition_to(JobStatus::Assigned).is_err());
    }

    #[test]
    fn test_same_status_is_a_no_op() {
        for status in ALL {
            assert_eq!(status.transition_to(status).unwrap(), Transition::Unchanged);
        }
    }

    #[test]
    fn test_assignment_window() {
        assert!(JobStatus::Unassigned.accepts_assignment());
        assert!(JobStatus::Assigned.accepts_assignment());
        assert!(!JobStatus::InProgress.accepts_assignment());
        assert!(!JobStatus::Completed.accepts_assignment());
        assert!(!JobStatus::Cancelled.accepts_assignment());
    }

    #[test]
    fn test_request_status_propagation() {
        assert_eq!(
            JobStatus::Completed.propagated_request_status(),
            Some(RequestStatus::Completed)
        );
        assert_eq!(
            JobStatus::InProgress.propagated_request_status(),
            Some(RequestStatus::InProgress)
        );
        assert_eq!(JobStatus::Cancelled.propagated_request_status(), None);
        assert_eq!(JobStatus::Assigned.propagated_request_status(), None);
    }

    #[test]
    fn test_labor_charge_must_not_be_negative() {
        let request = UpdateLaborChargeRequest { labor_charge: Decimal::new(-500, 2) };
        assert!(request.validate().is_err());

        let request = UpdateLaborChargeRequest { labor_charge: Decimal::from(100) };
        assert!(request.validate().is_ok());
    }
}
