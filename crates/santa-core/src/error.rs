//! Error types for roster construction and assignment draws

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SantaError {
    #[error("Participant names cannot be empty")]
    EmptyName,

    #[error("{name} cannot be their own partner")]
    SelfPartner { name: String },

    #[error("No participants were entered")]
    EmptyRoster,

    #[error("Invalid format for assignment: {line:?} (expected 'Giver > Receiver')")]
    MalformedPreAssignment { line: String },

    #[error("Invalid pre-assignment: {reason}")]
    InvalidPreAssignment { reason: String },

    #[error("Assignment is not possible: {participant} has nobody left to give to")]
    Infeasible { participant: String },

    #[error("No assignment satisfies the partner and pre-assignment constraints")]
    Unsatisfiable,

    #[error("Gave up after {attempts} attempts without a valid assignment")]
    RetriesExhausted { attempts: usize },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SantaResult<T> = Result<T, SantaError>;
