//! Delivery boundary for accepted submissions.
//!
//! The page never performs real network IO; delivery goes through the
//! [`Transport`] trait so the form controller can be exercised against a
//! failing implementation in tests. [`SimulatedTransport`] stands in for the
//! external collaborator a full system would call.

use thiserror::Error;

/// A validated, sanitized submission attempt.
///
/// Created on submit, handed to the transport once the simulated delay
/// elapses, then dropped. Nothing is retained across attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub question: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

pub trait Transport {
    fn deliver(&mut self, lead: &Lead) -> Result<(), TransportError>;
}

/// Always-successful stand-in for the real delivery channel.
#[derive(Debug, Default)]
pub struct SimulatedTransport;

impl Transport for SimulatedTransport {
    fn deliver(&mut self, _lead: &Lead) -> Result<(), TransportError> {
        Ok(())
    }
}
