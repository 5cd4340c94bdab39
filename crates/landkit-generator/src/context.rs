//! Per-render environment: wall-clock date, diagnostics flag, form transport.

use std::{fmt, sync::Arc};

use chrono::{Datelike, NaiveDate, Utc};
use thiserror::Error;

/// Acknowledgment shown when no form transport is wired.
pub const DEMO_FORM_NOTICE: &str = "Demo form. Next step: connect to email/CRM.";

/// Form transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("form transport failed: {0}")]
    Failed(String),
}

/// Values collected from a contact form on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Destination for contact form submissions (email relay, CRM, ...).
pub trait FormTransport: fmt::Debug + Send + Sync {
    /// Deliver a submission, returning the acknowledgment shown to the visitor.
    fn submit(&self, submission: &ContactSubmission) -> Result<String, TransportError>;
}

/// Transport used until a real backend is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransport;

impl FormTransport for NoTransport {
    fn submit(&self, submission: &ContactSubmission) -> Result<String, TransportError> {
        tracing::debug!(
            message_len = submission.message.len(),
            "contact form submitted without a transport"
        );
        Ok(DEMO_FORM_NOTICE.to_string())
    }
}

/// Environment shared by every renderer during one page render.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Date used for `{year}` and `{date}` placeholders.
    pub today: NaiveDate,
    /// Verbose diagnostics. Never changes rendered output.
    pub dev: bool,
    pub transport: Arc<dyn FormTransport>,
}

impl RenderContext {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            dev: false,
            transport: Arc::new(NoTransport),
        }
    }

    /// Context dated at the current UTC day.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now().date_naive())
    }

    #[must_use]
    pub fn with_dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn FormTransport>) -> Self {
        self.transport = transport;
        self
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.today.year()
    }

    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn iso_date(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }

    /// Replace every `{year}` and `{date}` in `template`.
    #[must_use]
    pub fn fill_date_placeholders(&self, template: &str) -> String {
        template
            .replace("{year}", &self.year().to_string())
            .replace("{date}", &self.iso_date())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::now()
    }
}

/// Context pinned to 2024-03-07 for deterministic tests.
#[cfg(test)]
pub(crate) fn fixed_context() -> RenderContext {
    RenderContext::new(NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date"))
}
