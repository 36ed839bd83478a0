//! Billing domain: entities, request/response projections, field validation.

mod requests;
mod responses;
mod types;
pub mod validation;

pub use requests::{ClientRequest, InvoiceRequest};
pub use responses::{ClientSummary, InvoiceSummary};
pub use types::{Client, Invoice};
pub use validation::FieldError;
