//! The seam between the generic service and a concrete entity kind.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::billing::{
    Client, ClientRequest, ClientSummary, FieldError, Invoice, InvoiceRequest, InvoiceSummary,
};

/// Binds an entity kind to its request/response projections and its cache
/// namespace, so one [`EntityService`](super::EntityService) implementation
/// covers every kind.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Mutation payload accepted by create and update.
    type Request: Send + 'static;
    /// External representation stored in the cache and returned to callers.
    type Response: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Singular name used in messages ("Client not found with id: 7").
    const NAME: &'static str;
    /// Plural name used in messages and the cache refresh report.
    const PLURAL: &'static str;
    /// Cache key namespace for this entity kind.
    const CACHE_PREFIX: &'static str;

    /// The entity's surrogate key.
    fn id(&self) -> i64;

    /// The surrogate key carried by the external representation.
    fn response_id(response: &Self::Response) -> i64;

    /// Field-level request validation, failing at the first violation.
    fn validate(request: &Self::Request) -> Result<(), FieldError>;

    /// A not-yet-persisted entity built from the request.
    fn from_request(request: Self::Request) -> Self;

    /// Overwrites the mutable fields of an existing entity with the request.
    fn apply_request(&mut self, request: Self::Request);

    /// Projects the entity to its external representation.
    fn to_response(&self) -> Self::Response;
}

impl Entity for Client {
    type Request = ClientRequest;
    type Response = ClientSummary;

    const NAME: &'static str = "Client";
    const PLURAL: &'static str = "Clients";
    const CACHE_PREFIX: &'static str = "client";

    fn id(&self) -> i64 {
        self.id
    }

    fn response_id(response: &ClientSummary) -> i64 {
        response.id
    }

    fn validate(request: &ClientRequest) -> Result<(), FieldError> {
        request.validate()
    }

    fn from_request(request: ClientRequest) -> Self {
        request.into_client()
    }

    fn apply_request(&mut self, request: ClientRequest) {
        request.apply_to(self);
    }

    fn to_response(&self) -> ClientSummary {
        ClientSummary::from(self)
    }
}

impl Entity for Invoice {
    type Request = InvoiceRequest;
    type Response = InvoiceSummary;

    const NAME: &'static str = "Invoice";
    const PLURAL: &'static str = "Invoices";
    const CACHE_PREFIX: &'static str = "invoice";

    fn id(&self) -> i64 {
        self.id
    }

    fn response_id(response: &InvoiceSummary) -> i64 {
        response.id
    }

    fn validate(request: &InvoiceRequest) -> Result<(), FieldError> {
        request.validate()
    }

    fn from_request(request: InvoiceRequest) -> Self {
        request.into_invoice()
    }

    fn apply_request(&mut self, request: InvoiceRequest) {
        request.apply_to(self);
    }

    fn to_response(&self) -> InvoiceSummary {
        InvoiceSummary::from(self)
    }
}
