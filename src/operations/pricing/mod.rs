mod quote_batch;
mod quote_curve;
mod quote_schema;

pub use quote_batch::QuoteBatch;
pub use quote_curve::{CurveQuote, QuoteCurve};
pub use quote_schema::{format_cost, round_cents, QuoteSchema, SchemaQuote};
