use rayon::prelude::*;
use tracing::debug;

use crate::config::PricingConfig;
use crate::error::Result;
use crate::schema::Schema;

use super::quote_schema::{QuoteSchema, SchemaQuote};

/// Quotes many independent schemas in parallel.
///
/// Results come back in input order, one per schema. A failing schema only
/// affects its own entry.
pub struct QuoteBatch<'a> {
    schemas: &'a [(String, Schema)],
    config: &'a PricingConfig,
}

impl<'a> QuoteBatch<'a> {
    /// Creates a new `QuoteBatch` operation over `(name, schema)` pairs.
    #[must_use]
    pub fn new(schemas: &'a [(String, Schema)], config: &'a PricingConfig) -> Self {
        Self { schemas, config }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Config` if the pricing config is invalid; no
    /// schema is quoted in that case. Per-schema failures are returned in
    /// place of that schema's quote.
    pub fn execute(&self) -> Result<Vec<Result<SchemaQuote>>> {
        self.config.validate()?;
        let quotes: Vec<Result<SchemaQuote>> = self
            .schemas
            .par_iter()
            .map(|(name, schema)| QuoteSchema::new(name, schema, self.config).execute())
            .collect();

        debug!(
            schemas = quotes.len(),
            failed = quotes.iter().filter(|q| q.is_err()).count(),
            "quoted batch"
        );
        Ok(quotes)
    }
}
