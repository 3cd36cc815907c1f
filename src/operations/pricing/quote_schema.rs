use serde::Serialize;
use tracing::{debug, info_span};

use crate::config::PricingConfig;
use crate::error::Result;
use crate::operations::creation::BuildTopology;
use crate::operations::query::FindCycles;
use crate::schema::Schema;

use super::quote_curve::{CurveQuote, QuoteCurve};

/// Rounds a dollar amount to cents, halves away from zero.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats a dollar amount as `$x.yz`.
#[must_use]
pub fn format_cost(amount: f64) -> String {
    format!("${:.2}", round_cents(amount))
}

/// The price of a whole schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaQuote {
    /// Name the schema was quoted under.
    pub name: String,
    /// One quote per closed curve, in discovery order.
    pub curves: Vec<CurveQuote>,
    /// Sum of the curve prices.
    pub total: f64,
    /// `total` rounded to cents.
    pub rounded_total: f64,
}

/// Prices every closed curve of a schema and sums them.
///
/// Curves are bounded and priced independently; edges that belong to no
/// closed curve are ignored.
pub struct QuoteSchema<'a> {
    name: &'a str,
    schema: &'a Schema,
    config: &'a PricingConfig,
}

impl<'a> QuoteSchema<'a> {
    /// Creates a new `QuoteSchema` operation.
    #[must_use]
    pub fn new(name: &'a str, schema: &'a Schema, config: &'a PricingConfig) -> Self {
        Self {
            name,
            schema,
            config,
        }
    }

    /// Executes the operation, returning the schema's quote.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Named` carrying the schema name around the
    /// underlying failure: an invalid config or schema, or a schema without
    /// any closed curve.
    pub fn execute(&self) -> Result<SchemaQuote> {
        let _span = info_span!("quote", schema = self.name).entered();
        self.quote().map_err(|e| e.named(self.name))
    }

    fn quote(&self) -> Result<SchemaQuote> {
        self.config.validate()?;
        self.schema.validate()?;
        let store = BuildTopology::new(self.schema).execute()?;
        let cycles = FindCycles::new().execute(&store)?;

        let curves = cycles
            .iter()
            .map(|cycle| QuoteCurve::new(cycle, self.config).execute(&store))
            .collect::<Result<Vec<_>>>()?;
        let total: f64 = curves.iter().map(|c| c.price).sum();

        debug!(curves = curves.len(), total, "quoted schema");
        Ok(SchemaQuote {
            name: self.name.to_owned(),
            curves,
            total,
            rounded_total: round_cents(total),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, QuoteError, SchemaError, TopologyError};
    use approx::assert_relative_eq;

    fn rectangle(schema: Schema, base: u64, x: f64, w: f64, h: f64) -> Schema {
        schema
            .with_vertex(base, x, 0.0)
            .with_vertex(base + 1, x + w, 0.0)
            .with_vertex(base + 2, x + w, h)
            .with_vertex(base + 3, x, h)
            .with_line(format!("r{base}a"), base, base + 1)
            .with_line(format!("r{base}b"), base + 1, base + 2)
            .with_line(format!("r{base}c"), base + 2, base + 3)
            .with_line(format!("r{base}d"), base + 3, base)
    }

    fn quote(schema: &Schema) -> Result<SchemaQuote> {
        QuoteSchema::new("test", schema, &PricingConfig::default()).execute()
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_relative_eq!(round_cents(8.1375), 8.14);
        assert_relative_eq!(round_cents(0.125), 0.13);
        assert_relative_eq!(round_cents(2.0), 2.0);
        assert_relative_eq!(round_cents(-0.125), -0.13);
    }

    #[test]
    fn costs_format_to_cents() {
        assert_eq!(format_cost(8.1375), "$8.14");
        assert_eq!(format_cost(3.0), "$3.00");
        assert_eq!(format_cost(0.004), "$0.00");
        assert_eq!(format_cost(1234.5), "$1234.50");
    }

    #[test]
    fn four_by_two_rectangle_quote() {
        let q = quote(&rectangle(Schema::new(), 1, 0.0, 4.0, 2.0)).unwrap();
        assert_eq!(q.name, "test");
        assert_eq!(q.curves.len(), 1);
        assert_relative_eq!(q.total, 8.1375, epsilon = 1e-12);
        assert_relative_eq!(q.rounded_total, 8.14);
    }

    #[test]
    fn dangling_edges_do_not_change_the_quote() {
        let base = rectangle(Schema::new(), 1, 0.0, 4.0, 2.0);
        let with_tail = base
            .clone()
            .with_vertex(50, -3.0, -3.0)
            .with_vertex(51, 9.0, 9.0)
            .with_line("tail", 50, 1)
            .with_line("spur", 3, 51);
        let plain = quote(&base).unwrap();
        let tailed = quote(&with_tail).unwrap();
        assert_relative_eq!(plain.total, tailed.total, epsilon = 1e-12);
    }

    #[test]
    fn disjoint_curves_sum() {
        let a = quote(&rectangle(Schema::new(), 1, 0.0, 4.0, 2.0)).unwrap();
        let b = quote(&rectangle(Schema::new(), 10, 10.0, 1.0, 3.0)).unwrap();
        let both = quote(&rectangle(
            rectangle(Schema::new(), 1, 0.0, 4.0, 2.0),
            10,
            10.0,
            1.0,
            3.0,
        ))
        .unwrap();
        assert_eq!(both.curves.len(), 2);
        assert_relative_eq!(both.total, a.total + b.total, epsilon = 1e-12);
    }

    #[test]
    fn no_cycle_means_no_price() {
        let schema = Schema::new()
            .with_vertex(1, 0.0, 0.0)
            .with_vertex(2, 1.0, 0.0)
            .with_line("e", 1, 2);
        let err = quote(&schema).unwrap_err();
        let QuoteError::Named { name, source } = err else {
            panic!("expected a named error");
        };
        assert_eq!(name, "test");
        assert!(matches!(
            *source,
            QuoteError::Topology(TopologyError::NoClosedCycle)
        ));
    }

    #[test]
    fn invalid_schema_is_named() {
        let schema = Schema::new().with_vertex(1, 0.0, 0.0).with_line("e", 1, 4);
        let err = QuoteSchema::new("broken.json", &schema, &PricingConfig::default())
            .execute()
            .unwrap_err();
        assert!(err.to_string().starts_with("broken.json: "));
        let QuoteError::Named { source, .. } = err else {
            panic!("expected a named error");
        };
        assert!(matches!(
            *source,
            QuoteError::Schema(SchemaError::UnknownVertex { vertex: 4, .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PricingConfig {
            laser_speed: -1.0,
            ..PricingConfig::default()
        };
        let schema = rectangle(Schema::new(), 1, 0.0, 4.0, 2.0);
        let err = QuoteSchema::new("test", &schema, &config).execute().unwrap_err();
        let QuoteError::Named { source, .. } = err else {
            panic!("expected a named error");
        };
        assert!(matches!(*source, QuoteError::Config(ConfigError::OutOfRange { .. })));
    }
}
