use serde::Serialize;
use tracing::debug;

use crate::config::PricingConfig;
use crate::error::Result;
use crate::operations::query::{BoundingRect, ExtendedHull, MinBoundingRect, Perimeter};
use crate::topology::{Cycle, EdgeCurve, EdgeData, TopologyStore};

/// The price of one closed curve and the figures it is made of.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveQuote {
    /// Minimum-area rectangle around the curve, before padding.
    pub rect: BoundingRect,
    /// Area of the rectangle with padding added to both sides.
    pub padded_area: f64,
    /// Total length of the curve's edges.
    pub perimeter: f64,
    /// Seconds the laser spends cutting the curve.
    pub cut_time: f64,
    /// Price of the padded material.
    pub material_cost: f64,
    /// Price of the machine time.
    pub cut_cost: f64,
    /// `material_cost + cut_cost + setup_cost`.
    pub price: f64,
}

/// Prices one closed curve on its own.
///
/// The curve's material is its minimum bounding rectangle, grown by the
/// configured padding; its machine time is the time to cut every edge.
pub struct QuoteCurve<'a> {
    cycle: &'a Cycle,
    config: &'a PricingConfig,
}

impl<'a> QuoteCurve<'a> {
    /// Creates a new `QuoteCurve` operation.
    #[must_use]
    pub fn new(cycle: &'a Cycle, config: &'a PricingConfig) -> Self {
        Self { cycle, config }
    }

    /// Executes the operation, returning the curve's quote.
    ///
    /// # Errors
    ///
    /// Returns an error if a cycle edge or vertex is not in the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<CurveQuote> {
        let hull = ExtendedHull::new(self.cycle).execute(store)?;
        let rect = MinBoundingRect::new(&hull).execute();

        let perimeter = Perimeter::new(self.cycle).execute(store)?;
        let mut cut_time = 0.0;
        for oe in &self.cycle.edges {
            let edge = store.edge(oe.edge)?;
            cut_time += edge.curve.as_curve().length() / self.cut_speed(edge);
        }

        let config = self.config;
        let padded_area = (rect.width + config.padding) * (rect.height + config.padding);
        let material_cost = config.material_cost * padded_area;
        let cut_cost = config.time_cost * cut_time;
        let price = material_cost + cut_cost + config.setup_cost;

        debug!(
            width = rect.width,
            height = rect.height,
            perimeter,
            cut_time,
            price,
            "priced curve"
        );
        Ok(CurveQuote {
            rect,
            padded_area,
            perimeter,
            cut_time,
            material_cost,
            cut_cost,
            price,
        })
    }

    /// Laser speed along `edge`: tighter arcs cut slower.
    fn cut_speed(&self, edge: &EdgeData) -> f64 {
        match &edge.curve {
            EdgeCurve::Arc(arc) if self.config.arc_speed_falloff => {
                self.config.laser_speed * (-1.0 / arc.radius()).exp()
            }
            _ => self.config.laser_speed,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::BuildTopology;
    use crate::operations::query::FindCycles;
    use crate::schema::Schema;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn quote(schema: &Schema, config: &PricingConfig) -> CurveQuote {
        let store = BuildTopology::new(schema).execute().unwrap();
        let cycles = FindCycles::new().execute(&store).unwrap();
        QuoteCurve::new(&cycles[0], config).execute(&store).unwrap()
    }

    fn rectangle(w: f64, h: f64) -> Schema {
        Schema::new()
            .with_vertex(1, 0.0, 0.0)
            .with_vertex(2, w, 0.0)
            .with_vertex(3, w, h)
            .with_vertex(4, 0.0, h)
            .with_line("a", 1, 2)
            .with_line("b", 2, 3)
            .with_line("c", 3, 4)
            .with_line("d", 4, 1)
    }

    fn half_disc(r: f64) -> Schema {
        Schema::new()
            .with_vertex(1, -r, 0.0)
            .with_vertex(2, r, 0.0)
            .with_line("diameter", 1, 2)
            .with_arc("dome", 1, 2, (0.0, 0.0))
    }

    #[test]
    fn four_by_two_rectangle() {
        let q = quote(&rectangle(4.0, 2.0), &PricingConfig::default());
        assert_relative_eq!(q.rect.area(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(q.perimeter, 12.0, epsilon = 1e-12);
        assert_relative_eq!(q.padded_area, 8.61, epsilon = 1e-12);
        assert_relative_eq!(q.cut_time, 24.0, epsilon = 1e-12);
        assert_relative_eq!(q.material_cost, 6.4575, epsilon = 1e-12);
        assert_relative_eq!(q.cut_cost, 1.68, epsilon = 1e-12);
        assert_relative_eq!(q.price, 8.1375, epsilon = 1e-12);
    }

    #[test]
    fn perimeter_matches_cycle_length() {
        let r = 2.0;
        let store = BuildTopology::new(&half_disc(r)).execute().unwrap();
        let cycles = FindCycles::new().execute(&store).unwrap();
        let q = QuoteCurve::new(&cycles[0], &PricingConfig::default())
            .execute(&store)
            .unwrap();
        let expected = Perimeter::new(&cycles[0]).execute(&store).unwrap();
        assert_relative_eq!(q.perimeter, expected, epsilon = 1e-12);
        assert_relative_eq!(q.perimeter, PI * r + 2.0 * r, epsilon = 1e-12);
    }

    #[test]
    fn arcs_cut_slower_with_falloff() {
        let r = 2.0;
        let config = PricingConfig::default();
        let q = quote(&half_disc(r), &config);

        let line_time = 2.0 * r / config.laser_speed;
        let arc_time = PI * r / (config.laser_speed * (-1.0 / r).exp());
        assert_relative_eq!(q.cut_time, line_time + arc_time, epsilon = 1e-9);
        assert_relative_eq!(q.rect.area(), 2.0 * r * r, epsilon = 1e-9);
    }

    #[test]
    fn falloff_can_be_disabled() {
        let r = 2.0;
        let config = PricingConfig {
            arc_speed_falloff: false,
            ..PricingConfig::default()
        };
        let q = quote(&half_disc(r), &config);
        assert_relative_eq!(q.cut_time, (PI * r + 2.0 * r) / config.laser_speed, epsilon = 1e-9);
    }

    #[test]
    fn setup_cost_is_added_once_per_curve() {
        let config = PricingConfig {
            setup_cost: 1.5,
            ..PricingConfig::default()
        };
        let q = quote(&rectangle(4.0, 2.0), &config);
        assert_relative_eq!(q.price, 8.1375 + 1.5, epsilon = 1e-12);
    }

    #[test]
    fn quarter_sector_is_an_upper_bound() {
        // The arc's chord box pushes the hull past the arc on both sides of
        // its midpoint. The best rectangle is then the sqrt(2) x 1 box along
        // the chord, not the sector's own r x r box.
        let r = 1.0;
        let schema = Schema::new()
            .with_vertex(1, 0.0, 0.0)
            .with_vertex(2, 0.0, r)
            .with_vertex(3, r, 0.0)
            .with_line("a", 1, 2)
            .with_arc("b", 2, 3, (0.0, 0.0))
            .with_line("c", 3, 1);
        let config = PricingConfig {
            padding: 0.0,
            ..PricingConfig::default()
        };
        let q = quote(&schema, &config);
        assert_relative_eq!(q.rect.area(), 2.0_f64.sqrt() * r * r, epsilon = 1e-9);
        assert!(q.rect.area() > r * r);
        assert_relative_eq!(q.padded_area, q.rect.area(), epsilon = 1e-12);
    }
}
