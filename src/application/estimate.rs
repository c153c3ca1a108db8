//! # Estimate Computation
//!
//! Pure, deterministic derivation of the `{min, max}` estimate from the
//! current quote request. The same computation backs the live figure on
//! the review step and the final figure attached at submission time; for
//! an unchanged request both calls produce identical results.
//!
//! # Algorithm
//!
//! ```text
//! 1. sum min/max price bands of the selected, priced services
//! 2. if a technical service is selected and linear_meters > 100:
//!        factor = linear_meters / 100
//!        min *= factor * 0.7        max *= factor
//! 3. urgency multiplier (priority x1.2/x1.3, urgent x1.5/x1.8)
//! 4. round both bounds to whole COP
//! ```
//!
//! The ordering is fixed: scaling always precedes the urgency multiplier
//! (swapping them changes the numeric result). The scaling is applied at
//! most once, to the already-summed totals rather than per technical
//! service; the reference deployment behaves this way and compatibility
//! wins over a per-service model here.
//!
//! # Examples
//!
//! ```
//! use cotizador::application::estimate::EstimateCalculator;
//! use cotizador::application::quote_request::QuoteRequest;
//! use cotizador::domain::catalog::ServiceCatalog;
//! use cotizador::domain::value_objects::Estimate;
//!
//! let catalog = ServiceCatalog::standard();
//! let calculator = EstimateCalculator::new(&catalog);
//! assert_eq!(calculator.compute(&QuoteRequest::new()), Estimate::zero());
//! ```

use crate::application::quote_request::QuoteRequest;
use crate::domain::catalog::ServiceCatalog;
use crate::domain::value_objects::Estimate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Linear meters above which the scaling step activates.
const SCALING_THRESHOLD_M: Decimal = Decimal::ONE_HUNDRED;

/// Derives estimates from a quote request against a catalog's price table.
///
/// Stateless and side-effect free; selected ids missing from the catalog
/// or carrying no price band contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct EstimateCalculator<'a> {
    catalog: &'a ServiceCatalog,
}

impl<'a> EstimateCalculator<'a> {
    /// Creates a calculator over the given catalog.
    #[must_use]
    pub const fn new(catalog: &'a ServiceCatalog) -> Self {
        Self { catalog }
    }

    /// Computes the `{min, max}` estimate for the request.
    #[must_use]
    pub fn compute(&self, request: &QuoteRequest) -> Estimate {
        let mut total_min = Decimal::ZERO;
        let mut total_max = Decimal::ZERO;

        for id in request.selected() {
            if let Some(range) = self.catalog.price_range(id) {
                total_min += range.min();
                total_max += range.max();
            }
        }

        // Scaling runs before the urgency multiplier; the order is part of
        // the pricing contract.
        let technical = self
            .catalog
            .any_requires_technical_fields(request.selected().iter());
        if technical
            && let Some(lm) = request.details.linear_meters
            && lm.get() > SCALING_THRESHOLD_M
        {
            let factor = lm.get() / SCALING_THRESHOLD_M;
            total_min = total_min.saturating_mul(factor).saturating_mul(Decimal::new(7, 1));
            total_max = total_max.saturating_mul(factor);
        }

        let (min_mult, max_mult) = request.details.urgency.unwrap_or_default().multipliers();
        total_min = total_min.saturating_mul(min_mult);
        total_max = total_max.saturating_mul(max_mult);

        Estimate::new(round_to_cop(total_min), round_to_cop(total_max))
    }
}

/// Rounds a non-negative amount to the nearest whole COP.
///
/// Amounts beyond the `u64` range saturate to the maximum instead of
/// collapsing a huge estimate to zero.
fn round_to_cop(amount: Decimal) -> u64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(u64::MAX)
}
