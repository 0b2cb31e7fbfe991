//! Cost aggregation and margin
//!
//! Sums the per-unit cost components into a landed total and derives the
//! client price from the margin. Margin is profit as a fraction of the
//! client price, so the multiplier over cost comes from the inversion
//! m/(100-m); multiplying cost by (1 + margin) directly would understate
//! the price and is never done here.

use bloomcost_core::{CostParams, Result};

use crate::freight::{freight_size, FreightInput};
use crate::money::round2;
use crate::table::ProductRow;
use crate::usfreight::us_freight;
use crate::wetpack::wet_pack;

/// All derived columns for one product row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCosts {
    /// Base bouquet price: farm price x stems per bunch
    pub bouquet_price: f64,
    /// Billable kilos for the Miami leg
    pub rounded_volume: f64,
    /// Miami box price
    pub box_price: f64,
    /// Tariff duty per box
    pub tariff_duty: f64,
    /// Per-unit Miami freight price
    pub freight_price: f64,
    /// Packed-box cube
    pub cube: f64,
    /// Per-bunch wet-pack surcharge
    pub wet_pack_price: f64,
    /// US-leg fuel surcharge per box
    pub fuel_price: f64,
    /// US freight price per box
    pub price_per_box: f64,
    /// US freight price per unit
    pub us_freight_price: f64,
    /// Landed cost per unit
    pub total_cost: f64,
    /// Client price after margin
    pub client_price: f64,
}

/// Base bouquet price: farm price x stems per bunch
pub fn bouquet_price(farm_price: f64, stem_bunch: f64) -> f64 {
    farm_price * stem_bunch
}

/// Markup over cost derived from a margin percent (profit/price)
pub fn markup_from_margin(margin_percent: u8) -> f64 {
    if margin_percent >= 100 {
        0.0
    } else {
        f64::from(margin_percent) / f64::from(100 - margin_percent)
    }
}

/// Landed cost per unit: bouquet + the three freight components
pub fn total_cost(bouquet: f64, freight: f64, wet_pack: f64, us_freight: f64) -> f64 {
    round2(bouquet + freight + wet_pack + us_freight)
}

/// Client price: total cost marked up by the margin-derived multiplier
pub fn client_price(total_cost: f64, margin_percent: u8) -> f64 {
    round2(total_cost * (1.0 + markup_from_margin(margin_percent)))
}

/// Run the full pipeline for one row, in fixed order
///
/// A fresh [`RowCosts`] is built on every call; nothing derived survives a
/// parameter change.
pub fn price_row(row: &ProductRow, params: &CostParams) -> Result<RowCosts> {
    let bouquet = bouquet_price(row.farm_price, row.stem_bunch);

    let fs = freight_size(
        &FreightInput {
            length_cm: row.length,
            width_cm: row.width,
            height_cm: row.height,
            bouquet_price: bouquet,
            bunch_per_box: row.bunch_per_box,
            extras: row.extras,
            box_total: row.box_total,
        },
        params,
    )?;

    let wp = wet_pack(row.length, row.width, row.height, row.bunch_per_box, params)?;
    let us = us_freight(wp.cube, row.bunch_per_box, params)?;

    let total = total_cost(bouquet, fs.freight_price, wp.price, us.price_per_unit);
    let client = client_price(total, params.margin_percent);

    Ok(RowCosts {
        bouquet_price: bouquet,
        rounded_volume: fs.rounded_volume,
        box_price: fs.box_price,
        tariff_duty: fs.tariff_duty,
        freight_price: fs.freight_price,
        cube: wp.cube,
        wet_pack_price: wp.price,
        fuel_price: us.fuel_price,
        price_per_box: us.price_per_box,
        us_freight_price: us.price_per_unit,
        total_cost: total,
        client_price: client,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row() -> ProductRow {
        ProductRow {
            product: "ROSES 40CM".into(),
            farm: "SANTA MARIA".into(),
            length: 40.0,
            width: 30.0,
            height: 20.0,
            farm_price: 0.25,
            stem_bunch: 10.0,
            bunch_per_box: 10.0,
            extras: 1.00,
            box_total: 100.0,
        }
    }

    #[test]
    fn test_markup_inverts_margin() {
        // 15% margin on price = 15/85 markup on cost
        let m = markup_from_margin(15);
        assert!((m - 15.0 / 85.0).abs() < 1e-15);

        assert_eq!(markup_from_margin(0), 0.0);
        assert_eq!(markup_from_margin(50), 1.0);
        assert_eq!(markup_from_margin(100), 0.0);
    }

    #[test]
    fn test_client_price_uses_markup_not_margin() {
        // cost * (1 + 0.15) would give 115.00; the inversion gives 117.65
        assert_eq!(client_price(100.0, 15), 117.65);
    }

    #[test]
    fn test_price_row_worked_example() {
        let costs = price_row(&row(), &CostParams::default()).unwrap();

        assert_eq!(costs.bouquet_price, 2.50);
        assert_eq!(costs.rounded_volume, 4.0);
        assert_eq!(costs.box_price, 7.80);
        assert_eq!(costs.tariff_duty, 5.45);
        assert_eq!(costs.freight_price, 0.14);
        assert_eq!(costs.cube, 0.85);
        assert_eq!(costs.wet_pack_price, 0.0);
        assert_eq!(costs.fuel_price, 0.28);
        assert_eq!(costs.price_per_box, 2.52);
        assert_eq!(costs.us_freight_price, 0.25);
        assert_eq!(costs.total_cost, 2.89);
        // 2.89 * (1 + 15/85) = 2.89 * 100/85 = 3.40
        assert_eq!(costs.client_price, 3.40);
    }

    #[test]
    fn test_price_row_is_idempotent() {
        let params = CostParams::default();
        let first = price_row(&row(), &params).unwrap();
        let second = price_row(&row(), &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parameter_change_flows_through() {
        let mut params = CostParams::default();
        let base = price_row(&row(), &params).unwrap();

        params.margin_percent = 30;
        let repriced = price_row(&row(), &params).unwrap();

        // Cost side is untouched; only the client price moves
        assert_eq!(repriced.total_cost, base.total_cost);
        assert!(repriced.client_price > base.client_price);
    }

    #[test]
    fn test_zero_bunch_per_box_fails_the_row() {
        let mut r = row();
        r.bunch_per_box = 0.0;
        assert!(price_row(&r, &CostParams::default()).is_err());
    }
}
