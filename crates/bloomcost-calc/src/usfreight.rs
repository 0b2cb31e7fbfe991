//! US domestic freight
//!
//! The US leg prices a box by its cube. The cube comes from the wet-pack
//! stage and is passed in explicitly - this stage never re-derives it from
//! box geometry.

use bloomcost_core::{CostParams, Error, Result};

use crate::money::round2;

/// US-freight derived columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsFreight {
    /// Fuel surcharge per box
    pub fuel_price: f64,
    /// US freight price per box
    pub price_per_box: f64,
    /// US freight price per sellable unit
    pub price_per_unit: f64,
}

/// Compute the US-freight columns for one row
///
/// `cube` is the wet-pack stage's packed-box cube.
pub fn us_freight(cube: f64, bunch_per_box: f64, params: &CostParams) -> Result<UsFreight> {
    if bunch_per_box == 0.0 {
        return Err(Error::DivisionByZero("US freight price per unit"));
    }

    let fuel_price = round2(params.price_per_cube * params.price_per_piece * cube * params.fuel_constant);
    let price_per_box = round2(cube * (params.price_per_cube + params.price_per_piece + fuel_price));
    let price_per_unit = round2(price_per_box / bunch_per_box);

    Ok(UsFreight {
        fuel_price,
        price_per_box,
        price_per_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::wetpack::WET_PACK_CUBE;

    #[test]
    fn test_geometry_cube_example() {
        // cube 0.85 with default US rates
        let us = us_freight(0.85, 10.0, &CostParams::default()).unwrap();

        // 2.18 * 0.50 * 0.85 * 0.30 = 0.27795 -> 0.28
        assert_eq!(us.fuel_price, 0.28);
        // 0.85 * (2.18 + 0.50 + 0.28) = 2.516 -> 2.52
        assert_eq!(us.price_per_box, 2.52);
        assert_eq!(us.price_per_unit, 0.25);
    }

    #[test]
    fn test_wet_pack_cube_example() {
        let us = us_freight(WET_PACK_CUBE, 10.0, &CostParams::default()).unwrap();

        // 2.18 * 0.50 * 2.89 * 0.30 = 0.94503 -> 0.95
        assert_eq!(us.fuel_price, 0.95);
        // 2.89 * (2.18 + 0.50 + 0.95) = 10.4907 -> 10.49
        assert_eq!(us.price_per_box, 10.49);
        assert_eq!(us.price_per_unit, 1.05);
    }

    #[test]
    fn test_zero_bunch_per_box_is_an_error() {
        let err = us_freight(0.85, 0.0, &CostParams::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::DivisionByZero("US freight price per unit")
        ));
    }
}
