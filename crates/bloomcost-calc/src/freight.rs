//! Miami-leg freight sizing
//!
//! Box volume over the freight ratio gives billable kilos; duty is charged
//! on the dutiable bouquet value of a full box; the per-unit freight price
//! spreads box price + extras buffer + duty over the box total.

use bloomcost_core::{CostParams, Error, Result};

use crate::money::round2;

/// Raw inputs for the freight-size calculation, one box configuration per row
#[derive(Debug, Clone, Copy)]
pub struct FreightInput {
    /// Box length in cm
    pub length_cm: f64,
    /// Box width in cm
    pub width_cm: f64,
    /// Box height in cm
    pub height_cm: f64,
    /// Base bouquet price (farm price x stems per bunch)
    pub bouquet_price: f64,
    /// Bunches packed per box
    pub bunch_per_box: f64,
    /// Extras buffer added per box
    pub extras: f64,
    /// Total sellable units across the boxed quantity
    pub box_total: f64,
}

/// Freight-size derived columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreightSize {
    /// Billable kilos: ceiling of volume / freight ratio
    pub rounded_volume: f64,
    /// rounded_volume x price per kilo
    pub box_price: f64,
    /// Duty on the dutiable bouquet value of a full box
    pub tariff_duty: f64,
    /// Per-unit Miami freight price
    pub freight_price: f64,
}

/// Compute the freight-size columns for one row
pub fn freight_size(input: &FreightInput, params: &CostParams) -> Result<FreightSize> {
    if params.freight_ratio == 0.0 {
        return Err(Error::DivisionByZero("box volume"));
    }
    if input.box_total == 0.0 {
        return Err(Error::DivisionByZero("freight price per unit"));
    }

    let volume = (input.length_cm * input.width_cm * input.height_cm) / params.freight_ratio;
    let rounded_volume = volume.ceil();
    let box_price = rounded_volume * params.price_per_kilo;
    let tariff_duty = input.bouquet_price * input.bunch_per_box * params.duty_multiplier;
    let freight_price = round2((box_price + input.extras + tariff_duty) / input.box_total);

    Ok(FreightSize {
        rounded_volume,
        box_price,
        tariff_duty,
        freight_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn input() -> FreightInput {
        FreightInput {
            length_cm: 40.0,
            width_cm: 30.0,
            height_cm: 20.0,
            bouquet_price: 2.50,
            bunch_per_box: 10.0,
            extras: 1.00,
            box_total: 100.0,
        }
    }

    #[test]
    fn test_worked_example() {
        let fs = freight_size(&input(), &CostParams::default()).unwrap();

        // 40*30*20 / 6000 = 4.0 exactly, so the ceiling changes nothing
        assert_eq!(fs.rounded_volume, 4.0);
        assert_eq!(fs.box_price, 7.80);
        assert_eq!(fs.tariff_duty, 5.45);
        assert_eq!(fs.freight_price, 0.14);
    }

    #[test]
    fn test_fractional_volume_rounds_up() {
        let mut i = input();
        i.height_cm = 21.0; // 25200 / 6000 = 4.2 -> 5 kilos
        let fs = freight_size(&i, &CostParams::default()).unwrap();
        assert_eq!(fs.rounded_volume, 5.0);
        assert_eq!(fs.box_price, 5.0 * 1.95);
    }

    #[test]
    fn test_zero_box_total_is_an_error() {
        let mut i = input();
        i.box_total = 0.0;
        assert!(matches!(
            freight_size(&i, &CostParams::default()),
            Err(Error::DivisionByZero("freight price per unit"))
        ));
    }

    #[test]
    fn test_zero_freight_ratio_is_an_error() {
        let params = CostParams {
            freight_ratio: 0.0,
            ..Default::default()
        };
        assert!(freight_size(&input(), &params).is_err());
    }

    proptest! {
        /// For positive dims and ratio, billable kilos are an integer value
        /// no smaller than the unrounded volume.
        #[test]
        fn prop_rounded_volume_is_integer_ceiling(
            l in 1.0f64..200.0,
            w in 1.0f64..200.0,
            h in 1.0f64..200.0,
            ratio in 1.0f64..10_000.0,
        ) {
            let i = FreightInput {
                length_cm: l,
                width_cm: w,
                height_cm: h,
                ..input()
            };
            let params = CostParams { freight_ratio: ratio, ..Default::default() };
            let fs = freight_size(&i, &params).unwrap();

            let volume = (l * w * h) / ratio;
            prop_assert!(fs.rounded_volume >= volume);
            prop_assert_eq!(fs.rounded_volume.fract(), 0.0);
            prop_assert!(fs.rounded_volume - volume < 1.0);
        }
    }
}
