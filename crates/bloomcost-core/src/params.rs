//! Cost parameters
//!
//! All user-tunable constants for a pricing session live here. Every
//! derived column is a pure function of the raw row fields and one
//! [`CostParams`] value; changing a parameter means re-running the
//! pipeline with a new `CostParams`.

use crate::error::{Error, Result};

/// Granularity of the margin selector
pub const MARGIN_STEP: u8 = 5;

/// User-tunable constants for a pricing session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostParams {
    /// Volume divisor for the Miami freight leg (box cm3 per billable kilo)
    pub freight_ratio: f64,

    /// Import duty as a fraction of the dutiable bouquet value per box
    pub duty_multiplier: f64,

    /// Centimeters per inch, for wet-pack dimension conversion
    pub cm_per_inch: f64,

    /// Cubic inches per cubic foot, for the packed-box cube
    pub cube_divisor: f64,

    /// Miami freight price per billable kilo (USD)
    pub price_per_kilo: f64,

    /// US freight price per cube (USD)
    pub price_per_cube: f64,

    /// US freight price per piece (USD)
    pub price_per_piece: f64,

    /// Fuel surcharge constant for the US leg
    pub fuel_constant: f64,

    /// Wet-pack treatment price per box (USD)
    pub wet_pack_price: f64,

    /// Flat transport-pallet price added per bunch (USD)
    pub transport_pallet_price: f64,

    /// When set, the packed-box cube is pinned to the wet-pack override
    /// instead of being derived from box geometry
    pub wet_pack_enabled: bool,

    /// Margin percent: profit as a fraction of the client price,
    /// 0-100 in steps of [`MARGIN_STEP`]
    pub margin_percent: u8,

    /// Fallback extras buffer for sheets without an EXTRAS column (USD)
    pub extras_default: f64,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            freight_ratio: 6000.0,
            duty_multiplier: 0.218,
            cm_per_inch: 2.54,
            cube_divisor: 1728.0,
            price_per_kilo: 1.95,
            price_per_cube: 2.18,
            price_per_piece: 0.50,
            fuel_constant: 0.30,
            wet_pack_price: 0.0,
            transport_pallet_price: 0.0,
            wet_pack_enabled: false,
            margin_percent: 15,
            extras_default: 0.0,
        }
    }
}

impl CostParams {
    /// Check that every divisor is usable and the margin is on a valid step.
    ///
    /// The pipeline calls this once per run, before touching any row, so a
    /// bad parameter never produces NaN columns.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("freight_ratio", self.freight_ratio),
            ("cm_per_inch", self.cm_per_inch),
            ("cube_divisor", self.cube_divisor),
        ] {
            if !(value > 0.0) {
                return Err(Error::InvalidParameter { name, value });
            }
        }

        if self.margin_percent > 100 || self.margin_percent % MARGIN_STEP != 0 {
            return Err(Error::InvalidMarginPercent(self.margin_percent));
        }

        Ok(())
    }
}
