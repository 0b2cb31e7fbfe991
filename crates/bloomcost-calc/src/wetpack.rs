//! Wet-pack surcharge
//!
//! Wet-packed boxes ship with water, which changes how the box is billed:
//! dimensions convert from cm to inches and the packed-box cube feeds the
//! US-freight leg. The per-bunch surcharge spreads the wet-pack price over
//! the bunches in a box, plus a flat transport-pallet charge.

use bloomcost_core::{CostParams, Error, Result};

use crate::money::round2;

/// Cube used when wet-pack is enabled.
///
/// Override policy: with wet-pack on, the cube is pinned to this value and
/// the geometry-derived cube is intentionally ignored, whatever the box
/// dimensions say.
pub const WET_PACK_CUBE: f64 = 2.89;

/// Wet-pack derived columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetPack {
    /// Box length in inches
    pub length_in: f64,
    /// Box width in inches
    pub width_in: f64,
    /// Box depth in inches
    pub depth_in: f64,
    /// Packed-box cube (ft3-equivalent), or [`WET_PACK_CUBE`] when enabled
    pub cube: f64,
    /// Wet-pack price spread over the bunches in a box
    pub price_per_bunch: f64,
    /// Per-bunch wet-pack surcharge including the transport pallet
    pub price: f64,
}

/// Compute the wet-pack columns for one row
pub fn wet_pack(
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    bunch_per_box: f64,
    params: &CostParams,
) -> Result<WetPack> {
    if params.cm_per_inch == 0.0 {
        return Err(Error::DivisionByZero("wet pack dimensions"));
    }

    let length_in = length_cm / params.cm_per_inch;
    let width_in = width_cm / params.cm_per_inch;
    let depth_in = height_cm / params.cm_per_inch;

    let cube = if params.wet_pack_enabled {
        WET_PACK_CUBE
    } else {
        if params.cube_divisor == 0.0 {
            return Err(Error::DivisionByZero("packed-box cube"));
        }
        round2((length_in * width_in * depth_in) / params.cube_divisor)
    };

    if bunch_per_box == 0.0 {
        return Err(Error::DivisionByZero("wet pack price per bunch"));
    }
    let price_per_bunch = round2(params.wet_pack_price / bunch_per_box);
    let price = price_per_bunch + params.transport_pallet_price;

    Ok(WetPack {
        length_in,
        width_in,
        depth_in,
        cube,
        price_per_bunch,
        price,
    })
}
