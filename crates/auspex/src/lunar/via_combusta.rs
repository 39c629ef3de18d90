//! The Via Combusta, 15° Libra through 15° Scorpio.

/// 15° Libra
pub const VIA_COMBUSTA_START: f64 = 195.0;
/// 15° Scorpio
pub const VIA_COMBUSTA_END: f64 = 225.0;

/// Whether a longitude lies in the Via Combusta, both ends included
pub fn in_via_combusta(longitude: f64) -> bool {
    (VIA_COMBUSTA_START..=VIA_COMBUSTA_END).contains(&longitude)
}
