//! Static guide tables, one module per guide
//!
//! These are the hand-authored content sources the catalog validates at
//! load time. Keep `all()` in presentation order.

pub mod fertilizer;
pub mod harvest;
pub mod pests;
pub mod rotation;
pub mod soil;
pub mod weeds;

use super::model::RawGuide;

/// All raw guides in presentation order
pub fn all() -> [&'static RawGuide; 6] {
    [
        &harvest::GUIDE,
        &pests::GUIDE,
        &soil::GUIDE,
        &weeds::GUIDE,
        &fertilizer::GUIDE,
        &rotation::GUIDE,
    ]
}
