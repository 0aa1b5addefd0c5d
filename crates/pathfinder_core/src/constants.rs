/// Edge weight type
pub type Weight = f64;

/// Weight of an edge without payload
pub const NO_WEIGHT: Weight = 0.0;
