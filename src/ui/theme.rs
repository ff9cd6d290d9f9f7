//! Material-specific style helpers so both pages color the alternative barrier alike.

use barrier_calculator::domain::MaterialType;

pub fn header_accent(material: MaterialType) -> &'static str {
    match material {
        MaterialType::Textile => "accent-textile",
        MaterialType::Disposable => "accent-disposable",
    }
}

/// Fill for the bar representing the textile or disposable barrier.
pub fn alternative_bar(material: MaterialType) -> &'static str {
    match material {
        MaterialType::Textile => "bar-fill bar-textile",
        MaterialType::Disposable => "bar-fill bar-disposable",
    }
}

pub fn reusable_bar() -> &'static str {
    "bar-fill bar-screen"
}

pub fn option_button(active: bool) -> &'static str {
    if active {
        "option-button option-button-active"
    } else {
        "option-button"
    }
}

/// Per-segment fill inside a stacked cost bar.
pub fn segment_fill(index: usize) -> &'static str {
    match index {
        0 => "segment segment-purchase",
        _ => "segment segment-operation",
    }
}
