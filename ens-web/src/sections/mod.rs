//! Landing page sections, top to bottom.

pub mod contact;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod pricing;
pub mod trusted_by;

pub use contact::ContactSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use how_it_works::HowItWorksSection;
pub use pricing::PricingSection;
pub use trusted_by::TrustedBy;

use ens_core::Direction;

/// Arrow pointing in the reading direction.
#[must_use]
pub const fn forward_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Rtl => "←",
        Direction::Ltr => "→",
    }
}

/// Arrow pointing against the reading direction ("back").
#[must_use]
pub const fn back_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Rtl => "→",
        Direction::Ltr => "←",
    }
}
