//! Feature decorators.
//!
//! A decorator wraps any [`Computer`] (a variant or another decorator) and
//! changes only its name and price, computed from the wrapped value. Every other
//! operation reaches the same chassis. Stacking is additive:
//!
//! ```
//! use computer_patterns::capability::{Keyboard, Nvidia, Projector, Ssd};
//! use computer_patterns::computer::{Chassis, Computer, Desktop};
//! use computer_patterns::decorator::{BacklightDecorator, HdmiDecorator};
//! use computer_patterns::session::Session;
//!
//! let chassis = Chassis::new(Keyboard, Nvidia, Ssd, Projector, Session::login("Franco", "123"));
//! let computer = BacklightDecorator::new(HdmiDecorator::new(Desktop::new(chassis)));
//! assert_eq!(computer.price(), 3_340_000);
//! assert_eq!(computer.name(), "BacklitHDMI Enabled Desktop");
//! ```
//!
//! `set_price` on a decorator writes its own price field from the wrapped value's
//! stored price, and `price()` never reads that field. This matches the variants
//! and is kept as is.

use tracing::debug;

use crate::computer::{Chassis, Computer};

pub const HDMI_SURCHARGE: u64 = 90_000;
pub const TYPE_C_SURCHARGE: u64 = 100_000;
pub const BACKLIGHT_SURCHARGE: u64 = 250_000;

macro_rules! feature_decorator {
    ($(#[$meta:meta])* $decorator:ident, $prefix:literal, $surcharge:expr) => {
        $(#[$meta])*
        pub struct $decorator<C> {
            computer: C,
            price: u64,
        }

        impl<C: Computer> $decorator<C> {
            pub fn new(computer: C) -> Self {
                Self { computer, price: 0 }
            }

            pub fn inner(&self) -> &C {
                &self.computer
            }

            pub fn into_inner(self) -> C {
                self.computer
            }
        }

        impl<C: Computer> Computer for $decorator<C> {
            fn chassis(&self) -> &Chassis {
                self.computer.chassis()
            }

            fn chassis_mut(&mut self) -> &mut Chassis {
                self.computer.chassis_mut()
            }

            fn name(&self) -> String {
                format!("{}{}", $prefix, self.computer.name())
            }

            fn price(&self) -> u64 {
                self.computer.price().saturating_add($surcharge)
            }

            fn set_price(&mut self, price: u64) {
                self.price = self.computer.stored_price().saturating_add(price);
                debug!(
                    decorator = stringify!($decorator),
                    stored = self.price,
                    reported = self.price(),
                    "decorator price stored"
                );
            }

            fn stored_price(&self) -> u64 {
                self.price
            }
        }
    };
}

feature_decorator!(
    /// Adds an HDMI port: +90,000, name prefixed with "HDMI Enabled ".
    HdmiDecorator,
    "HDMI Enabled ",
    HDMI_SURCHARGE
);

feature_decorator!(
    /// Adds a Type-C port: +100,000, name prefixed with "TypeC Enabled ".
    TypeCDecorator,
    "TypeC Enabled ",
    TYPE_C_SURCHARGE
);

feature_decorator!(
    /// Adds a backlit keyboard: +250,000, name prefixed with "Backlit".
    BacklightDecorator,
    "Backlit",
    BACKLIGHT_SURCHARGE
);

/// Pass-through decorator. Name and price are the wrapped computer's.
pub struct AccessoryDecorator<C> {
    computer: C,
    price: u64,
}

impl<C: Computer> AccessoryDecorator<C> {
    pub fn new(computer: C) -> Self {
        Self { computer, price: 0 }
    }

    pub fn inner(&self) -> &C {
        &self.computer
    }

    pub fn into_inner(self) -> C {
        self.computer
    }
}

impl<C: Computer> Computer for AccessoryDecorator<C> {
    fn chassis(&self) -> &Chassis {
        self.computer.chassis()
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        self.computer.chassis_mut()
    }

    fn name(&self) -> String {
        self.computer.name()
    }

    fn price(&self) -> u64 {
        self.computer.price()
    }

    // stores the value as given, like the variants
    fn set_price(&mut self, price: u64) {
        self.price = price;
    }

    fn stored_price(&self) -> u64 {
        self.price
    }
}
