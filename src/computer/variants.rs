// Catalog variants. They differ only in display name and catalog price.
//
// Known inconsistency kept on purpose: `set_price` records the given price but
// `price()` keeps returning the catalog constant.

use super::{Chassis, Computer};

pub const DESKTOP_PRICE: u64 = 3_000_000;
pub const LAPTOP_PRICE: u64 = 2_000_000;
pub const WALLTOP_PRICE: u64 = 1_500_000;

macro_rules! catalog_variant {
    ($(#[$meta:meta])* $variant:ident, $name:literal, $price:expr) => {
        $(#[$meta])*
        pub struct $variant {
            chassis: Chassis,
            price: u64,
        }

        impl $variant {
            pub fn new(chassis: Chassis) -> Self {
                Self { chassis, price: 0 }
            }

            pub fn into_chassis(self) -> Chassis {
                self.chassis
            }
        }

        impl Computer for $variant {
            fn chassis(&self) -> &Chassis {
                &self.chassis
            }

            fn chassis_mut(&mut self) -> &mut Chassis {
                &mut self.chassis
            }

            fn name(&self) -> String {
                $name.to_string()
            }

            fn price(&self) -> u64 {
                $price
            }

            fn set_price(&mut self, price: u64) {
                self.price = price;
            }

            fn stored_price(&self) -> u64 {
                self.price
            }
        }
    };
}

catalog_variant!(
    /// Desktop computer, 3,000,000 in the catalog.
    Desktop,
    "Desktop",
    DESKTOP_PRICE
);

catalog_variant!(
    /// Laptop computer, 2,000,000 in the catalog. Can fold.
    Laptop,
    "Laptop",
    LAPTOP_PRICE
);

catalog_variant!(
    /// Wall-mounted computer, 1,500,000 in the catalog.
    Walltop,
    "Walltop",
    WALLTOP_PRICE
);

impl Laptop {
    pub fn fold(&mut self) {
        self.chassis
            .transcript_mut()
            .narrate("Folding process", &["Folding"]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use crate::capability::{Amd, Intel, Keyboard, Monitor, Mouse, Nvidia, Projector, Ssd};
    use crate::session::Session;
    use crate::transcript::Transcript;
    use proptest::prelude::*;

    fn chassis() -> Chassis {
        Chassis::new(Mouse, Amd, Ssd, Projector, Session::login("Pauline", "pkt"))
            .with_transcript(Transcript::recording())
    }

    #[test]
    #[serial]
    fn test_catalog_names_and_prices() {
        let desktop = Desktop::new(chassis());
        let laptop = Laptop::new(chassis());
        let walltop = Walltop::new(Chassis::new(Keyboard, Intel, Ssd, Monitor, Session::login("Oliver", "pasd")));

        assert_eq!((desktop.name(), desktop.price()), ("Desktop".to_string(), 3_000_000));
        assert_eq!((laptop.name(), laptop.price()), ("Laptop".to_string(), 2_000_000));
        assert_eq!((walltop.name(), walltop.price()), ("Walltop".to_string(), 1_500_000));
    }

    #[test]
    #[serial]
    fn test_price_ignores_components() {
        let mut desktop = Desktop::new(chassis());
        desktop.set_processor_chip(Nvidia);
        desktop.set_input(Keyboard);
        assert_eq!(desktop.price(), DESKTOP_PRICE);
    }

    // Documented quirk: the stored price is never reported.
    #[test]
    #[serial]
    fn test_set_price_does_not_change_price() {
        let mut walltop = Walltop::new(chassis());
        walltop.set_price(42);
        assert_eq!(walltop.stored_price(), 42);
        assert_eq!(walltop.price(), WALLTOP_PRICE);
    }

    #[test]
    #[serial]
    fn test_laptop_fold_narrates() {
        let mut laptop = Laptop::new(chassis());
        laptop.fold();
        assert_eq!(
            laptop.chassis().transcript().lines(),
            &["------- Folding process -------", "Step1: Folding", ""]
        );
    }

    #[test]
    #[serial]
    fn test_into_chassis_keeps_components() {
        let mut chassis = Desktop::new(chassis()).into_chassis();
        chassis.store("1");
        assert!(chassis.transcript().lines()[0].contains("SSD"));
    }

    proptest! {
        #[test]
        #[serial]
        fn prop_base_set_price_never_changes_price(price in any::<u64>()) {
            let mut desktop = Desktop::new(chassis());
            let mut laptop = Laptop::new(chassis());
            desktop.set_price(price);
            laptop.set_price(price);
            prop_assert_eq!(desktop.price(), DESKTOP_PRICE);
            prop_assert_eq!(laptop.price(), LAPTOP_PRICE);
        }
    }
}
