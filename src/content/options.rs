//! Closed option sets of the instant offer form.

use serde::Serialize;

/// Closed set of select values. `value()` is what the form submits; the
/// visible label lives in the content bundle.
macro_rules! offer_option {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            pub fn from_value(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|option| option.value() == value)
            }

            /// Every submitted value, in display order.
            pub fn values() -> Vec<&'static str> {
                Self::ALL.iter().map(|option| option.value()).collect()
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }
    };
}

offer_option!(
    /// Kind of royalties in the catalog.
    RoyaltyType {
        Music => "music",
        Film => "film",
        Book => "book",
        Patent => "patent",
        Other => "other",
    }
);

offer_option!(
    /// Number of songs or works.
    CatalogSize {
        UpTo10 => "1-10",
        UpTo50 => "11-50",
        UpTo100 => "51-100",
        UpTo500 => "101-500",
        Over500 => "500+",
    }
);

offer_option!(
    /// Annual royalty income band, in USD.
    AnnualIncome {
        UpTo10k => "0-10k",
        UpTo25k => "10k-25k",
        UpTo50k => "25k-50k",
        UpTo100k => "50k-100k",
        UpTo250k => "100k-250k",
        UpTo500k => "250k-500k",
        Over500k => "500k+",
    }
);

offer_option!(
    IncomeConsistency {
        Growing => "growing",
        Stable => "stable",
        Fluctuating => "fluctuating",
        Declining => "declining",
    }
);

offer_option!(
    /// Years the catalog has generated income.
    YearsActive {
        UpTo5 => "0-5",
        UpTo10 => "6-10",
        UpTo20 => "11-20",
        Over20 => "20+",
    }
);
