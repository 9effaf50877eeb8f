//! Closed vocabularies offered by the segment editor.
//!
//! These enums describe the *choices a form offers*, not what the store
//! accepts: cinematography fields on [`Segment`](crate::segment::Segment)
//! are plain strings and are never validated against these lists.

use crate::error::CoreError;

macro_rules! define_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in the order a selection list shows them.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Stable machine key (snake_case).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }

            /// Human-facing label, as stored on a segment.
            pub fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            /// Parse from a machine key or a display label (label match is
            /// case-insensitive).
            pub fn from_str(s: &str) -> Result<Self, CoreError> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s || v.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let keys: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        CoreError::Validation(format!(
                            "Invalid {} '{s}'. Must be one of: {}",
                            stringify!($name),
                            keys.join(", ")
                        ))
                    })
            }

            /// Display labels of every variant, in order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.label()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_vocabulary! {
    /// Shot size, widest to tightest.
    ShotType {
        Establishing => ("establishing", "Establishing Shot (ES)"),
        ExtremeLong => ("extreme_long", "Extreme Long Shot (ELS)"),
        Long => ("long", "Long Shot (LS)"),
        Full => ("full", "Full Shot (FS)"),
        MediumLong => ("medium_long", "Medium Long Shot (MLS)"),
        Cowboy => ("cowboy", "Cowboy Shot (CS)"),
        Medium => ("medium", "Medium Shot (MS)"),
        MediumCloseUp => ("medium_close_up", "Medium Close Up (MCU)"),
        CloseUp => ("close_up", "Close Up (CU)"),
        ExtremeCloseUp => ("extreme_close_up", "Extreme Close Up (ECU)"),
    }
}

define_vocabulary! {
    /// How many subjects the frame holds, or whose point of view it takes.
    Framing {
        Single => ("single", "Single Shot"),
        Two => ("two", "Two Shot"),
        Three => ("three", "Three Shot"),
        Four => ("four", "Four Shot"),
        Five => ("five", "Five Shot"),
        Crowd => ("crowd", "Crowd Shot"),
        Insert => ("insert", "Insert Shot"),
        OverTheShoulder => ("over_the_shoulder", "Over the Shoulder"),
        PointOfView => ("point_of_view", "Point of View"),
    }
}

define_vocabulary! {
    /// Lighting setup.
    Lighting {
        Natural => ("natural", "Natural"),
        SoftKey => ("soft_key", "Soft Key"),
        HighContrast => ("high_contrast", "High Contrast"),
        Silhouette => ("silhouette", "Silhouette"),
        NeonPractical => ("neon_practical", "Neon / Practical"),
        DarkMoody => ("dark_moody", "Dark / Moody"),
    }
}

define_vocabulary! {
    /// Camera movement.
    Movement {
        Static => ("static", "Static"),
        Handheld => ("handheld", "Handheld"),
        DollyIn => ("dolly_in", "Dolly In"),
        DollyOut => ("dolly_out", "Dolly Out"),
        Pan => ("pan", "Pan"),
        Tilt => ("tilt", "Tilt"),
        Tracking => ("tracking", "Tracking"),
    }
}

define_vocabulary! {
    /// Narrative theme of a segment.
    Theme {
        Science => ("science", "science"),
        Spiritual => ("spiritual", "spiritual"),
        Hybrid => ("hybrid", "hybrid"),
    }
}
