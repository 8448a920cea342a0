//! Lunar position classifier: Moon longitude to Nakshatra, Pada and Rashi.
//!
//! The ecliptic is split into 27 Nakshatra arcs of 13°20' (each with four
//! Padas of 3°20') and, independently, into 12 Rashi arcs of 30°. Arcs are
//! closed-open: a longitude sitting exactly on a boundary belongs to the
//! following arc.
//!
//! Bucketing uses the traditional rounded spans 13.3333° and 3.3333°, so a
//! longitude of 13.3333 already counts as Bharani. Indices are clamped at the
//! top of the circle where the rounded spans leave a sliver short of 360°.

use std::fmt;

use qtty::Degrees;

use crate::error::{CalcError, CalcResult};

/// Width of one Nakshatra arc used for bucketing.
pub const NAKSHATRA_SPAN: Degrees = Degrees::new(13.3333);

/// Width of one Pada arc used for bucketing.
pub const PADA_SPAN: Degrees = Degrees::new(3.3333);

/// Width of one Rashi arc.
pub const RASHI_SPAN: Degrees = Degrees::new(30.0);

/// The 27 Nakshatras in ecliptic order (0 = Ashwini, 26 = Revati).
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purvashadha",
    "Uttarashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Display labels of the four Padas.
pub const PADA_LABELS: [&str; 4] = ["Pada 1", "Pada 2", "Pada 3", "Pada 4"];

/// A Rashi together with the syllables a name traditionally starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rashi {
    pub name: &'static str,
    pub western_name: &'static str,
    pub naming_letters: &'static str,
}

/// The 12 Rashis in ecliptic order (0 = Mesha, 11 = Meena).
pub const RASHIS: [Rashi; 12] = [
    Rashi {
        name: "Mesha",
        western_name: "Aries",
        naming_letters: "Chu, Che, Cho, La, Li, Lu, Le, Lo, A",
    },
    Rashi {
        name: "Vrishabha",
        western_name: "Taurus",
        naming_letters: "I, U, E, O, Va, Vi, Vu, Ve, Vo",
    },
    Rashi {
        name: "Mithuna",
        western_name: "Gemini",
        naming_letters: "Ka, Ki, Ku, Gha, Na, Chha, Ke, Ko, Ha",
    },
    Rashi {
        name: "Karka",
        western_name: "Cancer",
        naming_letters: "Hi, Hu, He, Ho, Da, Di, Du, De, Do",
    },
    Rashi {
        name: "Simha",
        western_name: "Leo",
        naming_letters: "Ma, Mi, Mu, Me, Mo, Ta, Ti, Tu, Te",
    },
    Rashi {
        name: "Kanya",
        western_name: "Virgo",
        naming_letters: "To, Pa, Pi, Pu, Sha, Na, Tha, Pe, Po",
    },
    Rashi {
        name: "Tula",
        western_name: "Libra",
        naming_letters: "Ra, Ri, Ru, Re, Ro, Ta, Ti, Tu, Te",
    },
    Rashi {
        name: "Vrischika",
        western_name: "Scorpio",
        naming_letters: "To, Na, Ni, Nu, Ne, No, Ya, Yi, Yu",
    },
    Rashi {
        name: "Dhanu",
        western_name: "Sagittarius",
        naming_letters: "Ye, Yo, Bha, Bhi, Bhu, Dha, Pha, Dha, Bhe",
    },
    Rashi {
        name: "Makara",
        western_name: "Capricorn",
        naming_letters: "Bho, Ja, Ji, Khi, Khu, Khe, Kho, Ga, Gi",
    },
    Rashi {
        name: "Kumbha",
        western_name: "Aquarius",
        naming_letters: "Gu, Ge, Go, Sa, Si, Su, Se, So, Da",
    },
    Rashi {
        name: "Meena",
        western_name: "Pisces",
        naming_letters: "Di, Du, Tha, Jha, Na, De, Do, Cha, Chi",
    },
];

/// Classification of a lunar longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    longitude: Degrees,
    nakshatra_index: usize,
    pada_index: usize,
    rashi_index: usize,
}

impl LunarPosition {
    /// Longitude after normalization into [0, 360).
    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// 0-based Nakshatra index (0..=26).
    pub fn nakshatra_index(&self) -> usize {
        self.nakshatra_index
    }

    pub fn nakshatra_name(&self) -> &'static str {
        NAKSHATRA_NAMES[self.nakshatra_index]
    }

    /// 1-based Pada number (1..=4).
    pub fn pada(&self) -> u8 {
        self.pada_index as u8 + 1
    }

    pub fn pada_label(&self) -> &'static str {
        PADA_LABELS[self.pada_index]
    }

    /// 0-based Rashi index (0..=11).
    pub fn rashi_index(&self) -> usize {
        self.rashi_index
    }

    pub fn rashi(&self) -> &'static Rashi {
        &RASHIS[self.rashi_index]
    }

    /// Syllables a name traditionally starts with for this Rashi.
    pub fn naming_letters(&self) -> &'static str {
        self.rashi().naming_letters
    }

    /// Human-readable explanation of the naming suggestion.
    pub fn reason(&self) -> String {
        let rashi = self.rashi();
        format!(
            "The Moon is in {} ({}) rashi, so names traditionally begin with: {}",
            rashi.name, rashi.western_name, rashi.naming_letters
        )
    }
}

impl fmt::Display for LunarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}° {} {} / {}",
            self.longitude.value(),
            self.nakshatra_name(),
            self.pada_label(),
            self.rashi().name
        )
    }
}

/// Wrap a longitude into [0, 360). Returns `None` for NaN or infinity.
pub fn normalize_longitude<V: Into<Degrees>>(longitude: V) -> Option<Degrees> {
    let longitude = longitude.into();
    if !longitude.value().is_finite() {
        return None;
    }
    let wrapped = longitude.wrap_pos();
    // rem_euclid can round tiny negative inputs up to exactly 360.0
    Some(if wrapped.value() >= 360.0 {
        Degrees::new(0.0)
    } else {
        wrapped
    })
}

/// Whole arcs of width `span` contained in `angle`.
fn arcs(angle: Degrees, span: Degrees) -> usize {
    (angle.value() / span.value()).floor() as usize
}

/// Classify a lunar ecliptic longitude.
///
/// Out-of-range values are wrapped first, so 360.0 classifies like 0.0.
pub fn classify<V: Into<Degrees>>(longitude: V) -> CalcResult<LunarPosition> {
    let raw = longitude.into();
    let longitude = normalize_longitude(raw).ok_or_else(|| {
        CalcError::Computation(format!(
            "Lunar longitude {} is not a finite angle",
            raw.value()
        ))
    })?;

    let whole_nakshatras = arcs(longitude, NAKSHATRA_SPAN);
    let nakshatra_index = whole_nakshatras.min(26);
    let pada_index = if whole_nakshatras > 26 {
        3
    } else {
        arcs(longitude % NAKSHATRA_SPAN.value(), PADA_SPAN).min(3)
    };
    let rashi_index = arcs(longitude, RASHI_SPAN).min(11);

    Ok(LunarPosition {
        longitude,
        nakshatra_index,
        pada_index,
        rashi_index,
    })
}
