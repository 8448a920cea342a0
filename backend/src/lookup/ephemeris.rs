//! In-process lunar ephemeris.
//!
//! Geocentric ecliptic longitude of the Moon from the truncated ELP-2000/82
//! series in Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47: mean
//! elements, the 59 periodic longitude terms of Table 47.A and the additive
//! planetary corrections. Accuracy is on the order of 10" which is far below
//! the width of a Pada. The difference between UT and TT is ignored.

use qtty::Degrees;

use super::provider::Ephemeris;
use crate::models::JulianDay;

/// Longitude terms of Meeus Table 47.A: `[D, M, M', F, coefficient]`, with
/// the coefficient in millionths of a degree.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 59] = [
    [0.0,  0.0,  1.0,  0.0, 6_288_774.0],
    [2.0,  0.0, -1.0,  0.0, 1_274_027.0],
    [2.0,  0.0,  0.0,  0.0,   658_314.0],
    [0.0,  0.0,  2.0,  0.0,   213_618.0],
    [0.0,  1.0,  0.0,  0.0,  -185_116.0],
    [0.0,  0.0,  0.0,  2.0,  -114_332.0],
    [2.0,  0.0, -2.0,  0.0,    58_793.0],
    [2.0, -1.0, -1.0,  0.0,    57_066.0],
    [2.0,  0.0,  1.0,  0.0,    53_322.0],
    [2.0, -1.0,  0.0,  0.0,    45_758.0],
    [0.0,  1.0, -1.0,  0.0,   -40_923.0],
    [1.0,  0.0,  0.0,  0.0,   -34_720.0],
    [0.0,  1.0,  1.0,  0.0,   -30_383.0],
    [2.0,  0.0,  0.0, -2.0,    15_327.0],
    [0.0,  0.0,  1.0,  2.0,   -12_528.0],
    [0.0,  0.0,  1.0, -2.0,    10_980.0],
    [4.0,  0.0, -1.0,  0.0,    10_675.0],
    [0.0,  0.0,  3.0,  0.0,    10_034.0],
    [4.0,  0.0, -2.0,  0.0,     8_548.0],
    [2.0,  1.0, -1.0,  0.0,    -7_888.0],
    [2.0,  1.0,  0.0,  0.0,    -6_766.0],
    [1.0,  0.0, -1.0,  0.0,    -5_163.0],
    [1.0,  1.0,  0.0,  0.0,     4_987.0],
    [2.0, -1.0,  1.0,  0.0,     4_036.0],
    [2.0,  0.0,  2.0,  0.0,     3_994.0],
    [4.0,  0.0,  0.0,  0.0,     3_861.0],
    [2.0,  0.0, -3.0,  0.0,     3_665.0],
    [0.0,  1.0, -2.0,  0.0,    -2_689.0],
    [2.0,  0.0, -1.0,  2.0,    -2_602.0],
    [2.0, -1.0, -2.0,  0.0,     2_390.0],
    [1.0,  0.0,  1.0,  0.0,    -2_348.0],
    [2.0, -2.0,  0.0,  0.0,     2_236.0],
    [0.0,  1.0,  2.0,  0.0,    -2_120.0],
    [0.0,  2.0,  0.0,  0.0,    -2_069.0],
    [2.0, -2.0, -1.0,  0.0,     2_048.0],
    [2.0,  0.0,  1.0, -2.0,    -1_773.0],
    [2.0,  0.0,  0.0,  2.0,    -1_595.0],
    [4.0, -1.0, -1.0,  0.0,     1_215.0],
    [0.0,  0.0,  2.0,  2.0,    -1_110.0],
    [3.0,  0.0, -1.0,  0.0,      -892.0],
    [2.0,  1.0,  1.0,  0.0,      -810.0],
    [4.0, -1.0, -2.0,  0.0,       759.0],
    [0.0,  2.0, -1.0,  0.0,      -713.0],
    [2.0,  2.0, -1.0,  0.0,      -700.0],
    [2.0,  1.0, -2.0,  0.0,       691.0],
    [2.0, -1.0,  0.0, -2.0,       596.0],
    [4.0,  0.0,  1.0,  0.0,       549.0],
    [0.0,  0.0,  4.0,  0.0,       537.0],
    [4.0, -1.0,  0.0,  0.0,       520.0],
    [1.0,  0.0, -2.0,  0.0,      -487.0],
    [2.0,  1.0,  0.0, -2.0,      -399.0],
    [0.0,  0.0,  2.0, -2.0,      -381.0],
    [1.0,  1.0,  1.0,  0.0,       351.0],
    [3.0,  0.0, -2.0,  0.0,      -340.0],
    [4.0,  0.0, -3.0,  0.0,       330.0],
    [2.0, -1.0,  2.0,  0.0,       327.0],
    [0.0,  2.0,  1.0,  0.0,      -323.0],
    [1.0,  1.0, -1.0,  0.0,       299.0],
    [2.0,  0.0,  3.0,  0.0,       294.0],
];

/// Mean lunar elements: `(L', D, M, M', F)`.
fn mean_elements(t: f64) -> (Degrees, Degrees, Degrees, Degrees, Degrees) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l_prime = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    (
        Degrees::new(l_prime),
        Degrees::new(d),
        Degrees::new(m),
        Degrees::new(m_prime),
        Degrees::new(f),
    )
}

/// Geocentric mean-equinox ecliptic longitude of the Moon, wrapped into
/// [0, 360).
pub fn moon_longitude(jd: JulianDay) -> Degrees {
    let t = jd.centuries_since_j2000();
    let (l_prime, d, m, m_prime, f) = mean_elements(t);

    // Decreasing eccentricity of Earth's orbit scales terms involving M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let arg = d * term[0] + m * term[1] + m_prime * term[2] + f * term[3];
        let scale = match term[1].abs() as u8 {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += term[4] * scale * arg.sin();
    }

    let a1 = Degrees::new(119.75 + 131.849 * t);
    let a2 = Degrees::new(53.09 + 479_264.290 * t);
    sum_l += 3958.0 * a1.sin() + 1962.0 * (l_prime - f).sin() + 318.0 * a2.sin();

    (l_prime + Degrees::new(sum_l / 1_000_000.0)).wrap_pos()
}

/// [`Ephemeris`] backed by [`moon_longitude`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusLunarEphemeris;

impl MeeusLunarEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for MeeusLunarEphemeris {
    fn lunar_longitude(&self, jd: JulianDay) -> Option<Degrees> {
        if !jd.value().is_finite() {
            return None;
        }
        let longitude = moon_longitude(jd);
        longitude.value().is_finite().then_some(longitude)
    }
}
