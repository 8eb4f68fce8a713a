// Copyright @yucwang 2026

use crate::core::material::AcousticMaterial;
use crate::math::constants::Float;

pub const NUM_OCTAVE_BANDS: usize = 6;

/// Center frequencies of the octave bands [Hz].
pub const OCTAVE_BAND_CENTERS: [Float; NUM_OCTAVE_BANDS] = [125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0];

/// Absorption tabulated per octave band; a frequency uses the band whose
/// center is nearest on a logarithmic scale.
#[derive(Debug, Clone, PartialEq)]
pub struct OctaveBandAbsorption {
    absorption: [Float; NUM_OCTAVE_BANDS],
}

impl OctaveBandAbsorption {
    pub fn new(absorption: [Float; NUM_OCTAVE_BANDS]) -> Self {
        let mut clamped = absorption;
        for a in clamped.iter_mut() {
            *a = a.clamp(0.0, 1.0);
        }
        Self { absorption: clamped }
    }

    pub fn band_index(frequency: Float) -> usize {
        let mut best = 0;
        let mut best_distance = Float::INFINITY;
        for (i, center) in OCTAVE_BAND_CENTERS.iter().enumerate() {
            let distance = (frequency / center).log2().abs();
            if distance < best_distance {
                best = i;
                best_distance = distance;
            }
        }
        best
    }
}

impl AcousticMaterial for OctaveBandAbsorption {
    fn absorption(&self, frequency: Float) -> Float {
        self.absorption[Self::band_index(frequency)]
    }
}
