//! Intensity statistics for solar images
//!
//! All measures are derived from the normalised 256-bin histogram of the
//! 8-bit luma channel.

/// Normalised grey-level histogram of an image
pub struct IntensityHistogram {
    probabilities: [f64; 256],
}

impl IntensityHistogram {
    /// Build from raw 8-bit luma samples. An empty slice gives all-zero probabilities.
    pub fn from_luma(pixels: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &p in pixels {
            counts[p as usize] += 1;
        }

        let mut probabilities = [0.0; 256];
        if !pixels.is_empty() {
            let total = pixels.len() as f64;
            for (p, &c) in probabilities.iter_mut().zip(counts.iter()) {
                *p = c as f64 / total;
            }
        }
        Self { probabilities }
    }

    /// Shannon entropy in bits
    pub fn entropy(&self) -> f64 {
        -self
            .probabilities
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| p * p.log2())
            .sum::<f64>()
    }

    pub fn mean_intensity(&self) -> f64 {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| i as f64 * p)
            .sum()
    }

    pub fn standard_deviation(&self) -> f64 {
        let mean = self.mean_intensity();
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| p * (i as f64 - mean).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Summary shown next to a solar frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageStats {
    pub entropy: f64,
    pub mean_intensity: f64,
    pub standard_deviation: f64,
}

impl ImageStats {
    pub fn compute(image: &image::DynamicImage) -> Self {
        let luma = image.to_luma8();
        Self::from_histogram(&IntensityHistogram::from_luma(luma.as_raw()))
    }

    pub fn from_histogram(hist: &IntensityHistogram) -> Self {
        Self {
            entropy: hist.entropy(),
            mean_intensity: hist.mean_intensity(),
            standard_deviation: hist.standard_deviation(),
        }
    }
}
