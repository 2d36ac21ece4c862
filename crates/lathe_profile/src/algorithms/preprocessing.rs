use image::{GrayImage, Luma};
use crate::{error::Result, traits::ImagePreprocessor};

/// Inverted thresholding: dark object on a light background.
///
/// A pixel becomes foreground (255) iff its intensity is strictly below
/// `threshold`.
#[derive(Debug, Clone)]
pub struct InverseThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for InverseThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: 240 }
    }
}

impl ImagePreprocessor for InverseThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let threshold = self.threshold;
        Ok(imageproc::map::map_colors(image, |p: Luma<u8>| {
            if p[0] < threshold { Luma([255u8]) } else { Luma([0u8]) }
        }))
    }
}

/// Whether a binary mask contains any foreground pixel
pub fn has_foreground(mask: &GrayImage) -> bool {
    mask.pixels().any(|p| p[0] != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_polarity() {
        let mut img = GrayImage::from_pixel(4, 1, Luma([255u8]));
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([239]));
        img.put_pixel(2, 0, Luma([240]));

        let mask = InverseThresholdPreprocessor { threshold: 240 }
            .preprocess(&img)
            .expect("Should threshold");

        assert_eq!(mask.get_pixel(0, 0)[0], 255);
        assert_eq!(mask.get_pixel(1, 0)[0], 255);
        assert_eq!(mask.get_pixel(2, 0)[0], 0, "equal to threshold is background");
        assert_eq!(mask.get_pixel(3, 0)[0], 0);
    }

    #[test]
    fn test_white_image_has_no_foreground() {
        let img = GrayImage::from_pixel(8, 8, Luma([255u8]));
        let mask = InverseThresholdPreprocessor::default()
            .preprocess(&img)
            .expect("Should threshold");
        assert!(!has_foreground(&mask));
    }

    #[test]
    fn test_zero_threshold_selects_nothing() {
        let img = GrayImage::new(8, 8);
        let mask = InverseThresholdPreprocessor { threshold: 0 }
            .preprocess(&img)
            .expect("Should threshold");
        assert!(!has_foreground(&mask));
    }
}
