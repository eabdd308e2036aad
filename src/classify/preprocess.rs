use image::imageops::FilterType;
use image::DynamicImage;
use tract_onnx::prelude::*;

use super::model::INPUT_SIZE;

// ---------------------------------------------------------------------------
// Image → model input tensor
// ---------------------------------------------------------------------------

/// Turn a decoded image into the model's input tensor.
///
/// Steps, in order: bilinear resize to 224×224, rescale [0,255] → [-1,1]
/// (divide by 255, subtract 0.5, multiply by 2), batch dimension up front.
/// The constants must match the transform the model was trained with; a
/// mismatch degrades predictions without any detectable error.
pub fn to_input_tensor(img: &DynamicImage) -> Tensor {
    let rgb = img.to_rgb8();
    let resized = image::imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let side = INPUT_SIZE as usize;
    tract_ndarray::Array4::from_shape_fn((1, side, side, 3), |(_, y, x, c)| {
        let value = f32::from(resized[(x as u32, y as u32)][c]);
        (value / 255.0 - 0.5) * 2.0
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn uniform(r: u8, g: u8, b: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([r, g, b])))
    }

    #[test]
    fn tensor_shape_is_batched_nhwc() {
        let tensor = to_input_tensor(&uniform(10, 20, 30));
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn values_stay_within_unit_range() {
        // Gradient exercising the full 0–255 range in every channel.
        let mut img = RgbImage::new(300, 120);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgb([(x % 256) as u8, (y * 2 % 256) as u8, ((x + y) % 256) as u8]);
        }
        let tensor = to_input_tensor(&DynamicImage::ImageRgb8(img));
        let view = tensor.to_array_view::<f32>().unwrap();
        assert!(view.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn white_maps_to_one_black_to_minus_one() {
        let white = to_input_tensor(&uniform(255, 255, 255));
        let view = white.to_array_view::<f32>().unwrap();
        assert!(view.iter().all(|&v| (v - 1.0).abs() < 1e-6));

        let black = to_input_tensor(&uniform(0, 0, 0));
        let view = black.to_array_view::<f32>().unwrap();
        assert!(view.iter().all(|&v| (v + 1.0).abs() < 1e-6));
    }

    #[test]
    fn channels_are_rgb_along_the_last_axis() {
        let tensor = to_input_tensor(&uniform(255, 0, 0));
        let view = tensor.to_array_view::<f32>().unwrap();
        let view = view.into_dimensionality::<tract_ndarray::Ix4>().unwrap();
        assert!((view[(0, 5, 7, 0)] - 1.0).abs() < 1e-6);
        assert!((view[(0, 5, 7, 1)] + 1.0).abs() < 1e-6);
        assert!((view[(0, 5, 7, 2)] + 1.0).abs() < 1e-6);
    }
}
