//! Image-to-tensor conversion for detector input (`image-io` feature).

use image::DynamicImage;
use ndarray::{Array3, Array4, Axis};

use crate::util::{FaceDetError, FaceDetResult};

/// Per-channel mean subtracted from the BGR planes, from the Caffe-lineage
/// S3FD training setup.
pub const INPUT_MEAN_BGR: [f32; 3] = [104.0, 117.0, 123.0];

/// Converts an image to the detector's CHW input layout.
///
/// Channels come out in BGR order with the training mean subtracted.
pub fn to_input_array(image: &DynamicImage) -> Array3<f32> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    Array3::from_shape_fn((3, height as usize, width as usize), |(c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        f32::from(pixel[2 - c]) - INPUT_MEAN_BGR[c]
    })
}

/// Stacks per-image tensors into an NCHW batch.
///
/// All images must share one shape; the batch axis preserves input order.
pub fn stack_batch(images: &[Array3<f32>]) -> FaceDetResult<Array4<f32>> {
    let first = images
        .first()
        .ok_or(FaceDetError::InvalidInput("empty batch"))?;
    let (channels, height, width) = first.dim();

    let mut batch = Array4::zeros((images.len(), channels, height, width));
    for (idx, image) in images.iter().enumerate() {
        if image.dim() != first.dim() {
            return Err(FaceDetError::ShapeMismatch {
                expected: "one (C, H, W) shape across the batch",
                got: image.shape().to_vec(),
            });
        }
        batch.index_axis_mut(Axis(0), idx).assign(image);
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::{stack_batch, to_input_array, INPUT_MEAN_BGR};
    use crate::util::FaceDetError;
    use image::{DynamicImage, Rgb, RgbImage};
    use ndarray::Array3;

    #[test]
    fn conversion_flips_channels_and_subtracts_mean() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));
        let tensor = to_input_array(&DynamicImage::ImageRgb8(img));

        assert_eq!(tensor.dim(), (3, 1, 2));
        // Blue plane first.
        assert_eq!(tensor[[0, 0, 0]], 30.0 - INPUT_MEAN_BGR[0]);
        assert_eq!(tensor[[1, 0, 0]], 20.0 - INPUT_MEAN_BGR[1]);
        assert_eq!(tensor[[2, 0, 0]], 10.0 - INPUT_MEAN_BGR[2]);
        assert_eq!(tensor[[0, 0, 1]], -INPUT_MEAN_BGR[0]);
    }

    #[test]
    fn stack_batch_preserves_order_and_rejects_mixed_shapes() {
        let a = Array3::<f32>::from_elem((3, 2, 2), 1.0);
        let b = Array3::<f32>::from_elem((3, 2, 2), 2.0);
        let batch = stack_batch(&[a, b]).unwrap();
        assert_eq!(batch.dim(), (2, 3, 2, 2));
        assert_eq!(batch[[0, 0, 0, 0]], 1.0);
        assert_eq!(batch[[1, 0, 0, 0]], 2.0);

        let odd = Array3::<f32>::zeros((3, 4, 4));
        let uniform = Array3::<f32>::zeros((3, 2, 2));
        let err = stack_batch(&[uniform, odd]).unwrap_err();
        assert!(matches!(err, FaceDetError::ShapeMismatch { .. }));

        assert_eq!(
            stack_batch(&[]).unwrap_err(),
            FaceDetError::InvalidInput("empty batch")
        );
    }
}
