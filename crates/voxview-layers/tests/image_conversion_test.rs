use nalgebra::DMatrix;
use ndarray::{ArrayD, IxDyn};

use voxview_core::image::{Image, PixelType};
use voxview_core::metadata::Metadata;
use voxview_core::spatial::{Direction, Point2, Point3, Spacing2, Spacing3};
use voxview_layers::{image_from_image_layer, image_layer_from_image, ImageLayer};

fn ramp(shape: &[usize]) -> ArrayD<u8> {
    let len: usize = shape.iter().product();
    let values: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    ArrayD::from_shape_vec(IxDyn(shape), values).unwrap()
}

#[test]
fn test_scalar_pixel_round_trip_is_exact() {
    let data = ArrayD::from_shape_vec(
        IxDyn(&[3, 4]),
        (0..12).map(|i| i as f32 * 0.5).collect(),
    )
    .unwrap();
    let image = Image::<f32, 2>::new(data).unwrap();

    let layer = image_layer_from_image(&image);
    let recovered: Image<f32, 2> = image_from_image_layer(&layer).unwrap();

    assert_eq!(recovered.data(), image.data());
    assert_eq!(recovered.pixel_type(), image.pixel_type());
    // The recovered image owns fresh storage rather than aliasing the layer's view
    assert_ne!(recovered.data().as_ptr(), image.data().as_ptr());
}

#[test]
fn test_rgb_pixel_round_trip_is_exact() {
    let image = Image::<u8, 2>::new_rgb(ramp(&[5, 6, 3])).unwrap();

    let layer = image_layer_from_image(&image);
    assert!(layer.rgb());

    let recovered: Image<u8, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(recovered.pixel_type(), PixelType::Rgb);
    assert_eq!(recovered.data(), image.data());
}

#[test]
fn test_rgba_pixel_round_trip_is_exact() {
    let image = Image::<u8, 2>::new_rgba(ramp(&[5, 6, 4])).unwrap();

    let layer = image_layer_from_image(&image);
    let recovered: Image<u8, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(recovered.pixel_type(), PixelType::Rgba);
    assert_eq!(recovered.data(), image.data());
}

#[test]
fn test_layer_borrows_image_buffer() {
    let image = Image::<u8, 2>::new(ramp(&[16, 16])).unwrap();
    let layer = image_layer_from_image(&image);

    assert!(layer.is_view());
    assert_eq!(layer.data(), image.data().view());
}

#[test]
fn test_layer_over_borrowed_view_converts_to_image() {
    let data = ramp(&[4, 6]);
    let layer = ImageLayer::from_view(data.view());

    assert!(layer.is_view());
    assert_eq!(layer.ndim(), 2);
    assert_eq!(layer.shape(), &[4, 6]);

    let image: Image<u8, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(image.data(), &data);
}

#[test]
fn test_spacing_maps_to_reversed_scale() {
    let data = ArrayD::<f32>::zeros(IxDyn(&[3, 4]));
    let mut image = Image::<f32, 2>::new(data).unwrap();
    image.set_spacing(Spacing2::new([1.1, 2.2]));

    let layer = image_layer_from_image(&image);
    assert_eq!(layer.scale(), Some(&[2.2, 1.1][..]));

    let recovered: Image<f32, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(*recovered.spacing(), Spacing2::new([1.1, 2.2]));
}

#[test]
fn test_origin_maps_to_reversed_translate() {
    let data = ArrayD::<f32>::zeros(IxDyn(&[3, 4]));
    let mut image = Image::<f32, 2>::new(data).unwrap();
    image.set_origin(Point2::new([7.0, -3.0]));

    let layer = image_layer_from_image(&image);
    assert_eq!(layer.translate(), Some(&[-3.0, 7.0][..]));

    let recovered: Image<f32, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(*recovered.origin(), Point2::new([7.0, -3.0]));
}

#[test]
fn test_axis_swap_direction_survives_round_trip() {
    // The 2D axis-swap matrix is symmetric, so the transposed layer rotate
    // holds the same values as the image direction here
    let swap = Direction::<2>::from_fn(|i, j| if i + j == 1 { 1.0 } else { 0.0 });

    let data = ArrayD::<f32>::zeros(IxDyn(&[3, 3]));
    let mut image = Image::<f32, 2>::new(data).unwrap();
    image.set_direction(swap);

    let layer = image_layer_from_image(&image);
    let rotate = layer.rotate().unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(rotate[(i, j)], swap[(j, i)]);
            assert_eq!(rotate[(i, j)], swap[(i, j)]);
        }
    }

    let recovered: Image<f32, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(*recovered.direction(), swap);
}

#[test]
fn test_proper_rotation_direction_transposes_each_way() {
    let angle = 0.3f64;
    let (sin, cos) = angle.sin_cos();
    let direction = Direction::<2>::from_fn(|i, j| match (i, j) {
        (0, 0) => cos,
        (0, 1) => -sin,
        (1, 0) => sin,
        (1, 1) => cos,
        _ => unreachable!(),
    });

    let data = ArrayD::<f32>::zeros(IxDyn(&[3, 3]));
    let mut image = Image::<f32, 2>::new(data).unwrap();
    image.set_direction(direction);

    let layer = image_layer_from_image(&image);
    let rotate = layer.rotate().unwrap();
    assert_eq!(rotate[(0, 1)], direction[(1, 0)]);
    assert_eq!(rotate[(1, 0)], direction[(0, 1)]);

    let recovered: Image<f32, 2> = image_from_image_layer(&layer).unwrap();
    assert_eq!(*recovered.direction(), direction);
}

#[test]
fn test_metadata_round_trip_preserves_entries_and_order() {
    let data = ArrayD::<f32>::zeros(IxDyn(&[3, 4]));
    let mut image = Image::<f32, 2>::new(data).unwrap();
    image.metadata_mut().insert("modality", "MR");
    image.metadata_mut().insert("echo_time", 4.2);
    image.metadata_mut().insert("series", 12i64);

    let layer = image_layer_from_image(&image);
    assert_eq!(layer.metadata(), image.metadata());

    let recovered: Image<f32, 2> = image_from_image_layer(&layer).unwrap();
    let keys: Vec<&str> = recovered.metadata().keys().collect();
    assert_eq!(keys, vec!["modality", "echo_time", "series"]);
    assert_eq!(
        recovered.metadata().get("echo_time").and_then(|v| v.as_float()),
        Some(4.2)
    );
}

#[test]
fn test_metadata_copies_are_independent() {
    let data = ArrayD::<f32>::zeros(IxDyn(&[3, 4]));
    let mut image = Image::<f32, 2>::new(data).unwrap();
    image.metadata_mut().insert("modality", "CT");

    let mut layer = image_layer_from_image(&image);
    layer.metadata_mut().insert("modality", "PET");
    layer.metadata_mut().insert("extra", 1i64);

    assert_eq!(
        image.metadata().get("modality").and_then(|v| v.as_str()),
        Some("CT")
    );
    assert!(!image.metadata().contains_key("extra"));
}

#[test]
fn test_owned_layer_round_trips_through_image() {
    let mut layer = ImageLayer::new(ramp(&[4, 5]).mapv(|v| v as u16));
    layer.set_scale(vec![3.0, 2.0]);
    layer.set_translate(vec![30.0, 20.0]);

    let mut metadata = Metadata::new();
    metadata.insert("source", "synthetic");
    layer.set_metadata(metadata);

    let image: Image<u16, 2> = image_from_image_layer(&layer).unwrap();
    let back = image_layer_from_image(&image);

    assert_eq!(back.data(), layer.data());
    assert_eq!(back.scale(), layer.scale());
    assert_eq!(back.translate(), layer.translate());
    assert_eq!(back.metadata(), layer.metadata());
}

#[test]
fn test_3d_layer_composite_reproduces_toolkit_geometry() {
    let data = ramp(&[10, 10, 10]);

    let angle = std::f64::consts::FRAC_PI_4;
    let (sin, cos) = angle.sin_cos();
    let rotate = DMatrix::from_row_slice(3, 3, &[cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0]);

    let mut layer = ImageLayer::new(data.clone());
    layer.set_scale(vec![2.0, 1.5, 1.5]);
    layer.set_translate(vec![10.0, 20.0, 30.0]);
    layer.set_rotate(rotate.clone());

    let image: Image<u8, 3> = image_from_image_layer(&layer).unwrap();
    assert_eq!(*image.spacing(), Spacing3::new([1.5, 1.5, 2.0]));
    assert_eq!(*image.origin(), Point3::new([30.0, 20.0, 10.0]));
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(image.direction()[(i, j)], rotate[(j, i)]);
        }
    }
    assert_eq!(image.data(), &data);

    let back = image_layer_from_image(&image);
    assert_eq!(back.scale(), Some(&[2.0, 1.5, 1.5][..]));
    assert_eq!(back.translate(), Some(&[10.0, 20.0, 30.0][..]));
    assert_eq!(back.rotate(), Some(&rotate));
    assert_eq!(back.data(), layer.data());
}

#[test]
fn test_3d_composite_geometry() {
    let data = ArrayD::<f32>::zeros(IxDyn(&[2, 3, 4]));
    let mut image = Image::<f32, 3>::new(data).unwrap();
    image.set_spacing(Spacing3::new([1.0, 2.0, 4.0]));
    image.set_origin(Point3::new([-1.0, 0.0, 1.0]));

    let angle = std::f64::consts::FRAC_PI_4;
    let (sin, cos) = angle.sin_cos();
    let direction = Direction::<3>::from_fn(|i, j| match (i, j) {
        (0, 0) => cos,
        (0, 1) => -sin,
        (1, 0) => sin,
        (1, 1) => cos,
        (2, 2) => 1.0,
        _ => 0.0,
    });
    image.set_direction(direction);

    let layer = image_layer_from_image(&image);
    assert_eq!(layer.scale(), Some(&[4.0, 2.0, 1.0][..]));
    assert_eq!(layer.translate(), Some(&[1.0, 0.0, -1.0][..]));

    let rotate = layer.rotate().unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert!((rotate[(i, j)] - direction[(j, i)]).abs() < 1e-15);
        }
    }

    let recovered: Image<f32, 3> = image_from_image_layer(&layer).unwrap();
    assert_eq!(*recovered.spacing(), Spacing3::new([1.0, 2.0, 4.0]));
    assert_eq!(*recovered.origin(), Point3::new([-1.0, 0.0, 1.0]));
    for i in 0..3 {
        for j in 0..3 {
            assert!((recovered.direction()[(i, j)] - direction[(i, j)]).abs() < 1e-15);
        }
    }
}
