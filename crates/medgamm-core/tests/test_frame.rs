use ndarray::{Array2, Array3, ArrayD, IxDyn};

use medgamm_core::error::MedGammError;
use medgamm_core::frame::Frame;

#[test]
fn test_from_raw_row_major() {
    let frame = Frame::from_raw(3, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.pixel_count(), 6);
    assert_eq!(frame.data[[0, 2]], 3);
    assert_eq!(frame.data[[1, 0]], 4);
}

#[test]
fn test_from_raw_rejects_multichannel() {
    let err = Frame::from_raw(2, 2, 3, vec![0; 12]).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_from_raw_rejects_wrong_sample_count() {
    let err = Frame::from_raw(4, 4, 1, vec![0; 15]).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_from_raw_rejects_empty() {
    let err = Frame::from_raw(0, 4, 1, vec![]).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_from_raw_rejects_overflowing_dims() {
    let err = Frame::from_raw(usize::MAX, 2, 1, vec![0; 4]).unwrap_err();
    assert!(matches!(err, MedGammError::InvalidInput(_)), "got {err}");
}

#[test]
fn test_from_view_two_dimensional() {
    let data = Array2::from_shape_fn((3, 5), |(r, c)| (r * 5 + c) as u8).into_dyn();
    let frame = Frame::from_view(data.view()).unwrap();
    assert_eq!(frame.data.dim(), (3, 5));
    assert_eq!(frame.data[[2, 4]], 14);
}

#[test]
fn test_from_view_squeezes_single_channel() {
    let data = Array3::<u8>::from_elem((4, 2, 1), 9).into_dyn();
    let frame = Frame::from_view(data.view()).unwrap();
    assert_eq!(frame.data.dim(), (4, 2));
    assert!(frame.data.iter().all(|&v| v == 9));
}

#[test]
fn test_from_view_rejects_rgba() {
    let data = Array3::<u8>::zeros((4, 2, 4)).into_dyn();
    assert!(matches!(
        Frame::from_view(data.view()),
        Err(MedGammError::InvalidInput(_))
    ));
}

#[test]
fn test_from_view_rejects_empty() {
    let data = ArrayD::<u8>::zeros(IxDyn(&[0, 5]));
    assert!(matches!(
        Frame::from_view(data.view()),
        Err(MedGammError::InvalidInput(_))
    ));
}
