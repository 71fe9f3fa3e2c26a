//! End-to-end border extrapolation scenarios.
//!
//! Exercises every border policy on 1-D and 2-D buffers, the strict
//! constant-payload validation, and the guarantee that the embedded source
//! region is never modified.

use sigproc_rs::data::Matrix;
use sigproc_rs::error::SignalError;
use sigproc_rs::extrapolate::{
    extrapolate, extrapolate_circular, extrapolate_constant, extrapolate_matrix,
    extrapolate_matrix_circular, extrapolate_matrix_mirror, extrapolate_matrix_nearest,
    extrapolate_matrix_zero, extrapolate_mirror, extrapolate_nearest, extrapolate_zero,
    BorderType,
};

/// Build a destination with `src` centered and `fill` elsewhere.
fn centered(src: &[f64], dst_len: usize, fill: f64) -> Vec<f64> {
    let offset = (dst_len - src.len()) / 2;
    let mut dst = vec![fill; dst_len];
    dst[offset..offset + src.len()].copy_from_slice(src);
    dst
}

#[test]
fn zero_margin_cells_are_zero() {
    let src = [1.0, 2.0, 3.0];
    let mut dst = centered(&src, 9, 42.0);
    extrapolate_zero(&src, &mut dst).unwrap();
    assert_eq!(dst, [0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
}

#[test]
fn nearest_two_cells_each_side() {
    let src = [1.0, 2.0, 3.0];
    let mut dst = centered(&src, 7, 0.0);
    extrapolate_nearest(&src, &mut dst).unwrap();
    assert_eq!(&dst[..2], &[1.0, 1.0]);
    assert_eq!(&dst[5..], &[3.0, 3.0]);
}

#[test]
fn circular_two_cells_right_wrap_from_start() {
    let src = [1.0, 2.0, 3.0];
    let mut dst = centered(&src, 7, 0.0);
    extrapolate_circular(&src, &mut dst).unwrap();
    // Offsets n and n+1 wrap back to the first two samples.
    assert_eq!(&dst[5..], &[1.0, 2.0]);
}

#[test]
fn mirror_reflects_off_both_boundaries() {
    let src = [1.0, 2.0, 3.0];
    let mut dst = centered(&src, 7, 0.0);
    extrapolate_mirror(&src, &mut dst).unwrap();
    // Reflect without repeating the edge: offset -1 reads src[1].
    assert_eq!(dst, [3.0, 2.0, 1.0, 2.0, 3.0, 2.0, 1.0]);
}

#[test]
fn constant_fills_with_payload() {
    let src = [1.0, 2.0, 3.0];
    let mut dst = centered(&src, 7, 0.0);
    extrapolate_constant(&src, &mut dst, -7.5).unwrap();
    assert_eq!(dst, [-7.5, -7.5, 1.0, 2.0, 3.0, -7.5, -7.5]);
}

#[test]
fn every_policy_preserves_the_source_region() {
    let src = [10.0, 20.0, 30.0];
    let policies: [(BorderType, Option<f64>); 5] = [
        (BorderType::Zero, None),
        (BorderType::NearestNeighbour, None),
        (BorderType::Circular, None),
        (BorderType::Mirror, None),
        (BorderType::Constant, Some(1.5)),
    ];
    for (border, constant) in policies {
        let mut dst = centered(&src, 9, 0.0);
        extrapolate(&src, &mut dst, border, constant).unwrap();
        assert_eq!(&dst[3..6], &src, "source modified by {border:?}");
    }
}

#[test]
fn payload_mismatch_is_strictly_rejected() {
    let src = [1.0];
    let mut dst = [0.0, 1.0, 0.0];

    assert_eq!(
        extrapolate(&src, &mut dst, BorderType::Constant, None),
        Err(SignalError::MissingConstant)
    );
    assert_eq!(
        extrapolate(&src, &mut dst, BorderType::Zero, Some(3.0)),
        Err(SignalError::UnexpectedConstant)
    );
    // Rejection happens before any write.
    assert_eq!(dst, [0.0, 1.0, 0.0]);
}

#[test]
fn destination_smaller_than_source_is_rejected() {
    let src = [1.0, 2.0, 3.0, 4.0];
    let mut dst = [0.0; 3];
    assert_eq!(
        extrapolate_zero(&src, &mut dst),
        Err(SignalError::InvalidShape {
            expected: vec![4],
            actual: vec![3],
        })
    );
}

// =============================================================================
// 2-D
// =============================================================================

fn centered_matrix(src: &Matrix<i32>, rows: usize, cols: usize) -> Matrix<i32> {
    let row_off = (rows - src.rows()) / 2;
    let col_off = (cols - src.cols()) / 2;
    let mut dst = Matrix::zeros(rows, cols);
    for i in 0..src.rows() {
        for j in 0..src.cols() {
            *dst.get_mut(i + row_off, j + col_off).unwrap() = *src.get(i, j).unwrap();
        }
    }
    dst
}

#[test]
fn matrix_zero_border() {
    let src = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2);
    let mut dst = centered_matrix(&src, 4, 4);
    extrapolate_matrix_zero(&src, &mut dst).unwrap();
    #[rustfmt::skip]
    let expected = vec![
        0, 0, 0, 0,
        0, 1, 2, 0,
        0, 3, 4, 0,
        0, 0, 0, 0,
    ];
    assert_eq!(dst.as_slice(), expected.as_slice());
}

#[test]
fn matrix_nearest_with_asymmetric_margins() {
    // 1x2 source in a 3x4 destination: row margin 1/1, col margin 1/1.
    let src = Matrix::from_vec(vec![7, 9], 1, 2);
    let mut dst = centered_matrix(&src, 3, 4);
    extrapolate_matrix_nearest(&src, &mut dst).unwrap();
    #[rustfmt::skip]
    let expected = vec![
        7, 7, 9, 9,
        7, 7, 9, 9,
        7, 7, 9, 9,
    ];
    assert_eq!(dst.as_slice(), expected.as_slice());
}

#[test]
fn matrix_circular_corners_use_outer_product() {
    let src = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2);
    let mut dst = centered_matrix(&src, 4, 4);
    extrapolate_matrix_circular(&src, &mut dst).unwrap();
    // Corner (0,0) wraps both axes: src[1][1] = 4.
    assert_eq!(*dst.get(0, 0).unwrap(), 4);
    assert_eq!(*dst.get(0, 3).unwrap(), 3);
    assert_eq!(*dst.get(3, 0).unwrap(), 2);
    assert_eq!(*dst.get(3, 3).unwrap(), 1);
}

#[test]
fn matrix_mirror_margin_of_one() {
    let src = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3);
    let mut dst = centered_matrix(&src, 5, 5);
    extrapolate_matrix_mirror(&src, &mut dst).unwrap();
    // Edge midpoints reflect one step inward, corners reflect on both axes.
    assert_eq!(*dst.get(0, 2).unwrap(), 5);
    assert_eq!(*dst.get(2, 0).unwrap(), 5);
    assert_eq!(*dst.get(0, 0).unwrap(), 5);
    assert_eq!(*dst.get(4, 4).unwrap(), 5);
    assert_eq!(*dst.get(0, 1).unwrap(), 4);
}

#[test]
fn matrix_source_region_survives_every_policy() {
    let src = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2);
    let policies: [(BorderType, Option<i32>); 5] = [
        (BorderType::Zero, None),
        (BorderType::NearestNeighbour, None),
        (BorderType::Circular, None),
        (BorderType::Mirror, None),
        (BorderType::Constant, Some(6)),
    ];
    for (border, constant) in policies {
        let mut dst = centered_matrix(&src, 6, 6);
        extrapolate_matrix(&src, &mut dst, border, constant).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(
                    dst.get(i + 2, j + 2),
                    src.get(i, j),
                    "source modified by {border:?}"
                );
            }
        }
    }
}

#[test]
fn matrix_destination_too_small_is_rejected() {
    let src = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 3, 2);
    let mut dst = Matrix::zeros(2, 5);
    assert_eq!(
        extrapolate_matrix_zero(&src, &mut dst),
        Err(SignalError::InvalidShape {
            expected: vec![3, 2],
            actual: vec![2, 5],
        })
    );
}
