// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    dim::{Const, VectorDimension},
    matrix::{Matrix, Matrix1x1, Matrix1x2, Matrix2x3, Matrix3x2, Matrix4x4, layout::Layout},
    vector::{Vector, Vector2},
};

/// Byte distance from the start of `matrix` to its element at 0-based `(row, col)`.
fn measured_offset<T, const ROWS: usize, const COLS: usize>(
    matrix: &Matrix<T, ROWS, COLS>,
    row: usize,
    col: usize,
) -> usize {
    let base = matrix as *const Matrix<T, ROWS, COLS> as usize;
    let elem = matrix.get(row, col).unwrap() as *const T as usize;
    elem - base
}

fn check_shape<const ROWS: usize, const COLS: usize>() {
    assert_eq!(size_of::<Matrix<f64, ROWS, COLS>>(), ROWS * COLS * 8);
    assert_eq!(Matrix::<f64, ROWS, COLS>::SIZE, ROWS * COLS * 8);
    assert_eq!(Matrix::<f64, ROWS, COLS>::LAYOUT, Layout::new(ROWS, COLS, 8).unwrap());

    let matrix = Matrix::<f64, ROWS, COLS>::from_fn(|row, col| (row * COLS + col) as f64);
    for row in 1..=ROWS {
        for col in 1..=COLS {
            let expected = ((row - 1) * COLS + (col - 1)) * 8;
            assert_eq!(Matrix::<f64, ROWS, COLS>::offset_of(row, col), expected);
            assert_eq!(measured_offset(&matrix, row - 1, col - 1), expected);
            assert_eq!(matrix.as_slice()[expected / 8], ((row - 1) * COLS + (col - 1)) as f64);
        }
    }
}

#[test]
fn test_layout_of_every_shape() {
    check_shape::<1, 1>();
    check_shape::<1, 2>();
    check_shape::<1, 3>();
    check_shape::<1, 4>();
    check_shape::<2, 1>();
    check_shape::<2, 2>();
    check_shape::<2, 3>();
    check_shape::<2, 4>();
    check_shape::<3, 1>();
    check_shape::<3, 2>();
    check_shape::<3, 3>();
    check_shape::<3, 4>();
    check_shape::<4, 1>();
    check_shape::<4, 2>();
    check_shape::<4, 3>();
    check_shape::<4, 4>();
}

#[test]
fn test_narrow_scalar_layout() {
    assert_eq!(size_of::<Matrix<f32, 3, 4>>(), 48);
    assert_eq!(Matrix::<f32, 3, 4>::offset_of(2, 3), 24);

    let matrix = Matrix::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
    assert_eq!(measured_offset(&matrix, 1, 0), 8);
    assert_eq!(bytemuck::cast::<_, [i32; 4]>(matrix), [1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_offset_of_out_of_bounds() {
    let _ = Matrix2x3::<f64>::offset_of(3, 1);
}

#[test]
fn test_scalar_constructors_are_positional() {
    let matrix = Matrix2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(matrix.to_array(), [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

    #[rustfmt::skip]
    let matrix = Matrix4x4::new(
        01, 02, 03, 04,
        05, 06, 07, 08,
        09, 10, 11, 12,
        13, 14, 15, 16,
    );
    assert_eq!(matrix.as_slice(), (1..=16).collect::<Vec<_>>());
    assert_eq!(matrix.get(3, 0), Some(&13));

    assert_eq!(Matrix1x1::new(7.5).as_slice(), &[7.5]);
}

#[test]
fn test_from_rows_is_row_major() {
    let matrix = Matrix3x2::from_rows([
        Vector2::new([1.0, 2.0]),
        Vector2::new([3.0, 4.0]),
        Vector2::new([5.0, 6.0]),
    ]);

    let names_and_values: Vec<_> = Matrix3x2::<f64>::LAYOUT
        .fields()
        .map(|field| (field.to_string(), matrix.get(field.row - 1, field.col - 1).copied()))
        .collect();

    assert_eq!(
        names_and_values,
        [
            ("m11".to_string(), Some(1.0)),
            ("m12".to_string(), Some(2.0)),
            ("m21".to_string(), Some(3.0)),
            ("m22".to_string(), Some(4.0)),
            ("m31".to_string(), Some(5.0)),
            ("m32".to_string(), Some(6.0)),
        ]
    );

    assert_eq!(matrix, Matrix3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
}

#[test]
fn test_row_matrix_is_byte_identical_to_vector() {
    let matrix = Matrix1x2::new(3.0, 4.0);
    let vector: Vector2 = bytemuck::cast(matrix);
    assert_eq!((vector.x, vector.y), (3.0, 4.0));

    fn round_trip_row<const N: usize>(components: [f64; N])
    where
        Const<N>: VectorDimension,
    {
        let vector = Vector::new(components);
        let matrix = Matrix::<f64, 1, N>::from_row_vector(vector);
        assert_eq!(bytemuck::bytes_of(&matrix), bytemuck::bytes_of(&vector));

        let back: Vector<f64, N> = *bytemuck::from_bytes(bytemuck::bytes_of(&matrix));
        assert_eq!(back, vector);
    }

    fn round_trip_column<const N: usize>(components: [f64; N])
    where
        Const<N>: VectorDimension,
    {
        let vector = Vector::new(components);
        let matrix = Matrix::<f64, N, 1>::from_column_vector(vector);
        assert_eq!(bytemuck::bytes_of(&matrix), bytemuck::bytes_of(&vector));

        let back: Vector<f64, N> = *bytemuck::from_bytes(bytemuck::bytes_of(&matrix));
        assert_eq!(back, vector);
    }

    round_trip_row([1.0, -2.0]);
    round_trip_row([1.0, -2.0, 0.5]);
    round_trip_row([1.0, -2.0, 0.5, 8.0]);
    round_trip_column([1.0, -2.0]);
    round_trip_column([1.0, -2.0, 0.5]);
    round_trip_column([1.0, -2.0, 0.5, 8.0]);
}

#[test]
fn test_host_constructors() {
    let matrix: Matrix<i32, 2, 3> = Matrix::from_fn(|row, col| (row * 3 + col) as i32);
    assert_eq!(matrix, Matrix2x3::new(0, 1, 2, 3, 4, 5));
    assert_eq!(Matrix::from([[0, 1, 2], [3, 4, 5]]), matrix);
    assert_eq!(<[[i32; 3]; 2]>::from(matrix), [[0, 1, 2], [3, 4, 5]]);

    let zeroed: Matrix4x4 = Matrix::default();
    assert!(zeroed.elems().all(|elem| *elem == 0.0));
    assert_eq!(zeroed, Matrix4x4::splat(0.0));
    assert_eq!(bytemuck::bytes_of(&zeroed), &[0u8; 128][..]);
}

#[test]
fn test_values_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Matrix4x4>();
    assert_send_sync::<Vector2>();

    let matrix = Matrix2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let copy = std::thread::spawn(move || matrix).join().unwrap();
    assert_eq!(copy, matrix);
}

#[cfg(feature = "approx")]
#[test]
fn test_approx() {
    let lhs = Matrix2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let rhs = Matrix2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0 + 1e-12);

    approx::assert_relative_eq!(lhs, rhs, max_relative = 1e-9);
    approx::assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-9);
    approx::assert_ulps_ne!(lhs, Matrix2x3::splat(0.0));

    let vector = Vector2::new([0.1 + 0.2, 1.0]);
    approx::assert_relative_eq!(vector, Vector2::new([0.3, 1.0]));
}
