use super::*;
use crate::error::LinealError;

fn sample() -> Matrix {
    // [[1, 2, 3],
    //  [4, 5, 6]]
    Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("rectangular input")
}

fn square() -> Matrix {
    Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular input")
}

#[test]
fn test_from_rows() {
    let m = sample();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    assert_eq!(m.len(), 6);
    assert!(!m.is_empty());
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_from_rows_ragged() {
    let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert_eq!(
        result.unwrap_err(),
        LinealError::RaggedRows {
            row: 1,
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn test_from_rows_empty() {
    assert_eq!(
        Matrix::from_rows(vec![]).unwrap_err(),
        LinealError::EmptyInput
    );
    assert_eq!(
        Matrix::from_rows(vec![vec![]]).unwrap_err(),
        LinealError::EmptyInput
    );
    // An empty first row makes any longer row ragged, matching the
    // first-row-sets-the-standard rule.
    assert_eq!(
        Matrix::from_rows(vec![vec![], vec![1.0]]).unwrap_err(),
        LinealError::RaggedRows {
            row: 1,
            expected: 0,
            got: 1,
        }
    );
}

#[test]
fn test_from_columns() {
    let m = Matrix::from_columns(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]])
        .expect("rectangular input");
    assert!(m.approx_eq(&sample()).expect("same shape"));
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("correct length");
    assert!(m.approx_eq(&sample()).expect("same shape"));
}

#[test]
fn test_from_vec_errors() {
    assert_eq!(
        Matrix::from_vec(0, 3, vec![]).unwrap_err(),
        LinealError::EmptyInput
    );
    assert_eq!(
        Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err(),
        LinealError::DimensionMismatch {
            expected: "4".to_string(),
            actual: "3".to_string(),
        }
    );
}

#[test]
fn test_zeros_ones_eye() {
    let z = Matrix::zeros(2, 3).expect("non-zero shape");
    assert!(z.as_slice().iter().all(|&x| x == 0.0));
    assert!(z.is_zero());

    let o = Matrix::ones(2, 2).expect("non-zero shape");
    assert_eq!(o.norm(), 2.0);

    let eye = Matrix::eye(3).expect("non-zero shape");
    assert_eq!(eye.get(0, 0), Ok(1.0));
    assert_eq!(eye.get(1, 1), Ok(1.0));
    assert_eq!(eye.get(0, 1), Ok(0.0));

    assert_eq!(Matrix::eye(0).unwrap_err(), LinealError::EmptyInput);
}

#[test]
fn test_get_no_wraparound() {
    let m = sample();
    assert_eq!(m.get(1, 2), Ok(6.0));
    assert_eq!(
        m.get(2, 0).unwrap_err(),
        LinealError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        m.get(0, 3).unwrap_err(),
        LinealError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn test_get_flat_wraparound() {
    let m = sample();
    assert_eq!(m.get_flat(0), Ok(1.0));
    assert_eq!(m.get_flat(4), Ok(5.0));
    assert_eq!(m.get_flat(-1), Ok(6.0));
    assert_eq!(m.get_flat(-6), Ok(1.0));
    assert_eq!(
        m.get_flat(6).unwrap_err(),
        LinealError::IndexOutOfRange { index: 6, len: 6 }
    );
    assert_eq!(
        m.get_flat(-7).unwrap_err(),
        LinealError::IndexOutOfRange { index: -7, len: 6 }
    );
}

#[test]
fn test_row_and_column() {
    let m = sample();
    let row = m.row(1).expect("in range");
    assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
    let col = m.column(1).expect("in range");
    assert_eq!(col.as_slice(), &[2.0, 5.0]);

    assert!(m.row(2).is_err());
    assert!(m.column(3).is_err());
}

#[test]
fn test_rows_and_columns_iterators() {
    let m = sample();
    let rows: Vec<Vec<f64>> = m.rows().map(|r| r.as_slice().to_vec()).collect();
    assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

    let cols: Vec<Vec<f64>> = m.columns().map(|c| c.as_slice().to_vec()).collect();
    assert_eq!(cols, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
}

#[test]
fn test_flat_traversal_orders() {
    let m = sample();
    let row_major: Vec<f64> = m.iter().collect();
    let row_major_rev: Vec<f64> = m.iter().rev().collect();
    let col_major: Vec<f64> = m.iter_col_major().collect();
    let col_major_rev: Vec<f64> = m.iter_col_major().rev().collect();

    assert_eq!(row_major, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(row_major_rev, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    assert_eq!(col_major, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(col_major_rev, vec![6.0, 3.0, 5.0, 2.0, 4.0, 1.0]);
}

#[test]
fn test_add() {
    let a = square();
    let b = Matrix::from_rows(vec![vec![2.0, 3.0], vec![4.0, 5.0]]).expect("rectangular input");
    let sum = a.add(&b).expect("same shape");
    let expected =
        Matrix::from_rows(vec![vec![3.0, 5.0], vec![7.0, 9.0]]).expect("rectangular input");
    assert!(sum.approx_eq(&expected).expect("same shape"));
}

#[test]
fn test_add_shape_mismatch() {
    let a = square();
    let b = sample();
    assert_eq!(
        a.add(&b).unwrap_err(),
        LinealError::DimensionMismatch {
            expected: "2x2".to_string(),
            actual: "2x3".to_string(),
        }
    );
}

#[test]
fn test_scalar_broadcast() {
    let m = square();
    assert_eq!(m.add_scalar(1.0).as_slice(), &[2.0, 3.0, 4.0, 5.0]);
    assert_eq!(m.sub_scalar(1.0).as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(m.mul_scalar(2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(m.div_scalar(2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn test_sub() {
    let a = square();
    let diff = a.sub(&a).expect("same shape");
    assert!(diff.is_zero());
}

#[test]
fn test_is_zero_respects_tolerance() {
    // A positive norm below tolerance still counts as zero.
    let tiny = Matrix::from_rows(vec![vec![1e-13]]).expect("rectangular input");
    assert!(tiny.norm() > 0.0);
    assert!(tiny.is_zero());
    assert!(!tiny.with_tolerance(0.0).is_zero());
}

#[test]
fn test_matmul() {
    let a = square();
    let product = a.matmul(&a).expect("compatible dimensions");
    let expected =
        Matrix::from_rows(vec![vec![7.0, 10.0], vec![15.0, 22.0]]).expect("rectangular input");
    assert!(product.approx_eq(&expected).expect("same shape"));
}

#[test]
fn test_matmul_shapes() {
    let a = sample(); // 2x3
    let b = sample().transpose(); // 3x2
    let product = a.matmul(&b).expect("compatible dimensions");
    assert_eq!(product.shape(), (2, 2));
}

#[test]
fn test_matmul_incompatible() {
    let a = sample(); // 2x3
    assert_eq!(
        a.matmul(&a).unwrap_err(),
        LinealError::IncompatibleDimensions {
            left: "2x3".to_string(),
            right: "2x3".to_string(),
        }
    );
}

#[test]
fn test_matvec() {
    let m = square();
    let v = Vector::from_slice(&[5.0, 6.0]).expect("non-empty input");
    let product = m.matvec(&v).expect("compatible dimensions");
    assert_eq!(product.as_slice(), &[17.0, 39.0]);
}

#[test]
fn test_matvec_incompatible() {
    let m = sample(); // 2x3
    let v = Vector::from_slice(&[1.0, 2.0]).expect("non-empty input");
    assert!(m.matvec(&v).is_err());
}

#[test]
fn test_transpose() {
    let m = sample();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert!(t.transpose().approx_eq(&m).expect("same shape"));
}

#[test]
fn test_as_vector() {
    let row = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).expect("rectangular input");
    let v = row.as_vector().expect("single row");
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);

    let col = row.transpose();
    let w = col.as_vector().expect("single column");
    assert_eq!(w.as_slice(), &[1.0, 2.0, 3.0]);

    assert_eq!(
        square().as_vector().unwrap_err(),
        LinealError::NotVectorConvertible { rows: 2, cols: 2 }
    );
}

#[test]
fn test_to_scalar() {
    let unit = Matrix::from_rows(vec![vec![42.0]]).expect("rectangular input");
    assert_eq!(unit.to_scalar(), Ok(42.0));
    assert_eq!(
        square().to_scalar().unwrap_err(),
        LinealError::NotScalarConvertible {
            size: "2x2".to_string(),
        }
    );
}

#[test]
fn test_approx_eq() {
    let a = square();
    let b = square().add_scalar(1e-13);
    assert_eq!(a.approx_eq(&b), Ok(true));
    assert_eq!(a.clone().with_tolerance(1e-14).approx_eq(&b), Ok(false));
    assert!(a.approx_eq(&sample()).is_err());
}

#[test]
fn test_norm() {
    // sqrt(1 + 4 + 9 + 16) = sqrt(30)
    let m = square();
    assert!((m.norm() - 30.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_index_sugar() {
    let m = sample();
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(1, 2)], 6.0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_index_sugar_panics() {
    let m = sample();
    let _ = m[(2, 0)];
}

#[test]
fn test_debug_rendering() {
    let m = square();
    assert_eq!(
        format!("{m:?}"),
        "Matrix(((1.000, 2.000,), (3.000, 4.000,)))"
    );
}

#[test]
fn test_display_rendering() {
    let m = square();
    assert_eq!(format!("{m}"), "Matrix((1.0, ...), ..., (..., 4.0))[2x2]");
}
