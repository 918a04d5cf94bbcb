use gmat::{Matrix, MatrixError, MatrixIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, columns: usize) -> Matrix<i64> {
    let data = (0..rows * columns).map(|_| rng.gen_range(-5..=5)).collect();
    Matrix::from_vec(data, rows, columns).unwrap()
}

fn random_shape(rng: &mut StdRng) -> (usize, usize) {
    (rng.gen_range(0..6), rng.gen_range(0..6))
}

#[test]
fn test_flat_nested_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let (rows, columns) = random_shape(&mut rng);
        let m = random_matrix(&mut rng, rows, columns);
        let flat = m.as_slice().to_vec();

        let rebuilt = Matrix::from_rows(m.to_rows()).unwrap();
        // Shapes without rows come back as 0x0
        assert_eq!(rebuilt.into_vec(), flat);
    }
}

#[test]
fn test_double_transpose_is_identity() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let (rows, columns) = random_shape(&mut rng);
        let m = random_matrix(&mut rng, rows, columns);
        let t = m.transpose();
        assert_eq!(t.dimensions(), (columns, rows));
        assert_eq!(t.transpose(), m);
    }
}

#[test]
fn test_identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let (rows, columns) = random_shape(&mut rng);
        let m = random_matrix(&mut rng, rows, columns);
        assert_eq!(Matrix::identity(rows).multiply(&m), Ok(m.clone()));
        assert_eq!(m.multiply(&Matrix::identity(columns)), Ok(m.clone()));
    }
}

#[test]
fn test_insert_remove_round_trip() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        let rows = rng.gen_range(1..6);
        let columns = rng.gen_range(1..6);
        let original = random_matrix(&mut rng, rows, columns);

        let mut m = original.clone();
        let row = rng.gen_range(0..=rows);
        let values: Vec<i64> = (0..columns).map(|_| rng.gen()).collect();
        m.insert_row(values.clone(), row).unwrap();
        assert_eq!(m.len(), (rows + 1) * columns);
        assert_eq!(m.remove_row(row), Ok(values));
        assert_eq!(m, original);

        let column = rng.gen_range(0..=columns);
        let values: Vec<i64> = (0..rows).map(|_| rng.gen()).collect();
        m.insert_column(values.clone(), column).unwrap();
        assert_eq!(m.len(), rows * (columns + 1));
        assert_eq!(m.column(column), Ok(values.clone()));
        assert_eq!(m.remove_column(column), Ok(values));
        assert_eq!(m, original);
    }
}

#[test]
fn test_failed_edits_leave_matrix_unchanged() {
    let mut m = Matrix::from([[1, 2], [3, 4]]);
    let before = m.clone();

    assert!(m.insert_row(vec![1], 0).is_err());
    assert!(m.insert_row(vec![1, 2], 3).is_err());
    assert!(m.insert_column(vec![1, 2, 3], 0).is_err());
    assert!(m.remove_row(2).is_err());
    assert!(m.remove_column(5).is_err());
    assert!(m
        .replace_range(MatrixIndex::new(0, 1)..MatrixIndex::new(1, 1), vec![9])
        .is_err());
    assert!(m.set_row(0, vec![]).is_err());

    assert_eq!(m, before);
    assert_eq!(m.len(), m.row_count() * m.column_count());
}

#[test]
fn test_determinant_properties() {
    let mut rng = StdRng::seed_from_u64(5);
    for size in 1..=4 {
        for _ in 0..10 {
            let a = random_matrix(&mut rng, size, size);
            let b = random_matrix(&mut rng, size, size);

            let det_a = a.determinant().unwrap();
            assert_eq!(a.transpose().determinant(), Ok(det_a));

            let product = a.multiply(&b).unwrap();
            assert_eq!(
                product.determinant(),
                Ok(det_a * b.determinant().unwrap())
            );

            // A * adj(A) = det(A) * I
            let adjugate = a.adjugate().unwrap();
            assert_eq!(
                a.multiply(&adjugate),
                Ok(Matrix::identity(size).scale(det_a))
            );
        }
    }
}

#[test]
fn test_single_element_determinant() {
    for x in [-3i64, 0, 7] {
        assert_eq!(Matrix::from([[x]]).determinant(), Ok(x));
    }
}

#[test]
fn test_algebra_preconditions() {
    let a = Matrix::filled(1i64, 2, 3);
    let b = Matrix::filled(1i64, 3, 2);

    assert!(matches!(a.try_add(&b), Err(MatrixError::DimensionMismatch { .. })));
    assert!(matches!(a.dot(&b), Err(MatrixError::DimensionMismatch { .. })));
    assert_eq!(a.multiply(&b).map(|m| m.dimensions()), Ok((2, 2)));
    assert!(matches!(a.determinant(), Err(MatrixError::NotSquare { .. })));
}

#[test]
fn test_random_positions_are_valid() {
    let mut rng = StdRng::seed_from_u64(6);
    let m = Matrix::filled(0u8, 4, 7);
    for _ in 0..200 {
        let index = m.random_index_with(&mut rng).unwrap();
        assert!(m.get(index).is_ok());
    }
}

#[test]
fn test_json_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let rows = rng.gen_range(1..5);
        let columns = rng.gen_range(1..5);
        let m = random_matrix(&mut rng, rows, columns);
        let json = serde_json::to_string(&m).unwrap();
        let decoded: Matrix<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, m);
    }
}
