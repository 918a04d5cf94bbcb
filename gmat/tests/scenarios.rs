use gmat::Matrix;

#[test]
fn test_transpose_square() {
    let m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
    assert_eq!(m.transpose(), Matrix::from_vec(vec![1, 3, 2, 4], 2, 2).unwrap());
}

#[test]
fn test_elementwise_sum() {
    let a = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
    let b = Matrix::from_vec(vec![5, 6, 7, 8], 2, 2).unwrap();
    assert_eq!(a.try_add(&b).unwrap().into_vec(), vec![6, 8, 10, 12]);
}

#[test]
fn test_identity_layout() {
    let identity = Matrix::<i32>::identity(3);
    assert_eq!(identity.dimensions(), (3, 3));
    assert_eq!(identity.into_vec(), vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
}

#[test]
fn test_cofactor_and_adjugate() {
    let m = Matrix::from_rows(vec![vec![0, 9, 3], vec![2, 0, 4], vec![3, 7, 0]]).unwrap();
    assert_eq!(
        m.cofactor().unwrap().to_rows(),
        vec![vec![-28, 12, 14], vec![21, -9, 27], vec![36, 6, -18]]
    );
    assert_eq!(
        m.adjugate().unwrap().to_rows(),
        vec![vec![-28, 21, 36], vec![12, -9, 6], vec![14, 27, -18]]
    );
}

#[test]
fn test_four_by_four_determinant() {
    let m = Matrix::from_vec(
        vec![1, 3, 5, 9, 1, 3, 1, 7, 4, 3, 9, 7, 5, 2, 0, 9],
        4,
        4,
    )
    .unwrap();
    assert_eq!(m.determinant(), Ok(-376));
}

#[test]
fn test_matrix_vector_product() {
    let m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
    assert_eq!(m.transform(&[5, 6]), Ok(vec![17, 39]));
}
