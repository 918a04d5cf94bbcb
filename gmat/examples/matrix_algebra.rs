//! Build a matrix, edit its shape, and run the cofactor-based algebra on it

use gmat::{Matrix, MatrixIndex, PrintConfig};
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut matrix = Matrix::from_vec(vec![0.0, 9.0, 3.0, 2.0, 0.0, 4.0, 3.0, 7.0, 0.0], 3, 3)?;
    println!("Matrix:\n{matrix}");

    // Grow to 4x4 and back
    matrix.append_row(vec![1.0, 1.0, 1.0])?;
    matrix.append_column(vec![5.0, 0.0, 2.0, 1.0])?;
    println!("Grown to {}x{}:\n{matrix}", matrix.row_count(), matrix.column_count());
    println!("Determinant: {}", matrix.determinant()?);
    matrix.remove_row(3)?;
    matrix.remove_column(3)?;

    let start = Instant::now();
    let inverse = matrix.inverse()?;
    println!("Inverse computed in {:?}", start.elapsed());
    println!("{}", inverse.display_with(PrintConfig::default().with_precision(4)));

    let product = matrix.multiply(&inverse)?;
    println!(
        "matrix * inverse == identity: {}",
        product.approx_eq(&Matrix::identity(3), 1e-12)
    );

    let json = serde_json::to_string(&matrix)?;
    println!("Encoded: {json}");

    if let Some(index) = matrix.random_index() {
        println!("Random cell {index} = {}", matrix[index]);
    }
    println!("Last cell {} = {}", MatrixIndex::new(2, 2), matrix[(2, 2)]);
    Ok(())
}
