//! Smoke test: push one sample through a single layer and print both sides.

use tejer::nn::Layer;
use tejer::{Matrix, Result};

fn main() -> Result<()> {
    let mut layer = Layer::<3, 2>::new();

    println!("Input size:  {}", Layer::<3, 2>::INPUT_SIZE);
    println!("Output size: {}", Layer::<3, 2>::OUTPUT_SIZE);

    let input = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0])?;
    println!("\nInput [1x3]:\n{input}");

    let output = layer.forward(&input)?;
    println!("Output [1x2]:\n{output}");

    Ok(())
}
