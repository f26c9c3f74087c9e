use anyhow::Result;

use rowvec::{vector, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let x = vector![1, 2, 3, 4];
    let y = vector![1, 2, 3, 4];

    // Display the vector
    x.display();

    // Get the shape of the vector
    println!("{:?}", x.shape());

    // Perform vector addition
    let result = x.checked_add(&y)?;
    result.display();

    // Perform dot product
    let dot_product = x.dot(&y)?;
    println!("{}", dot_product);

    println!("{}", "-".repeat(40));
    // Calculate the standard deviation
    println!("{}", x.standard_deviation()?);

    println!("{}", "-".repeat(40));
    // Calculate the covariance with another vector
    println!("{}", x.covariance(&y)?);

    // Calculate the mean
    println!("{}", x.mean()?);

    // Calculate the median
    println!("{}", x.median()?);

    // Calculate the 50th percentile
    println!("{}", x.quantile(0.5)?);

    // Calculate the variance
    println!("{}", x.variance()?);

    // Calculate the interquartile range
    println!("{}", x.interquartile_range()?);

    // Calculate the correlation with another vector
    println!("{}", x.correlation(&y)?);

    println!("{}", "-".repeat(40));
    // Fold several vectors into one elementwise sum
    let z = Vector::ones(4);
    let folded = x.vector_sum([&y, &z])?;
    folded.display();

    // Scale by a constant
    let scaled = x.scale(2.0);
    scaled.display();

    // Full descriptive summary
    println!("{}", x.describe()?);

    Ok(())
}
