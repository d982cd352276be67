use perceptron_lab::{Dataset, Perceptron, train_until_converged};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let xor = Dataset::logical_xor();
    let mut unit = Perceptron::random(2, 0.0, 0.5);

    let report = train_until_converged(&mut unit, &xor.inputs, &xor.labels, 0.1, 1000)?;

    // No single line separates {01, 10} from {00, 11}.
    println!("converged: {}", report.converged());
    println!("last outputs {:?} vs labels {:?}", report.last_outputs, xor.labels);
    println!("final unit: {}", serde_json::to_string_pretty(&unit)?);

    Ok(())
}
