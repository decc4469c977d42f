use perceptron::{rain_dataset, PerceptronTrainer, TrainConfig};
use perceptron::train::FnObserver;

fn main() -> perceptron::Result<()> {
    let data = rain_dataset();
    let mut trainer = PerceptronTrainer::new(TrainConfig::default())?;

    let report = trainer.fit(&data, FnObserver(|stats: &perceptron::EpochStats| {
        println!(
            "Epoch {}: errors = {} weight = {:.4} bias = {:.4}",
            stats.epoch, stats.total_error, stats.weight, stats.bias
        );
    }))?;

    let umbrella = report.predictor;
    println!("Raining (1)?     carry umbrella: {}", umbrella.predict(1.0));
    println!("Not raining (0)? carry umbrella: {}", umbrella.predict(0.0));
    Ok(())
}
