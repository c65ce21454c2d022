//! Estimates a small Markov process from three observed trajectories of
//! an office routine and prints the resulting transition probabilities.

use markov_estimator::TransitionEstimator;

fn main() -> markov_estimator::Result<()> {
    let mut estimator = TransitionEstimator::new();

    let episodes = vec![
        vec![
            "Home", "Coffee", "Coffee", "Chat", "Chat", "Coffee", "Computer", "Computer", "Home",
        ],
        vec![
            "Computer", "Computer", "Chat", "Chat", "Coffee", "Computer", "Computer", "Computer",
        ],
        vec!["Home", "Home", "Coffee", "Chat", "Computer", "Coffee", "Coffee"],
    ];

    for episode in episodes {
        estimator.add_episode(episode);
    }

    estimator.print_summary()?;

    println!("\n{}", "=".repeat(60));
    println!(
        "\nP(Home → Coffee) = {:.3}",
        estimator.transition_probability(&"Home", &"Coffee")
    );
    println!(
        "P(Coffee → Chat) = {:.3}",
        estimator.transition_probability(&"Coffee", &"Chat")
    );

    Ok(())
}
