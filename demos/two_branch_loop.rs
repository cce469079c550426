//! Two-Branch Loop
//!
//! This example animates a small chart that forks one step into three and
//! loops back once two of the branches are active.
//!
//! Key concepts:
//! - Building a model in code
//! - Guarded transitions
//! - Simultaneous firing within one tick
//! - Reading tick reports and history
//!
//! Run with: cargo run --example two_branch_loop

use grafcet_animator::animator::Animator;
use grafcet_animator::builder::{all_active, ModelBuilder, TransitionBuilder};
use grafcet_animator::validation::model_issues;

fn main() {
    println!("=== Two-Branch Loop Example ===\n");

    let model = ModelBuilder::new()
        .initial_step(1)
        .step(2)
        .step(3)
        .step(4)
        .integer("x", Some(5))
        .boolean("toto", Some(true))
        .transition(TransitionBuilder::new(1).requires([1]).executes([2, 3, 4]))
        .transition(
            TransitionBuilder::new(2)
                .requires([2])
                .executes([1])
                .when(all_active([3, 4])),
        )
        .transition(TransitionBuilder::new(3).requires([3, 4]))
        .build()
        .unwrap();

    let issues = model_issues(&model);
    println!("Model issues: {}", issues.len());

    let mut animator = Animator::new(model).unwrap();
    let active: Vec<_> = animator.active_steps().collect();
    println!("Initial active steps: {:?}", active);
    println!(
        "x = {:?}, toto = {:?}",
        animator.integer_variable("x"),
        animator.boolean_variable("toto")
    );

    for _ in 0..4 {
        let report = animator.tick().unwrap();
        let active: Vec<_> = animator.active_steps().collect();
        println!(
            "Tick {}: fired {:?}, now active {:?}",
            report.tick, report.fired, active
        );
    }

    println!("\nRecorded ticks: {}", animator.history().len());
    println!("\n=== Example Complete ===");
}
