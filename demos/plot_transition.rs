// Example: plot_transition.rs
// Samples a counter that is retargeted mid-flight and draws the displayed value
// over time, showing that the second transition starts where the first one was.
//
// Usage:
//     cargo run --example plot_transition
//
// The chart is written to transition.svg in the working directory.

use std::error::Error;
use std::time::Duration;

use plotters::prelude::*;
use savings_lib::{ValueAnimator, TRANSITION_DURATION};

fn main() -> Result<(), Box<dyn Error>> {
    let step = Duration::from_millis(4);
    let retarget_at = Duration::from_millis(200);
    let end = retarget_at + TRANSITION_DURATION + Duration::from_millis(100);

    let mut counter = ValueAnimator::new(31_380.0);
    counter.set_target(93_960.0, Duration::ZERO);

    // Undisturbed first transition, for comparison
    let reference = counter.clone();

    let mut displayed = Vec::new();
    let mut undisturbed = Vec::new();
    let mut t = Duration::ZERO;
    while t <= end {
        if t == retarget_at {
            counter.set_target(50_000.0, t);
        }
        let ms = t.as_secs_f64() * 1000.0;
        displayed.push((ms, counter.value_at(t)));
        undisturbed.push((ms, reference.value_at(t)));
        t += step;
    }

    let root = SVGBackend::new("transition.svg", (1024, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Counter transition, retargeted after 200 ms",
            ("sans-serif", 26),
        )
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..end.as_secs_f64() * 1000.0, 25_000.0..100_000.0)?;

    chart
        .configure_mesh()
        .x_desc("Time (ms)")
        .y_desc("Displayed value (EUR)")
        .draw()?;

    chart.draw_series(vec![PathElement::new(undisturbed, BLUE.stroke_width(1))])?;
    chart.draw_series(vec![PathElement::new(displayed, RED.stroke_width(2))])?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (retarget_at.as_secs_f64() * 1000.0, 25_000.0),
            (retarget_at.as_secs_f64() * 1000.0, 100_000.0),
        ],
        BLACK.stroke_width(1),
    )))?;

    println!("Chart saved to transition.svg");
    Ok(())
}
