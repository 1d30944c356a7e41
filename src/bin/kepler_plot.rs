//! Diagnostic plots for the Kepler solver. Writes PNGs into plots/.

use std::f64::consts::PI;

use plotters::prelude::*;

use sky_orbit::math::kepler::{mean_to_eccentric, KEPLER_MAX_ITERATIONS};

const N_POINTS: usize = 400;

pub fn main() {
    // E(M) curves: a straight line at e = 0, increasingly S-shaped as the
    // body lingers near apoapsis
    draw_anomaly_plot("plots/eccentric-anomaly.png", &[0.0, 0.3, 0.6, 0.9, 0.99]).unwrap();

    // Iteration counts at the stress eccentricity; this is the plot to look
    // at when fiddling with the iteration formula
    draw_iterations_plot("plots/iterations-e099.png", 0.99).unwrap();

    // Print the worst case so it shows up in the terminal too
    let mut worst = 0;
    for i in 0..=N_POINTS {
        let mean_anomaly = i as f64 * 2.0 * PI / N_POINTS as f64;
        let solution = mean_to_eccentric(mean_anomaly, 0.99).unwrap();
        assert!(solution.converged);
        worst = worst.max(solution.iterations);
    }
    println!(
        "Worst case at e = 0.99: {} iterations (cap {})",
        worst, KEPLER_MAX_ITERATIONS
    );
}

fn draw_anomaly_plot(name: &str, eccentricities: &[f64]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(name, (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0f32..(2.0 * PI as f32), 0.0f32..(2.0 * PI as f32))?;

    chart.configure_mesh().draw()?;

    for (idx, &e) in eccentricities.iter().enumerate() {
        let color = Palette99::pick(idx);
        chart.draw_series(LineSeries::new(
            (0..=N_POINTS).map(|i| {
                let mean_anomaly = i as f64 * 2.0 * PI / N_POINTS as f64;
                let solution = mean_to_eccentric(mean_anomaly, e).unwrap();
                (mean_anomaly as f32, solution.eccentric_anomaly as f32)
            }),
            &color,
        ))?;
    }

    Ok(())
}

fn draw_iterations_plot(name: &str, e: f64) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(name, (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0f32..(2.0 * PI as f32), 0.0f32..20.0f32)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(
        (0..=N_POINTS).map(|i| {
            let mean_anomaly = i as f64 * 2.0 * PI / N_POINTS as f64;
            let solution = mean_to_eccentric(mean_anomaly, e).unwrap();
            (mean_anomaly as f32, solution.iterations as f32)
        }),
        &RED,
    ))?;

    Ok(())
}
