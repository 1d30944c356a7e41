use clap::Parser;

use sky_orbit::astro::{OrbitalElements, ThieleInnes};
use sky_orbit::Error;

/// Prints the derived geometry of an orbit: shape quantities, Thiele-Innes
/// constants, and (optionally) the position at a given mean anomaly.
#[derive(Debug, Parser)]
struct Args {
    /// Semimajor axis, in whatever length unit you like
    semimajor_axis: f64,
    /// Eccentricity, in [0, 1)
    eccentricity: f64,
    /// Inclination, degrees
    inclination: f64,
    /// Longitude of the ascending node, degrees
    ascending_node: f64,
    /// Argument of periapsis, degrees
    arg_periapse: f64,
    /// Mean anomaly (radians) at which to evaluate the position
    #[arg(short, long)]
    mean_anomaly: Option<f64>,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let elements = OrbitalElements::new(
        args.semimajor_axis,
        args.eccentricity,
        args.inclination.to_radians(),
        args.ascending_node.to_radians(),
        args.arg_periapse.to_radians(),
    )?;

    println!("Orbit geometry");
    println!("- Semimajor axis: {}", elements.semimajor_axis());
    println!("- Semiminor axis: {}", elements.semiminor_axis());
    println!("- Eccentricity: {}", elements.eccentricity());
    println!("- Periapsis distance: {}", elements.periapsis());
    println!("- Apoapsis distance: {}", elements.apoapsis());
    println!("- Inclination: {} deg", elements.inclination().to_degrees());
    println!("- LAN: {} deg", elements.long_asc_node().to_degrees());
    println!(
        "- Argument of periapsis: {} deg",
        elements.arg_periapse().to_degrees()
    );

    let ti = ThieleInnes::from_elements(&elements);
    println!();
    println!("Thiele-Innes constants");
    println!("- A: {:+.6}", ti.a);
    println!("- B: {:+.6}", ti.b);
    println!("- F: {:+.6}", ti.f);
    println!("- G: {:+.6}", ti.g);
    println!(
        "- det (= cos i): {:+.6} vs {:+.6}",
        ti.determinant(),
        elements.inclination().cos()
    );

    println!();
    match elements.line_of_nodes() {
        Some((ascending, descending)) => {
            println!("Line of nodes (orbital-plane coordinates)");
            println!("- Ascending node: ({:.6}, {:.6})", ascending.x, ascending.y);
            println!(
                "- Descending node: ({:.6}, {:.6})",
                descending.x, descending.y
            );
        }
        None => println!("Line of nodes: undefined (orbit is face-on)"),
    }

    if let Some(mean_anomaly) = args.mean_anomaly {
        let (point, solution) = elements.position_at_mean(mean_anomaly);
        let projected = ti.project(point);

        println!();
        println!("Position at mean anomaly {} rad", mean_anomaly);
        println!(
            "- Eccentric anomaly: {} rad ({} iterations{})",
            solution.eccentric_anomaly,
            solution.iterations,
            if solution.converged {
                ""
            } else {
                ", NOT converged"
            }
        );
        println!("- Orbital plane: ({:.6}, {:.6})", point.x, point.y);
        println!("- On the sky: ({:.6}, {:.6})", projected.xi, projected.eta);
    }

    Ok(())
}
