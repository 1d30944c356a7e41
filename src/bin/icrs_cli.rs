use clap::Parser;

use sky_orbit::astro::NormalTriad;

/// Prints the local normal triad [p, q, r] at a sky position, the frame in
/// which orbital motion of a source at (alpha, delta) is expressed.
#[derive(Debug, Parser)]
struct Args {
    /// Right ascension alpha, degrees
    right_ascension: f64,
    /// Declination delta, degrees
    declination: f64,
}

fn main() {
    let args = Args::parse();

    let triad = NormalTriad::from_icrs(
        args.right_ascension.to_radians(),
        args.declination.to_radians(),
    );

    println!(
        "Normal triad at alpha = {} deg, delta = {} deg",
        args.right_ascension, args.declination
    );
    println!(
        "- p (east):  ({:+.6}, {:+.6}, {:+.6})",
        triad.p.x, triad.p.y, triad.p.z
    );
    println!(
        "- q (north): ({:+.6}, {:+.6}, {:+.6})",
        triad.q.x, triad.q.y, triad.q.z
    );
    println!(
        "- r (line of sight): ({:+.6}, {:+.6}, {:+.6})",
        triad.r.x, triad.r.y, triad.r.z
    );
}
