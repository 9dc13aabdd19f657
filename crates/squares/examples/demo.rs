//! Walkthrough of square construction, rigid motions and the symmetry orbit.

use anyhow::Result;
use squares::{Point, Square, SquareSymmetries, SquareSymmetry, Symmetries};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    let a = Point::new("A", 1.0, 4.0);
    let b = Point::new("B", 1.0, 1.0);
    let c = Point::new("C", 4.0, 1.0);
    let d = Point::new("D", 4.0, 4.0);
    let p = Point::new("P", 0.3, 0.3);

    // Starting at the top-left corner is not canonical.
    if let Err(e) = Square::new(&[a.clone(), b.clone(), c.clone(), d.clone()]) {
        tracing::info!(error = %e, "rejected (A, B, C, D)");
    }
    let sq = Square::new(&[d, a, b, c])?;
    let trivial = Square::new(&[p.clone(), p.clone(), p.clone(), p])?;

    println!("{sq}");
    println!("{trivial}");
    // names show which point moved where
    println!("{}", sq.rotate_by(90));
    println!("{}", sq.translate_by(3.0, 1.4597));
    println!("{}", sq.swap_points(0, 3)?.swap_points(1, 2)?);

    let sym = SquareSymmetries;
    for (g, image) in SquareSymmetry::ALL.iter().zip(sym.symmetries_of(&sq)) {
        println!("{g:?}: {image}");
    }
    let moved = sq.translate_by(1.0, 0.0);
    tracing::info!(
        symmetric = sym.are_symmetric(&sq, &moved),
        "translated square against the original"
    );
    Ok(())
}
