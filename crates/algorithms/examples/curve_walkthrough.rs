use ecalg_algorithms::{
    baby_step_giant_step, mul_point, pollard_rho, CurveSession, ModularCurve, ModularParams,
    PointAddition, RealCurve, RealParams,
};
use ecalg_api::{CurveAlgebra, Point, Result};

fn main() -> Result<()> {
    // Chord and tangent over the reals
    let mut session = CurveSession::<RealCurve>::new(RealParams { a: -7.0, b: 10.0 })?;
    let p = Point::new(1.0, 2.0);
    let q = Point::new(3.0, 4.0);
    println!("P + Q = {}", session.add_points(&p, &q)?);
    println!("2P = {}", session.mul_point(2, &p)?);
    println!("roots: {:?}", session.curve().roots());

    // An edited abscissa is pulled back onto the curve
    session.set_parameters(RealParams { a: -3.0, b: 3.0 })?;
    println!("snapped: {:?}", session.snap_point((1.0, 2.0), (1.5, 2.0)));

    // The same operations modulo a prime
    let curve = ModularCurve::from_params(ModularParams { a: 2, b: 3, k: 97 })?;
    println!("#E(F_97) = {}", curve.curve_order());

    let g = Point::new(3, 6);
    let h = mul_point(&curve, 4, &g)?;
    println!("ord(G) = {}, 4G = {}", curve.subgroup_order(&g)?, h);

    let view = PointAddition::new(&curve, g, h)?;
    let data = view.plot_data()?;
    println!("G + 4G = {} ({} series)", view.result(), data.series.len());

    // Recover the scalar back from 4G
    let log = baby_step_giant_step(&curve, &g, &h)?;
    println!("BSGS: log = {} after {} steps", log.value, log.steps);
    match pollard_rho(&curve, &g, &h, &mut rand::thread_rng()) {
        Ok(log) => println!("rho: log = {} after {} steps", log.value, log.steps),
        Err(e) => println!("rho: {}", e),
    }

    Ok(())
}
