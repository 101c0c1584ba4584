//! Times a few adaptive integration calls with the elapsed-time probe and
//! reports the work counter after each one.

use std::f64::consts::PI;

use umbra_quad::Integrator;
use umbra_util::{Timer, hostname};

fn main() -> Result<(), umbra_quad::Error> {
    println!("profiling adaptive quadrature on {}", hostname());

    let mut integrator = Integrator::new(1000)?;

    let cases: [(&str, fn(f64) -> f64, f64, f64); 3] = [
        ("sin(x) over [0, pi]", f64::sin, 0.0, PI),
        ("exp(-x^2) over [-4, 4]", |x| (-x * x).exp(), -4.0, 4.0),
        ("sin(10x) over [0, 10]", |x| (10.0 * x).sin(), 0.0, 10.0),
    ];

    for (label, f, from, to) in cases {
        let timer = Timer::new();
        let value = integrator.integrate(f, from, to, 1e-12, 0.0)?;
        println!(
            "{label}: {value:.12} in {timer}, {} intervals used so far",
            integrator.num_intervals()
        );
    }

    Ok(())
}
