//! Print the SVG path data of a Bloch sphere frame
//!
//! Usage: `cargo run -p bloch-scene --example render_paths [config.json]`
//! Set `RUST_LOG=debug` to see the layout steps.

use bloch_core::Axis;
use bloch_scene::{BlochConfig, BlochSphere, Scene};
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BlochConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => BlochConfig::default(),
    };

    let mut sphere = BlochSphere::from_config(config)?;
    print_scene("initial", &sphere.scene()?);

    sphere.rotate_state(Axis::X, 3.0 * PI / 5.0)?;
    print_scene("after RX(3π/5)", &sphere.scene()?);

    let drag = sphere.begin_drag();
    sphere.drag_to(&drag, 40.0, 25.0);
    print_scene("after drag", &sphere.scene()?);

    Ok(())
}

fn print_scene(title: &str, scene: &Scene) {
    println!("== {} ({}) ==", title, scene.state);
    println!("sphere:      {}", scene.sphere);
    println!("graticule:   {}", scene.graticule);
    for axis in &scene.axes {
        println!(
            "{}-axis:      {}  label {:?} at ({:.2}, {:.2})",
            axis.axis, axis.line, axis.label.text, axis.label.position.x, axis.label.position.y
        );
    }
    println!("state:       {}", scene.state_line);
    println!("xy-proj:     {}", scene.xy_projection);
    println!("z-proj:      {}", scene.z_projection);
    println!("theta arc:   {}", scene.theta_arc);
    println!("phi arc:     {}", scene.phi_arc);
    println!();
}
