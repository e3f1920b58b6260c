//! Demonstration: build a 2-DOF planar arm and export it as JSON + URDF

use std::fs;

use glam::Vec3;
use tracing::info;
use urdfgen_core::{ExportError, Joint, Link, Robot};

/// Build the hardcoded 2-DOF planar arm model
fn create_robot_model() -> Robot {
    let mut arm = Robot::new("planar_2dof_arm");

    arm.add_component(Link::new("base_link", 10.0, [1.0, 1.0, 1.0], Vec3::ZERO));
    arm.add_component(Link::new(
        "link_1",
        5.0,
        [0.5, 0.5, 0.5],
        Vec3::new(0.5, 0.0, 0.0),
    ));
    arm.add_component(Link::new(
        "link_2",
        3.0,
        [0.3, 0.3, 0.3],
        Vec3::new(0.4, 0.0, 0.0),
    ));

    // Both joints rotate around the Z axis.
    arm.add_component(Joint::revolute(
        "shoulder_joint",
        "base_link",
        "link_1",
        Vec3::Z,
        -2.5,
        2.5,
    ));
    arm.add_component(Joint::revolute(
        "elbow_joint",
        "link_1",
        "link_2",
        Vec3::Z,
        -1.5,
        1.5,
    ));

    arm
}

fn main() -> Result<(), ExportError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urdfgen=info,urdfgen_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let robot = create_robot_model();
    info!(
        robot = robot.name(),
        components = robot.len(),
        "model created"
    );

    fs::create_dir_all("output")?;

    let json_path = "output/robot_config.json";
    robot.save_json(json_path)?;
    info!(path = json_path, "saved JSON snapshot");

    let urdf_path = "output/planar_arm.urdf";
    robot.generate_urdf(urdf_path)?;
    info!(path = urdf_path, "generated URDF");

    Ok(())
}
