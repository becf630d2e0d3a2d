use rigidmotion2d::body::{BasicBody, Body, BodyList};
use rigidmotion2d::config::MotionConfig;
use rigidmotion2d::velocity::list_velocity;
use rigidmotion2d::{RigidTransform, RigidTransformList};

const CONFIG: &str = r#"{
    "bodies": [
        {
            "type": "pitchup",
            "params": { "pitch_rate": 0.2, "axis": [-0.5, 0.0], "onset": 0.5, "total_angle": 0.7853981633974483 },
            "ramp": { "kind": "log_cosh", "sharpness": 11.0 }
        },
        {
            "type": "switched", "t_on": 1.0, "t_off": 3.0,
            "inner": { "type": "pitch_heave", "params": { "reduced_frequency": 0.5, "heave_amplitude": 0.2 } }
        }
    ]
}"#;

fn plate(n: usize, offset: f64) -> anyhow::Result<BasicBody> {
    let x = (0..n)
        .map(|i| -0.5 + i as f64 / (n - 1) as f64)
        .collect::<Vec<_>>();
    let y = vec![offset; n];
    Ok(BasicBody::new(x, y)?)
}

fn main() -> anyhow::Result<()> {
    let mut bodies: BodyList = vec![plate(11, 0.0)?, plate(5, 0.0)?].into();
    let mut motions = MotionConfig::from_json(CONFIG)?.build()?;

    let dt = 0.05;
    println!("t,body,xc,yc,angle,u_le,v_le,u_te,v_te");
    for step in 0..=80 {
        let t = step as f64 * dt;
        let states = motions.update_all(&bodies, t)?;
        let transforms: RigidTransformList = states.iter().map(RigidTransform::from).collect();
        transforms.apply(&mut bodies)?;
        let (u, v) = list_velocity(&bodies, &motions, t)?;

        if step % 10 != 0 {
            continue;
        }
        for (i, body) in bodies.iter().enumerate() {
            let range = bodies.range(i);
            let c = body.centroid();
            println!(
                "{:.3},{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
                t,
                i,
                c.x,
                c.y,
                body.angle(),
                u[range.start],
                v[range.start],
                u[range.end - 1],
                v[range.end - 1],
            );
        }
    }

    let (x, y) = bodies.collect();
    eprintln!("\nFinal surface points: {}", x.len());
    eprintln!("{}", bodies[0]);
    eprintln!(
        "Leading edge of the first body: ({:.4}, {:.4})",
        x[0], y[0]
    );
    Ok(())
}
