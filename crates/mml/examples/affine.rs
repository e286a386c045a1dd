//! Builds a small camera pipeline and prints where a few points end up.
//!
//! Run with `RUST_LOG=trace` to see diagnostics from the library.

use std::f32::consts::FRAC_PI_4;

use mml::{
    perspective_projection, rotation_y, translation, vec2, vec3, Frustum, HVec3f, Transform3f,
    Vec3f,
};

fn main() -> anyhow::Result<()> {
    mml::init_logger!();
    log::info!("mml {}", mml::version());

    let model = Transform3f::identity()
        .translate(vec3(0.0, 0.0, -5.0))
        .rotate(FRAC_PI_4, Vec3f::Y)
        .scale(vec3(2.0, 2.0, 2.0));
    let view = rotation_y(-FRAC_PI_4) * translation(vec3(0.0, -1.0, 0.0));
    let projection = perspective_projection(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0)?;
    let mvp = projection * view * model;

    for point in [Vec3f::ZERO, Vec3f::X, Vec3f::Y, Vec3f::Z] {
        let clip = mvp * HVec3f::from_vector(point);
        let w = clip.w();
        let ndc = clip.truncate::<3>() / w;
        log::info!("{point} -> clip {clip} -> ndc {ndc}");
    }

    let ortho = Frustum::from_edges(vec3(vec2(-4.0, 4.0), vec2(-3.0, 3.0), vec2(0.1, 10.0)))
        .orthographic()?;
    log::info!("orthographic projection: {:?}", ortho.as_matrix());

    // Degenerate bounds are reported as errors.
    if let Err(e) = perspective_projection(1.0f32, 1.0, -1.0, 1.0, 1.0, 100.0) {
        log::warn!("{e}");
    }

    let moved = model.transform_point(vec3(1.0, 1.0, 1.0));
    println!("{moved}");
    Ok(())
}
