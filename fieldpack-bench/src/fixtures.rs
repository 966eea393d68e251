//! Shared benchmark payloads.

use fieldpack::{BufferBuilder, Color3, Result, Schema, Transform, Vector3};

/// Packs a representative mixed-field snapshot: identity text, tag list,
/// state scalars, and a placement.
pub fn mixed_snapshot() -> Result<(Vec<u8>, Schema)> {
    let builder = BufferBuilder::new()
        .string("entity_0042")?
        .string_list(["static", "collidable", "rendered"])?
        .boolean(true)
        .u16(1500)
        .f64(0.016_666)
        .color3(Color3::from_rgb8(139, 94, 52))
        .vec3_32(Vector3::new(0.0, -9.81, 0.0))
        .transform_64(Transform::new(
            Vector3::new(128.5, 4.0, -76.25),
            Vector3::new(0.0, 1.25, 0.0),
        ));
    Ok(builder.build())
}

/// Packs a buffer of fixed-width fields only.
pub fn fixed_only() -> (Vec<u8>, Schema) {
    BufferBuilder::new()
        .i8(-1)
        .u8(255)
        .i16(-30_000)
        .u16(60_000)
        .i32(-1_000_000)
        .u32(4_000_000_000)
        .f32(3.5)
        .f64(-0.001)
        .boolean(false)
        .build()
}

/// Packs a text list with the given number of short entries.
pub fn list_payload(count: usize) -> Result<(Vec<u8>, Schema)> {
    let entries = (0..count).map(|i| format!("entry_{:04}", i));
    let builder = BufferBuilder::new().string_list(entries)?;
    Ok(builder.build())
}
