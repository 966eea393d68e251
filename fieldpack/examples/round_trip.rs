//! Example packing a mixed field sequence and decoding it back.
//!
//! Run with: `cargo run --example round_trip`

use fieldpack::prelude::*;
use fieldpack::display;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Pack an entity snapshot: name, tags, state, and placement.
    let (buffer, schema) = BufferBuilder::new()
        .string("crate_01")?
        .string_list(["wooden", "stackable"])?
        .boolean(true)
        .u16(1500)
        .color3(Color3::from_rgb8(139, 94, 52))
        .transform_64(Transform::new(
            Vector3::new(12.5, 0.0, -3.25),
            Vector3::new(0.0, 1.5707963, 0.0),
        ))
        .build();

    println!("{}", display::summary(&buffer));
    println!("schema: {}", schema);
    println!("bytes:  {}", display::hex_string(&buffer));

    // The consumer replays the same schema to recover the fields.
    let values = decode_sequence(&buffer, &schema)?;
    for (tag, value) in schema.iter().zip(&values) {
        println!("{:>14}: {:?}", tag.wire_name(), value);
    }

    // A single field can be measured and decoded without its neighbors.
    let name_span = determine_size(&buffer, TypeTag::Text, 0)?;
    let name = decode_field(&buffer, TypeTag::Text, 0, DecodePolicy::Strict)?;
    println!("first field spans {} bytes: {:?}", name_span, name.as_text());

    Ok(())
}
