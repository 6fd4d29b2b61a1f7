//! Build a point, encode it to wire text, and parse it back.
//!
//! Run with: `cargo run --example roundtrip`

use line_protocol::{parse_line, to_line, Point};

fn main() {
    let point = Point::builder("weather")
        .tag("station", "KJFK")
        .tag("region", "us-east")
        .field("temp", 21.5)
        .field("humidity", 63i64)
        .field("summary", "broken clouds")
        .timestamp(1710000000000000000)
        .build();

    let line = to_line(&point);
    println!("encoded: {line}");

    let parsed = parse_line(&line).expect("re-parse of encoded point");
    assert_eq!(parsed, point);
    println!("re-parsed to an identical point");

    println!("as JSON: {}", serde_json::to_string_pretty(&parsed).unwrap());
}
