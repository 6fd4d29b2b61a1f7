//! Parse a few lines and inspect the resulting points.
//!
//! Run with: `cargo run --example parse`

use line_protocol::parse_line;

fn main() {
    let lines = [
        "cpu,host=server01,region=us-west value=0.64 1434055562000000000",
        "cpu,host=server01 value=10i 1434055562000000000",
        "cpu,host=server01 active=true 1434055562000000000",
        "cpu,host=server01 note=\"hello world\" 1434055562000000000",
        "novalue",
    ];

    for line in lines {
        println!("line:  {line}");
        match parse_line(line) {
            Ok(point) => {
                println!("  measurement: {}", point.measurement());
                for (key, value) in point.tags() {
                    println!("  tag:   {key}={value}");
                }
                for (key, value) in point.fields() {
                    println!("  field: {key}={value:?}");
                }
                println!("  time:  {} ({})", point.timestamp(), point.time());
            }
            Err(err) => println!("  error: {err}"),
        }
        println!();
    }
}
