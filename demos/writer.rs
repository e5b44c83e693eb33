//! Using GrowBuf as an io::Write sink.
//!
//! Run with:
//!     cargo run --example writer

use std::io::Write;

use growbuf::GrowBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = GrowBuf::with_capacity(64)?;

    for i in 0..10 {
        writeln!(buf, "record {i}")?;
    }

    println!(
        "wrote {} bytes, capacity {}",
        buf.len(),
        buf.capacity()
    );
    print!("{}", String::from_utf8_lossy(buf.as_slice()));

    Ok(())
}
