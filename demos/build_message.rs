//! Basic append example: build a small wire message incrementally.
//!
//! Run with:
//!     cargo run --example build_message

use growbuf::GrowBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = GrowBuf::new();

    buf.append_slice(b"GET ")?;
    buf.append_slice(b"/index.html")?;
    buf.append_slice(b" HTTP/1.1\r\n")?;
    buf.append_slice(b"Host: example.com\r\n")?;
    buf.append_slice(b"\r\n")?;

    println!(
        "built {} bytes in {} bytes of capacity:\n",
        buf.len(),
        buf.capacity()
    );
    println!("{}", String::from_utf8_lossy(buf.as_slice()));

    // Freeze the result for cheap sharing
    let frozen = buf.into_bytes();
    println!("frozen payload: {} bytes", frozen.len());

    Ok(())
}
