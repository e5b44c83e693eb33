#![no_main]

use growbuf::GrowBuf;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // First byte drives how the rest is split into append calls.
    let (head, rest) = match data.split_first() {
        Some((h, r)) => (*h, r),
        None => return,
    };
    let step = (head as usize % 17) + 1;

    let mut buf = GrowBuf::new();
    let mut last_capacity = 0;

    for piece in rest.chunks(step) {
        if piece.len() == 1 {
            buf.append_byte(piece[0]).unwrap();
        } else {
            buf.append_slice(piece).unwrap();
        }

        // Verify: capacity is monotone and always covers the length
        assert!(buf.capacity() >= last_capacity);
        assert!(buf.capacity() >= buf.len());
        last_capacity = buf.capacity();
    }

    // Verify: contents are exactly the concatenation of all appends
    assert_eq!(buf.as_slice(), rest);
    assert_eq!(buf.len(), rest.len());
});
