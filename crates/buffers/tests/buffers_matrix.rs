//! Writer/Reader roundtrip matrix and short-buffer behavior for the buffers crate.

use clvalue_buffers::{preview, BufferError, Octets, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0x00));
    assert_eq!(r.u8(), Ok(0x7F));
    assert_eq!(r.u8(), Ok(0xFF));
    assert!(r.is_empty());
}

#[test]
fn roundtrip_u16() {
    let mut w = Writer::new();
    w.u16(0);
    w.u16(0x0102);
    w.u16(u16::MAX);
    let data = w.flush();
    assert_eq!(&data[2..4], &[0x02, 0x01]);
    let mut r = Reader::new(&data);
    assert_eq!(r.u16(), Ok(0));
    assert_eq!(r.u16(), Ok(0x0102));
    assert_eq!(r.u16(), Ok(u16::MAX));
}

#[test]
fn roundtrip_i32() {
    let mut w = Writer::new();
    w.i32(i32::MIN);
    w.i32(-123456);
    w.i32(0);
    w.i32(123456);
    w.i32(i32::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.i32(), Ok(i32::MIN));
    assert_eq!(r.i32(), Ok(-123456));
    assert_eq!(r.i32(), Ok(0));
    assert_eq!(r.i32(), Ok(123456));
    assert_eq!(r.i32(), Ok(i32::MAX));
}

#[test]
fn roundtrip_u64_and_i64() {
    let mut w = Writer::new();
    w.u64(0x0102030405060708);
    w.i64(-9_999_999_999);
    let data = w.flush();
    assert_eq!(data[0], 0x08);
    let mut r = Reader::new(&data);
    assert_eq!(r.u64(), Ok(0x0102030405060708));
    assert_eq!(r.i64(), Ok(-9_999_999_999));
}

#[test]
fn roundtrip_strings() {
    let mut w = Writer::new();
    w.str_with_len("");
    w.str_with_len("ABC-DEF");
    w.str_with_len("日本");
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.str_with_len(), Ok(""));
    assert_eq!(r.str_with_len(), Ok("ABC-DEF"));
    assert_eq!(r.str_with_len(), Ok("日本"));
    assert!(r.is_empty());
}

// ---------------------------------------------------------------------------
// Short buffers
// ---------------------------------------------------------------------------

#[test]
fn short_buffer_matrix() {
    let data = [0x01, 0x02];
    let mut r = Reader::new(&data);
    assert_eq!(
        r.u32(),
        Err(BufferError::EndOfBuffer {
            needed: 4,
            available: 2
        })
    );
    assert!(r.u64().is_err());
    assert!(r.buf(3).is_err());
    assert!(r.skip(3).is_err());
    assert_eq!(r.buf(2), Ok(&data[..]));
    assert!(r.u8().is_err());
}

#[test]
fn string_length_prefix_longer_than_payload() {
    let data = [0x05, 0x00, 0x00, 0x00, b'a', b'b'];
    let mut r = Reader::new(&data);
    assert!(matches!(
        r.str_with_len(),
        Err(BufferError::EndOfBuffer { needed: 5, available: 2 })
    ));
}

#[test]
fn buf_borrows_from_input() {
    let data = [1u8, 2, 3, 4, 5];
    let mut r = Reader::new(&data);
    let head = r.buf(2).unwrap();
    let rest = r.rest();
    assert_eq!(head.as_ptr(), data.as_ptr());
    assert_eq!(rest.as_ptr(), data[2..].as_ptr());
}

#[test]
fn octets_preview_matrix() {
    assert_eq!(preview(&[0x00, 0x2b, 0x02]).to_string(), "00 2b 02");
    assert_eq!(Octets::new(&[1, 2, 3], 2).to_string(), "01 02 (+1)");
}
