/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed offset field readers and writers
//!
//! Every routine here addresses the buffer absolutely, there is no cursor.
//! Bounds are the only thing checked, interpreting the fields is left to
//! the partition schema and the decoder.
use alloc::string::String;

use crate::errors::{BootLogoEncodeErrors, OutOfBounds};

#[inline]
fn check_bounds(buffer_len: usize, offset: usize, length: usize) -> Result<(), OutOfBounds> {
    match offset.checked_add(length) {
        Some(end) if end <= buffer_len => Ok(()),
        _ => Err(OutOfBounds {
            offset,
            length,
            available: buffer_len
        })
    }
}

/// Read `N` raw bytes starting at `offset`
pub fn read_fixed_bytes<const N: usize>(buffer: &[u8], offset: usize) -> Result<[u8; N], OutOfBounds> {
    check_bounds(buffer.len(), offset, N)?;

    let mut out = [0; N];
    out.copy_from_slice(&buffer[offset..offset + N]);
    Ok(out)
}

/// Write raw bytes starting at `offset`
pub fn write_bytes(buffer: &mut [u8], offset: usize, bytes: &[u8]) -> Result<(), OutOfBounds> {
    check_bounds(buffer.len(), offset, bytes.len())?;

    buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
    Ok(())
}

/// Read a little endian `u32` at `offset`
pub fn read_u32_le(buffer: &[u8], offset: usize) -> Result<u32, OutOfBounds> {
    read_fixed_bytes::<4>(buffer, offset).map(u32::from_le_bytes)
}

/// Write `value` as a little endian `u32` at `offset`
pub fn write_u32_le(buffer: &mut [u8], offset: usize, value: u32) -> Result<(), OutOfBounds> {
    write_bytes(buffer, offset, &value.to_le_bytes())
}

/// Read a NUL terminated string of at most `max_length` bytes
///
/// Reading stops at the first zero byte, if none is found within
/// `max_length` bytes the whole field is the string.
///
/// Bytes are mapped one to one to characters.
///
/// # Errors
/// [`OutOfBounds`] if the string runs past the end of the buffer
/// before a terminator or `max_length` is reached
pub fn read_fixed_string(buffer: &[u8], offset: usize, max_length: usize) -> Result<String, OutOfBounds> {
    let mut text = String::with_capacity(max_length);

    for position in 0..max_length {
        let byte = match offset.checked_add(position).and_then(|i| buffer.get(i)) {
            Some(byte) => *byte,
            None => {
                return Err(OutOfBounds {
                    offset,
                    length: position + 1,
                    available: buffer.len()
                })
            }
        };

        if byte == 0 {
            break;
        }
        text.push(char::from(byte));
    }
    Ok(text)
}

/// Confirm `text` fits a fixed string field of `width` bytes
pub fn check_fixed_string(text: &str, width: usize) -> Result<(), BootLogoEncodeErrors> {
    if text.len() > width {
        return Err(BootLogoEncodeErrors::NameTooLong(text.len(), width));
    }
    Ok(())
}

/// Write `text` into a fixed string field of `width` bytes at `offset`
///
/// Bytes after the text are left untouched, callers write into a
/// zeroed buffer so the field ends up NUL padded.
///
/// # Errors
/// - [`NameTooLong`] if `text` is longer than `width`, nothing is written
/// - [`IoErrors`] if the field extends past the buffer
///
/// [`NameTooLong`]: BootLogoEncodeErrors::NameTooLong
/// [`IoErrors`]: BootLogoEncodeErrors::IoErrors
pub fn write_fixed_string(
    buffer: &mut [u8], offset: usize, text: &str, width: usize
) -> Result<(), BootLogoEncodeErrors> {
    check_fixed_string(text, width)?;
    check_bounds(buffer.len(), offset, width)?;

    write_bytes(buffer, offset, text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn fixed_string_stops_at_nul() {
        let data = [0x41, 0x42, 0x00, 0x43];
        assert_eq!(read_fixed_string(&data, 0, 4).unwrap(), "AB");
    }

    #[test]
    fn fixed_string_empty_when_first_byte_is_zero() {
        let data = [0x00, 0x42, 0x43];
        assert_eq!(read_fixed_string(&data, 0, 3).unwrap(), "");
    }

    #[test]
    fn fixed_string_without_terminator_uses_whole_field() {
        let data = *b"abcdefgh-tail";
        assert_eq!(read_fixed_string(&data, 0, 8).unwrap(), "abcdefgh");
    }

    #[test]
    fn fixed_string_past_end_is_out_of_bounds() {
        let data = *b"abc";
        let err = read_fixed_string(&data, 1, 8).unwrap_err();
        assert_eq!(err.offset, 1);
        assert_eq!(err.available, 3);
        assert_eq!(err.required(), 4);
    }

    #[test]
    fn fixed_string_terminated_before_end_is_fine() {
        // field is wider than the buffer but the terminator comes first
        let data = *b"ab\0";
        assert_eq!(read_fixed_string(&data, 0, 24).unwrap(), "ab");
    }

    #[test]
    fn u32_round_trip() {
        let mut data = vec![0; 8];
        write_u32_le(&mut data, 2, 0xDEAD_BEEF).unwrap();
        assert_eq!(&data[2..6], &[0xEF, 0xBE, 0xAD, 0xDE]);
        assert_eq!(read_u32_le(&data, 2).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn u32_high_bit_is_not_sign_extended() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(read_u32_le(&data, 0).unwrap(), u32::MAX);
    }

    #[test]
    fn u32_out_of_bounds() {
        let mut data = [0_u8; 4];
        assert!(read_u32_le(&data, 1).is_err());
        assert!(write_u32_le(&mut data, 1, 7).is_err());
        assert!(read_u32_le(&data, usize::MAX).is_err());
        // failed writes leave the buffer alone
        assert_eq!(data, [0; 4]);
    }

    #[test]
    fn write_fixed_string_rejects_long_names() {
        let mut data = vec![0; 32];
        let err = write_fixed_string(&mut data, 0, "a-name-that-is-much-too-long", 24).unwrap_err();
        assert!(matches!(err, BootLogoEncodeErrors::NameTooLong(28, 24)));
        assert!(data.iter().all(|x| *x == 0));
    }

    #[test]
    fn write_fixed_string_fills_field() {
        let mut data = vec![0; 26];
        write_fixed_string(&mut data, 1, "logo.bin", 24).unwrap();
        assert_eq!(&data[1..9], b"logo.bin");
        assert!(data[9..].iter().all(|x| *x == 0));
        assert_eq!(read_fixed_string(&data, 1, 24).unwrap(), "logo.bin");
    }

    #[test]
    fn write_fixed_string_checks_whole_field() {
        let mut data = vec![0; 16];
        let err = write_fixed_string(&mut data, 0, "logo.bin", 24).unwrap_err();
        assert!(matches!(err, BootLogoEncodeErrors::IoErrors(_)));
    }
}
