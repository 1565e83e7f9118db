//! Hex and Base64 codecs. Hex is hand-rolled; Base64 uses the standard alphabet via the `base64`
//! crate.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::NostrError;

pub fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0f) as usize] as char);
    }
    s
}

pub fn hex_decode(hex: &str) -> Result<Vec<u8>, NostrError> {
    if !hex.len().is_multiple_of(2) {
        return Err(NostrError::DecodeError("hex"));
    }
    let chars: Vec<char> = hex.chars().collect();
    let mut bytes = Vec::with_capacity(chars.len() / 2);
    let mut i = 0;
    while i < chars.len() {
        let high = hex_char_val(chars[i]).ok_or(NostrError::DecodeError("hex"))?;
        let low = hex_char_val(chars[i + 1]).ok_or(NostrError::DecodeError("hex"))?;
        bytes.push((high << 4) | low);
        i += 2;
    }
    Ok(bytes)
}

fn hex_char_val(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

pub fn base64_encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub fn base64_decode(s: &str) -> Result<Vec<u8>, NostrError> {
    BASE64.decode(s).map_err(|_| NostrError::DecodeError("base64"))
}
