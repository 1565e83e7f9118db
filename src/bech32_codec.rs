//! NIP-19 key encoding: `npub1...` / `nsec1...` bech32 of the raw 32-byte key.

use bech32::{Bech32, Hrp};

use crate::error::NostrError;

const HRP_PUBLIC_KEY: &str = "npub";
const HRP_SECRET_KEY: &str = "nsec";

pub fn is_npub(s: &str) -> bool {
    s.starts_with("npub1")
}

pub fn is_nsec(s: &str) -> bool {
    s.starts_with("nsec1")
}

pub fn encode_npub(bytes: &[u8; 32]) -> String {
    let hrp = Hrp::parse(HRP_PUBLIC_KEY).expect("static HRP is valid");
    bech32::encode::<Bech32>(hrp, bytes).expect("32-byte payload always encodes")
}

pub fn encode_nsec(bytes: &[u8; 32]) -> String {
    let hrp = Hrp::parse(HRP_SECRET_KEY).expect("static HRP is valid");
    bech32::encode::<Bech32>(hrp, bytes).expect("32-byte payload always encodes")
}

pub fn decode_npub(npub: &str) -> Result<[u8; 32], NostrError> {
    decode_with_hrp(npub, HRP_PUBLIC_KEY)
}

pub fn decode_nsec(nsec: &str) -> Result<[u8; 32], NostrError> {
    decode_with_hrp(nsec, HRP_SECRET_KEY)
}

fn decode_with_hrp(s: &str, expected_hrp: &str) -> Result<[u8; 32], NostrError> {
    let (hrp, bytes) = bech32::decode(s).map_err(|_| NostrError::DecodeError("bech32"))?;
    if hrp.as_str() != expected_hrp {
        return Err(NostrError::InvalidInput {
            name: "bech32 prefix",
            expected: expected_hrp.to_string(),
            actual: hrp.to_string(),
        });
    }
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| NostrError::InvalidInput {
            name: "bech32 payload",
            expected: String::from("32 bytes"),
            actual: format!("{} bytes", v.len()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npub_roundtrip() {
        let bytes = [0x3bu8; 32];
        let npub = encode_npub(&bytes);
        assert!(is_npub(&npub));
        assert_eq!(decode_npub(&npub).unwrap(), bytes);
    }

    #[test]
    fn nsec_roundtrip() {
        let bytes = [0x67u8; 32];
        let nsec = encode_nsec(&bytes);
        assert!(is_nsec(&nsec));
        assert_eq!(decode_nsec(&nsec).unwrap(), bytes);
    }

    #[test]
    fn wrong_prefix_rejected() {
        let npub = encode_npub(&[0x01u8; 32]);
        assert!(decode_nsec(&npub).is_err());
    }
}
