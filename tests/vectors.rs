//! Reproduces the literal test vectors checked against published NIP-01/04/44/42 behavior.
//!
//! Run with:
//!   cargo test --test vectors

use nostr_core::primitives::{EventKind, FixedClock, PrivateKey, Tag, Tags, UnixSeconds};
use nostr_core::signer::{KeypairSigner, Signer};
use nostr_core::{event, nip04, nip42, nip44};

fn hex32(hex: &str) -> [u8; 32] {
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect::<Vec<u8>>();
    bytes.try_into().unwrap()
}

#[test]
fn nip01_id_sanity() {
    let mut secret = [0u8; 32];
    secret[31] = 0x03;
    let signer = KeypairSigner::new(PrivateKey::from_bytes(secret).unwrap()).unwrap();
    let pubkey_hex = signer.public_key().to_hex();
    assert_eq!(
        pubkey_hex,
        "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"
    );

    let draft = event::EventDraft {
        pubkey: signer.public_key(),
        created_at: UnixSeconds::new(1700000000),
        kind: EventKind::TEXT_NOTE,
        tags: Tags::new(vec![Tag::new(vec![String::from("p"), pubkey_hex]).unwrap()]),
        content: String::from("hello nostr"),
    };
    let id = draft.compute_id().unwrap();
    let sig = signer.sign(&id).unwrap();

    let built = event::Event {
        id,
        pubkey: draft.pubkey,
        created_at: draft.created_at,
        kind: draft.kind,
        tags: draft.tags,
        content: draft.content,
        sig,
    };
    assert!(event::verify_event_signature(&built));
    assert!(event::verify_event_id(&built).unwrap());
}

#[test]
fn nip04_vector() {
    let shared_secret = hex32("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5");
    let iv = [0u8; 16];
    let ciphertext = nostr_core::crypto::aes_cbc::encrypt(&shared_secret, &iv, b"hello nip04");
    let payload = format!(
        "{}?iv={}",
        nostr_core::crypto::encoding::base64_encode(&ciphertext),
        nostr_core::crypto::encoding::base64_encode(&iv)
    );
    assert_eq!(
        payload,
        "M1IS4Gj6Dt3tXh6Eo2RrmA==?iv=AAAAAAAAAAAAAAAAAAAAAA=="
    );
}

#[test]
fn nip04_roundtrip_between_peers() {
    let alice_priv = [0x11u8; 32];
    let mut bob_priv = [0x22u8; 32];
    bob_priv[31] = 0x01;
    let alice_pub = nostr_core::crypto::ecc::derive_x_only_pub(&alice_priv).unwrap();
    let bob_pub = nostr_core::crypto::ecc::derive_x_only_pub(&bob_priv).unwrap();

    let payload = nip04::encrypt("hi bob, it's alice", &alice_priv, &bob_pub).unwrap();
    let plaintext = nip04::decrypt(&payload, &bob_priv, &alice_pub).unwrap();
    assert_eq!(plaintext, "hi bob, it's alice");
}

#[test]
fn nip44_minimal_vector() {
    let conversation_key = hex32("c41c775356fd92eadc63ff5a0dc1da211b268cbea22316767095b2871ea1412d");
    let payload = "AgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABee0G5VSK0/9YypIObAtDKfYEAjD35uVkHyB0F4DwrcNaCXlCWZKaArsGrY6M9wnuTMxWfp1RTN9Xga8no+kF5Vsb";
    assert_eq!(nip44::decrypt(payload, &conversation_key).unwrap(), "a");
}

#[test]
fn nip44_padding_boundary() {
    assert_eq!(nip44::calc_padded_len(33).unwrap(), 64);
    let padded = nip44::pad(&[0x41u8; 33]).unwrap();
    assert_eq!(padded.len(), 66);
    assert_eq!(&padded[0..2], &[0x00, 0x21]);
}

#[test]
fn nip44_roundtrips_largest_valid_plaintext() {
    // 65535 bytes falls in the [57345, 65535] range where calc_padded_len saturates at 65536,
    // producing the largest ciphertext the wire format allows (raw length == RAW_LEN_MAX).
    let conversation_key = [0x5eu8; 32];
    let plaintext = "q".repeat(65535);
    let payload = nip44::encrypt_random_nonce(&plaintext, &conversation_key).unwrap();
    assert_eq!(nip44::decrypt(&payload, &conversation_key).unwrap(), plaintext);
}

#[test]
fn nip44_invalid_mac_is_rejected_without_unpadding() {
    let conversation_key = hex32("c41c775356fd92eadc63ff5a0dc1da211b268cbea22316767095b2871ea1412d");
    let payload = "AgAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABee0G5VSK0/9YypIObAtDKfYEAjD35uVkHyB0F4DwrcNaCXlCWZKaArsGrY6M9wnuTMxWfp1RTN9Xga8no+kF5Vsb";
    let mut raw = nostr_core::crypto::encoding::base64_decode(payload).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0x01;
    let tampered = nostr_core::crypto::encoding::base64_encode(&raw);

    let err = nip44::decrypt(&tampered, &conversation_key).unwrap_err();
    assert_eq!(err, nostr_core::NostrError::DecryptionFailed("invalid MAC"));
}

#[test]
fn nip42_event_vector() {
    let signer = KeypairSigner::new(PrivateKey::from_bytes([0xAAu8; 32]).unwrap()).unwrap();
    let clock = FixedClock(UnixSeconds::new(1700000000));

    let event = nip42::AuthEventBuilder::new(" wss://relay.example/ ", "abc123")
        .build_and_sign(&signer, &clock)
        .unwrap();

    assert_eq!(event.kind, EventKind::RELAY_AUTH);
    assert_eq!(event.tags.as_slice()[0].values(), ["relay", "wss://relay.example/"]);
    assert_eq!(event.tags.as_slice()[1].values(), ["challenge", "abc123"]);
    assert_eq!(event.content, "");
    assert!(event::verify_event_id(&event).unwrap());
    assert!(event::verify_event_signature(&event));
}
