//! NIP-01 event: canonical serialization and id computation. Control bytes outside the six NIP-01
//! escapes are a hard error rather than a silent `\u00XX` escape, since NIP-01 does not define one
//! and inventing one would desynchronize event ids against clients that refuse instead.

use crate::crypto::hash::sha256;
use crate::error::NostrError;
use crate::primitives::{EventId, EventKind, PublicKey, Signature, Tags, UnixSeconds};

/// A complete, signed Nostr event.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub pubkey: PublicKey,
    pub created_at: UnixSeconds,
    pub kind: EventKind,
    pub tags: Tags,
    pub content: String,
    pub sig: Signature,
}

/// The fields needed to compute an id and sign an event, before a signature exists.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub pubkey: PublicKey,
    pub created_at: UnixSeconds,
    pub kind: EventKind,
    pub tags: Tags,
    pub content: String,
}

impl EventDraft {
    pub fn compute_id(&self) -> Result<EventId, NostrError> {
        let canonical = canonical_array_bytes(
            &self.pubkey,
            self.created_at,
            self.kind,
            &self.tags,
            &self.content,
        )?;
        Ok(EventId::from_bytes(sha256(&canonical)))
    }
}

/// Builds the canonical byte string `[0,"<pubkey>",<created_at>,<kind>,[<tags>],"<content>"]`
/// used to compute the event id (spec §4.1, §6.1). Not a general JSON serializer.
pub fn canonical_array_bytes(
    pubkey: &PublicKey,
    created_at: UnixSeconds,
    kind: EventKind,
    tags: &Tags,
    content: &str,
) -> Result<Vec<u8>, NostrError> {
    let pubkey_hex = pubkey.to_hex();
    let mut out = String::new();
    out.push_str("[0,\"");
    out.push_str(&escape_json_string(&pubkey_hex)?);
    out.push_str("\",");
    out.push_str(&created_at.as_i64().to_string());
    out.push(',');
    out.push_str(&kind.as_u16().to_string());
    out.push_str(",[");
    let tag_slice = tags.as_slice();
    for (i, tag) in tag_slice.iter().enumerate() {
        out.push('[');
        for (j, item) in tag.values().iter().enumerate() {
            out.push('"');
            out.push_str(&escape_json_string(item)?);
            out.push('"');
            if j + 1 < tag.values().len() {
                out.push(',');
            }
        }
        out.push(']');
        if i + 1 < tag_slice.len() {
            out.push(',');
        }
    }
    out.push_str("],\"");
    out.push_str(&escape_json_string(content)?);
    out.push_str("\"]");
    Ok(out.into_bytes())
}

/// Escapes `\n \" \\ \r \t \b \f`; any other control byte (0x00-0x1F) is a hard error (spec §4.1).
fn escape_json_string(input: &str) -> Result<String, NostrError> {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                return Err(NostrError::InvalidInput {
                    name: "control character",
                    expected: String::from("printable text or one of \\n \\\" \\\\ \\r \\t \\b \\f"),
                    actual: format!("U+{:04X}", c as u32),
                });
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Recomputes the id of an already-constructed event and checks it against `event.id`.
pub fn verify_event_id(event: &Event) -> Result<bool, NostrError> {
    let draft = EventDraft {
        pubkey: event.pubkey,
        created_at: event.created_at,
        kind: event.kind,
        tags: event.tags.clone(),
        content: event.content.clone(),
    };
    Ok(draft.compute_id()? == event.id)
}

/// Verifies the BIP-340 Schnorr signature over `event.id` under `event.pubkey`.
pub fn verify_event_signature(event: &Event) -> bool {
    crate::crypto::ecc::schnorr_verify(event.sig.as_bytes(), event.id.as_bytes(), event.pubkey.as_bytes())
}
