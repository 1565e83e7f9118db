//! NIP-42 relay authentication event builder: an unsigned kind-22242 event with mandatory
//! `relay`/`challenge` tags, signed through the same draft/sign pipeline as any other event.

use crate::error::NostrError;
use crate::event::{Event, EventDraft};
use crate::primitives::{Clock, EventKind, Tag, Tags, UnixSeconds};
use crate::signer::Signer;

/// Normalizes a relay URL before it is embedded in the `relay` tag. The default normalizer only
/// trims surrounding whitespace (spec §4.5); callers with stricter URL canonicalization needs can
/// supply their own.
pub trait RelayUrlNormalizer {
    fn normalize(&self, relay_url: &str) -> String;
}

pub struct TrimNormalizer;

impl RelayUrlNormalizer for TrimNormalizer {
    fn normalize(&self, relay_url: &str) -> String {
        relay_url.trim().to_string()
    }
}

/// Builds and signs an unsigned kind-22242 authentication event.
pub struct AuthEventBuilder<'a> {
    relay_url: String,
    challenge: String,
    content: String,
    created_at: Option<UnixSeconds>,
    extra_tags: Vec<Tag>,
    normalizer: &'a dyn RelayUrlNormalizer,
}

impl<'a> AuthEventBuilder<'a> {
    pub fn new(relay_url: impl Into<String>, challenge: impl Into<String>) -> Self {
        Self {
            relay_url: relay_url.into(),
            challenge: challenge.into(),
            content: String::new(),
            created_at: None,
            extra_tags: Vec::new(),
            normalizer: &TrimNormalizer,
        }
    }

    pub fn with_normalizer(mut self, normalizer: &'a dyn RelayUrlNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_created_at(mut self, created_at: UnixSeconds) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_extra_tag(mut self, tag: Tag) -> Self {
        self.extra_tags.push(tag);
        self
    }

    pub fn build_and_sign(
        self,
        signer: &dyn Signer,
        clock: &dyn Clock,
    ) -> Result<Event, NostrError> {
        let relay = self.normalizer.normalize(&self.relay_url);
        if relay.is_empty() {
            return Err(NostrError::InvalidInput {
                name: "relay_url",
                expected: String::from("a non-blank relay URL"),
                actual: String::from("blank after normalization"),
            });
        }
        if self.challenge.trim().is_empty() {
            return Err(NostrError::InvalidInput {
                name: "challenge",
                expected: String::from("a non-blank challenge"),
                actual: String::from("blank"),
            });
        }
        for tag in &self.extra_tags {
            if tag.values().iter().all(|v| v.is_empty()) {
                return Err(NostrError::InvalidInput {
                    name: "extra_tag",
                    expected: String::from("at least one non-empty element"),
                    actual: String::from("all elements empty"),
                });
            }
        }

        let mut tags = vec![
            Tag::new(vec![String::from("relay"), relay])?,
            Tag::new(vec![String::from("challenge"), self.challenge])?,
        ];
        tags.extend(self.extra_tags);

        let created_at = self.created_at.unwrap_or_else(|| clock.now_seconds());
        let draft = EventDraft {
            pubkey: signer.public_key(),
            created_at,
            kind: EventKind::RELAY_AUTH,
            tags: Tags::new(tags),
            content: self.content,
        };
        let id = draft.compute_id()?;
        let sig = signer.sign(&id)?;
        Ok(Event {
            id,
            pubkey: draft.pubkey,
            created_at: draft.created_at,
            kind: draft.kind,
            tags: draft.tags,
            content: draft.content,
            sig,
        })
    }
}
