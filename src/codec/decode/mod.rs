// Decode half of the chatlink codec: token unwrapping, discriminant
// dispatch and the strict/lenient/batch entry points.

mod item;
mod build;
mod fashion;

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use regex::Regex;

use crate::codec::cursor::ByteCursor;
use crate::codec::types::{Chatlink, ChatlinkType, UserLink};
use crate::internal::error::{Error, Result};

/// Matches the `[&<base64>]` token form inside free text.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[&[A-Za-z0-9+/]+={0,2}\]").expect("token pattern is valid")
});

/// Decodes a chatlink token into its typed record.
///
/// Fails with [`Error::MalformedToken`] when the `[&...]` wrapper or the
/// base64 payload is structurally invalid, [`Error::TruncatedPayload`] when
/// the payload is shorter than the variant's layout requires, and
/// [`Error::UnknownDiscriminant`] for an undefined first byte.
///
/// # Example
/// ```
/// use chatlink::{decode, Chatlink, ItemLink};
///
/// let link = decode("[&AgGqtgAA]").unwrap();
/// assert_eq!(link, Chatlink::Item(ItemLink::new(46762)));
/// ```
pub fn decode(input: &str) -> Result<Chatlink> {
    decode_inner(input, None)
}

/// Decodes a chatlink token, additionally checking the discriminant against
/// `expected`. A mismatch fails with [`Error::DiscriminantMismatch`].
pub fn decode_expecting(input: &str, expected: ChatlinkType) -> Result<Chatlink> {
    decode_inner(input, Some(expected))
}

/// Lenient variant of [`decode`]: returns `None` instead of an error.
pub fn try_decode(input: &str) -> Option<Chatlink> {
    decode(input).ok()
}

/// Lenient variant of [`decode_expecting`]: returns `None` instead of an
/// error, whatever the failure.
pub fn try_decode_expecting(input: &str, expected: ChatlinkType) -> Option<Chatlink> {
    decode_expecting(input, expected).ok()
}

/// Decodes every chatlink token found in `text`, in match order, silently
/// skipping tokens that fail to decode. Duplicates are preserved.
pub fn decode_all(text: &str) -> Vec<Chatlink> {
    TOKEN_PATTERN
        .find_iter(text)
        .filter_map(|token| try_decode(token.as_str()))
        .collect()
}

/// Like [`decode_all`], restricted to tokens of one type.
pub fn decode_all_of(text: &str, expected: ChatlinkType) -> Vec<Chatlink> {
    TOKEN_PATTERN
        .find_iter(text)
        .filter_map(|token| try_decode_expecting(token.as_str(), expected))
        .collect()
}

fn decode_inner(input: &str, expected: Option<ChatlinkType>) -> Result<Chatlink> {
    let payload = input
        .strip_prefix("[&")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| Error::MalformedToken("missing [&...] wrapper".to_string()))?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|err| Error::MalformedToken(format!("invalid base64 payload: {err}")))?;

    let mut cursor = ByteCursor::new(&bytes);

    let discriminant = cursor.read_u8()?;
    let link_type = ChatlinkType::from_byte(discriminant)
        .ok_or(Error::UnknownDiscriminant(discriminant))?;

    if let Some(expected) = expected {
        if link_type != expected {
            return Err(Error::DiscriminantMismatch {
                expected: expected as u8,
                actual: discriminant,
            });
        }
    }

    let link = match link_type {
        ChatlinkType::Coin => Chatlink::Coin { amount: cursor.read_u32()? },
        ChatlinkType::Item => Chatlink::Item(item::read(&mut cursor)?),
        ChatlinkType::NpcText => Chatlink::NpcText { id: cursor.read_u32()? },
        ChatlinkType::Map => Chatlink::Map { id: cursor.read_u32()? },
        // No documented payload; surface the opaque marker without
        // consuming or guessing at bytes.
        ChatlinkType::PvpGame => Chatlink::PvpGame,
        ChatlinkType::Skill => Chatlink::Skill { id: cursor.read_u32()? },
        ChatlinkType::Trait => Chatlink::Trait { id: cursor.read_u32()? },
        ChatlinkType::User => Chatlink::User(UserLink {
            account_id: cursor.read_uuid()?,
            character_name: cursor.read_utf16_string()?,
        }),
        ChatlinkType::Recipe => Chatlink::Recipe { id: cursor.read_u32()? },
        ChatlinkType::Wardrobe => Chatlink::Wardrobe { id: cursor.read_u32()? },
        ChatlinkType::Outfit => Chatlink::Outfit { id: cursor.read_u32()? },
        ChatlinkType::WvwObjective => {
            let objective_id = cursor.read_u32()?;
            let map_id = cursor.read_u32()?;
            Chatlink::WvwObjective { objective_id, map_id }
        }
        ChatlinkType::BuildTemplate => Chatlink::BuildTemplate(build::read(&mut cursor)?),
        ChatlinkType::Achievement => Chatlink::Achievement { id: cursor.read_u32()? },
        ChatlinkType::FashionTemplate => Chatlink::FashionTemplate(fashion::read(&mut cursor)?),
    };

    Ok(link)
}
