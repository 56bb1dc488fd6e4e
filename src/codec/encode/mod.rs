// Encode half of the chatlink codec. Mirrors the decoder exactly: same
// field order, same conditional logic, with omitted optional fields filled
// by fixed defaults wherever the wire format does not allow omission.

mod item;
mod build;
mod fashion;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::codec::sink::ByteSink;
use crate::codec::types::{Chatlink, ChatlinkType};
use crate::internal::error::{Error, Result};

/// Encodes a chatlink record into its `[&<base64>]` token form.
///
/// The reserved [`Chatlink::PvpGame`] variant has no defined wire format
/// and fails with [`Error::UnsupportedEncodeVariant`].
///
/// # Example
/// ```
/// use chatlink::{encode, Chatlink, ItemLink};
///
/// let token = encode(&Chatlink::Item(ItemLink::new(46762))).unwrap();
/// assert_eq!(token, "[&AgGqtgAA]");
/// ```
pub fn encode(link: &Chatlink) -> Result<String> {
    let mut sink = ByteSink::new();
    sink.put_u8(link.link_type() as u8);

    match link {
        Chatlink::Coin { amount } => sink.put_u32(*amount),
        Chatlink::Item(item) => item::write(&mut sink, item),
        Chatlink::NpcText { id }
        | Chatlink::Map { id }
        | Chatlink::Skill { id }
        | Chatlink::Trait { id }
        | Chatlink::Recipe { id }
        | Chatlink::Wardrobe { id }
        | Chatlink::Outfit { id }
        | Chatlink::Achievement { id } => sink.put_u32(*id),
        Chatlink::PvpGame => {
            return Err(Error::UnsupportedEncodeVariant(ChatlinkType::PvpGame as u8));
        }
        Chatlink::User(user) => {
            sink.put_uuid(&user.account_id)?;
            sink.put_utf16_string(&user.character_name);
        }
        Chatlink::WvwObjective { objective_id, map_id } => {
            sink.put_u32(*objective_id);
            sink.put_u32(*map_id);
        }
        Chatlink::BuildTemplate(template) => build::write(&mut sink, template),
        Chatlink::FashionTemplate(template) => fashion::write(&mut sink, template),
    }

    Ok(format!("[&{}]", BASE64.encode(sink.into_bytes())))
}
