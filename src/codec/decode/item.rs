use crate::codec::cursor::ByteCursor;
use crate::codec::types::{ItemFlags, ItemLink};
use crate::internal::error::Result;

/// Reads an item payload: quantity byte, then a 32-bit word packing the
/// item id (low 24 bits) with the flag byte (high 8 bits), then the
/// flag-gated optional fields in their fixed order. The flag byte is the
/// only source of truth for how many trailing bytes follow; absent fields
/// are not zero-filled on the wire.
pub(super) fn read(cursor: &mut ByteCursor<'_>) -> Result<ItemLink> {
    let quantity = cursor.read_u8()?;
    let id_and_flags = cursor.read_u32()?;
    let item_id = id_and_flags & 0x00FF_FFFF;
    let flags = ItemFlags::from_bits_truncate((id_and_flags >> 24) as u8);

    let skin = if flags.contains(ItemFlags::SKIN) {
        Some(cursor.read_u32()?)
    } else {
        None
    };
    let upgrade1 = if flags.contains(ItemFlags::UPGRADE_1) {
        Some(cursor.read_u32()?)
    } else {
        None
    };
    let upgrade2 = if flags.contains(ItemFlags::UPGRADE_2) {
        Some(cursor.read_u32()?)
    } else {
        None
    };
    let name_decryption_key = if flags.contains(ItemFlags::NAME_DECRYPTION_KEY) {
        Some(cursor.read_u64()?)
    } else {
        None
    };
    let description_decryption_key = if flags.contains(ItemFlags::DESCRIPTION_DECRYPTION_KEY) {
        Some(cursor.read_u64()?)
    } else {
        None
    };

    Ok(ItemLink {
        item_id,
        quantity,
        skin,
        upgrade1,
        upgrade2,
        name_decryption_key,
        description_decryption_key,
    })
}
