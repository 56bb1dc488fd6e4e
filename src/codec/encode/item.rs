use crate::codec::sink::ByteSink;
use crate::codec::types::ItemLink;

/// Writes an item payload. The flag byte is recomputed from which optional
/// fields are present and packed into the high byte of the id word; only
/// the corresponding trailing fields are written, in the fixed wire order.
pub(super) fn write(sink: &mut ByteSink, item: &ItemLink) {
    let flags = item.flags().bits() as u32;

    sink.put_u8(item.quantity);
    sink.put_u32((item.item_id & 0x00FF_FFFF) | (flags << 24));

    if let Some(skin) = item.skin {
        sink.put_u32(skin);
    }
    if let Some(upgrade1) = item.upgrade1 {
        sink.put_u32(upgrade1);
    }
    if let Some(upgrade2) = item.upgrade2 {
        sink.put_u32(upgrade2);
    }
    if let Some(key) = item.name_decryption_key {
        sink.put_u64(key);
    }
    if let Some(key) = item.description_decryption_key {
        sink.put_u64(key);
    }
}
