use crate::codec::sink::ByteSink;
use crate::codec::types::{EquipmentSlot, FashionTemplate};

/// Writes a fashion template payload: every field always present, at the
/// same fixed offsets the reader expects.
pub(super) fn write(sink: &mut ByteSink, template: &FashionTemplate) {
    sink.put_u16(template.aquabreather);
    write_slot(sink, template.backpack);
    write_slot(sink, template.coat);
    write_slot(sink, template.boots);
    write_slot(sink, template.gloves);
    write_slot(sink, template.helm);
    write_slot(sink, template.leggings);
    write_slot(sink, template.shoulders);
    write_slot(sink, template.outfit);

    for id in template
        .weapons
        .aquatic
        .into_iter()
        .chain(template.weapons.set_a)
        .chain(template.weapons.set_b)
    {
        sink.put_u16(id);
    }

    sink.put_u16(template.visibility.bits());
}

fn write_slot(sink: &mut ByteSink, slot: EquipmentSlot) {
    sink.put_u16(slot.id);
    for dye in slot.dyes.0 {
        sink.put_u16(dye);
    }
}
