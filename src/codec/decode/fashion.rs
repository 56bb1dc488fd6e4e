use crate::codec::cursor::ByteCursor;
use crate::codec::types::{
    DyeSelection, EquipmentSlot, FashionTemplate, VisibilityFlags, WeaponSkins,
};
use crate::internal::error::Result;

/// Reads a fashion template payload: a fixed sequence of u16 fields with no
/// conditional structure.
pub(super) fn read(cursor: &mut ByteCursor<'_>) -> Result<FashionTemplate> {
    let aquabreather = cursor.read_u16()?;
    let backpack = read_slot(cursor)?;
    let coat = read_slot(cursor)?;
    let boots = read_slot(cursor)?;
    let gloves = read_slot(cursor)?;
    let helm = read_slot(cursor)?;
    let leggings = read_slot(cursor)?;
    let shoulders = read_slot(cursor)?;
    let outfit = read_slot(cursor)?;

    let weapons = WeaponSkins {
        aquatic: [cursor.read_u16()?, cursor.read_u16()?],
        set_a: [cursor.read_u16()?, cursor.read_u16()?],
        set_b: [cursor.read_u16()?, cursor.read_u16()?],
    };

    let visibility = VisibilityFlags::from_bits_retain(cursor.read_u16()?);

    Ok(FashionTemplate {
        aquabreather,
        backpack,
        coat,
        boots,
        gloves,
        helm,
        leggings,
        shoulders,
        outfit,
        weapons,
        visibility,
    })
}

fn read_slot(cursor: &mut ByteCursor<'_>) -> Result<EquipmentSlot> {
    let id = cursor.read_u16()?;
    let dyes = DyeSelection([
        cursor.read_u16()?,
        cursor.read_u16()?,
        cursor.read_u16()?,
        cursor.read_u16()?,
    ]);
    Ok(EquipmentSlot { id, dyes })
}
