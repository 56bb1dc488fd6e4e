use crate::codec::cursor::ByteCursor;
use crate::codec::types::{
    BuildTemplate, Legends, PalettePair, Pets, Profession, SkillPalettes, Specialization,
    TraitSelection,
};
use crate::internal::error::Result;

/// Reads a build template payload: the fixed prefix (profession byte, three
/// specialization pairs, ten palette ids), the 16-byte profession block,
/// then the legacy/extended fork on remaining buffer length.
pub(super) fn read(cursor: &mut ByteCursor<'_>) -> Result<BuildTemplate> {
    let profession = Profession::from_byte(cursor.read_u8()?);

    let mut specializations = [Specialization::default(); 3];
    for slot in &mut specializations {
        slot.id = cursor.read_u8()?;
        slot.traits = TraitSelection::from_byte(cursor.read_u8()?);
    }

    // Palette ids come interleaved: terrestrial then aquatic per slot.
    let heal = read_pair(cursor)?;
    let utility = [read_pair(cursor)?, read_pair(cursor)?, read_pair(cursor)?];
    let elite = read_pair(cursor)?;
    let palettes = SkillPalettes { heal, utility, elite };

    // The profession block is always 16 bytes; only Ranger and Revenant
    // give it meaning.
    let mut pets = None;
    let mut legends = None;
    match profession {
        Profession::Ranger => {
            pets = Some(Pets {
                terrestrial: [cursor.read_u8()?, cursor.read_u8()?],
                aquatic: [cursor.read_u8()?, cursor.read_u8()?],
            });
            cursor.skip(12)?;
        }
        Profession::Revenant => {
            legends = Some(Legends {
                terrestrial: [cursor.read_u8()?, cursor.read_u8()?],
                aquatic: [cursor.read_u8()?, cursor.read_u8()?],
                inactive_terrestrial_palettes: [
                    cursor.read_u16()?,
                    cursor.read_u16()?,
                    cursor.read_u16()?,
                ],
                inactive_aquatic_palettes: [
                    cursor.read_u16()?,
                    cursor.read_u16()?,
                    cursor.read_u16()?,
                ],
            });
        }
        _ => cursor.skip(16)?,
    }

    // Legacy payloads end exactly here. The fork is an explicit
    // bytes-remaining check, not a try-read-and-catch, so a genuinely
    // truncated array still fails as truncation below.
    let is_legacy = cursor.at_end();
    let weapons = if is_legacy { None } else { read_u16_array(cursor)? };
    let skill_variants = if is_legacy { None } else { read_u32_array(cursor)? };

    Ok(BuildTemplate {
        profession,
        specializations,
        palettes,
        pets,
        legends,
        weapons,
        skill_variants,
    })
}

fn read_pair(cursor: &mut ByteCursor<'_>) -> Result<PalettePair> {
    let terrestrial = cursor.read_u16()?;
    let aquatic = cursor.read_u16()?;
    Ok(PalettePair { terrestrial, aquatic })
}

/// A count of zero decodes to `None`: the wire cannot distinguish an empty
/// array from an absent one.
fn read_u16_array(cursor: &mut ByteCursor<'_>) -> Result<Option<Vec<u16>>> {
    let count = cursor.read_u8()? as usize;
    if count == 0 {
        return Ok(None);
    }
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(cursor.read_u16()?);
    }
    Ok(Some(values))
}

fn read_u32_array(cursor: &mut ByteCursor<'_>) -> Result<Option<Vec<u32>>> {
    let count = cursor.read_u8()? as usize;
    if count == 0 {
        return Ok(None);
    }
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(cursor.read_u32()?);
    }
    Ok(Some(values))
}
