use crate::codec::sink::ByteSink;
use crate::codec::types::{BuildTemplate, PalettePair, Profession};

/// Writes a build template payload in the current extended form: the fixed
/// prefix, the 16-byte profession block selected by profession id, and both
/// trailing arrays (absent selections become explicit zero counts). The
/// legacy prefix-only form is never produced.
pub(super) fn write(sink: &mut ByteSink, template: &BuildTemplate) {
    sink.put_u8(template.profession.to_byte());

    for specialization in &template.specializations {
        sink.put_u8(specialization.id);
        sink.put_u8(specialization.traits.to_byte());
    }

    write_pair(sink, template.palettes.heal);
    for pair in template.palettes.utility {
        write_pair(sink, pair);
    }
    write_pair(sink, template.palettes.elite);

    match template.profession {
        Profession::Ranger => {
            let pets = template.pets.unwrap_or_default();
            sink.put_u8(pets.terrestrial[0]);
            sink.put_u8(pets.terrestrial[1]);
            sink.put_u8(pets.aquatic[0]);
            sink.put_u8(pets.aquatic[1]);
            // Pad out the rest of the 16-byte profession block.
            for _ in 0..12 {
                sink.put_u8(0);
            }
        }
        Profession::Revenant => {
            let legends = template.legends.unwrap_or_default();
            sink.put_u8(legends.terrestrial[0]);
            sink.put_u8(legends.terrestrial[1]);
            sink.put_u8(legends.aquatic[0]);
            sink.put_u8(legends.aquatic[1]);
            for palette in legends.inactive_terrestrial_palettes {
                sink.put_u16(palette);
            }
            for palette in legends.inactive_aquatic_palettes {
                sink.put_u16(palette);
            }
        }
        _ => {
            for _ in 0..16 {
                sink.put_u8(0);
            }
        }
    }

    sink.put_u16_array(template.weapons.as_deref().unwrap_or_default());
    sink.put_u32_array(template.skill_variants.as_deref().unwrap_or_default());
}

fn write_pair(sink: &mut ByteSink, pair: PalettePair) {
    sink.put_u16(pair.terrestrial);
    sink.put_u16(pair.aquatic);
}
