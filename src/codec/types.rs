use bitflags::bitflags;

/// Defines the byte representation for each chatlink variant.
///
/// These values are protocol constants and must not be renumbered: the
/// discriminant is read as the first payload byte on decode and re-emitted
/// verbatim as the first output byte on encode.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ChatlinkType {
    Coin = 0x01,
    Item = 0x02,
    NpcText = 0x03,
    Map = 0x04,
    PvpGame = 0x05,
    Skill = 0x06,
    Trait = 0x07,
    User = 0x08,
    Recipe = 0x09,
    Wardrobe = 0x0A,
    Outfit = 0x0B,
    WvwObjective = 0x0C,
    BuildTemplate = 0x0D,
    Achievement = 0x0E,
    FashionTemplate = 0x0F,
}

impl ChatlinkType {
    /// Converts a discriminant byte into a ChatlinkType.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(ChatlinkType::Coin),
            0x02 => Some(ChatlinkType::Item),
            0x03 => Some(ChatlinkType::NpcText),
            0x04 => Some(ChatlinkType::Map),
            0x05 => Some(ChatlinkType::PvpGame),
            0x06 => Some(ChatlinkType::Skill),
            0x07 => Some(ChatlinkType::Trait),
            0x08 => Some(ChatlinkType::User),
            0x09 => Some(ChatlinkType::Recipe),
            0x0A => Some(ChatlinkType::Wardrobe),
            0x0B => Some(ChatlinkType::Outfit),
            0x0C => Some(ChatlinkType::WvwObjective),
            0x0D => Some(ChatlinkType::BuildTemplate),
            0x0E => Some(ChatlinkType::Achievement),
            0x0F => Some(ChatlinkType::FashionTemplate),
            _ => None, // Unknown discriminant
        }
    }
}

/// A decoded chatlink: the closed tagged union keyed by [`ChatlinkType`].
///
/// Records are immutable value objects, constructed whole by the decoder or
/// supplied whole to the encoder.
#[derive(Debug, PartialEq, Clone)]
pub enum Chatlink {
    /// A currency amount in copper coins.
    Coin { amount: u32 },
    Item(ItemLink),
    NpcText { id: u32 },
    Map { id: u32 },
    /// Reserved variant with no documented payload; decodes to this opaque
    /// marker without consuming bytes and cannot be encoded.
    PvpGame,
    Skill { id: u32 },
    Trait { id: u32 },
    User(UserLink),
    Recipe { id: u32 },
    Wardrobe { id: u32 },
    Outfit { id: u32 },
    WvwObjective { objective_id: u32, map_id: u32 },
    BuildTemplate(BuildTemplate),
    Achievement { id: u32 },
    FashionTemplate(FashionTemplate),
}

impl Chatlink {
    /// Returns the corresponding ChatlinkType for the record.
    pub fn link_type(&self) -> ChatlinkType {
        match self {
            Chatlink::Coin { .. } => ChatlinkType::Coin,
            Chatlink::Item(_) => ChatlinkType::Item,
            Chatlink::NpcText { .. } => ChatlinkType::NpcText,
            Chatlink::Map { .. } => ChatlinkType::Map,
            Chatlink::PvpGame => ChatlinkType::PvpGame,
            Chatlink::Skill { .. } => ChatlinkType::Skill,
            Chatlink::Trait { .. } => ChatlinkType::Trait,
            Chatlink::User(_) => ChatlinkType::User,
            Chatlink::Recipe { .. } => ChatlinkType::Recipe,
            Chatlink::Wardrobe { .. } => ChatlinkType::Wardrobe,
            Chatlink::Outfit { .. } => ChatlinkType::Outfit,
            Chatlink::WvwObjective { .. } => ChatlinkType::WvwObjective,
            Chatlink::BuildTemplate(_) => ChatlinkType::BuildTemplate,
            Chatlink::Achievement { .. } => ChatlinkType::Achievement,
            Chatlink::FashionTemplate(_) => ChatlinkType::FashionTemplate,
        }
    }
}

bitflags! {
    /// Wire-format presence flags for the optional item fields.
    ///
    /// Never stored in [`ItemLink`]: the byte is recomputed from which
    /// options are `Some` on encode and consumed on decode.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct ItemFlags: u8 {
        const SKIN = 0x80;
        const UPGRADE_1 = 0x40;
        const UPGRADE_2 = 0x20;
        const NAME_DECRYPTION_KEY = 0x10;
        const DESCRIPTION_DECRYPTION_KEY = 0x08;
    }
}

/// An item reference with its optional flag-gated fields.
///
/// `item_id` only uses the low 24 bits on the wire; the high byte of the
/// id word carries the presence flags. A `Some(0)` field is a valid present
/// value, distinct from `None`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ItemLink {
    pub item_id: u32,
    pub quantity: u8,
    pub skin: Option<u32>,
    pub upgrade1: Option<u32>,
    pub upgrade2: Option<u32>,
    /// Opaque decryption key, passed through without interpretation.
    pub name_decryption_key: Option<u64>,
    /// Opaque decryption key, passed through without interpretation.
    pub description_decryption_key: Option<u64>,
}

impl ItemLink {
    /// Creates a single-item link with no optional fields.
    pub fn new(item_id: u32) -> Self {
        ItemLink {
            item_id,
            quantity: 1,
            skin: None,
            upgrade1: None,
            upgrade2: None,
            name_decryption_key: None,
            description_decryption_key: None,
        }
    }

    /// Computes the wire flag byte from which optional fields are present.
    pub fn flags(&self) -> ItemFlags {
        let mut flags = ItemFlags::empty();
        flags.set(ItemFlags::SKIN, self.skin.is_some());
        flags.set(ItemFlags::UPGRADE_1, self.upgrade1.is_some());
        flags.set(ItemFlags::UPGRADE_2, self.upgrade2.is_some());
        flags.set(ItemFlags::NAME_DECRYPTION_KEY, self.name_decryption_key.is_some());
        flags.set(
            ItemFlags::DESCRIPTION_DECRYPTION_KEY,
            self.description_decryption_key.is_some(),
        );
        flags
    }
}

/// A reference to another player.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserLink {
    /// Account UUID in its canonical hyphenated uppercase form.
    pub account_id: String,
    pub character_name: String,
}

/// One of the nine playable professions, or an unrecognized byte.
///
/// Unknown bytes are kept verbatim so they survive a decode/encode round
/// trip; values 1-9 always normalize to the named variants.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Profession {
    Guardian,
    Warrior,
    Engineer,
    Ranger,
    Thief,
    Elementalist,
    Mesmer,
    Necromancer,
    Revenant,
    Other(u8),
}

impl Profession {
    /// Converts a profession byte into a Profession.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Profession::Guardian,
            2 => Profession::Warrior,
            3 => Profession::Engineer,
            4 => Profession::Ranger,
            5 => Profession::Thief,
            6 => Profession::Elementalist,
            7 => Profession::Mesmer,
            8 => Profession::Necromancer,
            9 => Profession::Revenant,
            other => Profession::Other(other),
        }
    }

    /// Returns the wire byte for the profession.
    pub fn to_byte(self) -> u8 {
        match self {
            Profession::Guardian => 1,
            Profession::Warrior => 2,
            Profession::Engineer => 3,
            Profession::Ranger => 4,
            Profession::Thief => 5,
            Profession::Elementalist => 6,
            Profession::Mesmer => 7,
            Profession::Necromancer => 8,
            Profession::Revenant => 9,
            Profession::Other(other) => other,
        }
    }
}

/// One choice in a specialization's trait tier.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum TraitChoice {
    #[default]
    None,
    Top,
    Middle,
    Bottom,
}

impl TraitChoice {
    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => TraitChoice::None,
            1 => TraitChoice::Top,
            2 => TraitChoice::Middle,
            _ => TraitChoice::Bottom,
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            TraitChoice::None => 0,
            TraitChoice::Top => 1,
            TraitChoice::Middle => 2,
            TraitChoice::Bottom => 3,
        }
    }
}

/// The three trait choices of one specialization, packed into a single wire
/// byte as 2-bit fields at bit offsets 0, 2 and 4. Bits 6-7 are unused.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct TraitSelection(pub [TraitChoice; 3]);

impl TraitSelection {
    /// Unpacks a trait-choice byte. The two high bits are ignored.
    pub fn from_byte(byte: u8) -> Self {
        TraitSelection([
            TraitChoice::from_bits(byte),
            TraitChoice::from_bits(byte >> 2),
            TraitChoice::from_bits(byte >> 4),
        ])
    }

    /// Packs the three choices back into the wire byte.
    pub fn to_byte(self) -> u8 {
        let TraitSelection([a, b, c]) = self;
        a.to_bits() | (b.to_bits() << 2) | (c.to_bits() << 4)
    }
}

/// A specialization id together with its trait choices.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Specialization {
    pub id: u8,
    pub traits: TraitSelection,
}

/// A terrestrial/aquatic pair of skill palette ids.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct PalettePair {
    pub terrestrial: u16,
    pub aquatic: u16,
}

/// The ten skill palette ids of a build, in slot order.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct SkillPalettes {
    pub heal: PalettePair,
    pub utility: [PalettePair; 3],
    pub elite: PalettePair,
}

/// Ranger pet selection, two terrestrial and two aquatic pet ids.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Pets {
    pub terrestrial: [u8; 2],
    pub aquatic: [u8; 2],
}

/// Revenant legend selection: active/inactive legend ids per environment
/// plus the utility palettes of the inactive legends.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Legends {
    /// Active then inactive terrestrial legend id.
    pub terrestrial: [u8; 2],
    /// Active then inactive aquatic legend id.
    pub aquatic: [u8; 2],
    pub inactive_terrestrial_palettes: [u16; 3],
    pub inactive_aquatic_palettes: [u16; 3],
}

/// A build template: profession, specializations, skill palettes, the
/// profession-specific block and the optional trailing selections.
///
/// `pets` is populated for Ranger payloads only and `legends` for Revenant
/// payloads only; the encoder picks the block from `profession` and ignores
/// the other field. `weapons`/`skill_variants` decode to `None` both for
/// legacy payloads (no trailing bytes) and for explicit zero counts — the
/// two are indistinguishable on the wire.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BuildTemplate {
    pub profession: Profession,
    pub specializations: [Specialization; 3],
    pub palettes: SkillPalettes,
    pub pets: Option<Pets>,
    pub legends: Option<Legends>,
    pub weapons: Option<Vec<u16>>,
    pub skill_variants: Option<Vec<u32>>,
}

/// The four dye channel ids of one equipment piece.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DyeSelection(pub [u16; 4]);

impl Default for DyeSelection {
    /// Dye channel 1 is the undyed default on the wire.
    fn default() -> Self {
        DyeSelection([1; 4])
    }
}

/// An equipment slot: skin id plus its dye channels.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct EquipmentSlot {
    pub id: u16,
    pub dyes: DyeSelection,
}

/// The six weapon skin slots of a fashion template.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct WeaponSkins {
    /// Aquatic mainhand and offhand.
    pub aquatic: [u16; 2],
    /// Weapon set A mainhand and offhand.
    pub set_a: [u16; 2],
    /// Weapon set B mainhand and offhand.
    pub set_b: [u16; 2],
}

bitflags! {
    /// Per-slot rendering toggles of a fashion template.
    ///
    /// Real tokens carry bits beyond the named ones; undefined bits are
    /// retained verbatim so they survive a round trip.
    #[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
    pub struct VisibilityFlags: u16 {
        const AQUABREATHER = 1;
        const BACKPACK = 2;
        const GLOVES = 16;
        const HELMET = 32;
        const SHOULDERS = 128;
        const OUTFIT = 256;
        const AQUATIC_WEAPON = 512;
        const AQUATIC_WEAPON_OFFHAND = 1024;
        const WEAPON_A = 2048;
        const WEAPON_A_OFFHAND = 4096;
        const WEAPON_B = 8192;
        const WEAPON_B_OFFHAND = 16384;
    }
}

/// A fashion template: fixed equipment, weapon skin and visibility fields.
/// Every field is always present on the wire at a fixed offset.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FashionTemplate {
    pub aquabreather: u16,
    pub backpack: EquipmentSlot,
    pub coat: EquipmentSlot,
    pub boots: EquipmentSlot,
    pub gloves: EquipmentSlot,
    pub helm: EquipmentSlot,
    pub leggings: EquipmentSlot,
    pub shoulders: EquipmentSlot,
    pub outfit: EquipmentSlot,
    pub weapons: WeaponSkins,
    pub visibility: VisibilityFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chatlink_type_from_byte() {
        assert_eq!(ChatlinkType::from_byte(0x01), Some(ChatlinkType::Coin));
        assert_eq!(ChatlinkType::from_byte(0x0F), Some(ChatlinkType::FashionTemplate));
        assert_eq!(ChatlinkType::from_byte(0x00), None);
        assert_eq!(ChatlinkType::from_byte(0x10), None);
        assert_eq!(ChatlinkType::from_byte(0xFF), None);
    }

    #[test]
    fn test_trait_selection_packing() {
        // 0b10_01_11 -> bottom, top, middle at offsets 0, 2, 4
        let selection = TraitSelection::from_byte(0b100111);
        assert_eq!(
            selection,
            TraitSelection([TraitChoice::Bottom, TraitChoice::Top, TraitChoice::Middle])
        );
        assert_eq!(selection.to_byte(), 0b100111);
    }

    #[test]
    fn test_trait_selection_ignores_high_bits() {
        assert_eq!(
            TraitSelection::from_byte(0b11000000),
            TraitSelection::default()
        );
        assert_eq!(TraitSelection::from_byte(0b11000000).to_byte(), 0);
    }

    #[test]
    fn test_profession_round_trip() {
        for byte in 0..=u8::MAX {
            assert_eq!(Profession::from_byte(byte).to_byte(), byte);
        }
        assert_eq!(Profession::from_byte(4), Profession::Ranger);
        assert_eq!(Profession::from_byte(9), Profession::Revenant);
        assert_eq!(Profession::from_byte(12), Profession::Other(12));
    }

    #[test]
    fn test_item_flags_derivation() {
        let mut item = ItemLink::new(46762);
        assert_eq!(item.flags(), ItemFlags::empty());

        item.upgrade2 = Some(24615);
        assert_eq!(item.flags(), ItemFlags::UPGRADE_2);
        assert_eq!(item.flags().bits(), 0x20);

        item.skin = Some(3709);
        item.upgrade1 = Some(24575);
        assert_eq!(
            item.flags(),
            ItemFlags::SKIN | ItemFlags::UPGRADE_1 | ItemFlags::UPGRADE_2
        );
    }

    #[test]
    fn test_visibility_flags_retain_undefined_bits() {
        let flags = VisibilityFlags::from_bits_retain(32767);
        assert_eq!(flags.bits(), 32767);
        assert!(flags.contains(VisibilityFlags::OUTFIT));
    }
}
