//! Codec for the Guild Wars 2 chat link token format.
//!
//! A chatlink is a `[&<base64>]` token wrapping a compact binary payload:
//! a discriminant byte selecting one of 15 variants, followed by that
//! variant's field layout. This crate decodes tokens into typed
//! [`Chatlink`] records and encodes records back to tokens, as exact
//! inverses of each other.

pub mod codec;
pub mod internal;

pub use codec::decode::{
    decode, decode_all, decode_all_of, decode_expecting, try_decode, try_decode_expecting,
};
pub use codec::encode::encode;
pub use codec::types::{
    BuildTemplate, Chatlink, ChatlinkType, DyeSelection, EquipmentSlot, FashionTemplate,
    ItemFlags, ItemLink, Legends, PalettePair, Pets, Profession, SkillPalettes, Specialization,
    TraitChoice, TraitSelection, UserLink, VisibilityFlags, WeaponSkins,
};
pub use internal::error::{Error, Result};
