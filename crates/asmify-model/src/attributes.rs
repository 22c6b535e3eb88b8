//! Attribute-flag vocabularies.
//!
//! Closed sets of named flag values per attribute kind, mirroring the
//! `System.Reflection` enums. Access modifiers are multi-bit field values
//! (`Public = 0x6`), not single bits; membership is tested with the same
//! "all bits present" rule `HasFlag` uses.

/// One named value of an attribute-flag enum.
#[derive(Clone, Copy, Debug)]
pub struct AttrFlag {
    pub name: &'static str,
    pub bits: u32,
}

const fn flag(name: &'static str, bits: u32) -> AttrFlag {
    AttrFlag { name, bits }
}

/// Named `TypeAttributes` values. `NotPublic` is the zero member used when
/// no other flag applies.
pub const TYPE_ATTRIBUTES: &[AttrFlag] = &[
    flag("NotPublic", 0x0000_0000),
    flag("Public", 0x0000_0001),
    flag("NestedPublic", 0x0000_0002),
    flag("NestedPrivate", 0x0000_0003),
    flag("NestedFamily", 0x0000_0004),
    flag("NestedAssembly", 0x0000_0005),
    flag("NestedFamANDAssem", 0x0000_0006),
    flag("NestedFamORAssem", 0x0000_0007),
    flag("SequentialLayout", 0x0000_0008),
    flag("ExplicitLayout", 0x0000_0010),
    flag("Interface", 0x0000_0020),
    flag("Abstract", 0x0000_0080),
    flag("Sealed", 0x0000_0100),
    flag("SpecialName", 0x0000_0400),
    flag("RTSpecialName", 0x0000_0800),
    flag("Import", 0x0000_1000),
    flag("Serializable", 0x0000_2000),
    flag("WindowsRuntime", 0x0000_4000),
    flag("UnicodeClass", 0x0001_0000),
    flag("AutoClass", 0x0002_0000),
    flag("CustomFormatClass", 0x0003_0000),
    flag("HasSecurity", 0x0004_0000),
    flag("BeforeFieldInit", 0x0010_0000),
];

/// Named `MethodAttributes` values. `PrivateScope` is the zero member.
pub const METHOD_ATTRIBUTES: &[AttrFlag] = &[
    flag("PrivateScope", 0x0000),
    flag("Private", 0x0001),
    flag("FamANDAssem", 0x0002),
    flag("Assembly", 0x0003),
    flag("Family", 0x0004),
    flag("FamORAssem", 0x0005),
    flag("Public", 0x0006),
    flag("UnmanagedExport", 0x0008),
    flag("Static", 0x0010),
    flag("Final", 0x0020),
    flag("Virtual", 0x0040),
    flag("HideBySig", 0x0080),
    flag("NewSlot", 0x0100),
    flag("CheckAccessOnOverride", 0x0200),
    flag("Abstract", 0x0400),
    flag("SpecialName", 0x0800),
    flag("RTSpecialName", 0x1000),
    flag("PinvokeImpl", 0x2000),
    flag("HasSecurity", 0x4000),
    flag("RequireSecObject", 0x8000),
];

/// The named zero member of a vocabulary, if it declares one.
pub fn zero_member(table: &[AttrFlag]) -> Option<&'static str> {
    table.iter().find(|f| f.bits == 0).map(|f| f.name)
}
