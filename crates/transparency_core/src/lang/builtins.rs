//! Builtin intrinsic vocabulary.
//!
//! The closed set of `@`-prefixed intrinsic operation names, including the
//! parametrized user-slot families `@getuserN` / `@setuserN` / `@clruserN`
//! where `N` is one character of the slot alphabet `0-9`, `a`, `b`, `A`, `B`.
//!
//! ## Notes
//! - [`classify`] implements longest-match resolution for the lexer: the whole
//!   `@`-word is scanned first, then looked up here.
//! - `@internal` is a keyword, not a builtin; the keyword registry wins.
//! - Keeping the list enumerated (instead of lexing any `@`-word) gives
//!   spell-checking of builtins in editors for free.

use super::registry::{LangItemInfo, SINCE_1_0, Stability};

/// Stable identifier for every builtin intrinsic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinId {
    // Iteration and element access
    Fwd,
    Bwd,
    Elt,
    Ord,
    Key,
    Val,
    Del,
    Adv,

    // Container operations
    Pop,
    PopHead,
    PopTail,
    Head,
    Tail,
    Nth,
    Append,
    Prepend,
    PushHead,
    PushTail,
    Augment,
    Remove,
    Unique,
    Cat,
    Index,
    Byte,
    Ordinal,
    Id,
    Name,
    Seek,
    Tell,
    Empty,
    Full,
    Depth,
    Space,
    Unused,
    Flush,
    Reset,
    Accept,
    StartRecording,
    StopRecording,
    IsRecording,
    GetErrors,
    SetErrors,
    Defined,
    RefCount,
    Cap,
    Alignment,
    Size,
    IoSize,
    Ms1,
    Ls1,
    ByteSwap,
    ToFloat,
    FromFloat,
    Min,
    Max,
    MulAdd,
    MulSub,
    SubMul,
    Sort,

    // User slots (parametrized: one slot character follows the name)
    GetUser,
    SetUser,
    ClrUser,

    // Scheduling and dataflow
    Schedule,
    Get,
    Put,
    Join,
    Built,
    CtcBuilt,
    CtcEtc,

    // Tensor operations
    TensorAddress,
    TensorAllocate,
    TensorBind,
    TensorCard,
    TensorCast,
    TensorDimensions,
    TensorEmbed,
    TensorEmpty,
    TensorExtract,
    TensorImport,
    TensorIndex,
    TensorIndexAddress,
    TensorIndexOffset,
    TensorIsDevice,
    TensorIsHost,
    TensorLength,
    TensorOffset,
    TensorOnDevice,
    TensorOnHost,
    TensorOrdinal,
    TensorProject,
    TensorRead,
    TensorRegion,
    TensorShape,
    TensorSize,
    TensorStride,
    TensorWrite,

    // Tensor-dimension helpers
    TensordimsAlign,
    TensordimsDenormalize,
    TensordimsMeasure,
    TensordimsNormalize,
}

/// Metadata for a builtin intrinsic.
pub type BuiltinInfo = LangItemInfo<BuiltinId>;

/// The slot alphabet for the `@getuserN` / `@setuserN` / `@clruserN` families.
pub const USER_SLOT_ALPHABET: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'A', 'B'];

const fn b(id: BuiltinId, canonical: &'static str, description: &'static str) -> BuiltinInfo {
    BuiltinInfo {
        id,
        canonical,
        description,
        since: SINCE_1_0,
        stability: Stability::Stable,
    }
}

/// Registry of all builtin intrinsics.
///
/// For the user-slot families the canonical spelling is the name *without* the
/// trailing slot character; [`classify`] handles the parametrized forms.
pub const BUILTINS: &[BuiltinInfo] = &[
    b(BuiltinId::Fwd, "@fwd", "forward iterator"),
    b(BuiltinId::Bwd, "@bwd", "backward iterator"),
    b(BuiltinId::Elt, "@elt", "iterator element"),
    b(BuiltinId::Ord, "@ord", "iterator ordinal"),
    b(BuiltinId::Key, "@key", "iterator key"),
    b(BuiltinId::Val, "@val", "iterator value"),
    b(BuiltinId::Del, "@del", "delete at iterator"),
    b(BuiltinId::Adv, "@adv", "advance iterator"),
    b(BuiltinId::Pop, "@pop", "pop element"),
    b(BuiltinId::PopHead, "@pophead", "pop from head"),
    b(BuiltinId::PopTail, "@poptail", "pop from tail"),
    b(BuiltinId::Head, "@head", "head element"),
    b(BuiltinId::Tail, "@tail", "tail element"),
    b(BuiltinId::Nth, "@nth", "nth element"),
    b(BuiltinId::Append, "@append", "append"),
    b(BuiltinId::Prepend, "@prepend", "prepend"),
    b(BuiltinId::PushHead, "@pushhead", "push at head"),
    b(BuiltinId::PushTail, "@pushtail", "push at tail"),
    b(BuiltinId::Augment, "@augment", "augment container"),
    b(BuiltinId::Remove, "@remove", "remove element"),
    b(BuiltinId::Unique, "@unique", "drop duplicates"),
    b(BuiltinId::Cat, "@cat", "concatenate"),
    b(BuiltinId::Index, "@index", "index lookup"),
    b(BuiltinId::Byte, "@byte", "byte access"),
    b(BuiltinId::Ordinal, "@ordinal", "ordinal of element"),
    b(BuiltinId::Id, "@id", "object identity"),
    b(BuiltinId::Name, "@name", "object name"),
    b(BuiltinId::Seek, "@seek", "seek stream"),
    b(BuiltinId::Tell, "@tell", "stream position"),
    b(BuiltinId::Empty, "@empty", "emptiness test"),
    b(BuiltinId::Full, "@full", "fullness test"),
    b(BuiltinId::Depth, "@depth", "queue depth"),
    b(BuiltinId::Space, "@space", "remaining space"),
    b(BuiltinId::Unused, "@unused", "unused capacity"),
    b(BuiltinId::Flush, "@flush", "flush stream"),
    b(BuiltinId::Reset, "@reset", "reset state"),
    b(BuiltinId::Accept, "@accept", "accept connection"),
    b(BuiltinId::StartRecording, "@startrecording", "start recording"),
    b(BuiltinId::StopRecording, "@stoprecording", "stop recording"),
    b(BuiltinId::IsRecording, "@isrecording", "recording test"),
    b(BuiltinId::GetErrors, "@geterrors", "read error state"),
    b(BuiltinId::SetErrors, "@seterrors", "write error state"),
    b(BuiltinId::Defined, "@defined", "definedness test"),
    b(BuiltinId::RefCount, "@refcount", "reference count"),
    b(BuiltinId::Cap, "@cap", "capacity"),
    b(BuiltinId::Alignment, "@alignment", "alignment"),
    b(BuiltinId::Size, "@size", "size in elements"),
    b(BuiltinId::IoSize, "@iosize", "size in IO units"),
    b(BuiltinId::Ms1, "@ms1", "most significant set bit"),
    b(BuiltinId::Ls1, "@ls1", "least significant set bit"),
    b(BuiltinId::ByteSwap, "@byteswap", "byte swap"),
    b(BuiltinId::ToFloat, "@tofloat", "convert to float"),
    b(BuiltinId::FromFloat, "@fromfloat", "convert from float"),
    b(BuiltinId::Min, "@min", "minimum"),
    b(BuiltinId::Max, "@max", "maximum"),
    b(BuiltinId::MulAdd, "@muladd", "fused multiply-add"),
    b(BuiltinId::MulSub, "@mulsub", "fused multiply-subtract"),
    b(BuiltinId::SubMul, "@submul", "fused subtract-multiply"),
    b(BuiltinId::Sort, "@sort", "sort container"),
    b(BuiltinId::GetUser, "@getuser", "read user slot (parametrized)"),
    b(BuiltinId::SetUser, "@setuser", "write user slot (parametrized)"),
    b(BuiltinId::ClrUser, "@clruser", "clear user slot (parametrized)"),
    b(BuiltinId::Schedule, "@schedule", "schedule node"),
    b(BuiltinId::Get, "@get", "dataflow get"),
    b(BuiltinId::Put, "@put", "dataflow put"),
    b(BuiltinId::Join, "@join", "dataflow join"),
    b(BuiltinId::Built, "@built", "construction test"),
    b(BuiltinId::CtcBuilt, "@ctcbuilt", "compile-time-constant built"),
    b(BuiltinId::CtcEtc, "@ctcetc", "compile-time-constant etc"),
    b(BuiltinId::TensorAddress, "@tensor_address", "tensor element address"),
    b(BuiltinId::TensorAllocate, "@tensor_allocate", "allocate tensor"),
    b(BuiltinId::TensorBind, "@tensor_bind", "bind tensor storage"),
    b(BuiltinId::TensorCard, "@tensor_card", "tensor cardinality"),
    b(BuiltinId::TensorCast, "@tensor_cast", "cast tensor"),
    b(BuiltinId::TensorDimensions, "@tensor_dimensions", "tensor dimensions"),
    b(BuiltinId::TensorEmbed, "@tensor_embed", "embed tensor"),
    b(BuiltinId::TensorEmpty, "@tensor_empty", "tensor emptiness"),
    b(BuiltinId::TensorExtract, "@tensor_extract", "extract subtensor"),
    b(BuiltinId::TensorImport, "@tensor_import", "import tensor"),
    b(BuiltinId::TensorIndex, "@tensor_index", "tensor index"),
    b(BuiltinId::TensorIndexAddress, "@tensor_index_address", "tensor index address"),
    b(BuiltinId::TensorIndexOffset, "@tensor_index_offset", "tensor index offset"),
    b(BuiltinId::TensorIsDevice, "@tensor_isdevice", "device-residency test"),
    b(BuiltinId::TensorIsHost, "@tensor_ishost", "host-residency test"),
    b(BuiltinId::TensorLength, "@tensor_length", "tensor length"),
    b(BuiltinId::TensorOffset, "@tensor_offset", "tensor offset"),
    b(BuiltinId::TensorOnDevice, "@tensor_ondevice", "move tensor to device"),
    b(BuiltinId::TensorOnHost, "@tensor_onhost", "move tensor to host"),
    b(BuiltinId::TensorOrdinal, "@tensor_ordinal", "tensor ordinal"),
    b(BuiltinId::TensorProject, "@tensor_project", "project tensor"),
    b(BuiltinId::TensorRead, "@tensor_read", "read tensor"),
    b(BuiltinId::TensorRegion, "@tensor_region", "tensor region"),
    b(BuiltinId::TensorShape, "@tensor_shape", "tensor shape"),
    b(BuiltinId::TensorSize, "@tensor_size", "tensor size"),
    b(BuiltinId::TensorStride, "@tensor_stride", "tensor stride"),
    b(BuiltinId::TensorWrite, "@tensor_write", "write tensor"),
    b(BuiltinId::TensordimsAlign, "@tensordims_align", "align tensor dims"),
    b(BuiltinId::TensordimsDenormalize, "@tensordims_denormalize", "denormalize tensor dims"),
    b(BuiltinId::TensordimsMeasure, "@tensordims_measure", "measure tensor dims"),
    b(BuiltinId::TensordimsNormalize, "@tensordims_normalize", "normalize tensor dims"),
];

/// Resolve a complete `@`-word spelling to a builtin id.
///
/// Handles both the fixed names and the parametrized user-slot families
/// (`@getuser3`, `@setusera`, `@clruserB`, ...). Returns `None` for unknown
/// words, including user-slot names with a missing or invalid slot character.
pub fn classify(spelling: &str) -> Option<BuiltinId> {
    for family in [
        ("@getuser", BuiltinId::GetUser),
        ("@setuser", BuiltinId::SetUser),
        ("@clruser", BuiltinId::ClrUser),
    ] {
        if let Some(rest) = spelling.strip_prefix(family.0) {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) if USER_SLOT_ALPHABET.contains(&c) => Some(family.1),
                _ => None,
            };
        }
    }
    BUILTINS
        .iter()
        .find(|i| i.canonical == spelling && !matches!(i.id, BuiltinId::GetUser | BuiltinId::SetUser | BuiltinId::ClrUser))
        .map(|i| i.id)
}

/// Full metadata for a builtin id.
pub fn info_for(id: BuiltinId) -> &'static BuiltinInfo {
    BUILTINS
        .iter()
        .find(|i| i.id == id)
        .unwrap_or_else(|| unreachable!("builtin {id:?} missing from registry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_names_classify_to_their_ids() {
        for i in BUILTINS {
            match i.id {
                BuiltinId::GetUser | BuiltinId::SetUser | BuiltinId::ClrUser => {}
                id => assert_eq!(classify(i.canonical), Some(id), "{}", i.canonical),
            }
        }
    }

    #[test]
    fn user_slot_families_require_exactly_one_slot_char() {
        assert_eq!(classify("@getuser3"), Some(BuiltinId::GetUser));
        assert_eq!(classify("@setusera"), Some(BuiltinId::SetUser));
        assert_eq!(classify("@clruserB"), Some(BuiltinId::ClrUser));
        assert_eq!(classify("@getuser"), None);
        assert_eq!(classify("@getuser10"), None);
        assert_eq!(classify("@getuserc"), None);
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(classify("@bogus"), None);
        assert_eq!(classify("@tensor"), None);
        assert_eq!(classify("@internal"), None);
    }
}
