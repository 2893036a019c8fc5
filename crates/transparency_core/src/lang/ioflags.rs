//! IO-flag literal vocabulary.
//!
//! A closed set of `@`-prefixed configuration words used inline in input and
//! output expressions: standard streams, transport kinds, open modes,
//! endianness, and encodings. Tokenized atomically so they never collide with
//! user identifiers.

use super::registry::{LangItemInfo, SINCE_1_0, Stability};

/// Stable identifier for every IO-flag literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoFlagId {
    Stdin,
    Stdout,
    Stderr,
    File,
    Udp,
    Tcp,
    Tls,
    In,
    Out,
    Xst,
    New,
    Crt,
    Ovw,
    Cli,
    Srv,
    Seq,
    Rnd,
    Mmp,
    Acc,
    Flx,
    Le,
    Be,
    Bin,
    Utf8,
    Utf16,
    Utf32,
}

/// Metadata for an IO-flag literal.
pub type IoFlagInfo = LangItemInfo<IoFlagId>;

const fn flag(id: IoFlagId, canonical: &'static str, description: &'static str) -> IoFlagInfo {
    IoFlagInfo {
        id,
        canonical,
        description,
        since: SINCE_1_0,
        stability: Stability::Stable,
    }
}

/// Registry of all IO-flag literals.
pub const IO_FLAGS: &[IoFlagInfo] = &[
    flag(IoFlagId::Stdin, "@stdin", "standard input stream"),
    flag(IoFlagId::Stdout, "@stdout", "standard output stream"),
    flag(IoFlagId::Stderr, "@stderr", "standard error stream"),
    flag(IoFlagId::File, "@file", "file transport"),
    flag(IoFlagId::Udp, "@udp", "UDP transport"),
    flag(IoFlagId::Tcp, "@tcp", "TCP transport"),
    flag(IoFlagId::Tls, "@tls", "TLS transport"),
    flag(IoFlagId::In, "@in", "inbound direction"),
    flag(IoFlagId::Out, "@out", "outbound direction"),
    flag(IoFlagId::Xst, "@xst", "open existing"),
    flag(IoFlagId::New, "@new", "create new, fail if existing"),
    flag(IoFlagId::Crt, "@crt", "create if missing"),
    flag(IoFlagId::Ovw, "@ovw", "overwrite"),
    flag(IoFlagId::Cli, "@cli", "client endpoint"),
    flag(IoFlagId::Srv, "@srv", "server endpoint"),
    flag(IoFlagId::Seq, "@seq", "sequential access"),
    flag(IoFlagId::Rnd, "@rnd", "random access"),
    flag(IoFlagId::Mmp, "@mmp", "memory-mapped access"),
    flag(IoFlagId::Acc, "@acc", "accumulate"),
    flag(IoFlagId::Flx, "@flx", "flexible sizing"),
    flag(IoFlagId::Le, "@le", "little-endian"),
    flag(IoFlagId::Be, "@be", "big-endian"),
    flag(IoFlagId::Bin, "@bin", "binary encoding"),
    flag(IoFlagId::Utf8, "@utf8", "UTF-8 encoding"),
    flag(IoFlagId::Utf16, "@utf16", "UTF-16 encoding"),
    flag(IoFlagId::Utf32, "@utf32", "UTF-32 encoding"),
];

/// Resolve a spelling (including the `@`) to an IO-flag id.
pub fn from_str(spelling: &str) -> Option<IoFlagId> {
    IO_FLAGS.iter().find(|f| f.canonical == spelling).map(|f| f.id)
}

/// Full metadata for an IO-flag id.
pub fn info_for(id: IoFlagId) -> &'static IoFlagInfo {
    IO_FLAGS
        .iter()
        .find(|f| f.id == id)
        .unwrap_or_else(|| unreachable!("io flag {id:?} missing from registry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trips_every_entry() {
        for f in IO_FLAGS {
            assert_eq!(from_str(f.canonical), Some(f.id));
        }
    }

    #[test]
    fn every_spelling_is_at_prefixed() {
        for f in IO_FLAGS {
            assert!(f.canonical.starts_with('@'));
        }
    }
}
