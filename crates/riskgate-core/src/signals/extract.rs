use crate::rules::catalog::{PatternCatalog, PatternId};
use crate::signals::model::*;

/// Runs every catalog matcher over `text`.
///
/// A single lexical pass per pattern. No control-flow or semantic analysis:
/// a match inside a comment, a string literal or an unreachable branch
/// counts the same as live code.
pub fn extract_signals(text: &str) -> TextSignals {
    let catalog = PatternCatalog::global();

    TextSignals {
        write: WriteSignals {
            open_write: catalog.is_match(PatternId::DiskWriteOpen, text),
            write_call: catalog.is_match(PatternId::DiskWriteCall, text),
        },
        encryption: EncryptionSignals {
            crypto_import: catalog.is_match(PatternId::CryptoImport, text),
            cipher_identifier: catalog.is_match(PatternId::CipherIdentifier, text),
            encrypt_call: catalog.is_match(PatternId::EncryptCall, text),
            safe_wrapper: catalog.is_match(PatternId::SafeWrapper, text),
        },
    }
}

/// True if `text` opens something writable or calls a write-style method.
pub fn has_disk_write(text: &str) -> bool {
    extract_signals(text).write.any()
}

/// True if `text` carries an accepted encryption signal via either the
/// crypto-usage path or the approved-wrapper path.
pub fn has_encryption_signal(text: &str) -> bool {
    extract_signals(text).encryption.accepted()
}
