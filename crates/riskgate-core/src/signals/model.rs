use serde::{Deserialize, Serialize};

use crate::rules::catalog::PatternId;

/// Which catalog entries matched one text body.
///
/// These are pure observations. Combining them into a verdict happens in
/// `rules::eval`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextSignals {
    pub write: WriteSignals,
    pub encryption: EncryptionSignals,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteSignals {
    /// `open(..., "<w|a|x>[b]")`.
    pub open_write: bool,
    /// `.write(` / `.writelines(` on any receiver.
    pub write_call: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncryptionSignals {
    pub crypto_import: bool,
    pub cipher_identifier: bool,
    pub encrypt_call: bool,
    pub safe_wrapper: bool,
}

impl WriteSignals {
    pub fn any(&self) -> bool {
        self.open_write || self.write_call
    }
}

impl EncryptionSignals {
    /// Crypto-usage path: a cryptography reference together with an
    /// `.encrypt(` call.
    pub fn crypto_usage(&self) -> bool {
        (self.crypto_import || self.cipher_identifier) && self.encrypt_call
    }

    /// Approved-wrapper path.
    pub fn approved_wrapper(&self) -> bool {
        self.safe_wrapper
    }

    pub fn accepted(&self) -> bool {
        self.crypto_usage() || self.approved_wrapper()
    }
}

impl TextSignals {
    /// Matched pattern ids in catalog order.
    pub fn matched(&self) -> Vec<PatternId> {
        let flags = [
            (PatternId::DiskWriteOpen, self.write.open_write),
            (PatternId::DiskWriteCall, self.write.write_call),
            (PatternId::CryptoImport, self.encryption.crypto_import),
            (PatternId::CipherIdentifier, self.encryption.cipher_identifier),
            (PatternId::EncryptCall, self.encryption.encrypt_call),
            (PatternId::SafeWrapper, self.encryption.safe_wrapper),
        ];

        flags
            .into_iter()
            .filter_map(|(id, hit)| hit.then_some(id))
            .collect()
    }
}

/// Classification attached to a single source file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finding {
    DecodeFailure,
    DiskWriteDetected,
    EncryptionSignalDetected,
    NoSignal,
}
