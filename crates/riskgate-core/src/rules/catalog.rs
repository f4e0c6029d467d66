//! Fixed lexical pattern catalog.
//!
//! The catalog models one specific storage policy and is not configurable.
//! It is compiled once on first use and shared read-only for the rest of the
//! process.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    DiskWriteOpen,
    DiskWriteCall,
    CryptoImport,
    CipherIdentifier,
    EncryptCall,
    SafeWrapper,
}

impl PatternId {
    /// Every pattern, in catalog order.
    pub const ALL: [PatternId; 6] = [
        PatternId::DiskWriteOpen,
        PatternId::DiskWriteCall,
        PatternId::CryptoImport,
        PatternId::CipherIdentifier,
        PatternId::EncryptCall,
        PatternId::SafeWrapper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::DiskWriteOpen => "disk-write-open",
            PatternId::DiskWriteCall => "disk-write-call",
            PatternId::CryptoImport => "crypto-import",
            PatternId::CipherIdentifier => "cipher-identifier",
            PatternId::EncryptCall => "encrypt-call",
            PatternId::SafeWrapper => "safe-wrapper",
        }
    }

    pub fn category(&self) -> SignalCategory {
        match self {
            PatternId::DiskWriteOpen | PatternId::DiskWriteCall => SignalCategory::WriteSignal,
            _ => SignalCategory::EncryptionSignal,
        }
    }

    fn source(&self) -> &'static str {
        match self {
            // open(<anything>, "<mode containing w/a/x, optionally with b>")
            PatternId::DiskWriteOpen => {
                r#"(?i)open\s*\(\s*[^)]*,\s*["'].*([wax]|[wax]b|b[axw]).*["']\s*\)"#
            }
            PatternId::DiskWriteCall => r"(?i)\.(write|writelines)\s*\(",
            PatternId::CryptoImport => r"(?m)^\s*(from\s+cryptography|import\s+cryptography)\b",
            PatternId::CipherIdentifier => r"\bFernet\b",
            PatternId::EncryptCall => r"\.encrypt\s*\(",
            PatternId::SafeWrapper => r"\bsecure_save\b|\bSecureStorage\.save\b",
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SignalCategory {
    WriteSignal,
    EncryptionSignal,
}

/// A named matcher and the category it belongs to.
#[derive(Debug)]
pub struct PatternEntry {
    pub id: PatternId,
    pub category: SignalCategory,
    regex: Regex,
}

impl PatternEntry {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug)]
pub struct PatternCatalog {
    entries: Vec<PatternEntry>,
}

static CATALOG: LazyLock<PatternCatalog> = LazyLock::new(PatternCatalog::build);

impl PatternCatalog {
    /// The process-wide catalog.
    pub fn global() -> &'static PatternCatalog {
        &CATALOG
    }

    fn build() -> Self {
        let entries = PatternId::ALL
            .iter()
            .map(|id| PatternEntry {
                id: *id,
                category: id.category(),
                regex: Regex::new(id.source()).expect("valid catalog pattern"),
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Entries are stored in `PatternId::ALL` order, so the discriminant
    /// doubles as the index.
    pub fn entry(&self, id: PatternId) -> &PatternEntry {
        &self.entries[id as usize]
    }

    pub fn is_match(&self, id: PatternId, text: &str) -> bool {
        self.entry(id).is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: PatternId, text: &str) -> bool {
        PatternCatalog::global().is_match(id, text)
    }

    #[test]
    fn entries_follow_declaration_order() {
        let ids: Vec<PatternId> = PatternCatalog::global()
            .entries()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, PatternId::ALL.to_vec());

        for id in PatternId::ALL {
            assert_eq!(PatternCatalog::global().entry(id).id, id);
        }
    }

    #[test]
    fn categories_split_write_and_encryption() {
        assert_eq!(PatternId::DiskWriteOpen.category(), SignalCategory::WriteSignal);
        assert_eq!(PatternId::DiskWriteCall.category(), SignalCategory::WriteSignal);
        for id in [
            PatternId::CryptoImport,
            PatternId::CipherIdentifier,
            PatternId::EncryptCall,
            PatternId::SafeWrapper,
        ] {
            assert_eq!(id.category(), SignalCategory::EncryptionSignal);
        }
    }

    #[test]
    fn catalog_is_shared() {
        assert!(std::ptr::eq(PatternCatalog::global(), PatternCatalog::global()));
    }

    #[test]
    fn open_with_write_modes_matches() {
        for mode in ["w", "a", "x", "wb", "ab", "xb", "bw", "ba", "bx", "W", "AB", "w+"] {
            let text = format!("open(path, \"{mode}\")");
            assert!(hit(PatternId::DiskWriteOpen, &text), "mode {mode} should match");
        }
        assert!(hit(PatternId::DiskWriteOpen, "open( 'out.txt' , 'w' )"));
        assert!(hit(
            PatternId::DiskWriteOpen,
            "open(FILENAME, \"a\", encoding=\"utf-8\")"
        ));
    }

    #[test]
    fn open_with_read_modes_does_not_match() {
        assert!(!hit(PatternId::DiskWriteOpen, "open(path, \"r\")"));
        assert!(!hit(PatternId::DiskWriteOpen, "open(key_file, \"rb\")"));
        assert!(!hit(PatternId::DiskWriteOpen, "open(\"notes.txt\")"));
    }

    #[test]
    fn write_method_matches_any_receiver() {
        assert!(hit(PatternId::DiskWriteCall, "f.write(data)"));
        assert!(hit(PatternId::DiskWriteCall, "sys.stdout.write ('x')"));
        assert!(hit(PatternId::DiskWriteCall, "out.writelines(rows)"));
        assert!(hit(PatternId::DiskWriteCall, "buf.WRITE(x)"));
        assert!(!hit(PatternId::DiskWriteCall, "write(data)"));
        assert!(!hit(PatternId::DiskWriteCall, "f.writer(data)"));
    }

    #[test]
    fn crypto_import_must_start_a_line() {
        assert!(hit(PatternId::CryptoImport, "from cryptography.fernet import Fernet"));
        assert!(hit(PatternId::CryptoImport, "x = 1\n    import cryptography\n"));
        assert!(!hit(PatternId::CryptoImport, "# we use from cryptography here"));
        assert!(!hit(PatternId::CryptoImport, "import cryptographyx"));
    }

    #[test]
    fn cipher_identifier_is_a_whole_word() {
        assert!(hit(PatternId::CipherIdentifier, "cipher = Fernet(key)"));
        assert!(!hit(PatternId::CipherIdentifier, "MultiFernetish"));
        assert!(!hit(PatternId::CipherIdentifier, "fernet"));
    }

    #[test]
    fn encrypt_call_is_case_sensitive_method_call() {
        assert!(hit(PatternId::EncryptCall, "cipher.encrypt(data)"));
        assert!(hit(PatternId::EncryptCall, "cipher.encrypt (data)"));
        assert!(!hit(PatternId::EncryptCall, "cipher.Encrypt(data)"));
        assert!(!hit(PatternId::EncryptCall, "encrypt(data)"));
    }

    #[test]
    fn safe_wrapper_whitelist() {
        assert!(hit(PatternId::SafeWrapper, "secure_save(path, data)"));
        assert!(hit(PatternId::SafeWrapper, "SecureStorage.save(data)"));
        assert!(!hit(PatternId::SafeWrapper, "insecure_saver(data)"));
        assert!(!hit(PatternId::SafeWrapper, "SecureStorage.load(data)"));
    }

    #[test]
    fn pattern_ids_render_kebab_case() {
        assert_eq!(PatternId::DiskWriteOpen.to_string(), "disk-write-open");
        assert_eq!(
            serde_json::to_string(&PatternId::CipherIdentifier).unwrap(),
            "\"cipher-identifier\""
        );
        assert_eq!(
            serde_json::to_string(&SignalCategory::EncryptionSignal).unwrap(),
            "\"encryption-signal\""
        );
    }
}
