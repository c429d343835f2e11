use core::fmt;
use outcome_rail::{ErrorDescription, ErrorKind, Outcome, OutcomeException, SuccessKind};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageError {
    Corrupted,
    Full,
    ReadOnly,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageError::Corrupted => "Corrupted",
            StorageError::Full => "Full",
            StorageError::ReadOnly => "ReadOnly",
        };
        f.write_str(name)
    }
}

type StorageOutcome<T> = Outcome<T, StorageError>;

#[test]
fn custom_kinds_drive_predicates() {
    let outcome: StorageOutcome<u64> = Outcome::error_msg(StorageError::Full, "volume at 100%");

    assert!(outcome.is_error());
    assert!(outcome.is_error_of(StorageError::Full));
    assert!(!outcome.is_error_of(StorageError::ReadOnly));
    assert_eq!(outcome.error_kind(), Some(StorageError::Full));
}

#[test]
fn custom_kind_message_falls_back_to_display() {
    let outcome: StorageOutcome<()> = Outcome::error(StorageError::Corrupted);
    assert_eq!(outcome.error_message(), Some("Corrupted"));
}

#[test]
fn custom_kind_setters_keep_mutual_exclusion() {
    let outcome: StorageOutcome<u64> = Outcome::ok(5)
        .set_error_lines(StorageError::ReadOnly, ["mounted ro", "fsck pending"]);
    assert!(!outcome.is_success());
    assert_eq!(outcome.error_message(), Some("mounted ro\nfsck pending"));

    let outcome = outcome.set_success(SuccessKind::Ok).set_output(6_u64);
    assert!(outcome.is_success());
    assert!(!outcome.is_error_of(StorageError::ReadOnly));
    assert_eq!(outcome.ensure_output().unwrap(), 6);
}

#[test]
fn custom_kind_exception_round_trip() {
    let outcome: StorageOutcome<Vec<u8>> =
        Outcome::error_with(StorageError::Corrupted, "bad checksum", io::Error::other("crc"));

    let err = outcome.ensure_output().unwrap_err();
    let raised: &OutcomeException<StorageError> = err.as_failure().unwrap();
    assert_eq!(raised.to_string(), "Corrupted: bad checksum");

    let recovered: StorageOutcome<Vec<u8>> = raised.clone().into();
    assert!(recovered.is_error_of(StorageError::Corrupted));
    assert_eq!(recovered.error_message(), Some("bad checksum"));
}

#[test]
fn map_kind_translates_to_default_catalog() {
    let outcome: StorageOutcome<u8> = Outcome::error_msg(StorageError::Full, "quota");
    let uid = outcome.error_description().unwrap().uid();

    let translated: Outcome<u8> = outcome.map_kind(|kind| match kind {
        StorageError::Full => ErrorKind::Domain,
        StorageError::Corrupted | StorageError::ReadOnly => ErrorKind::Unknown,
    });

    assert!(translated.is_error_of(ErrorKind::Domain));
    assert_eq!(translated.error_message(), Some("quota"));
    assert_eq!(translated.error_description().unwrap().uid(), uid);
}

#[test]
fn custom_description_builds_outcome() {
    let desc = ErrorDescription::with_message(StorageError::ReadOnly, "");
    assert_eq!(desc.message(), "ReadOnly");

    let outcome: StorageOutcome<()> = Outcome::from_description(desc);
    assert!(outcome.is_error_of(StorageError::ReadOnly));
}
