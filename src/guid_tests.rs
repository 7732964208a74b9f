use super::*;

#[test]
fn parses_high_nibble_first() {
    let guid = Guid::parse("CAFE000000000000000000000000F00D").unwrap();
    let bytes = guid.as_bytes();
    assert_eq!(bytes[0], 0xCA);
    assert_eq!(bytes[1], 0xFE);
    assert_eq!(bytes[14], 0xF0);
    assert_eq!(bytes[15], 0x0D);
}

#[test]
fn mixed_case_parses_identically() {
    let upper = Guid::parse("DEAD000000000000000000000000D0D0").unwrap();
    let lower = Guid::parse("dead000000000000000000000000d0d0").unwrap();
    let mixed = Guid::parse("DeAd000000000000000000000000d0D0").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
}

#[test]
fn rejects_wrong_length() {
    assert!(matches!(Guid::parse(""), Err(PicError::InvalidGuid(_))));
    assert!(matches!(
        Guid::parse("CAFE000000000000000000000000F00"),
        Err(PicError::InvalidGuid(_))
    ));
    assert!(matches!(
        Guid::parse("CAFE000000000000000000000000F00D0"),
        Err(PicError::InvalidGuid(_))
    ));
}

#[test]
fn rejects_non_hex_char() {
    let err = Guid::parse("CAFE00000000000000000000000GF00D").unwrap_err();
    assert!(matches!(err, PicError::InvalidGuidChar('G')));
}

#[test]
fn zero_detection() {
    assert!(Guid::ZERO.is_zero());
    assert!(Guid::default().is_zero());
    assert!(
        Guid::parse("00000000000000000000000000000000")
            .unwrap()
            .is_zero()
    );
    assert!(
        !Guid::parse("00000000000000000000000000000001")
            .unwrap()
            .is_zero()
    );
}

#[test]
fn display_is_uppercase_hex() {
    let guid: Guid = "cafe000000000000000000000000f00d".parse().unwrap();
    assert_eq!(guid.to_string(), "CAFE000000000000000000000000F00D");
}

#[test]
fn serde_uses_hex_string() {
    let guid = Guid::parse("CAFE000000000000000000000000F00D").unwrap();
    let json = serde_json::to_string(&guid).unwrap();
    assert_eq!(json, "\"CAFE000000000000000000000000F00D\"");
    let back: Guid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, guid);
    assert!(serde_json::from_str::<Guid>("\"xyz\"").is_err());
}
