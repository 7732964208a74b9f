use super::*;
use crate::table::SymbolTable;

const GUID_TEXT: &str = "CAFE000000000000000000000000F00D";

fn dataset(input: &str) -> Dataset {
    Dataset::parse(input, &SymbolTable::default())
}

fn resource_font(rows: &str) -> String {
    format!("{ESC}f{GUID_TEXT}{rows}")
}

#[test]
fn resource_font_with_color_and_underline() {
    let font = Font::parse(&dataset(&resource_font("|0,0,16711680,100|1"))).unwrap();
    assert!(!font.is_style);
    assert_eq!(font.guid.as_bytes()[0], 0xCA);
    assert_eq!(font.guid.as_bytes()[1], 0xFE);
    assert_eq!(font.guid.as_bytes()[14], 0xF0);
    assert_eq!(font.guid.as_bytes()[15], 0x0D);
    assert_eq!((font.color.r, font.color.g, font.color.b), (255, 0, 0));
    assert_eq!(font.color.k, 100);
    assert!(font.underline);
}

#[test]
fn resource_font_named_color() {
    let font = Font::parse(&dataset(&resource_font("|15|false"))).unwrap();
    assert_eq!(font.color.r, 255);
    assert!(!font.underline);
}

#[test]
fn style_font() {
    let font = Font::parse(&dataset(&format!("{ESC}f${GUID_TEXT}"))).unwrap();
    assert!(font.is_style);
    assert_eq!(font.guid, Guid::parse(GUID_TEXT).unwrap());
    assert!(!font.underline);
}

#[test]
fn rejects_non_font_value() {
    assert!(matches!(
        Font::parse(&dataset("invalid")),
        Err(PicError::InvalidFont(_))
    ));
    assert!(matches!(
        Font::parse(&dataset(&format!("{ESC}i{GUID_TEXT}"))),
        Err(PicError::InvalidFont(_))
    ));
    assert!(Font::parse(&Dataset::empty()).is_err());
}

#[test]
fn style_with_extra_rows_is_rejected() {
    let err = Font::parse(&dataset(&format!("{ESC}f${GUID_TEXT}|0|0"))).unwrap_err();
    assert!(matches!(
        err,
        PicError::InvalidFontSet {
            expected: 1,
            actual: 3
        }
    ));
}

#[test]
fn resource_with_wrong_row_count_is_rejected() {
    for rows in ["", "|0,0,0,100", "|0,0,0,100|0|extra"] {
        let err = Font::parse(&dataset(&resource_font(rows))).unwrap_err();
        assert!(
            matches!(err, PicError::InvalidFontSet { expected: 3, .. }),
            "rows {rows:?} gave {err}"
        );
    }
}

#[test]
fn guid_errors_propagate() {
    let err = Font::parse(&dataset(&format!("{ESC}fCAFE|0|0"))).unwrap_err();
    assert!(matches!(err, PicError::InvalidGuid(_)));
    let err = Font::parse(&dataset(&format!("{ESC}f$XYZ0000000000000000000000000000"))).unwrap_err();
    assert!(matches!(err, PicError::InvalidGuidChar('X')));
}

#[test]
fn color_and_underline_errors_propagate() {
    let err = Font::parse(&dataset(&resource_font("|1,2|0"))).unwrap_err();
    assert!(matches!(err, PicError::InvalidColorSet(_)));
    let err = Font::parse(&dataset(&resource_font("|0|maybe"))).unwrap_err();
    assert!(matches!(err, PicError::InvalidBool(_)));
}

#[test]
fn lone_dollar_is_not_a_style() {
    // "$" alone is a (malformed) resource GUID, not a style marker.
    let err = Font::parse(&dataset(&format!("{ESC}f$"))).unwrap_err();
    assert!(matches!(err, PicError::InvalidFontSet { expected: 3, .. }));
}

#[test]
fn default_font_is_unset_resource() {
    let font = Font::default();
    assert!(!font.is_style);
    assert!(font.guid.is_zero());
    assert!(!font.underline);
}

#[test]
fn bool_spellings() {
    for t in ["1", "t", "T", "TRUE", "true", "True"] {
        assert!(parse_bool(t).unwrap());
    }
    for f in ["0", "f", "F", "FALSE", "false", "False"] {
        assert!(!parse_bool(f).unwrap());
    }
    assert!(parse_bool("yes").is_err());
    assert!(parse_bool("").is_err());
}
