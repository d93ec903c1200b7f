use crate::ast::literal::{format_hex, parse_address, parse_hex};
use crate::ast::{Line, Token};

#[test]
fn hex_round_trip() {
    for value in &[0, 0x10, 0xdead_beef, u32::MAX as u64, u64::MAX] {
        assert_eq!(parse_hex::<u64>(&format_hex(*value)), Some(*value));
    }

    assert_eq!(format_hex(u32::MAX as u64), "0xffffffff");
    assert_eq!(format_hex(u64::MAX), "0xffffffffffffffff");
}

#[test]
fn hex_prefixes() {
    assert_eq!(parse_hex::<u64>("0X1F"), Some(0x1F));
    assert_eq!(parse_hex::<u64>("$1f"), Some(0x1F));
    assert_eq!(parse_hex::<u64>("1f"), Some(0x1F));
    assert_eq!(parse_hex::<u64>("0x"), None);
    assert_eq!(parse_hex::<u32>("0x100000000"), None);
    assert_eq!(parse_hex::<u64>("0xg"), None);
}

#[test]
fn addresses() {
    assert_eq!(parse_address("0x1000"), Some(0x1000));
    assert_eq!(parse_address("$1000"), Some(0x1000));
    assert_eq!(parse_address("4096"), Some(0x1000));
    assert_eq!(parse_address("loc_1000"), None);
}

#[test]
fn line_display() {
    let tokens = vec![
        Token::instruction("jmp"),
        Token::separator(" "),
        Token::possible_address(format_hex(0x10), 0x10),
    ];
    let mut line = Line::new(None, tokens, None, 0x1000, &[0xF4, 0x10, 0, 0, 0]);

    assert_eq!(line.instr_text(), "jmp 0x10");
    assert_eq!(
        line.to_string(),
        "0000000000001000  f4 10 00 00 00              jmp 0x10"
    );

    line.set_label("loc_1000");
    assert!(line.to_string().starts_with("loc_1000:\n"));
}
