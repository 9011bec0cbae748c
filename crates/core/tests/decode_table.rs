use cetable_core::decode::{decode_cheat_table, DecodeError};
use cetable_core::services::convert_table;
use cetable_core::TableError;

const SAMPLE: &str = include_str!("../../../data/person-player.xml");

#[test]
fn decodes_sample_table() {
    let table = decode_cheat_table(SAMPLE).expect("decode");
    assert_eq!(table.entries.len(), 2);
    assert_eq!(table.entry_count(), 4);

    let player = &table.entries[0];
    assert_eq!(player.id, "0");
    assert_eq!(player.description, "\"Player ->\"");
    assert_eq!(player.variable_type, None);
    assert_eq!(player.address, None);

    let children = player.children.as_ref().and_then(|c| c.entries.as_ref()).expect("children");
    assert_eq!(children.len(), 2);
    let health = &children[0];
    assert_eq!(health.variable_type.as_deref(), Some("4 Bytes"));
    assert_eq!(health.address.as_deref(), Some("14000000+1F0"));
    assert_eq!(health.offsets, Some(vec![vec!["10".to_string(), "0x2C".to_string()]]));
    assert!(children[1].is_auto_assembler_script());
}

#[test]
fn converts_sample_table_end_to_end() {
    let conversion = convert_table(SAMPLE, 5).expect("convert");
    assert_eq!(conversion.entry_count, 4);
    assert_eq!(conversion.top_level_count, 2);
    assert_eq!(conversion.flattened_count, 4);

    let ids: Vec<&str> = conversion.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "3"]);
    assert_eq!(conversion.rows[0].description, "Player ");
    assert_eq!(conversion.rows[1].description, "Player Health");
    assert_eq!(conversion.rows[1].sum_address, "0x140001F0");
    assert_eq!(conversion.rows[1].offsets, "0x10, 0x2C");
    assert_eq!(conversion.rows[2].sum_address, "0xA00");
}

#[test]
fn unparsable_markup_is_a_decode_error() {
    let err = decode_cheat_table("<CheatTable><CheatEntries>").unwrap_err();
    assert!(matches!(err, DecodeError::Xml(_)), "unexpected error: {err}");
}

#[test]
fn wrong_root_is_rejected() {
    let err = decode_cheat_table("<Table/>").unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedRoot(ref name) if name == "Table"));
}

#[test]
fn missing_top_level_entries_is_rejected() {
    let err = decode_cheat_table("<CheatTable/>").unwrap_err();
    assert!(matches!(err, DecodeError::MissingEntries));
}

#[test]
fn empty_top_level_entries_decode_to_empty_table() {
    let table = decode_cheat_table("<CheatTable><CheatEntries/></CheatTable>").unwrap();
    assert!(table.entries.is_empty());
}

#[test]
fn entry_without_id_is_rejected() {
    let xml = "<CheatTable><CheatEntries>\
               <CheatEntry><ID>1</ID></CheatEntry>\
               <CheatEntry><Description>x</Description></CheatEntry>\
               </CheatEntries></CheatTable>";
    let err = decode_cheat_table(xml).unwrap_err();
    assert!(matches!(err, DecodeError::MissingId { index: 1 }), "unexpected error: {err}");
}

#[test]
fn empty_nested_wrapper_fails_conversion_as_malformed() {
    let xml = "<CheatTable><CheatEntries>\
               <CheatEntry><ID>9</ID><Description>\"Group\"</Description><CheatEntries/></CheatEntry>\
               </CheatEntries></CheatTable>";
    match convert_table(xml, 5) {
        Err(TableError::MalformedTree { id }) => assert_eq!(id, "9"),
        other => panic!("expected MalformedTree, got {other:?}"),
    }
}

#[test]
fn decode_failures_surface_as_table_errors() {
    let err = convert_table("not xml", 5).unwrap_err();
    assert!(matches!(err, TableError::Decode(_)));
}

#[test]
fn text_split_by_comments_is_kept_whole() {
    let xml = "<CheatTable><CheatEntries>\
               <CheatEntry><ID>1</ID><Description>\"A <!--c--> B\"</Description>\
               <Address>10<!--x-->+5</Address>\
               <Offsets><Offset>1<?pi?>0</Offset></Offsets>\
               <CheatEntries><CheatEntry><ID>2</ID><Description>\"C\"</Description></CheatEntry>\
               </CheatEntries></CheatEntry>\
               </CheatEntries></CheatTable>";

    let table = decode_cheat_table(xml).expect("decode");
    let entry = &table.entries[0];
    assert_eq!(entry.description, "\"A  B\"");
    assert_eq!(entry.address.as_deref(), Some("10+5"));
    assert_eq!(entry.offsets, Some(vec![vec!["10".to_string()]]));

    let conversion = convert_table(xml, 5).expect("convert");
    assert_eq!(conversion.rows[0].description, "A  B");
    assert_eq!(conversion.rows[0].sum_address, "0x15");
    assert_eq!(conversion.rows[0].offsets, "0x10");
    assert_eq!(conversion.rows[1].description, "A  BC");
}
