//! Property-based tests over the public API.
//!
//! These check the ordering and provenance invariants on generated inputs:
//! body order equals source order, positions are strictly monotonic, and the
//! unordered view is order-stable within each kind bucket.

use proptest::prelude::*;

use protosyn::ast::{MessageItem, ProtoItem};
use protosyn::{ParseOptions, interpret_unordered, parse};

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn build_message(names: &[String]) -> String {
    let mut source = String::from("syntax = \"proto3\";\nmessage M {\n");
    for (i, name) in names.iter().enumerate() {
        source.push_str(&format!("  int32 {} = {};\n", name, i + 1));
    }
    source.push_str("}\n");
    source
}

proptest! {
    #[test]
    fn body_order_equals_source_order(names in proptest::collection::vec(field_name(), 1..8)) {
        let source = build_message(&names);
        let proto = parse(&source, &ParseOptions::default()).unwrap();
        let message = match &proto.body[0] {
            ProtoItem::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        };
        let parsed: Vec<String> = message
            .body
            .iter()
            .map(|item| match item {
                MessageItem::Field(f) => f.name.clone(),
                other => panic!("expected field, got {:?}", other),
            })
            .collect();
        prop_assert_eq!(parsed, names);
    }

    #[test]
    fn node_start_offsets_strictly_increase(names in proptest::collection::vec(field_name(), 2..8)) {
        let source = build_message(&names);
        let proto = parse(&source, &ParseOptions::default()).unwrap();
        let message = match &proto.body[0] {
            ProtoItem::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        };
        let offsets: Vec<usize> = message
            .body
            .iter()
            .map(|item| match item {
                MessageItem::Field(f) => f.meta.start.offset,
                other => panic!("expected field, got {:?}", other),
            })
            .collect();
        for pair in offsets.windows(2) {
            prop_assert!(pair[0] < pair[1], "offsets must strictly increase: {:?}", offsets);
        }
    }

    #[test]
    fn unordered_view_is_order_stable(names in proptest::collection::vec(field_name(), 1..8)) {
        let source = build_message(&names);
        let proto = parse(&source, &ParseOptions::default()).unwrap();
        let unordered = interpret_unordered(&proto);
        let bucket: Vec<String> = unordered.body.messages[0]
            .body
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect();
        prop_assert_eq!(bucket, names);
    }

    #[test]
    fn field_numbers_round_trip_as_text(numbers in proptest::collection::vec(1u32..100_000, 1..6)) {
        let mut source = String::from("syntax = \"proto3\";\nmessage M {\n");
        for (i, n) in numbers.iter().enumerate() {
            source.push_str(&format!("  int32 f{} = {};\n", i, n));
        }
        source.push_str("}\n");
        let proto = parse(&source, &ParseOptions::default()).unwrap();
        let message = match &proto.body[0] {
            ProtoItem::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        };
        let parsed: Vec<String> = message
            .body
            .iter()
            .map(|item| match item {
                MessageItem::Field(f) => f.number.clone(),
                other => panic!("expected field, got {:?}", other),
            })
            .collect();
        let expected: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
        prop_assert_eq!(parsed, expected);
    }
}
