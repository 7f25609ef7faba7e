// Integration tests for type signature parsing and layout

use contract_abi::{parse_type, AbiError, Kind, Type, WORD_SIZE};

fn parse(signature: &str) -> Type {
    parse_type(signature).unwrap_or_else(|e| panic!("failed to parse {}: {}", signature, e))
}

#[test]
fn test_uint256() {
    let ty = parse("uint256");
    assert_eq!(ty.kind(), Kind::UInt);
    assert_eq!(ty.width(), 256);
    assert!(!ty.is_dynamic());
    assert_eq!(ty.encoded_size(), 32);
}

#[test]
fn test_bytes_and_fixed_bytes() {
    let dynamic = parse("bytes");
    assert_eq!(dynamic.kind(), Kind::Bytes);
    assert!(dynamic.is_dynamic());

    let fixed = parse("bytes32");
    assert_eq!(fixed.kind(), Kind::FixedBytes);
    assert_eq!(fixed.width(), 32);
    assert!(!fixed.is_dynamic());
}

#[test]
fn test_address_slice() {
    let ty = parse("address[]");
    assert_eq!(ty.kind(), Kind::Slice);
    assert_eq!(ty.element().map(Type::kind), Some(Kind::Address));
    assert!(ty.is_dynamic());
    assert_eq!(ty.encoded_size(), WORD_SIZE);
}

#[test]
fn test_multi_dimensional_array_nests_in_declaration_order() {
    let ty = parse("uint256[2][3]");
    assert_eq!(ty.kind(), Kind::Array);
    assert_eq!(ty.array_size(), Some(3));

    let inner = ty.element().expect("outer array has an element");
    assert_eq!(inner.kind(), Kind::Array);
    assert_eq!(inner.array_size(), Some(2));
    assert_eq!(inner.element().map(Type::canonical), Some("uint256"));

    assert_eq!(ty.encoded_size(), 192);
    assert_eq!(ty.encoded_words(), 6);
    assert!(!ty.is_dynamic());
}

#[test]
fn test_mixed_slice_and_array_suffixes() {
    let ty = parse("bool[][4]");
    assert_eq!(ty.kind(), Kind::Array);
    assert_eq!(ty.element().map(Type::kind), Some(Kind::Slice));
    assert!(ty.is_dynamic());
    assert_eq!(ty.encoded_size(), WORD_SIZE);
}

#[test]
fn test_named_tuple() {
    let ty = parse("tuple(a uint256,b bytes)");
    assert_eq!(ty.kind(), Kind::Tuple);
    assert_eq!(ty.fields().len(), 2);
    assert_eq!(ty.fields()[0].name, "a");
    assert_eq!(ty.fields()[0].ty.kind(), Kind::UInt);
    assert_eq!(ty.fields()[1].name, "b");
    assert_eq!(ty.fields()[1].ty.kind(), Kind::Bytes);
    assert!(ty.is_dynamic());
    assert_eq!(ty.canonical(), "(uint256,bytes)");
}

#[test]
fn test_static_tuple_array_size() {
    let ty = parse("tuple(x uint256, y address[2])[3]");
    assert!(!ty.is_dynamic());
    assert_eq!(ty.canonical(), "(uint256,address[2])[3]");
    assert_eq!(ty.encoded_size(), 3 * (32 + 64));
}

#[test]
fn test_whitespace_between_tokens() {
    let ty = parse(" tuple ( a uint8 ,\n\tb  string ) ");
    assert_eq!(ty.canonical(), "(uint8,string)");
}

#[test]
fn test_empty_tuple_is_an_arity_error() {
    assert!(matches!(parse_type("tuple()"), Err(AbiError::TupleArity)));
    assert!(matches!(parse_type("()"), Err(AbiError::TupleArity)));
}

#[test]
fn test_uint7_is_a_width_error() {
    match parse_type("uint7") {
        Err(AbiError::BadWidth { ty, .. }) => assert_eq!(ty, "uint7"),
        other => panic!("expected width error, got {:?}", other),
    }
}

#[test]
fn test_tuple_must_be_closed() {
    assert!(matches!(
        parse_type("tuple(a uint256"),
        Err(AbiError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        parse_type("tuple(a uint256 b uint256)"),
        Err(AbiError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        parse_type("tuple(a uint256,)"),
        Err(AbiError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        parse_type("tuple a uint256"),
        Err(AbiError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_malformed_array_sizes() {
    for signature in [
        "uint256[",
        "uint256[3",
        "uint256[x]",
        "uint256[3,]",
        "uint256[99999999999999999999999]",
    ] {
        assert!(
            matches!(parse_type(signature), Err(AbiError::BadArraySize { .. })),
            "{} should fail with a bad array size",
            signature
        );
    }
}

#[test]
fn test_array_lengths_are_limited_to_32_bits() {
    let widest = parse("uint8[4294967295]");
    assert_eq!(widest.array_size(), Some(4294967295));
    assert_eq!(widest.encoded_size(), 4294967295 * WORD_SIZE);

    for signature in [
        "uint256[4294967296]",
        "uint256[4294967296][4294967296]",
        "uint256[18446744073709551615]",
    ] {
        assert!(
            matches!(parse_type(signature), Err(AbiError::BadArraySize { .. })),
            "{} should fail with a bad array size",
            signature
        );
    }
}

#[test]
fn test_static_size_overflow_is_rejected() {
    assert!(matches!(
        parse_type("uint256[4294967295][4294967295][4294967295]"),
        Err(AbiError::BadArraySize { .. })
    ));

    // Each field fits on its own; the tuple total does not.
    let half = "uint256[536870912][536870912]";
    let tuple = format!("tuple(a {},b {})", half, half);
    assert!(matches!(
        parse_type(&tuple),
        Err(AbiError::BadArraySize { .. })
    ));
}

#[test]
fn test_unknown_and_invalid_input() {
    assert!(matches!(parse_type("uint256$"), Err(AbiError::Lex { found: '$', .. })));
    assert!(matches!(parse_type("mapping"), Err(AbiError::UnknownType(_))));
    assert!(matches!(parse_type(""), Err(AbiError::UnexpectedToken { .. })));
    assert!(matches!(parse_type("[]"), Err(AbiError::UnexpectedToken { .. })));
}

#[test]
fn test_trailing_input_is_rejected() {
    match parse_type("uint256 extra") {
        Err(AbiError::UnexpectedToken { found, expected }) => {
            assert_eq!(found, "extra");
            assert_eq!(expected, "end of input");
        }
        other => panic!("expected trailing token error, got {:?}", other),
    }
    // The array suffix must follow the base type directly.
    assert!(parse_type("uint256 [2]").is_err());
}

#[test]
fn test_canonical_round_trip() {
    let signatures = [
        "uint256",
        "int8[]",
        "byte",
        "bytes",
        "function[2]",
        "address[][3]",
        "tuple(a uint256,b bytes)",
        "tuple(inner tuple(x bool, y string[])[2], z bytes32)[]",
        "tuple(a tuple(b tuple(c uint24)))",
    ];
    for signature in signatures {
        let ty = parse(signature);
        let reparsed = parse(ty.canonical());
        assert_eq!(reparsed, ty, "round trip failed for {}", signature);
        assert_eq!(reparsed.canonical(), ty.canonical());
        assert_eq!(reparsed.kind(), ty.kind());
        assert_eq!(reparsed.is_dynamic(), ty.is_dynamic());
        assert_eq!(reparsed.encoded_size(), ty.encoded_size());
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let signature = "tuple(owner address, amounts uint128[4], memo string)[2]";
    let first = parse(signature);
    let second = parse(signature);
    assert_eq!(first, second);
    let names: Vec<_> = first.element().unwrap().fields().iter().map(|f| &f.name).collect();
    let again: Vec<_> = second.element().unwrap().fields().iter().map(|f| &f.name).collect();
    assert_eq!(names, again);
}

#[test]
fn test_scalars_and_dynamic_types_report_one_word() {
    for signature in [
        "bool",
        "int64",
        "address",
        "function",
        "bytes4",
        "string",
        "bytes",
        "uint8[]",
        "string[2]",
        "tuple(a string)",
    ] {
        assert_eq!(parse(signature).encoded_size(), WORD_SIZE, "{}", signature);
    }
}

#[test]
fn test_descriptors_are_shareable_across_threads() {
    let ty = std::sync::Arc::new(parse("tuple(a uint256[2], b address)[2]"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ty = ty.clone();
            std::thread::spawn(move || ty.encoded_size())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2 * (64 + 32));
    }
}
