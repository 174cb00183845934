//! Property-based tests for the round-trip guarantees.
//!
//! Every property runs against a schema-driven `Resource`, so the slot,
//! cardinality, language-map and vault layers are all exercised together.

use ldslot::{
    Candidate, Capability, LiteralKind, Node, PropertyDecl, Registry, Resource, Slot, TypeSchema,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const OBJECT: Capability = Capability::new("Object");

const TYPES: &[Candidate] = &[Candidate::Reference, Candidate::Literal(LiteralKind::String)];
const REFERENCE_FIRST: &[Candidate] = &[Candidate::Reference, Candidate::Literal(LiteralKind::String)];
const STRING_FIRST: &[Candidate] = &[Candidate::Literal(LiteralKind::String), Candidate::Reference];
const SCORE: &[Candidate] = &[Candidate::Literal(LiteralKind::Float)];
const WHEN: &[Candidate] = &[Candidate::Literal(LiteralKind::DateTime)];
const ATTACHMENT: &[Candidate] = &[Candidate::Node(OBJECT), Candidate::Reference];

const PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::non_functional("type", TYPES),
    PropertyDecl::non_functional("actor", REFERENCE_FIRST),
    PropertyDecl::non_functional("summary", STRING_FIRST),
    PropertyDecl::non_functional("name", STRING_FIRST).with_language_map(),
    PropertyDecl::functional("score", SCORE),
    PropertyDecl::functional("published", WHEN),
    PropertyDecl::non_functional("attachment", ATTACHMENT),
];

static THING: TypeSchema = TypeSchema {
    name: "Thing",
    groups: &[PROPERTIES],
};

fn registry() -> Registry {
    let mut registry = Registry::new();
    let _ = registry.register("Thing", OBJECT, || Box::new(Resource::new(&THING)));
    registry
}

fn read(value: &Value) -> Resource {
    Resource::from_value(&THING, value, &registry()).expect("input should deserialize")
}

// =============================================================================
// Strategies
// =============================================================================

fn reference() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_map(|path| format!("https://example.com/{path}"))
}

fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,12}"
}

fn timestamp() -> impl Strategy<Value = String> {
    (1970u32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}Z"),
    )
}

fn opaque() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn document() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec(reference(), 0..4),
        prop::collection::vec(plain_text(), 0..3),
        prop::collection::btree_map("[a-z]{2}", plain_text(), 0..3),
        prop::option::of(-1.0e12f64..1.0e12f64),
        prop::option::of(timestamp()),
        prop::collection::btree_map("x-[a-z]{1,6}", opaque(), 0..3),
        prop::collection::vec(opaque(), 0..3),
    )
        .prop_map(|(actors, names, name_map, score, published, unknown, summaries)| {
            let mut doc = Map::new();
            doc.insert("type".to_owned(), json!("Thing"));
            doc.insert("actor".to_owned(), json!(actors));
            doc.insert("name".to_owned(), json!(names));
            doc.insert("nameMap".to_owned(), json!(name_map));
            doc.insert("summary".to_owned(), Value::Array(summaries));
            if let Some(score) = score {
                doc.insert("score".to_owned(), json!(score));
            }
            if let Some(published) = published {
                doc.insert("published".to_owned(), json!(published));
            }
            doc.extend(unknown);
            Value::Object(doc)
        })
}

// =============================================================================
// Round trip
// =============================================================================

proptest! {
    /// Deserialize(Serialize(O)) = O
    #[test]
    fn prop_object_round_trip(doc in document()) {
        let mut original = read(&doc);
        let out = original.serialize().expect("serialize");
        prop_assert_eq!(read(&out), original);
    }

    /// A lone element that is itself a sequence is not mistaken for the list.
    #[test]
    fn prop_sole_sequence_element_round_trip(items in prop::collection::vec(opaque(), 0..4)) {
        let input = json!({"type": "Thing", "summary": [Value::Array(items)]});
        let mut thing = read(&input);
        prop_assert_eq!(thing.non_functional("summary").map(|s| s.len()), Some(1));
        let out = thing.serialize().expect("serialize");
        prop_assert_eq!(&out, &input);
        prop_assert_eq!(read(&out), thing);
    }

    /// Undeclared keys come back exactly as they went in.
    #[test]
    fn prop_unknown_values_preserved(key in "x-[a-z]{1,8}", value in opaque()) {
        let input = json!({"type": "Thing", key.clone(): value});
        let mut thing = read(&input);
        prop_assert!(thing.vault().has(&key));
        prop_assert_eq!(thing.serialize().expect("serialize"), input);
    }

    /// Nested nodes serialize to what they were read from.
    #[test]
    fn prop_nested_round_trip(names in prop::collection::vec(plain_text(), 1..4)) {
        let inner: Vec<Value> = names
            .iter()
            .map(|name| json!({"type": "Thing", "summary": name}))
            .collect();
        let input = json!({"type": "Thing", "attachment": inner});
        let mut thing = read(&input);
        let attachment = thing.non_functional("attachment").expect("attachment");
        prop_assert!(attachment.iter().all(|s| s.is(Candidate::Node(OBJECT))));
        prop_assert_eq!(thing.serialize().expect("serialize"), input);
    }
}

// =============================================================================
// Cardinality
// =============================================================================

proptest! {
    /// One element serializes bare, and reads back as one element.
    #[test]
    fn prop_singleton_collapse(iri in reference()) {
        let mut thing = Resource::new(&THING);
        thing
            .non_functional_mut("actor")
            .expect("actor")
            .append_iri(iri.parse().expect("iri"));
        let out = thing.serialize().expect("serialize");
        prop_assert_eq!(&out["actor"], &json!(iri));

        let reread = read(&out);
        let actor = reread.non_functional("actor").expect("actor");
        prop_assert_eq!(actor.len(), 1);
        prop_assert_eq!(actor.get_iri(0).map(|i| i.as_str()), Some(iri.as_str()));
    }

    /// Append order is output order, and output order is read order.
    #[test]
    fn prop_order_preserved(iris in prop::collection::vec(reference(), 2..6)) {
        let mut thing = Resource::new(&THING);
        let actor = thing.non_functional_mut("actor").expect("actor");
        for iri in &iris {
            actor.append_iri(iri.parse().expect("iri"));
        }
        let out = thing.serialize().expect("serialize");
        prop_assert_eq!(&out["actor"], &json!(iris));

        let reread = read(&out);
        let actor = reread.non_functional("actor").expect("actor");
        let read_back: Vec<&str> = (0..actor.len())
            .filter_map(|i| actor.get_iri(i).map(|iri| iri.as_str()))
            .collect();
        prop_assert_eq!(read_back, iris.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Serializing twice never records the type name twice.
    #[test]
    fn prop_type_insertion_idempotent(rounds in 1usize..5) {
        let mut thing = Resource::new(&THING);
        let first = thing.serialize().expect("serialize");
        for _ in 0..rounds {
            prop_assert_eq!(&thing.serialize().expect("serialize"), &first);
        }
        prop_assert_eq!(thing.types(), vec!["Thing"]);
    }
}

// =============================================================================
// Resolution
// =============================================================================

proptest! {
    /// A string that is both a plain string and a reference always resolves
    /// to the earlier-declared candidate.
    #[test]
    fn prop_earlier_candidate_wins(iri in reference()) {
        let value = json!(iri);
        let registry = registry();
        for _ in 0..3 {
            let by_reference = Slot::resolve("actor", &value, REFERENCE_FIRST, &registry)
                .expect("resolve");
            let by_string = Slot::resolve("summary", &value, STRING_FIRST, &registry)
                .expect("resolve");
            prop_assert!(by_reference.is(Candidate::Reference));
            prop_assert!(by_string.is(Candidate::Literal(LiteralKind::String)));
        }
    }

    /// Date-times read back to the same instant and text.
    #[test]
    fn prop_date_time_round_trip(text in timestamp()) {
        let mut thing = read(&json!({"type": "Thing", "published": text}));
        let published = thing.functional("published").and_then(|p| p.get());
        prop_assert!(published.is_some_and(|p| p.is(Candidate::Literal(LiteralKind::DateTime))));
        prop_assert_eq!(&thing.serialize().expect("serialize")["published"], &json!(text));
    }
}
