//! Document-level behaviour against the ActivityStreams vocabulary.

use std::collections::BTreeSet;

use ldslot::{Candidate, LiteralKind, Node, Resource, Slot};
use ldslot_streams::capabilities::{COLLECTION, IMAGE, LINK, OBJECT};
use ldslot_streams::{from_document, to_document, ACTIVITYSTREAMS_CONTEXT};
use proptest::prelude::*;
use serde_json::{json, Value};

fn read(doc: &Value) -> Box<dyn Node> {
    from_document(doc).expect("document should deserialize")
}

fn resource<'a>(node: &'a (dyn Node + 'static)) -> &'a Resource {
    node.downcast_ref::<Resource>().expect("vocabulary types are resources")
}

fn without_context(mut doc: Value) -> Value {
    if let Value::Object(map) = &mut doc {
        map.remove("@context");
    }
    doc
}

#[test]
fn reference_actor() {
    let mut like = read(&json!({"type": "Like", "actor": "https://example.com/alice"}));
    let actor = resource(like.as_ref()).non_functional("actor").expect("actor");
    assert_eq!(actor.len(), 1);
    assert!(actor.is(0, Candidate::Reference));
    let out = like.serialize().expect("serialize");
    assert_eq!(out["actor"], json!("https://example.com/alice"));
}

#[test]
fn name_map_lookup() {
    let note = read(&json!({"type": "Note", "nameMap": {"en": "Hi", "fr": "Salut"}}));
    let map = resource(note.as_ref()).language_map("name").expect("nameMap");
    assert_eq!(map.get("fr"), "Salut");
    assert_eq!(map.get("de"), "");
    assert_eq!(map.languages(), BTreeSet::from(["en", "fr"]));
}

#[test]
fn two_actors_stay_a_sequence() {
    let actors = json!(["https://a.example/", "https://b.example/"]);
    let mut like = read(&json!({"type": "Like", "actor": actors.clone()}));
    let actor = resource(like.as_ref()).non_functional("actor").expect("actor");
    assert_eq!(actor.len(), 2);
    assert_eq!(actor.get_iri(0).map(|i| i.as_str()), Some("https://a.example/"));
    assert_eq!(actor.get_iri(1).map(|i| i.as_str()), Some("https://b.example/"));
    assert_eq!(like.serialize().expect("serialize")["actor"], actors);
}

#[test]
fn unfamiliar_keys_round_trip() {
    let doc = json!({"type": "Note", "unfamiliarKey": {"nested": [1, 2, 3]}});
    let mut note = read(&doc);
    assert!(resource(note.as_ref()).vault().has("unfamiliarKey"));
    assert_eq!(note.serialize().expect("serialize"), doc);
}

#[test]
fn programmatic_objects_gain_their_type_once() {
    let mut note = ldslot_streams::new_object("Note").expect("Note is registered");
    let first = to_document(note.as_mut()).expect("first");
    let second = to_document(note.as_mut()).expect("second");
    assert_eq!(first, json!({"@context": ACTIVITYSTREAMS_CONTEXT, "type": "Note"}));
    assert_eq!(first, second);
}

#[test]
fn create_note_round_trips() {
    let doc = json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "id": "https://social.example/alice/posts/1/activity",
        "type": "Create",
        "actor": "https://social.example/alice",
        "to": "https://www.w3.org/ns/activitystreams#Public",
        "cc": "https://social.example/alice/followers",
        "published": "2024-05-01T12:30:00Z",
        "object": {
            "id": "https://social.example/alice/posts/1",
            "type": "Note",
            "attributedTo": "https://social.example/alice",
            "content": "<p>Hello, world</p>",
            "contentMap": {"en": "<p>Hello, world</p>"},
            "published": "2024-05-01T12:30:00Z",
            "tag": [{
                "type": "Mention",
                "href": "https://other.example/bob",
                "name": "@bob@other.example"
            }],
            "attachment": {
                "type": "Image",
                "mediaType": "image/png",
                "url": "https://social.example/media/1.png",
                "name": "A cat"
            },
            "sensitive": false
        }
    });
    let mut create = read(&doc);
    {
        let create = resource(create.as_ref());
        let object = create.non_functional("object").expect("object");
        assert!(object.is(0, Candidate::Node(OBJECT)));
        let note = object.get_node(0).and_then(|n| n.downcast_ref::<Resource>()).expect("note");
        assert_eq!(note.type_name(), "Note");
        assert!(note.vault().has("sensitive"));
        let tag = note.non_functional("tag").expect("tag");
        assert!(tag.is(0, Candidate::Node(LINK)));
        let attachment = note.non_functional("attachment").expect("attachment");
        let image = attachment.get_node(0).and_then(|n| n.downcast_ref::<Resource>());
        let media_type = image
            .and_then(|i| i.functional("mediaType"))
            .and_then(|m| m.get())
            .and_then(Slot::as_media_type);
        assert_eq!(media_type, Some("image/png"));
    }
    assert_eq!(to_document(create.as_mut()).expect("serialize"), doc);
}

#[test]
fn capabilities_constrain_embedding() {
    let doc = json!({
        "type": "Person",
        "icon": [
            {"type": "Image", "url": "https://example.com/a.png"},
            {"type": "Note", "content": "not an image"},
            {"type": "Link", "href": "https://example.com/b.png"}
        ],
        "outbox": {"type": "OrderedCollection", "totalItems": 3},
        "inbox": "https://example.com/inbox"
    });
    let mut person = read(&doc);
    {
        let person = resource(person.as_ref());
        let icon = person.non_functional("icon").expect("icon");
        assert!(icon.is(0, Candidate::Node(IMAGE)));
        assert!(icon.get(1).is_some_and(Slot::is_unrecognized));
        assert!(icon.is(2, Candidate::Node(LINK)));
        let outbox = person.functional("outbox").and_then(|o| o.get());
        assert!(outbox.is_some_and(|o| o.is(Candidate::Node(COLLECTION))));
        let inbox = person.functional("inbox").and_then(|i| i.get());
        assert!(inbox.is_some_and(|i| i.is(Candidate::Reference)));
    }
    assert_eq!(person.serialize().expect("serialize"), doc);
}

#[test]
fn literal_properties_resolve_to_their_kinds() {
    let doc = json!({
        "type": "Place",
        "name": "Fresno Area",
        "latitude": 36.75,
        "longitude": 119.7667,
        "radius": 15,
        "units": "miles",
        "duration": "PT2H30M",
        "startTime": "2024-05-01T12:30Z"
    });
    let mut place = read(&doc);
    {
        let place = resource(place.as_ref());
        let float = |name| place.functional(name).and_then(|f| f.get()).and_then(Slot::as_float);
        assert_eq!(float("latitude"), Some(36.75));
        assert_eq!(float("radius"), Some(15.0));
        let duration = place.functional("duration").and_then(|d| d.get());
        assert!(duration.is_some_and(|d| d.is(Candidate::Literal(LiteralKind::Duration))));
    }
    let out = place.serialize().expect("serialize");
    assert_eq!(out["radius"], json!(15));
    assert_eq!(out["duration"], json!("PT2H30M"));
    assert_eq!(out["startTime"], json!("2024-05-01T12:30:00Z"));
}

#[test]
fn link_literals() {
    let doc = json!({
        "type": "Link",
        "href": "https://example.com/doc.html",
        "hreflang": "en-GB",
        "mediaType": "text/html; charset=utf-8",
        "height": 100,
        "width": -1,
        "rel": ["canonical", "preview"]
    });
    let mut link = read(&doc);
    {
        let link = resource(link.as_ref());
        let hreflang = link.functional("hreflang").and_then(|h| h.get());
        assert_eq!(hreflang.and_then(Slot::as_language_tag), Some("en-GB"));
        let height = link.functional("height").and_then(|h| h.get());
        assert_eq!(height.and_then(Slot::as_non_negative_integer), Some(100));
        let width = link.functional("width").and_then(|w| w.get());
        assert!(width.is_some_and(Slot::is_unrecognized));
    }
    assert_eq!(link.serialize().expect("serialize"), doc);
}

#[test]
fn context_is_restored_not_duplicated() {
    let doc = json!({"@context": ACTIVITYSTREAMS_CONTEXT, "type": "Tombstone", "formerType": "Note"});
    let mut tombstone = read(&doc);
    let out = to_document(tombstone.as_mut()).expect("serialize");
    assert_eq!(out, doc);
    assert_eq!(without_context(out), without_context(doc));
}

fn activity_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Create", "Update", "Delete", "Follow", "Like", "Announce"])
}

proptest! {
    /// Every activity type reads back what it wrote.
    #[test]
    fn prop_activity_round_trip(
        kind in activity_type(),
        actors in prop::collection::vec("[a-z]{1,8}", 1..4),
        summary in "[A-Za-z ]{0,16}",
    ) {
        let actors: Vec<String> = actors
            .iter()
            .map(|a| format!("https://example.com/{a}"))
            .collect();
        let actor = if actors.len() == 1 { json!(actors[0]) } else { json!(actors) };
        let doc = json!({"type": kind, "actor": actor, "summary": summary});
        let mut node = read(&doc);
        prop_assert_eq!(node.type_name(), kind);
        prop_assert_eq!(node.serialize().expect("serialize"), doc);
    }
}
