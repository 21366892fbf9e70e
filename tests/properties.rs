use keyed_json::{EnumKey, KeyedCodec, KeyedMap, Shape, Strategy as Layout};
use proptest::prelude::*;
use serde_json::Value;

fn shape() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::ALL)
}

fn keyed_map() -> impl Strategy<Value = KeyedMap<Shape>> {
    prop::collection::hash_map(shape(), prop::collection::vec(any::<i64>(), 0..16), 0..6)
        .prop_map(KeyedMap::from)
}

fn codec(strategy: Layout, pretty: bool) -> KeyedCodec<Shape> {
    KeyedCodec::builder()
        .strategy(strategy)
        .pretty(pretty)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn roundtrip_identity(map in keyed_map(), pretty in any::<bool>()) {
        for strategy in [Layout::Tagged, Layout::Shadow] {
            let c = codec(strategy, pretty);
            prop_assert_eq!(c.decode(&c.encode(&map)).unwrap(), map.clone());
        }
    }

    #[test]
    fn field_is_always_an_object(map in keyed_map()) {
        let bytes = KeyedCodec::<Shape>::new().encode(&map);
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();
        let object = parsed["objects"].as_object().unwrap();
        prop_assert_eq!(object.len(), map.len());
        for (key, values) in map.iter() {
            let encoded: Vec<i64> = object[key.label()]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_i64().unwrap())
                .collect();
            prop_assert_eq!(&encoded, values);
        }
    }

    #[test]
    fn strategies_agree(map in keyed_map(), pretty in any::<bool>()) {
        prop_assert_eq!(
            codec(Layout::Tagged, pretty).encode(&map),
            codec(Layout::Shadow, pretty).encode(&map)
        );
    }

    #[test]
    fn formatting_does_not_change_content(map in keyed_map()) {
        let compact = codec(Layout::Tagged, false).encode(&map);
        let pretty = codec(Layout::Tagged, true).encode(&map);
        let a: Value = serde_json::from_slice(&compact).unwrap();
        let b: Value = serde_json::from_slice(&pretty).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn labels_are_unique() {
    assert_eq!(keyed_json::key::duplicate_label::<Shape>(), None);
}
