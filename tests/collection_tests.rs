use sovran_collection::{Collection, CollectionError, Key};
use test_log::test;

const SIMPLE: [(&str, &str); 4] = [
    ("keyA", "value a"),
    ("keyB", "value b"),
    ("keyC", "value c"),
    ("keyD", "value d"),
];

fn simple() -> Result<Collection<&'static str>, CollectionError> {
    let mut collection = Collection::new();
    for (key, value) in SIMPLE {
        collection.set(key, value)?;
    }
    Ok(collection)
}

fn complex() -> Result<Collection<&'static str>, CollectionError> {
    let mut collection = Collection::new();
    collection.set("keyA", "value a")?;
    collection.set(["keyB", "keyB2"], "value b")?;
    collection.set(["keyC", "keyC2", "keyC3"], "value c")?;
    collection.set(vec!["keyD", "keyD2", "keyD3", "keyD4"], "value d")?;
    Ok(collection)
}

fn keys(names: &[&str]) -> Vec<Key> {
    names.iter().map(|name| Key::from(*name)).collect()
}

#[test]
fn test_empty_collection() -> Result<(), CollectionError> {
    let collection = Collection::<String>::new();

    assert_eq!(collection.size()?, 0);
    assert_eq!(collection.len()?, 0);
    assert!(collection.is_empty()?);
    assert_eq!(collection.get("foo")?, None);
    assert!(!collection.has("foo")?);
    assert!(collection.values()?.is_empty());
    assert!(collection.keys()?.is_empty());

    Ok(())
}

#[test]
fn test_simple_data() -> Result<(), CollectionError> {
    let collection = simple()?;

    assert_eq!(collection.size()?, SIMPLE.len());
    assert_eq!(collection.keys()?, keys(&["keyA", "keyB", "keyC", "keyD"]));
    assert_eq!(
        collection.values()?,
        vec!["value a", "value b", "value c", "value d"]
    );
    assert_ne!(collection.get("keyC")?, collection.get("keyB")?);
    assert!(collection.has("keyC")?);
    assert!(!collection.has("keyX")?);

    Ok(())
}

#[test]
fn test_complex_data() -> Result<(), CollectionError> {
    let collection = complex()?;

    assert_eq!(collection.size()?, 4);
    assert_eq!(
        collection.keys()?,
        keys(&[
            "keyA", "keyB", "keyB2", "keyC", "keyC2", "keyC3", "keyD", "keyD2", "keyD3", "keyD4",
        ])
    );
    assert_eq!(
        collection.values()?,
        vec!["value a", "value b", "value c", "value d"]
    );

    // Aliases share one value
    assert_eq!(collection.get("keyC")?, collection.get("keyC3")?);
    assert_eq!(collection.get("keyC2")?, Some(&"value c"));
    assert_ne!(collection.get("keyC")?, collection.get("keyB")?);

    assert!(collection.has("keyC2")?);
    assert!(!collection.has("keyX")?);
    assert!(collection.has(["a", "b", "keyC", "d"])?);
    assert!(!collection.has(["a", "b", "c", "d"])?);

    Ok(())
}

#[test]
fn test_get_probes_candidates_from_last() -> Result<(), CollectionError> {
    let collection = complex()?;

    assert_eq!(collection.get(["keyA", "keyB"])?, Some(&"value b"));
    assert_eq!(collection.get(["keyB", "keyA"])?, Some(&"value a"));
    assert_eq!(collection.get(["keyA", "missing"])?, Some(&"value a"));
    assert_eq!(collection.get(["missing", "other"])?, None);

    Ok(())
}

#[test]
fn test_get_skips_falsy_values() -> Result<(), CollectionError> {
    let mut collection = Collection::with_default("fallback".to_string());
    collection.set("empty", String::new())?;
    collection.set("full", "data".to_string())?;

    // Bound, but falsy
    assert!(collection.has("empty")?);
    assert_eq!(collection.get("empty")?.map(String::as_str), Some("fallback"));
    assert_eq!(
        collection.get(["full", "empty"])?.map(String::as_str),
        Some("data")
    );

    // get_bound only looks at bindings
    assert_eq!(collection.get_bound("empty")?.map(String::as_str), Some(""));
    assert_eq!(
        collection.get_bound(["full", "empty"])?.map(String::as_str),
        Some("")
    );
    assert_eq!(
        collection.get_bound("nope")?.map(String::as_str),
        Some("fallback")
    );

    Ok(())
}

#[test]
fn test_default_value() -> Result<(), CollectionError> {
    let mut collection = Collection::with_default(99);
    assert_eq!(collection.default_value(), Some(&99));
    assert_eq!(collection.get("missing")?, Some(&99));
    assert!(!collection.has("missing")?);

    collection.set("zero", 0)?;
    assert_eq!(collection.get("zero")?, Some(&99));

    collection.clear()?;
    assert_eq!(collection.get("anything")?, Some(&99));

    Ok(())
}

#[test]
fn test_size_counts_set_calls() -> Result<(), CollectionError> {
    let mut collection = Collection::new();
    for i in 0..25 {
        let aliases: Vec<String> = (0..=i % 4).map(|j| format!("k{}-{}", i, j)).collect();
        collection.set(aliases, i)?;
    }

    assert_eq!(collection.size()?, 25);
    assert_eq!(collection.values()?, (0..25).collect::<Vec<_>>());
    assert!(collection.keys()?.len() > 25);

    Ok(())
}

#[test]
fn test_every_visits_all() -> Result<(), CollectionError> {
    let collection = complex()?;

    let mut seen = Vec::new();
    let all = collection.every(|value, index, values| {
        assert_eq!(values[index], *value);
        seen.push(*value);
        true
    })?;

    assert!(all);
    assert_eq!(seen, collection.values()?);

    Ok(())
}

#[test]
fn test_every_stops_at_first_false() -> Result<(), CollectionError> {
    let collection = simple()?;

    let mut calls = 0;
    let all = collection.every(|value, _, _| {
        calls += 1;
        *value != "value c"
    })?;

    assert!(!all);
    // "value c" sits at index 2
    assert_eq!(calls, 3);

    Ok(())
}

#[test]
fn test_every_on_empty_is_true() -> Result<(), CollectionError> {
    let collection = Collection::<i32>::new();
    assert!(collection.every(|_, _, _| false)?);
    Ok(())
}

#[test]
fn test_for_each_and_map() -> Result<(), CollectionError> {
    let collection = complex()?;

    let mut indices = Vec::new();
    let mut seen = Vec::new();
    collection.for_each(|value, index, values| {
        assert_eq!(values.len(), 4);
        indices.push(index);
        seen.push(*value);
    })?;
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(seen, collection.values()?);

    let lengths = collection.map(|value, index, _| value.len() + index)?;
    assert_eq!(lengths, vec![7, 8, 9, 10]);

    let copied = collection.map(|value, _, _| *value)?;
    assert_eq!(copied, collection.values()?);

    let seen: Vec<_> = collection.iter()?.copied().collect();
    assert_eq!(seen, collection.values()?);

    Ok(())
}

#[test]
fn test_values_returns_a_copy() -> Result<(), CollectionError> {
    let collection = simple()?;

    let mut values = collection.values()?;
    values.clear();
    values.push("intruder");

    assert_eq!(collection.size()?, 4);
    assert_eq!(collection.values()?[0], "value a");

    Ok(())
}

#[test]
fn test_default_implementation() -> Result<(), CollectionError> {
    let mut collection: Collection<u8> = Default::default();
    assert!(collection.is_empty()?);
    assert_eq!(collection.default_value(), None);

    collection.set(7, 1)?;
    assert_eq!(collection.get(7)?, Some(&1));

    Ok(())
}

#[test]
fn test_error_display() {
    let destroyed = CollectionError::Destroyed;
    let invalid = CollectionError::InvalidKey("1.5 is not an integer".to_string());

    assert_eq!(format!("{}", destroyed), "Collection has been destroyed");
    assert_eq!(
        format!("{}", invalid),
        "Invalid key type: 1.5 is not an integer"
    );
    assert!(format!("{:?}", destroyed).contains("Destroyed"));
}
