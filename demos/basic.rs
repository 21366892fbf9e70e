use keyed_json::{GameData, KeyedCodec, KeyedMap, Shape};

fn main() -> Result<(), keyed_json::Error> {
    let codec = KeyedCodec::<Shape>::builder().pretty(true).build()?;

    let data = GameData {
        objects: KeyedMap::from([
            (Shape::Circle, vec![1, 2, 3]),
            (Shape::Line, vec![4, 5, 6]),
            (Shape::Triangle, vec![7, 8, 9]),
        ]),
    };

    // map only
    let bytes = codec.encode(&data.objects);
    println!("{}", String::from_utf8_lossy(&bytes));

    let back = codec.decode(&bytes)?;
    println!("circle   = {:?}", back.get(&Shape::Circle));
    println!("triangle = {:?}", back.get(&Shape::Triangle));

    // whole document
    let bytes = codec.encode_document(&data)?;
    let again: GameData = codec.decode_document(&bytes)?;
    println!("round trip ok? {}", again == data);

    // the shape a naive encoder would produce is refused
    let naive = br#"{"objects": ["Circle", [1, 2, 3]]}"#;
    match codec.decode(naive) {
        Ok(map) => println!("unexpected: {map:?}"),
        Err(e) => println!("rejected: {e}"),
    }
    Ok(())
}
