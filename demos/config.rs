use keyed_json::{CodecConfig, KeyedCodec, Shape};

fn main() -> Result<(), keyed_json::Error> {
    let config = CodecConfig::from_json(
        br#"{"field": "inventory", "onUnknownKey": "skip", "strategy": "shadow"}"#,
    )?;
    println!("config = {config:?}");

    let codec = KeyedCodec::<Shape>::from_config(config)?;
    let map = codec.decode(br#"{"inventory": {"Hexagon": [6], "Star": [5]}}"#)?;
    println!("decoded = {map:?}");
    println!("encoded = {}", String::from_utf8_lossy(&codec.encode(&map)));
    Ok(())
}
