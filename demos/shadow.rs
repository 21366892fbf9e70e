use keyed_json::{GameData, JsonGameData, UnknownKeyPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{
      "objects": {
        "Circle": [1, 2, 3],
        "Square": [4, 5, 6],
        "Triangle": [7, 8, 9]
      }
    }"#;

    // parse into the string-keyed mirror, then convert
    let wire: JsonGameData = serde_json::from_str(input)?;
    let data = GameData::try_from(wire)?;
    for (shape, values) in data.objects.labeled() {
        println!("{shape:<8} {values:?}");
    }

    // and back out again
    let out = serde_json::to_string_pretty(&JsonGameData::from(&data))?;
    println!("{out}");

    // lenient conversion drops labels we don't know
    let wire: JsonGameData = serde_json::from_str(r#"{"objects": {"Star": [1], "Line": [2]}}"#)?;
    let data = wire.into_game_data(UnknownKeyPolicy::Skip)?;
    println!("kept {} of 2 entries", data.objects.len());
    Ok(())
}
