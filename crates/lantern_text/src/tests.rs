use pretty_assertions::assert_eq;

use super::*;

#[test]
fn plain_string_is_text() {
    let txt: Text = serde_json::from_str(r#""A Minecraft Server""#).unwrap();

    assert_eq!(txt, Text::text("A Minecraft Server"));
    assert_eq!(txt.to_string(), "A Minecraft Server");
}

#[test]
fn non_object_data_types() {
    let input = r#"["foo", true, false, 1.9E10, 9999]"#;
    let txt: Text = serde_json::from_str(input).unwrap();

    assert_eq!(txt, "foo".into_text() + true + false + 1.9E10 + 9999);
}

#[test]
fn empty_array_is_empty_text() {
    let txt: Text = serde_json::from_str("[]").unwrap();

    assert_eq!(txt, Text::default());
    assert!(txt.is_empty());
}

#[test]
fn object_without_content_keeps_children() {
    let input = r#"{"extra":[{"text":"a","color":"red"},"b"],"bold":true}"#;
    let txt: Text = serde_json::from_str(input).unwrap();

    assert_eq!(txt, ("".into_text() + "a".color(Color::RED) + "b").bold());
    assert_eq!(txt.to_string(), "ab");
}

#[test]
fn unknown_keys_are_ignored() {
    let input = r#"{"text":"hi","clickEvent":{"action":"open_url","value":"https://example.com"}}"#;
    let txt: Text = serde_json::from_str(input).unwrap();

    assert_eq!(txt, Text::text("hi"));
}

#[test]
fn bad_color_is_an_error() {
    assert!(Text::from_str(r#"{"text":"hi","color":"crimson"}"#).is_err());
    assert!(Text::from_str(r#"{"text":"hi","bold":"yes"}"#).is_err());
}

#[test]
fn empty_string_parses_to_default() {
    assert_eq!(Text::from_str("").unwrap(), Text::default());
}

#[test]
fn serialize_object_form() {
    let txt = "foo".color(Color::RED).bold();

    assert_eq!(
        serde_json::to_string(&txt).unwrap(),
        r#"{"text":"foo","color":"red","bold":true}"#
    );
}

#[test]
fn text_round_trip() {
    let before = "foo".color(Color::RED).bold()
        + ("bar".obfuscated().color(Color::rgb(1, 2, 3))
            + "baz".underlined().not_bold().italic().font("minecraft:uniform"));

    let json = serde_json::to_string_pretty(&before).unwrap();
    let after = Text::from_str(&json).unwrap();

    assert_eq!(before, after);
    assert_eq!(after.to_string(), "foobarbaz");
}

#[test]
fn translate() {
    let txt = Text::translate(
        "multiplayer.status.cannot_connect",
        ["arg1".into_text(), "arg2".into_text()],
    );
    let serialized = serde_json::to_string(&txt).unwrap();

    assert_eq!(
        serialized,
        r#"{"translate":"multiplayer.status.cannot_connect","with":[{"text":"arg1"},{"text":"arg2"}]}"#
    );
    assert_eq!(Text::from_str(&serialized).unwrap(), txt);
    assert_eq!(
        txt.to_string(),
        "multiplayer.status.cannot_connect[arg1, arg2]"
    );
}

#[test]
fn other_content_kinds() {
    let score = Text::from_str(r#"{"score":{"name":"@p","objective":"kills","value":"7"}}"#);
    assert_eq!(
        score.unwrap(),
        Text::score("@p", "kills", Some(Cow::from("7")))
    );

    let keybind = Text::from_str(r#"{"keybind":"key.jump"}"#).unwrap();
    assert_eq!(keybind, Text::keybind("key.jump"));
    assert_eq!(keybind.to_string(), "[key.jump]");

    let selector = Text::from_str(r#"{"selector":"@a","separator":"|"}"#).unwrap();
    assert_eq!(selector, Text::selector("@a", Some("|".into_text())));
}

#[test]
fn text_is_empty() {
    assert!(Text::default().is_empty());
    assert!(("".into_text() + "").is_empty());
    assert!(!("".into_text() + "x").is_empty());
    assert!(!Text::keybind("key.jump").is_empty());
}

#[test]
fn legacy_color_and_reset() {
    let txt = "Green bold ".bold().color(Color::GREEN)
        + "red".color(Color::RED)
        + "plain".not_bold().color(Color::Reset);

    assert_eq!(txt.to_legacy_lossy(), "§a§lGreen bold §c§lred§rplain");
}

#[test]
fn legacy_adds_only_new_styles() {
    let txt = "a".bold() + "b".italic();

    assert_eq!(txt.to_legacy_lossy(), "§la§ob");
}

#[test]
fn legacy_siblings_do_not_leak_style() {
    let txt = "A ".into_text() + "Lantern".color(Color::GOLD).bold() + " server";

    assert_eq!(txt.to_legacy_lossy(), "A §6§lLantern§r server");
}

#[test]
fn legacy_rgb_uses_nearest_code() {
    assert_eq!("x".color(Color::rgb(250, 80, 90)).to_legacy_lossy(), "§cx");
}
