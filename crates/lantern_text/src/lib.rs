#![doc = include_str!("../README.md")]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]

use std::borrow::Cow;
use std::fmt;
use std::ops::{self, Deref, DerefMut};
use std::str::FromStr;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub mod color;
mod into_text;
#[cfg(test)]
mod tests;

pub use color::Color;
pub use into_text::IntoText;

/// Formatted text in the JSON text component format.
///
/// This is what servers put in the `description` of a status response, and
/// what the client renders as the message of the day in its server list.
///
/// For more information, see the relevant [Minecraft Wiki article].
///
/// [Minecraft Wiki article]: https://minecraft.wiki/w/Raw_JSON_text_format
///
/// # Examples
///
/// ```
/// use lantern_text::{Color, IntoText, Text};
///
/// let motd = "A ".into_text() + "Lantern".color(Color::GOLD).bold() + " server";
///
/// assert_eq!(motd.to_string(), "A Lantern server");
/// assert_eq!(motd.to_legacy_lossy(), "A §6§lLantern§r server");
/// ```
#[derive(Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Text(Box<TextInner>);

/// Text data and formatting.
#[derive(Clone, PartialEq, Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInner {
    #[serde(flatten)]
    pub content: TextContent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// A resource location such as `minecraft:uniform`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Cow<'static, str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertion: Option<Cow<'static, str>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Text>,
}

/// What a text component displays, before its children.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum TextContent {
    /// Literal text.
    Text { text: Cow<'static, str> },
    /// A translation key resolved by the client, with arguments for its
    /// `%s` slots.
    Translate {
        translate: Cow<'static, str>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        with: Vec<Text>,
    },
    /// A score holder's value in a scoreboard objective.
    ScoreboardValue { score: ScoreboardValueContent },
    /// The names of the entities matched by a target selector.
    EntityNames {
        selector: Cow<'static, str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        separator: Option<Text>,
    },
    /// The key currently bound to a control, e.g. `key.jump`.
    Keybind { keybind: Cow<'static, str> },
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScoreboardValueContent {
    pub name: Cow<'static, str>,
    pub objective: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Cow<'static, str>>,
}

impl Default for TextContent {
    fn default() -> Self {
        Self::Text { text: "".into() }
    }
}

#[allow(clippy::self_named_constructors)]
impl Text {
    /// Plain, unformatted text.
    pub fn text(plain: impl Into<Cow<'static, str>>) -> Self {
        Self::from_content(TextContent::Text { text: plain.into() })
    }

    pub fn translate(key: impl Into<Cow<'static, str>>, with: impl Into<Vec<Text>>) -> Self {
        Self::from_content(TextContent::Translate {
            translate: key.into(),
            with: with.into(),
        })
    }

    pub fn score(
        name: impl Into<Cow<'static, str>>,
        objective: impl Into<Cow<'static, str>>,
        value: Option<Cow<'static, str>>,
    ) -> Self {
        Self::from_content(TextContent::ScoreboardValue {
            score: ScoreboardValueContent {
                name: name.into(),
                objective: objective.into(),
                value,
            },
        })
    }

    pub fn selector(selector: impl Into<Cow<'static, str>>, separator: Option<Text>) -> Self {
        Self::from_content(TextContent::EntityNames {
            selector: selector.into(),
            separator,
        })
    }

    pub fn keybind(keybind: impl Into<Cow<'static, str>>) -> Self {
        Self::from_content(TextContent::Keybind {
            keybind: keybind.into(),
        })
    }

    fn from_content(content: TextContent) -> Self {
        Self(Box::new(TextInner {
            content,
            ..Default::default()
        }))
    }

    /// Returns `true` if rendering this text produces no characters.
    pub fn is_empty(&self) -> bool {
        let own_empty = match &self.content {
            TextContent::Text { text } => text.is_empty(),
            TextContent::Translate { translate, .. } => translate.is_empty(),
            TextContent::ScoreboardValue { score } => {
                score.name.is_empty() || score.objective.is_empty()
            }
            TextContent::EntityNames { selector, .. } => selector.is_empty(),
            TextContent::Keybind { keybind } => keybind.is_empty(),
        };

        own_empty && self.extra.iter().all(Text::is_empty)
    }

    /// Writes the unformatted contents of this text and its children, depth
    /// first. Content the client resolves on its own (translations, scores,
    /// selectors, keybinds) is written as a readable placeholder.
    pub fn write_plain<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match &self.content {
            TextContent::Text { text } => w.write_str(text)?,
            TextContent::Translate { translate, with } => {
                w.write_str(translate)?;

                if !with.is_empty() {
                    w.write_char('[')?;
                    for (i, arg) in with.iter().enumerate() {
                        if i > 0 {
                            w.write_str(", ")?;
                        }
                        arg.write_plain(w)?;
                    }
                    w.write_char(']')?;
                }
            }
            TextContent::ScoreboardValue { score } => match &score.value {
                Some(value) => w.write_str(value)?,
                None => write!(w, "score[{}, {}]", score.name, score.objective)?,
            },
            TextContent::EntityNames { selector, .. } => w.write_str(selector)?,
            TextContent::Keybind { keybind } => write!(w, "[{keybind}]")?,
        }

        for child in &self.extra {
            child.write_plain(w)?;
        }

        Ok(())
    }

    /// The unformatted contents of this text. Same as the [`Display`]
    /// implementation.
    ///
    /// [`Display`]: fmt::Display
    pub fn to_plain(&self) -> String {
        let mut s = String::new();
        let _ = self.write_plain(&mut s);
        s
    }

    /// Renders this text with legacy formatting codes (`§` followed by a
    /// color or style code), which is what pre-1.7 clients and most server
    /// list tooling understand.
    ///
    /// Only literal text is rendered. RGB colors are replaced with the closest
    /// named color.
    pub fn to_legacy_lossy(&self) -> String {
        let mut out = String::new();
        let mut current = Style::default();
        self.write_legacy(&mut out, &Style::default(), &mut current);
        out
    }

    fn write_legacy(&self, out: &mut String, parent: &Style, current: &mut Style) {
        let style = parent.inherit(self);

        if let TextContent::Text { text } = &self.content {
            if !text.is_empty() {
                current.transition_to(&style, out);
                out.push_str(text);
            }
        }

        for child in &self.extra {
            child.write_legacy(out, &style, current);
        }
    }
}

/// The effective formatting at some point of a text tree.
#[derive(Clone, PartialEq, Default)]
struct Style {
    color: Option<Color>,
    obfuscated: bool,
    bold: bool,
    strikethrough: bool,
    underlined: bool,
    italic: bool,
}

impl Style {
    fn inherit(&self, txt: &Text) -> Self {
        Self {
            color: match txt.color {
                Some(Color::Reset) => None,
                Some(color) => Some(color),
                None => self.color,
            },
            obfuscated: txt.obfuscated.unwrap_or(self.obfuscated),
            bold: txt.bold.unwrap_or(self.bold),
            strikethrough: txt.strikethrough.unwrap_or(self.strikethrough),
            underlined: txt.underlined.unwrap_or(self.underlined),
            italic: txt.italic.unwrap_or(self.italic),
        }
    }

    fn flags(&self) -> [(bool, char); 5] {
        [
            (self.obfuscated, 'k'),
            (self.bold, 'l'),
            (self.strikethrough, 'm'),
            (self.underlined, 'n'),
            (self.italic, 'o'),
        ]
    }

    fn write_codes(&self, out: &mut String) {
        if let Some(code) = self.color.and_then(Color::legacy_code) {
            out.push('§');
            out.push(code);
        }

        for (on, code) in self.flags() {
            if on {
                out.push('§');
                out.push(code);
            }
        }
    }

    /// Writes the codes that turn `self` into `next`, then becomes `next`.
    fn transition_to(&mut self, next: &Self, out: &mut String) {
        if self == next {
            return;
        }

        let removes_color = self.color.is_some() && next.color.is_none();
        let removes_flag = self
            .flags()
            .into_iter()
            .zip(next.flags())
            .any(|((was, _), (is, _))| was && !is);

        if removes_color || removes_flag {
            // Styles can only be turned off by resetting everything.
            out.push_str("§r");
            next.write_codes(out);
        } else if self.color != next.color {
            // A color code clears the active styles too.
            next.write_codes(out);
        } else {
            for ((is, code), (was, _)) in next.flags().into_iter().zip(self.flags()) {
                if is && !was {
                    out.push('§');
                    out.push(code);
                }
            }
        }

        *self = next.clone();
    }
}

impl Deref for Text {
    type Target = TextInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Text {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: IntoText<'static>> ops::Add<T> for Text {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        self.add_child(rhs)
    }
}

impl<T: IntoText<'static>> ops::AddAssign<T> for Text {
    fn add_assign(&mut self, rhs: T) {
        self.extra.push(rhs.into_text());
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            fmt::Debug::fmt(&self.0, f)
        } else {
            write!(f, "{:?}", self.to_plain())
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_plain(f)
    }
}

impl FromStr for Text {
    type Err = serde_json::Error;

    /// Parses a JSON text component. An empty string is an empty text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(Text::default())
        } else {
            serde_json::from_str(s)
        }
    }
}

/// Every key a text component object may carry. Content keys are resolved in
/// the order the client checks them.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawText {
    text: Option<Cow<'static, str>>,
    translate: Option<Cow<'static, str>>,
    #[serde(default)]
    with: Vec<Text>,
    score: Option<ScoreboardValueContent>,
    selector: Option<Cow<'static, str>>,
    separator: Option<Text>,
    keybind: Option<Cow<'static, str>>,
    color: Option<Color>,
    font: Option<Cow<'static, str>>,
    bold: Option<bool>,
    italic: Option<bool>,
    underlined: Option<bool>,
    strikethrough: Option<bool>,
    obfuscated: Option<bool>,
    insertion: Option<Cow<'static, str>>,
    #[serde(default)]
    extra: Vec<Text>,
}

impl From<RawText> for TextInner {
    fn from(raw: RawText) -> Self {
        let content = if let Some(text) = raw.text {
            TextContent::Text { text }
        } else if let Some(translate) = raw.translate {
            TextContent::Translate {
                translate,
                with: raw.with,
            }
        } else if let Some(score) = raw.score {
            TextContent::ScoreboardValue { score }
        } else if let Some(selector) = raw.selector {
            TextContent::EntityNames {
                selector,
                separator: raw.separator,
            }
        } else if let Some(keybind) = raw.keybind {
            TextContent::Keybind { keybind }
        } else {
            TextContent::default()
        };

        Self {
            content,
            color: raw.color,
            font: raw.font,
            bold: raw.bold,
            italic: raw.italic,
            underlined: raw.underlined,
            strikethrough: raw.strikethrough,
            obfuscated: raw.obfuscated,
            insertion: raw.insertion,
            extra: raw.extra,
        }
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl<'de> Visitor<'de> for TextVisitor {
            type Value = Text;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a text component")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(Text::text(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Text::text(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Text::text(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Text::text(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Text::text(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Text::text(v))
            }

            // The first element is the parent of the rest.
            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let Some(mut res) = seq.next_element::<Text>()? else {
                    return Ok(Text::default());
                };

                while let Some(child) = seq.next_element::<Text>()? {
                    res += child;
                }

                Ok(res)
            }

            fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let raw = RawText::deserialize(MapAccessDeserializer::new(map))?;
                Ok(Text(Box::new(raw.into())))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}
