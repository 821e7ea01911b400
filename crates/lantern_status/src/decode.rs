use lantern_text::Text;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    DecodeError, Favicon, ModEntry, ModEntryFault, ModListExtension, PlayerInfo, SampledPlayer,
    StatusRecord, StatusResponse, VersionInfo,
};

/// Decodes the JSON of a status response.
///
/// `players.sample`, `favicon` and `modinfo` are optional. Everything else is
/// required, and nothing is returned unless every present field is valid.
///
/// # Examples
///
/// ```
/// let raw = r#"{
///     "version": {"name": "1.8", "protocol": 47},
///     "players": {"max": 20, "online": 5},
///     "description": {"text": "Hi"}
/// }"#;
///
/// let response = lantern_status::decode(raw).unwrap();
///
/// assert_eq!(response.status.version.protocol, 47);
/// assert_eq!(response.status.description.to_string(), "Hi");
/// assert!(response.mod_list.is_none());
/// ```
pub fn decode(raw: &str) -> Result<StatusResponse, DecodeError> {
    let json: Value = serde_json::from_str(raw).map_err(DecodeError::MalformedJson)?;
    let root = Object::root(&json)?;

    let version = root.object("version")?;
    let version = VersionInfo {
        name: version.string("name")?.to_owned(),
        protocol: version.i32("protocol")?,
    };

    let players = root.object("players")?;
    let players = PlayerInfo {
        max: players.count("max")?,
        online: players.count("online")?,
        sample: decode_sample(&players)?,
    };

    let description = root.require("description")?;
    let description = Text::deserialize(description)
        .map_err(|_| DecodeError::TypeMismatch(root.path("description")))?;

    let favicon = match root.get("favicon") {
        None => None,
        Some(Value::String(uri)) => Some(Favicon::from_data_uri(uri)?),
        Some(_) => return Err(DecodeError::TypeMismatch(root.path("favicon"))),
    };

    let mod_list = decode_mod_list(&root)?;

    Ok(StatusResponse {
        status: StatusRecord {
            version,
            players,
            description,
            favicon,
        },
        mod_list,
    })
}

fn decode_sample(players: &Object) -> Result<Vec<SampledPlayer>, DecodeError> {
    let Some(sample) = players.get("sample") else {
        return Ok(vec![]);
    };

    let path = players.path("sample");
    let entries = sample
        .as_array()
        .ok_or_else(|| DecodeError::TypeMismatch(path.clone()))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry = Object::new(format!("{path}[{i}]"), entry)?;

            Ok(SampledPlayer {
                id: entry.string("id")?.to_owned(),
                name: entry.string("name")?.to_owned(),
            })
        })
        .collect()
}

fn decode_mod_list(root: &Object) -> Result<Option<ModListExtension>, DecodeError> {
    let Some(modinfo) = root.get("modinfo") else {
        return Ok(None);
    };

    let modinfo = Object::new(root.path("modinfo"), modinfo)?;
    let kind = modinfo.string("type")?.to_owned();

    let list = modinfo.require("modList")?;
    let list = list
        .as_array()
        .ok_or_else(|| DecodeError::TypeMismatch(modinfo.path("modList")))?;

    let mods = list
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            decode_mod_entry(entry)
                .map_err(|reason| DecodeError::MalformedModEntry { index, reason })
        })
        .collect::<Result<_, _>>()?;

    Ok(Some(ModListExtension { kind, mods }))
}

fn decode_mod_entry(entry: &Value) -> Result<ModEntry, ModEntryFault> {
    let entry = entry.as_object().ok_or(ModEntryFault::NotAnObject)?;

    let field = |key: &'static str| match entry.get(key) {
        None => Err(ModEntryFault::Missing(key)),
        Some(Value::String(s)) if s.is_empty() => Err(ModEntryFault::Empty(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ModEntryFault::NotAString(key)),
    };

    Ok(ModEntry {
        mod_id: field("modid")?,
        version: field("version")?,
    })
}

/// A JSON object along with its path from the root, for error messages.
struct Object<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Object<'a> {
    fn root(value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self {
                path: String::new(),
                map,
            }),
            _ => Err(DecodeError::TypeMismatch("<root>".to_owned())),
        }
    }

    fn new(path: String, value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { path, map }),
            _ => Err(DecodeError::TypeMismatch(path)),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    fn require(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.get(key).ok_or_else(|| DecodeError::MissingField(self.path(key)))
    }

    fn object(&self, key: &str) -> Result<Object<'a>, DecodeError> {
        Object::new(self.path(key), self.require(key)?)
    }

    fn string(&self, key: &str) -> Result<&'a str, DecodeError> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| DecodeError::TypeMismatch(self.path(key)))
    }

    fn i32(&self, key: &str) -> Result<i32, DecodeError> {
        self.require(key)?
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| DecodeError::TypeMismatch(self.path(key)))
    }

    /// A non-negative count that fits in a `u32`.
    fn count(&self, key: &str) -> Result<u32, DecodeError> {
        self.require(key)?
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| DecodeError::TypeMismatch(self.path(key)))
    }
}
