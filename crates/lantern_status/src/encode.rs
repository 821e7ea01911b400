use serde_json::{json, Value};

use crate::{StatusRecord, StatusResponse};

/// Builds the JSON a server would send for `response`.
///
/// The sample is left out when empty, as are the favicon and mod list when
/// absent. Decoding the output with [`decode`](crate::decode) gives back an
/// equal [`StatusResponse`].
pub fn encode(response: &StatusResponse) -> String {
    let StatusRecord {
        version,
        players,
        description,
        favicon,
    } = &response.status;

    let mut json = json!({
        "version": {
            "name": version.name,
            "protocol": version.protocol,
        },
        "players": {
            "max": players.max,
            "online": players.online,
        },
        "description": description,
    });

    if !players.sample.is_empty() {
        json["players"]["sample"] = players
            .sample
            .iter()
            .map(|player| json!({ "id": player.id, "name": player.name }))
            .collect();
    }

    if let Some(favicon) = favicon {
        json["favicon"] = Value::String(favicon.to_data_uri());
    }

    if let Some(mod_list) = &response.mod_list {
        let mods: Vec<Value> = mod_list
            .mods
            .iter()
            .map(|entry| json!({ "modid": entry.mod_id, "version": entry.version }))
            .collect();

        json["modinfo"] = json!({
            "type": mod_list.kind,
            "modList": mods,
        });
    }

    json.to_string()
}
