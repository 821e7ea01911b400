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
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    unreachable_pub,
    clippy::dbg_macro
)]

mod decode;
mod encode;
mod error;
pub mod favicon;
pub mod packet;

pub use decode::decode;
pub use encode::encode;
pub use error::{DecodeError, ModEntryFault};
pub use favicon::{Favicon, IconError};
pub use lantern_text::Text;
pub use packet::{PacketError, StatusResponsePacket};
use uuid::Uuid;

/// Everything a server returned in its status response.
///
/// This is the base [`StatusRecord`] every server sends, plus the mod list
/// that modded servers attach to it. Check [`StatusResponse::mod_list`] to
/// tell the two apart.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct StatusResponse {
    pub status: StatusRecord,
    pub mod_list: Option<ModListExtension>,
}

/// The decoded server status.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct StatusRecord {
    pub version: VersionInfo,
    pub players: PlayerInfo,
    /// The message of the day.
    pub description: Text,
    /// The server's icon. Always 64x64 pixels when present.
    pub favicon: Option<Favicon>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VersionInfo {
    /// The version name displayed by clients on a different protocol, e.g.
    /// `"1.20.1"` or `"Paper 1.20.1"`.
    pub name: String,
    pub protocol: i32,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct PlayerInfo {
    pub max: u32,
    /// Not guaranteed to be less than or equal to `max`.
    pub online: u32,
    /// A few of the players currently online, in the order the server listed
    /// them.
    pub sample: Vec<SampledPlayer>,
}

/// An entry of the player list shown when hovering over the player count.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct SampledPlayer {
    /// Usually a hyphenated UUID, but servers are free to put anything here.
    pub id: String,
    pub name: String,
}

impl SampledPlayer {
    /// Parses [`SampledPlayer::id`] as a UUID, if it is one.
    pub fn uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}

/// The `modinfo` block Forge servers add to their status response.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ModListExtension {
    /// The handshake type, `"FML"` on Forge servers.
    pub kind: String,
    /// Installed mods, in the order the server listed them.
    pub mods: Vec<ModEntry>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ModEntry {
    pub mod_id: String,
    pub version: String,
}
