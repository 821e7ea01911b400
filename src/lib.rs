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


#[cfg(feature = "status")]
pub use lantern_status as status;
pub use lantern_text as text;

/// Contains the most frequently used items.
pub mod prelude {
    #[cfg(feature = "status")]
    pub use lantern_status::{
        decode, encode, DecodeError, Favicon, ModEntry, ModListExtension, PlayerInfo,
        SampledPlayer, StatusRecord, StatusResponse, VersionInfo,
    };
    pub use lantern_text::{Color, IntoText, Text};
}
