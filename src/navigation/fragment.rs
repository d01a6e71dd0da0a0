//! Fragment extraction from page locations.

use percent_encoding::percent_decode_str;
use url::Url;

/// Return the decoded fragment of `location`, if it carries a non-empty one.
///
/// Accepts absolute URLs (`https://host/docs#player-onevent`) as well as relative
/// references (`/docs#player-onevent`, `#player-onevent`).
pub fn fragment_of(location: &str) -> Option<String> {
    let raw = match Url::parse(location) {
        Ok(url) => url.fragment().map(str::to_owned),
        Err(_) => location.split_once('#').map(|(_, fragment)| fragment.to_owned()),
    }?;

    if raw.is_empty() {
        return None;
    }

    Some(percent_decode_str(&raw).decode_utf8_lossy().into_owned())
}
